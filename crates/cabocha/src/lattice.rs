//! Reader for CaboCha's lattice output format (`cabocha -f1`).
//!
//! ```text
//! * 0 1D 0/1 0.000000
//! 円高	名詞,一般,*,*,*,*,円高,エンダカ,エンダカ
//! の	助詞,連体化,*,*,*,*,の,ノ,ノ
//! * 1 -1D 0/1 0.000000
//! ...
//! EOS
//! ```

use crate::error::{CabochaError, Result};
use crate::types::{Chunk, Morpheme};
use once_cell::sync::Lazy;
use regex::Regex;

static CHUNK_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\s+(\d+)\s+(-?\d+)D(?:\s+(\d+)/(\d+))?").unwrap_or_else(|e| {
        unreachable!("chunk header pattern is a valid regex: {e}")
    })
});

const EOS: &str = "EOS";

struct PendingChunk {
    index: usize,
    link: Option<usize>,
    head: usize,
    func: usize,
    morphemes: Vec<Morpheme>,
}

impl PendingChunk {
    fn finish(self) -> Chunk {
        Chunk::new(self.index, self.link, self.head, self.func, self.morphemes)
    }
}

/// Parse the lattice of a single sentence.
///
/// Reading stops at the first `EOS`; a missing terminator is accepted so
/// truncated process output still yields the chunks that were emitted.
pub fn parse_lattice(text: &str) -> Result<Vec<Chunk>> {
    let mut sentences = parse_sentences(text, true)?;
    Ok(sentences.pop().unwrap_or_default())
}

/// Parse a lattice holding any number of `EOS`-terminated sentences
pub fn parse_lattice_document(text: &str) -> Result<Vec<Vec<Chunk>>> {
    parse_sentences(text, false)
}

fn parse_sentences(text: &str, first_only: bool) -> Result<Vec<Vec<Chunk>>> {
    let mut sentences = Vec::new();
    let mut chunks: Vec<Chunk> = Vec::new();
    let mut pending: Option<PendingChunk> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if line == EOS {
            if let Some(chunk) = pending.take() {
                chunks.push(chunk.finish());
            }
            validate_links(&chunks, line_no)?;
            sentences.push(std::mem::take(&mut chunks));
            if first_only {
                return Ok(sentences);
            }
            continue;
        }

        if line.starts_with('*') {
            if let Some(chunk) = pending.take() {
                chunks.push(chunk.finish());
            }
            pending = Some(parse_header(line, line_no, chunks.len())?);
            continue;
        }

        let Some(current) = pending.as_mut() else {
            return Err(CabochaError::malformed(
                line_no,
                "token line before any chunk header",
            ));
        };
        current.morphemes.push(parse_token(line, line_no)?);
    }

    if let Some(chunk) = pending.take() {
        chunks.push(chunk.finish());
    }
    if !chunks.is_empty() {
        let last_line = text.lines().count();
        validate_links(&chunks, last_line)?;
        sentences.push(chunks);
    }

    Ok(sentences)
}

fn parse_header(line: &str, line_no: usize, expected: usize) -> Result<PendingChunk> {
    let caps = CHUNK_HEADER
        .captures(line)
        .ok_or_else(|| CabochaError::malformed(line_no, format!("bad chunk header `{line}`")))?;

    let number = |idx: usize| -> Result<Option<i64>> {
        caps.get(idx)
            .map(|m| {
                m.as_str()
                    .parse::<i64>()
                    .map_err(|e| CabochaError::malformed(line_no, e.to_string()))
            })
            .transpose()
    };

    let index = number(1)?.unwrap_or_default();
    if index != expected as i64 {
        return Err(CabochaError::malformed(
            line_no,
            format!("chunk id {index} out of sequence (expected {expected})"),
        ));
    }

    let link = number(2)?
        .filter(|link| *link >= 0)
        .map(|link| link as usize);

    Ok(PendingChunk {
        index: expected,
        link,
        head: number(3)?.unwrap_or_default().max(0) as usize,
        func: number(4)?.unwrap_or_default().max(0) as usize,
        morphemes: Vec::new(),
    })
}

fn parse_token(line: &str, line_no: usize) -> Result<Morpheme> {
    let mut columns = line.split('\t');
    let surface = columns.next().unwrap_or_default();
    let features = columns
        .next()
        .ok_or_else(|| CabochaError::malformed(line_no, format!("token without features `{line}`")))?;
    if surface.is_empty() {
        return Err(CabochaError::malformed(line_no, "empty token surface"));
    }
    Ok(Morpheme::new(surface, features))
}

fn validate_links(chunks: &[Chunk], line_no: usize) -> Result<()> {
    for chunk in chunks {
        if chunk.morphemes.is_empty() {
            return Err(CabochaError::malformed(
                line_no,
                format!("chunk {} has no tokens", chunk.index),
            ));
        }
        if let Some(link) = chunk.link {
            if link >= chunks.len() || link == chunk.index {
                return Err(CabochaError::malformed(
                    line_no,
                    format!("chunk {} links to invalid chunk {link}", chunk.index),
                ));
            }
        }
    }
    Ok(())
}
