//! Span builders: cut basis, result, subject and koto-result text out of a
//! dependency-chunk sequence around the chunk carrying a clue.

use crate::normalize::{remove_koto, remove_particle};
use inga_cabocha::{depends_on, join_surfaces, Chunk, Morpheme};

/// Endings that mark a chunk as a topic/frame for the following clause
const TOPIC_MARKERS: &[&str] = &["は、", "で、", "は"];

const FRAME_MARKER: &str = "で、";

/// Indices of every chunk whose surface ends with `clue`, ascending
pub fn core_ids(chunks: &[Chunk], clue: &str) -> Vec<usize> {
    chunks
        .iter()
        .filter(|c| !clue.is_empty() && c.ends_with(clue))
        .map(|c| c.index)
        .collect()
}

/// First index of the contiguous run of chunks directly before `target`
/// that all depend on it, never going below `floor`. Returns `target`
/// when the preceding chunk does not depend on it.
pub(crate) fn clause_start(chunks: &[Chunk], target: usize, floor: usize) -> usize {
    let mut start = target;
    for idx in (floor..target).rev() {
        if !depends_on(chunks, idx, target) {
            break;
        }
        start = idx;
    }
    start
}

/// True for a bare noun phrase ending in "で、" that nothing depends on
/// ("食品業界で、"). Such a chunk is the topic of the clause, not its cause.
pub(crate) fn is_frame(chunks: &[Chunk], core: usize) -> bool {
    let Some(chunk) = chunks.get(core).filter(|c| c.ends_with(FRAME_MARKER)) else {
        return false;
    };
    let mut content = chunk
        .morphemes
        .iter()
        .filter(|m| !m.is_particle() && !m.is_symbol())
        .peekable();
    content.peek().is_some()
        && content.all(Morpheme::is_noun)
        && !chunks.iter().any(|c| c.link == Some(core))
}

/// Basis clause of one clue occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BasisSpan {
    /// First chunk of the clause
    pub start: usize,
    /// Clause text before nominalizer removal
    pub raw: String,
    /// Normalized clause text
    pub text: String,
}

pub(crate) fn basis_span(
    chunks: &[Chunk],
    clue: &str,
    core: usize,
    floor: usize,
) -> Option<BasisSpan> {
    let chunk = chunks.get(core).filter(|c| c.ends_with(clue))?;
    let start = clause_start(chunks, core, floor.min(core));

    let mut raw = join_surfaces(&chunks[start..core]);
    raw.push_str(chunk.surface().strip_suffix(clue).unwrap_or_default());
    let text = remove_koto(&raw);

    Some(BasisSpan { start, raw, text })
}

/// Cause clause leading up to the clue chunk; empty when `core` does not
/// carry `clue` or nothing precedes it in the clause
pub fn basis(chunks: &[Chunk], clue: &str, core: usize) -> String {
    basis_span(chunks, clue, core, 0)
        .map(|span| span.text)
        .unwrap_or_default()
}

/// How a quotative chunk ("…と") closes a result span
enum Quotation {
    /// Formal-noun complement ("ものと"): drop the chunk
    Drop,
    /// Keep the quoted content without the particle
    Keep(String),
}

fn quotation(chunk: &Chunk) -> Option<Quotation> {
    let morphemes = &chunk.morphemes;
    let mut end = morphemes.len();
    while end > 0 && morphemes[end - 1].is_symbol() {
        end -= 1;
    }
    if end == 0 || !morphemes[end - 1].is_quotative() {
        return None;
    }

    let content = &morphemes[..end - 1];
    match content.last() {
        None => Some(Quotation::Drop),
        Some(last) if last.is_formal_noun() => Some(Quotation::Drop),
        Some(_) => Some(Quotation::Keep(
            content.iter().map(|m| m.surface.as_str()).collect(),
        )),
    }
}

/// Effect clause governed by the clue chunk.
///
/// The span runs from the chunk after `core` to the chunk `core` modifies
/// and stops early at the first quotative chunk, which introduces reported
/// or assumed content rather than the asserted effect. A sentence-final
/// last chunk keeps its punctuation; any other loses its trailing particle.
pub fn result_vp(chunks: &[Chunk], clue: &str, core: usize) -> String {
    let Some(chunk) = chunks.get(core).filter(|c| c.ends_with(clue)) else {
        return String::new();
    };
    let Some(target) = chunk.link.filter(|&t| t > core && t < chunks.len()) else {
        return String::new();
    };

    let first = core + 1;
    let mut end = target;
    let mut tail: Option<String> = None;
    for idx in first..=target {
        match quotation(&chunks[idx]) {
            None => continue,
            Some(Quotation::Drop) => {
                if idx == first {
                    return String::new();
                }
                end = idx - 1;
            }
            Some(Quotation::Keep(content)) => {
                end = idx;
                tail = Some(content);
            }
        }
        break;
    }

    let mut text = join_surfaces(&chunks[first..end]);
    match tail {
        Some(content) => text.push_str(&content),
        None => text.push_str(&remove_particle(&chunks[end])),
    }
    text
}

/// Noun phrase the adnominal clue chunk modifies: the following chunk plus
/// any chain of "…の" chunks leading into the head noun
pub fn result_np(chunks: &[Chunk], core: usize) -> String {
    let mut text = String::new();
    let mut idx = core + 1;
    while let Some(chunk) = chunks.get(idx) {
        let genitive = chunk.last_morpheme().is_some_and(|m| m.is_genitive());
        if genitive && idx + 1 < chunks.len() {
            text.push_str(chunk.surface());
            idx += 1;
            continue;
        }
        text.push_str(&remove_particle(chunk));
        break;
    }
    text
}

/// Topic-marked phrase preceding the causal clause, with its particle and
/// modifiers; empty when none precedes it
pub fn subject(chunks: &[Chunk], core: usize) -> String {
    if core >= chunks.len() {
        return String::new();
    }
    let start = clause_start(chunks, core, 0);
    subject_before(chunks, core, start)
}

pub(crate) fn subject_before(chunks: &[Chunk], core: usize, start: usize) -> String {
    (0..start.min(chunks.len()))
        .rev()
        .find(|&idx| {
            let chunk = &chunks[idx];
            TOPIC_MARKERS.iter().any(|m| chunk.ends_with(m)) && !depends_on(chunks, idx, core)
        })
        .map(|idx| join_surfaces(&chunks[clause_start(chunks, idx, 0)..=idx]))
        .unwrap_or_default()
}

/// Nominalized "…のは、" clause ending at chunk `koto`, marker included
pub fn koto_result(chunks: &[Chunk], koto: usize) -> String {
    if koto >= chunks.len() {
        return String::new();
    }
    join_surfaces(&chunks[clause_start(chunks, koto, 0)..=koto])
}
