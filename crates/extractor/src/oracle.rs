use crate::causal::Causal;
use crate::error::{ExtractError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Identity of one accepted candidate, as scored by an external classifier.
///
/// Written `<filePath>:<line>:<clue>` for a score that covers every
/// occurrence of the clue in the line, or `<filePath>:<line>:<clue>#<n>` for
/// the n-th occurrence (1-based, left to right).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateKey {
    pub file_path: String,
    pub line: usize,
    pub clue: String,
    pub occurrence: Option<usize>,
}

impl CandidateKey {
    pub fn new(file_path: impl Into<String>, line: usize, clue: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            clue: clue.into(),
            occurrence: None,
        }
    }

    #[must_use]
    pub fn with_occurrence(mut self, occurrence: usize) -> Self {
        self.occurrence = Some(occurrence);
        self
    }

    #[must_use]
    pub fn for_causal(causal: &Causal) -> Self {
        Self::new(causal.file_path.clone(), causal.line, causal.clue.clone())
    }

    /// The same key without its occurrence number
    #[must_use]
    pub fn per_line(&self) -> Self {
        Self {
            occurrence: None,
            ..self.clone()
        }
    }

    /// Parse `<filePath>:<line>:<clue>[#<n>]`; the path may itself contain colons
    pub fn parse(raw: &str) -> Option<Self> {
        let (rest, clue) = raw.rsplit_once(':')?;
        let (path, line) = rest.rsplit_once(':')?;
        let line = line.trim().parse().ok()?;

        let (clue, occurrence) = match clue.rsplit_once('#') {
            Some((text, n)) => (text, Some(n.parse::<usize>().ok().filter(|&n| n > 0)?)),
            None => (clue, None),
        };
        if clue.is_empty() {
            return None;
        }
        let key = Self::new(path, line, clue);
        Some(match occurrence {
            Some(n) => key.with_occurrence(n),
            None => key,
        })
    }
}

impl fmt::Display for CandidateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.clue)?;
        if let Some(n) = self.occurrence {
            write!(f, "#{n}")?;
        }
        Ok(())
    }
}

/// Scores candidates; `None` means the oracle has no opinion
pub trait ScoringOracle: Send + Sync {
    fn score(&self, key: &CandidateKey) -> Option<f64>;
}

/// Score table produced by an offline SVM run: `<key>\t<score>` per line
#[derive(Debug, Clone, Default)]
pub struct SvmScores {
    scores: HashMap<CandidateKey, f64>,
}

impl SvmScores {
    pub fn parse(text: &str) -> Result<Self> {
        let mut scores = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = |message: String| ExtractError::InvalidScores {
                line: idx + 1,
                message,
            };

            let (key, score) = line
                .rsplit_once('\t')
                .ok_or_else(|| invalid("expected `<key>\\t<score>`".to_string()))?;
            let key = CandidateKey::parse(key.trim())
                .ok_or_else(|| invalid(format!("bad candidate key `{key}`")))?;
            let score: f64 = score
                .trim()
                .parse()
                .map_err(|e| invalid(format!("bad score `{score}`: {e}")))?;
            if !score.is_finite() {
                return Err(invalid(format!("non-finite score `{score}`")));
            }
            scores.insert(key, score);
        }
        Ok(Self { scores })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ExtractError::read(path, e))?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ScoringOracle for SvmScores {
    /// Exact key first, then the per-line score of the same clue
    fn score(&self, key: &CandidateKey) -> Option<f64> {
        self.scores
            .get(key)
            .or_else(|| key.occurrence.and_then(|_| self.scores.get(&key.per_line())))
            .copied()
    }
}
