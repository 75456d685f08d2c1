use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic template a causal occurrence matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// basis + clue + result
    A,
    /// subject + basis + clue + result
    B,
    /// "…のは、basis + ため。": the result is the nominalized topic clause
    C,
    /// sentence-final "…ためだ。": the result comes from the context
    D,
    /// sentence-initial "そのため、": the basis comes from the context
    E,
}

impl Pattern {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spans the classifier produced for one clue occurrence.
///
/// `pattern == None` marks a rejected occurrence; all text fields are then
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub basis: String,
    pub result: String,
    pub subj: String,
    pub pattern: Option<Pattern>,
}

impl Candidate {
    pub fn new(
        basis: impl Into<String>,
        result: impl Into<String>,
        subj: impl Into<String>,
        pattern: Pattern,
    ) -> Self {
        Self {
            basis: basis.into(),
            result: result.into(),
            subj: subj.into(),
            pattern: Some(pattern),
        }
    }

    #[must_use]
    pub fn rejected() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.pattern.is_none()
    }

    /// Attach provenance; rejected candidates yield nothing
    pub fn into_causal(
        self,
        clue: &str,
        line: usize,
        file_path: &str,
        sentence: &str,
    ) -> Option<Causal> {
        let pattern = self.pattern?;
        Some(Causal {
            basis: self.basis,
            result: self.result,
            subj: self.subj,
            pattern,
            clue: clue.to_string(),
            line,
            file_path: file_path.to_string(),
            sentence: sentence.to_string(),
        })
    }
}

/// An extracted causal relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Causal {
    /// Cause clause
    pub basis: String,
    /// Effect clause
    pub result: String,
    /// Subject/topic qualifier, possibly empty
    pub subj: String,
    pub pattern: Pattern,
    /// Matched clue expression
    pub clue: String,
    /// 1-based line number of the sentence
    pub line: usize,
    pub file_path: String,
    /// Original sentence text
    pub sentence: String,
}

impl Causal {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
