use crate::error::{ExtractError, Result};
use inga_cabocha::{pos, Chunk};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_CLUES: &str = include_str!("../data/clue_list.txt");
const DEFAULT_DEMONSTRATIVES: &str = include_str!("../data/demonstrative_list.txt");

/// How a clue relates its cause to the effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueKind {
    /// Clause connective ("ため、", "から、"); the effect is the following clause
    Connective,
    /// Adnominal clue ("による"); the effect is the noun phrase it modifies
    Adnominal,
    /// Sentence-final nominalizer ("ためだ。"); the effect is elsewhere
    Nominal,
    /// Sentence-initial demonstrative connective ("そのため、")
    Conjunctive,
}

impl ClueKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "connective" => Some(Self::Connective),
            "adnominal" => Some(Self::Adnominal),
            "nominal" => Some(Self::Nominal),
            "conjunctive" => Some(Self::Conjunctive),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connective => "connective",
            Self::Adnominal => "adnominal",
            Self::Nominal => "nominal",
            Self::Conjunctive => "conjunctive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub text: String,
    pub kind: ClueKind,
}

impl ClueEntry {
    pub fn new(text: impl Into<String>, kind: ClueKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Length in characters, used to order overlapping matches
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Ordered set of causal clue expressions
#[derive(Debug, Clone, Default)]
pub struct ClueTable {
    entries: Vec<ClueEntry>,
    by_text: HashMap<String, usize>,
}

impl ClueTable {
    /// Parse a clue list: `<clue>[TAB<kind>]` per line, `#` comments allowed.
    /// A repeated clue keeps its first position and kind.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let clue = columns.next().unwrap_or_default().trim();
            let kind_raw = columns.next().unwrap_or_default();
            if clue.is_empty() {
                return Err(ExtractError::invalid_config(format!(
                    "clue list line {}: empty clue",
                    idx + 1
                )));
            }
            let kind = ClueKind::parse(kind_raw).ok_or_else(|| {
                ExtractError::invalid_config(format!(
                    "clue list line {}: unknown clue kind `{}`",
                    idx + 1,
                    kind_raw.trim()
                ))
            })?;
            table.push(ClueEntry::new(clue, kind));
        }

        if table.is_empty() {
            return Err(ExtractError::invalid_config("clue list is empty"));
        }
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ExtractError::read(path, e))?;
        Self::parse(&text)
    }

    /// The clue list compiled into the crate
    #[must_use]
    pub fn builtin() -> Self {
        match Self::parse(DEFAULT_CLUES) {
            Ok(table) => table,
            Err(err) => {
                log::error!("compiled clue list is unusable, no clue will match: {err}");
                Self::default()
            }
        }
    }

    fn push(&mut self, entry: ClueEntry) {
        if self.by_text.contains_key(&entry.text) {
            log::debug!("duplicate clue `{}` ignored", entry.text);
            return;
        }
        self.by_text.insert(entry.text.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[ClueEntry] {
        &self.entries
    }

    /// Entries longest first; ties keep declaration order
    pub fn by_length(&self) -> Vec<&ClueEntry> {
        let mut entries: Vec<&ClueEntry> = self.entries.iter().collect();
        entries.sort_by_key(|e| std::cmp::Reverse(e.char_len()));
        entries
    }

    pub fn get(&self, clue: &str) -> Option<&ClueEntry> {
        self.by_text.get(clue).map(|&idx| &self.entries[idx])
    }

    /// Kind of `clue`; unknown clues behave as connectives
    pub fn kind(&self, clue: &str) -> ClueKind {
        self.get(clue).map_or(ClueKind::Connective, |e| e.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Anaphoric demonstrative stems ("その", "それ", ...)
#[derive(Debug, Clone, Default)]
pub struct DemonstrativeSet {
    stems: Vec<String>,
}

impl DemonstrativeSet {
    /// One stem per line, `#` comments allowed
    pub fn parse(text: &str) -> Result<Self> {
        let mut stems: Vec<String> = Vec::new();
        for line in text.lines() {
            let stem = line.trim();
            if stem.is_empty() || stem.starts_with('#') {
                continue;
            }
            if !stems.iter().any(|s| s == stem) {
                stems.push(stem.to_string());
            }
        }
        if stems.is_empty() {
            return Err(ExtractError::invalid_config("demonstrative list is empty"));
        }
        Ok(Self { stems })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ExtractError::read(path, e))?;
        Self::parse(&text)
    }

    #[must_use]
    pub fn builtin() -> Self {
        match Self::parse(DEFAULT_DEMONSTRATIVES) {
            Ok(set) => set,
            Err(err) => {
                log::error!("compiled demonstrative list is unusable: {err}");
                Self::default()
            }
        }
    }

    /// True iff `text` starts with a demonstrative stem
    pub fn include_demon(&self, text: &str) -> bool {
        self.stems.iter().any(|stem| text.starts_with(stem.as_str()))
    }

    /// True iff `word` is exactly one of the stems
    pub fn contains(&self, word: &str) -> bool {
        self.stems.iter().any(|stem| stem == word)
    }

    pub fn stems(&self) -> &[String] {
        &self.stems
    }
}

/// Clue table plus demonstrative set, loaded once and shared read-only
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub clues: ClueTable,
    pub demonstratives: DemonstrativeSet,
}

impl Lexicon {
    pub fn new(clues: ClueTable, demonstratives: DemonstrativeSet) -> Self {
        Self {
            clues,
            demonstratives,
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(ClueTable::builtin(), DemonstrativeSet::builtin())
    }

    /// Load tables from files, falling back to the compiled lists for
    /// whichever path is absent
    pub fn load(clues: Option<&Path>, demonstratives: Option<&Path>) -> Result<Self> {
        let clues = match clues {
            Some(path) => ClueTable::load(path)?,
            None => ClueTable::builtin(),
        };
        let demonstratives = match demonstratives {
            Some(path) => DemonstrativeSet::load(path)?,
            None => DemonstrativeSet::builtin(),
        };
        Ok(Self::new(clues, demonstratives))
    }

    pub fn include_demon(&self, text: &str) -> bool {
        self.demonstratives.include_demon(text)
    }

    /// True iff `chunk` opens with a listed demonstrative word: an
    /// adnominal ("この結果") or a pronoun followed only by case particles
    /// ("これにより", "それが"). Words that merely share a stem ("その他",
    /// "これまで", "それぞれ") do not count.
    pub fn demonstrative_head(&self, chunk: &Chunk) -> bool {
        let Some((first, rest)) = chunk.morphemes.split_first() else {
            return false;
        };
        if !self.demonstratives.contains(&first.surface) {
            return false;
        }
        if first.is_adnominal() {
            return true;
        }
        first.is_pronoun()
            && rest
                .iter()
                .filter(|m| !m.is_symbol())
                .all(|m| m.is_particle() && m.has_detail(pos::CASE_PARTICLE))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
