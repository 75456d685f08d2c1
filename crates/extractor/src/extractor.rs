use crate::causal::Causal;
use crate::classifier::causal_expression;
use crate::config::{AnaphoraMode, ExtractorConfig};
use crate::error::{ExtractError, Result};
use crate::lexicon::Lexicon;
use crate::locator::including_clues;
use crate::oracle::{CandidateKey, ScoringOracle};
use crate::span::core_ids;
use inga_cabocha::DependencyParser;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

/// Cross-sentence context for anaphoric clues, scoped to one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnaphoraSlot {
    text: String,
}

impl AnaphoraSlot {
    pub fn context(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Sentence/file driver: parses each line, locates clues and folds the
/// accepted records of one document
pub struct Extractor {
    lexicon: Arc<Lexicon>,
    parser: Arc<dyn DependencyParser>,
    oracle: Option<Arc<dyn ScoringOracle>>,
    threshold: f64,
    anaphora: AnaphoraMode,
}

impl Extractor {
    pub fn new(lexicon: Arc<Lexicon>, parser: Arc<dyn DependencyParser>) -> Self {
        Self {
            lexicon,
            parser,
            oracle: None,
            threshold: 0.0,
            anaphora: AnaphoraMode::default(),
        }
    }

    /// Build from settings, loading the clue and demonstrative tables
    pub fn from_config(config: &ExtractorConfig, parser: Arc<dyn DependencyParser>) -> Result<Self> {
        config.validate().map_err(ExtractError::invalid_config)?;
        let lexicon = Lexicon::load(
            config.clue_list.as_deref(),
            config.demonstrative_list.as_deref(),
        )?;
        Ok(Self::new(Arc::new(lexicon), parser)
            .with_anaphora(config.anaphora)
            .with_threshold(config.svm_threshold))
    }

    /// Drop records the oracle scores below the threshold
    #[must_use]
    pub fn with_oracle(mut self, oracle: Arc<dyn ScoringOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_anaphora(mut self, anaphora: AnaphoraMode) -> Self {
        self.anaphora = anaphora;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extract every causal record of a line-oriented document
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<Vec<Causal>> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ExtractError::read(path, e))?;
        let file_path = path.display().to_string();
        let causals = self.extract_text(&text, &file_path);
        log::info!("{file_path}: {} causal records", causals.len());
        Ok(causals)
    }

    /// Same as [`Extractor::extract_file`] over in-memory text; one line is
    /// one sentence. Sentences the parser fails on are skipped.
    pub fn extract_text(&self, text: &str, file_path: &str) -> Vec<Causal> {
        let mut slot = AnaphoraSlot::default();
        let mut causals = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let sentence = raw.trim_end_matches('\r');
            let sentence = if line == 1 {
                sentence.trim_start_matches('\u{feff}')
            } else {
                sentence
            };
            if sentence.trim().is_empty() {
                continue;
            }

            match self.extract_sentence(sentence, line, file_path, &mut slot) {
                Ok(found) => causals.extend(found),
                Err(err) => log::warn!("{file_path}:{line}: skipping sentence: {err}"),
            }

            if self.anaphora == AnaphoraMode::Sentence {
                slot.set(sentence);
            }
        }

        causals
    }

    /// Records of one sentence, left to right, threading `slot`
    pub fn extract_sentence(
        &self,
        sentence: &str,
        line: usize,
        file_path: &str,
        slot: &mut AnaphoraSlot,
    ) -> Result<Vec<Causal>> {
        let chunks = self.parser.parse(sentence)?;
        let counts = including_clues(sentence, &self.lexicon.clues);

        // Longer clues claim their chunk first
        let mut claimed = HashSet::new();
        let mut occurrences: Vec<(usize, &str)> = Vec::new();
        for entry in self.lexicon.clues.by_length() {
            if counts.get(&entry.text).copied().unwrap_or(0) == 0 {
                continue;
            }
            for core in core_ids(&chunks, &entry.text) {
                if claimed.insert(core) {
                    occurrences.push((core, entry.text.as_str()));
                }
            }
        }
        occurrences.sort_by_key(|&(core, _)| core);

        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut found = Vec::new();
        for (core, clue) in occurrences {
            let ordinal = seen.entry(clue).or_default();
            *ordinal += 1;
            let occurrence = *ordinal;

            let candidate =
                causal_expression(&self.lexicon, &chunks, clue, core, sentence, slot.context());
            let Some(causal) = candidate.into_causal(clue, line, file_path, sentence) else {
                continue;
            };
            if !self.accepted_by_oracle(&causal, occurrence) {
                continue;
            }

            log::debug!(
                "{file_path}:{line}: pattern {} via `{clue}` at chunk {core}",
                causal.pattern
            );
            if self.anaphora == AnaphoraMode::Result {
                slot.set(&causal.result);
            }
            found.push(causal);
        }

        Ok(found)
    }

    /// `occurrence` numbers the clue's occurrences within the line
    fn accepted_by_oracle(&self, causal: &Causal, occurrence: usize) -> bool {
        let Some(oracle) = &self.oracle else {
            return true;
        };
        let key = CandidateKey::for_causal(causal).with_occurrence(occurrence);
        match oracle.score(&key) {
            Some(score) if score < self.threshold => {
                log::debug!("oracle veto for {key}: {score} < {}", self.threshold);
                false
            }
            _ => true,
        }
    }
}
