use crate::error::{ExtractError, Result};
use inga_cabocha::CabochaConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Extraction settings, loadable from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Clue list file (compiled list when absent)
    pub clue_list: Option<PathBuf>,

    /// Demonstrative list file (compiled list when absent)
    pub demonstrative_list: Option<PathBuf>,

    /// What the cross-sentence anaphora slot carries
    pub anaphora: AnaphoraMode,

    /// Minimum oracle score for a record to be kept
    pub svm_threshold: f64,

    /// Dependency parser invocation
    pub cabocha: CabochaConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            clue_list: None,
            demonstrative_list: None,
            anaphora: AnaphoraMode::Result,
            svm_threshold: 0.0,
            cabocha: CabochaConfig::default(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| ExtractError::invalid_config(e.to_string()))?;
        config.validate().map_err(ExtractError::invalid_config)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ExtractError::read(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.svm_threshold.is_finite() {
            return Err(format!(
                "svm_threshold must be finite, got {}",
                self.svm_threshold
            ));
        }
        self.cabocha.validate()
    }
}

/// Source of the cross-sentence anaphora context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnaphoraMode {
    /// Result of the most recently accepted record
    #[default]
    Result,
    /// Previous non-empty line of the document
    Sentence,
}

impl AnaphoraMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Result => "result",
            Self::Sentence => "sentence",
        }
    }
}
