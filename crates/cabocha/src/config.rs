use serde::{Deserialize, Serialize};

/// Environment variable overriding the parser executable
pub const CABOCHA_ENV: &str = "INGA_CABOCHA";

/// How to invoke the external dependency parser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CabochaConfig {
    /// Executable name or path
    pub program: String,

    /// Extra arguments passed after `-f1`
    pub args: Vec<String>,
}

impl Default for CabochaConfig {
    fn default() -> Self {
        Self {
            program: "cabocha".to_string(),
            args: vec![],
        }
    }
}

impl CabochaConfig {
    /// Apply the `INGA_CABOCHA` override when it is set and non-empty
    #[must_use]
    pub fn with_env_override(mut self) -> Self {
        if let Some(program) = std::env::var(CABOCHA_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            self.program = program;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("cabocha program must not be empty".to_string());
        }
        if self.args.iter().any(|a| a == "-f0" || a == "-f2" || a == "-f3") {
            return Err("cabocha output format is fixed to -f1".to_string());
        }
        Ok(())
    }
}
