use crate::config::CabochaConfig;
use crate::error::{CabochaError, Result};
use crate::lattice::{parse_lattice, parse_lattice_document};
use crate::types::{join_surfaces, Chunk};
use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

/// Turns one sentence into its dependency-chunk sequence
pub trait DependencyParser: Send + Sync {
    fn parse(&self, sentence: &str) -> Result<Vec<Chunk>>;
}

/// Runs the `cabocha` executable once per sentence
#[derive(Debug, Clone)]
pub struct CabochaCommand {
    config: CabochaConfig,
}

impl CabochaCommand {
    pub fn new(config: CabochaConfig) -> Result<Self> {
        config.validate().map_err(CabochaError::invalid_config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &CabochaConfig {
        &self.config
    }

    fn run(&self, sentence: &str) -> Result<String> {
        let mut child = Command::new(&self.config.program)
            .arg("-f1")
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CabochaError::Spawn {
                program: self.config.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(sentence.as_bytes())?;
            stdin.write_all(b"\n")?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(CabochaError::ExitStatus {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|e| CabochaError::malformed(0, format!("non UTF-8 parser output: {e}")))
    }
}

impl DependencyParser for CabochaCommand {
    fn parse(&self, sentence: &str) -> Result<Vec<Chunk>> {
        let lattice = self.run(sentence)?;
        let chunks = parse_lattice(&lattice)?;
        log::trace!("cabocha: {} chunks for {sentence:?}", chunks.len());
        Ok(chunks)
    }
}

/// Serves pre-computed lattices keyed by sentence text
#[derive(Debug, Clone, Default)]
pub struct StaticParser {
    sentences: HashMap<String, Vec<Chunk>>,
}

impl StaticParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a multi-sentence lattice; each sentence is keyed by the
    /// concatenation of its token surfaces
    pub fn from_lattice_document(text: &str) -> Result<Self> {
        let mut parser = Self::new();
        for chunks in parse_lattice_document(text)? {
            if chunks.is_empty() {
                continue;
            }
            let key = join_surfaces(&chunks);
            parser.sentences.insert(key, chunks);
        }
        Ok(parser)
    }

    /// Register one sentence from its lattice text
    pub fn insert_lattice(&mut self, sentence: impl Into<String>, lattice: &str) -> Result<()> {
        let chunks = parse_lattice(lattice)?;
        self.sentences.insert(sentence.into(), chunks);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl DependencyParser for StaticParser {
    fn parse(&self, sentence: &str) -> Result<Vec<Chunk>> {
        self.sentences
            .get(sentence)
            .cloned()
            .ok_or_else(|| CabochaError::UnknownSentence(sentence.to_string()))
    }
}
