use anyhow::{Context as AnyhowContext, Result};
use inga_extractor::Causal;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Appended to an input path to name its result file
pub const RESULT_SUFFIX: &str = "-result.txt";

pub fn result_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(RESULT_SUFFIX);
    PathBuf::from(name)
}

/// JSON array with one record per line: `[`, records joined by `,\n`, `]`
pub fn render_records<'a>(causals: impl IntoIterator<Item = &'a Causal>) -> Result<String> {
    let mut out = String::from("[");
    for (idx, causal) in causals.into_iter().enumerate() {
        if idx > 0 {
            out.push_str(",\n");
        }
        out.push_str(&serde_json::to_string(causal)?);
    }
    out.push(']');
    Ok(out)
}

/// Write the records of `input` next to it and return the result path
pub fn write_report(input: &Path, causals: &[Causal]) -> Result<PathBuf> {
    let path = result_path(input);
    std::fs::write(&path, render_records(causals)?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
