use crate::report::RESULT_SUFFIX;
use anyhow::{bail, Context as AnyhowContext, Result};
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const DOCUMENT_EXTENSION: &str = "txt";

/// Resolve command-line inputs into the documents to process, in argument
/// order. With `file_list` every input is a file naming one document path
/// per line.
pub fn collect_documents(inputs: &[PathBuf], file_list: bool) -> Result<Vec<PathBuf>> {
    let mut roots = Vec::new();
    if file_list {
        for list in inputs {
            roots.extend(read_file_list(list)?);
        }
    } else {
        roots.extend(inputs.iter().cloned());
    }

    let mut seen = HashSet::new();
    let mut documents = Vec::new();
    for root in roots {
        let found = if root.is_dir() {
            scan_dir(&root)
        } else if root.is_file() {
            vec![root]
        } else {
            bail!("Input not found: {}", root.display());
        };
        documents.extend(found.into_iter().filter(|p| seen.insert(p.clone())));
    }

    log::debug!("{} documents to process", documents.len());
    Ok(documents)
}

fn read_file_list(path: &Path) -> Result<Vec<PathBuf>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file list {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}

/// Documents below `root`, sorted by path; hidden entries and earlier
/// extraction outputs are skipped
fn scan_dir(root: &Path) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(true)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for result in builder.build() {
        match result {
            Ok(entry) => {
                let Some(file_type) = entry.file_type() else {
                    continue;
                };
                if file_type.is_file() && is_document(entry.path()) {
                    files.push(entry.path().to_path_buf());
                }
            }
            Err(e) => log::warn!("Failed to read entry: {e}"),
        }
    }

    log::info!("Found {} documents under {}", files.len(), root.display());
    files
}

fn is_document(path: &Path) -> bool {
    let is_txt = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
    let is_output = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(RESULT_SUFFIX));
    is_txt && !is_output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directories_are_walked_for_documents() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt-result.txt"), "[]").unwrap();
        std::fs::write(dir.path().join("notes.md"), "").unwrap();
        std::fs::write(dir.path().join("nested/c.TXT"), "").unwrap();
        std::fs::write(dir.path().join(".hidden.txt"), "").unwrap();

        let docs = collect_documents(&[dir.path().to_path_buf()], false).unwrap();
        let names: Vec<_> = docs
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("nested/c.TXT"),
            ]
        );
    }

    #[test]
    fn file_list_names_documents() {
        let dir = TempDir::new().unwrap();
        let doc = dir.path().join("doc.txt");
        std::fs::write(&doc, "").unwrap();
        let list = dir.path().join("list");
        std::fs::write(&list, format!("# inputs\n{}\n\n{}\n", doc.display(), doc.display()))
            .unwrap();

        let docs = collect_documents(&[list], true).unwrap();
        assert_eq!(docs, vec![doc]);
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = collect_documents(&[PathBuf::from("/nonexistent/inga.txt")], false).unwrap_err();
        assert!(err.to_string().contains("Input not found"));
    }
}
