use anyhow::{Context as AnyhowContext, Result};
use inga_extractor::{Causal, Extractor};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Extraction result of one document
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: inga_extractor::Result<Vec<Causal>>,
}

/// Run one blocking extraction task per document, at most `threads` at a
/// time. Outcomes come back in input order.
pub async fn extract_all(
    extractor: Arc<Extractor>,
    documents: Vec<PathBuf>,
    threads: usize,
) -> Result<Vec<FileOutcome>> {
    let semaphore = Arc::new(Semaphore::new(threads.max(1)));
    let mut tasks = JoinSet::new();

    for (order, path) in documents.into_iter().enumerate() {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .context("worker pool closed")?;
        let extractor = extractor.clone();
        tasks.spawn_blocking(move || {
            let _permit = permit;
            let result = extractor.extract_file(&path);
            (order, FileOutcome { path, result })
        });
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined.context("extraction task failed")?);
    }
    outcomes.sort_by_key(|(order, _)| *order);
    Ok(outcomes.into_iter().map(|(_, outcome)| outcome).collect())
}
