// src/batch.rs

use crate::receipt::{self, Order};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{Instrument, info, warn};

/// One interpreted transcript from a batch run.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub file: String,
    pub order: Order,
}

/// List the files in `dir` whose extension is `extension`, sorted by name.
async fn transcript_paths(
    dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut paths = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Interpret every transcript in `dir`, at most `max_concurrent` at a time.
///
/// Unreadable files are logged and skipped. Entries come back sorted by
/// file name regardless of completion order.
pub async fn interpret_dir(
    dir: &Path,
    extension: &str,
    max_concurrent: usize,
) -> Result<Vec<BatchEntry>, Box<dyn std::error::Error>> {
    let paths = transcript_paths(dir, extension).await?;
    info!(dir = %dir.display(), count = paths.len(), "Transcripts to interpret");

    let permits = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut tasks = JoinSet::new();

    for path in paths {
        let permit = permits.clone().acquire_owned().await?;
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let span = tracing::info_span!("transcript", file = %file);

        tasks.spawn(
            async move {
                let _permit = permit;
                let result = tokio::fs::read_to_string(&path)
                    .await
                    .map(|text| receipt::interpret_text(&text));
                (file, result)
            }
            .instrument(span),
        );
    }

    let mut entries = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (file, result) = joined?;
        match result {
            Ok(order) => entries.push(BatchEntry { file, order }),
            Err(e) => warn!(file = %file, error = %e, "Failed to read transcript, skipping"),
        }
    }

    entries.sort_by(|a, b| a.file.cmp(&b.file));
    info!(interpreted = entries.len(), "Batch complete");
    Ok(entries)
}
