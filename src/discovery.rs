// WHY: Input discovery for directory mode
// Outputs this tool wrote are never picked up again as inputs

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::incremental::is_generated_output;

/// Result of file discovery validation
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Discover all `**/*.txt` files under `root_dir`, sorted by path.
/// Without fail_fast, unreadable entries are returned with an error instead of aborting.
pub async fn discover_files(root_dir: &Path, fail_fast: bool) -> Result<Vec<FileValidation>> {
    let pattern = format!("{}/**/*.txt", root_dir.display());
    debug!("Starting file discovery with pattern: {}", pattern);

    let mut paths = Vec::new();
    for entry in glob(&pattern).context("Failed to create glob pattern")? {
        match entry {
            Ok(path) if is_generated_output(&path) => {
                debug!("Skipping generated output: {}", path.display());
            }
            Ok(path) => paths.push(path),
            Err(e) if fail_fast => return Err(e).context("Glob iteration error"),
            Err(e) => warn!("Glob iteration error: {}", e),
        }
    }
    paths.sort();

    let files: Vec<FileValidation> = stream::iter(paths)
        .then(|path| validate_file(path, fail_fast))
        .try_collect()
        .await?;

    let invalid_count = files.iter().filter(|f| f.error.is_some()).count();
    info!(
        "File discovery summary: {} valid, {} invalid",
        files.len() - invalid_count,
        invalid_count
    );

    Ok(files)
}

async fn validate_file(path: PathBuf, fail_fast: bool) -> Result<FileValidation> {
    match fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => Ok(FileValidation { path, error: None }),
        Ok(_) => {
            let error = format!("Path is not a file: {}", path.display());
            warn!("{}", error);
            Ok(FileValidation { path, error: Some(error) })
        }
        Err(e) => {
            let error = format!("Cannot access file {}: {}", path.display(), e);
            warn!("{}", error);

            if fail_fast {
                Err(anyhow::anyhow!(error))
            } else {
                Ok(FileValidation { path, error: Some(error) })
            }
        }
    }
}

/// Paths of all valid input files, sorted
pub async fn find_text_files(root_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(discover_files(root_dir, false)
        .await?
        .into_iter()
        .filter(|f| f.error.is_none())
        .map(|f| f.path)
        .collect())
}
