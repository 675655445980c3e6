// WHY: Directory mode for the CLI
// Files are processed sequentially; the async runtime only serves file I/O

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

use crate::discovery;
use crate::incremental::{output_exists, write_output_file};
use crate::processor::{BoundaryPair, TextProcessor};
use crate::reader::{AsyncFileReader, ReaderConfig};

/// Per-file processing statistics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileStats {
    /// File path relative to root directory
    pub path: String,
    /// Number of characters read
    pub chars_processed: u64,
    /// Sentences parsed
    pub sentences: u64,
    /// Sentences where a span was removed
    pub sentences_changed: u64,
    /// Words removed across the file
    pub words_removed: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Processing status (success, skipped, failed)
    pub status: String,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl FileStats {
    fn skipped(path: String) -> Self {
        Self {
            path,
            chars_processed: 0,
            sentences: 0,
            sentences_changed: 0,
            words_removed: 0,
            processing_time_ms: 0,
            status: "skipped".to_string(),
            error: None,
        }
    }

    fn failed(path: String, error: String, elapsed: Duration) -> Self {
        Self {
            status: "failed".to_string(),
            error: Some(error),
            processing_time_ms: elapsed.as_millis() as u64,
            ..Self::skipped(path)
        }
    }
}

/// Totals for one batch run, written as the stats JSON file
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunStats {
    /// Run start as seconds since the Unix epoch
    pub run_start: u64,
    pub start_char: String,
    pub end_char: String,
    pub total_processing_time_ms: u64,
    pub total_chars_processed: u64,
    pub total_sentences: u64,
    pub total_words_removed: u64,
    pub files_processed: u64,
    pub files_skipped: u64,
    pub files_failed: u64,
    pub file_stats: Vec<FileStats>,
}

impl RunStats {
    fn record(&mut self, stats: FileStats) {
        match stats.status.as_str() {
            "success" => {
                self.files_processed += 1;
                self.total_chars_processed += stats.chars_processed;
                self.total_sentences += stats.sentences;
                self.total_words_removed += stats.words_removed;
            }
            "skipped" => self.files_skipped += 1,
            _ => self.files_failed += 1,
        }
        self.file_stats.push(stats);
    }
}

/// Configuration for a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Reprocess files whose output already exists
    pub overwrite_all: bool,
    /// Abort on first read or write error
    pub fail_fast: bool,
    /// Show a progress bar on stderr
    pub show_progress: bool,
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

fn progress_bar(total: u64, show: bool) -> Result<ProgressBar> {
    if !show {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")?
            .progress_chars("##-"),
    );
    Ok(bar)
}

/// Process every `*.txt` file under `root_dir`, writing `<stem>_stripped.txt` next to each
pub async fn process_directory(
    root_dir: &Path,
    processor: &TextProcessor,
    pair: BoundaryPair,
    config: &BatchConfig,
) -> Result<RunStats> {
    let run_start = Instant::now();
    let mut run_stats = RunStats {
        run_start: SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0),
        start_char: pair.start.to_string(),
        end_char: pair.end.to_string(),
        ..Default::default()
    };

    let discovered = discovery::discover_files(root_dir, config.fail_fast).await?;

    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: config.fail_fast,
        ..Default::default()
    });

    let bar = progress_bar(discovered.len() as u64, config.show_progress)?;

    for file in discovered {
        let display_path = relative_display(root_dir, &file.path);
        bar.set_message(display_path.clone());

        let stats = if let Some(error) = file.error {
            FileStats::failed(display_path, error, Duration::ZERO)
        } else if !config.overwrite_all && output_exists(&file.path) {
            info!("Skipping {}: output already exists", display_path);
            FileStats::skipped(display_path)
        } else {
            process_file(&reader, processor, pair, &file.path, display_path, config.fail_fast).await?
        };

        run_stats.record(stats);
        bar.inc(1);
    }

    bar.finish_and_clear();
    run_stats.total_processing_time_ms = run_start.elapsed().as_millis() as u64;

    info!(
        "Batch complete: {} processed, {} skipped, {} failed, {} words removed",
        run_stats.files_processed, run_stats.files_skipped, run_stats.files_failed, run_stats.total_words_removed
    );

    Ok(run_stats)
}

async fn process_file(
    reader: &AsyncFileReader,
    processor: &TextProcessor,
    pair: BoundaryPair,
    path: &Path,
    display_path: String,
    fail_fast: bool,
) -> Result<FileStats> {
    let start = Instant::now();

    let (content, read_stats) = reader.read_file(path).await?;
    if let Some(error) = read_stats.read_error {
        return Ok(FileStats::failed(display_path, error, start.elapsed()));
    }

    let outcome = processor.process(&content, pair);

    if let Err(e) = write_output_file(path, &outcome.output).await {
        let error = format!("Failed to write output for {}: {}", path.display(), e);
        warn!("{}", error);
        if fail_fast {
            return Err(anyhow::anyhow!(error));
        }
        return Ok(FileStats::failed(display_path, error, start.elapsed()));
    }

    Ok(FileStats {
        path: display_path,
        chars_processed: read_stats.chars_read,
        sentences: outcome.sentences,
        sentences_changed: outcome.sentences_changed,
        words_removed: outcome.words_removed,
        processing_time_ms: start.elapsed().as_millis() as u64,
        status: "success".to_string(),
        error: None,
    })
}

/// Write run statistics as pretty JSON
pub async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write stats file {}", path.display()))?;
    Ok(())
}
