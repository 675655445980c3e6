use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use spanstrip::{
    process_directory, reader, write_stats, BatchConfig, BoundaryPair, RenderOptions, TextProcessor,
    TokenizerRules,
};

/// Text processed when neither --text nor INPUT is given
const SAMPLE_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco \
laboris nisi ut aliquip ex ea commodo consequat.";

#[derive(Parser, Debug)]
#[command(name = "spanstrip")]
#[command(about = "Remove the longest start..end character span from every sentence")]
#[command(version)]
struct Args {
    /// File to process, or directory to batch-process (*.txt)
    input: Option<PathBuf>,

    /// Literal text to process instead of INPUT
    #[arg(long, conflicts_with = "input")]
    text: Option<String>,

    /// Character that starts the span
    #[arg(long, default_value = "p")]
    start: String,

    /// Character that ends the span
    #[arg(long, default_value = "i")]
    end: String,

    /// Render without sentence terminators
    #[arg(long)]
    drop_terminators: bool,

    /// Overwrite existing output files in directory mode
    #[arg(long)]
    overwrite_all: bool,

    /// Abort on first error in directory mode
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Stats output file path (directory mode)
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let rules = TokenizerRules::default();
    let pair = BoundaryPair::parse(&args.start, &args.end)?;
    let render_options = RenderOptions {
        keep_terminators: !args.drop_terminators,
    };
    let processor = TextProcessor::new(rules, render_options)?;

    let Some(input) = args.input.as_ref() else {
        let raw = args.text.as_deref().unwrap_or(SAMPLE_TEXT);
        println!("{}", processor.process(raw, pair).output);
        return Ok(());
    };

    if !input.exists() {
        anyhow::bail!("Input path does not exist: {}", input.display());
    }

    if input.is_file() {
        let raw = reader::read_file_async(input).await?;
        println!("{}", processor.process(&raw, pair).output);
        return Ok(());
    }

    let config = BatchConfig {
        overwrite_all: args.overwrite_all,
        fail_fast: args.fail_fast,
        show_progress: !args.no_progress,
    };

    info!("Starting batch run in: {}", input.display());
    let stats = process_directory(input, &processor, pair, &config).await?;
    write_stats(&args.stats_out, &stats).await?;

    println!("spanstrip v{} - {:?}..{:?}", env!("CARGO_PKG_VERSION"), pair.start, pair.end);
    println!("  Processed: {} files", stats.files_processed);
    println!("  Skipped: {} files", stats.files_skipped);
    if stats.files_failed > 0 {
        println!("  Failed: {} files", stats.files_failed);
    }
    println!("  Words removed: {}", stats.total_words_removed);
    println!("  Stats written to: {}", args.stats_out.display());

    Ok(())
}
