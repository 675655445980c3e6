pub mod text;
pub mod processor;
pub mod discovery;
pub mod reader;
pub mod incremental;
pub mod batch;

// Re-export main types for convenient access
pub use text::{
    parse, render, render_with, remove_longest_span, find_longest_span,
    Letter, PunctuationMark, Word, Token, Sentence, Text,
    RenderOptions, Tokenizer, TokenizerRules,
};

pub use processor::{process_text, BoundaryPair, ProcessOutcome, TextProcessor};

// Re-export batch processing types for the CLI and benchmarks
pub use batch::{process_directory, write_stats, BatchConfig, FileStats, RunStats};
