// WHY: Single entry point composing parse -> per-sentence removal -> render
// Any char is a valid boundary; one that never occurs simply leaves the text unchanged

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::{remove_longest_span, render_with, RenderOptions, Tokenizer, TokenizerRules};

/// Start and end characters bounding the span to remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryPair {
    pub start: char,
    pub end: char,
}

impl BoundaryPair {
    /// Whitespace and terminators are accepted; they never occur in a flattened sentence,
    /// so such a pair matches nothing.
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    /// Parse boundary characters from CLI-style strings; each must be exactly one char
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(single_char("start", start)?, single_char("end", end)?))
    }
}

fn single_char(name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        (None, _) => bail!("Invalid {name} character: value is empty"),
        (Some(_), Some(_)) => bail!("Invalid {name} character: {value:?} is more than one character"),
    }
}

/// Result of processing one input text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Rendered text after removal
    pub output: String,
    /// Sentences parsed from the input
    pub sentences: u64,
    /// Words before removal
    pub words_before: u64,
    /// Words removed across all sentences
    pub words_removed: u64,
    /// Sentences where a span was removed
    pub sentences_changed: u64,
}

/// Tokenizer plus render options, reusable across inputs
pub struct TextProcessor {
    tokenizer: Tokenizer,
    render_options: RenderOptions,
}

impl TextProcessor {
    pub fn new(rules: TokenizerRules, render_options: RenderOptions) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new(rules)?,
            render_options,
        })
    }

    /// Processor with default terminators that keeps them in output
    pub fn with_defaults() -> Result<Self> {
        Self::new(TokenizerRules::default(), RenderOptions::default())
    }

    pub fn rules(&self) -> &TokenizerRules {
        self.tokenizer.rules()
    }

    /// Remove the longest span from every sentence and render the result
    pub fn process(&self, raw_text: &str, pair: BoundaryPair) -> ProcessOutcome {
        let mut text = self.tokenizer.parse(raw_text);

        let mut outcome = ProcessOutcome {
            sentences: text.len() as u64,
            words_before: text.word_count() as u64,
            ..Default::default()
        };

        for sentence in text.sentences_mut() {
            if let Some(removal) = remove_longest_span(sentence, pair.start, pair.end) {
                outcome.words_removed += removal.words_removed as u64;
                outcome.sentences_changed += 1;
            }
        }

        outcome.output = render_with(&text, &self.render_options);

        debug!(
            "Processed {} sentences: {} of {} words removed in {} sentences",
            outcome.sentences, outcome.words_removed, outcome.words_before, outcome.sentences_changed
        );

        outcome
    }
}

/// Convenience wrapper using default rules and options
pub fn process_text(raw_text: &str, start: char, end: char) -> Result<String> {
    let processor = TextProcessor::with_defaults()?;
    Ok(processor.process(raw_text, BoundaryPair::new(start, end)).output)
}
