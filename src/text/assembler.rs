// WHY: Rebuild display text from (possibly mutated) sentences

use super::normalization::collapse_whitespace;
use super::{Sentence, Text, Token};

/// Controls how sentences are rendered back to text.
///
/// The default keeps terminators, so `"The quick fox."` with `q`..`x` renders as `"The."`.
/// `keep_terminators: false` gives the bare token rendering: words and punctuation only,
/// terminators dropped (`"The"`).
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Re-emit each sentence's terminator run after its content
    pub keep_terminators: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { keep_terminators: true }
    }
}

/// Render one sentence: a space before every word except the first
pub fn render_sentence_into(sentence: &Sentence, options: &RenderOptions, buffer: &mut String) {
    let mut first_word = true;

    for token in sentence.tokens() {
        if let Token::Word(_) = token {
            if !first_word {
                buffer.push(' ');
            }
            first_word = false;
        }
        token.write_into(buffer);
    }

    if options.keep_terminators {
        buffer.push_str(sentence.terminator());
    }
}

/// Render text with explicit options
pub fn render_with(text: &Text, options: &RenderOptions) -> String {
    let mut joined = String::new();
    for sentence in text.sentences() {
        render_sentence_into(sentence, options, &mut joined);
        joined.push(' ');
    }
    collapse_whitespace(&joined)
}

/// Render text keeping sentence terminators
pub fn render(text: &Text) -> String {
    render_with(text, &RenderOptions::default())
}
