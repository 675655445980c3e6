// WHY: Sentence and token splitting over raw text
// Word/non-word runs come from a regex-automata meta regex over \w

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use super::{PunctuationMark, Sentence, Text, Word};

/// Maximal homogeneous runs: all word characters or all non-word characters
const RUN_PATTERN: &str = r"\w+|\W+";

/// Test applied to a run to decide whether it becomes a word
const WORD_CHAR_PATTERN: &str = r"\w";

/// Configuration for sentence splitting
#[derive(Debug, Clone)]
pub struct TokenizerRules {
    /// Characters that end a sentence; consumed, never tokens
    pub sentence_terminators: Vec<char>,
}

impl Default for TokenizerRules {
    fn default() -> Self {
        Self {
            sentence_terminators: vec!['.', '!', '?'],
        }
    }
}

impl TokenizerRules {
    pub fn is_terminator(&self, ch: char) -> bool {
        self.sentence_terminators.contains(&ch)
    }
}

/// Raw sentence segment borrowed from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub content: &'a str,
    /// Terminator run directly after `content`, empty for a trailing segment
    pub terminator: &'a str,
}

/// Tokenizer with compiled run patterns
pub struct Tokenizer {
    rules: TokenizerRules,
    runs: Regex,
    word_char: Regex,
}

impl Tokenizer {
    /// Create tokenizer with custom rules
    pub fn new(rules: TokenizerRules) -> Result<Self> {
        let runs = Regex::new(RUN_PATTERN)?;
        let word_char = Regex::new(WORD_CHAR_PATTERN)?;
        debug!("Compiled tokenizer patterns: {} / {}", RUN_PATTERN, WORD_CHAR_PATTERN);
        Ok(Self { rules, runs, word_char })
    }

    /// Create tokenizer splitting on `.`, `!` and `?`
    pub fn with_default_rules() -> Result<Self> {
        Self::new(TokenizerRules::default())
    }

    pub fn rules(&self) -> &TokenizerRules {
        &self.rules
    }

    /// Split text into segments at every terminator run.
    /// Blank segments are kept here; `parse` drops them.
    pub fn split_sentences<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut segment_start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            if !self.rules.is_terminator(ch) {
                continue;
            }

            // Swallow the whole run so "?!" closes one sentence
            let mut run_end = pos + ch.len_utf8();
            while let Some(&(next_pos, next)) = chars.peek() {
                if !self.rules.is_terminator(next) {
                    break;
                }
                run_end = next_pos + next.len_utf8();
                chars.next();
            }

            segments.push(Segment {
                content: &text[segment_start..pos],
                terminator: &text[pos..run_end],
            });
            segment_start = run_end;
        }

        if segment_start < text.len() {
            segments.push(Segment {
                content: &text[segment_start..],
                terminator: "",
            });
        }

        segments
    }

    /// Tokenize one sentence segment into words and punctuation marks
    pub fn tokenize_sentence(&self, content: &str, terminator: &str) -> Sentence {
        let mut sentence = Sentence::with_terminator(terminator);

        for chunk in content.split_whitespace() {
            for run in self.runs.find_iter(chunk) {
                let part = &chunk[run.range()];
                if self.word_char.is_match(part) {
                    sentence.push_word(Word::new(part));
                } else {
                    for ch in part.chars() {
                        sentence.push_punctuation(PunctuationMark::new(ch));
                    }
                }
            }
        }

        sentence
    }

    /// Parse raw text into sentences of tokens
    pub fn parse(&self, text: &str) -> Text {
        debug!("Starting tokenization on {} bytes", text.len());

        let mut parsed = Text::new();
        for segment in self.split_sentences(text) {
            if segment.content.trim().is_empty() {
                continue;
            }
            parsed.push_sentence(self.tokenize_sentence(segment.content, segment.terminator));
        }

        debug!("Tokenized {} sentences, {} words", parsed.len(), parsed.word_count());
        parsed
    }
}

/// Parse with default rules.
///
/// Builds a fresh `Tokenizer` (and compiles its patterns) on every call, which is
/// fine for one-off inputs. Callers parsing many texts should hold a `Tokenizer`
/// or a `TextProcessor` instead. The only possible error is pattern compilation;
/// parsing itself is total.
pub fn parse(text: &str) -> Result<Text> {
    Ok(Tokenizer::with_default_rules()?.parse(text))
}
