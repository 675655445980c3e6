// WHY: Token model shared by tokenizer, span remover and assembler
// Sentences own their tokens by value so removal is a plain positional Vec edit

use std::fmt;

pub mod normalization;
pub mod tokenizer;
pub mod span_remover;
pub mod assembler;

// Re-export core operations
pub use normalization::{collapse_whitespace, collapse_whitespace_into};
pub use tokenizer::{parse, Tokenizer, TokenizerRules};
pub use span_remover::{find_longest_span, remove_longest_span, FlatSentence, Removal, WordOffset};
pub use assembler::{render, render_with, RenderOptions};

/// Case-insensitive character comparison used by every boundary check
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Single character owned by a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter(char);

impl Letter {
    pub fn new(value: char) -> Self {
        Letter(value)
    }

    pub fn value(&self) -> char {
        self.0
    }
}

/// Single non-word character standing on its own in a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PunctuationMark(char);

impl PunctuationMark {
    pub fn new(value: char) -> Self {
        PunctuationMark(value)
    }

    pub fn value(&self) -> char {
        self.0
    }
}

/// Word as an ordered run of letters, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Build a word from a substring, one letter per char
    pub fn new(text: &str) -> Self {
        Self {
            letters: text.chars().map(Letter::new).collect(),
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters (chars, not bytes)
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check first letter against `c`, ignoring case
    pub fn starts_with(&self, c: char) -> bool {
        self.letters
            .first()
            .is_some_and(|letter| chars_eq_ignore_case(letter.value(), c))
    }

    /// Check last letter against `c`, ignoring case
    pub fn ends_with(&self, c: char) -> bool {
        self.letters
            .last()
            .is_some_and(|letter| chars_eq_ignore_case(letter.value(), c))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter.value())?;
        }
        Ok(())
    }
}

/// Sentence element: either a word or a lone punctuation mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(Word),
    Punctuation(PunctuationMark),
}

impl Token {
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// Length of the token's text in chars
    pub fn char_len(&self) -> usize {
        match self {
            Token::Word(word) => word.len(),
            Token::Punctuation(_) => 1,
        }
    }

    /// Append the token's text to `buffer`
    pub fn write_into(&self, buffer: &mut String) {
        match self {
            Token::Word(word) => buffer.extend(word.letters().iter().map(Letter::value)),
            Token::Punctuation(mark) => buffer.push(mark.value()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => fmt::Display::fmt(word, f),
            Token::Punctuation(mark) => write!(f, "{}", mark.value()),
        }
    }
}

/// Ordered token sequence; shrinks on removal but never reorders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    tokens: Vec<Token>,
    /// Run of terminator chars that closed this sentence in the source (may be empty)
    terminator: String,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_terminator(terminator: impl Into<String>) -> Self {
        Self {
            tokens: Vec::new(),
            terminator: terminator.into(),
        }
    }

    pub fn push_word(&mut self, word: Word) {
        self.tokens.push(Token::Word(word));
    }

    pub fn push_punctuation(&mut self, mark: PunctuationMark) {
        self.tokens.push(Token::Punctuation(mark));
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn terminator(&self) -> &str {
        &self.terminator
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_word()).count()
    }

    /// Iterate over the words only, in order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Word(word) => Some(word),
            Token::Punctuation(_) => None,
        })
    }

    /// Remove every token in `first..=last`, highest index first.
    /// Out-of-range or inverted bounds leave the sentence untouched.
    pub fn remove_range(&mut self, first: usize, last: usize) -> usize {
        if first > last || last >= self.tokens.len() {
            return 0;
        }
        for index in (first..=last).rev() {
            self.tokens.remove(index);
        }
        last - first + 1
    }

    /// Flattened text of all tokens, no separators
    pub fn flattened(&self) -> String {
        let mut buffer = String::new();
        for token in &self.tokens {
            token.write_into(&mut buffer);
        }
        buffer
    }
}

/// Ordered sentences parsed from one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    sentences: Vec<Sentence>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sentence(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut [Sentence] {
        &mut self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(Sentence::word_count).sum()
    }
}
