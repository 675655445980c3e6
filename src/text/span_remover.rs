// WHY: Longest start..end span search and positional word removal for one sentence
// All offsets are char positions in the flattened sentence, never byte positions

use std::ops::RangeInclusive;

use tracing::debug;

use super::{chars_eq_ignore_case, Sentence, Token};

/// Start offset of one word in the flattened sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordOffset {
    /// Position of the word in the sentence's full token sequence
    pub element_index: usize,
    /// Char offset where the word's text begins
    pub char_offset: usize,
}

/// Sentence flattened to chars with word start offsets, sorted by offset
#[derive(Debug, Clone, Default)]
pub struct FlatSentence {
    chars: Vec<char>,
    words: Vec<WordOffset>,
}

impl FlatSentence {
    pub fn from_sentence(sentence: &Sentence) -> Self {
        let mut chars = Vec::with_capacity(sentence.tokens().iter().map(Token::char_len).sum());
        let mut words = Vec::with_capacity(sentence.word_count());

        for (element_index, token) in sentence.tokens().iter().enumerate() {
            match token {
                Token::Word(word) => {
                    words.push(WordOffset {
                        element_index,
                        char_offset: chars.len(),
                    });
                    chars.extend(word.letters().iter().map(|letter| letter.value()));
                }
                Token::Punctuation(mark) => chars.push(mark.value()),
            }
        }

        Self { chars, words }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn word_offsets(&self) -> &[WordOffset] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Word containing char position `pos`: offset <= pos, next offset > pos
    pub fn word_at(&self, pos: usize) -> Option<WordOffset> {
        let count = self.words.partition_point(|word| word.char_offset <= pos);
        count.checked_sub(1).map(|k| self.words[k])
    }

    /// Word containing the last char before exclusive end `end`:
    /// offset < end, next offset >= end
    pub fn word_ending_before(&self, end: usize) -> Option<WordOffset> {
        let count = self.words.partition_point(|word| word.char_offset < end);
        count.checked_sub(1).map(|k| self.words[k])
    }

    /// Map inclusive char span to the token positions to delete
    pub fn element_range(&self, span: RangeInclusive<usize>) -> Option<RangeInclusive<usize>> {
        let first = self.word_at(*span.start())?;
        let last = self.word_ending_before(*span.end() + 1)?;
        Some(first.element_index..=last.element_index)
    }
}

/// Longest span `i..=j` (i < j) with `chars[i] ~ start` and `chars[j] ~ end`, ignoring case.
///
/// Equivalent to scanning i ascending, j ascending from i+1 and keeping only
/// strictly longer matches: the first `start` occurrence paired with the last
/// `end` occurrence is the unique longest pair, and it is also the first one
/// that scan reaches at that length.
pub fn find_longest_span(chars: &[char], start: char, end: char) -> Option<RangeInclusive<usize>> {
    let first_start = chars.iter().position(|&c| chars_eq_ignore_case(c, start))?;
    let last_end = chars.iter().rposition(|&c| chars_eq_ignore_case(c, end))?;

    if first_start < last_end {
        Some(first_start..=last_end)
    } else {
        None
    }
}

/// What a successful removal deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Inclusive char span in the flattened sentence before removal
    pub char_span: RangeInclusive<usize>,
    /// Inclusive token positions that were deleted
    pub element_span: RangeInclusive<usize>,
    /// Number of tokens deleted, punctuation included
    pub tokens_removed: usize,
    /// Number of words among them
    pub words_removed: usize,
}

/// Delete the tokens overlapped by the longest `start..end` span in `sentence`.
/// Returns `None` and leaves the sentence untouched when no span resolves to words.
pub fn remove_longest_span(sentence: &mut Sentence, start: char, end: char) -> Option<Removal> {
    let flat = FlatSentence::from_sentence(sentence);

    let Some(char_span) = find_longest_span(flat.chars(), start, end) else {
        debug!("No {:?}..{:?} span in sentence of {} chars", start, end, flat.len());
        return None;
    };

    let Some(element_span) = flat.element_range(char_span.clone()) else {
        debug!("Span {:?} does not start inside a word, sentence unchanged", char_span);
        return None;
    };

    let words_removed = sentence.tokens()[element_span.clone()]
        .iter()
        .filter(|token| token.is_word())
        .count();
    let tokens_removed = sentence.remove_range(*element_span.start(), *element_span.end());

    debug!(
        "Removed tokens {:?} ({} words) for char span {:?}",
        element_span, words_removed, char_span
    );

    Some(Removal {
        char_span,
        element_span,
        tokens_removed,
        words_removed,
    })
}
