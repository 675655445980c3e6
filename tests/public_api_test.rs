// Behavioural tests for the public text-processing API
// WHY: process_text is the contract external callers rely on

use spanstrip::{parse, process_text, remove_longest_span, render, Token};

#[test]
fn test_examples_from_usage_docs() {
    assert_eq!(process_text("The quick fox.", 'q', 'x').unwrap(), "The.");
    assert_eq!(process_text("Hello, world!", 'z', 'a').unwrap(), "Hello, world!");
    assert_eq!(process_text("", 'q', 'x').unwrap(), "");
    assert_eq!(process_text("apple", 'a', 'e').unwrap(), "");
}

#[test]
fn test_surrounding_punctuation_survives() {
    // Only "apple" lies under the p..l span; its quotes stay put
    assert_eq!(process_text("Say \"apple\" now.", 'p', 'l').unwrap(), "Say\"\" now.");
}

#[test]
fn test_boundary_chars_are_case_insensitive() {
    assert_eq!(process_text("Keep QUICK FOX now.", 'q', 'x').unwrap(), "Keep now.");
}

#[test]
fn test_unmatchable_boundary_leaves_text_unchanged() {
    // Whitespace and terminators never reach a flattened sentence
    assert_eq!(process_text("Some text.", ' ', 'x').unwrap(), "Some text.");
    assert_eq!(process_text("Some text.", 'x', '!').unwrap(), "Some text.");
    assert_eq!(process_text("Hello, world!", '!', 'o').unwrap(), "Hello, world!");
}

#[test]
fn test_render_without_removal_is_stable() {
    let text = parse("First  sentence,here. Second\n\tone!").unwrap();
    let rendered = render(&text);

    assert_eq!(rendered, "First sentence,here. Second one!");
    assert_eq!(render(&text), rendered);
}

#[test]
fn test_noop_removal_preserves_rendering() {
    let inputs = [
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
        "(a) b-c [d]; e... f?!",
        "Numbers 1, 2 and 3_000 stay.",
    ];

    for input in inputs {
        let mut text = parse(input).unwrap();
        let before = render(&text);
        for sentence in text.sentences_mut() {
            assert!(remove_longest_span(sentence, 'z', 'y').is_none());
        }
        assert_eq!(render(&text), before, "rendering changed for {input:?}");
    }
}

#[test]
fn test_tokenization_covers_all_content() {
    let inputs = [
        "Hello, world! How are you?",
        "  Mixed   spacing,\tand\nbreaks.  ",
        "Ends without terminator",
        "Quotes \"inside\" (and parens)... wow?!",
    ];

    for input in inputs {
        let text = parse(input).unwrap();
        let mut rebuilt = String::new();
        for sentence in text.sentences() {
            for token in sentence.tokens() {
                rebuilt.push_str(&token.to_string());
            }
            rebuilt.push_str(sentence.terminator());
        }

        let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rebuilt, expected, "content lost for {input:?}");
    }
}

#[test]
fn test_punctuation_tokens_are_single_chars() {
    let text = parse("Wait --> (really)").unwrap();

    for token in text.sentences()[0].tokens() {
        if let Token::Punctuation(mark) = token {
            assert_eq!(token.to_string(), mark.value().to_string());
        }
    }
    assert_eq!(text.sentences()[0].word_count(), 2);
    assert_eq!(text.sentences()[0].len(), 7);
}
