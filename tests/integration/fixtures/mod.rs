// Input texts with known outputs for golden comparisons
#![allow(dead_code)]

/// Sample text the CLI processes when given no input
pub const LOREM_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco \
laboris nisi ut aliquip ex ea commodo consequat.";

/// LOREM_TEXT with p..i removed: the first sentence loses everything from "ipsum" to "aliqua",
/// the second has no 'i' after its only 'p'
pub const LOREM_EXPECTED_P_I: &str = "Lorem. Ut enim ad minim veniam, quis nostrud exercitation ullamco \
laboris nisi ut aliquip ex ea commodo consequat.";

/// Multi-line text with line breaks, quotes and Unicode
pub const MULTILINE_TEXT: &str = "Hello world. This is a test sentence.\n\n\
How are you doing today? I hope you're well!\n\n\
\"I am fine,\" she said.   Then she walked away.";

/// MULTILINE_TEXT rendered without any removal
pub const MULTILINE_RENDERED: &str = "Hello world. This is a test sentence. How are you doing today? \
I hope you' re well! \"I am fine,\" she said. Then she walked away.";

/// MULTILINE_TEXT with t..d removed: only sentences with a 'd' after their first 't' change
pub const MULTILINE_EXPECTED_T_D: &str = "Hello world. This is a test sentence. How are you doing? \
I hope you' re well! \"I am fine,\" she said. away.";
