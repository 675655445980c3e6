// WHY: Final display pass for assembled text
// Kept separate from the assembler so the driver can reuse the buffer variant per file

/// Collapse every whitespace run to a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    collapse_whitespace_into(text, &mut result);
    result
}

/// Collapse whitespace into supplied buffer to avoid allocation
pub fn collapse_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            // Leading whitespace never emits a space
            pending_space = !buffer.is_empty();
        } else {
            if pending_space {
                buffer.push(' ');
                pending_space = false;
            }
            buffer.push(ch);
        }
    }
}
