//! Character classes used while scanning.

/// Characters that may start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

/// Characters that may continue an identifier.
pub fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric() || c == '\u{200C}' || c == '\u{200D}'
}

pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Horizontal and vertical whitespace, excluding line breaks.
pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' '
            | '\t'
            | '\x0B'
            | '\x0C'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn contains_line_break(text: &str) -> bool {
    text.chars().any(is_line_break)
}
