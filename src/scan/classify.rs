//! Character classification for list scanning

use crate::profile::Delimiters;

/// Syntactic classes for list scanning
///
/// Classification is purely local (current character plus optional
/// lookahead) and recomputed on demand; the scanners recover correctness
/// for strings and comments by jumping past whole literals instead of
/// tracking an "inside string" flag across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxClass {
    /// Whitespace, or any character the scanner does not care about
    Whitespace,
    /// A word constituent (ASCII alphanumeric or underscore)
    Word,
    /// A beginning delimiter
    Open,
    /// An ending delimiter
    Close,
    /// A string-grouping character: `"`, `'`, or a backtick
    StringDelimiter,
    /// Start of a C-style escape; escapes must not terminate string parsing
    Escape,
    /// `//` introducing a single-line comment
    SingleLineCommentStart,
    /// `/*` opening a multi-line comment
    MultiLineCommentStart,
    /// `*/` closing a multi-line comment
    MultiLineCommentEnd,
}

/// Classify `ch`, with `ch1` as the next character when one exists.
///
/// Two-character comment classes only fire when `ch1` is supplied; the
/// primitive scanners classify without lookahead and therefore only see
/// the single-character classes.
pub fn classify(delims: &Delimiters, ch: char, ch1: Option<char>) -> SyntaxClass {
    // The scanner does not reason about non-ASCII syntax.
    if !ch.is_ascii() {
        return SyntaxClass::Whitespace;
    }

    if delims.is_open(ch) {
        return SyntaxClass::Open;
    } else if delims.is_close(ch) {
        return SyntaxClass::Close;
    } else if matches!(ch, '"' | '\'' | '`') {
        return SyntaxClass::StringDelimiter;
    } else if ch == '\\' {
        return SyntaxClass::Escape;
    } else if ch.is_ascii_alphanumeric() || ch == '_' {
        return SyntaxClass::Word;
    }

    let Some(ch1) = ch1 else {
        return SyntaxClass::Whitespace;
    };

    // The supported languages all share C-style comments.
    if ch == '/' && ch1 == '/' {
        SyntaxClass::SingleLineCommentStart
    } else if ch == '/' && ch1 == '*' {
        SyntaxClass::MultiLineCommentStart
    } else if ch == '*' && ch1 == '/' {
        SyntaxClass::MultiLineCommentEnd
    } else {
        SyntaxClass::Whitespace
    }
}
