//! Tests for the scan buffer snapshot

use super::*;

fn buf(text: &str) -> ScanBuffer {
    ScanBuffer::new(Profile::C, text)
}

#[test]
fn test_char_at_in_range() {
    let b = buf("abc");
    assert_eq!(b.char_at(0), Some('a'));
    assert_eq!(b.char_at(2), Some('c'));
}

#[test]
fn test_char_at_out_of_range() {
    let b = buf("abc");
    assert_eq!(b.char_at(3), None); // end sentinel is not a character
    assert_eq!(b.char_at(100), None);
}

#[test]
fn test_sentinels() {
    let b = buf("hello\n");
    assert_eq!(b.begin(), 0);
    assert_eq!(b.end(), 6);
    assert_eq!(b.len(), 6);
    assert!(!b.is_empty());
}

#[test]
fn test_empty_buffer() {
    let b = buf("");
    assert!(b.is_empty());
    assert_eq!(b.begin(), b.end());
    assert_eq!(b.char_at(0), None);
}

#[test]
fn test_profile_is_kept() {
    let b = ScanBuffer::new(Profile::TypeScript, "x");
    assert_eq!(b.profile(), Profile::TypeScript);
}

#[test]
fn test_code_point_offsets() {
    // Multi-byte characters still count as one position each.
    let b = buf("aé☃b");
    assert_eq!(b.len(), 4);
    assert_eq!(b.char_at(1), Some('é'));
    assert_eq!(b.char_at(3), Some('b'));
}

#[test]
fn test_line_col_single_line() {
    let b = buf("abc");
    assert_eq!(b.line_col(0), (1, 1));
    assert_eq!(b.line_col(2), (1, 3));
    assert_eq!(b.line_col(3), (1, 4)); // end sentinel
}

#[test]
fn test_line_col_multi_line() {
    let b = buf("ab\ncd\n");
    assert_eq!(b.line_col(0), (1, 1));
    assert_eq!(b.line_col(2), (1, 3)); // the newline itself
    assert_eq!(b.line_col(3), (2, 1)); // first char of line 2
    assert_eq!(b.line_col(4), (2, 2));
    assert_eq!(b.line_col(6), (3, 1)); // end sentinel after trailing newline
}

#[test]
fn test_slice_string() {
    let b = buf("foo(bar)");
    assert_eq!(b.slice_string(3, 8), "(bar)");
    assert_eq!(b.slice_string(0, 3), "foo");
    // Clamped at buffer end
    assert_eq!(b.slice_string(4, 100), "bar)");
}
