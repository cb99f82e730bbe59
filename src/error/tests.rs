//! Tests for the Listnav error taxonomy

use super::*;

#[test]
fn test_unterminated_string_display() {
    let err = ScanError::UnterminatedString { at: 12 };
    assert_eq!(
        format!("{}", err),
        "Unbalanced string missing quote at offset 12"
    );
}

#[test]
fn test_boundary_errors_display() {
    assert_eq!(
        format!("{}", ScanError::UnexpectedEndOfFile { at: 40 }),
        "Unexpected end of file at offset 40"
    );
    assert_eq!(
        format!("{}", ScanError::UnexpectedBeginningOfFile { at: 0 }),
        "Unexpected beginning of file at offset 0"
    );
}

#[test]
fn test_depth_underflow_display() {
    let err = ScanError::DepthUnderflow { at: 7 };
    assert_eq!(format!("{}", err), "Depth fell below minimum at offset 7");
}

#[test]
fn test_unsupported_language_display() {
    let err = ScanError::UnsupportedLanguage("haskell".to_string());
    assert_eq!(format!("{}", err), "Unsupported language: haskell");
}

#[test]
fn test_invalid_configuration_display() {
    let err = ScanError::InvalidConfiguration('%');
    assert_eq!(format!("{}", err), "Invalid list opening character: '%'");
}

#[test]
fn test_out_of_range_display() {
    let err = ScanError::OutOfRange { offset: 99, len: 10 };
    assert_eq!(format!("{}", err), "Offset 99 out of bounds (len: 10)");
}

#[test]
fn test_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&ScanError::DepthUnderflow { at: 0 });
}

#[test]
fn test_error_equality() {
    assert_eq!(
        ScanError::UnterminatedString { at: 3 },
        ScanError::UnterminatedString { at: 3 }
    );
    assert_ne!(
        ScanError::UnterminatedString { at: 3 },
        ScanError::UnterminatedString { at: 4 }
    );
}
