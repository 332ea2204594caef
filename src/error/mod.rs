//! Error types for the TSV reader.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_position_and_kind() {
        let err = Error::new(2, 1, ErrorKind::InvalidValue { expected: "i64" });
        assert_eq!(err.to_string(), "Parse failed at row #2, col #1: column is not a valid i64");
        assert_eq!(err.row(), 2);
        assert_eq!(err.col(), 1);
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_kind_keeps_source() {
        let io = std::io::Error::other("disk on fire");
        let err = Error::new(3, 0, ErrorKind::from(io));
        assert!(err.is_io());
        assert!(err.kind().source().is_some());
        match err.into_kind() {
            ErrorKind::Io(inner) => assert_eq!(inner.to_string(), "disk on fire"),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
