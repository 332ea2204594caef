//! Positioned error types for the TSV reader.
//!
//! Every failure carries the 1-based row and column at which the reader gave up,
//! so callers never need to downcast to find out where a file went wrong.
use thiserror::Error;

/// What went wrong while reading.
#[derive(Error, Debug)]
pub enum ErrorKind {
    /// The underlying source failed to produce bytes
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended in the middle of a row (no trailing newline)
    #[error("stream ended inside an unterminated row")]
    TruncatedRow,

    /// `next_row` was called while the current row still had columns
    #[error("row has unread columns")]
    UnreadColumns,

    /// A column was requested past the end of the row, or with no row staged
    #[error("no more columns")]
    NoMoreColumns,

    /// The column text is not a valid value of the requested type
    #[error("column is not a valid {expected}")]
    InvalidValue { expected: &'static str },

    /// The row grew past the configured maximum length
    #[error("row exceeds the maximum length of {limit} bytes")]
    RowTooLong { limit: usize },
}

/// A reader failure pinned to the row and column where it happened.
///
/// `col` is the column whose read failed. For [`ErrorKind::UnreadColumns`] it is one past
/// the last column the caller read, and for failures raised while scanning for a row it
/// is `0`.
#[derive(Error, Debug)]
#[error("Parse failed at row #{row}, col #{col}: {kind}")]
pub struct Error {
    row: usize,
    col: usize,
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(row: usize, col: usize, kind: ErrorKind) -> Self {
        Self { row, col, kind }
    }

    /// 1-based row number the error occurred on.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// 1-based column number the error occurred on.
    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Whether the failure came from the source rather than from the data.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }
}

/// Result type for reader operations.
pub type Result<T> = std::result::Result<T, Error>;
