//! Streaming TSV reader.
//!
//! [`Reader`] pulls rows out of any [`Read`] source through a fixed-size buffer and
//! hands out columns one at a time, converted to whatever type the caller asks for.
//!
//! # Features
//!
//! - **Bounded buffering**: rows longer than the buffer are stitched together in a carry
//!   buffer, the source is never re-read
//! - **Zero-copy columns**: rows without a backslash are returned straight from the buffer
//! - **Column accounting**: reading too few or too many columns is reported as an error
//! - **Positioned errors**: every failure records the 1-based row and column
//!
//! See the crate-level docs for loading whole rows and locating bad values.
//!
//! # Example - Variable-width rows
//!
//! Every column of a row has to be consumed before moving on. Rows of varying width can
//! be drained with [`Reader::has_next_column`]:
//!
//! ```rust
//! use typed_tsv::{ErrorKind, Reader};
//!
//! let mut reader = Reader::new("a\tb\tc\nd\n".as_bytes());
//! let mut widths = Vec::new();
//! while reader.next_row() {
//!     let mut width = 0;
//!     while reader.has_next_column() {
//!         reader.bytes();
//!         width += 1;
//!     }
//!     widths.push(width);
//! }
//! assert_eq!(widths, [3, 1]);
//! assert!(reader.error().is_none());
//!
//! // Skipping a column is reported at the first one left unread.
//! let mut reader = Reader::new("1\t2\n".as_bytes());
//! reader.next_row();
//! reader.int();
//! assert!(!reader.next_row());
//! let err = reader.error().unwrap();
//! assert_eq!((err.row(), err.col()), (1, 2));
//! assert!(matches!(err.kind(), ErrorKind::UnreadColumns));
//! ```

mod columns;
mod scanner;

use std::io::Read;

use crate::config::ReaderConfig;
use crate::error::{Error, ErrorKind, Result};

/// Lifecycle of a reader. `Failed` is terminal.
#[derive(Debug)]
enum State {
    Reading,
    Finished,
    Failed(Error),
}

/// Where the staged row's bytes live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Storage {
    Buffer,
    Carry,
}

/// Half-open byte range into the staged row's storage.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
}

/// Type-directed TSV reader over a byte source.
pub struct Reader<R> {
    source: R,
    config: ReaderConfig,
    buff: Box<[u8]>,
    /// Unconsumed bytes of the last fill: `buff[read_pos..read_end]`
    read_pos: usize,
    read_end: usize,
    /// Whether the last fill contained a backslash
    fill_escaped: bool,
    /// Partial row carried across fills
    carry: Vec<u8>,
    /// Storage of the staged row
    storage: Storage,
    /// Unread remainder of the staged row; `None` once exhausted or before any row
    cursor: Option<Span>,
    /// Whether the staged row contains a backslash
    escaped: bool,
    eof: bool,
    row: usize,
    col: usize,
    state: State,
}

impl<R: Read> Reader<R> {
    /// Create a reader with the default configuration.
    pub fn new(source: R) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    /// Create a reader with a custom configuration.
    pub fn with_config(source: R, config: ReaderConfig) -> Self {
        let buffer_size = config.buffer_size.max(1);
        Reader {
            source,
            config,
            buff: vec![0; buffer_size].into_boxed_slice(),
            read_pos: 0,
            read_end: 0,
            fill_escaped: false,
            carry: Vec::new(),
            storage: Storage::Buffer,
            cursor: None,
            escaped: false,
            eof: false,
            row: 0,
            col: 0,
            state: State::Reading,
        }
    }

    /// Read every remaining row through `f` and collect the results.
    ///
    /// `f` is called once per row and must consume all of its columns. Consumes the
    /// reader so the terminal error can be handed back by value.
    pub fn collect_rows<T, F>(mut self, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> T,
    {
        let mut out = Vec::new();
        while self.next_row() {
            out.push(f(&mut self));
        }
        match self.state {
            State::Failed(err) => Err(err),
            _ => Ok(out),
        }
    }
}

impl<R> Reader<R> {
    /// The terminal error, or `None` while reading and after a clean end of stream.
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the current row still has columns that have not been read.
    pub fn has_next_column(&self) -> bool {
        self.cursor.is_some()
    }

    /// 1-based number of the row being read.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Number of column reads attempted on the current row.
    pub fn col(&self) -> usize {
        self.col
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Consume the reader, returning its terminal error if it failed.
    pub fn into_error(self) -> Option<Error> {
        match self.state {
            State::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Give back the source. Buffered but unread bytes are lost.
    pub fn into_inner(self) -> R {
        self.source
    }

    #[inline]
    fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// Poison the reader at the current position.
    fn fail(&mut self, kind: ErrorKind) {
        let err = Error::new(self.row, self.col, kind);
        tracing::debug!(row = self.row, col = self.col, error = %err.kind(), "tsv reader failed");
        self.cursor = None;
        self.state = State::Failed(err);
    }

    fn finish(&mut self) {
        tracing::trace!(rows = self.row - 1, "tsv stream finished");
        self.state = State::Finished;
    }
}

impl<R> std::fmt::Debug for Reader<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("buffer_size", &self.buff.len())
            .field("carry_len", &self.carry.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
