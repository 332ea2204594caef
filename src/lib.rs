//! typed-tsv - A streaming, type-directed reader for tab-separated values
//!
//! This library reads TSV text from any [`std::io::Read`] source one row at a time and
//! converts each column on demand into the type the caller asks for. Failures carry the
//! exact 1-based row and column they happened at.
//!
//! # Features
//!
//! - **Streaming**: a fixed-size buffer, no matter how large the input
//! - **Typed columns**: every integer width, `f32`/`f64`, `bool`, bytes and strings
//! - **Escape decoding**: `\t`, `\n`, `\\` and friends are decoded in place
//! - **Strict column accounting**: reading too many or too few columns is an error
//!
//! # Example - Reading rows into structs
//!
//! ```rust
//! use typed_tsv::Reader;
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: u8,
//!     male: bool,
//! }
//!
//! let tsv = "john\t18\ttrue\nemily\t16\tfalse\n";
//! let users = Reader::new(tsv.as_bytes()).collect_rows(|row| User {
//!     name: row.string(),
//!     age: row.uint8(),
//!     male: row.bool(),
//! })?;
//!
//! assert_eq!(users.len(), 2);
//! assert_eq!(users[1].name, "emily");
//! # Ok::<(), typed_tsv::Error>(())
//! ```
//!
//! # Example - Locating a bad value
//!
//! ```rust
//! use typed_tsv::{ErrorKind, Reader};
//!
//! let tsv = "1\t2.1\ta\n4\t5.2\tb\na\t8.3\tc\n";
//! let mut reader = Reader::new(tsv.as_bytes());
//! while reader.next_row() {
//!     let _ = (reader.int(), reader.float64(), reader.string());
//! }
//!
//! let err = reader.error().expect("third row has a bad int");
//! assert_eq!((err.row(), err.col()), (3, 1));
//! assert!(matches!(err.kind(), ErrorKind::InvalidValue { .. }));
//! ```
//!
//! # Escapes
//!
//! [`Reader::bytes`] and [`Reader::string`] decode escapes themselves. Text that came
//! from elsewhere, such as a column saved with escaping turned off, can be decoded with
//! [`escape::unescape`], which only allocates when there is a backslash:
//!
//! ```rust
//! use std::borrow::Cow;
//!
//! use typed_tsv::escape::unescape;
//!
//! assert_eq!(unescape(br"a\tb\\c"), Cow::<[u8]>::Owned(b"a\tb\\c".to_vec()));
//! assert!(matches!(unescape(b"plain"), Cow::Borrowed(_)));
//! ```

/// Reader configuration
pub mod config;

/// Typed conversion of raw column bytes
pub mod column;

/// Positioned error types
pub mod error;

/// Backslash escape decoding
pub mod escape;

/// The streaming row/column reader
pub mod reader;

// Re-export commonly used types for convenience
pub use column::FromColumn;
pub use config::ReaderConfig;
pub use error::{Error, ErrorKind, Result};
pub use reader::Reader;
