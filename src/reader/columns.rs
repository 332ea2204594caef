//! Column cursor and typed accessors.

use std::borrow::Cow;

use memchr::memchr;

use super::{Reader, Span, Storage};
use crate::column::FromColumn;
use crate::error::ErrorKind;
use crate::escape::unescape_in_place;

/// Declares a named accessor that forwards to [`Reader::column`].
macro_rules! typed_accessors {
    ($($(#[$meta:meta])* $name:ident => $ty:ty;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(&mut self) -> $ty {
                self.column::<$ty>()
            }
        )*
    };
}

impl<R> Reader<R> {
    /// Read the next column as `T`.
    ///
    /// On failure the reader is poisoned with an error at the current row and column and
    /// `T::default()` is returned. A poisoned reader returns `T::default()` without
    /// touching its state.
    pub fn column<T: FromColumn>(&mut self) -> T {
        if self.is_failed() {
            return T::default();
        }
        let Some(span) = self.next_column() else {
            self.fail(ErrorKind::NoMoreColumns);
            return T::default();
        };
        match T::from_column(&self.storage_bytes()[span.start..span.end]) {
            Some(value) => value,
            None => {
                self.fail(ErrorKind::InvalidValue {
                    expected: T::EXPECTED,
                });
                T::default()
            },
        }
    }

    typed_accessors! {
        /// Read the next column as a signed machine-width integer.
        int => isize;
        /// Read the next column as an unsigned machine-width integer.
        uint => usize;
        int8 => i8;
        uint8 => u8;
        int16 => i16;
        uint16 => u16;
        int32 => i32;
        uint32 => u32;
        int64 => i64;
        uint64 => u64;
        float32 => f32;
        /// Read the next column as a 64-bit float.
        float64 => f64;
        /// Read the next column as a boolean (`1`, `t`, `true`, `0`, `f`, `false`, ...).
        bool => bool;
    }

    /// Read the next column as raw bytes, with escapes decoded.
    ///
    /// Escapes are decoded in place in the reader's buffer, so rows without a backslash
    /// cost no copy at all. Returns an empty slice on failure.
    pub fn bytes(&mut self) -> &[u8] {
        if self.is_failed() {
            return &[];
        }
        let Some(span) = self.next_column() else {
            self.fail(ErrorKind::NoMoreColumns);
            return &[];
        };
        let escaped = self.escaped;
        let column = &mut self.storage_bytes_mut()[span.start..span.end];
        if escaped {
            let len = unescape_in_place(column);
            &column[..len]
        } else {
            column
        }
    }

    /// Read the next column as text, with escapes decoded.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`.
    pub fn string(&mut self) -> String {
        String::from_utf8_lossy(self.bytes()).into_owned()
    }

    /// Read the next column as text, borrowing from the reader when it is valid UTF-8.
    pub fn text(&mut self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    /// Split the next column off the staged row.
    fn next_column(&mut self) -> Option<Span> {
        self.col += 1;
        let span = self.cursor.take()?;
        let rest = &self.storage_bytes()[span.start..span.end];
        match memchr(b'\t', rest) {
            Some(offset) => {
                let split = span.start + offset;
                self.cursor = Some(Span {
                    start: split + 1,
                    end: span.end,
                });
                Some(Span {
                    start: span.start,
                    end: split,
                })
            },
            None => Some(span),
        }
    }

    #[inline]
    fn storage_bytes(&self) -> &[u8] {
        match self.storage {
            Storage::Buffer => &self.buff[..],
            Storage::Carry => &self.carry[..],
        }
    }

    #[inline]
    fn storage_bytes_mut(&mut self) -> &mut [u8] {
        match self.storage {
            Storage::Buffer => &mut self.buff[..],
            Storage::Carry => &mut self.carry[..],
        }
    }
}
