//! Row scanning over the fixed read buffer.

use std::io::{self, Read};

use memchr::memchr;

use super::{Reader, Span, State, Storage};
use crate::error::ErrorKind;

impl<R: Read> Reader<R> {
    /// Advance to the next row.
    ///
    /// Returns `false` at the end of the stream or on error; check [`error`](Self::error)
    /// to tell the two apart. Every column of the previous row must have been read,
    /// otherwise this fails with [`ErrorKind::UnreadColumns`].
    pub fn next_row(&mut self) -> bool {
        if !matches!(self.state, State::Reading) {
            return false;
        }

        if self.has_next_column() {
            // report the first column that was left unread
            self.col += 1;
            self.fail(ErrorKind::UnreadColumns);
            return false;
        }

        if self.storage == Storage::Carry {
            self.carry.clear();
            self.storage = Storage::Buffer;
        }

        self.col = 0;
        self.row += 1;

        loop {
            if self.read_pos >= self.read_end {
                if self.eof {
                    if self.carry.is_empty() {
                        self.finish();
                    } else {
                        self.fail(ErrorKind::TruncatedRow);
                    }
                    return false;
                }
                if let Err(err) = self.fill() {
                    self.fail(ErrorKind::Io(err));
                    return false;
                }
                continue;
            }

            let window = &self.buff[self.read_pos..self.read_end];
            match memchr(b'\n', window) {
                Some(offset) => {
                    let start = self.read_pos;
                    let end = start + offset;
                    self.read_pos = end + 1;
                    return self.stage(start, end);
                },
                None => {
                    if let Some(limit) = self.exceeds_limit(window.len()) {
                        self.fail(ErrorKind::RowTooLong { limit });
                        return false;
                    }
                    tracing::trace!(row = self.row, bytes = window.len(), "carrying partial row");
                    self.carry.extend_from_slice(window);
                    self.read_pos = self.read_end;
                },
            }
        }
    }

    /// Stage `buff[start..end]` (prefixed by any carried bytes) as the current row.
    fn stage(&mut self, start: usize, end: usize) -> bool {
        let fragment = end - start;
        if let Some(limit) = self.exceeds_limit(fragment) {
            self.fail(ErrorKind::RowTooLong { limit });
            return false;
        }

        let span = if self.carry.is_empty() {
            self.storage = Storage::Buffer;
            self.escaped = self.fill_escaped && memchr(b'\\', &self.buff[start..end]).is_some();
            Span { start, end }
        } else {
            self.carry.extend_from_slice(&self.buff[start..end]);
            self.storage = Storage::Carry;
            self.escaped = memchr(b'\\', &self.carry).is_some();
            Span {
                start: 0,
                end: self.carry.len(),
            }
        };
        self.escaped &= self.config.unescape;
        self.cursor = Some(span);
        true
    }

    /// The configured limit, if carrying `extra` more bytes would break it.
    fn exceeds_limit(&self, extra: usize) -> Option<usize> {
        self.config
            .max_row_length
            .filter(|&limit| self.carry.len() + extra > limit)
    }

    /// Refill the read buffer from the source.
    ///
    /// `Ok(0)` from the source marks end of stream. `Interrupted` is retried up to the
    /// configured number of consecutive times.
    fn fill(&mut self) -> io::Result<()> {
        let mut interrupted = 0u32;
        let n = loop {
            match self.source.read(&mut self.buff) {
                Ok(n) => break n,
                Err(err)
                    if err.kind() == io::ErrorKind::Interrupted
                        && interrupted < self.config.max_interrupted_retries =>
                {
                    interrupted += 1;
                },
                Err(err) => return Err(err),
            }
        };

        self.read_pos = 0;
        self.read_end = n;
        if n == 0 {
            tracing::trace!(row = self.row, "source reached end of stream");
            self.eof = true;
            self.fill_escaped = false;
        } else {
            tracing::trace!(row = self.row, bytes = n, "refilled read buffer");
            self.fill_escaped = memchr(b'\\', &self.buff[..n]).is_some();
        }
        Ok(())
    }
}
