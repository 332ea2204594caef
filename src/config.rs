//! Reader configuration

/// Default size of the read buffer (6 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 6 << 10;

/// Default number of consecutive `Interrupted` reads retried before giving up.
pub const DEFAULT_MAX_INTERRUPTED_RETRIES: u32 = 16;

/// Configuration for a [`Reader`](crate::Reader)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Capacity of the fixed read buffer, in bytes
    pub buffer_size: usize,
    /// Whether `bytes`/`string` columns decode backslash escapes
    pub unescape: bool,
    /// Upper bound on a single row's length; `None` lets rows grow without limit
    pub max_row_length: Option<usize>,
    /// How many consecutive `Interrupted` reads to retry before surfacing the error
    pub max_interrupted_retries: u32,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            unescape: true,
            max_row_length: None,
            max_interrupted_retries: DEFAULT_MAX_INTERRUPTED_RETRIES,
        }
    }
}

impl ReaderConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read buffer size. Zero is raised to one byte.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Enable/disable escape decoding for string and byte columns
    pub fn with_unescape(mut self, unescape: bool) -> Self {
        self.unescape = unescape;
        self
    }

    /// Set the maximum row length (None to disable the limit)
    pub fn with_max_row_length(mut self, max_len: Option<usize>) -> Self {
        self.max_row_length = max_len;
        self
    }

    /// Set how many consecutive interrupted reads are retried
    pub fn with_max_interrupted_retries(mut self, retries: u32) -> Self {
        self.max_interrupted_retries = retries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::new();
        assert_eq!(config.buffer_size, 6 * 1024);
        assert!(config.unescape);
        assert_eq!(config.max_row_length, None);
        assert_eq!(config.max_interrupted_retries, DEFAULT_MAX_INTERRUPTED_RETRIES);
    }

    #[test]
    fn test_builder_clamps_buffer_size() {
        let config = ReaderConfig::new()
            .with_buffer_size(0)
            .with_unescape(false)
            .with_max_row_length(Some(80));
        assert_eq!(config.buffer_size, 1);
        assert!(!config.unescape);
        assert_eq!(config.max_row_length, Some(80));
    }
}
