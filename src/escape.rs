//! Backslash escape decoding for string and byte columns.
//!
//! Each `\x` pair collapses to a single byte:
//!
//! | escape | byte  |
//! |--------|-------|
//! | `\b`   | 0x08  |
//! | `\f`   | 0x0C  |
//! | `\r`   | 0x0D  |
//! | `\n`   | 0x0A  |
//! | `\t`   | 0x09  |
//! | `\0`   | 0x00  |
//! | `\'`   | `'`   |
//! | `\\`   | `\`   |
//!
//! Any other escaped byte stands for itself. A backslash with nothing after it is kept.

use memchr::memchr;
use std::borrow::Cow;

/// Decode escapes in place, returning the decoded length.
///
/// The decoded bytes occupy `buf[..len]`; the tail past `len` is left in an unspecified
/// state. Input without a backslash is left untouched.
pub fn unescape_in_place(buf: &mut [u8]) -> usize {
    let Some(mut read) = memchr(b'\\', buf) else {
        return buf.len();
    };
    let mut write = read;

    loop {
        // `read` is on a backslash here
        let Some(&code) = buf.get(read + 1) else {
            buf[write] = b'\\';
            return write + 1;
        };
        buf[write] = decode(code);
        write += 1;
        read += 2;

        match memchr(b'\\', &buf[read..]) {
            Some(offset) => {
                buf.copy_within(read..read + offset, write);
                write += offset;
                read += offset;
            },
            None => {
                let rest = buf.len() - read;
                buf.copy_within(read.., write);
                return write + rest;
            },
        }
    }
}

/// Decode escapes, borrowing the input when there is nothing to decode.
pub fn unescape(input: &[u8]) -> Cow<'_, [u8]> {
    if memchr(b'\\', input).is_none() {
        return Cow::Borrowed(input);
    }
    let mut owned = input.to_vec();
    let len = unescape_in_place(&mut owned);
    owned.truncate(len);
    Cow::Owned(owned)
}

#[inline]
const fn decode(code: u8) -> u8 {
    match code {
        b'b' => 0x08,
        b'f' => 0x0C,
        b'r' => b'\r',
        b'n' => b'\n',
        b't' => b'\t',
        b'0' => 0,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(input: &[u8]) -> Vec<u8> {
        unescape(input).into_owned()
    }

    #[test]
    fn test_no_escape_borrows() {
        assert!(matches!(unescape(b"plain text"), Cow::Borrowed(_)));

        let mut buf = *b"plain";
        assert_eq!(unescape_in_place(&mut buf), 5);
        assert_eq!(&buf, b"plain");
    }

    #[test]
    fn test_known_escapes() {
        assert_eq!(decoded(br"a\tb"), b"a\tb");
        assert_eq!(decoded(br"line\nbreak"), b"line\nbreak");
        assert_eq!(decoded(br"\r\b\f\0"), b"\r\x08\x0c\0");
        assert_eq!(decoded(br"it\'s"), b"it's");
        assert_eq!(decoded(br"back\\slash"), br"back\slash");
    }

    #[test]
    fn test_unknown_escape_drops_backslash() {
        assert_eq!(decoded(br"\q\z"), b"qz");
        assert_eq!(decoded(br#"say \"hi\""#), br#"say "hi""#);
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        assert_eq!(decoded(br"abc\"), br"abc\");
        assert_eq!(decoded(br"\"), br"\");
        assert_eq!(decoded(br"a\\\"), br"a\\");
    }

    #[test]
    fn test_consecutive_and_mixed() {
        assert_eq!(decoded(br"\\\\"), br"\\");
        assert_eq!(decoded(br"\t\t"), b"\t\t");
        assert_eq!(decoded(br"x\ny\tz\\"), b"x\ny\tz\\");
    }

    #[test]
    fn test_in_place_never_grows() {
        let mut buf = br"one\ttwo\\three".to_vec();
        let original = buf.len();
        let len = unescape_in_place(&mut buf);
        assert!(len < original);
        assert_eq!(&buf[..len], b"one\ttwo\\three");
    }
}
