//! Conversion of raw column bytes into typed values.
//!
//! Columns are parsed straight from the byte slice the scanner hands out, without an
//! intermediate `String`:
//!
//! - integers go through `atoi_simd`, which rejects anything outside the target width;
//!   `u8`/`u16`/`u32`/`usize` are parsed as `i64` first, so `usize` tops out at `i64::MAX`
//! - floats go through `fast_float2`; finite text that overflows to infinity is rejected
//! - booleans accept the usual `1`/`t`/`true` and `0`/`f`/`false` spellings

/// A value that can be read from a single TSV column.
///
/// `Default` supplies the zero value returned when a read fails.
pub trait FromColumn: Sized + Default {
    /// Human-readable type name used in [`ErrorKind::InvalidValue`](crate::ErrorKind).
    const EXPECTED: &'static str;

    /// Parse the raw (unescaped) column bytes. `None` means the text is malformed or out
    /// of range for `Self`.
    fn from_column(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_from_column_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromColumn for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                #[inline]
                fn from_column(bytes: &[u8]) -> Option<Self> {
                    // accept leading zeros and an explicit `+`
                    atoi_simd::parse::<$ty, true, true>(bytes).ok()
                }
            }
        )*
    };
}

impl_from_column_int!(i8, i16, i32, i64, u64);

/// Widths parsed as `i64` and then range-checked, so `-0` reads as zero.
macro_rules! impl_from_column_narrowed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromColumn for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                #[inline]
                fn from_column(bytes: &[u8]) -> Option<Self> {
                    i64::from_column(bytes).and_then(|n| <$ty>::try_from(n).ok())
                }
            }
        )*
    };
}

impl_from_column_narrowed!(isize, u8, u16, u32, usize);

macro_rules! impl_from_column_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromColumn for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                #[inline]
                fn from_column(bytes: &[u8]) -> Option<Self> {
                    let value: $ty = fast_float2::parse(bytes).ok()?;
                    if value.is_infinite() && !spells_infinity(bytes) {
                        // finite literal outside the type's range
                        return None;
                    }
                    Some(value)
                }
            }
        )*
    };
}

impl_from_column_float!(f32, f64);

impl FromColumn for bool {
    const EXPECTED: &'static str = "bool";

    fn from_column(bytes: &[u8]) -> Option<Self> {
        match bytes {
            b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Some(true),
            b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Some(false),
            _ => None,
        }
    }
}

fn spells_infinity(bytes: &[u8]) -> bool {
    let digits = match bytes.first() {
        Some(b'+' | b'-') => &bytes[1..],
        _ => bytes,
    };
    digits.eq_ignore_ascii_case(b"inf") || digits.eq_ignore_ascii_case(b"infinity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_respect_width() {
        assert_eq!(i8::from_column(b"127"), Some(127));
        assert_eq!(i8::from_column(b"-128"), Some(-128));
        assert_eq!(i8::from_column(b"128"), None);
        assert_eq!(u8::from_column(b"255"), Some(255));
        assert_eq!(u8::from_column(b"256"), None);
        assert_eq!(u8::from_column(b"-1"), None);
        assert_eq!(i16::from_column(b"32768"), None);
        assert_eq!(u16::from_column(b"65535"), Some(65535));
        assert_eq!(i32::from_column(b"2147483648"), None);
        assert_eq!(u32::from_column(b"4294967296"), None);
        assert_eq!(i64::from_column(b"9223372036854775807"), Some(i64::MAX));
        assert_eq!(i64::from_column(b"9223372036854775808"), None);
        assert_eq!(u64::from_column(b"18446744073709551615"), Some(u64::MAX));
        assert_eq!(u64::from_column(b"18446744073709551616"), None);
    }

    #[test]
    fn test_integers_accept_sign_and_leading_zeros() {
        assert_eq!(i64::from_column(b"+5"), Some(5));
        assert_eq!(u8::from_column(b"+5"), Some(5));
        assert_eq!(isize::from_column(b"+0"), Some(0));
        assert_eq!(u64::from_column(b"+0"), Some(0));
        assert_eq!(i32::from_column(b"0000000000000000000000000042"), Some(42));
        assert_eq!(u16::from_column(b"000000000000000000000000000065535"), Some(65535));
        assert_eq!(u64::from_column(b"0000000000000000000000000000007"), Some(7));
    }

    #[test]
    fn test_negative_zero_for_unsigned() {
        assert_eq!(u8::from_column(b"-0"), Some(0));
        assert_eq!(u16::from_column(b"-0"), Some(0));
        assert_eq!(u32::from_column(b"-0"), Some(0));
        assert_eq!(usize::from_column(b"-0"), Some(0));
        assert_eq!(u64::from_column(b"-0"), None);
        assert_eq!(usize::from_column(b"9223372036854775808"), None);
    }

    #[test]
    fn test_integers_reject_garbage() {
        assert_eq!(i64::from_column(b""), None);
        assert_eq!(i64::from_column(b"a"), None);
        assert_eq!(i64::from_column(b"12a"), None);
        assert_eq!(i64::from_column(b"1.5"), None);
        assert_eq!(usize::from_column(b"-1"), None);
        assert_eq!(isize::from_column(b"-42"), Some(-42));
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::from_column(b"2.1"), Some(2.1));
        assert_eq!(f64::from_column(b"-1e3"), Some(-1000.0));
        assert_eq!(f32::from_column(b"0.5"), Some(0.5));
        assert_eq!(f64::from_column(b"inf"), Some(f64::INFINITY));
        assert_eq!(f64::from_column(b"-Infinity"), Some(f64::NEG_INFINITY));
        assert!(f64::from_column(b"nan").is_some_and(f64::is_nan));
        assert_eq!(f32::from_column(b"1e40"), None);
        assert_eq!(f64::from_column(b"1e400"), None);
        assert_eq!(f64::from_column(b"2.1x"), None);
        assert_eq!(f64::from_column(b""), None);
    }

    #[test]
    fn test_bools() {
        for text in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(bool::from_column(text.as_bytes()), Some(true), "{text}");
        }
        for text in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(bool::from_column(text.as_bytes()), Some(false), "{text}");
        }
        assert_eq!(bool::from_column(b"yes"), None);
        assert_eq!(bool::from_column(b"tRUE"), None);
    }
}
