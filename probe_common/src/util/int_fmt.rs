//! Integer to UCS-2 text conversion.
//!
//! Firmware consoles take NUL-terminated UCS-2 strings, and there's neither an
//! allocator nor `core::fmt` glue for them. The routines here write decimal
//! text straight into a caller-owned `u16` buffer and terminate it with a NUL
//! sentinel.

use core::fmt::{self, Display, Formatter, Write};
use arrayvec::ArrayVec;

/// Terminating sentinel
pub const NUL: u16 = 0;

/// Maximum number of decimal digits in a 64-bit integer (`u64::MAX`)
pub const MAX_DIGITS: usize = 20;

/// Buffer capacity that fits any 64-bit integer: sign, digits and sentinel
pub const INT_BUF_LEN: usize = 1 + MAX_DIGITS + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The destination can't hold the text and its sentinel. Nothing has been
    /// written.
    BufferTooSmall {
        required: usize,
        capacity: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

/// Decimal digits of a number, least significant on top of the stack
struct Digits {
    negative: bool,
    stack: ArrayVec<u16, MAX_DIGITS>,
}

impl Digits {
    fn new(negative: bool, mut magnitude: u64) -> Digits {
        let mut stack = ArrayVec::new();

        // the loop below would produce nothing for zero
        if magnitude == 0 {
            stack.push(b'0' as u16);
        }

        while magnitude != 0 {
            stack.push(b'0' as u16 + (magnitude % 10) as u16);
            magnitude /= 10;
        }

        Digits { negative, stack }
    }

    /// Number of characters including the sentinel
    fn required(&self) -> usize {
        self.negative as usize + self.stack.len() + 1
    }

    /// Writes the text into `buffer`, returning its length without the
    /// sentinel. `buffer` must hold at least [`Digits::required`] characters.
    fn emit(mut self, buffer: &mut [u16]) -> usize {
        let mut pos = 0;
        if self.negative {
            buffer[pos] = b'-' as u16;
            pos += 1;
        }

        while let Some(digit) = self.stack.pop() {
            buffer[pos] = digit;
            pos += 1;
        }

        buffer[pos] = NUL;
        pos
    }

    fn write_to(self, buffer: &mut [u16]) -> Result<usize> {
        let required = self.required();
        if buffer.len() < required {
            return Err(Error::BufferTooSmall { required, capacity: buffer.len() });
        }
        Ok(self.emit(buffer))
    }
}

/// Writes the decimal representation of `value` followed by a NUL sentinel
/// into `buffer`, starting at offset 0.
///
/// Returns the number of characters before the sentinel. If `buffer` is too
/// small for the text and the sentinel, it is left untouched and
/// [`Error::BufferTooSmall`] is returned. A buffer of [`INT_BUF_LEN`]
/// characters always suffices.
///
/// ```
/// use probe_common::util::int_fmt::*;
/// let mut buf = [0u16; INT_BUF_LEN];
/// let len = format_int(-42, &mut buf).unwrap();
/// assert_eq!(&buf[..=len], &[b'-' as u16, b'4' as u16, b'2' as u16, NUL]);
/// ```
pub fn format_int(value: i64, buffer: &mut [u16]) -> Result<usize> {
    // `unsigned_abs` keeps `i64::MIN` representable
    Digits::new(value < 0, value.unsigned_abs()).write_to(buffer)
}

/// Same as [`format_int`], for unsigned values
pub fn format_uint(value: u64, buffer: &mut [u16]) -> Result<usize> {
    Digits::new(false, value).write_to(buffer)
}

/// Owned, NUL-terminated decimal text of a 64-bit integer
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WideInt {
    buf: [u16; INT_BUF_LEN],
    len: usize,
}

impl WideInt {
    pub fn new(value: i64) -> WideInt {
        Self::from_digits(Digits::new(value < 0, value.unsigned_abs()))
    }

    pub fn new_unsigned(value: u64) -> WideInt {
        Self::from_digits(Digits::new(false, value))
    }

    fn from_digits(digits: Digits) -> WideInt {
        // INT_BUF_LEN covers the longest possible text
        let mut buf = [NUL; INT_BUF_LEN];
        let len = digits.emit(&mut buf);
        WideInt { buf, len }
    }

    /// Text without the sentinel
    pub fn as_slice(&self) -> &[u16] {
        &self.buf[..self.len]
    }

    /// Text followed by the sentinel, ready for a firmware console
    pub fn as_slice_with_nul(&self) -> &[u16] {
        &self.buf[..=self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Display for WideInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // only ASCII digits and '-' ever end up here
        for &c in self.as_slice() {
            f.write_char(c as u8 as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for WideInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "WideInt({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn format(value: i64) -> String {
        let mut buf = [0xffffu16; INT_BUF_LEN];
        let len = format_int(value, &mut buf).unwrap();
        assert_eq!(buf[len], NUL, "no sentinel after {len} characters");
        String::from_utf16(&buf[..len]).unwrap()
    }

    #[test]
    fn zero() {
        assert_eq!(format(0), "0");
    }

    #[test]
    fn positive() {
        assert_eq!(format(7), "7");
        assert_eq!(format(42), "42");
        assert_eq!(format(10), "10");
        assert_eq!(format(1234567890), "1234567890");
    }

    #[test]
    fn negative() {
        assert_eq!(format(-1), "-1");
        assert_eq!(format(-42), "-42");
        assert_eq!(format(-100), "-100");
    }

    #[test]
    fn extremes() {
        assert_eq!(format(i64::MIN), "-9223372036854775808");
        assert_eq!(format(i64::MAX), "9223372036854775807");

        let mut buf = [0u16; INT_BUF_LEN];
        let len = format_uint(u64::MAX, &mut buf).unwrap();
        assert_eq!(String::from_utf16(&buf[..len]).unwrap(), "18446744073709551615");
        assert_eq!(buf[len], NUL);
    }

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let fixed = [0, 1, -1, 9, -9, 10, -10, 99, 100, i64::MIN, i64::MAX, i64::MIN + 1];
        let random: Vec<i64> = (0..10_000).map(|_| rng.gen()).collect();
        let small: Vec<i64> = (0..1_000).map(|_| rng.gen_range(-1000..1000)).collect();

        for value in fixed.into_iter().chain(random).chain(small) {
            let text = format(value);
            assert_eq!(text.parse::<i64>().unwrap(), value);
            assert_eq!(text.starts_with('-'), value < 0);
            assert!(text.chars().all(|c| c == '-' || c.is_ascii_digit()));
            assert!(value == 0 || !text.trim_start_matches('-').starts_with('0'));
        }
    }

    #[test]
    fn only_touches_needed_prefix() {
        let mut buf = [0xffffu16; INT_BUF_LEN];
        let len = format_int(-5, &mut buf).unwrap();
        assert_eq!(len, 2);
        assert!(buf[len + 1..].iter().all(|&c| c == 0xffff));
    }

    #[test]
    fn exact_fit() {
        let mut buf = [0u16; 4];
        assert_eq!(format_int(-42, &mut buf), Ok(3));
        assert_eq!(buf, [b'-' as u16, b'4' as u16, b'2' as u16, NUL]);

        let mut buf = [0u16; 2];
        assert_eq!(format_int(0, &mut buf), Ok(1));
        assert_eq!(buf, [b'0' as u16, NUL]);
    }

    #[test]
    fn buffer_too_small() {
        let mut buf = [0x1234u16; 3];
        assert_eq!(
            format_int(-42, &mut buf),
            Err(Error::BufferTooSmall { required: 4, capacity: 3 })
        );
        assert_eq!(buf, [0x1234; 3]);

        let mut buf = [0x1234u16; 20];
        assert_eq!(
            format_int(i64::MIN, &mut buf),
            Err(Error::BufferTooSmall { required: 21, capacity: 20 })
        );
        assert!(buf.iter().all(|&c| c == 0x1234));

        assert_eq!(
            format_int(0, &mut []),
            Err(Error::BufferTooSmall { required: 2, capacity: 0 })
        );
    }

    #[test]
    fn wide_int() {
        let text = WideInt::new(i64::MIN);
        assert_eq!(text.len(), 20);
        assert_eq!(text.as_slice_with_nul().last(), Some(&NUL));
        assert_eq!(format!("{text}"), "-9223372036854775808");
        assert_eq!(WideInt::new_unsigned(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(WideInt::new(0).as_slice(), &[b'0' as u16]);
    }
}
