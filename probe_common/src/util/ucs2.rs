//! Helpers for NUL-terminated UCS-2 text, the string format of firmware
//! consoles

use core::str::Chars;
use arrayvec::ArrayVec;

use super::int_fmt::NUL;

/// Capacity of a single [`Ucs2Chunks`] item, including the sentinel
pub const CHUNK_LEN: usize = 64;

/// Replacement for characters that UCS-2 can't represent
pub const REPLACEMENT: u16 = b'?' as u16;

/// Returns the part of `text` before the first NUL sentinel, or `None` if
/// there's no sentinel
pub fn until_nul(text: &[u16]) -> Option<&[u16]> {
    let end = text.iter().position(|&c| c == NUL)?;
    Some(&text[..end])
}

/// Returns the part of `text` up to and including the first NUL sentinel, or
/// `None` if there's no sentinel
pub fn with_nul(text: &[u16]) -> Option<&[u16]> {
    let len = until_nul(text)?.len();
    Some(&text[..=len])
}

/// Splits a string into NUL-terminated UCS-2 chunks of at most
/// [`CHUNK_LEN`] units each. Characters outside the Basic Multilingual Plane
/// become [`REPLACEMENT`], and embedded NULs are dropped so they can't cut a
/// chunk short.
pub struct Ucs2Chunks<'s> {
    chars: Chars<'s>,
}

impl<'s> Ucs2Chunks<'s> {
    pub fn new(text: &'s str) -> Ucs2Chunks<'s> {
        Ucs2Chunks { chars: text.chars() }
    }
}

impl Iterator for Ucs2Chunks<'_> {
    type Item = ArrayVec<u16, CHUNK_LEN>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = ArrayVec::new();

        while chunk.len() < CHUNK_LEN - 1 {
            let Some(c) = self.chars.next() else { break };
            let unit = u16::try_from(u32::from(c)).unwrap_or(REPLACEMENT);
            if unit != NUL {
                chunk.push(unit);
            }
        }

        if chunk.is_empty() {
            return None;
        }
        chunk.push(NUL);
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_lookup() {
        assert_eq!(until_nul(&[b'a' as u16, NUL, b'b' as u16]), Some(&[b'a' as u16][..]));
        assert_eq!(until_nul(&[NUL]), Some(&[][..]));
        assert_eq!(until_nul(&[b'a' as u16]), None);
    }

    #[test]
    fn sentinel_inclusive_slice() {
        let text = [b'4' as u16, b'2' as u16, NUL, b'x' as u16, NUL];
        assert_eq!(with_nul(&text), Some(&text[..3]));
        assert_eq!(with_nul(&[NUL, b'x' as u16]), Some(&[NUL][..]));
        assert_eq!(with_nul(&[b'4' as u16, b'2' as u16]), None);
        assert_eq!(with_nul(&[]), None);
    }

    #[test]
    fn short_string() {
        let chunks: Vec<_> = Ucs2Chunks::new("Mode ").collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(String::from_utf16(&chunks[0]).unwrap(), "Mode \0");
    }

    #[test]
    fn long_string_is_split_without_loss() {
        let text = "x".repeat(150);
        let chunks: Vec<_> = Ucs2Chunks::new(&text).collect();
        assert_eq!(chunks.iter().map(|c| c.len() - 1).collect::<Vec<_>>(), [63, 63, 24]);
        assert!(chunks.iter().all(|c| c.last() == Some(&NUL)));

        let joined: Vec<u16> = chunks.iter().flat_map(|c| until_nul(c).unwrap().iter().copied()).collect();
        assert_eq!(String::from_utf16(&joined).unwrap(), text);
    }

    #[test]
    fn non_bmp_and_nul() {
        let chunks: Vec<_> = Ucs2Chunks::new("a\u{1f600}\0é").collect();
        assert_eq!(&chunks[0][..], &[b'a' as u16, REPLACEMENT, 0xe9, NUL]);
    }

    #[test]
    fn empty_string() {
        assert_eq!(Ucs2Chunks::new("").count(), 0);
    }
}
