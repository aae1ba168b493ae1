//! Codepoint to UTF-8 bytes.
//!
//! The encoder emits every form the decoder accepts, including the 4-byte
//! form for codepoints above the BMP. Surrogate codepoints are encoded like
//! any other 3-byte value (WTF-8 style) since the decoder lets them through
//! as well.

use crate::error::EncodeError;

/// Longest byte sequence [`encode`] can produce.
pub const MAX_ENCODED_LEN: usize = 4;

/// Largest codepoint [`encode`] accepts.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// Number of bytes [`encode`] writes for `codepoint`, or `None` if it is out
/// of range.
#[must_use]
pub const fn encoded_len(codepoint: u32) -> Option<usize> {
    match codepoint {
        0..0x80 => Some(1),
        0x80..0x800 => Some(2),
        0x800..0x1_0000 => Some(3),
        0x1_0000..=MAX_CODEPOINT => Some(4),
        _ => None,
    }
}

/// Writes the UTF-8 form of `codepoint` to the front of `out` and returns the
/// number of bytes written. Nothing is written on error.
///
/// ```rust
/// let mut buf = [0u8; textcodec::MAX_ENCODED_LEN];
/// let n = textcodec::encode(0x20AC, &mut buf).unwrap();
/// assert_eq!(&buf[..n], &[0xE2, 0x82, 0xAC]);
/// ```
///
/// # Errors
///
/// [`EncodeError::OutOfRange`] above [`MAX_CODEPOINT`], and
/// [`EncodeError::BufferTooSmall`] when `out` is shorter than
/// [`encoded_len`].
#[expect(clippy::cast_possible_truncation)]
pub fn encode(codepoint: u32, out: &mut [u8]) -> Result<usize, EncodeError> {
    let len = encoded_len(codepoint).ok_or(EncodeError::OutOfRange(codepoint))?;
    if out.len() < len {
        return Err(EncodeError::BufferTooSmall {
            needed: len,
            available: out.len(),
        });
    }
    let cont = |shift: u32| 0x80 | ((codepoint >> shift) & 0x3F) as u8;
    match len {
        1 => out[0] = codepoint as u8,
        2 => {
            out[0] = 0xC0 | (codepoint >> 6) as u8;
            out[1] = cont(0);
        }
        3 => {
            out[0] = 0xE0 | (codepoint >> 12) as u8;
            out[1] = cont(6);
            out[2] = cont(0);
        }
        _ => {
            out[0] = 0xF0 | (codepoint >> 18) as u8;
            out[1] = cont(12);
            out[2] = cont(6);
            out[3] = cont(0);
        }
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x00, &[0x00])]
    #[case(0x41, &[0x41])]
    #[case(0x7F, &[0x7F])]
    #[case(0x80, &[0xC2, 0x80])]
    #[case(0xE9, &[0xC3, 0xA9])]
    #[case(0x7FF, &[0xDF, 0xBF])]
    #[case(0x800, &[0xE0, 0xA0, 0x80])]
    #[case(0x20AC, &[0xE2, 0x82, 0xAC])]
    #[case(0xFFFF, &[0xEF, 0xBF, 0xBF])]
    #[case(0x1_0000, &[0xF0, 0x90, 0x80, 0x80])]
    #[case(0x1F600, &[0xF0, 0x9F, 0x98, 0x80])]
    #[case(0x10_FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
    fn encodes_each_length_class(#[case] codepoint: u32, #[case] expected: &[u8]) {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let n = encode(codepoint, &mut buf).unwrap();
        assert_eq!(&buf[..n], expected);
        assert_eq!(encoded_len(codepoint), Some(expected.len()));
    }

    #[test]
    fn matches_std_for_scalar_values() {
        for ch in ['a', 'é', 'ß', '€', '中', '😀', char::MAX] {
            let mut ours = [0u8; MAX_ENCODED_LEN];
            let mut theirs = [0u8; 4];
            let n = encode(ch as u32, &mut ours).unwrap();
            assert_eq!(&ours[..n], ch.encode_utf8(&mut theirs).as_bytes());
        }
    }

    #[test]
    fn surrogates_use_three_bytes() {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        assert_eq!(encode(0xD800, &mut buf), Ok(3));
        assert_eq!(&buf[..3], &[0xED, 0xA0, 0x80]);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        assert_eq!(
            encode(0x11_0000, &mut buf),
            Err(EncodeError::OutOfRange(0x11_0000))
        );
        assert_eq!(encoded_len(u32::MAX), None);
    }

    #[test]
    fn short_buffer_is_untouched() {
        let mut buf = [0xAAu8; 2];
        assert_eq!(
            encode(0x20AC, &mut buf),
            Err(EncodeError::BufferTooSmall {
                needed: 3,
                available: 2
            })
        );
        assert_eq!(buf, [0xAA, 0xAA]);
    }
}
