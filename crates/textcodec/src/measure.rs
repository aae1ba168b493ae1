//! Length, copy and comparison over terminated byte buffers.
//!
//! Only [`char_count`] and [`char_to_byte`] look at character structure; the
//! rest are plain byte operations and behave identically in every mode.

use core::cmp::Ordering;

use crate::{encoding::Encoding, error::CopyError, text::terminated};

/// Number of characters before the terminator.
///
/// In UTF-8 mode this counts completed characters; bytes of a sequence cut
/// off by the terminator are not counted.
#[must_use]
pub fn char_count<E: Encoding>(text: &[u8]) -> usize {
    E::char_count(text)
}

/// Number of bytes before the terminator.
#[inline]
#[must_use]
pub fn byte_count(text: &[u8]) -> usize {
    terminated(text).len()
}

/// Byte offset of the `n`th character (zero-based), or of the terminator when
/// the text holds `n` characters or fewer.
#[must_use]
pub fn char_to_byte<E: Encoding>(text: &[u8], n: usize) -> usize {
    let mut pos = 0;
    for _ in 0..n {
        if E::next_char(text, &mut pos).is_none() {
            break;
        }
    }
    pos
}

/// Copies the text in `src` and a zero terminator into `dst`. Returns the
/// number of text bytes copied.
///
/// # Errors
///
/// [`CopyError::Overflow`] when `dst` cannot hold the text and its
/// terminator; `dst` is left untouched.
pub fn copy(dst: &mut [u8], src: &[u8]) -> Result<usize, CopyError> {
    let src = terminated(src);
    let needed = src.len() + 1;
    if dst.len() < needed {
        return Err(CopyError::Overflow {
            needed,
            available: dst.len(),
        });
    }
    dst[..src.len()].copy_from_slice(src);
    dst[src.len()] = 0;
    Ok(src.len())
}

/// Bounded copy with `strncpy` semantics: copies at most `n` bytes of text
/// and zero-fills the rest of `dst[..n]`. When the text is `n` bytes or
/// longer the result is *not* terminated. Returns the number of text bytes
/// copied.
///
/// # Errors
///
/// [`CopyError::Overflow`] when `dst` is shorter than `n`; `dst` is left
/// untouched.
pub fn copy_n(dst: &mut [u8], src: &[u8], n: usize) -> Result<usize, CopyError> {
    if dst.len() < n {
        return Err(CopyError::Overflow {
            needed: n,
            available: dst.len(),
        });
    }
    let src = terminated(src);
    let copied = src.len().min(n);
    dst[..copied].copy_from_slice(&src[..copied]);
    dst[copied..n].fill(0);
    Ok(copied)
}

/// Byte-wise lexicographic comparison of two terminated texts, with the same
/// ordering as `strcmp`.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    terminated(a).cmp(terminated(b))
}
