//! In-place editing of a terminated text buffer, as needed by edit boxes.
//!
//! All functions work on the caller's buffer: the text is everything before
//! the first zero byte, and the spare capacity after it is what insertions
//! may grow into. The buffer stays zero-terminated after every successful
//! edit. On error the buffer is not modified.

use log::debug;

use crate::{
    encoding::Encoding,
    error::{EditError, ReverseError},
    measure::byte_count,
};

/// Inserts `codepoint` at byte offset `pos` and returns the cursor position
/// just after it.
///
/// # Errors
///
/// - [`EditError::NotABoundary`] when `pos` is past the text or inside a
///   character.
/// - [`EditError::Encode`] when the codepoint cannot be represented.
/// - [`EditError::Overflow`] when the text, the new character and the
///   terminator do not fit in `buf`.
pub fn insert_char<E: Encoding>(
    buf: &mut [u8],
    pos: usize,
    codepoint: u32,
) -> Result<usize, EditError> {
    let len = byte_count(buf);
    if pos > len || !E::is_boundary(&buf[..len], pos) {
        return Err(EditError::NotABoundary(pos));
    }
    let mut encoded = [0u8; crate::MAX_ENCODED_LEN];
    let n = E::encode(codepoint, &mut encoded)?;
    let needed = len + n + 1;
    if buf.len() < needed {
        debug!(
            "refusing to insert U+{codepoint:04X}: {needed} bytes needed, {} available",
            buf.len()
        );
        return Err(EditError::Overflow {
            needed,
            available: buf.len(),
        });
    }
    buf.copy_within(pos..len, pos + n);
    buf[pos..pos + n].copy_from_slice(&encoded[..n]);
    buf[len + n] = 0;
    Ok(pos + n)
}

/// Removes the character ending at byte offset `pos` (backspace) and returns
/// the new cursor position. When no character ends at `pos`, the single
/// malformed byte before it is removed instead.
///
/// # Errors
///
/// - [`EditError::NotABoundary`] when `pos` is past the text.
/// - [`EditError::Reverse`] at the start of the text.
pub fn remove_prev_char<E: Encoding>(buf: &mut [u8], pos: usize) -> Result<usize, EditError> {
    let len = byte_count(buf);
    if pos > len {
        return Err(EditError::NotABoundary(pos));
    }
    let mut start = pos;
    match E::prev_char(&buf[..len], &mut start) {
        Ok(_) => {}
        Err(ReverseError::NoBoundary) => {
            debug!("removing malformed byte 0x{:02X} at {}", buf[pos - 1], pos - 1);
            start = pos - 1;
        }
        Err(err) => return Err(err.into()),
    }
    close_gap(buf, start, pos, len);
    Ok(start)
}

/// Removes the character starting at byte offset `pos` (delete). The cursor
/// stays at `pos`. Malformed bytes in front of the next character are removed
/// with it, and so is a truncated sequence running into the terminator.
///
/// # Errors
///
/// - [`EditError::NotABoundary`] when `pos` is past the text or inside a
///   character.
/// - [`EditError::AtEnd`] when `pos` is on the terminator.
pub fn remove_next_char<E: Encoding>(buf: &mut [u8], pos: usize) -> Result<usize, EditError> {
    let len = byte_count(buf);
    if pos > len || !E::is_boundary(&buf[..len], pos) {
        return Err(EditError::NotABoundary(pos));
    }
    let mut end = pos;
    E::next_char(&buf[..len], &mut end);
    if end == pos {
        return Err(EditError::AtEnd(pos));
    }
    close_gap(buf, pos, end, len);
    Ok(pos)
}

/// Drops `buf[start..end]` from a text of `len` bytes and re-terminates it.
fn close_gap(buf: &mut [u8], start: usize, end: usize, len: usize) {
    buf.copy_within(end..len, start);
    buf[len - (end - start)] = 0;
}
