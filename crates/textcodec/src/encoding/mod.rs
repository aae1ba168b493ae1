//! Character stepping, selected per text mode.
//!
//! [`Encoding`] is the seam between the generic text helpers (cursors,
//! measurement, editing) and the byte-level interpretation of a buffer. Two
//! zero-sized implementations exist:
//!
//! - [`Utf8`]: multi-byte aware, built on [`crate::Utf8Decoder`] going
//!   forward and on direct bit-pattern matching going backward;
//! - [`SingleByte`]: the legacy interpretation where every byte is one
//!   character.
//!
//! The surrounding system picks one mode for its whole lifetime through the
//! `unicode` cargo feature, which selects [`DefaultEncoding`].

mod single_byte;
mod utf8;

pub use single_byte::SingleByte;
pub use utf8::Utf8;

use crate::error::{EncodeError, ReverseError};

/// How bytes map to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Multi-byte aware UTF-8.
    Utf8,
    /// One byte per character.
    SingleByte,
}

/// The encoding used by default-typed cursors and helpers.
#[cfg(feature = "unicode")]
pub type DefaultEncoding = Utf8;
/// The encoding used by default-typed cursors and helpers.
#[cfg(not(feature = "unicode"))]
pub type DefaultEncoding = SingleByte;

/// Mode of [`DefaultEncoding`], fixed at build time.
pub const MODE: Mode = <DefaultEncoding as Encoding>::MODE;

/// One decoded character and the number of bytes it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// Decoded codepoint. Surrogates and overlong forms are passed through.
    pub codepoint: u32,
    /// Byte length of the character's own encoding (1-4). Bytes skipped as
    /// malformed before it are not included.
    pub len: u8,
}

impl CharInfo {
    /// A character of `len` bytes decoding to `codepoint`.
    #[inline]
    #[must_use]
    pub const fn new(codepoint: u32, len: u8) -> Self {
        Self { codepoint, len }
    }

    /// The character as a Rust `char`, if the codepoint is a Unicode scalar
    /// value.
    #[inline]
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}

/// Byte-level interpretation of a text buffer.
///
/// Every function takes the raw buffer and treats its first zero byte (or its
/// end) as the terminator. Positions are byte offsets into `text`.
pub trait Encoding {
    /// The mode this implementation stands for.
    const MODE: Mode;

    /// Longest character, in bytes.
    const MAX_CHAR_LEN: usize;

    /// Decodes the character starting at `*pos` and moves `*pos` past every
    /// byte consumed. Returns `None` once the terminator is reached.
    fn next_char(text: &[u8], pos: &mut usize) -> Option<CharInfo>;

    /// Decodes the character ending just before `*pos` and moves `*pos` to its
    /// first byte. Only bytes in `text[..*pos]` are inspected.
    ///
    /// # Errors
    ///
    /// [`ReverseError::AtStart`] at offset zero, and
    /// [`ReverseError::NoBoundary`] when the bytes before `*pos` do not end a
    /// character. `*pos` is unchanged in both cases.
    fn prev_char(text: &[u8], pos: &mut usize) -> Result<CharInfo, ReverseError>;

    /// Writes `codepoint` to the front of `out`.
    ///
    /// # Errors
    ///
    /// When the codepoint has no representation in this mode or `out` is too
    /// short.
    fn encode(codepoint: u32, out: &mut [u8]) -> Result<usize, EncodeError>;

    /// Returns `true` if a character may start at `pos`. The terminator
    /// offset counts as a boundary.
    fn is_boundary(text: &[u8], pos: usize) -> bool;

    /// Number of characters before the terminator.
    fn char_count(text: &[u8]) -> usize {
        let mut pos = 0;
        let mut count = 0;
        while Self::next_char(text, &mut pos).is_some() {
            count += 1;
        }
        count
    }
}
