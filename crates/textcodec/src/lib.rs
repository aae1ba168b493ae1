//! Incremental UTF-8 codec and character-boundary navigation over
//! caller-owned, zero-terminated byte buffers.
//!
//! The crate is the text layer underneath labels, edit boxes and any other
//! widget that stores its contents as raw bytes. It provides:
//!
//! - [`Utf8Decoder`], a resumable per-byte state machine;
//! - [`encode`], the inverse of the accepted decode grammar;
//! - forward and reverse single-character steps through the [`Encoding`]
//!   trait, plus the [`TextCursor`] and [`Chars`] wrappers built on them;
//! - measurement, copy and comparison helpers over terminated buffers;
//! - in-place edit helpers for insert, backspace and delete.
//!
//! Nothing here allocates. A buffer ends at its first zero byte, or at the
//! end of the slice when it holds no zero byte.
//!
//! ```rust
//! use textcodec::{Encoding, Utf8};
//!
//! let text = b"A\xC3\xA9\0";
//! let mut pos = 0;
//! assert_eq!(Utf8::next_char(text, &mut pos).map(|c| c.codepoint), Some(0x41));
//! assert_eq!(Utf8::next_char(text, &mut pos).map(|c| c.codepoint), Some(0xE9));
//! assert_eq!(Utf8::next_char(text, &mut pos), None);
//!
//! // And back again from the terminator.
//! assert_eq!(Utf8::prev_char(text, &mut pos).map(|c| c.codepoint), Ok(0xE9));
//! assert_eq!(pos, 1);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod classify;
mod cursor;
mod decoder;
mod edit;
mod encoder;
mod encoding;
mod error;
mod measure;
mod text;

#[cfg(test)]
mod tests;

pub use classify::is_printable;
pub use cursor::{Chars, TextCursor, chars};
pub use decoder::{DecodeStatus, Utf8Decoder};
pub use edit::{insert_char, remove_next_char, remove_prev_char};
pub use encoder::{MAX_CODEPOINT, MAX_ENCODED_LEN, encode, encoded_len};
pub use encoding::{CharInfo, DefaultEncoding, Encoding, MODE, Mode, SingleByte, Utf8};
pub use error::{CopyError, DecodeError, EditError, EncodeError, ReverseError};
pub use measure::{byte_count, char_count, char_to_byte, compare, copy, copy_n};
pub use text::{Text, terminated};
