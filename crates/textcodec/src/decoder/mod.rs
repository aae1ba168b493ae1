//! Resumable UTF-8 decoder.
//!
//! Overview
//! - [`Utf8Decoder`] consumes one byte per call and reports whether a
//!   character is complete, still in progress, or malformed. All state lives
//!   in the value itself, so a decode can be suspended between any two bytes
//!   and resumed later.
//! - The accepted grammar is the classic bit-pattern one: 1 to 4 byte forms
//!   selected by the high bits of the leading byte, followed by `10xxxxxx`
//!   continuation bytes. Overlong forms and surrogate codepoints are not
//!   rejected; the decoder only checks structure.
//!
//! Lifecycle
//! - Create (or [`reset`](Utf8Decoder::reset)) one decoder per independent
//!   decode sequence. A decoder left mid-sequence carries that partial state
//!   into whatever byte is fed next.
//!
//! Errors
//! - A byte that cannot lead a character yields
//!   [`DecodeError::InvalidLead`]; the decoder stays idle.
//! - A non-continuation byte inside a sequence yields
//!   [`DecodeError::Interrupted`]; the partial character is discarded and the
//!   decoder returns to idle. The interrupting byte is *not* decoded here.
//!   Callers that want to resynchronise feed it again (the forward iterator
//!   in [`crate::Utf8`] does).

use crate::error::DecodeError;

/// Payload mask of a leading byte, indexed by sequence length.
pub(crate) const LEAD_PAYLOAD: [u8; 5] = [0, 0x7F, 0x1F, 0x0F, 0x07];
/// Marker mask and marker value of a leading byte, indexed by sequence length.
pub(crate) const LEAD_MASK: [u8; 5] = [0, 0x80, 0xE0, 0xF0, 0xF8];
pub(crate) const LEAD_MARKER: [u8; 5] = [0, 0x00, 0xC0, 0xE0, 0xF0];

pub(crate) const CONTINUATION_PAYLOAD: u8 = 0x3F;

#[inline]
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Returns `true` if `byte` is the leading byte of a `len`-byte sequence.
#[inline]
pub(crate) const fn is_lead_of(byte: u8, len: usize) -> bool {
    byte & LEAD_MASK[len] == LEAD_MARKER[len]
}

/// Sequence length announced by a leading byte, or `None` for continuation
/// bytes and the reserved `11111xxx` forms.
#[inline]
pub(crate) const fn sequence_len(lead: u8) -> Option<u8> {
    let mut len: u8 = 1;
    while (len as usize) < LEAD_MASK.len() {
        if is_lead_of(lead, len as usize) {
            return Some(len);
        }
        len += 1;
    }
    None
}

/// Outcome of feeding one byte to [`Utf8Decoder::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// A full character is available through [`Utf8Decoder::value`].
    Complete,
    /// More continuation bytes are needed.
    Progress,
    /// The byte was rejected; the decoder is idle again.
    Error(DecodeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    /// Waiting for the leading byte of a new character.
    #[default]
    Idle,
    /// Inside a sequence; `remaining` is never zero.
    Pending { remaining: u8 },
}

/// Byte-at-a-time UTF-8 decode state.
///
/// ```rust
/// use textcodec::{DecodeStatus, Utf8Decoder};
///
/// let mut decoder = Utf8Decoder::new();
/// assert_eq!(decoder.decode(0xE2), DecodeStatus::Progress);
/// assert_eq!(decoder.decode(0x82), DecodeStatus::Progress);
/// assert_eq!(decoder.decode(0xAC), DecodeStatus::Complete);
/// assert_eq!(decoder.value(), 0x20AC);
/// assert_eq!(decoder.char_len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf8Decoder {
    value: u32,
    phase: Phase,
    total_len: u8,
}

impl Utf8Decoder {
    /// An idle decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            phase: Phase::Idle,
            total_len: 0,
        }
    }

    /// Drops any partial character and returns to the idle state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds one byte.
    pub fn decode(&mut self, byte: u8) -> DecodeStatus {
        match self.phase {
            Phase::Idle => self.lead(byte),
            Phase::Pending { remaining } => self.continuation(byte, remaining),
        }
    }

    /// The codepoint accumulated so far. Only meaningful as a character after
    /// [`DecodeStatus::Complete`].
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Byte length of the character being decoded, known once its leading
    /// byte has been accepted. Zero before that.
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> u8 {
        self.total_len
    }

    /// Continuation bytes still expected.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> u8 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Pending { remaining } => remaining,
        }
    }

    /// `true` while inside a multi-byte sequence.
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    fn lead(&mut self, byte: u8) -> DecodeStatus {
        let Some(len) = sequence_len(byte) else {
            self.total_len = 0;
            return DecodeStatus::Error(DecodeError::InvalidLead(byte));
        };
        self.total_len = len;
        self.value = u32::from(byte & LEAD_PAYLOAD[len as usize]);
        if len == 1 {
            return DecodeStatus::Complete;
        }
        self.phase = Phase::Pending {
            remaining: len - 1,
        };
        DecodeStatus::Progress
    }

    fn continuation(&mut self, byte: u8, remaining: u8) -> DecodeStatus {
        if !is_continuation(byte) {
            self.value = 0;
            self.phase = Phase::Idle;
            return DecodeStatus::Error(DecodeError::Interrupted(byte));
        }
        self.value = (self.value << 6) | u32::from(byte & CONTINUATION_PAYLOAD);
        match remaining - 1 {
            0 => {
                self.phase = Phase::Idle;
                DecodeStatus::Complete
            }
            remaining => {
                self.phase = Phase::Pending { remaining };
                DecodeStatus::Progress
            }
        }
    }
}
