use thiserror::Error;

/// Why a byte was rejected by [`Utf8Decoder`](crate::Utf8Decoder).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The byte cannot start a character: a stray continuation byte or one of
    /// the reserved 5/6-byte lead forms.
    #[error("invalid leading byte 0x{0:02X}")]
    InvalidLead(u8),
    /// A continuation byte was expected. The byte that arrived instead is
    /// carried so the caller may offer it again as a leading byte.
    #[error("multi-byte sequence interrupted by 0x{0:02X}")]
    Interrupted(u8),
}

/// Why [`encode`](crate::encode) refused a codepoint.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Above [`MAX_CODEPOINT`](crate::MAX_CODEPOINT), or above `0xFF` in the
    /// single-byte mode.
    #[error("codepoint U+{0:X} cannot be encoded")]
    OutOfRange(u32),
    /// The output slice is shorter than the encoded form.
    #[error("encoding needs {needed} bytes, buffer holds {available}")]
    BufferTooSmall {
        /// Bytes the encoded form takes.
        needed: usize,
        /// Length of the output slice.
        available: usize,
    },
}

/// Failure of a backward step. The cursor never moves when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverseError {
    /// The cursor is at offset zero.
    #[error("cursor is at the start of the text")]
    AtStart,
    /// The bytes before the cursor do not end a character.
    #[error("no character ends at the cursor")]
    NoBoundary,
}

/// Failure of [`copy`](crate::copy) or [`copy_n`](crate::copy_n).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyError {
    /// The destination is too short; nothing was written.
    #[error("copy needs {needed} bytes, destination holds {available}")]
    Overflow {
        /// Bytes the copy would write.
        needed: usize,
        /// Length of the destination.
        available: usize,
    },
}

/// Failure of an in-place edit. The buffer is unchanged when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The edited text and its terminator would not fit in the buffer.
    #[error("edit needs {needed} bytes, buffer holds {available}")]
    Overflow {
        /// Buffer length the edit would need.
        needed: usize,
        /// Length of the buffer.
        available: usize,
    },
    /// The offset is past the text or inside a character.
    #[error("offset {0} is not a character boundary")]
    NotABoundary(usize),
    /// Nothing follows the offset but the terminator.
    #[error("no character after offset {0}")]
    AtEnd(usize),
    /// The inserted codepoint has no encoding in this mode.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// Nothing before the offset to remove.
    #[error(transparent)]
    Reverse(#[from] ReverseError),
}
