use core::fmt;

use bstr::{BStr, ByteSlice};

/// Returns the logical text held in `bytes`: everything before the first zero
/// byte, or the whole slice when there is none.
#[inline]
#[must_use]
pub fn terminated(bytes: &[u8]) -> &[u8] {
    match bytes.find_byte(0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// A borrowed, already-terminated view of a text buffer.
///
/// Construction scans for the terminator once; everything built on top of a
/// `Text` (cursors, iterators) can then bound-check against its length instead
/// of re-scanning.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text<'a>(&'a [u8]);

impl<'a> Text<'a> {
    /// Views `bytes` up to its terminator.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(terminated(bytes))
    }

    /// The bytes before the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Byte length, not counting the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the terminator comes first.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(self.0), f)
    }
}

impl<'a> From<&'a [u8]> for Text<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}
