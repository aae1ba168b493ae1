//! Cursors and iterators over a terminated text.

use core::{iter::FusedIterator, marker::PhantomData};

use log::trace;

use crate::{
    encoding::{CharInfo, DefaultEncoding, Encoding},
    error::ReverseError,
    text::Text,
};

/// A byte-offset cursor that moves one character at a time in either
/// direction, e.g. for caret movement in an edit box.
///
/// The terminator is located once, on construction.
#[derive(Debug, Clone, Copy)]
pub struct TextCursor<'a, E = DefaultEncoding> {
    text: Text<'a>,
    pos: usize,
    _encoding: PhantomData<E>,
}

impl<'a, E: Encoding> TextCursor<'a, E> {
    /// A cursor at the start of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            text: Text::new(bytes),
            pos: 0,
            _encoding: PhantomData,
        }
    }

    /// A cursor on the terminator of `bytes`, ready to walk backward.
    #[must_use]
    pub fn at_end(bytes: &'a [u8]) -> Self {
        let mut cursor = Self::new(bytes);
        cursor.pos = cursor.text.len();
        cursor
    }

    /// Byte offset of the cursor.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The text being walked, without its terminator.
    #[inline]
    #[must_use]
    pub fn text(&self) -> Text<'a> {
        self.text
    }

    /// Moves the cursor to `pos`, clamped to the terminator. Returns the new
    /// position. No boundary check is made.
    pub fn seek(&mut self, pos: usize) -> usize {
        self.pos = pos.min(self.text.len());
        self.pos
    }

    /// `true` once the cursor sits on the terminator.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Steps over the next character.
    pub fn next_char(&mut self) -> Option<CharInfo> {
        E::next_char(self.text.as_bytes(), &mut self.pos)
    }

    /// Steps back over the previous character.
    ///
    /// # Errors
    ///
    /// See [`Encoding::prev_char`]; the cursor does not move on error.
    pub fn prev_char(&mut self) -> Result<CharInfo, ReverseError> {
        E::prev_char(self.text.as_bytes(), &mut self.pos)
    }

    /// Caret movement to the left. Steps back over the previous character,
    /// or over a single byte when no character ends at the cursor, so that
    /// malformed bytes can still be reached and removed with a backspace.
    /// Returns `false` only at the start of the text.
    pub fn step_back(&mut self) -> bool {
        match self.prev_char() {
            Ok(_) => true,
            Err(ReverseError::AtStart) => false,
            Err(ReverseError::NoBoundary) => {
                trace!("no character ends at {}, stepping back one byte", self.pos);
                self.pos -= 1;
                true
            }
        }
    }
}

/// Characters of a terminated text as `(offset, CharInfo)` pairs, from either
/// end.
///
/// The front uses [`Encoding::next_char`], the back
/// [`Encoding::prev_char`]; the two ends never cross. On well-formed text both
/// directions yield the same characters at the same offsets. On malformed
/// text the back end skips bytes it cannot attribute to a character one at a
/// time.
#[derive(Debug, Clone)]
pub struct Chars<'a, E = DefaultEncoding> {
    text: &'a [u8],
    front: usize,
    back: usize,
    _encoding: PhantomData<E>,
}

/// Iterates the characters of `bytes` using [`DefaultEncoding`].
#[must_use]
pub fn chars(bytes: &[u8]) -> Chars<'_> {
    Chars::new(bytes)
}

impl<'a, E: Encoding> Chars<'a, E> {
    /// Iterates the characters of `bytes` up to its terminator.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        let text = Text::new(bytes).as_bytes();
        Self {
            text,
            front: 0,
            back: text.len(),
            _encoding: PhantomData,
        }
    }

    /// The bytes not yet yielded from either end.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.text[self.front..self.back]
    }
}

impl<E: Encoding> Iterator for Chars<'_, E> {
    type Item = (usize, CharInfo);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let mut pos = self.front;
        match E::next_char(&self.text[..self.back], &mut pos) {
            Some(info) => {
                self.front = pos;
                Some((pos - usize::from(info.len), info))
            }
            None => {
                self.front = self.back;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Malformed bytes yield nothing, so only the upper bound is known.
        (0, Some(self.back.saturating_sub(self.front)))
    }
}

impl<E: Encoding> DoubleEndedIterator for Chars<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.back > self.front {
            let window = &self.text[self.front..self.back];
            let mut pos = window.len();
            match E::prev_char(window, &mut pos) {
                Ok(info) => {
                    self.back = self.front + pos;
                    return Some((self.back, info));
                }
                Err(ReverseError::NoBoundary) => {
                    trace!("no character ends at {}, stepping back one byte", self.back);
                    self.back -= 1;
                }
                Err(ReverseError::AtStart) => break,
            }
        }
        None
    }
}

impl<E: Encoding> FusedIterator for Chars<'_, E> {}
