use super::{CharInfo, Encoding, Mode};
use crate::{
    error::{EncodeError, ReverseError},
    text::terminated,
};

/// Legacy text where every byte is one character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleByte;

impl Encoding for SingleByte {
    const MODE: Mode = Mode::SingleByte;
    const MAX_CHAR_LEN: usize = 1;

    fn next_char(text: &[u8], pos: &mut usize) -> Option<CharInfo> {
        match text.get(*pos) {
            Some(&byte) if byte != 0 => {
                *pos += 1;
                Some(CharInfo::new(u32::from(byte), 1))
            }
            _ => None,
        }
    }

    fn prev_char(text: &[u8], pos: &mut usize) -> Result<CharInfo, ReverseError> {
        let end = (*pos).min(text.len());
        if end == 0 {
            return Err(ReverseError::AtStart);
        }
        match text[end - 1] {
            0 => Err(ReverseError::NoBoundary),
            byte => {
                *pos = end - 1;
                Ok(CharInfo::new(u32::from(byte), 1))
            }
        }
    }

    fn encode(codepoint: u32, out: &mut [u8]) -> Result<usize, EncodeError> {
        let byte = u8::try_from(codepoint).map_err(|_| EncodeError::OutOfRange(codepoint))?;
        let Some(slot) = out.first_mut() else {
            return Err(EncodeError::BufferTooSmall {
                needed: 1,
                available: 0,
            });
        };
        *slot = byte;
        Ok(1)
    }

    fn is_boundary(text: &[u8], pos: usize) -> bool {
        pos <= text.len()
    }

    fn char_count(text: &[u8]) -> usize {
        terminated(text).len()
    }
}
