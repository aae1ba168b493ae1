use log::trace;

use super::{CharInfo, Encoding, Mode};
use crate::{
    decoder::{
        CONTINUATION_PAYLOAD, DecodeStatus, LEAD_PAYLOAD, Utf8Decoder, is_continuation, is_lead_of,
    },
    encoder,
    error::{DecodeError, EncodeError, ReverseError},
};

/// Multi-byte aware text.
///
/// Forward steps drive a fresh [`Utf8Decoder`] from the cursor. Malformed
/// leading bytes are skipped; a byte that interrupts a sequence is offered
/// again as the next leading byte, so corruption costs at most the broken
/// character.
///
/// Backward steps look at no more than the four bytes before the cursor and
/// never before the start of the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

impl Encoding for Utf8 {
    const MODE: Mode = Mode::Utf8;
    const MAX_CHAR_LEN: usize = encoder::MAX_ENCODED_LEN;

    fn next_char(text: &[u8], pos: &mut usize) -> Option<CharInfo> {
        let mut decoder = Utf8Decoder::new();
        let mut cursor = *pos;
        while let Some(&byte) = text.get(cursor) {
            if byte == 0 {
                break;
            }
            match decoder.decode(byte) {
                DecodeStatus::Complete => {
                    *pos = cursor + 1;
                    return Some(CharInfo::new(decoder.value(), decoder.char_len()));
                }
                DecodeStatus::Progress => cursor += 1,
                DecodeStatus::Error(DecodeError::InvalidLead(_)) => {
                    trace!("skipping invalid leading byte 0x{byte:02X} at {cursor}");
                    cursor += 1;
                }
                DecodeStatus::Error(DecodeError::Interrupted(_)) => {
                    // Leave the cursor on the byte so it is decoded as a lead.
                    trace!("sequence interrupted at {cursor}, resynchronising");
                }
            }
        }
        if cursor != *pos {
            trace!("dropped {} bytes before the terminator", cursor - *pos);
        }
        *pos = cursor;
        None
    }

    fn prev_char(text: &[u8], pos: &mut usize) -> Result<CharInfo, ReverseError> {
        let end = (*pos).min(text.len());
        if end == 0 {
            return Err(ReverseError::AtStart);
        }
        let window = &text[end.saturating_sub(Self::MAX_CHAR_LEN)..end];
        let info = match_tail(window).ok_or(ReverseError::NoBoundary)?;
        *pos = end - usize::from(info.len);
        Ok(info)
    }

    fn encode(codepoint: u32, out: &mut [u8]) -> Result<usize, EncodeError> {
        encoder::encode(codepoint, out)
    }

    fn is_boundary(text: &[u8], pos: usize) -> bool {
        match text.get(pos) {
            Some(&byte) => !is_continuation(byte),
            None => pos == text.len(),
        }
    }
}

/// Matches the character that ends `window`, rightmost byte first.
///
/// A zero byte is the terminator and never ends a character.
fn match_tail(window: &[u8]) -> Option<CharInfo> {
    let (&last, rest) = window.split_last()?;
    if last < 0x80 {
        return (last != 0).then(|| CharInfo::new(u32::from(last), 1));
    }
    if !is_continuation(last) {
        return None;
    }
    let mut value = u32::from(last & CONTINUATION_PAYLOAD);
    let mut shift = 6;
    let mut len: u8 = 2;
    for &byte in rest.iter().rev() {
        let n = usize::from(len);
        if is_lead_of(byte, n) {
            value |= u32::from(byte & LEAD_PAYLOAD[n]) << shift;
            return Some(CharInfo::new(value, len));
        }
        if !is_continuation(byte) {
            return None;
        }
        value |= u32::from(byte & CONTINUATION_PAYLOAD) << shift;
        shift += 6;
        len += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::vec::Vec;

    use super::*;

    fn forward(text: &[u8]) -> Vec<(usize, CharInfo)> {
        let mut pos = 0;
        let mut out = Vec::new();
        while let Some(info) = Utf8::next_char(text, &mut pos) {
            out.push((pos, info));
        }
        out
    }

    #[test]
    fn forward_stops_at_terminator_without_moving() {
        let text = b"A\0B";
        let mut pos = 1;
        assert_eq!(Utf8::next_char(text, &mut pos), None);
        assert_eq!(pos, 1);
    }

    #[test]
    fn forward_over_mixed_widths() {
        let text = "aé€😀".as_bytes();
        let got: Vec<_> = forward(text).into_iter().map(|(_, c)| c).collect();
        assert_eq!(
            got,
            [
                CharInfo::new(0x61, 1),
                CharInfo::new(0xE9, 2),
                CharInfo::new(0x20AC, 3),
                CharInfo::new(0x1F600, 4),
            ]
        );
    }

    #[test]
    fn forward_skips_invalid_leads() {
        let text = b"\x80\xBFA";
        let mut pos = 0;
        assert_eq!(Utf8::next_char(text, &mut pos), Some(CharInfo::new(0x41, 1)));
        assert_eq!(pos, 3);
    }

    #[test]
    fn forward_reoffers_interrupting_byte() {
        // C3 starts a 2-byte form, 'A' interrupts it and must not be lost.
        let text = b"\xC3AB";
        let got: Vec<_> = forward(text).into_iter().map(|(_, c)| c.codepoint).collect();
        assert_eq!(got, [0x41, 0x42]);
    }

    #[test]
    fn forward_reoffers_interrupting_lead() {
        // E2 82 is cut short by the lead of a complete 2-byte character.
        let text = b"\xE2\x82\xC3\xA9";
        let got: Vec<_> = forward(text).into_iter().map(|(_, c)| c.codepoint).collect();
        assert_eq!(got, [0xE9]);
    }

    #[test]
    fn forward_truncated_tail_ends_iteration() {
        let text = b"A\xE2\x82\0";
        let mut pos = 1;
        assert_eq!(Utf8::next_char(text, &mut pos), None);
        assert_eq!(pos, 3);
    }

    #[rstest]
    #[case(b"A", 0x41, 1)]
    #[case(b"\xC3\xA9", 0xE9, 2)]
    #[case(b"\xE2\x82\xAC", 0x20AC, 3)]
    #[case(b"\xF0\x9F\x98\x80", 0x1F600, 4)]
    #[case(b"xyz\xC3\xA9", 0xE9, 2)]
    fn backward_matches_each_width(#[case] text: &[u8], #[case] codepoint: u32, #[case] len: u8) {
        let mut pos = text.len();
        assert_eq!(
            Utf8::prev_char(text, &mut pos),
            Ok(CharInfo::new(codepoint, len))
        );
        assert_eq!(pos, text.len() - usize::from(len));
    }

    #[test]
    fn backward_never_reads_before_start() {
        // A lone continuation byte at the very start has no lead to find.
        let text = b"\xA9";
        let mut pos = 1;
        assert_eq!(Utf8::prev_char(text, &mut pos), Err(ReverseError::NoBoundary));
        assert_eq!(pos, 1);
    }

    #[test]
    fn backward_at_start_fails_cleanly() {
        let mut pos = 0;
        assert_eq!(Utf8::prev_char(b"abc", &mut pos), Err(ReverseError::AtStart));
        assert_eq!(pos, 0);
    }

    #[test]
    fn backward_rejects_orphaned_continuations() {
        // Five continuation bytes: no lead within the 4-byte window.
        let text = b"\x80\x80\x80\x80\x80";
        let mut pos = text.len();
        assert_eq!(Utf8::prev_char(text, &mut pos), Err(ReverseError::NoBoundary));
        assert_eq!(pos, text.len());
    }

    #[test]
    fn backward_rejects_wrong_lead_length() {
        // A 3-byte lead followed by a single continuation byte.
        let text = b"\xE2\x82";
        let mut pos = 2;
        assert_eq!(Utf8::prev_char(text, &mut pos), Err(ReverseError::NoBoundary));
        assert_eq!(pos, 2);
    }

    #[test]
    fn backward_does_not_treat_terminator_as_char() {
        let text = b"A\0";
        let mut pos = 2;
        assert_eq!(Utf8::prev_char(text, &mut pos), Err(ReverseError::NoBoundary));
    }

    #[test]
    fn backward_clamps_cursor_past_slice_end() {
        let text = b"ab";
        let mut pos = 10;
        assert_eq!(Utf8::prev_char(text, &mut pos), Ok(CharInfo::new(0x62, 1)));
        assert_eq!(pos, 1);
    }

    #[test]
    fn boundaries() {
        let text = "aé".as_bytes();
        assert!(Utf8::is_boundary(text, 0));
        assert!(Utf8::is_boundary(text, 1));
        assert!(!Utf8::is_boundary(text, 2));
        assert!(Utf8::is_boundary(text, 3));
        assert!(!Utf8::is_boundary(text, 4));
    }
}
