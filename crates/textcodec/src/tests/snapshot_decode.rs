//! Snapshot tests of byte-level decode traces. Useful to catch unintended
//! changes to the state machine or to the resynchronisation rules of the
//! forward iterator.

use core::fmt::Write;
use std::string::String;

use crate::{Chars, DecodeStatus, Utf8, Utf8Decoder};

fn render_decoder(bytes: &[u8]) -> String {
    let mut decoder = Utf8Decoder::new();
    let mut out = String::new();
    for &b in bytes {
        let written = match decoder.decode(b) {
            DecodeStatus::Complete => writeln!(
                out,
                "{b:02X} complete U+{:04X} len={}",
                decoder.value(),
                decoder.char_len()
            ),
            DecodeStatus::Progress => {
                writeln!(out, "{b:02X} progress remaining={}", decoder.remaining())
            }
            DecodeStatus::Error(e) => writeln!(out, "{b:02X} error: {e}"),
        };
        written.unwrap();
    }
    out
}

fn render_chars(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (offset, info) in Chars::<Utf8>::new(bytes) {
        writeln!(out, "@{offset} U+{:04X} len={}", info.codepoint, info.len).unwrap();
    }
    out
}

#[test]
fn snapshot_decoder_trace() {
    let bytes = b"A\xC3\xA9\xE2\x82\xAC\x80\xC3B\xF0\x9F\x98\x80";
    insta::assert_snapshot!(render_decoder(bytes), @r"
    41 complete U+0041 len=1
    C3 progress remaining=1
    A9 complete U+00E9 len=2
    E2 progress remaining=2
    82 progress remaining=1
    AC complete U+20AC len=3
    80 error: invalid leading byte 0x80
    C3 progress remaining=1
    42 error: multi-byte sequence interrupted by 0x42
    F0 progress remaining=3
    9F progress remaining=2
    98 progress remaining=1
    80 complete U+1F600 len=4
    ");
}

#[test]
fn snapshot_forward_iteration_resynchronises() {
    // Same bytes as above: the stray 0x80 is skipped and the interrupting 'B'
    // is decoded as a character of its own.
    let bytes = b"A\xC3\xA9\xE2\x82\xAC\x80\xC3B\xF0\x9F\x98\x80\0ignored";
    insta::assert_snapshot!(render_chars(bytes), @r"
    @0 U+0041 len=1
    @1 U+00E9 len=2
    @3 U+20AC len=3
    @8 U+0042 len=1
    @9 U+1F600 len=4
    ");
}
