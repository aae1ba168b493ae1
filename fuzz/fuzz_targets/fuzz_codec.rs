#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcodec::{
    Chars, Encoding, ReverseError, Utf8, byte_count, char_count, encode,
    insert_char, remove_next_char, remove_prev_char, terminated,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(u32),
    Backspace,
    Delete,
    Left,
    Right,
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    spare: u8,
    ops: Vec<Op>,
}

/// Invariants that must hold for any byte sequence, well-formed or not.
fn check_iteration(bytes: &[u8]) {
    let len = byte_count(bytes);

    let mut pos = 0;
    let mut count = 0;
    while let Some(info) = Utf8::next_char(bytes, &mut pos) {
        count += 1;
        assert!(pos <= len);
        assert!((1..=4).contains(&info.len));
    }
    assert_eq!(char_count::<Utf8>(bytes), count);

    for cursor in 0..=len {
        let mut back = cursor;
        match Utf8::prev_char(bytes, &mut back) {
            Ok(info) => assert_eq!(back + usize::from(info.len), cursor),
            Err(ReverseError::AtStart) => assert_eq!(cursor, 0),
            Err(ReverseError::NoBoundary) => assert_eq!(back, cursor),
        }
    }

    // Well-formed text must agree with std in both directions.
    if let Ok(s) = std::str::from_utf8(terminated(bytes)) {
        let expected: Vec<(usize, u32)> = s.char_indices().map(|(i, c)| (i, c as u32)).collect();
        let forward: Vec<(usize, u32)> = Chars::<Utf8>::new(bytes)
            .map(|(off, c)| (off, c.codepoint))
            .collect();
        let mut backward: Vec<(usize, u32)> = Chars::<Utf8>::new(bytes)
            .rev()
            .map(|(off, c)| (off, c.codepoint))
            .collect();
        backward.reverse();
        assert_eq!(forward, expected);
        assert_eq!(backward, expected);
    }
}

fn check_encode(codepoint: u32) {
    let mut buf = [0u8; textcodec::MAX_ENCODED_LEN + 1];
    let Ok(n) = encode(codepoint, &mut buf) else {
        assert!(codepoint > textcodec::MAX_CODEPOINT);
        return;
    };
    if codepoint == 0 {
        return;
    }
    let mut pos = 0;
    let info = Utf8::next_char(&buf, &mut pos).expect("encoded character decodes");
    assert_eq!(info.codepoint, codepoint);
    assert_eq!(pos, n);
}

/// Replays edit-box operations on a buffer with `spare` bytes of headroom.
fn run_edits(input: &Input) {
    let text = terminated(&input.text);
    let mut buf = vec![0u8; text.len() + usize::from(input.spare) + 1];
    buf[..text.len()].copy_from_slice(text);
    let mut caret = 0;

    for op in &input.ops {
        let before = buf.clone();
        let result = match *op {
            Op::Insert(cp) => {
                check_encode(cp);
                insert_char::<Utf8>(&mut buf, caret, cp).map(|c| caret = c)
            }
            Op::Backspace => remove_prev_char::<Utf8>(&mut buf, caret).map(|c| caret = c),
            Op::Delete => remove_next_char::<Utf8>(&mut buf, caret).map(|_| ()),
            Op::Left => {
                let _ = Utf8::prev_char(&buf, &mut caret);
                Ok(())
            }
            Op::Right => {
                let _ = Utf8::next_char(&buf, &mut caret);
                Ok(())
            }
        };
        match result {
            Ok(()) => assert!(caret <= byte_count(&buf)),
            // Failed edits must leave the buffer untouched.
            Err(_) => assert_eq!(buf, before),
        }
        assert!(buf.contains(&0), "edit buffer lost its terminator");
    }
    check_iteration(&buf);
}

fuzz_target!(|input: Input| {
    check_iteration(&input.text);
    run_edits(&input);
});
