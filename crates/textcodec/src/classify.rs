/// Returns `true` if `codepoint` should be drawn: anything from space upward
/// except DEL, plus carriage return and line feed.
#[inline]
#[must_use]
pub const fn is_printable(codepoint: u32) -> bool {
    (codepoint >= 0x20 && codepoint != 0x7F)
        || codepoint == b'\r' as u32
        || codepoint == b'\n' as u32
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x0A, true)]
    #[case(0x0D, true)]
    #[case(0x41, true)]
    #[case(0x20, true)]
    #[case(0x7E, true)]
    #[case(0x7F, false)]
    #[case(0x00, false)]
    #[case(0x09, false)]
    #[case(0x1F, false)]
    #[case(0xE9, true)]
    #[case(0x20AC, true)]
    fn printable(#[case] codepoint: u32, #[case] expected: bool) {
        assert_eq!(is_printable(codepoint), expected);
    }
}
