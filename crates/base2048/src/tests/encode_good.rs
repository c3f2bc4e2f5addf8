use alloc::{string::String, vec::Vec};
use core::time::Duration;

use rstest::rstest;

use crate::{alphabet::TAIL, decode, encode};

#[rstest]
#[case::empty(b"", "")]
#[case::single_byte(&[0xFF], "\u{03B5}")]
#[case::two_zero_bytes(&[0, 0], "\u{01E5}\u{01E5}")]
#[case::two_bit_tail(&[0, 0, 3], "\u{01E5}\u{01E5}\u{0F10}")]
#[case::hello(b"hello", "\u{06A9}\u{0412}\u{038C}\u{0255}")]
#[case::eleven_zeros(&[0; 11], "\u{01E5}\u{01E5}\u{01E5}\u{01E5}\u{01E5}\u{01E5}\u{01E5}\u{01E5}")]
#[case::eleven_ones(&[0xFF; 11], "\u{10F3}\u{10F3}\u{10F3}\u{10F3}\u{10F3}\u{10F3}\u{10F3}\u{10F3}")]
#[case::counting(
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    "\u{01E5}\u{0226}\u{07E2}\u{0226}\u{0543}\u{0202}\u{03B7}\u{03C0}"
)]
fn known_encodings(#[case] bytes: &[u8], #[case] expected: &str) {
    assert_eq!(encode(bytes), expected);
    assert_eq!(decode(expected).unwrap(), bytes);
}

/// Every residue class of `8 * len mod 11` takes a different branch at the
/// end of the input.
#[rstest]
#[timeout(Duration::from_secs(1))]
fn roundtrip_every_leftover_width(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10)] len: usize) {
    for total in [len, len + 11] {
        for fill in [0x00, 0x5A, 0xA5, 0xFF] {
            let bytes: Vec<u8> = (0..total).map(|i| fill ^ (i as u8)).collect();
            let text = encode(&bytes);
            assert_eq!(decode(&text).unwrap(), bytes, "len {total} fill {fill:#04x}");
        }
    }
}

#[test]
fn two_bit_remainder_uses_tail_value() {
    for low in 0..4u8 {
        let text = encode(&[0x12, 0x34, 0x54 | low]);
        let last = text.chars().last().unwrap();
        assert_eq!(last, TAIL[usize::from(low)]);
        assert_eq!(decode(&text).unwrap(), [0x12, 0x34, 0x54 | low]);
    }
}

#[test]
fn single_tail_symbol_decodes_to_one_byte() {
    let decoded = decode(&String::from(TAIL[7])).unwrap();
    assert_eq!(decoded, [7]);
}

#[test]
fn data_symbol_then_tail_symbol() {
    assert_eq!(decode("\u{01E5}\u{0F10}").unwrap(), [0, 3]);
}

/// A final data symbol with bits set above its significant width is
/// accepted; the surplus is folded into the last byte, which keeps only its
/// low 8 bits.
#[test]
fn surplus_bits_in_final_symbol_are_truncated() {
    // Two symbols leave 5 significant bits for the last one; U+10F3 is 2047.
    assert_eq!(decode("\u{01E5}\u{10F3}").unwrap(), [0, 0xFF]);
}
