use alloc::string::String;

use crate::{
    BITS_PER_SYMBOL,
    alphabet::{ENC_TABLE, TAIL},
};

/// Longest UTF-8 encoding of any symbol in either alphabet.
const MAX_SYMBOL_UTF8_LEN: usize = 3;

/// Gathers input bytes into 11-bit groups.
///
/// Holds at most 11 pending bits between calls to [`Packer::push`]. A full
/// group folded in with `remaining == 3` stays buffered until the next byte
/// or [`Packer::finish`] writes it out. The 18-bit transient (10 pending + 8
/// incoming) only exists inside `push`.
#[derive(Debug, Default)]
struct Packer {
    stage: u32,
    remaining: u32,
}

impl Packer {
    /// Absorb one byte, returning a symbol once a full group is available.
    fn push(&mut self, byte: u8) -> Option<char> {
        let byte = u32::from(byte);
        let need = BITS_PER_SYMBOL - self.remaining;
        if need < 8 {
            let leftover = 8 - need;
            let index = (self.stage << need) | (byte >> leftover);
            self.stage = byte & ((1 << leftover) - 1);
            self.remaining = leftover;
            Some(ENC_TABLE[index as usize])
        } else {
            self.stage = (self.stage << 8) | byte;
            self.remaining += 8;
            debug_assert!(self.remaining <= BITS_PER_SYMBOL);
            None
        }
    }

    /// Symbol for the pending partial group, if any bits are left over.
    ///
    /// Three bits or fewer go to the tail alphabet. Anything longer is written
    /// with a data symbol: 4 to 10 bits give a value below 2^10 that the
    /// decoder knows is short only because it is last, and 11 bits are a full
    /// group.
    fn finish(self) -> Option<char> {
        match self.remaining {
            0 => None,
            1..=3 => Some(TAIL[self.stage as usize]),
            _ => Some(ENC_TABLE[self.stage as usize]),
        }
    }
}

/// Encode `bytes` as a string of data symbols, plus at most one trailing
/// terminator symbol.
///
/// Encoding never fails; the empty slice encodes to the empty string.
///
/// ```rust
/// assert_eq!(base2048::encode(&[]), "");
/// assert_eq!(base2048::encode(&[0xFF]).chars().count(), 1);
/// ```
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::new();
    encode_into(bytes, &mut out);
    out
}

/// Encode `bytes`, appending the symbols to `out`.
pub fn encode_into(bytes: &[u8], out: &mut String) {
    out.reserve(encoded_len(bytes.len()).saturating_mul(MAX_SYMBOL_UTF8_LEN));

    let mut packer = Packer::default();
    for &byte in bytes {
        if let Some(symbol) = packer.push(byte) {
            out.push(symbol);
        }
    }
    if let Some(symbol) = packer.finish() {
        out.push(symbol);
    }
}

/// Number of symbols [`encode`] produces for `byte_len` input bytes.
///
/// This is `ceil(8 * byte_len / 11)`, computed without overflowing.
#[must_use]
pub const fn encoded_len(byte_len: usize) -> usize {
    (byte_len / 11) * 8 + ((byte_len % 11) * 8).div_ceil(11)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(3, 3)]
    #[case(4, 3)]
    #[case(10, 8)]
    #[case(11, 8)]
    #[case(12, 9)]
    #[case(22, 16)]
    fn encoded_len_matches_symbol_count(#[case] byte_len: usize, #[case] expected: usize) {
        assert_eq!(encoded_len(byte_len), expected);
        assert_eq!(encode(&alloc::vec![0xA5; byte_len]).chars().count(), expected);
    }

    #[test]
    fn encoded_len_does_not_overflow() {
        assert_eq!(encoded_len(usize::MAX), (usize::MAX / 11) * 8 + 3);
    }

    #[test]
    fn packer_buffers_at_most_one_group() {
        let mut packer = Packer::default();
        for byte in 0..=u8::MAX {
            packer.push(byte);
            assert!(packer.remaining <= BITS_PER_SYMBOL);
            assert!(packer.stage < 1 << packer.remaining);
        }
    }

    #[test]
    fn full_group_buffered_at_end_of_input() {
        let mut packer = Packer::default();
        let emitted: alloc::vec::Vec<char> = [0xAB; 11]
            .into_iter()
            .filter_map(|byte| packer.push(byte))
            .collect();
        assert_eq!(emitted.len(), 7);
        assert_eq!(packer.remaining, 11);
        let stage = packer.stage as usize;
        assert_eq!(packer.finish(), Some(ENC_TABLE[stage]));
    }

    #[test]
    fn eleven_bytes_encode_to_eight_full_symbols() {
        let text = encode(&[0; 11]);
        assert_eq!(text, "\u{01E5}".repeat(8));
        assert_eq!(crate::decode(&text).unwrap(), [0; 11]);
    }

    #[test]
    fn encode_into_appends() {
        let mut out = String::from("prefix:");
        encode_into(&[0xFF], &mut out);
        assert_eq!(out, "prefix:\u{03B5}");
    }
}
