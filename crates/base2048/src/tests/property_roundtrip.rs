use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    alphabet::{ENC_TABLE, TAIL},
    decode, decode_into, encode, encode_into, encoded_len,
};

fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: decoding an encoding yields the original bytes.
#[test]
fn roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        decode(&encode(&bytes)).as_deref() == Ok(&bytes[..])
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: the appending variants leave existing buffer contents alone.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn into_variants_append(prefix: Vec<u8>, bytes: Vec<u8>) -> bool {
    let mut text = String::from("~");
    encode_into(&bytes, &mut text);
    let mut out = prefix.clone();
    decode_into(&text[1..], &mut out).is_ok()
        && out[..prefix.len()] == prefix[..]
        && out[prefix.len()..] == bytes[..]
}

/// Property: the symbol count is fixed by the input length, and the final
/// symbol comes from the alphabet the leftover bit count selects.
#[test]
fn length_and_final_symbol_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let symbols: Vec<char> = encode(&bytes).chars().collect();
        if symbols.len() != encoded_len(bytes.len()) {
            return false;
        }
        if !symbols
            .iter()
            .all(|c| ENC_TABLE.contains(c) || TAIL.contains(c))
        {
            return false;
        }
        // Only the final symbol may come from the tail alphabet.
        if symbols.iter().rev().skip(1).any(|c| TAIL.contains(c)) {
            return false;
        }
        match (bytes.len() * 8 % 11, symbols.last()) {
            (0, _) => true,
            (1..=3, Some(last)) => TAIL.contains(last),
            (_, Some(last)) => ENC_TABLE.contains(last),
            (_, None) => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: decoding arbitrary text either fails or yields bytes that
/// re-encode to a string of the same length.
#[test]
fn arbitrary_text_never_panics_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(symbols: Vec<u16>) -> bool {
        let text: String = symbols
            .iter()
            .map(|&s| {
                let s = usize::from(s);
                if s < ENC_TABLE.len() {
                    ENC_TABLE[s]
                } else {
                    TAIL[s % TAIL.len()]
                }
            })
            .collect();
        match decode(&text) {
            Ok(bytes) => encoded_len(bytes.len()) <= text.chars().count() + 1,
            Err(_) => true,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}
