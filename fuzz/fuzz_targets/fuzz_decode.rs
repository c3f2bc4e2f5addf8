#![no_main]
use arbitrary::Arbitrary;
use base2048::alphabet::{ENC_TABLE, TAIL};
use libfuzzer_sys::fuzz_target;

/// Input biased towards the alphabet so the decoder gets past the first
/// character most of the time.
#[derive(Debug, Arbitrary)]
enum Input {
    Raw(String),
    Symbols(Vec<u16>),
}

impl Input {
    fn into_text(self) -> String {
        match self {
            Input::Raw(text) => text,
            Input::Symbols(symbols) => symbols
                .into_iter()
                .map(|s| match usize::from(s) {
                    s if s < ENC_TABLE.len() => ENC_TABLE[s],
                    s => TAIL[s % TAIL.len()],
                })
                .collect(),
        }
    }
}

fuzz_target!(|input: Input| {
    let text = input.into_text();
    let mut out = vec![0xAA];
    match base2048::decode_into(&text, &mut out) {
        Ok(()) => {
            let decoded = &out[1..];
            assert!(decoded.len() <= base2048::decoded_len_max(text.chars().count()));
        }
        Err(err) => {
            assert_eq!(out, [0xAA]);
            assert!(err.position() < text.chars().count());
        }
    }
});
