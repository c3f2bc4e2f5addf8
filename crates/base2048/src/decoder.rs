use alloc::vec::Vec;

use crate::{
    BITS_PER_SYMBOL,
    alphabet::{self, Symbol},
    error::DecodeError,
};

/// Gathers decoded bits into whole bytes.
///
/// Between symbols at most 8 bits are pending: [`Unpacker::push`] flushes
/// every byte it can before returning.
#[derive(Debug, Default)]
struct Unpacker {
    stage: u32,
    remaining: u32,
    /// Bits consumed so far mod 8, counting every symbol as a full group.
    residue: u32,
}

impl Unpacker {
    /// Account for one more symbol. Must be called once per symbol, before
    /// its bits are pushed.
    fn advance(&mut self) {
        self.residue = (self.residue + BITS_PER_SYMBOL) % 8;
    }

    /// Bits a final data symbol contributes: those its full width would
    /// carry, minus the padding that realigns the stream to a byte boundary.
    fn last_symbol_bits(&self) -> u32 {
        BITS_PER_SYMBOL - self.residue
    }

    /// Bits still owed to complete the current byte.
    fn owed_bits(&self) -> u32 {
        8 - self.remaining
    }

    #[expect(clippy::cast_possible_truncation)]
    fn push(&mut self, n_bits: u32, bits: u32, out: &mut Vec<u8>) {
        self.remaining += n_bits;
        self.stage = (self.stage << n_bits) | bits;
        while self.remaining > 8 {
            self.remaining -= 8;
            out.push((self.stage >> self.remaining) as u8);
            self.stage &= (1 << self.remaining) - 1;
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    fn finish(self, out: &mut Vec<u8>) {
        if self.remaining > 0 {
            out.push((self.stage >> (8 - self.remaining)) as u8);
        }
    }
}

/// Decode a string produced by [`encode`](crate::encode).
///
/// # Errors
///
/// Returns a [`DecodeError`] describing the first malformed character. No
/// partial output is returned.
///
/// ```rust
/// # fn main() -> Result<(), base2048::DecodeError> {
/// assert_eq!(base2048::decode("")?, b"");
/// assert_eq!(base2048::decode("\u{03B5}")?, [0xFF]);
/// # Ok(())
/// # }
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    decode_into(text, &mut out)?;
    Ok(out)
}

/// Decode `text`, appending the bytes to `out`.
///
/// # Errors
///
/// As [`decode`]. On error `out` is restored to its original length.
pub fn decode_into(text: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    let start = out.len();
    let result = decode_symbols(text, out);
    if result.is_err() {
        out.truncate(start);
    }
    result
}

/// Upper bound on the bytes [`decode`] produces from `symbol_count` symbols.
#[must_use]
pub const fn decoded_len_max(symbol_count: usize) -> usize {
    (symbol_count / 8) * 11 + ((symbol_count % 8) * 11).div_ceil(8)
}

fn decode_symbols(text: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    let count = text.chars().count();
    out.reserve(decoded_len_max(count));

    let mut unpacker = Unpacker::default();
    let mut symbols = text.chars().enumerate().peekable();
    while let Some((position, character)) = symbols.next() {
        unpacker.advance();

        let (n_bits, bits) = match alphabet::resolve(character) {
            None => {
                return Err(DecodeError::InvalidCharacter {
                    position,
                    code_point: u32::from(character),
                });
            }
            Some(Symbol::Terminator) => {
                if let Some(&(next_position, next)) = symbols.peek() {
                    return Err(DecodeError::UnexpectedCharacter {
                        position: next_position,
                        character: next,
                        terminator_position: position,
                        terminator: character,
                    });
                }
                let index = alphabet::tail_index(character).ok_or(
                    DecodeError::InvalidTerminationCharacter {
                        position,
                        character,
                    },
                )?;
                let need = unpacker.owed_bits();
                if u32::from(index) >= 1 << need {
                    return Err(DecodeError::InvalidTailCharacter {
                        position,
                        character,
                    });
                }
                (need, u32::from(index))
            }
            Some(Symbol::Data(value)) => {
                let n_bits = if position + 1 == count {
                    unpacker.last_symbol_bits()
                } else {
                    BITS_PER_SYMBOL
                };
                (n_bits, u32::from(value))
            }
        };

        unpacker.push(n_bits, bits, out);
    }
    unpacker.finish(out);

    Ok(())
}
