//! The fixed symbol tables.
//!
//! Three tables define the encoding:
//!
//! * [`ENC_TABLE`] maps each 11-bit value to its data symbol.
//! * [`TAIL`] holds the eight terminator symbols, used only for a final group
//!   of three bits or fewer.
//! * [`DEC_TABLE`] maps every code point up to [`MAX_CODE_POINT`] back to its
//!   11-bit value, or to [`TERMINATOR`] for anything that is not a data
//!   symbol.
//!
//! The reverse table is derived from the forward table at compile time, and
//! the derivation rejects duplicate or colliding symbols, so the two can never
//! drift apart.

mod table;

pub use table::ENC_TABLE;

/// Terminator symbols, indexed by the value of the final partial group.
pub const TAIL: [char; 8] = [
    '\u{0F0D}', '\u{0F0E}', '\u{0F0F}', '\u{0F10}', '\u{0F11}', '\u{0F06}', '\u{0F08}', '\u{0F12}',
];

/// Highest code point covered by [`DEC_TABLE`]. Anything above it is invalid.
pub const MAX_CODE_POINT: u32 = 4339;

/// Reverse table entry for code points that are not data symbols.
pub const TERMINATOR: u16 = 0xFFFF;

const DEC_TABLE_LEN: usize = MAX_CODE_POINT as usize + 1;

/// 11-bit value of each code point in `0..=MAX_CODE_POINT`, or [`TERMINATOR`].
pub static DEC_TABLE: [u16; DEC_TABLE_LEN] = build_dec_table();

#[expect(clippy::cast_possible_truncation)]
const fn build_dec_table() -> [u16; DEC_TABLE_LEN] {
    let mut table = [TERMINATOR; DEC_TABLE_LEN];

    let mut value = 0;
    while value < ENC_TABLE.len() {
        let code_point = ENC_TABLE[value] as u32 as usize;
        assert!(code_point < DEC_TABLE_LEN, "data symbol above MAX_CODE_POINT");
        assert!(table[code_point] == TERMINATOR, "duplicate data symbol");
        table[code_point] = value as u16;
        value += 1;
    }

    let mut index = 0;
    while index < TAIL.len() {
        let code_point = TAIL[index] as u32 as usize;
        assert!(code_point < DEC_TABLE_LEN, "tail symbol above MAX_CODE_POINT");
        assert!(table[code_point] == TERMINATOR, "tail symbol is also a data symbol");
        let mut other = 0;
        while other < index {
            assert!(TAIL[other] as u32 != TAIL[index] as u32, "duplicate tail symbol");
            other += 1;
        }
        index += 1;
    }

    table
}

/// What a code point means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A member of [`ENC_TABLE`] carrying the given 11-bit value.
    Data(u16),
    /// Flagged as terminator by [`DEC_TABLE`]. This covers the [`TAIL`]
    /// symbols and every other code point the alphabet leaves unused; see
    /// [`tail_index`] to tell them apart.
    Terminator,
}

/// Look up `c` in the reverse table.
///
/// Returns `None` when `c` lies above [`MAX_CODE_POINT`].
#[must_use]
pub fn resolve(c: char) -> Option<Symbol> {
    let entry = *DEC_TABLE.get(u32::from(c) as usize)?;
    Some(if entry == TERMINATOR {
        Symbol::Terminator
    } else {
        Symbol::Data(entry)
    })
}

/// Position of `c` in [`TAIL`], if it is a terminator symbol.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn tail_index(c: char) -> Option<u8> {
    TAIL.iter().position(|&t| t == c).map(|i| i as u8)
}
