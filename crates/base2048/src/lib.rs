//! Binary-to-text encoding at 11 bits per character.
//!
//! Every byte sequence maps to a string over a fixed alphabet of 2048
//! symbols, plus eight terminator symbols that may only appear as the final
//! character. The encoding is dense: a symbol carries 11 bits where base64
//! carries 6, so the encoded text is shorter in *characters* than any of the
//! RFC 4648 encodings.
//!
//! The data alphabet is this crate's own (see [`alphabet::ENC_TABLE`]). Only
//! the eight terminator symbols are shared with other base2048
//! implementations, so encoded text does not interoperate with them.
//!
//! ```rust
//! # fn main() -> Result<(), base2048::DecodeError> {
//! let text = base2048::encode(b"hello");
//! assert_eq!(text.chars().count(), base2048::encoded_len(5));
//! assert_eq!(base2048::decode(&text)?, b"hello");
//! # Ok(())
//! # }
//! ```
//!
//! Decoding validates its input and reports the first offending character:
//!
//! ```rust
//! let err = base2048::decode("\u{1100}").unwrap_err();
//! assert_eq!(err.position(), 0);
//! assert_eq!(err.to_string(), "Invalid character 0: [4352]");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod alphabet;
mod decoder;
mod encoder;
mod error;

#[cfg(feature = "serde")]
pub mod serde;

#[cfg(test)]
mod tests;

pub use decoder::{decode, decode_into, decoded_len_max};
pub use encoder::{encode, encode_into, encoded_len};
pub use error::DecodeError;

/// Number of bits carried by one full data symbol.
pub const BITS_PER_SYMBOL: u32 = 11;
