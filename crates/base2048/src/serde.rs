//! Serialize byte fields as base2048 strings.
//!
//! ```rust
//! #[derive(serde::Serialize, serde::Deserialize)]
//! struct Blob {
//!     #[serde(with = "base2048::serde")]
//!     data: Vec<u8>,
//! }
//! ```

use alloc::{borrow::Cow, vec::Vec};

use ::serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// Serialize `bytes` as an encoded string.
///
/// # Errors
///
/// Only those raised by `serializer`.
pub fn serialize<T, S>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]> + ?Sized,
    S: Serializer,
{
    serializer.serialize_str(&crate::encode(bytes.as_ref()))
}

/// Deserialize an encoded string back into bytes.
///
/// # Errors
///
/// Fails if the input is not a string, or if it does not decode.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = <Cow<'de, str>>::deserialize(deserializer)?;
    crate::decode(&text).map_err(D::Error::custom)
}
