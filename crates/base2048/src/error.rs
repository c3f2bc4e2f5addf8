use thiserror::Error;

/// Why a string could not be decoded.
///
/// Positions count characters, not bytes, from the start of the input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The code point lies outside the range the reverse table covers.
    #[error("Invalid character {position}: [{code_point}]")]
    InvalidCharacter {
        /// Index of the offending character.
        position: usize,
        /// Its code point, as a Unicode scalar value. Characters outside the
        /// Basic Multilingual Plane report the full scalar, not a surrogate.
        code_point: u32,
    },
    /// A terminator was followed by more input.
    #[error(
        "Unexpected character {position}: [{character}] after termination sequence \
         {terminator_position}: [{terminator}]"
    )]
    UnexpectedCharacter {
        /// Index of the character following the terminator.
        position: usize,
        /// The character following the terminator.
        character: char,
        /// Index of the terminator.
        terminator_position: usize,
        /// The terminator itself.
        terminator: char,
    },
    /// The final character is neither a data symbol nor a tail symbol.
    #[error("Invalid termination character {position}: [{character}]")]
    InvalidTerminationCharacter {
        /// Index of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },
    /// The tail symbol encodes more bits than the input has room for.
    #[error("Invalid tail character {position}: [{character}]")]
    InvalidTailCharacter {
        /// Index of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },
}

impl DecodeError {
    /// Index of the character the error is reported against.
    #[must_use]
    pub fn position(&self) -> usize {
        match *self {
            Self::InvalidCharacter { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::InvalidTerminationCharacter { position, .. }
            | Self::InvalidTailCharacter { position, .. } => position,
        }
    }
}
