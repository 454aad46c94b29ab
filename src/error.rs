//! Error types for the enigma-sim library.

use std::fmt;

/// Errors produced while configuring an Enigma machine.
///
/// Once a [`Machine`](crate::Machine) is built, enciphering never fails,
/// so every variant here is a construction-time error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Rotor type name is not one of the catalog keys.
    UnknownRotorType(String),
    /// Initial rotor position is outside the valid range [0, 25].
    PositionOutOfRange {
        /// Rotor slot (0 = left, 1 = middle, 2 = right).
        slot: usize,
        /// The rejected value.
        value: u8,
    },
    /// A configuration document could not be parsed.
    InvalidConfig(String),
}

impl fmt::Display for EnigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnigmaError::UnknownRotorType(name) => {
                write!(f, "Unknown rotor type: {:?}", name)
            }
            EnigmaError::PositionOutOfRange { slot, value } => {
                write!(
                    f,
                    "Rotor position {} in slot {} is outside the valid range 0..=25",
                    value, slot
                )
            }
            EnigmaError::InvalidConfig(reason) => {
                write!(f, "Invalid machine configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for EnigmaError {}

impl From<serde_json::Error> for EnigmaError {
    fn from(err: serde_json::Error) -> Self {
        EnigmaError::InvalidConfig(err.to_string())
    }
}
