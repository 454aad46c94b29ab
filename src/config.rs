//! Serializable machine settings.
//!
//! A [`MachineConfig`] is what two operators share out of band: the rotor
//! order, the starting positions and the plugboard. The same config builds
//! the enciphering and the deciphering machine.

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::rotor::RotorType;

/// Settings for one machine, as catalog keys and plain numbers.
///
/// Missing fields fall back to [`MachineConfig::default`] when
/// deserialized.
///
/// # Examples
///
/// ```
/// use enigma_sim::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "positions": [0, 0, 0], "plugboard": "" }"#).unwrap();
/// let mut machine = config.build().unwrap();
/// assert_eq!(machine.encode("AB"), "YP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Catalog keys for the left, middle and right rotors.
    pub rotors: [String; 3],
    /// Initial offsets, each in `0..=25`.
    pub positions: [u8; 3],
    /// Comma-separated plugboard pairs.
    pub plugboard: String,
}

impl Default for MachineConfig {
    /// Rotors I, II, III at `A A A` with `A<->B` and `C<->D` plugged.
    fn default() -> Self {
        MachineConfig {
            rotors: RotorType::ALL.map(|t| t.name().to_string()),
            positions: [0, 0, 0],
            plugboard: "AB,CD".to_string(),
        }
    }
}

impl MachineConfig {
    /// Parses a config from JSON.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidConfig`] if the document is not valid
    /// JSON for this shape. Semantic checks happen in
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, EnigmaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, EnigmaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks rotor keys and positions.
    ///
    /// # Returns
    /// The parsed rotor types, left to right.
    ///
    /// # Errors
    /// [`EnigmaError::UnknownRotorType`] or
    /// [`EnigmaError::PositionOutOfRange`].
    pub fn validate(&self) -> Result<[RotorType; 3], EnigmaError> {
        let kinds = [
            self.rotors[0].parse()?,
            self.rotors[1].parse()?,
            self.rotors[2].parse()?,
        ];
        for (slot, &value) in self.positions.iter().enumerate() {
            if value >= alphabet::LEN {
                return Err(EnigmaError::PositionOutOfRange { slot, value });
            }
        }
        Ok(kinds)
    }

    /// Validates the config and builds a machine at the initial positions.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let kinds = self.validate()?;
        Machine::with_rotors(kinds, self.positions, Plugboard::build(&self.plugboard))
    }

    /// Returns the initial positions as letters, e.g. `"AAA"`.
    pub fn ring_letters(&self) -> String {
        self.positions.iter().map(|&p| alphabet::letter(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_catalog_order() {
        let config = MachineConfig::default();
        assert_eq!(config.rotors, ["Rotor I", "Rotor II", "Rotor III"]);
        assert_eq!(config.positions, [0, 0, 0]);
        assert_eq!(config.plugboard, "AB,CD");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MachineConfig::from_json(r#"{ "positions": [1, 2, 3] }"#).unwrap();
        assert_eq!(config.positions, [1, 2, 3]);
        assert_eq!(config.plugboard, "AB,CD");
    }

    #[test]
    fn test_json_round_trip() {
        let config = MachineConfig {
            rotors: [
                "Rotor III".to_string(),
                "Rotor I".to_string(),
                "Rotor II".to_string(),
            ],
            positions: [4, 5, 6],
            plugboard: "QW,ER".to_string(),
        };
        let json = config.to_json().unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        let err = MachineConfig::from_json("{ rotors: ").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidConfig(_)));
    }

    #[test]
    fn test_wrong_arity_is_invalid_config() {
        let err = MachineConfig::from_json(r#"{ "positions": [1, 2] }"#).unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_unknown_rotor() {
        let mut config = MachineConfig::default();
        config.rotors[2] = "Rotor V".to_string();
        assert_eq!(
            config.validate(),
            Err(EnigmaError::UnknownRotorType("Rotor V".to_string()))
        );
    }

    #[test]
    fn test_validate_position_range() {
        let mut config = MachineConfig::default();
        config.positions = [0, 0, 40];
        assert_eq!(
            config.build().unwrap_err(),
            EnigmaError::PositionOutOfRange { slot: 2, value: 40 }
        );
    }

    #[test]
    fn test_ring_letters() {
        let mut config = MachineConfig::default();
        config.positions = [0, 12, 25];
        assert_eq!(config.ring_letters(), "AMZ");
    }
}
