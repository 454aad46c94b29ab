//! Rotors: the fixed wiring catalog and the rotating per-machine instances.
//!
//! A [`RotorSpec`] is an immutable permutation of the alphabet plus a notch
//! offset. Three specs exist, selected through [`RotorType`]. A
//! [`RotorState`] pairs a spec with a current offset and performs the
//! offset-shifted substitution in both signal directions.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::EnigmaError;

/// Offset at which every built-in rotor signals its neighbour ("Q").
pub const NOTCH: u8 = 16;

/// Immutable description of one rotor type.
///
/// Both directions of the wiring are stored as alphabet positions so that
/// the backward path is a table lookup rather than a search.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    wiring: &'static str,
    forward: [u8; 26],
    inverse: [u8; 26],
    notch: u8,
}

impl RotorSpec {
    /// Builds a spec from a 26-letter uppercase wiring string.
    ///
    /// The wiring must be a permutation of `A..=Z`. The catalog tests check
    /// this.
    const fn new(wiring: &'static str, notch: u8) -> Self {
        let bytes = wiring.as_bytes();
        let mut forward = [0u8; 26];
        let mut inverse = [0u8; 26];
        let mut i = 0;
        while i < 26 {
            let target = bytes[i] - b'A';
            forward[i] = target;
            inverse[target as usize] = i as u8;
            i += 1;
        }
        RotorSpec {
            wiring,
            forward,
            inverse,
            notch,
        }
    }

    /// Returns the wiring as the 26-letter string it was defined with.
    pub fn wiring(&self) -> &'static str {
        self.wiring
    }

    /// Returns the notch offset.
    pub fn notch(&self) -> u8 {
        self.notch
    }
}

static ROTOR_I: RotorSpec = RotorSpec::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", NOTCH);
static ROTOR_II: RotorSpec = RotorSpec::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", NOTCH);
static ROTOR_III: RotorSpec = RotorSpec::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", NOTCH);

/// Catalog key selecting one of the built-in rotor wirings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorType {
    /// "Rotor I"
    I,
    /// "Rotor II"
    II,
    /// "Rotor III"
    III,
}

impl RotorType {
    /// Every catalog entry, in catalog order.
    pub const ALL: [RotorType; 3] = [RotorType::I, RotorType::II, RotorType::III];

    /// Returns the catalog key, e.g. `"Rotor II"`.
    pub fn name(self) -> &'static str {
        match self {
            RotorType::I => "Rotor I",
            RotorType::II => "Rotor II",
            RotorType::III => "Rotor III",
        }
    }

    /// Returns the shared wiring for this rotor type.
    pub fn spec(self) -> &'static RotorSpec {
        match self {
            RotorType::I => &ROTOR_I,
            RotorType::II => &ROTOR_II,
            RotorType::III => &ROTOR_III,
        }
    }
}

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorType {
    type Err = EnigmaError;

    /// Parses an exact catalog key. Unknown keys are an error, never a
    /// fallback to some default rotor.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::RotorType;
    ///
    /// assert_eq!("Rotor III".parse::<RotorType>().unwrap(), RotorType::III);
    /// assert!("Rotor IV".parse::<RotorType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| EnigmaError::UnknownRotorType(s.to_string()))
    }
}

/// Advances an offset by one, returning the new offset and whether it
/// landed on `notch`.
pub(crate) fn tick(offset: u8, notch: u8) -> (u8, bool) {
    let next = (offset + 1) % alphabet::LEN;
    (next, next == notch)
}

/// One rotor installed in a machine: a shared spec plus its current offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorState {
    kind: RotorType,
    spec: &'static RotorSpec,
    offset: u8,
}

impl RotorState {
    /// Creates a rotor of the given type at `offset`.
    ///
    /// The offset is reduced modulo 26; range validation belongs to the
    /// machine boundary.
    pub fn new(kind: RotorType, offset: u8) -> Self {
        RotorState {
            kind,
            spec: kind.spec(),
            offset: offset % alphabet::LEN,
        }
    }

    /// Returns the rotor type.
    pub fn kind(&self) -> RotorType {
        self.kind
    }

    /// Returns the current offset (0..26).
    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: u8) {
        self.offset = offset % alphabet::LEN;
    }

    /// Returns the notch offset of this rotor's spec.
    pub fn notch(&self) -> u8 {
        self.spec.notch
    }

    /// Formats the current offset as letter and number, e.g. `"C (2)"`.
    pub fn window(&self) -> String {
        format!("{} ({})", alphabet::letter(self.offset), self.offset)
    }

    /// Substitutes a letter on the entry-to-reflector path.
    ///
    /// Characters outside the alphabet are returned unchanged.
    pub fn forward(&self, c: char) -> char {
        match alphabet::position(c) {
            Some(p) => alphabet::letter(self.forward_index(p)),
            None => c,
        }
    }

    /// Substitutes a letter on the reflector-to-exit path.
    ///
    /// Exact inverse of [`forward`](Self::forward) at the same offset.
    /// Characters outside the alphabet are returned unchanged.
    pub fn backward(&self, c: char) -> char {
        match alphabet::position(c) {
            Some(p) => alphabet::letter(self.backward_index(p)),
            None => c,
        }
    }

    pub(crate) fn forward_index(&self, p: u8) -> u8 {
        let contact = alphabet::shift(p, self.offset as i16);
        alphabet::shift(self.spec.forward[contact as usize], -(self.offset as i16))
    }

    pub(crate) fn backward_index(&self, p: u8) -> u8 {
        let contact = alphabet::shift(p, self.offset as i16);
        alphabet::shift(self.spec.inverse[contact as usize], -(self.offset as i16))
    }

    /// Advances the rotor one position.
    ///
    /// # Returns
    /// `true` if the new offset equals the notch. The caller uses this to
    /// decide whether the neighbouring rotor moves.
    pub fn step(&mut self) -> bool {
        let (next, at_notch) = tick(self.offset, self.spec.notch);
        self.offset = next;
        at_notch
    }
}
