//! The fixed reflector shared by every machine.

use crate::alphabet;

/// An involutive permutation with no fixed point.
#[derive(Debug, PartialEq, Eq)]
pub struct Reflector {
    wiring: &'static str,
}

/// The one reflector every [`Machine`](crate::Machine) uses.
pub static REFLECTOR: Reflector = Reflector {
    wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
};

impl Reflector {
    /// Returns the wiring as a 26-letter string.
    pub fn mapping(&self) -> &'static str {
        self.wiring
    }

    /// Reflects a letter. Characters outside the alphabet are returned
    /// unchanged.
    pub fn apply(&self, c: char) -> char {
        match alphabet::position(c) {
            Some(p) => alphabet::letter(self.apply_index(p)),
            None => c,
        }
    }

    pub(crate) fn apply_index(&self, p: u8) -> u8 {
        self.wiring.as_bytes()[p as usize] - b'A'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fixed_point() {
        for (i, c) in REFLECTOR.mapping().chars().enumerate() {
            assert_ne!(c, alphabet::letter(i as u8));
        }
    }

    #[test]
    fn test_involution() {
        for c in 'A'..='Z' {
            assert_eq!(REFLECTOR.apply(REFLECTOR.apply(c)), c);
        }
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(REFLECTOR.apply('A'), 'Y');
        assert_eq!(REFLECTOR.apply('Z'), 'T');
        assert_eq!(REFLECTOR.mapping().len(), 26);
    }
}
