//! Rotor stepping as a pure state transition.
//!
//! The machine calls [`RotorOffsets::advance`] once before every letter and
//! writes the result back into its rotors. The rule reproduced here is the
//! one this simulator has always used, not the historical odometer:
//!
//! 1. The middle rotor steps on every letter. If that step lands on its
//!    notch, the left rotor steps too.
//! 2. Otherwise, if the right rotor sits one before its notch, the middle
//!    rotor steps a second time and the left rotor steps.
//! 3. The right rotor steps last, on every letter.

use std::fmt;

use crate::rotor::tick;

/// Offsets of the three rotors, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotorOffsets {
    /// Left (slowest) rotor.
    pub left: u8,
    /// Middle rotor.
    pub middle: u8,
    /// Right (entry-side) rotor.
    pub right: u8,
}

impl RotorOffsets {
    /// Creates offsets from a `[left, middle, right]` triple.
    pub fn new(offsets: [u8; 3]) -> Self {
        RotorOffsets {
            left: offsets[0],
            middle: offsets[1],
            right: offsets[2],
        }
    }

    /// Returns the offsets as `[left, middle, right]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.left, self.middle, self.right]
    }

    /// Computes the offsets after one stepping cycle.
    ///
    /// # Parameters
    /// - `notches`: Notch offsets of the `[left, middle, right]` rotors.
    ///
    /// # Returns
    /// The offsets the rotors hold when the next letter is enciphered.
    pub fn advance(self, notches: [u8; 3]) -> Self {
        let [left_notch, middle_notch, right_notch] = notches;

        let mut left = self.left;
        let (mut middle, middle_at_notch) = tick(self.middle, middle_notch);

        if middle_at_notch {
            left = tick(left, left_notch).0;
        } else if i16::from(self.right) == i16::from(right_notch) - 1 {
            middle = tick(middle, middle_notch).0;
            left = tick(left, left_notch).0;
        }

        let right = tick(self.right, right_notch).0;

        RotorOffsets {
            left,
            middle,
            right,
        }
    }
}

impl From<[u8; 3]> for RotorOffsets {
    fn from(offsets: [u8; 3]) -> Self {
        Self::new(offsets)
    }
}

impl fmt::Display for RotorOffsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.left, self.middle, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotor::NOTCH;

    const NOTCHES: [u8; 3] = [NOTCH, NOTCH, NOTCH];

    fn step(offsets: [u8; 3]) -> [u8; 3] {
        RotorOffsets::new(offsets).advance(NOTCHES).to_array()
    }

    #[test]
    fn test_middle_and_right_advance_every_letter() {
        assert_eq!(step([0, 0, 0]), [0, 1, 1]);
        assert_eq!(step([0, 1, 1]), [0, 2, 2]);
    }

    #[test]
    fn test_middle_reaching_notch_steps_left() {
        assert_eq!(step([3, 15, 0]), [4, 16, 1]);
    }

    #[test]
    fn test_right_before_notch_double_steps_middle() {
        // Middle goes 4 -> 5 -> 6, left steps once.
        assert_eq!(step([0, 4, 15]), [1, 6, 16]);
    }

    #[test]
    fn test_middle_notch_wins_over_right_trigger() {
        // Middle lands on its notch, so the right-rotor branch is not taken.
        assert_eq!(step([0, 15, 15]), [1, 16, 16]);
    }

    #[test]
    fn test_double_step_into_notch_does_not_step_left_twice() {
        assert_eq!(step([7, 14, 15]), [8, 16, 16]);
    }

    #[test]
    fn test_all_offsets_wrap() {
        assert_eq!(step([25, 15, 25]), [0, 16, 0]);
        assert_eq!(step([25, 25, 15]), [0, 1, 16]);
    }

    #[test]
    fn test_zero_notch_never_triggers_right_branch() {
        let next = RotorOffsets::new([0, 0, 25]).advance([0, 5, 0]);
        assert_eq!(next.to_array(), [0, 1, 0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(RotorOffsets::new([1, 2, 3]).to_string(), "1, 2, 3");
    }
}
