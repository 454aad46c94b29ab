//! The 26-letter Latin alphabet used for all index arithmetic.
//!
//! Letters are uppercase ASCII `A..=Z`. Positions are `u8` values in
//! `0..26`. Lowercase input must be uppercased by the caller before lookup.

/// Number of symbols in the alphabet.
pub const LEN: u8 = 26;

/// The alphabet as ordered ASCII bytes.
pub const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns `true` if `c` is one of the 26 uppercase alphabet letters.
pub fn contains(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Returns the position of `c` in the alphabet.
///
/// # Parameters
/// - `c`: An uppercase letter.
///
/// # Returns
/// `Some(0..26)` for `A..=Z`, `None` for anything else (including lowercase).
///
/// # Examples
///
/// ```
/// use enigma_sim::alphabet;
///
/// assert_eq!(alphabet::position('A'), Some(0));
/// assert_eq!(alphabet::position('Z'), Some(25));
/// assert_eq!(alphabet::position('a'), None);
/// ```
pub fn position(c: char) -> Option<u8> {
    if contains(c) {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Returns the letter at position `index`, wrapping modulo 26.
pub fn letter(index: u8) -> char {
    LETTERS[(index % LEN) as usize] as char
}

/// Adds a signed shift to a position, wrapping into `0..26`.
pub(crate) fn shift(index: u8, by: i16) -> u8 {
    (index as i16 + by).rem_euclid(LEN as i16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_letter_bijection() {
        for i in 0..LEN {
            assert_eq!(position(letter(i)), Some(i));
        }
    }

    #[test]
    fn test_non_letters_have_no_position() {
        for c in ['a', 'z', '0', ' ', '.', 'Ä', '@', '['] {
            assert_eq!(position(c), None, "{:?} should not be in the alphabet", c);
        }
    }

    #[test]
    fn test_shift_wraps_both_directions() {
        assert_eq!(shift(25, 1), 0);
        assert_eq!(shift(0, -1), 25);
        assert_eq!(shift(3, -29), 0);
        assert_eq!(shift(10, 0), 10);
    }
}
