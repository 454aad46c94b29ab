//! Plugboard: caller-configured letter swaps applied on entry and exit.

use crate::alphabet;

/// A letter-swap table covering all 26 letters.
///
/// Built once from a pair-list such as `"AB, cd,EF"` and never mutated
/// afterwards. Letters not named in any pair map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    mapping: [u8; 26],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Returns a plugboard with no swaps.
    pub fn identity() -> Self {
        let mut mapping = [0u8; 26];
        for (i, slot) in mapping.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { mapping }
    }

    /// Parses a comma-separated pair-list.
    ///
    /// Each token is trimmed and uppercased. Tokens that are not exactly two
    /// alphabet letters are skipped. Parsing never fails.
    ///
    /// A token naming a letter that an earlier token already wired writes
    /// over the earlier entries for its own two letters only: `"AB,AC"`
    /// leaves `A -> C`, `C -> A` and the stale `B -> A`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma_sim::Plugboard;
    ///
    /// let pb = Plugboard::build("AB, cd, X, 12");
    /// assert_eq!(pb.apply('A'), 'B');
    /// assert_eq!(pb.apply('D'), 'C');
    /// assert_eq!(pb.apply('X'), 'X');
    /// ```
    pub fn build(pairs: &str) -> Self {
        let mut board = Self::identity();
        for token in pairs.split(',') {
            let token = token.trim().to_uppercase();
            let mut chars = token.chars();
            let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
                continue;
            };
            let (Some(a), Some(b)) = (alphabet::position(a), alphabet::position(b)) else {
                continue;
            };
            board.mapping[a as usize] = b;
            board.mapping[b as usize] = a;
        }
        board
    }

    /// Returns the partner of `c`, or `c` itself if it is unplugged or not
    /// a letter.
    pub fn apply(&self, c: char) -> char {
        match alphabet::position(c) {
            Some(p) => alphabet::letter(self.apply_index(p)),
            None => c,
        }
    }

    pub(crate) fn apply_index(&self, p: u8) -> u8 {
        self.mapping[p as usize]
    }

    /// Returns the swapped pairs, each listed once with the lower letter
    /// first.
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.mapping
            .iter()
            .enumerate()
            .filter(|&(i, &m)| (m as usize) > i)
            .map(|(i, &m)| (alphabet::letter(i as u8), alphabet::letter(m)))
            .collect()
    }

    /// Returns `true` if every swap is mutual.
    ///
    /// Only a pair-list with conflicting tokens can produce a board for
    /// which this is `false`.
    pub fn is_involution(&self) -> bool {
        self.mapping
            .iter()
            .enumerate()
            .all(|(i, &m)| self.mapping[m as usize] as usize == i)
    }
}
