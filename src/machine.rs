//! Machine: three rotors, a plugboard and the reflector wired into one
//! reciprocal cipher.
//!
//! Every letter first steps the rotors, then travels
//! plugboard → right → middle → left → reflector → left → middle → right →
//! plugboard. Encoding and tracing share the same pipeline; tracing only
//! supplies a recording [`StageSink`].

use tracing::{debug, trace};

use crate::alphabet;
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, REFLECTOR};
use crate::rotor::{RotorState, RotorType};
use crate::stepping::RotorOffsets;
use crate::trace::{Slot, Stage, StageRecord, StageSink, StepRecord};

/// A configured three-rotor cipher machine.
///
/// Encoding is stateful: each letter advances the rotors, and successive
/// calls continue from where the previous one stopped. Build a fresh
/// machine with the same settings to decipher.
///
/// # Examples
///
/// ```
/// use enigma_sim::Machine;
///
/// let rotors = ["Rotor I", "Rotor II", "Rotor III"];
///
/// let mut sender = Machine::new(rotors, [0, 0, 0], "").unwrap();
/// assert_eq!(sender.encode("A1B"), "YP");
///
/// let mut receiver = Machine::new(rotors, [0, 0, 0], "").unwrap();
/// assert_eq!(receiver.encode("YP"), "AB");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    /// Left, middle, right.
    rotors: [RotorState; 3],
    plugboard: Plugboard,
    reflector: &'static Reflector,
}

impl Machine {
    /// Creates a machine from catalog keys, initial positions and a
    /// plugboard pair-list.
    ///
    /// # Parameters
    /// - `rotor_types`: Catalog keys for the left, middle and right rotors.
    /// - `positions`: Initial offsets, each in `0..=25`.
    /// - `plugboard`: Comma-separated letter pairs; malformed tokens are
    ///   ignored.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotorType`] for a key outside the
    /// catalog and [`EnigmaError::PositionOutOfRange`] for a position above
    /// 25.
    pub fn new(
        rotor_types: [&str; 3],
        positions: [u8; 3],
        plugboard: &str,
    ) -> Result<Self, EnigmaError> {
        let [left, middle, right] = rotor_types;
        let kinds = [left.parse()?, middle.parse()?, right.parse()?];
        Self::with_rotors(kinds, positions, Plugboard::build(plugboard))
    }

    /// Creates a machine from already-parsed rotor types and plugboard.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PositionOutOfRange`] for a position above 25.
    pub fn with_rotors(
        rotor_types: [RotorType; 3],
        positions: [u8; 3],
        plugboard: Plugboard,
    ) -> Result<Self, EnigmaError> {
        if let Some((slot, &value)) = positions
            .iter()
            .enumerate()
            .find(|&(_, &p)| p >= alphabet::LEN)
        {
            return Err(EnigmaError::PositionOutOfRange { slot, value });
        }

        let rotors = [
            RotorState::new(rotor_types[0], positions[0]),
            RotorState::new(rotor_types[1], positions[1]),
            RotorState::new(rotor_types[2], positions[2]),
        ];

        debug!(
            rotors = ?rotor_types.map(RotorType::name),
            positions = ?positions,
            plugs = plugboard.pairs().len(),
            "machine configured"
        );

        Ok(Machine {
            rotors,
            plugboard,
            reflector: &REFLECTOR,
        })
    }

    /// Returns the current rotor offsets.
    pub fn positions(&self) -> RotorOffsets {
        RotorOffsets::new(self.rotors.each_ref().map(RotorState::offset))
    }

    /// Returns the installed rotor types, left to right.
    pub fn rotor_types(&self) -> [RotorType; 3] {
        self.rotors.each_ref().map(RotorState::kind)
    }

    /// Returns the installed rotors, left to right.
    pub fn rotors(&self) -> &[RotorState; 3] {
        &self.rotors
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Advances the rotors by one stepping cycle.
    ///
    /// Runs automatically before every enciphered letter.
    pub fn step_rotors(&mut self) {
        let notches = self.rotors.each_ref().map(RotorState::notch);
        let next = self.positions().advance(notches);
        for (rotor, offset) in self.rotors.iter_mut().zip(next.to_array()) {
            rotor.set_offset(offset);
        }
    }

    /// Enciphers one letter.
    ///
    /// Anything outside `A..=Z` (lowercase included) is returned unchanged
    /// and does not step the rotors.
    pub fn encode_char(&mut self, c: char) -> char {
        match alphabet::position(c) {
            Some(p) => alphabet::letter(self.step_and_encipher(p, &mut ())),
            None => c,
        }
    }

    /// Enciphers (or deciphers) a text.
    ///
    /// Letters are uppercased; every other character is dropped and
    /// consumes no rotor step.
    pub fn encode(&mut self, text: &str) -> String {
        letters(text)
            .map(|p| alphabet::letter(self.step_and_encipher(p, &mut ())))
            .collect()
    }

    /// Enciphers a text while recording every intermediate letter.
    ///
    /// The outputs, read in order, equal what [`encode`](Self::encode)
    /// returns for the same text from the same starting state.
    pub fn trace(&mut self, text: &str) -> Vec<StepRecord> {
        letters(text)
            .map(|p| {
                let positions_before = self.positions();
                let mut stages: Vec<StageRecord> = Vec::with_capacity(9);
                let output = self.step_and_encipher(p, &mut stages);
                StepRecord {
                    input: alphabet::letter(p),
                    positions_before,
                    positions_after: self.positions(),
                    stages,
                    output: alphabet::letter(output),
                }
            })
            .collect()
    }

    fn step_and_encipher<S: StageSink>(&mut self, p: u8, sink: &mut S) -> u8 {
        self.step_rotors();
        let out = self.signal_path(p, sink);
        trace!(
            input = %alphabet::letter(p),
            output = %alphabet::letter(out),
            positions = %self.positions(),
            "letter enciphered"
        );
        out
    }

    fn signal_path<S: StageSink>(&self, p: u8, sink: &mut S) -> u8 {
        let [left, middle, right] = &self.rotors;
        let mut record = |stage: Stage, p: u8| {
            sink.record(stage, alphabet::letter(p));
            p
        };

        let p = record(Stage::PlugboardIn, self.plugboard.apply_index(p));

        let p = record(
            Stage::Forward {
                slot: Slot::Right,
                rotor: right.kind(),
            },
            right.forward_index(p),
        );
        let p = record(
            Stage::Forward {
                slot: Slot::Middle,
                rotor: middle.kind(),
            },
            middle.forward_index(p),
        );
        let p = record(
            Stage::Forward {
                slot: Slot::Left,
                rotor: left.kind(),
            },
            left.forward_index(p),
        );

        let p = record(Stage::Reflector, self.reflector.apply_index(p));

        let p = record(
            Stage::Backward {
                slot: Slot::Left,
                rotor: left.kind(),
            },
            left.backward_index(p),
        );
        let p = record(
            Stage::Backward {
                slot: Slot::Middle,
                rotor: middle.kind(),
            },
            middle.backward_index(p),
        );
        let p = record(
            Stage::Backward {
                slot: Slot::Right,
                rotor: right.kind(),
            },
            right.backward_index(p),
        );

        record(Stage::PlugboardOut, self.plugboard.apply_index(p))
    }
}

/// Positions of the letters in `text`, uppercased, with everything else
/// removed.
fn letters(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars()
        .filter_map(|c| alphabet::position(c.to_ascii_uppercase()))
}

/// Concatenates the output letters of a trace.
pub fn trace_output(records: &[StepRecord]) -> String {
    records.iter().map(|r| r.output).collect()
}
