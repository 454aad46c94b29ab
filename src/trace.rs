//! Per-letter diagnostics for the signal path.
//!
//! The machine's single encipher pipeline reports each intermediate letter
//! to a [`StageSink`]. Plain encoding passes the no-op sink `()`; tracing
//! passes a `Vec<StageRecord>` and wraps the result in a [`StepRecord`].

use std::fmt;

use crate::rotor::RotorType;
use crate::stepping::RotorOffsets;

/// Which rotor slot a stage passed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Left,
    Middle,
    Right,
}

/// One of the nine points on the signal path where a letter is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    PlugboardIn,
    Forward { slot: Slot, rotor: RotorType },
    Reflector,
    Backward { slot: Slot, rotor: RotorType },
    PlugboardOut,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PlugboardIn => f.write_str("Plugboard (In)"),
            Stage::Forward { rotor, .. } => write!(f, "{} (Forward)", rotor),
            Stage::Reflector => f.write_str("Reflector"),
            Stage::Backward { rotor, .. } => write!(f, "{} (Backward)", rotor),
            Stage::PlugboardOut => f.write_str("Plugboard (Out)"),
        }
    }
}

/// The letter observed after a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRecord {
    pub stage: Stage,
    pub letter: char,
}

/// Receiver for intermediate letters on the signal path.
pub trait StageSink {
    /// Called once per stage, in signal order.
    fn record(&mut self, stage: Stage, letter: char);
}

impl StageSink for () {
    #[inline]
    fn record(&mut self, _stage: Stage, _letter: char) {}
}

impl StageSink for Vec<StageRecord> {
    fn record(&mut self, stage: Stage, letter: char) {
        self.push(StageRecord { stage, letter });
    }
}

/// Everything that happened to one input letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// The (uppercased) input letter.
    pub input: char,
    /// Rotor offsets before stepping.
    pub positions_before: RotorOffsets,
    /// Rotor offsets the letter was enciphered at.
    pub positions_after: RotorOffsets,
    /// The nine stages, in signal order.
    pub stages: Vec<StageRecord>,
    /// The enciphered letter.
    pub output: char,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} → {}", self.input, self.output)?;
        writeln!(f, "  Before: {}", self.positions_before)?;
        writeln!(f, "  After:  {}", self.positions_after)?;
        for record in &self.stages {
            writeln!(f, "  {:<25} → {}", record.stage.to_string(), record.letter)?;
        }
        Ok(())
    }
}
