//! Three-rotor Enigma-style cipher engine.
//!
//! Simulates a rotor substitution cipher with a fixed catalog of three rotor
//! wirings, a single reflector and a letter-swap plugboard. The same
//! operation enciphers and deciphers: a second machine built with identical
//! settings turns the ciphertext back into the plaintext.
//!
//! Input is restricted to the 26 Latin letters, case-insensitive. Any other
//! character is dropped from the output and does not move the rotors.
//!
//! # Architecture
//!
//! ```text
//! alphabet      (26-letter index arithmetic)
//!     ↑
//! RotorSpec ── RotorState     Plugboard     Reflector
//!     ↑             ↑              ↑            ↑
//! RotorOffsets::advance (stepping) │            │
//!     ↑                            │            │
//! Machine ─────────────────────────┴────────────┘
//!     │ StageSink
//!     ↓
//! StepRecord (trace)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with the same settings:
//!
//! ```
//! use enigma_sim::Machine;
//!
//! let rotors = ["Rotor I", "Rotor II", "Rotor III"];
//!
//! let mut sender = Machine::new(rotors, [3, 7, 11], "AB,CD").unwrap();
//! let cipher = sender.encode("Attack at dawn");
//!
//! let mut receiver = Machine::new(rotors, [3, 7, 11], "AB,CD").unwrap();
//! assert_eq!(receiver.encode(&cipher), "ATTACKATDAWN");
//! ```
//!
//! Follow one letter through the machine:
//!
//! ```
//! use enigma_sim::Machine;
//!
//! let mut machine = Machine::new(["Rotor I", "Rotor II", "Rotor III"], [0, 0, 0], "").unwrap();
//! let records = machine.trace("A");
//! assert_eq!(records[0].output, 'Y');
//! assert_eq!(records[0].stages.len(), 9);
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod error;
pub mod trace;

mod config;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod stepping;

pub use config::MachineConfig;
pub use error::EnigmaError;
pub use machine::{trace_output, Machine};
pub use plugboard::Plugboard;
pub use reflector::{Reflector, REFLECTOR};
pub use rotor::{RotorSpec, RotorState, RotorType, NOTCH};
pub use stepping::RotorOffsets;
pub use trace::{Slot, Stage, StageRecord, StageSink, StepRecord};
