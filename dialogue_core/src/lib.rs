//! # Dialogue Core (The Brain)
//!
//! Rule-based response selection for the Sloane mentor persona. This crate
//! interfaces with `persona_rules`, classifies free-text input against
//! hand-written rule tables, and drives the session state machine.
//!
//! ## Core Components
//!
//! - **classifier**: Independent boolean predicates over the raw input
//! - **engine**: Command parsing, level dispatch, and response policy
//! - **whisper**: The out-of-character translation stub
//!
//! ## Design Philosophy
//!
//! - **Rule-Driven**: Every reply comes from an explicit, testable rule table
//! - **Deterministic**: Identical input always produces the identical reply
//! - **Synchronous**: No I/O after construction; every call returns immediately

pub mod classifier;
pub mod engine;
pub mod whisper;

pub use engine::*;
