//! # Persona Rules
//!
//! The "Persona Bible" crate - holds who Sloane is, the practice scenarios,
//! and the per-session state. This crate is the single source of truth for
//! dialogue data and contains no dispatch or classification logic.

pub mod persona;
pub mod scenario;
pub mod session;

pub use persona::*;
pub use scenario::*;
pub use session::*;
