//! Persona identity - the fixed public face of the mentor.

use serde::{Deserialize, Serialize};

/// The mentor persona presented to the user.
///
/// A top-tier venture partner: cold, fast, extremely competent, slightly
/// arrogant. The identity is fixed data; all behavior lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Display name used as the speaker prefix in replies.
    pub name: String,

    /// One-line worldview shown at startup.
    pub philosophy: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Sloane".to_string(),
            philosophy: "I don't invest in ideas; I invest in people who can communicate."
                .to_string(),
        }
    }
}

impl Persona {
    /// Create a persona with a custom name, keeping the default philosophy.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
