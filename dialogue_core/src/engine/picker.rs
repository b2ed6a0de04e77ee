//! Deterministic challenge selection - the fallback when no rule fires.
//!
//! Selection hashes the raw input and indexes into a fixed pool, so the same
//! input always draws the same line while different inputs spread across the
//! pool. The determinism is a contract; the hash algorithm itself is not.

use sha2::{Digest, Sha256};

/// The fixed challenge pool, in order.
pub const CHALLENGES: &[&str] = &[
    "Be specific. What's the unit economics?",
    "That's not a pitch. What's your unfair advantage?",
    "I need numbers. TAM, SAM, SOM. Now.",
    "How do you scale? What's your moat?",
    "Everyone says that. What makes YOU different?",
    "Show me the money. How do you monetize?",
    "That's a feature, not a company. What's the business?",
];

/// Pick a challenge line for the given input.
pub fn pick_challenge(input: &str) -> &'static str {
    let digest = Sha256::digest(input.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let index = (u64::from_be_bytes(prefix) % CHALLENGES.len() as u64) as usize;
    CHALLENGES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_input_same_line() {
        let a = pick_challenge("my startup disrupts everything");
        let b = pick_challenge("my startup disrupts everything");
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_comes_from_pool() {
        for input in ["a", "b", "c", "synergy", ""] {
            assert!(CHALLENGES.contains(&pick_challenge(input)));
        }
    }

    #[test]
    fn test_inputs_spread_across_pool() {
        use std::collections::HashSet;

        let picked: HashSet<_> = (0..50)
            .map(|i| pick_challenge(&format!("input number {}", i)))
            .collect();

        // 50 distinct inputs over a 7-line pool should hit several lines.
        assert!(picked.len() > 1);
    }
}
