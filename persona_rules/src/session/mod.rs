//! Session state - which level, if any, the user is currently inside.

use serde::{Deserialize, Serialize};

/// Per-session dialogue state.
///
/// `current_level == None` means free mode. Exactly one value exists per
/// engine instance; only the engine's start/exit command handling mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    current_level: Option<u32>,
}

impl SessionState {
    /// New session in free mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a level, replacing any active one.
    pub fn enter(&mut self, level: u32) {
        self.current_level = Some(level);
    }

    /// Leave the active level, returning it. Free mode returns `None`.
    pub fn exit(&mut self) -> Option<u32> {
        self.current_level.take()
    }

    pub fn active_level(&self) -> Option<u32> {
        self.current_level
    }

    pub fn is_in_level(&self) -> bool {
        self.current_level.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_free_mode() {
        let state = SessionState::new();
        assert!(!state.is_in_level());
        assert_eq!(state.active_level(), None);
    }

    #[test]
    fn test_enter_and_exit() {
        let mut state = SessionState::new();

        state.enter(3);
        assert!(state.is_in_level());
        assert_eq!(state.active_level(), Some(3));

        assert_eq!(state.exit(), Some(3));
        assert!(!state.is_in_level());
    }

    #[test]
    fn test_exit_in_free_mode_is_none() {
        let mut state = SessionState::new();
        assert_eq!(state.exit(), None);
        assert_eq!(state.exit(), None);
    }

    #[test]
    fn test_enter_replaces_active_level() {
        let mut state = SessionState::new();
        state.enter(1);
        state.enter(4);
        assert_eq!(state.active_level(), Some(4));
    }
}
