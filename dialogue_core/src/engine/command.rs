//! Command parsing - the fixed, case-insensitive command surface.

/// A recognized session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `start level <N>` with a parseable trailing integer.
    StartLevel(i64),
    /// `start level ...` where the trailing token is not an integer.
    StartLevelUsage,
    /// `scenarios` | `list` | `levels`.
    ListScenarios,
    /// `exit level` | `end level`.
    ExitLevel,
}

impl Command {
    /// Parse a trimmed input line as a command, if it is one.
    ///
    /// The level argument is the last whitespace token, so `start level 2`
    /// parses and a bare `start level` falls into the usage variant.
    pub fn parse(input: &str) -> Option<Command> {
        let lower = input.to_lowercase();

        if lower.starts_with("start level") {
            return Some(
                match input.split_whitespace().last().and_then(|t| t.parse().ok()) {
                    Some(level) => Command::StartLevel(level),
                    None => Command::StartLevelUsage,
                },
            );
        }

        match lower.as_str() {
            "scenarios" | "list" | "levels" => Some(Command::ListScenarios),
            "exit level" | "end level" => Some(Command::ExitLevel),
            _ => None,
        }
    }
}
