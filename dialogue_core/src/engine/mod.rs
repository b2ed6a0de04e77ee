//! Dialogue Engine - session state machine and response policy.
//!
//! Dispatch precedence for each input, first match wins:
//!
//! 1. Empty input -> waiting prompt
//! 2. `start level <N>` -> enter a level (or usage / not-found message)
//! 3. `scenarios` | `list` | `levels` -> listing
//! 4. `exit level` | `end level` -> back to free mode
//! 5. `[Whisper]` marker -> translation stub, even while in a level
//! 6. In a level -> level-contextual rules
//! 7. Free mode -> free-mode rules
//!
//! Only step 2 and step 4 mutate session state.

mod command;
mod picker;

pub use command::Command;
pub use picker::{pick_challenge, CHALLENGES};

use persona_rules::{Persona, Scenario, ScenarioStore, SessionState};

use crate::classifier;
use crate::whisper;

/// Reply to empty or whitespace-only input.
pub const WAITING_PROMPT: &str = "I'm waiting. What do you have?";

/// Free-mode reply to small talk.
pub const SMALL_TALK_REDIRECT: &str = "We don't have time. Pitch me your update.";

/// Free-mode reply to a vague app idea.
pub const VAGUE_IDEA_CHALLENGE: &str =
    "Everyone wants to make an app. How do you make MONEY? Be specific.";

const DIVIDER_WIDTH: usize = 60;

/// The rule-based responder. Owns the scenario store and the single session.
#[derive(Debug)]
pub struct DialogueEngine {
    persona: Persona,
    store: ScenarioStore,
    session: SessionState,
}

impl DialogueEngine {
    /// Create an engine over a loaded store, with the default persona.
    pub fn new(store: ScenarioStore) -> Self {
        Self::with_persona(store, Persona::default())
    }

    pub fn with_persona(store: ScenarioStore, persona: Persona) -> Self {
        Self {
            persona,
            store,
            session: SessionState::new(),
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn store(&self) -> &ScenarioStore {
        &self.store
    }

    /// Produce the reply for one input line.
    pub fn respond(&mut self, input: &str) -> String {
        let input = input.trim();

        if input.is_empty() {
            return WAITING_PROMPT.to_string();
        }

        if let Some(cmd) = Command::parse(input) {
            return self.run_command(cmd);
        }

        // Whisper preempts everything below it, including level dispatch.
        if whisper::is_whisper(input) {
            return whisper::translate(input);
        }

        match self.session.active_level() {
            Some(level) => self.respond_in_level(input, level),
            None => self.respond_free_mode(input),
        }
    }

    fn run_command(&mut self, cmd: Command) -> String {
        match cmd {
            Command::StartLevel(level) => self.start_level(level),
            Command::StartLevelUsage => {
                "Usage: 'start level <number>' (e.g., 'start level 1')".to_string()
            }
            Command::ListScenarios => self.list_scenarios(),
            Command::ExitLevel => match self.session.exit() {
                Some(level) => {
                    tracing::debug!(level, "exited level");
                    format!("Exited Level {}. Back to free mode.", level)
                }
                None => "You're not in a level.".to_string(),
            },
        }
    }

    fn start_level(&mut self, level: i64) -> String {
        let Some(scenario) = self.store.find(level) else {
            let available = self
                .store
                .level_numbers()
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return format!(
                "Level {} doesn't exist. Available levels: {}",
                level, available
            );
        };

        let scenario = scenario.clone();
        self.session.enter(scenario.level);
        tracing::debug!(level = scenario.level, title = %scenario.title, "entered level");
        self.format_intro(&scenario)
    }

    fn format_intro(&self, scenario: &Scenario) -> String {
        let divider = "=".repeat(DIVIDER_WIDTH);
        [
            format!("\n{}", divider),
            format!("LEVEL {}: {}", scenario.level, scenario.title),
            divider.clone(),
            format!("Situation: {}", scenario.situation_text()),
            format!("Goal: {}", scenario.goal_text()),
            format!("{}\n", divider),
            format!("{}: {}\n", self.persona.name, scenario.sloane_line),
        ]
        .join("\n")
    }

    fn list_scenarios(&self) -> String {
        if self.store.is_empty() {
            return "No scenarios available.".to_string();
        }

        let mut lines = vec!["Available Scenarios:\n".to_string()];
        for scenario in self.store.list_all() {
            let status = if self.session.active_level() == Some(scenario.level) {
                " [CURRENT]"
            } else {
                ""
            };
            lines.push(format!(
                "Level {}: {}{}\n  {}\n",
                scenario.level,
                scenario.title,
                status,
                scenario.situation_text()
            ));
        }
        lines.join("\n")
    }

    /// Level-contextual rules: a fixed check order per level, first true
    /// predicate wins, no match falls through to the challenge pool.
    fn respond_in_level(&self, input: &str, level: u32) -> String {
        if self.store.find(i64::from(level)).is_none() {
            return pick_challenge(input).to_string();
        }

        match level {
            // Ice-breaking: anything shallow gets pushed back.
            1 => {
                if classifier::is_weather_talk(input) {
                    "Weather? Really? I said something INTERESTING. Try again.".to_string()
                } else if classifier::is_small_talk(input) {
                    "That's still small talk. Elevate the conversation. What's actually interesting?"
                        .to_string()
                } else {
                    "Better. But can you be more engaging? What makes you different?".to_string()
                }
            }

            // Storytelling: background is good, self-pity is not.
            2 => {
                if classifier::mentions_underdog_keywords(input) {
                    "Good. You mentioned your background. Now make it sound like ambition, not pity. Reframe it."
                        .to_string()
                } else if classifier::sounds_pathetic(input) {
                    "You sound like you're asking for sympathy. I don't invest in sob stories. Make it legendary."
                        .to_string()
                } else {
                    "I need to see the hunger. The drive. How did your struggle make you stronger?"
                        .to_string()
                }
            }

            // The pitch: numbers first, then conviction.
            3 => {
                if !classifier::has_numbers(input) {
                    "Where are the numbers? I need specifics. Revenue, margins, growth. Now."
                        .to_string()
                } else if !classifier::sounds_confident(input) {
                    "You sound uncertain. Confidence. Conviction. Show me you believe in this."
                        .to_string()
                } else {
                    "Better. But I need more. Unit economics? Customer acquisition cost? Lifetime value?"
                        .to_string()
                }
            }

            // Insider talk: jargon required, corporate register banned.
            4 => {
                if !classifier::uses_industry_terms(input) {
                    "Too generic. Use real terms. Burn rate? Runway? Ghosted? Show me you know the game."
                        .to_string()
                } else if classifier::sounds_too_formal(input) {
                    "This is off the record. Be real. What do you ACTUALLY think? No corporate speak."
                        .to_string()
                } else {
                    "Now we're talking. Tell me more. What's really happening behind the scenes?"
                        .to_string()
                }
            }

            _ => pick_challenge(input).to_string(),
        }
    }

    fn respond_free_mode(&self, input: &str) -> String {
        if classifier::is_small_talk(input) {
            return SMALL_TALK_REDIRECT.to_string();
        }
        if classifier::is_vague_idea(input) {
            return VAGUE_IDEA_CHALLENGE.to_string();
        }
        pick_challenge(input).to_string()
    }
}

/// True if a reply is a formatted scenario intro block, which the front-end
/// prints raw instead of behind the persona prefix.
pub fn is_scenario_intro(reply: &str) -> bool {
    reply.strip_prefix('\n').is_some_and(|rest| {
        rest.len() >= DIVIDER_WIDTH && rest.as_bytes()[..DIVIDER_WIDTH].iter().all(|b| *b == b'=')
    })
}
