//! Trigger tables - the immutable phrase lists and patterns behind each
//! predicate. Kept separate from the predicate functions so the rule set can
//! be reviewed and extended without touching dispatch logic.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Whole-string greetings and stock openers.
pub static SMALL_TALK: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"^(hi|hello|hey|greetings|good morning|good afternoon|good evening)[\s!.,]*$",
        r"^how are you[\s?]*$",
        r"^what's up[\s?]*$",
    ])
    .expect("small talk patterns are valid")
});

/// App-building and idea-pitching phrasing with no substance attached.
pub static VAGUE_IDEA: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"i want to make (an? )?app",
        r"i have an? idea",
        r"i want to build (a|an|some)",
        r"let's create (a|an)",
    ])
    .expect("vague idea patterns are valid")
});

/// Self-pitying phrasing.
pub static PATHETIC: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"i (was|am) (so|too|very) (poor|broke|struggling|difficult)",
        r"it was (so|really|very) (hard|difficult|tough)",
        r"i (couldn't|could not|can't) (afford|do)",
        r"feel (sorry|bad) (for|about)",
    ])
    .expect("pathetic patterns are valid")
});

pub const WEATHER_KEYWORDS: &[&str] = &[
    "weather",
    "rain",
    "sunny",
    "cloudy",
    "hot",
    "cold",
    "temperature",
    "nice day",
    "beautiful day",
];

/// Background/struggle vocabulary, relevant only inside the storytelling level.
pub const UNDERDOG_KEYWORDS: &[&str] = &[
    "seoul",
    "poor",
    "neighborhood",
    "struggle",
    "difficult",
    "hard",
    "raised",
    "entrepreneur",
];

pub const CONFIDENT_WORDS: &[&str] = &[
    "will",
    "guarantee",
    "confident",
    "certain",
    "proven",
    "definitely",
    "absolutely",
];

/// Hedging vocabulary. Any hit here vetoes the confident words.
pub const WEAK_WORDS: &[&str] = &[
    "maybe",
    "perhaps",
    "might",
    "could",
    "possibly",
    "hopefully",
    "try",
];

pub const INDUSTRY_TERMS: &[&str] = &[
    "burn rate",
    "runway",
    "ghosted",
    "valuation",
    "term sheet",
    "due diligence",
    "cap table",
    "equity",
    "round",
    "series",
    "unicorn",
    "down round",
    "bridge",
    "convertible",
    "saas",
    "mrr",
    "arr",
    "cac",
    "ltv",
    "churn",
    "moat",
    "tam",
    "sam",
    "som",
];

pub const FORMAL_PHRASES: &[&str] = &[
    "i would like to",
    "i believe that",
    "it is my opinion",
    "according to",
    "in accordance with",
    "with all due respect",
];
