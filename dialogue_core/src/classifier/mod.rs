//! Input classification - independent boolean predicates over the raw input.
//!
//! Each predicate is a pure function: it case-folds its argument, consults a
//! trigger table from [`rules`], and returns a bool. No shared state, no side
//! effects, no ordering assumptions between predicates.

pub mod rules;

/// Whole-string greeting or stock opener ("hi", "how are you").
pub fn is_small_talk(input: &str) -> bool {
    rules::SMALL_TALK.is_match(&input.to_lowercase())
}

/// App-building or idea-pitching phrasing with nothing behind it.
pub fn is_vague_idea(input: &str) -> bool {
    rules::VAGUE_IDEA.is_match(&input.to_lowercase())
}

/// Mentions any weather vocabulary.
pub fn is_weather_talk(input: &str) -> bool {
    let lower = input.to_lowercase();
    rules::WEATHER_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Mentions background/struggle vocabulary (storytelling level only).
pub fn mentions_underdog_keywords(input: &str) -> bool {
    let lower = input.to_lowercase();
    rules::UNDERDOG_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Self-pitying, sympathy-seeking phrasing.
pub fn sounds_pathetic(input: &str) -> bool {
    rules::PATHETIC.is_match(&input.to_lowercase())
}

/// Contains at least one digit.
pub fn has_numbers(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_digit())
}

/// Contains a confidence word and no hedging word. A single hedging word
/// vetoes any number of confidence words.
pub fn sounds_confident(input: &str) -> bool {
    let lower = input.to_lowercase();
    let has_confident = rules::CONFIDENT_WORDS.iter().any(|w| lower.contains(w));
    let has_weak = rules::WEAK_WORDS.iter().any(|w| lower.contains(w));
    has_confident && !has_weak
}

/// Uses VC/startup jargon.
pub fn uses_industry_terms(input: &str) -> bool {
    let lower = input.to_lowercase();
    rules::INDUSTRY_TERMS.iter().any(|term| lower.contains(term))
}

/// Corporate-register phrasing.
pub fn sounds_too_formal(input: &str) -> bool {
    let lower = input.to_lowercase();
    rules::FORMAL_PHRASES.iter().any(|p| lower.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_talk_whole_string_only() {
        assert!(is_small_talk("hello"));
        assert!(is_small_talk("Hey!"));
        assert!(is_small_talk("good morning"));
        assert!(is_small_talk("how are you?"));
        assert!(is_small_talk("what's up"));

        // Greeting followed by substance is not small talk.
        assert!(!is_small_talk("hello, our MRR doubled"));
        assert!(!is_small_talk("pitch deck"));
    }

    #[test]
    fn test_vague_idea() {
        assert!(is_vague_idea("I want to make an app"));
        assert!(is_vague_idea("i want to make app for dogs"));
        assert!(is_vague_idea("I have an idea"));
        assert!(is_vague_idea("I want to build a marketplace"));
        assert!(is_vague_idea("Let's create a platform"));

        assert!(!is_vague_idea("We shipped the app last week"));
    }

    #[test]
    fn test_weather_talk() {
        assert!(is_weather_talk("Nice day, isn't it?"));
        assert!(is_weather_talk("The WEATHER is terrible"));
        assert!(!is_weather_talk("Our growth is heating up"));
    }

    #[test]
    fn test_underdog_keywords() {
        assert!(mentions_underdog_keywords("I was raised in Seoul"));
        assert!(mentions_underdog_keywords("We had to struggle for everything"));
        assert!(!mentions_underdog_keywords("Revenue is up 40%"));
    }

    #[test]
    fn test_sounds_pathetic() {
        assert!(sounds_pathetic("I was so poor back then"));
        assert!(sounds_pathetic("it was really hard for us"));
        assert!(sounds_pathetic("I couldn't afford rent"));
        assert!(sounds_pathetic("you should feel sorry for me"));

        assert!(!sounds_pathetic("I turned hardship into a business"));
    }

    #[test]
    fn test_has_numbers() {
        assert!(has_numbers("We hit 500 customers"));
        assert!(!has_numbers("We hit many customers"));
    }

    #[test]
    fn test_confidence_requires_no_hedging() {
        assert!(sounds_confident("We will absolutely win this market"));
        assert!(!sounds_confident("We could win this market"));

        // Hedging vetoes confidence even when both appear.
        assert!(!sounds_confident("I am confident but maybe it works"));
        assert!(!sounds_confident("We will definitely try"));
    }

    #[test]
    fn test_industry_terms_case_insensitive() {
        assert!(uses_industry_terms("our burn rate is fine"));
        assert!(uses_industry_terms("BURN RATE"));
        assert!(uses_industry_terms("Series A next quarter"));
        assert!(!uses_industry_terms("we sell furniture"));
    }

    #[test]
    fn test_too_formal() {
        assert!(sounds_too_formal("I would like to express my gratitude"));
        assert!(sounds_too_formal("With all due respect, sir"));
        assert!(!sounds_too_formal("honestly this round is a mess"));
    }
}
