//! Whisper mode - the out-of-character translation stub.
//!
//! Input prefixed with `[Whisper]` bypasses normal dispatch entirely. The
//! "translation" is a fixed phrase table, and the miss case emits an explicit
//! stub marker. Both output formats are part of the external contract: a real
//! translator would be a separate collaborator that falls back to exactly
//! this stub format, never a silent replacement of it.

/// Marker that routes input into whisper handling.
pub const WHISPER_MARKER: &str = "[Whisper]";

/// Known phrase translations, checked by substring match in table order.
const TRANSLATIONS: &[(&str, &str)] = &[
    ("쟤 좀 재수없네", "He's a bit full of himself."),
    ("이거 진짜 어렵네", "This is genuinely challenging."),
    ("시간 없는데", "We're running out of time."),
    ("뭔가 이상한데", "Something seems off here."),
];

/// True if the input should be routed to [`translate`].
pub fn is_whisper(input: &str) -> bool {
    input.starts_with(WHISPER_MARKER)
}

/// Render a whisper input as its fixed English phrase, or as the stub marker
/// when the phrase is unknown.
pub fn translate(input: &str) -> String {
    let text = input.replace(WHISPER_MARKER, "");
    let text = text.trim();

    for (phrase, english) in TRANSLATIONS {
        if text.contains(phrase) {
            return format!("[Translated]: {}", english);
        }
    }

    format!("[Translated]: {} (Translation needed - implement API)", text)
}
