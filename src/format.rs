// Oblique Gate - Formatter
// Copyright 2026 Joseph Stone - All Rights Reserved
//
// (mode, card, thinking) -> tool result text. Pure.

use crate::config::OutputMode;

/// Marker line between the thinking label and the card
pub const THINKING_MARKER: &str = "<thinking>";

pub fn format(mode: OutputMode, card: &str, thinking: &str) -> String {
    match mode {
        OutputMode::Full => format!("Now {}\n{}\n{}", thinking, THINKING_MARKER, card),
        OutputMode::CardOnly => format!("\n{}\n{}", THINKING_MARKER, card),
        OutputMode::TextOnly => format!("Now {}\n{}\n", thinking, THINKING_MARKER),
    }
}

/// Format from a raw mode code. Unknown codes render as Full.
pub fn format_code(code: &str, card: &str, thinking: &str) -> String {
    format(OutputMode::resolve(code), card, thinking)
}
