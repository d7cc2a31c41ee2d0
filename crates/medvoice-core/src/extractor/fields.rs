//! Dosage, frequency, timing, duration and instruction extraction.
//!
//! Each field tries its pattern table against the lowercased utterance first,
//! then falls back to a keyword context window over the tokens.

use crate::models::{Annotation, Token};

use super::patterns::{
    all_matches, first_match, DOSAGE_REGEXES, DURATION_KEYWORDS, DURATION_REGEXES,
    FREQUENCY_KEYWORDS, FREQUENCY_REGEXES, INSTRUCTION_KEYWORDS, INSTRUCTION_REGEXES,
    TIMING_KEYWORDS, TIMING_REGEXES, UNIT_WORDS,
};
use super::window::{in_keywords, keyword_window, keyword_windows, AROUND_TWO, FORWARD_FIVE};

/// Separator between instruction fragments.
pub const INSTRUCTION_SEPARATOR: &str = "; ";

/// Amount per dose: "10mg", "two tablets", "1/2 mg", or "<number> <unit>".
pub fn extract_dosage(annotation: &Annotation) -> String {
    let lower = annotation.text.to_lowercase();
    first_match(&DOSAGE_REGEXES, &lower)
        .or_else(|| number_before_unit(annotation))
        .unwrap_or_default()
}

fn number_before_unit(annotation: &Annotation) -> Option<String> {
    annotation.tokens.windows(2).find_map(|pair| {
        let (number, unit) = (&pair[0], &pair[1]);
        (number.like_num && UNIT_WORDS.contains(&unit.lower().as_str()))
            .then(|| format!("{} {}", number.text, unit.text))
    })
}

/// How often: "once daily", "every 8 hours", "twice a day".
pub fn extract_frequency(annotation: &Annotation) -> String {
    let lower = annotation.text.to_lowercase();
    first_match(&FREQUENCY_REGEXES, &lower)
        .or_else(|| keyword_window(annotation, AROUND_TWO, in_keywords(FREQUENCY_KEYWORDS)))
        .unwrap_or_default()
}

/// When: "in the morning", "with meals", "on an empty stomach".
pub fn extract_timing(annotation: &Annotation) -> String {
    let lower = annotation.text.to_lowercase();
    first_match(&TIMING_REGEXES, &lower)
        .or_else(|| keyword_window(annotation, AROUND_TWO, in_keywords(TIMING_KEYWORDS)))
        .unwrap_or_default()
}

/// How long: "for 3 months", "until finished", "long-term".
pub fn extract_duration(annotation: &Annotation) -> String {
    let lower = annotation.text.to_lowercase();
    first_match(&DURATION_REGEXES, &lower)
        .or_else(|| keyword_window(annotation, FORWARD_FIVE, is_duration_cue))
        .unwrap_or_default()
}

/// A duration keyword, or "for" directly followed by a number.
fn is_duration_cue(annotation: &Annotation, token: &Token) -> bool {
    let lower = token.lower();
    if DURATION_KEYWORDS.contains(&lower.as_str()) {
        return true;
    }
    lower == "for"
        && annotation
            .tokens
            .get(token.index + 1)
            .is_some_and(|next| next.like_num)
}

/// Special instructions: every pattern match plus every keyword window,
/// de-duplicated by exact text and joined with `"; "`.
pub fn extract_instructions(annotation: &Annotation) -> String {
    let lower = annotation.text.to_lowercase();
    let mut fragments = all_matches(&INSTRUCTION_REGEXES, &lower);

    for window in keyword_windows(annotation, FORWARD_FIVE, in_keywords(INSTRUCTION_KEYWORDS)) {
        if !fragments.contains(&window) {
            fragments.push(window);
        }
    }

    fragments.join(INSTRUCTION_SEPARATOR)
}
