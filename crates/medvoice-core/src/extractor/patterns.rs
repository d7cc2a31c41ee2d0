//! Pattern and keyword tables for the field extractors.
//!
//! All regexes run against the lowercased utterance. Tables are ordered:
//! for first-match fields the earlier pattern wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Unit words recognised after a numeric token.
pub const UNIT_WORDS: &[&str] = &[
    "mg", "mcg", "g", "ml", "cc", "tablet", "pill", "capsule", "dose", "tab", "cap",
];

pub const DOSAGE_PATTERNS: &[&str] = &[
    r"\d+\s*(?:mg|mcg|g|ml|cc|tablet|pill|capsule|dose|tab|cap)s?(?:\b|\s)",
    r"(?:one|two|three|four|five|half|quarter)\s+(?:tablet|pill|capsule|dose|tab|cap)s?(?:\b|\s)",
    r"\d+/\d+\s*(?:mg|mcg|g|ml|cc)(?:\b|\s)",
];

pub const FREQUENCY_PATTERNS: &[&str] = &[
    r"(?:once|twice|three times|four times)\s+(?:a|per|every)\s+day",
    r"(?:once|twice|three times|four times)\s+daily",
    r"(?:every|each)\s+(?:day|morning|evening|night|afternoon)",
    r"(?:every|each)\s+\d+\s+hours",
    r"(?:every|each)\s+\d+\s*(?:hr|hrs)",
    r"\d+\s+times\s+(?:a|per)\s+day",
    r"\d+\s+times\s+daily",
    r"(?:daily|weekly|monthly|yearly)",
];

pub const FREQUENCY_KEYWORDS: &[&str] = &[
    "daily", "weekly", "monthly", "twice", "thrice", "once", "every",
];

pub const TIMING_PATTERNS: &[&str] = &[
    r"(?:in|at|during)\s+(?:the\s+)?(?:morning|evening|night|afternoon|noon|midday|midnight|bedtime)",
    r"(?:before|after|with)\s+(?:meals?|breakfast|lunch|dinner|food|eating)",
    r"(?:on|with)\s+(?:an?\s+)?(?:empty\s+stomach|full\s+stomach)",
    r"(?:before|at|after)\s+bedtime",
];

pub const TIMING_KEYWORDS: &[&str] = &[
    "morning", "evening", "night", "afternoon", "breakfast", "lunch", "dinner", "bedtime",
    "noon", "midnight",
];

pub const DURATION_PATTERNS: &[&str] = &[
    r"for\s+\d+\s+(?:day|week|month|year)s?",
    r"for\s+(?:a|one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:day|week|month|year)s?",
    r"until\s+\w+",
    r"continue\s+for\s+\d+\s+(?:day|week|month|year)s?",
    r"(?:long[-\s]term|short[-\s]term|maintenance)\s+(?:treatment|therapy|medication|use)?",
];

pub const DURATION_KEYWORDS: &[&str] = &[
    "until", "long-term", "short-term", "maintenance", "continue", "ongoing", "chronic",
];

pub const INSTRUCTION_PATTERNS: &[&str] = &[
    r"(?:with|without)\s+(?:food|water|milk)",
    r"(?:do\s+not|don't)\s+(?:take|use|consume)\s+with\s+\w+",
    r"avoid\s+\w+",
    r"store\s+(?:in|at)\s+\w+",
    r"(?:shake|swallow|chew|dissolve)\s+(?:well|thoroughly)?",
    r"keep\s+(?:out\s+of\s+reach|refrigerated|at\s+room\s+temperature)",
    r"take\s+on\s+an\s+empty\s+stomach",
    r"take\s+with\s+food",
    r"do\s+not\s+crush\s+or\s+chew",
    r"may\s+cause\s+drowsiness",
];

pub const INSTRUCTION_KEYWORDS: &[&str] = &[
    "avoid", "store", "shake", "swallow", "chew", "dissolve", "keep", "refrigerate", "caution",
    "warning",
];

/// Verb lemmas that introduce a medicine ("take X", "prescribed X").
pub const NAME_VERBS: &[&str] = &["take", "prescribe"];

/// Maximum tokens taken after a name verb.
pub const NAME_VERB_SPAN: usize = 3;

/// Maximum length of a noun chunk accepted as a medicine name.
pub const NAME_CHUNK_MAX: usize = 3;

fn compile(table: &'static [&'static str]) -> Vec<Regex> {
    table
        .iter()
        .map(|pattern| Regex::new(pattern).expect("static pattern table must compile"))
        .collect()
}

pub static DOSAGE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(DOSAGE_PATTERNS));
pub static FREQUENCY_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(FREQUENCY_PATTERNS));
pub static TIMING_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(TIMING_PATTERNS));
pub static DURATION_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(DURATION_PATTERNS));
pub static INSTRUCTION_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile(INSTRUCTION_PATTERNS));

/// First match of the first pattern (in table order) that matches, trimmed.
pub fn first_match(regexes: &[Regex], lower: &str) -> Option<String> {
    regexes.iter().find_map(|regex| {
        regex
            .find(lower)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

/// Every match of every pattern, in table order then text order, trimmed.
pub fn all_matches(regexes: &[Regex], lower: &str) -> Vec<String> {
    regexes
        .iter()
        .flat_map(|regex| regex.find_iter(lower))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        assert_eq!(DOSAGE_REGEXES.len(), DOSAGE_PATTERNS.len());
        assert_eq!(FREQUENCY_REGEXES.len(), 8);
        assert_eq!(TIMING_REGEXES.len(), 4);
        assert_eq!(DURATION_REGEXES.len(), 5);
        assert_eq!(INSTRUCTION_REGEXES.len(), 10);
    }

    #[test]
    fn test_first_match_respects_table_order() {
        // "daily" alone would match the last pattern; "once daily" wins first.
        assert_eq!(
            first_match(&FREQUENCY_REGEXES, "take it once daily").as_deref(),
            Some("once daily")
        );
        assert_eq!(first_match(&FREQUENCY_REGEXES, "no schedule"), None);
    }

    #[test]
    fn test_all_matches_collects_repeats() {
        let found = all_matches(&INSTRUCTION_REGEXES, "avoid alcohol and avoid sun");
        assert_eq!(found, vec!["avoid alcohol", "avoid sun"]);
    }

    #[test]
    fn test_bare_verb_match_is_trimmed() {
        let found = all_matches(&INSTRUCTION_REGEXES, "chew before swallowing");
        assert_eq!(found, vec!["chew"]);
    }
}
