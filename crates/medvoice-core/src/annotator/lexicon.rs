//! Word lists for the rule annotator.

pub(crate) const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "each", "every", "some", "any", "no", "all", "another", "either", "neither",
];

pub(crate) const ADPOSITIONS: &[&str] = &[
    "in", "at", "on", "for", "with", "without", "before", "after", "during", "until", "till", "by",
    "from", "of", "into", "about", "over", "under", "per", "through", "between", "around", "upon",
    "within", "near", "like", "against", "across",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours", "something",
    "anything", "nothing", "everything", "someone", "anyone", "what", "which", "who", "whom",
];

pub(crate) const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "will", "would", "should", "can", "could", "may", "might", "must", "shall", "'m", "'re",
    "'s", "'ll", "'ve", "'d", "ca", "wo",
];

pub(crate) const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "plus"];

pub(crate) const SUBORDINATORS: &[&str] = &[
    "if", "because", "while", "unless", "although", "though", "whether", "since",
];

pub(crate) const PARTICLES: &[&str] = &["not", "n't", "never"];

pub(crate) const INTERJECTIONS: &[&str] = &[
    "hello", "hi", "hey", "please", "yes", "yeah", "ok", "okay", "thanks", "oh", "um", "uh",
];

pub(crate) const ADVERBS: &[&str] = &[
    "daily", "weekly", "monthly", "yearly", "nightly", "once", "twice", "thrice", "always",
    "also", "then", "now", "well", "thoroughly", "very", "too", "only", "again", "ago",
    "soon", "there", "here", "how", "when", "where", "why", "often", "sometimes", "usually",
    "regularly", "just", "still", "even", "later", "early", "today", "tonight", "tomorrow",
    "away", "up", "down", "out", "off",
];

pub(crate) const ADJECTIVES: &[&str] = &[
    "high", "low", "empty", "full", "cool", "cold", "dry", "warm", "hot", "small", "large",
    "big", "little", "long", "short", "new", "old", "other", "good", "bad", "nice", "yellow",
    "white", "red", "blue", "green", "pink", "orange", "sick", "ill", "safe", "same", "next",
    "last", "first", "extra", "chronic", "ongoing", "dizzy", "drowsy", "sleepy", "light",
];

/// Base forms of verbs the annotator recognises.
pub(crate) const VERBS: &[&str] = &[
    "take", "prescribe", "need", "use", "give", "start", "stop", "finish", "continue", "eat",
    "drink", "swallow", "chew", "dissolve", "crush", "shake", "store", "keep", "refrigerate",
    "avoid", "apply", "inject", "mix", "cause", "remember", "forget", "help", "say", "tell",
    "go", "get", "make", "put", "try", "want", "feel", "sleep", "wake", "ask", "check", "begin",
    "lower", "treat", "control", "prevent", "reduce", "miss", "skip", "repeat", "split",
    "break", "inhale", "spray", "rub", "wash", "see", "call", "remind",
];

/// Irregular inflections mapped to their base form.
pub(crate) const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drank", "drink"),
    ("drunk", "drink"),
    ("went", "go"),
    ("gone", "go"),
    ("got", "get"),
    ("gotten", "get"),
    ("made", "make"),
    ("said", "say"),
    ("told", "tell"),
    ("kept", "keep"),
    ("felt", "feel"),
    ("slept", "sleep"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("shook", "shake"),
    ("shaken", "shake"),
    ("began", "begin"),
    ("begun", "begin"),
    ("broke", "break"),
    ("broken", "break"),
    ("saw", "see"),
    ("seen", "see"),
];

pub(crate) const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

pub(crate) const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "thirtieth", "hundredth",
];

/// Unit suffixes split off a leading number ("10mg" → "10" "mg").
pub(crate) const GLUED_UNITS: &[&str] = &[
    "mg", "mcg", "g", "kg", "ml", "l", "cc", "iu", "tab", "tabs", "cap", "caps", "hr", "hrs",
    "h", "am", "pm", "x",
];

/// Clitics split off the end of a word ("don't" → "do" "n't").
pub(crate) const CLITICS: &[&str] = &["n't", "'s", "'m", "'ll", "'re", "'ve", "'d"];

pub(crate) const PREFIX_PUNCT: &[char] = &['"', '\'', '(', '[', '{', '<', '“', '‘', '¿', '¡'];

pub(crate) const SUFFIX_PUNCT: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', ')', ']', '}', '>', '”', '’', '…',
];

pub(crate) const SENTENCE_END: &[&str] = &[".", "!", "?", "…"];

pub(crate) fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}
