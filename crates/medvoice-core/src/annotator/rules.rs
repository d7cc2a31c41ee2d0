//! Rule-based English annotator.
//!
//! A small, dependency-free stand-in for a statistical NLP pipeline:
//! - Tokenizer: whitespace split, edge punctuation, clitics, glued units ("10mg")
//! - Lemmas: irregular table, verb inflection stripping, noun plurals
//! - POS: closed-class lexicons plus capitalisation heuristics
//! - Noun chunks: determiner/modifier runs ending at a nominal head
//!
//! It does not recognise named entities.

use crate::models::{Annotation, PartOfSpeech, Span, Token};

use super::lexicon::{self, contains};
use super::{AnnotateResult, Annotator};

/// Built-in annotator. Stateless and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAnnotator;

impl RuleAnnotator {
    pub fn new() -> Self {
        Self
    }

    /// Annotate without the `Result` wrapper.
    pub fn annotate_text(&self, text: &str) -> Annotation {
        let ranges = tokenize(text);
        let lowers: Vec<String> = ranges
            .iter()
            .map(|&(start, end)| text[start..end].to_lowercase())
            .collect();

        let mut tokens: Vec<Token> = Vec::with_capacity(ranges.len());
        for (index, &(start, end)) in ranges.iter().enumerate() {
            let surface = &text[start..end];
            let lower = lowers[index].as_str();
            let sentence_start = index == 0 || contains(lexicon::SENTENCE_END, &lowers[index - 1]);
            let next = lowers.get(index + 1).map(String::as_str);
            let numeric = like_num(surface);

            let pos = tag(surface, lower, next, sentence_start, numeric);
            let lemma = lemmatize(surface, lower, pos);

            tokens.push(Token {
                text: surface.to_string(),
                lemma,
                pos,
                like_num: numeric,
                index,
                offset: start,
            });
        }

        let noun_chunks = noun_chunks(&tokens);

        Annotation {
            text: text.to_string(),
            tokens,
            noun_chunks,
            entities: Vec::new(),
        }
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> AnnotateResult<Annotation> {
        Ok(self.annotate_text(text))
    }

    fn name(&self) -> &str {
        "rules"
    }
}

/// Check whether a token looks like a number.
///
/// Accepts digit strings (with `,`/`.` separators), `N/M` fractions, and
/// English cardinal or ordinal number words.
pub fn like_num(text: &str) -> bool {
    let text = text.trim_start_matches(['+', '-', '±', '~']);
    let stripped: String = text.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if let Some((num, denom)) = text.split_once('/') {
        let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if all_digits(num) && all_digits(denom) {
            return true;
        }
    }
    let lower = text.to_lowercase();
    contains(lexicon::NUMBER_WORDS, &lower) || contains(lexicon::ORDINAL_WORDS, &lower)
}

/// Byte ranges of the tokens of `text`.
fn tokenize(text: &str) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    let mut word_start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                split_word(text, start, i, &mut out);
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        split_word(text, start, text.len(), &mut out);
    }

    out
}

/// Split one whitespace-delimited word into prefix punctuation, core, suffix punctuation.
fn split_word(text: &str, start: usize, end: usize, out: &mut Vec<(usize, usize)>) {
    let mut lo = start;
    let mut hi = end;

    while let Some(c) = text[lo..hi].chars().next() {
        if !lexicon::PREFIX_PUNCT.contains(&c) {
            break;
        }
        out.push((lo, lo + c.len_utf8()));
        lo += c.len_utf8();
    }

    let mut suffixes = Vec::new();
    while let Some(c) = text[lo..hi].chars().next_back() {
        if !lexicon::SUFFIX_PUNCT.contains(&c) {
            break;
        }
        suffixes.push((hi - c.len_utf8(), hi));
        hi -= c.len_utf8();
    }

    if lo < hi {
        split_core(text, lo, hi, out);
    }
    out.extend(suffixes.into_iter().rev());
}

/// Split clitics ("don't") and glued units ("10mg") off a word core.
fn split_core(text: &str, lo: usize, hi: usize, out: &mut Vec<(usize, usize)>) {
    let core = &text[lo..hi];

    for clitic in lexicon::CLITICS {
        if core.len() <= clitic.len() {
            continue;
        }
        let cut = core.len() - clitic.len();
        if core.is_char_boundary(cut) && core[cut..].eq_ignore_ascii_case(clitic) {
            out.push((lo, lo + cut));
            out.push((lo + cut, hi));
            return;
        }
    }

    if core.starts_with(|c: char| c.is_ascii_digit()) {
        let split = core
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ',' || c == '/'))
            .unwrap_or(core.len());
        if split < core.len() {
            let unit = core[split..].to_ascii_lowercase();
            if contains(lexicon::GLUED_UNITS, &unit) {
                out.push((lo, lo + split));
                out.push((lo + split, hi));
                return;
            }
        }
    }

    out.push((lo, hi));
}

fn tag(
    surface: &str,
    lower: &str,
    next: Option<&str>,
    sentence_start: bool,
    numeric: bool,
) -> PartOfSpeech {
    if surface.chars().all(|c| !c.is_alphanumeric()) {
        return if surface.chars().any(|c| "$%+=&@#*~^|".contains(c)) {
            PartOfSpeech::Sym
        } else {
            PartOfSpeech::Punct
        };
    }
    if numeric {
        return PartOfSpeech::Num;
    }
    if lower == "to" {
        // "need to take" vs. "go to bed"
        return match next.and_then(verb_lemma) {
            Some(_) => PartOfSpeech::Part,
            None => PartOfSpeech::Adp,
        };
    }
    if contains(lexicon::DETERMINERS, lower) {
        return PartOfSpeech::Det;
    }
    if contains(lexicon::ADPOSITIONS, lower) {
        return PartOfSpeech::Adp;
    }
    if contains(lexicon::PRONOUNS, lower) {
        return PartOfSpeech::Pron;
    }
    if contains(lexicon::AUXILIARIES, lower) {
        return PartOfSpeech::Aux;
    }
    if contains(lexicon::COORDINATORS, lower) {
        return PartOfSpeech::Cconj;
    }
    if contains(lexicon::SUBORDINATORS, lower) {
        return PartOfSpeech::Sconj;
    }
    if contains(lexicon::PARTICLES, lower) {
        return PartOfSpeech::Part;
    }
    if contains(lexicon::INTERJECTIONS, lower) {
        return PartOfSpeech::Intj;
    }
    if contains(lexicon::ADVERBS, lower) {
        return PartOfSpeech::Adv;
    }
    if verb_lemma(lower).is_some() {
        return PartOfSpeech::Verb;
    }
    if contains(lexicon::ADJECTIVES, lower) {
        return PartOfSpeech::Adj;
    }
    if lower.len() > 4 && lower.ends_with("ly") {
        return PartOfSpeech::Adv;
    }
    if !sentence_start && surface.starts_with(char::is_uppercase) {
        return PartOfSpeech::Propn;
    }
    PartOfSpeech::Noun
}

fn lemmatize(surface: &str, lower: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Verb => verb_lemma(lower).unwrap_or_else(|| lower.to_string()),
        PartOfSpeech::Noun => singularize(lower),
        PartOfSpeech::Propn => surface.to_string(),
        PartOfSpeech::Aux => aux_lemma(lower).to_string(),
        PartOfSpeech::Part if lower == "n't" => "not".to_string(),
        _ => lower.to_string(),
    }
}

/// Base form of a known verb, if `word` is one of its inflections.
fn verb_lemma(word: &str) -> Option<String> {
    let known = |w: &str| contains(lexicon::VERBS, w);

    if known(word) {
        return Some(word.to_string());
    }
    if let Some((_, base)) = lexicon::IRREGULAR_VERBS.iter().find(|(form, _)| *form == word) {
        return Some((*base).to_string());
    }

    let mut candidates: Vec<String> = Vec::new();
    if let Some(stem) = word.strip_suffix("ing") {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
        candidates.push(undouble(stem));
    }
    if let Some(stem) = word.strip_suffix("ied") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("ed") {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
        candidates.push(undouble(stem));
    }
    if let Some(stem) = word.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = word.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        candidates.push(stem.to_string());
    }

    candidates.into_iter().find(|c| !c.is_empty() && known(c))
}

/// "stopp" → "stop"
fn undouble(stem: &str) -> String {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a == b => stem[..stem.len() - a.len_utf8()].to_string(),
        _ => stem.to_string(),
    }
}

fn singularize(lower: &str) -> String {
    if lower.len() > 4 {
        if let Some(stem) = lower.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if lower.ends_with("sses") {
        return lower[..lower.len() - 2].to_string();
    }
    for suffix in ["ches", "shes", "xes", "zes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }
    if lower.len() > 3
        && lower.ends_with('s')
        && !lower.ends_with("ss")
        && !lower.ends_with("us")
        && !lower.ends_with("is")
    {
        return lower[..lower.len() - 1].to_string();
    }
    lower.to_string()
}

fn aux_lemma(lower: &str) -> &str {
    match lower {
        "am" | "is" | "are" | "was" | "were" | "been" | "being" | "'m" | "'re" | "'s" => "be",
        "does" | "did" => "do",
        "has" | "had" | "'ve" => "have",
        "'ll" | "wo" => "will",
        "'d" => "would",
        "ca" => "can",
        other => other,
    }
}

/// Noun chunks: runs of DET/ADJ/NUM/NOUN/PROPN ending at a nominal head.
///
/// A determiner, or a modifier following a head, starts a new chunk.
fn noun_chunks(tokens: &[Token]) -> Vec<Span> {
    let mut chunks = Vec::new();
    let mut start: Option<usize> = None;
    let mut head: Option<usize> = None;

    let close = |start: &mut Option<usize>, head: &mut Option<usize>, chunks: &mut Vec<Span>| {
        if let (Some(s), Some(h)) = (*start, *head) {
            chunks.push(Span::new(s, h + 1));
        }
        *start = None;
        *head = None;
    };

    for (i, token) in tokens.iter().enumerate() {
        match token.pos {
            PartOfSpeech::Det => {
                close(&mut start, &mut head, &mut chunks);
                start = Some(i);
            }
            PartOfSpeech::Adj | PartOfSpeech::Num => {
                if head.is_some() {
                    close(&mut start, &mut head, &mut chunks);
                }
                start.get_or_insert(i);
            }
            PartOfSpeech::Noun | PartOfSpeech::Propn => {
                start.get_or_insert(i);
                head = Some(i);
            }
            _ => close(&mut start, &mut head, &mut chunks),
        }
    }
    close(&mut start, &mut head, &mut chunks);

    chunks
}
