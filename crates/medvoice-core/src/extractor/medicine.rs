//! Medicine name extraction.
//!
//! Strategies run in order; the first one that produces a name wins:
//!
//! 1. Dictionary: curated names, whole-word and case-insensitive
//! 2. Named entity: PRODUCT / ORG / GPE spans
//! 3. Verb context: up to three tokens after "take" / "prescribe"
//! 4. Noun phrase: the first short noun chunk

use serde::{Deserialize, Serialize};

use crate::models::{Annotation, EntityLabel, PartOfSpeech};

use super::patterns::{NAME_CHUNK_MAX, NAME_VERBS, NAME_VERB_SPAN};
use super::vocabulary::{title_case, MedicineVocabulary};

/// How a medicine name was found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NameStrategy {
    Dictionary,
    NamedEntity,
    VerbContext,
    NounPhrase,
}

impl NameStrategy {
    /// Evaluation order.
    pub const CASCADE: [NameStrategy; 4] = [
        NameStrategy::Dictionary,
        NameStrategy::NamedEntity,
        NameStrategy::VerbContext,
        NameStrategy::NounPhrase,
    ];

    /// Run this strategy alone.
    pub fn apply(self, annotation: &Annotation, vocabulary: &MedicineVocabulary) -> Option<String> {
        let name = match self {
            Self::Dictionary => from_dictionary(annotation, vocabulary),
            Self::NamedEntity => from_entities(annotation),
            Self::VerbContext => from_verb_context(annotation),
            Self::NounPhrase => from_noun_chunks(annotation),
        };
        name.filter(|n| !n.is_empty())
    }
}

/// A medicine name and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub name: String,
    pub strategy: NameStrategy,
}

/// Run the cascade and report which strategy matched.
pub fn resolve_medicine_name(
    annotation: &Annotation,
    vocabulary: &MedicineVocabulary,
) -> Option<NameMatch> {
    NameStrategy::CASCADE.iter().find_map(|&strategy| {
        strategy
            .apply(annotation, vocabulary)
            .map(|name| NameMatch { name, strategy })
    })
}

/// Medicine name, or `""` if no strategy matched.
pub fn extract_medicine_name(annotation: &Annotation, vocabulary: &MedicineVocabulary) -> String {
    match resolve_medicine_name(annotation, vocabulary) {
        Some(found) => {
            tracing::debug!(strategy = ?found.strategy, name = %found.name, "medicine name matched");
            found.name
        }
        None => String::new(),
    }
}

/// Rebuild the original casing from the tokens covering the dictionary hit.
fn from_dictionary(annotation: &Annotation, vocabulary: &MedicineVocabulary) -> Option<String> {
    let hit = vocabulary.find(&annotation.text)?;

    let words: Vec<&str> = annotation
        .tokens
        .iter()
        .filter(|t| t.offset < hit.end && t.end_offset() > hit.start)
        .filter(|t| hit.entry.contains(t.lower().as_str()))
        .map(|t| t.text.as_str())
        .collect();

    if words.is_empty() {
        Some(title_case(hit.entry))
    } else {
        Some(words.join(" "))
    }
}

fn from_entities(annotation: &Annotation) -> Option<String> {
    annotation
        .entities
        .iter()
        .find(|e| {
            matches!(
                e.label,
                EntityLabel::Product | EntityLabel::Org | EntityLabel::Gpe
            )
        })
        .map(|e| annotation.text_of(e.span))
}

fn from_verb_context(annotation: &Annotation) -> Option<String> {
    let tokens = &annotation.tokens;
    let verb = tokens
        .iter()
        .position(|t| NAME_VERBS.contains(&t.lemma.as_str()))
        .filter(|&i| i + 1 < tokens.len())?;

    let mut start = verb + 1;
    while start < tokens.len() && matches!(tokens[start].pos, PartOfSpeech::Det | PartOfSpeech::Adp) {
        start += 1;
    }
    if start >= tokens.len() {
        return None;
    }

    Some(annotation.span_text(start, start + NAME_VERB_SPAN))
}

fn from_noun_chunks(annotation: &Annotation) -> Option<String> {
    annotation
        .noun_chunks
        .iter()
        .find(|span| !span.is_empty() && span.len() <= NAME_CHUNK_MAX)
        .map(|span| annotation.text_of(*span))
}
