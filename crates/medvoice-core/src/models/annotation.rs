//! Linguistic annotation of a single utterance.
//!
//! Produced by an [`Annotator`](crate::annotator::Annotator) and read by the
//! field extractors. Never mutated after construction.

use serde::{Deserialize, Serialize};

/// Coarse (universal) part-of-speech tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PartOfSpeech {
    /// Parse a universal POS tag (`"NOUN"`, `"propn"`, ...). Unknown tags map to `X`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CCONJ" | "CONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            _ => Self::X,
        }
    }

    /// Nominal heads (nouns and proper nouns).
    pub fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::Propn)
    }
}

/// A single token of the utterance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Surface text as it appears in the utterance
    pub text: String,
    /// Dictionary base form (e.g., "taking" → "take")
    pub lemma: String,
    /// Coarse part-of-speech tag
    pub pos: PartOfSpeech,
    /// Whether the token looks like a number ("10", "1/2", "ten")
    pub like_num: bool,
    /// Position in the token sequence
    pub index: usize,
    /// Byte offset of the token in the utterance
    pub offset: usize,
}

impl Token {
    /// Byte offset one past the end of the token.
    pub fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Lowercased surface text.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Half-open token range `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens in the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named-entity category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntityLabel {
    Product,
    Org,
    Gpe,
    Person,
    Other(String),
}

impl EntityLabel {
    /// Parse an annotator label (`"PRODUCT"`, `"ORG"`, `"GPE"`, ...).
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "PRODUCT" => Self::Product,
            "ORG" => Self::Org,
            "GPE" => Self::Gpe,
            "PERSON" => Self::Person,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A labelled token span.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    pub span: Span,
    pub label: EntityLabel,
}

/// Read-only linguistic view of an utterance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Annotation {
    /// The annotated utterance
    pub text: String,
    /// Tokens in order
    pub tokens: Vec<Token>,
    /// Noun-phrase spans
    pub noun_chunks: Vec<Span>,
    /// Named-entity spans
    pub entities: Vec<Entity>,
}

impl Annotation {
    /// Annotation of an utterance with no tokens.
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Original text covered by the token range `[start, end)`.
    ///
    /// The range is clamped to the token sequence; an empty range yields `""`.
    /// Whitespace between tokens is kept exactly as in the utterance.
    pub fn span_text(&self, start: usize, end: usize) -> String {
        let end = end.min(self.tokens.len());
        if start >= end {
            return String::new();
        }
        let from = self.tokens[start].offset;
        let to = self.tokens[end - 1].end_offset();
        self.text
            .get(from..to)
            .map(str::to_string)
            .unwrap_or_else(|| {
                self.tokens[start..end]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
    }

    /// Text of a [`Span`].
    pub fn text_of(&self, span: Span) -> String {
        self.span_text(span.start, span.end)
    }
}
