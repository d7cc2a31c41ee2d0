//! spaCy-style doc JSON → [`Annotation`].
//!
//! Expected shape (what `doc.to_json()` plus a few token attributes gives):
//!
//! ```json
//! {
//!   "text": "Take Zyrtec daily",
//!   "tokens": [{"text": "Take", "lemma": "take", "pos": "VERB", "like_num": false, "idx": 0}, ...],
//!   "noun_chunks": [{"start": 1, "end": 2}],
//!   "ents": [{"start": 1, "end": 2, "label": "PRODUCT"}]
//! }
//! ```
//!
//! `idx` is a character offset, as spaCy reports it. Span bounds are token
//! indices, end exclusive.

use medvoice_core::models::{Annotation, Entity, EntityLabel, PartOfSpeech, Span, Token};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bridge errors.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid doc format: {0}")]
    InvalidFormat(String),

    #[error("Out of bounds: {0}")]
    OutOfBounds(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Raw doc as emitted by the annotator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocJson {
    pub text: String,
    pub tokens: Vec<DocToken>,
    #[serde(default)]
    pub noun_chunks: Vec<DocSpan>,
    #[serde(default)]
    pub ents: Vec<DocEntity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocToken {
    pub text: String,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub pos: String,
    #[serde(default)]
    pub like_num: bool,
    /// Character offset in `text`
    pub idx: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DocSpan {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocEntity {
    pub start: usize,
    pub end: usize,
    pub label: String,
}

/// Parse annotator output into an [`Annotation`].
///
/// Log lines or banners around the JSON object are ignored, including ones
/// that contain braces. The first `{` that starts a complete doc object wins.
pub fn parse_doc_json(output: &str) -> BridgeResult<Annotation> {
    let mut first_error = None;

    for (start, _) in output.match_indices('{') {
        let mut stream =
            serde_json::Deserializer::from_str(&output[start..]).into_iter::<DocJson>();
        match stream.next() {
            Some(Ok(doc)) => return doc.into_annotation(),
            Some(Err(e)) => {
                first_error.get_or_insert(e);
            }
            None => {}
        }
    }

    match first_error {
        Some(e) => Err(BridgeError::Json(e)),
        None => Err(BridgeError::InvalidFormat(
            "No JSON object found in output".into(),
        )),
    }
}

impl DocJson {
    /// Validate offsets and spans, and convert to the core model.
    pub fn into_annotation(self) -> BridgeResult<Annotation> {
        // Byte offset of every character, plus the end of the text
        let byte_at: Vec<usize> = self
            .text
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(self.text.len()))
            .collect();

        let mut tokens = Vec::with_capacity(self.tokens.len());
        for (index, raw) in self.tokens.into_iter().enumerate() {
            let offset = *byte_at.get(raw.idx).ok_or_else(|| {
                BridgeError::OutOfBounds(format!(
                    "token {} ('{}') starts at char {} past end of text",
                    index, raw.text, raw.idx
                ))
            })?;
            if !self.text[offset..].starts_with(&raw.text) {
                return Err(BridgeError::InvalidFormat(format!(
                    "token {} ('{}') does not match text at char {}",
                    index, raw.text, raw.idx
                )));
            }

            let lemma = if raw.lemma.is_empty() {
                raw.text.to_lowercase()
            } else {
                raw.lemma
            };

            tokens.push(Token {
                pos: PartOfSpeech::from_tag(&raw.pos),
                text: raw.text,
                lemma,
                like_num: raw.like_num,
                index,
                offset,
            });
        }

        let token_count = tokens.len();
        let check = |what: &str, start: usize, end: usize| -> BridgeResult<Span> {
            if start > end || end > token_count {
                return Err(BridgeError::OutOfBounds(format!(
                    "{} span [{}, {}) outside {} tokens",
                    what, start, end, token_count
                )));
            }
            Ok(Span::new(start, end))
        };

        let noun_chunks = self
            .noun_chunks
            .iter()
            .map(|s| check("noun chunk", s.start, s.end))
            .collect::<BridgeResult<Vec<_>>>()?;

        let entities = self
            .ents
            .iter()
            .map(|e| {
                Ok(Entity {
                    span: check("entity", e.start, e.end)?,
                    label: EntityLabel::from_label(&e.label),
                })
            })
            .collect::<BridgeResult<Vec<_>>>()?;

        Ok(Annotation {
            text: self.text,
            tokens,
            noun_chunks,
            entities,
        })
    }
}
