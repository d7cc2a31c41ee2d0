//! Linguistic annotation service.
//!
//! Extraction needs tokens, lemmas, POS tags, noun chunks and named entities.
//! Anything that can produce an [`Annotation`] plugs in here: the built-in
//! [`RuleAnnotator`], or an external NLP process via the `medvoice-nlp` bridge.

mod lexicon;
mod rules;

pub use rules::*;

use thiserror::Error;

use crate::models::Annotation;

/// Annotation errors.
///
/// These are service failures, never "nothing found": an utterance with no
/// medication vocabulary still annotates successfully.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("Annotator unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid annotator output: {0}")]
    InvalidOutput(String),
}

pub type AnnotateResult<T> = Result<T, AnnotateError>;

/// Produces a linguistic [`Annotation`] for an utterance.
pub trait Annotator: Send + Sync {
    /// Annotate one utterance.
    fn annotate(&self, text: &str) -> AnnotateResult<Annotation>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "annotator"
    }
}

impl<A: Annotator + ?Sized> Annotator for Box<A> {
    fn annotate(&self, text: &str) -> AnnotateResult<Annotation> {
        (**self).annotate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<A: Annotator + ?Sized> Annotator for std::sync::Arc<A> {
    fn annotate(&self, text: &str) -> AnnotateResult<Annotation> {
        (**self).annotate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
