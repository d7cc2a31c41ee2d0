//! Bridge from external NLP annotators to medvoice annotations.
//!
//! Lets a full statistical pipeline (e.g. a spaCy sidecar) stand in for the
//! built-in rule annotator: [`parse_doc_json`] converts its doc JSON, and
//! [`CommandAnnotator`] runs it as a child process behind the core
//! `Annotator` trait.

pub mod command;
pub mod doc;

pub use command::*;
pub use doc::*;
