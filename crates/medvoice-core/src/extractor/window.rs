//! Keyword context windows.
//!
//! When no pattern matches, several extractors fall back to the text around
//! the first keyword token.

use crate::models::{Annotation, Token};

/// Token window relative to a hit at index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// `[i - before, i + after]`, clamped to the utterance
    Around { before: usize, after: usize },
    /// `[i, i + len)`, clamped to the utterance
    Forward(usize),
}

/// Two tokens either side of the hit.
pub const AROUND_TWO: Window = Window::Around {
    before: 2,
    after: 2,
};

/// The hit and the four tokens after it.
pub const FORWARD_FIVE: Window = Window::Forward(5);

impl Window {
    /// Token range `[start, end)` for a hit at `index` in `len` tokens.
    pub fn range(self, index: usize, len: usize) -> (usize, usize) {
        match self {
            Self::Around { before, after } => {
                (index.saturating_sub(before), (index + after + 1).min(len))
            }
            Self::Forward(width) => (index, (index + width).min(len)),
        }
    }

    /// Original text of the window around `index`.
    pub fn text(self, annotation: &Annotation, index: usize) -> String {
        let (start, end) = self.range(index, annotation.len());
        annotation.span_text(start, end)
    }
}

/// Window text around the first token accepted by `is_hit`.
pub fn keyword_window<F>(annotation: &Annotation, window: Window, mut is_hit: F) -> Option<String>
where
    F: FnMut(&Annotation, &Token) -> bool,
{
    annotation
        .tokens
        .iter()
        .find(|token| is_hit(annotation, *token))
        .map(|token| window.text(annotation, token.index))
        .filter(|text| !text.is_empty())
}

/// Window texts for every token accepted by `is_hit`, in token order.
pub fn keyword_windows<F>(annotation: &Annotation, window: Window, mut is_hit: F) -> Vec<String>
where
    F: FnMut(&Annotation, &Token) -> bool,
{
    annotation
        .tokens
        .iter()
        .filter(|token| is_hit(annotation, *token))
        .map(|token| window.text(annotation, token.index))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Predicate: lowercase token text is in `keywords`.
pub fn in_keywords<'k>(keywords: &'k [&'k str]) -> impl Fn(&Annotation, &Token) -> bool + 'k {
    move |_: &Annotation, token: &Token| keywords.contains(&token.lower().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::RuleAnnotator;

    #[test]
    fn test_range_clamps() {
        assert_eq!(AROUND_TWO.range(0, 10), (0, 3));
        assert_eq!(AROUND_TWO.range(5, 10), (3, 8));
        assert_eq!(AROUND_TWO.range(9, 10), (7, 10));
        assert_eq!(FORWARD_FIVE.range(8, 10), (8, 10));
        assert_eq!(FORWARD_FIVE.range(2, 10), (2, 7));
    }

    #[test]
    fn test_keyword_window_around() {
        let annotation = RuleAnnotator::new().annotate_text("I take it every day.");
        let text = keyword_window(&annotation, AROUND_TWO, in_keywords(&["every"]));
        assert_eq!(text.as_deref(), Some("take it every day."));
    }

    #[test]
    fn test_keyword_window_forward_crosses_sentences() {
        let annotation = RuleAnnotator::new().annotate_text("Avoid alcohol. Store in a cool place.");
        let text = keyword_window(&annotation, FORWARD_FIVE, in_keywords(&["avoid"]));
        assert_eq!(text.as_deref(), Some("Avoid alcohol. Store in"));
    }

    #[test]
    fn test_keyword_windows_all_hits() {
        let annotation = RuleAnnotator::new().annotate_text("keep dry, keep cool");
        let texts = keyword_windows(&annotation, Window::Forward(2), in_keywords(&["keep"]));
        assert_eq!(texts, vec!["keep dry", "keep cool"]);
    }

    #[test]
    fn test_no_hit() {
        let annotation = RuleAnnotator::new().annotate_text("nothing here");
        assert!(keyword_window(&annotation, AROUND_TWO, in_keywords(&["every"])).is_none());
    }
}
