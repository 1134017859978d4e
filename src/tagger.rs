//! Collaborator interface for the external linguistic analysis service.
//!
//! The pipeline never segments, tags, or lemmatizes text itself; it delegates
//! to a [`Tagger`] supplied by the host. The tagger is constructed once
//! (its model state is expensive to load) and passed by reference into every
//! call, which keeps initialization explicit and makes the pipeline testable
//! with a scripted double.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Named-entity categories the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    /// Person name.
    Per,
    /// Organization (team, league, club).
    Org,
    /// Location (city, country).
    Loc,
}

impl EntityKind {
    /// Lowercase marker token substituted for a span of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Per => "per",
            EntityKind::Org => "org",
            EntityKind::Loc => "loc",
        }
    }
}

/// A contiguous named-entity span in the source text.
///
/// `start..stop` are **byte** offsets into the UTF-8 string the span was
/// detected in, and must lie on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character of the span.
    pub start: usize,
    /// Byte offset one past the last character of the span.
    pub stop: usize,
    /// Entity category.
    pub kind: EntityKind,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, stop: usize, kind: EntityKind) -> Self {
        Self { start, stop, kind }
    }
}

/// External tokenizer/tagger capability set.
///
/// Implementations wrap a morphological analyzer with NER and date
/// extraction (the reference host wraps the Natasha suite). All methods
/// take shared `&self`: the underlying model state is read-only after
/// construction.
pub trait Tagger {
    /// Segment `text` into tokens, tag them morphologically, and return the
    /// lowercase base form (lemma) of each token, in order.
    fn lemmas(&self, text: &str) -> Result<Vec<String>>;

    /// Detect named-entity spans with byte offsets into `text`.
    fn entity_spans(&self, text: &str) -> Result<Vec<Span>>;

    /// Detect date-expression spans with byte offsets into `text`.
    fn date_spans(&self, text: &str) -> Result<Vec<Range<usize>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_as_str() {
        assert_eq!(EntityKind::Per.as_str(), "per");
        assert_eq!(EntityKind::Org.as_str(), "org");
        assert_eq!(EntityKind::Loc.as_str(), "loc");
    }

    #[test]
    fn test_span_new() {
        let span = Span::new(0, 4, EntityKind::Loc);
        assert_eq!(span.start, 0);
        assert_eq!(span.stop, 4);
        assert_eq!(span.kind, EntityKind::Loc);
    }

    #[test]
    fn test_span_serialization() {
        // matches the type labels the external tagger reports
        let span = Span::new(0, 12, EntityKind::Per);
        let json = serde_json::to_string(&span).unwrap();
        assert_eq!(json, r#"{"start":0,"stop":12,"kind":"PER"}"#);
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
