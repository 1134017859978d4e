//! # newscoder
//!
//! Turns free-form Russian hockey news into fixed-vocabulary integer code
//! sequences for machine-learning models.
//!
//! The pipeline runs in four stages: character unification, an ordered chain
//! of rewrite rules (scoreboard noise, penalty notation, entity and date
//! markers), lemmatization through an injected linguistic tagger, and
//! frequency-dictionary coding with padding/truncation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use newscoder::{text_to_codes, Coder, EncodeOptions, Tagger};
//!
//! # fn demo(tagger: &dyn Tagger) -> newscoder::Result<()> {
//! // Built once per dictionary file, read-only afterwards
//! let coder = Coder::from_file("frequency_dictionary.json")?;
//!
//! let options = EncodeOptions::default().with_max_len(100);
//! let codes = text_to_codes("«Ак Барс» обыграл «Трактор» 3:2", tagger, &coder, &options)?;
//! println!("{codes:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Deterministic**: every stage is a pure function; same text, same codes
//! - **Injected tagger**: morphology/NER/date detection behind a trait,
//!   substitutable with a test double
//! - **Order-pinned rewrite chain**: the ~45 rule sequence is data, tested
//!   stage by stage and as a whole
//! - **Batch helper**: Rayon-parallel coding of whole datasets

pub mod coder;
pub mod error;
pub mod lemmatize;
pub mod merge;
pub mod simplify;
pub mod stop_words;
pub mod tagger;
pub mod unify;

// Re-export commonly used types
pub use coder::{codes_to_lemmas, lemmas_to_codes, Code, Coder, PLACEHOLDER, UNKNOWN};
pub use error::{Error, Result};
pub use lemmatize::{fix_lemma, lemmatize};
pub use merge::{merge_markers, Marker};
pub use simplify::{simplify, SimplifyOptions};
pub use stop_words::stop_words;
pub use tagger::{EntityKind, Span, Tagger};
pub use unify::unify;

use std::collections::HashSet;

use rayon::prelude::*;

/// Options for the full text-to-codes run.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Substitute person/organization/location spans with per/org/loc.
    pub replace_entities: bool,

    /// Substitute date expressions with 'date'.
    pub replace_dates: bool,

    /// Substitute penalty notation ('2+10') with 'pen'.
    pub replace_penalties: bool,

    /// Drop out-of-vocabulary lemmas instead of coding them as unknown.
    pub exclude_unknown: bool,

    /// Fixed output length: truncate to the first `max_len` codes or
    /// left-pad with the placeholder code.
    pub max_len: Option<usize>,

    /// Lemmas to drop before marker merging.
    pub stop_words: Option<HashSet<String>>,
}

impl EncodeOptions {
    /// Create options with defaults: all replacements on, unknowns kept,
    /// natural length, no stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable entity replacement.
    pub fn with_entities(mut self, replace: bool) -> Self {
        self.replace_entities = replace;
        self
    }

    /// Enable or disable date replacement.
    pub fn with_dates(mut self, replace: bool) -> Self {
        self.replace_dates = replace;
        self
    }

    /// Enable or disable penalty replacement.
    pub fn with_penalties(mut self, replace: bool) -> Self {
        self.replace_penalties = replace;
        self
    }

    /// Drop out-of-vocabulary lemmas entirely.
    pub fn exclude_unknown(mut self, exclude: bool) -> Self {
        self.exclude_unknown = exclude;
        self
    }

    /// Fix the output length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Use a custom stop-word set.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Use the built-in stop-word list.
    pub fn with_default_stop_words(self) -> Self {
        self.with_stop_words(stop_words::stop_words().iter().cloned())
    }

    fn simplify_options(&self) -> SimplifyOptions {
        SimplifyOptions {
            replace_entities: self.replace_entities,
            replace_dates: self.replace_dates,
            replace_penalties: self.replace_penalties,
        }
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            replace_entities: true,
            replace_dates: true,
            replace_penalties: true,
            exclude_unknown: false,
            max_len: None,
            stop_words: None,
        }
    }
}

/// Convert one news text into its code sequence.
///
/// Composes [`unify`] → [`simplify`] → [`lemmatize`] → [`lemmas_to_codes`].
pub fn text_to_codes(
    text: &str,
    tagger: &dyn Tagger,
    coder: &Coder,
    options: &EncodeOptions,
) -> Result<Vec<Code>> {
    let unified = unify::unify(text);
    let simplified = simplify::simplify(&unified, tagger, &options.simplify_options());
    let lemmas = lemmatize::lemmatize(&simplified, tagger, options.stop_words.as_ref())?;
    Ok(coder::lemmas_to_codes(
        &lemmas,
        coder,
        options.exclude_unknown,
        options.max_len,
    ))
}

/// Convert a batch of texts in parallel.
///
/// The tagger's model state is read-only after construction, so sharing it
/// across Rayon workers is sound as long as the implementation is `Sync`.
pub fn texts_to_codes<S>(
    texts: &[S],
    tagger: &(dyn Tagger + Sync),
    coder: &Coder,
    options: &EncodeOptions,
) -> Result<Vec<Vec<Code>>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| text_to_codes(text.as_ref(), tagger, coder, options))
        .collect()
}

/// Builder bundling a tagger, a coder and encode options.
///
/// ```no_run
/// use newscoder::{Coder, TextCoder, Tagger};
///
/// # fn demo(tagger: &dyn Tagger) -> newscoder::Result<()> {
/// let coder = Coder::from_file("frequency_dictionary.json")?;
/// let codes = TextCoder::new(tagger, &coder)
///     .with_default_stop_words()
///     .with_max_len(100)
///     .encode("Шипачев забил в большинстве")?;
/// # Ok(())
/// # }
/// ```
pub struct TextCoder<'a> {
    tagger: &'a dyn Tagger,
    coder: &'a Coder,
    options: EncodeOptions,
}

impl<'a> TextCoder<'a> {
    /// Create a coder pipeline with default options.
    pub fn new(tagger: &'a dyn Tagger, coder: &'a Coder) -> Self {
        Self {
            tagger,
            coder,
            options: EncodeOptions::default(),
        }
    }

    /// Replace the whole option set.
    pub fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Fix the output length.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.options = self.options.with_max_len(max_len);
        self
    }

    /// Drop out-of-vocabulary lemmas entirely.
    pub fn exclude_unknown(mut self) -> Self {
        self.options = self.options.exclude_unknown(true);
        self
    }

    /// Use the built-in stop-word list.
    pub fn with_default_stop_words(mut self) -> Self {
        self.options = self.options.with_default_stop_words();
        self
    }

    /// Use a custom stop-word set.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_stop_words(words);
        self
    }

    /// Encode one text.
    pub fn encode(&self, text: &str) -> Result<Vec<Code>> {
        text_to_codes(text, self.tagger, self.coder, &self.options)
    }

    /// Decode a code sequence back to lemmas, for diagnostics.
    pub fn decode(&self, codes: &[Code]) -> Result<Vec<String>> {
        coder::codes_to_lemmas(codes, self.coder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_options_defaults() {
        let options = EncodeOptions::default();
        assert!(options.replace_entities);
        assert!(options.replace_dates);
        assert!(options.replace_penalties);
        assert!(!options.exclude_unknown);
        assert!(options.max_len.is_none());
        assert!(options.stop_words.is_none());
    }

    #[test]
    fn test_encode_options_chained() {
        let options = EncodeOptions::new()
            .with_entities(false)
            .with_max_len(64)
            .exclude_unknown(true)
            .with_stop_words(["и", "а"]);
        assert!(!options.replace_entities);
        assert_eq!(options.max_len, Some(64));
        assert!(options.exclude_unknown);
        assert!(options.stop_words.unwrap().contains("и"));
    }

    #[test]
    fn test_default_stop_words_attached() {
        let options = EncodeOptions::new().with_default_stop_words();
        let words = options.stop_words.unwrap();
        assert!(words.contains("и"));
        assert!(!words.contains("в"));
    }

    #[test]
    fn test_simplify_options_projection() {
        let options = EncodeOptions::new().with_dates(false);
        let simplify = options.simplify_options();
        assert!(simplify.replace_entities);
        assert!(!simplify.replace_dates);
        assert!(simplify.replace_penalties);
    }
}
