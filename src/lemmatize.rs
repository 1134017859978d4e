//! Adapter over the external lemmatizer.
//!
//! The tagger returns one lowercase base form per token. On top of that this
//! module applies a manual correction table for lemmas the external
//! morphology is known to get wrong, drops stop words, and merges marker
//! runs and adjacent duplicates.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::merge::merge_markers;
use crate::tagger::Tagger;

/// Corrections for known-bad outputs of the external lemmatizer.
///
/// 'голы'/'голова' are what it produces for case forms of 'гол' (the
/// sports goal, not the head); the verb and adjective entries are aspect
/// and suffix normalization misses.
static FIXED_LEMMAS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("забиваем", "забивать"),
        ("основный", "основной"),
        ("родный", "родной"),
        ("голы", "гол"),
        ("голова", "гол"),
    ])
});

/// Apply the manual lemma-correction table.
pub fn fix_lemma(lemma: &str) -> &str {
    FIXED_LEMMAS.get(lemma).copied().unwrap_or(lemma)
}

/// Turn simplified text into a merged lemma sequence.
///
/// Stop-word filtering happens on the corrected lemma and before marker
/// merging, so dropping a stop word can expose two markers that then merge
/// into one plural.
///
/// ```no_run
/// use newscoder::lemmatize;
/// # fn run(tagger: &dyn newscoder::Tagger) -> newscoder::Result<()> {
/// let lemmas = lemmatize("per и per забили гол", tagger, None)?;
/// # Ok(())
/// # }
/// ```
pub fn lemmatize(
    text: &str,
    tagger: &dyn Tagger,
    stop_words: Option<&HashSet<String>>,
) -> Result<Vec<String>> {
    let raw = tagger.lemmas(text)?;
    let mut lemmas = Vec::with_capacity(raw.len());
    for lemma in &raw {
        let fixed = fix_lemma(lemma);
        if let Some(stop) = stop_words {
            if stop.contains(fixed) {
                continue;
            }
        }
        lemmas.push(fixed.to_string());
    }
    let mut merged = merge_markers(lemmas);
    merged.dedup();
    Ok(merged)
}
