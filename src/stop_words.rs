//! Default Russian stop-word list.
//!
//! Conjunctions, particles and intensity adverbs that carry no signal for
//! the downstream model. Prepositions of place ('в', 'на') are kept: they
//! distinguish home/away phrasing. Callers can always pass their own set.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const WORDS: &[&str] = &[
    "и", "а", "но", "же", "ли", "бы", "то", "ведь", "вот", "лишь", "просто",
    "однако", "якобы", "за", "по", "от", "до", "у", "о", "об", "при", "из",
    "для", "без", "под", "над", "про", "очень", "еще", "уже", "много",
    "несколько", "иногда",
];

static STOP_WORDS: Lazy<HashSet<String>> =
    Lazy::new(|| WORDS.iter().map(|w| w.to_string()).collect());

/// The default stop-word set.
pub fn stop_words() -> &'static HashSet<String> {
    &STOP_WORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let stop = stop_words();
        assert!(stop.contains("и"));
        assert!(stop.contains("много"));
        assert!(stop.contains("иногда"));
        // place prepositions and pronouns stay
        assert!(!stop.contains("в"));
        assert!(!stop.contains("на"));
        assert!(!stop.contains("мы"));
        assert!(!stop.contains("или"));
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(stop_words().len(), WORDS.len());
    }
}
