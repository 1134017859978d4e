//! Character-level canonicalization of raw news text.
//!
//! Scraped news arrives with typographic quotes, three kinds of dash,
//! vulgar fractions, decomposed й/ё and assorted control characters.
//! [`unify`] folds all of that into a restricted character set so the
//! rewrite rules downstream only ever see one spelling of each symbol.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::simplify::rules::merge_spaces;

/// Quote variants folded into a single straight quote.
const QUOTES: [char; 7] = ['"', '`', '«', '»', '„', '“', '”'];

/// Dash variants folded into an ASCII hyphen.
const DASHES: [char; 3] = ['—', '–', '−'];

/// Vulgar fractions spelled out.
const FRACTIONS: [(&str, &str); 3] = [("⅛", "1/8"), ("¼", "1/4"), ("½", "1/2")];

/// Anything outside this set is replaced by a space.
static NON_WHITELIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^ А-Яа-яЁёA-Za-z0-9',.\[\]{}()/=+%№#@!?;:-]").unwrap()
});

/// Canonicalize raw input characters.
///
/// Pure and total: never fails for valid UTF-8 input.
///
/// ```
/// use newscoder::unify;
///
/// assert_eq!(unify("«Ак Барс» — чемпион…"), "'Ак Барс' - чемпион...");
/// ```
pub fn unify(text: &str) -> String {
    // NFC first: scraped text carries decomposed й/ё.
    let mut text: String = text.nfc().collect();
    for quote in QUOTES {
        text = text.replace(quote, "'");
    }
    for dash in DASHES {
        text = text.replace(dash, "-");
    }
    for (fraction, spelled) in FRACTIONS {
        text = text.replace(fraction, spelled);
    }
    text = text.replace('…', "...");
    let text = NON_WHITELIST.replace_all(&text, " ");
    merge_spaces(&text).trim().to_string()
}
