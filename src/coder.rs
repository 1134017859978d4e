//! The lemma-to-code mapping and the coding of lemma sequences.
//!
//! A coder is built once from a frequency-ranked dictionary and never
//! mutated afterwards. Codes 0 and 1 are reserved for the padding
//! placeholder and the unknown-word marker; ranked lemmas get 2, 3, … in
//! the order supplied, most frequent first.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Lemma standing for "no word", code 0; used for left-padding.
pub const PLACEHOLDER: &str = "";

/// Lemma standing for an out-of-vocabulary word, code 1.
pub const UNKNOWN: &str = "???";

/// Integer code of a lemma.
pub type Code = u32;

/// Bijective lemma ↔ code mapping.
#[derive(Debug, Clone)]
pub struct Coder {
    index: HashMap<String, Code>,
    lemmas: Vec<String>,
}

impl Coder {
    /// Build a coder from lemmas ranked by descending frequency.
    ///
    /// The input order is the ranking; nothing is re-sorted here. Duplicate
    /// lemmas (including stray "" / "???" entries) are skipped without
    /// consuming a code, keeping the mapping bijective.
    pub fn from_ranked<I, S>(ranked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut coder = Self {
            index: HashMap::new(),
            lemmas: Vec::new(),
        };
        coder.push(PLACEHOLDER.to_string());
        coder.push(UNKNOWN.to_string());
        for lemma in ranked {
            let lemma = lemma.into();
            if !coder.index.contains_key(&lemma) {
                coder.push(lemma);
            }
        }
        coder
    }

    /// Load a coder from a JSON frequency dictionary file.
    ///
    /// The file maps lemma to occurrence count and is expected to be sorted
    /// by descending count already; the key order in the file is the
    /// ranking. A parse failure is fatal.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let entries: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&content)?;
        for (lemma, count) in &entries {
            if !count.is_u64() {
                return Err(Error::DictionaryEntry(lemma.clone()));
            }
        }
        Ok(Self::from_ranked(entries.into_iter().map(|(lemma, _)| lemma)))
    }

    fn push(&mut self, lemma: String) {
        let code = self.lemmas.len() as Code;
        self.index.insert(lemma.clone(), code);
        self.lemmas.push(lemma);
    }

    /// Code of a lemma, if it is in the vocabulary.
    pub fn code(&self, lemma: &str) -> Option<Code> {
        self.index.get(lemma).copied()
    }

    /// Lemma of a code, if the code was produced by this coder.
    pub fn lemma(&self, code: Code) -> Option<&str> {
        self.lemmas.get(code as usize).map(String::as_str)
    }

    /// Vocabulary size, reserved entries included.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    /// A coder always holds at least the two reserved entries.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Map a lemma sequence to its code sequence.
///
/// Unknown lemmas are either dropped (`exclude_unknown`) or mapped to the
/// unknown code. Adjacent duplicate codes collapse to one (dropping and
/// unknown-mapping both create fresh adjacencies). With `max_len` set the
/// result is truncated to the first `max_len` codes or left-padded with the
/// placeholder code to exactly that length.
pub fn lemmas_to_codes(
    lemmas: &[String],
    coder: &Coder,
    exclude_unknown: bool,
    max_len: Option<usize>,
) -> Vec<Code> {
    let unknown = coder.code(UNKNOWN).unwrap_or(1);
    let mut codes: Vec<Code> = Vec::with_capacity(lemmas.len());
    for lemma in lemmas {
        match coder.code(lemma) {
            Some(code) => codes.push(code),
            None if exclude_unknown => {}
            None => codes.push(unknown),
        }
    }
    codes.dedup();
    match max_len {
        None => codes,
        Some(max_len) if codes.len() >= max_len => {
            codes.truncate(max_len);
            codes
        }
        Some(max_len) => {
            let placeholder = coder.code(PLACEHOLDER).unwrap_or(0);
            let mut padded = vec![placeholder; max_len - codes.len()];
            padded.extend(codes);
            padded
        }
    }
}

/// Map a code sequence back to lemmas, for diagnostics.
///
/// Fails on a code this coder never produced; by construction that can only
/// happen when codes from a different vocabulary are mixed in.
pub fn codes_to_lemmas(codes: &[Code], coder: &Coder) -> Result<Vec<String>> {
    codes
        .iter()
        .map(|&code| {
            coder
                .lemma(code)
                .map(str::to_string)
                .ok_or(Error::UnknownCode(code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_coder() -> Coder {
        Coder::from_ranked([".", "команда", "забить", "гол", "московский"])
    }

    fn lemmas(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reserved_codes() {
        let coder = test_coder();
        assert_eq!(coder.code(PLACEHOLDER), Some(0));
        assert_eq!(coder.code(UNKNOWN), Some(1));
        assert_eq!(coder.code("."), Some(2));
        assert_eq!(coder.code("московский"), Some(6));
        assert_eq!(coder.len(), 7);
    }

    #[test]
    fn test_duplicates_skipped() {
        let coder = Coder::from_ranked(["гол", "гол", "???", "матч"]);
        assert_eq!(coder.code("гол"), Some(2));
        assert_eq!(coder.code("матч"), Some(3));
        assert_eq!(coder.code(UNKNOWN), Some(1));
        assert_eq!(coder.len(), 4);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{".": 1000, "и": 500, "в": 400, "-": 300, ":": 200, "матч": 100}}"#
        )
        .unwrap();
        let coder = Coder::from_file(file.path()).unwrap();
        assert_eq!(coder.code(PLACEHOLDER), Some(0));
        assert_eq!(coder.code(UNKNOWN), Some(1));
        assert_eq!(coder.code("."), Some(2));
        assert_eq!(coder.code("и"), Some(3));
        assert_eq!(coder.code("в"), Some(4));
        assert_eq!(coder.code("-"), Some(5));
        assert_eq!(coder.code(":"), Some(6));
        assert_eq!(coder.code("матч"), Some(7));
    }

    #[test]
    fn test_from_file_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Coder::from_file(file.path()),
            Err(Error::DictionaryParse(_))
        ));
    }

    #[test]
    fn test_from_file_bad_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"гол": "сто"}}"#).unwrap();
        assert!(matches!(
            Coder::from_file(file.path()),
            Err(Error::DictionaryEntry(lemma)) if lemma == "гол"
        ));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            Coder::from_file("/nonexistent/dictionary.json"),
            Err(Error::Io(_))
        ));
    }

    // the sequence from the reference dictionary:
    // сегодня and красивый are out of vocabulary
    fn sample() -> Vec<String> {
        lemmas(&["сегодня", "московский", "команда", "забить", "красивый", "гол", "."])
    }

    #[test]
    fn test_lemmas_to_codes_unknowns_mapped() {
        let coder = test_coder();
        assert_eq!(
            lemmas_to_codes(&sample(), &coder, false, None),
            [1, 6, 3, 4, 1, 5, 2]
        );
    }

    #[test]
    fn test_lemmas_to_codes_truncation() {
        let coder = test_coder();
        assert_eq!(
            lemmas_to_codes(&sample(), &coder, false, Some(5)),
            [1, 6, 3, 4, 1]
        );
    }

    #[test]
    fn test_lemmas_to_codes_padding() {
        let coder = test_coder();
        assert_eq!(
            lemmas_to_codes(&sample(), &coder, false, Some(10)),
            [0, 0, 0, 1, 6, 3, 4, 1, 5, 2]
        );
    }

    #[test]
    fn test_lemmas_to_codes_unknowns_excluded() {
        let coder = test_coder();
        assert_eq!(
            lemmas_to_codes(&sample(), &coder, true, None),
            [6, 3, 4, 5, 2]
        );
        assert_eq!(lemmas_to_codes(&sample(), &coder, true, Some(3)), [6, 3, 4]);
        assert_eq!(
            lemmas_to_codes(&sample(), &coder, true, Some(10)),
            [0, 0, 0, 0, 0, 6, 3, 4, 5, 2]
        );
    }

    #[test]
    fn test_adjacent_unknowns_collapse() {
        let coder = test_coder();
        let input = lemmas(&["сегодня", "красивый", "гол"]);
        assert_eq!(lemmas_to_codes(&input, &coder, false, None), [1, 5]);
    }

    #[test]
    fn test_length_invariant() {
        let coder = test_coder();
        for max_len in [1, 3, 7, 20] {
            assert_eq!(
                lemmas_to_codes(&sample(), &coder, false, Some(max_len)).len(),
                max_len
            );
        }
    }

    #[test]
    fn test_codes_to_lemmas() {
        let coder = test_coder();
        assert_eq!(
            codes_to_lemmas(&[0, 0, 1, 6, 3, 4, 1, 5, 2], &coder).unwrap(),
            ["", "", "???", "московский", "команда", "забить", "???", "гол", "."]
        );
    }

    #[test]
    fn test_codes_to_lemmas_unknown_code() {
        let coder = test_coder();
        assert!(matches!(
            codes_to_lemmas(&[0, 99], &coder),
            Err(Error::UnknownCode(99))
        ));
    }

    #[test]
    fn test_round_trip() {
        let coder = test_coder();
        let input = lemmas(&["московский", "команда", "забить", "гол", "."]);
        let codes = lemmas_to_codes(&input, &coder, false, None);
        assert_eq!(codes_to_lemmas(&codes, &coder).unwrap(), input);
    }
}
