//! Marker tokens and run merging.
//!
//! After entity replacement a lemma stream often carries runs of identical
//! marker tokens ("per per per" for a list of player names). A run of two or
//! more collapses to the plural marker; a single occurrence stays singular.

/// The closed set of marker tokens standing in for replaced entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Person.
    Per,
    /// Organization.
    Org,
    /// Location.
    Loc,
    /// Date expression.
    Date,
    /// Penalty notation (2+10 etc).
    Pen,
}

impl Marker {
    /// All markers in declaration order.
    pub const ALL: [Marker; 5] = [
        Marker::Per,
        Marker::Org,
        Marker::Loc,
        Marker::Date,
        Marker::Pen,
    ];

    /// Singular token form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::Per => "per",
            Marker::Org => "org",
            Marker::Loc => "loc",
            Marker::Date => "date",
            Marker::Pen => "pen",
        }
    }

    /// Plural token form, substituted for a run of two or more.
    pub fn plural(&self) -> &'static str {
        match self {
            Marker::Per => "pers",
            Marker::Org => "orgs",
            Marker::Loc => "locs",
            Marker::Date => "dates",
            Marker::Pen => "pens",
        }
    }
}

/// Collapse maximal runs of `marker`'s singular token into its plural.
///
/// Runs of length 1 are untouched; every other token passes through and
/// breaks runs.
///
/// ```
/// use newscoder::merge::{merge_marker_runs, Marker};
///
/// let lemmas = vec!["per".into(), "per".into(), "и".into(), "per".into()];
/// let merged = merge_marker_runs(lemmas, Marker::Per);
/// assert_eq!(merged, vec!["pers", "и", "per"]);
/// ```
pub fn merge_marker_runs(lemmas: Vec<String>, marker: Marker) -> Vec<String> {
    let singular = marker.as_str();
    let mut merged = Vec::with_capacity(lemmas.len());
    let mut run = 0usize;
    for lemma in lemmas {
        if lemma == singular {
            run += 1;
            continue;
        }
        flush_run(&mut merged, marker, run);
        run = 0;
        merged.push(lemma);
    }
    flush_run(&mut merged, marker, run);
    merged
}

fn flush_run(merged: &mut Vec<String>, marker: Marker, run: usize) {
    if run >= 2 {
        merged.push(marker.plural().to_string());
    } else if run == 1 {
        merged.push(marker.as_str().to_string());
    }
}

/// Collapse marker runs for every marker kind.
///
/// Applied as five independent single-marker passes in a fixed order
/// (pen, date, loc, org, per). The passes are independent — each touches
/// only its own token — so the order is pinned for reproducibility, not
/// correctness.
pub fn merge_markers(lemmas: Vec<String>) -> Vec<String> {
    [
        Marker::Pen,
        Marker::Date,
        Marker::Loc,
        Marker::Org,
        Marker::Per,
    ]
    .into_iter()
    .fold(lemmas, merge_marker_runs)
}
