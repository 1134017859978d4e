//! Entity and date span replacement.
//!
//! Span detection is delegated to the external tagger; this module only
//! substitutes the detected spans with marker tokens. A tagger failure is
//! downgraded to "nothing found" — the pipeline must keep going with the
//! text it has.

use log::warn;

use crate::tagger::Tagger;

/// Replace every detected named-entity span with its lowercase type marker.
///
/// Spans are sorted by descending start offset before replacement so that
/// splicing one span never invalidates the offsets of the spans still
/// pending. Overlap policy: a span whose end reaches into an already
/// replaced region is skipped.
pub fn replace_entities(text: &str, tagger: &dyn Tagger) -> String {
    let mut spans = match tagger.entity_spans(text) {
        Ok(spans) => spans,
        Err(err) => {
            warn!("entity detection failed, keeping text as is: {err}");
            return text.to_string();
        }
    };
    spans.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = text.to_string();
    let mut replaced_start = result.len();
    for span in spans {
        if span.stop > replaced_start
            || !result.is_char_boundary(span.start)
            || !result.is_char_boundary(span.stop)
        {
            continue;
        }
        result.replace_range(span.start..span.stop, span.kind.as_str());
        replaced_start = span.start;
    }
    result
}

/// Replace every detected date expression with the token 'date'.
///
/// Each matched span's text is replaced at its first literal occurrence,
/// one occurrence per detected span.
pub fn replace_dates(text: &str, tagger: &dyn Tagger) -> String {
    let ranges = match tagger.date_spans(text) {
        Ok(ranges) => ranges,
        Err(err) => {
            warn!("date detection failed, keeping text as is: {err}");
            return text.to_string();
        }
    };

    let dates: Vec<&str> = ranges
        .into_iter()
        .filter(|r| {
            r.start < r.end
                && r.end <= text.len()
                && text.is_char_boundary(r.start)
                && text.is_char_boundary(r.end)
        })
        .map(|r| &text[r])
        .collect();

    let mut result = text.to_string();
    for date in dates {
        result = result.replacen(date, "date", 1);
    }
    result
}
