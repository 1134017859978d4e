//! The text simplification pipeline.
//!
//! An ordered chain of rewrite stages that strips scoreboard noise, fixes
//! scraping artifacts, substitutes entities, dates and penalty notation with
//! marker tokens, and reduces the text to the symbols the tokenizer needs.
//! The order is part of the contract: penalty detection must run before the
//! generic numeric deletion, the dash-spacing fixes must run before entity
//! replacement, the org fallback must run after it, and so on. [`PIPELINE`]
//! is that contract in data form.

pub mod entities;
pub mod orgs;
pub mod rules;

pub use orgs::replace_concrete_orgs;

use log::trace;

use crate::tagger::Tagger;

/// Which replacement stages of the pipeline are active.
#[derive(Debug, Clone)]
pub struct SimplifyOptions {
    /// Substitute person/organization/location spans with per/org/loc.
    pub replace_entities: bool,
    /// Substitute date expressions with 'date'.
    pub replace_dates: bool,
    /// Substitute penalty notation ('2+10') with 'pen'.
    pub replace_penalties: bool,
}

impl SimplifyOptions {
    /// All replacement stages enabled.
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
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self {
            replace_entities: true,
            replace_dates: true,
            replace_penalties: true,
        }
    }
}

/// One stage of the pipeline.
enum Stage {
    /// An unconditional pure rewrite rule.
    Rule(&'static str, fn(&str) -> String),
    /// Entity span replacement, active when `replace_entities` is set.
    Entities,
    /// Date span replacement, active when `replace_dates` is set.
    Dates,
    /// Penalty notation replacement, active when `replace_penalties` is set.
    Penalties,
    /// Quoted-word and known-club org fallbacks, active with `replace_entities`.
    OrgFallback,
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::Rule(name, _) => *name,
            Stage::Entities => "replace_entities",
            Stage::Dates => "replace_dates",
            Stage::Penalties => "replace_penalty",
            Stage::OrgFallback => "replace_orgs_fallback",
        }
    }
}

macro_rules! rule {
    ($name:ident) => {
        Stage::Rule(stringify!($name), rules::$name)
    };
}

/// The canonical stage order.
static PIPELINE: &[Stage] = &[
    rule!(delete_parentheses_content),
    rule!(replace_tak_kak),
    rule!(replace_to_est),
    rule!(delete_letter_dot_letter_dot),
    rule!(fix_question_dot),
    rule!(fix_dot_question),
    rule!(fix_b_o_lshii),
    rule!(delete_shutouts),
    rule!(delete_overtime_mark),
    rule!(delete_amplua),
    rule!(lowercase_shaiba_word),
    rule!(lowercase_sdk),
    rule!(latin_c_to_cirillic),
    rule!(fix_latin_c_in_russian_words),
    rule!(fix_cirillic_c_in_english_words),
    rule!(replace_vs_with_dash),
    rule!(delete_cirillic_ending_from_english_words),
    rule!(fix_covid),
    rule!(fix_english_dash_russian_words),
    rule!(delete_age_category),
    rule!(delete_birth_mark),
    rule!(fix_surname_dash_surname_dash_surname),
    rule!(fix_dash_word),
    Stage::Entities,
    Stage::Dates,
    Stage::Penalties,
    rule!(delete_year_city_mark),
    Stage::OrgFallback,
    rule!(split_ners),
    rule!(delete_urls),
    rule!(delete_quotes_with_one_symbol),
    rule!(delete_one_symbol_english_words),
    rule!(generalize_top),
    rule!(delete_numeric_data),
    rule!(delete_serial_numbers),
    rule!(delete_play_format),
    rule!(replace_exclamation_mark_with_dot),
    rule!(leave_only_significant_symbols),
    rule!(fix_org_loc),
    rule!(merge_spaces),
    rule!(merge_dashes),
    rule!(replace_dash_between_ners),
    rule!(delete_beginning_ending_dashes_in_words),
    rule!(merge_spaces),
    rule!(delete_ending_colon_dash),
    rule!(fix_dots),
    rule!(fix_question_marks),
    rule!(fix_question_dot),
    rule!(fix_dot_question),
];

/// Run the full simplification pipeline over `text`.
///
/// ```no_run
/// use newscoder::{simplify, SimplifyOptions};
/// # fn run(tagger: &dyn newscoder::Tagger) {
/// let options = SimplifyOptions::default();
/// let simplified = simplify("'Ак Барс' победил 3:2", tagger, &options);
/// # }
/// ```
pub fn simplify(text: &str, tagger: &dyn Tagger, options: &SimplifyOptions) -> String {
    let mut text = text.to_string();
    for stage in PIPELINE {
        let output = match stage {
            Stage::Rule(_, rule) => Some(rule(&text)),
            Stage::Entities if options.replace_entities => {
                Some(entities::replace_entities(&text, tagger))
            }
            Stage::Dates if options.replace_dates => Some(entities::replace_dates(&text, tagger)),
            Stage::Penalties if options.replace_penalties => Some(rules::replace_penalty(&text)),
            Stage::OrgFallback if options.replace_entities => {
                Some(orgs::replace_concrete_orgs(&rules::handwritten_replace_orgs(&text)))
            }
            _ => None,
        };
        if let Some(output) = output {
            if output != text {
                trace!("{}: {:?} -> {:?}", stage.name(), text, output);
            }
            text = output;
        }
    }
    text.trim().to_string()
}
