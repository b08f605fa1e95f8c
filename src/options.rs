//! Extractor configuration: the word lists that make up the vocabulary.
//!
//! The vocabulary is data, not code. The surrounding platform loads these
//! lists from its configuration format and hands them over once, at
//! construction; the extractor never mutates them. Lists are matched
//! word-for-word (not by substring), so the configuration is responsible for
//! carrying every surface form it wants recognized — singular and plural
//! alike ("week" and "weeks").

/// Read-only options for [`crate::DurationAnnotator`].
#[derive(Debug, Clone)]
pub struct DurationOptions {
    /// Master switch. When false the extractor is inert: every call returns
    /// no match without scanning.
    pub enabled: bool,
    /// Surface forms denoting weeks.
    pub week_expressions: Vec<String>,
    /// Surface forms denoting days.
    pub day_expressions: Vec<String>,
    /// Surface forms denoting hours.
    pub hour_expressions: Vec<String>,
    /// Surface forms denoting minutes.
    pub minute_expressions: Vec<String>,
    /// Surface forms denoting seconds.
    pub second_expressions: Vec<String>,
    /// Semantically empty words allowed between meaningful tokens ("and").
    pub filler_expressions: Vec<String>,
    /// Words contributing a 0.5 fractional quantity ("half").
    pub half_expressions: Vec<String>,
    /// When false, word lookups fold ASCII case.
    pub case_sensitive: bool,
}

impl Default for DurationOptions {
    fn default() -> Self {
        DurationOptions {
            enabled: true,
            week_expressions: Vec::new(),
            day_expressions: Vec::new(),
            hour_expressions: Vec::new(),
            minute_expressions: Vec::new(),
            second_expressions: Vec::new(),
            filler_expressions: Vec::new(),
            half_expressions: Vec::new(),
            case_sensitive: false,
        }
    }
}

impl DurationOptions {
    /// An English vocabulary, handy for callers that don't carry their own
    /// configuration (and for the crate's own tests).
    pub fn english() -> Self {
        fn words(list: &[&str]) -> Vec<String> {
            list.iter().map(|w| w.to_string()).collect()
        }

        DurationOptions {
            enabled: true,
            week_expressions: words(&["week", "weeks"]),
            day_expressions: words(&["day", "days"]),
            hour_expressions: words(&["hour", "hours"]),
            minute_expressions: words(&["minute", "minutes"]),
            second_expressions: words(&["second", "seconds"]),
            filler_expressions: words(&["and", "a", "an", "one"]),
            half_expressions: words(&["half"]),
            case_sensitive: false,
        }
    }
}
