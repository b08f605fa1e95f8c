//! Word classification: one immutable table from surface form to category.
//!
//! The lexicon is built once from [`DurationOptions`] and then shared
//! read-only across calls (and threads). Classification is an exact word
//! match against the configured lists, then the hard-coded quantity words,
//! then a digit-literal gate; anything else is [`TokenCategory::Unrecognized`].

use std::collections::HashMap;

use crate::options::DurationOptions;

/// Time unit a duration group is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl UnitKind {
    /// Exact conversion factor to milliseconds.
    pub fn millis(self) -> i64 {
        match self {
            UnitKind::Week => 604_800_000,
            UnitKind::Day => 86_400_000,
            UnitKind::Hour => 3_600_000,
            UnitKind::Minute => 60_000,
            UnitKind::Second => 1_000,
        }
    }
}

/// Lexical role of a single token, as far as duration matching is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenCategory {
    /// A configured unit word ("minute", "weeks", ...).
    Unit(UnitKind),
    /// One of the hard-coded quantity words "a", "an", "one": value 1.
    QuantityWord,
    /// A configured half word: contributes a 0.5 fractional quantity.
    HalfWord,
    /// A configured filler word, tolerated between meaningful tokens.
    Filler,
    /// A digit literal ("15", "2.5"), carrying its parsed value.
    NumberLiteral(f64),
    /// Anything else; always terminates a candidate match.
    Unrecognized,
}

// Quantity words are deliberately not configurable: they resolve to 1 in any
// vocabulary that does not claim them as filler first.
const QUANTITY_WORDS: [&str; 3] = ["a", "an", "one"];

/// Immutable surface-form table built once per extractor instance.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, TokenCategory>,
    case_sensitive: bool,
}

impl Lexicon {
    pub fn new(options: &DurationOptions) -> Self {
        let mut lexicon =
            Lexicon { words: HashMap::new(), case_sensitive: options.case_sensitive };

        // Later inserts win, so units go last: a word accidentally listed as
        // both filler and unit must classify as the unit.
        lexicon.insert_all(&options.filler_expressions, TokenCategory::Filler);
        lexicon.insert_all(&options.half_expressions, TokenCategory::HalfWord);

        let unit_lists: [(&[String], UnitKind); 5] = [
            (&options.week_expressions, UnitKind::Week),
            (&options.day_expressions, UnitKind::Day),
            (&options.hour_expressions, UnitKind::Hour),
            (&options.minute_expressions, UnitKind::Minute),
            (&options.second_expressions, UnitKind::Second),
        ];
        for (list, kind) in unit_lists {
            lexicon.insert_all(list, TokenCategory::Unit(kind));
        }

        lexicon
    }

    /// Classify a token's text. Word lists take precedence over quantity
    /// words, which take precedence over the digit-literal gate.
    pub fn classify(&self, text: &str) -> TokenCategory {
        let key = self.fold(text);

        if let Some(category) = self.words.get(&key) {
            return *category;
        }
        if QUANTITY_WORDS.contains(&key.as_str()) {
            return TokenCategory::QuantityWord;
        }
        if let Some(value) = parse_number_literal(text) {
            return TokenCategory::NumberLiteral(value);
        }

        TokenCategory::Unrecognized
    }

    fn insert_all(&mut self, list: &[String], category: TokenCategory) {
        for word in list {
            let key = self.fold(word);
            self.words.insert(key, category);
        }
    }

    fn fold(&self, text: &str) -> String {
        if self.case_sensitive { text.to_string() } else { text.to_lowercase() }
    }
}

/// Parse a digit literal ("15", "2.5") into its value.
///
/// The shape gate keeps `str::parse::<f64>` extras (exponents, signs, "inf")
/// out of the quantity domain; anything malformed is simply not a quantity.
pub(crate) fn parse_number_literal(text: &str) -> Option<f64> {
    if !regex!(r"^\d+(?:\.\d+)?$").is_match(text) {
        return None;
    }
    text.parse::<f64>().ok()
}
