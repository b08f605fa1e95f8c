//! Rule-driven duration-phrase extraction.
//!
//! `durion` locates natural-language duration mentions ("15 minutes",
//! "an hour and a half", "3 hours and 5 seconds") in a tokenized text and
//! resolves each mention to a precise source span plus an aggregate
//! millisecond value. It is deterministic and rule-based: no models, no
//! locale inference. The unit vocabulary (unit words, filler words, half
//! words) is supplied as data through [`DurationOptions`], so the matcher
//! itself stays language-agnostic.
//!
//! The pipeline, leaves first:
//!
//! ```text
//! text ── Tokenizer ── Vec<Token>        (tokenizer.rs, external collaborator)
//!                        │
//!             Lexicon::classify          (lexicon.rs: word → category)
//!                        │
//!           find_duration_starting_at    (scanner.rs: group scan + compose)
//!                        │
//!        DurationAnnotator::find_all / classify_text   (annotator.rs)
//! ```

#[macro_use]
mod macros;
mod annotator;
mod lexicon;
mod options;
mod scanner;
mod tokenizer;

pub use annotator::DurationAnnotator;
pub use lexicon::{Lexicon, TokenCategory, UnitKind};
pub use options::DurationOptions;
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Collection name attached to every duration classification.
pub const DURATION_COLLECTION: &str = "duration";

// --- Core types -------------------------------------------------------------

/// A half-open `[start, end)` range of codepoint offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointSpan {
    /// Start codepoint index (inclusive).
    pub start: usize,
    /// End codepoint index (exclusive).
    pub end: usize,
}

impl CodepointSpan {
    pub fn new(start: usize, end: usize) -> Self {
        CodepointSpan { start, end }
    }

    /// True when the two spans share at least one codepoint.
    pub fn intersects(&self, other: &CodepointSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A lexical token produced by a [`Tokenizer`].
///
/// Tokens are immutable inputs; the extractor only indexes into the sequence
/// and trusts spans to be non-overlapping and increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text content of the token.
    pub value: String,
    /// Codepoint span of the token in the source text.
    pub span: CodepointSpan,
}

impl Token {
    pub fn new(value: impl Into<String>, start: usize, end: usize) -> Self {
        Token { value: value.into(), span: CodepointSpan::new(start, end) }
    }
}

/// The resolved value of a duration mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Always [`DURATION_COLLECTION`] for this extractor.
    pub collection: &'static str,
    /// Aggregate duration of the mention in milliseconds.
    pub duration_ms: i64,
}

/// A classified source range: where a duration mention sits and what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedSpan {
    pub span: CodepointSpan,
    pub classification: ClassificationResult,
}

/// Caller-side annotation usecase, accepted by every annotator in the
/// surrounding platform. This extractor takes it for contract parity and
/// never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationUsecase {
    Raw,
    Smart,
}
