//! Group scanning and composition: the ambiguity-resolving heart of the
//! extractor.
//!
//! A *unit group* is one `(quantity, unit)` pairing with its own span:
//!
//! ```text
//! UnitGroup := [Quantity] [HalfPrefix] UnitWord [HalfSuffix]
//! ```
//!
//! The scanner walks tokens left to right with explicit state and no
//! backtracking, accumulating groups for as long as only quantity, half and
//! filler tokens intervene. Adjacent groups compose into one match ("3 hours
//! and 5 seconds"). The walk is non-greedy at the boundaries: filler runs
//! before the first group and after the last are consumed for resumption but
//! never widen the reported span.

use crate::lexicon::{Lexicon, TokenCategory, UnitKind};
use crate::{AnnotatedSpan, ClassificationResult, CodepointSpan, DURATION_COLLECTION, Token};

/// One extracted `(quantity, unit)` pairing. The quantity already folds in
/// any half adjustment ("3 and half" ⇒ 3.5); the flag is diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitGroup {
    pub quantity: f64,
    pub unit: UnitKind,
    pub span: CodepointSpan,
    #[allow(dead_code)]
    pub has_half_adjustment: bool,
}

impl UnitGroup {
    /// Milliseconds for this group. Rounded here, after the quantity is fully
    /// resolved, so "3.5 minutes" is exactly 210_000 with no truncation.
    fn millis(&self) -> i64 {
        (self.quantity * self.unit.millis() as f64).round() as i64
    }
}

/// Quantity state gathered since the last unit word (or the scan start).
#[derive(Debug, Clone, Copy, Default)]
struct PendingQuantity {
    /// Explicit quantity, if one was parsed.
    value: Option<f64>,
    /// Whether `value` came from a digit literal rather than a quantity word.
    from_literal: bool,
    /// A half word was seen; contributes one 0.5 per group, never more.
    plus_half: bool,
    /// The half word is the most recent meaningful token, making this state
    /// eligible as a trailing "[and] [a] half" suffix.
    ends_with_half: bool,
    /// Codepoint end of the half word, for suffix span extension.
    half_end: usize,
}

impl PendingQuantity {
    /// Resolve to a single quantity. Defaults to 1 when nothing was parsed
    /// ("an hour"), to 0.5 when only a half word was ("half an hour"), and
    /// adds the half onto an explicit quantity ("3 and half").
    fn resolve(&self) -> f64 {
        let base = self.value.unwrap_or(if self.plus_half { 0.0 } else { 1.0 });
        if self.plus_half { base + 0.5 } else { base }
    }
}

/// Raw output of one scan: the groups found plus the dangling quantity state
/// left after the last group, which composition may turn into a half suffix.
#[derive(Debug)]
struct GroupScan {
    groups: Vec<UnitGroup>,
    trailing: PendingQuantity,
    /// Index one past the last token the walk consumed.
    resume: usize,
}

/// A composed duration match and where scanning should continue.
#[derive(Debug)]
pub(crate) struct ScanResult {
    pub annotation: AnnotatedSpan,
    /// Index of the first token not consumed by the match.
    pub resume: usize,
}

/// Numeric quantity of a token category, when it allows one.
fn resolve_quantity(category: TokenCategory) -> Option<f64> {
    match category {
        TokenCategory::NumberLiteral(value) => Some(value),
        TokenCategory::QuantityWord => Some(1.0),
        _ => None,
    }
}

/// Attempt a duration match beginning at `start`. `None` means no unit group
/// exists there; the caller advances one token and tries again.
pub(crate) fn find_duration_starting_at(
    lexicon: &Lexicon,
    tokens: &[Token],
    start: usize,
) -> Option<ScanResult> {
    compose(scan_groups(lexicon, tokens, start))
}

/// Walk tokens from `start`, collecting unit groups until a token refuses
/// every role.
fn scan_groups(lexicon: &Lexicon, tokens: &[Token], start: usize) -> GroupScan {
    let mut groups: Vec<UnitGroup> = Vec::new();
    let mut pending = PendingQuantity::default();
    // Start offset of the group currently being assembled. Fillers never set
    // it; that is what keeps leading noise out of the span.
    let mut group_start: Option<usize> = None;
    let mut resume = start;

    for (index, token) in tokens.iter().enumerate().skip(start) {
        match lexicon.classify(&token.value) {
            TokenCategory::Unit(unit) => {
                let span = CodepointSpan::new(
                    group_start.unwrap_or(token.span.start),
                    token.span.end,
                );
                groups.push(UnitGroup {
                    quantity: pending.resolve(),
                    unit,
                    span,
                    has_half_adjustment: pending.plus_half,
                });
                pending = PendingQuantity::default();
                group_start = None;
                resume = index + 1;
            }
            TokenCategory::HalfWord => {
                pending.plus_half = true;
                pending.ends_with_half = true;
                pending.half_end = token.span.end;
                group_start.get_or_insert(token.span.start);
                resume = index + 1;
            }
            category @ (TokenCategory::QuantityWord | TokenCategory::NumberLiteral(_)) => {
                let Some(value) = resolve_quantity(category) else { break };
                pending.value = Some(value);
                pending.from_literal = matches!(category, TokenCategory::NumberLiteral(_));
                pending.ends_with_half = false;
                group_start.get_or_insert(token.span.start);
                resume = index + 1;
            }
            TokenCategory::Filler => {
                resume = index + 1;
            }
            TokenCategory::Unrecognized => break,
        }
    }

    GroupScan { groups, trailing: pending, resume }
}

/// Merge scanned groups into one match: summed milliseconds, span from the
/// first group's first token to the last group's unit word — or to a
/// trailing half word, which borrows the last group's unit ("an hour and a
/// half"). A dangling quantity with no unit contributes nothing.
fn compose(scan: GroupScan) -> Option<ScanResult> {
    let first = scan.groups.first()?;
    let last = scan.groups.last()?;

    let mut duration_ms: i64 = scan.groups.iter().map(|group| group.millis()).sum();
    let mut end = last.span.end;

    // The suffix shape is "[FILLER] [QUANTITY_WORD] HALF_WORD"; a digit
    // literal before the half word disqualifies it.
    if scan.trailing.ends_with_half && !scan.trailing.from_literal {
        duration_ms += last.unit.millis() / 2;
        end = scan.trailing.half_end;
    }

    Some(ScanResult {
        annotation: AnnotatedSpan {
            span: CodepointSpan::new(first.span.start, end),
            classification: ClassificationResult {
                collection: DURATION_COLLECTION,
                duration_ms,
            },
        },
        resume: scan.resume,
    })
}
