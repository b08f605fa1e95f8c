//! Public extraction surface: whole-text sweep and span classification.

use crate::lexicon::Lexicon;
use crate::options::DurationOptions;
use crate::scanner::find_duration_starting_at;
use crate::tokenizer::Tokenizer;
use crate::{AnnotatedSpan, AnnotationUsecase, ClassificationResult, CodepointSpan, Token};

/// The duration extractor.
///
/// Built once from read-only [`DurationOptions`] and a [`Tokenizer`]; after
/// construction it holds no mutable state, so one instance can serve
/// concurrent calls from independent threads. Each call's intermediate data
/// is local to the call.
#[derive(Debug, Clone)]
pub struct DurationAnnotator<T> {
    enabled: bool,
    lexicon: Lexicon,
    tokenizer: T,
}

impl<T: Tokenizer> DurationAnnotator<T> {
    /// # Example
    /// ```
    /// use durion::{
    ///     AnnotationUsecase, CodepointSpan, DurationAnnotator, DurationOptions,
    ///     WhitespaceTokenizer,
    /// };
    ///
    /// let annotator = DurationAnnotator::new(&DurationOptions::english(), WhitespaceTokenizer);
    /// let classification = annotator
    ///     .classify_text("wake me in 15 minutes", CodepointSpan::new(11, 21), AnnotationUsecase::Raw)
    ///     .expect("a duration overlaps the span");
    /// assert_eq!(classification.duration_ms, 900_000);
    /// ```
    pub fn new(options: &DurationOptions, tokenizer: T) -> Self {
        DurationAnnotator {
            enabled: options.enabled,
            lexicon: Lexicon::new(options),
            tokenizer,
        }
    }

    /// Classify an arbitrary character range of `text`.
    ///
    /// The range need not align with token boundaries or with the duration
    /// phrase itself: the whole text is tokenized and scanned, and the first
    /// match whose span overlaps `span` is returned. `None` when disabled or
    /// when no duration phrase touches the range.
    pub fn classify_text(
        &self,
        text: &str,
        span: CodepointSpan,
        usecase: AnnotationUsecase,
    ) -> Option<ClassificationResult> {
        if !self.enabled {
            return None;
        }

        let tokens = self.tokenizer.tokenize(text);
        self.find_all(&tokens, usecase)
            .into_iter()
            .find(|result| result.span.intersects(&span))
            .map(|result| result.classification)
    }

    /// Report every duration mention in `tokens`, left to right.
    ///
    /// Matches never overlap: after a match, scanning resumes past its last
    /// consumed token. Empty when disabled or when nothing matches; never a
    /// partial result.
    pub fn find_all(&self, tokens: &[Token], _usecase: AnnotationUsecase) -> Vec<AnnotatedSpan> {
        if !self.enabled {
            return Vec::new();
        }

        let mut results = Vec::new();
        let mut index = 0;
        while index < tokens.len() {
            match find_duration_starting_at(&self.lexicon, tokens, index) {
                Some(found) => {
                    results.push(found.annotation);
                    index = found.resume.max(index + 1);
                }
                None => index += 1,
            }
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WhitespaceTokenizer;
    use crate::DURATION_COLLECTION;

    fn english_annotator() -> DurationAnnotator<WhitespaceTokenizer> {
        DurationAnnotator::new(&DurationOptions::english(), WhitespaceTokenizer)
    }

    fn tokenize(text: &str) -> Vec<Token> {
        WhitespaceTokenizer.tokenize(text)
    }

    #[test]
    fn classifies_simple_duration() {
        let classification = english_annotator()
            .classify_text(
                "Wake me up in 15 minutes ok?",
                CodepointSpan::new(14, 24),
                AnnotationUsecase::Raw,
            )
            .unwrap();

        assert_eq!(classification.collection, DURATION_COLLECTION);
        assert_eq!(classification.duration_ms, 15 * 60 * 1000);
    }

    #[test]
    fn classifies_when_selection_does_not_align_with_tokens() {
        // Mid-token boundaries on both sides; overlap with the phrase is all
        // that is required.
        let classification = english_annotator()
            .classify_text(
                "Wake me up in 15 minutes ok?",
                CodepointSpan::new(15, 20),
                AnnotationUsecase::Raw,
            )
            .unwrap();

        assert_eq!(classification.duration_ms, 15 * 60 * 1000);
    }

    #[test]
    fn does_not_classify_a_span_outside_any_duration() {
        let classification = english_annotator().classify_text(
            "Wake me up in 15 minutes ok?",
            CodepointSpan::new(0, 10),
            AnnotationUsecase::Raw,
        );

        assert!(classification.is_none());
    }

    #[test]
    fn finds_simple_duration() {
        let result =
            english_annotator().find_all(&tokenize("Wake me up in 15 minutes ok?"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(14, 24));
        assert_eq!(result[0].classification.collection, DURATION_COLLECTION);
        assert_eq!(result[0].classification.duration_ms, 15 * 60 * 1000);
    }

    #[test]
    fn finds_duration_with_half_expression() {
        let result = english_annotator()
            .find_all(&tokenize("Set a timer for 3 and half minutes ok?"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(16, 34));
        assert_eq!(result[0].classification.duration_ms, 210_000);
    }

    #[test]
    fn finds_composed_duration() {
        let result = english_annotator()
            .find_all(&tokenize("Wake me up in 3 hours and 5 seconds ok?"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(14, 35));
        assert_eq!(result[0].classification.duration_ms, 3 * 60 * 60 * 1000 + 5 * 1000);
    }

    #[test]
    fn finds_half_an_hour() {
        let result = english_annotator()
            .find_all(&tokenize("Set a timer for half an hour"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(16, 28));
        assert_eq!(result[0].classification.duration_ms, 30 * 60 * 1000);
    }

    #[test]
    fn finds_half_after_explicit_quantity_and_unit() {
        let result = english_annotator()
            .find_all(&tokenize("Set a timer for 1 hour and a half"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(16, 33));
        assert_eq!(result[0].classification.duration_ms, 90 * 60 * 1000);
    }

    #[test]
    fn finds_an_hour_and_a_half() {
        // The leading "an" is vocabulary filler here, so the span starts at
        // the unit word while the quantity still defaults to 1.
        let result = english_annotator()
            .find_all(&tokenize("Set a timer for an hour and a half"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(19, 34));
        assert_eq!(result[0].classification.duration_ms, 90 * 60 * 1000);
    }

    #[test]
    fn finds_second_unit_without_its_own_number() {
        let result = english_annotator()
            .find_all(&tokenize("Set a timer for 10 minutes and a second ok?"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(16, 39));
        assert_eq!(result[0].classification.duration_ms, 10 * 60 * 1000 + 1000);
    }

    #[test]
    fn does_not_greedily_take_filler_words() {
        let result = english_annotator().find_all(
            &tokenize("Set a timer for a a a 10 minutes and 2 seconds an and an ok?"),
            AnnotationUsecase::Raw,
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(22, 46));
        assert_eq!(result[0].classification.duration_ms, 10 * 60 * 1000 + 2 * 1000);
    }

    #[test]
    fn lone_half_matches_nothing() {
        let result =
            english_annotator().find_all(&tokenize("Set a timer for half ok?"), AnnotationUsecase::Raw);
        assert!(result.is_empty());
    }

    #[test]
    fn half_prefix_and_half_suffix_each_contribute_once() {
        // "half an hour and a half" = 0.5h + 0.5h.
        let result = english_annotator()
            .find_all(&tokenize("Set a timer for half an hour and a half"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(16, 39));
        assert_eq!(result[0].classification.duration_ms, 60 * 60 * 1000);
    }

    #[test]
    fn accepts_decimal_quantities() {
        let result = english_annotator().find_all(&tokenize("2.5 hours"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].classification.duration_ms, 9_000_000);
    }

    #[test]
    fn converts_week_and_day_units_exactly() {
        let result =
            english_annotator().find_all(&tokenize("2 weeks and 3 days"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(0, 18));
        assert_eq!(
            result[0].classification.duration_ms,
            2 * 604_800_000 + 3 * 86_400_000i64
        );
    }

    #[test]
    fn finds_multiple_durations_in_order() {
        let result = english_annotator()
            .find_all(&tokenize("sleep 2 hours then nap 10 minutes ok?"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].span, CodepointSpan::new(6, 13));
        assert_eq!(result[0].classification.duration_ms, 2 * 60 * 60 * 1000);
        assert_eq!(result[1].span, CodepointSpan::new(23, 33));
        assert_eq!(result[1].classification.duration_ms, 10 * 60 * 1000);
        assert!(result[0].span.end <= result[1].span.start);
    }

    #[test]
    fn malformed_numeral_is_not_a_quantity() {
        // "1e9" fails the digit-literal gate, so the unit stands alone with
        // its default quantity.
        let result =
            english_annotator().find_all(&tokenize("wait 1e9 minutes ok?"), AnnotationUsecase::Raw);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span, CodepointSpan::new(9, 16));
        assert_eq!(result[0].classification.duration_ms, 60_000);
    }

    #[test]
    fn case_sensitive_vocabulary_rejects_other_casings() {
        let mut options = DurationOptions::english();
        options.case_sensitive = true;
        let annotator = DurationAnnotator::new(&options, WhitespaceTokenizer);

        assert!(annotator.find_all(&tokenize("15 MINUTES"), AnnotationUsecase::Raw).is_empty());
        assert_eq!(
            annotator.find_all(&tokenize("15 minutes"), AnnotationUsecase::Raw).len(),
            1
        );
    }

    #[test]
    fn disabled_configuration_short_circuits() {
        let mut options = DurationOptions::english();
        options.enabled = false;
        let annotator = DurationAnnotator::new(&options, WhitespaceTokenizer);

        assert!(annotator
            .classify_text("in 15 minutes", CodepointSpan::new(3, 13), AnnotationUsecase::Raw)
            .is_none());
        assert!(annotator.find_all(&tokenize("in 15 minutes"), AnnotationUsecase::Raw).is_empty());
    }

    #[test]
    fn empty_token_sequence_yields_nothing() {
        assert!(english_annotator().find_all(&[], AnnotationUsecase::Raw).is_empty());
    }
}
