//! Tokenization seam.
//!
//! Splitting text into tokens is the host platform's job; the extractor only
//! trusts token spans to be non-overlapping and increasing. The trait keeps
//! that seam explicit, and [`WhitespaceTokenizer`] covers the common case of
//! whitespace-separated text (and this crate's tests).

use crate::Token;

/// Produces the token sequence the extractor scans over.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Splits on Unicode whitespace, reporting codepoint-offset spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut value = String::new();
        let mut start = 0;

        // Offsets are codepoint counts, not byte indices, so spans stay
        // stable for non-ASCII text.
        for (offset, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                if !value.is_empty() {
                    tokens.push(Token::new(std::mem::take(&mut value), start, offset));
                }
            } else {
                if value.is_empty() {
                    start = offset;
                }
                value.push(ch);
            }
        }
        if !value.is_empty() {
            let end = text.chars().count();
            tokens.push(Token::new(value, start, end));
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_with_codepoint_spans() {
        let tokens = WhitespaceTokenizer.tokenize("wake me  up");

        assert_eq!(
            tokens,
            vec![Token::new("wake", 0, 4), Token::new("me", 5, 7), Token::new("up", 9, 11)]
        );
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(WhitespaceTokenizer.tokenize("").is_empty());
        assert!(WhitespaceTokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn offsets_count_codepoints_not_bytes() {
        // "čau" is 4 bytes but 3 codepoints.
        let tokens = WhitespaceTokenizer.tokenize("čau 5 minút");

        assert_eq!(tokens[0], Token::new("čau", 0, 3));
        assert_eq!(tokens[1], Token::new("5", 4, 5));
        assert_eq!(tokens[2], Token::new("minút", 6, 11));
    }
}
