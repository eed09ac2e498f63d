//! # Token and Document
//!
//! The annotated output of the pipeline. A [`Token`] carries exact offsets
//! into the original text plus the annotations layered on by each stage
//! (fine tag, universal POS, lemma, entity label, sentence flag). A
//! [`Document`] owns the original text and the ordered token sequence.
//!
//! ## Invariants
//!
//! - Offsets are half-open byte ranges, non-overlapping, strictly increasing.
//! - Re-concatenating token texts, with a single space wherever
//!   `whitespace_after` is set, reconstructs the original text with internal
//!   whitespace runs normalized — no characters dropped or duplicated.

use serde::{Deserialize, Serialize};

use crate::tagset::Pos;

/// A token extracted from the original text, with its annotations.
///
/// `start` and `end` preserve the exact byte position in the source text so
/// that callers can highlight or re-slice the original string without any
/// realignment step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// The exact substring covered by this token.
    pub text: String,
    /// Byte offset of the first character (inclusive).
    pub start: usize,
    /// Byte offset one past the last character (exclusive).
    pub end: usize,
    /// Whether whitespace followed this token in the source text.
    pub whitespace_after: bool,
    /// Fine-grained tag from the fixed tagset (ex: "NN", "VBZ", "HT").
    pub tag: String,
    /// Universal part-of-speech category derived from `tag`.
    pub pos: Pos,
    /// Canonical base form of the token text given its POS.
    pub lemma: String,
    /// Entity label assigned by the gazetteer scan, if any.
    pub entity_type: Option<String>,
    /// Whether this token opens a sentence.
    pub is_sentence_start: bool,
}

impl Token {
    /// A bare span with every annotation still at its default. The
    /// tokenizer produces these; later stages fill the rest in.
    pub fn span(text: &str, start: usize, end: usize) -> Self {
        Self {
            text: text.to_string(),
            start,
            end,
            whitespace_after: false,
            tag: String::new(),
            pos: Pos::X,
            lemma: String::new(),
            entity_type: None,
            is_sentence_start: false,
        }
    }
}

/// The fully annotated document: original text plus its token sequence.
///
/// Immutable once returned to the caller; tokens are only appended during
/// construction inside the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    text: String,
    tokens: Vec<Token>,
}

impl Document {
    pub(crate) fn new(text: &str, tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.windows(2).all(|w| w[0].end <= w[1].start));
        Self {
            text: text.to_string(),
            tokens,
        }
    }

    /// The original input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ordered token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Rebuilds the surface string from the token sequence: token texts
    /// joined by a single space wherever `whitespace_after` is set.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for token in &self.tokens {
            out.push_str(&token.text);
            if token.whitespace_after {
                out.push(' ');
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_defaults() {
        let token = Token::span("hello", 0, 5);
        assert_eq!(token.text, "hello");
        assert_eq!(token.pos, Pos::X);
        assert!(token.lemma.is_empty());
        assert!(token.entity_type.is_none());
        assert!(!token.whitespace_after);
    }

    #[test]
    fn test_reconstruct_with_whitespace_flags() {
        let mut a = Token::span("hi", 0, 2);
        a.whitespace_after = true;
        let b = Token::span("there", 3, 8);
        let doc = Document::new("hi there", vec![a, b]);
        assert_eq!(doc.reconstruct(), "hi there");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new("", vec![]);
        assert!(doc.is_empty());
        assert_eq!(doc.reconstruct(), "");
    }
}
