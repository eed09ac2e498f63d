//! # Feature extraction for the sequence tagger
//!
//! Each token becomes a sparse vector of binary features capturing
//! orthography (shape, affixes, digits), social-media markers (leading
//! `#`/`$`/`@`, URL shape, emoji) and immediate context. The tagger's
//! emission weights are keyed on these feature names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::doc::Token;

/// Sparse feature map for one token. Most features are binary, but `f64`
/// values keep the dot-product machinery open to weighted features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    pub features: HashMap<String, f64>,
    pub token_index: usize,
}

impl FeatureVector {
    pub fn new(token_index: usize) -> Self {
        Self {
            features: HashMap::new(),
            token_index,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.features.insert(key.into(), value);
    }
}

/// Generates feature vectors for the whole token sequence, index-aligned
/// with the input.
pub fn extract_features(tokens: &[Token]) -> Vec<FeatureVector> {
    (0..tokens.len())
        .map(|i| extract_for_token(tokens, i))
        .collect()
}

fn extract_for_token(tokens: &[Token], i: usize) -> FeatureVector {
    let mut fv = FeatureVector::new(i);
    let word = &tokens[i].text;
    let lower = word.to_lowercase();

    fv.insert(format!("word={lower}"), 1.0);
    fv.insert("bias", 1.0);

    // Shape
    let first_upper = word.chars().next().is_some_and(|c| c.is_uppercase());
    let any_alpha = word.chars().any(|c| c.is_alphabetic());
    if first_upper {
        fv.insert("is_title", 1.0);
    }
    if any_alpha && word.chars().all(|c| c.is_uppercase() || !c.is_alphabetic()) {
        fv.insert("is_upper", 1.0);
    }
    if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
        fv.insert("is_digit", 1.0);
    }
    if word.chars().any(|c| c.is_ascii_digit()) {
        fv.insert("has_digit", 1.0);
    }
    if word.contains('-') {
        fv.insert("has_hyphen", 1.0);
    }

    // Affixes
    let chars: Vec<char> = lower.chars().collect();
    for n in 1..=3 {
        if chars.len() > n {
            let suffix: String = chars[chars.len() - n..].iter().collect();
            fv.insert(format!("suffix{n}={suffix}"), 1.0);
        }
    }
    if chars.len() > 2 {
        let prefix: String = chars[..2].iter().collect();
        fv.insert(format!("prefix2={prefix}"), 1.0);
    }

    // Social-media markers. A `$` only marks a cashtag when a letter
    // follows; "$3" is an amount, not a ticker.
    match word.chars().next() {
        Some('#') if word.len() > 1 => fv.insert("starts_hash", 1.0),
        Some('$') if word.chars().nth(1).is_some_and(|c| c.is_alphabetic()) => {
            fv.insert("starts_dollar", 1.0)
        }
        Some('@') if word.len() > 1 => fv.insert("starts_at", 1.0),
        _ => {}
    }
    if looks_like_url(word) {
        fv.insert("looks_url", 1.0);
    }
    if !any_alpha && word.chars().any(is_emoji_char) {
        fv.insert("is_emoji", 1.0);
    }

    // Punctuation classes
    if !word.is_empty() && word.chars().all(|c| ".!?…".contains(c)) {
        fv.insert("punct_sentence", 1.0);
    }
    if word == "," {
        fv.insert("punct_comma", 1.0);
    }
    if word == ":" || word == ";" {
        fv.insert("punct_colon", 1.0);
    }
    if !word.is_empty() && !word.chars().any(|c| c.is_alphanumeric()) {
        fv.insert("is_symbol", 1.0);
    }

    // Context window
    if i > 0 {
        fv.insert(format!("prev_word={}", tokens[i - 1].text.to_lowercase()), 1.0);
    } else {
        fv.insert("BOS", 1.0);
    }
    if i + 1 < tokens.len() {
        fv.insert(format!("next_word={}", tokens[i + 1].text.to_lowercase()), 1.0);
    } else {
        fv.insert("EOS", 1.0);
    }

    fv
}

fn looks_like_url(word: &str) -> bool {
    word.contains("://")
        || word.starts_with("www.")
        || [".com", ".net", ".org", ".io", ".co", ".ly"]
            .iter()
            .any(|tld| {
                word.ends_with(tld) || word.contains(&format!("{tld}/"))
            })
}

fn is_emoji_char(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1FAFF}'
            | '\u{2600}'..='\u{27BF}'
            | '\u{2764}'
            | '\u{FE0F}'
            | '\u{200D}'
            | '\u{1F1E6}'..='\u{1F1FF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(words: &[&str]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        for w in words {
            tokens.push(Token::span(w, pos, pos + w.len()));
            pos += w.len() + 1;
        }
        tokens
    }

    #[test]
    fn test_shape_features() {
        let tokens = spans(&["Alice", "HODL", "42"]);
        let fvs = extract_features(&tokens);
        assert!(fvs[0].features.contains_key("is_title"));
        assert!(fvs[1].features.contains_key("is_upper"));
        assert!(fvs[2].features.contains_key("is_digit"));
    }

    #[test]
    fn test_marker_features() {
        let tokens = spans(&["#rust", "$BTC", "@bob", "https://t.co/x", "🔥"]);
        let fvs = extract_features(&tokens);
        assert!(fvs[0].features.contains_key("starts_hash"));
        assert!(fvs[1].features.contains_key("starts_dollar"));
        assert!(fvs[2].features.contains_key("starts_at"));
        assert!(fvs[3].features.contains_key("looks_url"));
        assert!(fvs[4].features.contains_key("is_emoji"));
    }

    #[test]
    fn test_context_features() {
        let tokens = spans(&["the", "cat", "sat"]);
        let fvs = extract_features(&tokens);
        assert!(fvs[0].features.contains_key("BOS"));
        assert!(fvs[1].features.contains_key("prev_word=the"));
        assert!(fvs[1].features.contains_key("next_word=sat"));
        assert!(fvs[2].features.contains_key("EOS"));
    }

    #[test]
    fn test_suffix_features() {
        let tokens = spans(&["running"]);
        let fvs = extract_features(&tokens);
        assert!(fvs[0].features.contains_key("suffix3=ing"));
        assert!(fvs[0].features.contains_key("prefix2=ru"));
    }
}
