//! # Gazetteer entity tagger
//!
//! Single left-to-right scan over the token sequence. At each position the
//! longest contiguous run of tokens whose joined, case-folded text matches
//! a gazetteer key is labeled with that key's entity type, and the scan
//! jumps past it — spans never overlap and never nest. Tokens with no
//! match keep `entity_type = None`.

use std::collections::HashMap;

use crate::doc::Token;

/// Flat gazetteer: normalized multi-token key → entity-type label.
#[derive(Debug, Clone)]
pub struct EntityTagger {
    gazetteer: HashMap<String, String>,
    /// Longest key length in tokens; bounds the match window.
    max_key_tokens: usize,
}

impl EntityTagger {
    /// Keys are case-folded at construction; multi-token keys use a single
    /// space between words.
    pub fn new(gazetteer: HashMap<String, String>) -> Self {
        let normalized: HashMap<String, String> = gazetteer
            .into_iter()
            .map(|(key, label)| {
                let key = key
                    .split_whitespace()
                    .map(|w| w.to_lowercase())
                    .collect::<Vec<_>>()
                    .join(" ");
                (key, label)
            })
            .collect();
        let max_key_tokens = normalized
            .keys()
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(0);
        Self {
            gazetteer: normalized,
            max_key_tokens,
        }
    }

    /// Populates `entity_type` over maximal matching spans.
    pub fn tag(&self, tokens: &mut [Token]) {
        if self.gazetteer.is_empty() {
            return;
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

        let mut i = 0;
        while i < tokens.len() {
            let mut matched = 0;
            let window = self.max_key_tokens.min(tokens.len() - i);
            for len in (1..=window).rev() {
                let key = lowered[i..i + len].join(" ");
                if let Some(label) = self.gazetteer.get(&key) {
                    for token in &mut tokens[i..i + len] {
                        token.entity_type = Some(label.clone());
                    }
                    matched = len;
                    break;
                }
            }
            i += matched.max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        let mut out = Vec::new();
        let mut pos = 0;
        for w in words {
            out.push(Token::span(w, pos, pos + w.len()));
            pos += w.len() + 1;
        }
        out
    }

    fn gazetteer(entries: &[(&str, &str)]) -> EntityTagger {
        EntityTagger::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_longest_match_wins() {
        let tagger = gazetteer(&[("new", "MISC"), ("new york", "LOC")]);
        let mut toks = tokens(&["New", "York", "pizza"]);
        tagger.tag(&mut toks);

        assert_eq!(toks[0].entity_type.as_deref(), Some("LOC"));
        assert_eq!(toks[1].entity_type.as_deref(), Some("LOC"));
        assert_eq!(toks[2].entity_type, None);
    }

    #[test]
    fn test_single_token_match_and_case_folding() {
        let tagger = gazetteer(&[("bitcoin", "MISC")]);
        let mut toks = tokens(&["BITCOIN", "rules"]);
        tagger.tag(&mut toks);

        assert_eq!(toks[0].entity_type.as_deref(), Some("MISC"));
        assert_eq!(toks[1].entity_type, None);
    }

    #[test]
    fn test_spans_do_not_overlap() {
        // After "new york" matches, the scan resumes past it, so "york
        // city" can not start a second span inside the first.
        let tagger = gazetteer(&[("new york", "LOC"), ("york city", "ORG")]);
        let mut toks = tokens(&["new", "york", "city"]);
        tagger.tag(&mut toks);

        assert_eq!(toks[0].entity_type.as_deref(), Some("LOC"));
        assert_eq!(toks[1].entity_type.as_deref(), Some("LOC"));
        assert_eq!(toks[2].entity_type, None);
    }

    #[test]
    fn test_empty_gazetteer_leaves_everything_unset() {
        let tagger = gazetteer(&[]);
        let mut toks = tokens(&["hello", "world"]);
        tagger.tag(&mut toks);
        assert!(toks.iter().all(|t| t.entity_type.is_none()));
    }
}
