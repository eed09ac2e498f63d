//! # Tokenizer for noisy social-media text
//!
//! Splits raw text into token spans in a single left-to-right pass. At each
//! scan position the ordered exception patterns are tried first (URLs,
//! hashtags, contractions, numbers with suffixes, ...); the first one that
//! matches wins and is emitted whole. Otherwise a maximal non-whitespace
//! chunk is consumed and punctuation, quotes and brackets are peeled from
//! its edges until a core token remains.
//!
//! Every step advances the scan position by at least one character, so
//! processing cost is strictly bounded by input length.
//!
//! ## Peeling policy
//!
//! When several punctuation patterns could peel an edge, a peel that leaves
//! a dictionary-known core wins (first such pattern in declared order);
//! with no dictionary hit the shortest peel wins. So "gone..." becomes
//! `gone` + `...` because "gone" is in the vocabulary, while an unknown
//! core keeps as much of itself as possible.

use unicode_segmentation::UnicodeSegmentation;

use crate::doc::Token;
use crate::patterns::PatternSet;
use crate::trie::Trie;

/// Splits text into annotated spans using the language's trie and the two
/// ordered pattern groups. Built once per language, read-only afterwards.
#[derive(Debug)]
pub struct Tokenizer {
    trie: Trie,
    exceptions: PatternSet,
    punctuation: PatternSet,
}

enum Edge {
    Prefix,
    Suffix,
}

impl Tokenizer {
    pub fn new(trie: Trie, exceptions: PatternSet, punctuation: PatternSet) -> Self {
        Self {
            trie,
            exceptions,
            punctuation,
        }
    }

    /// Tokenizes `text` into an ordered span sequence. Offsets are exact,
    /// non-overlapping and strictly increasing; whitespace between chunks
    /// sets `whitespace_after` on the preceding token and is otherwise
    /// discarded. Empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let ch = match text[pos..].chars().next() {
                Some(c) => c,
                None => break,
            };

            if ch.is_whitespace() {
                if let Some(last) = tokens.last_mut() {
                    last.whitespace_after = true;
                }
                pos += ch.len_utf8();
                continue;
            }

            if let Some(m) = self.exceptions.match_at(text, pos) {
                let end = snap_to_grapheme(text, pos, pos + m.len);
                tokens.push(Token::span(&text[pos..end], pos, end));
                pos = end;
                continue;
            }

            let chunk_end = text[pos..]
                .find(char::is_whitespace)
                .map(|i| pos + i)
                .unwrap_or(text.len());
            self.emit_chunk(text, pos, chunk_end, &mut tokens);
            pos = chunk_end;
        }

        tokens
    }

    /// Peels punctuation from both edges of `text[start..end]`, emitting a
    /// standalone token per peel, then emits the remaining core (if any)
    /// as a single token. Suffix peels are emitted in text order.
    fn emit_chunk(&self, text: &str, start: usize, end: usize, tokens: &mut Vec<Token>) {
        let mut s = start;
        let mut e = end;
        let mut suffix_peels: Vec<(usize, usize)> = Vec::new();

        loop {
            let mut progressed = false;

            if s < e {
                if let Some(len) = self.pick_peel(&text[s..e], Edge::Prefix) {
                    tokens.push(Token::span(&text[s..s + len], s, s + len));
                    s += len;
                    progressed = true;
                }
            }
            if s < e {
                if let Some(len) = self.pick_peel(&text[s..e], Edge::Suffix) {
                    suffix_peels.push((e - len, e));
                    e -= len;
                    progressed = true;
                }
            }
            if !progressed || s >= e {
                break;
            }
        }

        if s < e {
            tokens.push(Token::span(&text[s..e], s, e));
        }
        for (a, b) in suffix_peels.into_iter().rev() {
            tokens.push(Token::span(&text[a..b], a, b));
        }
    }

    /// Chooses a peel length for one edge of `chunk`, or None when no
    /// punctuation pattern applies there. The first pattern in declared
    /// order wins the edge; among the boundaries it can cover, the one
    /// leaving a trie-known core wins, otherwise the greedy run is kept
    /// whole so "!!!" stays one token.
    fn pick_peel(&self, chunk: &str, edge: Edge) -> Option<usize> {
        let suffix = matches!(edge, Edge::Suffix);
        let candidates = self.punctuation.edge_candidates(chunk, suffix)?;

        for &len in &candidates.lens {
            let core = if suffix {
                &chunk[..chunk.len() - len]
            } else {
                &chunk[len..]
            };
            if !core.is_empty()
                && (self.trie.contains(core) || self.trie.contains(&core.to_lowercase()))
            {
                return Some(len);
            }
        }

        candidates.lens.last().copied()
    }
}

/// Extends `end` to the next grapheme-cluster boundary so a pattern match
/// never splits a multi-scalar cluster (ZWJ emoji sequences, combining
/// marks). `start` must itself be a cluster boundary.
fn snap_to_grapheme(text: &str, start: usize, end: usize) -> usize {
    if end >= text.len() {
        return end;
    }
    for (offset, grapheme) in text[start..].grapheme_indices(true) {
        let g_start = start + offset;
        let g_end = g_start + grapheme.len();
        if g_start < end && end < g_end {
            return g_end;
        }
        if g_start >= end {
            break;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::en_twitter;
    use crate::patterns::PatternSet;

    fn tokenizer() -> Tokenizer {
        let bundle = en_twitter::bundle();
        Tokenizer::new(
            Trie::from_words(&bundle.vocabulary),
            PatternSet::compile(&bundle.exception_patterns).unwrap(),
            PatternSet::compile(&bundle.punctuation_patterns).unwrap(),
        )
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Rebuilds the surface form and compares against the original with
    /// whitespace runs collapsed.
    fn assert_coverage(text: &str, tokens: &[Token]) {
        let mut rebuilt = String::new();
        for t in tokens {
            rebuilt.push_str(&t.text);
            if t.whitespace_after {
                rebuilt.push(' ');
            }
        }
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rebuilt.trim_end(), normalized);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenizer().tokenize("").is_empty());
    }

    #[test]
    fn test_plain_words_and_whitespace_flags() {
        let tokens = tokenizer().tokenize("the cat sat");
        assert_eq!(texts(&tokens), vec!["the", "cat", "sat"]);
        assert!(tokens[0].whitespace_after);
        assert!(tokens[1].whitespace_after);
        assert!(!tokens[2].whitespace_after);
        assert_coverage("the cat sat", &tokens);
    }

    #[test]
    fn test_offsets_are_monotonic() {
        let text = "Hey @you, check https://t.co/x #now!";
        let tokens = tokenizer().tokenize(text);
        for pair in tokens.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        for t in &tokens {
            assert_eq!(&text[t.start..t.end], t.text);
        }
        assert_coverage(text, &tokens);
    }

    #[test]
    fn test_ordinal_is_one_token() {
        let tokens = tokenizer().tokenize("10th");
        assert_eq!(texts(&tokens), vec!["10th"]);
    }

    #[test]
    fn test_contraction_splits() {
        let tokens = tokenizer().tokenize("can't");
        assert_eq!(texts(&tokens), vec!["ca", "n't"]);
        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, "can't");
    }

    #[test]
    fn test_contraction_with_trailing_period() {
        let tokens = tokenizer().tokenize("don't.");
        assert_eq!(texts(&tokens), vec!["do", "n't", "."]);
    }

    #[test]
    fn test_auxiliary_contraction_variants() {
        let t = tokenizer();
        assert_eq!(texts(&t.tokenize("doesn't")), vec!["does", "n't"]);
        assert_eq!(texts(&t.tokenize("didnt")), vec!["did", "nt"]);
        assert_eq!(texts(&t.tokenize("cannot")), vec!["can", "not"]);
    }

    #[test]
    fn test_hashtag_and_cashtag() {
        let tokens = tokenizer().tokenize("buy $BTC #crypto");
        assert_eq!(texts(&tokens), vec!["buy", "$BTC", "#crypto"]);
    }

    #[test]
    fn test_mention() {
        let tokens = tokenizer().tokenize("thanks @alice!");
        assert_eq!(texts(&tokens), vec!["thanks", "@alice", "!"]);
    }

    #[test]
    fn test_url_keeps_trailing_punctuation_out() {
        let tokens = tokenizer().tokenize("see https://t.co/abc.");
        assert_eq!(texts(&tokens), vec!["see", "https://t.co/abc", "."]);
    }

    #[test]
    fn test_bare_domain_url() {
        let tokens = tokenizer().tokenize("on google.com now");
        assert_eq!(texts(&tokens), vec!["on", "google.com", "now"]);
    }

    #[test]
    fn test_suffix_peel_prefers_known_core() {
        // "gone" is in the vocabulary, so the whole "..." run peels off.
        let tokens = tokenizer().tokenize("gone...");
        assert_eq!(texts(&tokens), vec!["gone", "..."]);
    }

    #[test]
    fn test_pure_punctuation_chunk() {
        let tokens = tokenizer().tokenize("wow !!!");
        assert_eq!(texts(&tokens), vec!["wow", "!!!"]);
    }

    #[test]
    fn test_quotes_and_brackets() {
        let tokens = tokenizer().tokenize("\"Bert (AAA) done\"");
        assert_eq!(
            texts(&tokens),
            vec!["\"", "Bert", "(", "AAA", ")", "done", "\""]
        );
    }

    #[test]
    fn test_unicode_quotes_peel() {
        let tokens = tokenizer().tokenize("«hola»");
        assert_eq!(texts(&tokens), vec!["«", "hola", "»"]);
    }

    #[test]
    fn test_abbreviation_stays_whole() {
        let tokens = tokenizer().tokenize("the U.S.A. rocks");
        assert_eq!(texts(&tokens), vec!["the", "U.S.A.", "rocks"]);
    }

    #[test]
    fn test_wallet_address() {
        let tokens = tokenizer().tokenize("send to 0xDeadBeef99");
        assert_eq!(texts(&tokens), vec!["send", "to", "0xDeadBeef99"]);
    }

    #[test]
    fn test_emoji_run_is_single_token() {
        let tokens = tokenizer().tokenize("nice 🔥🔥");
        assert_eq!(texts(&tokens), vec!["nice", "🔥🔥"]);
    }

    #[test]
    fn test_arrow_symbol() {
        let tokens = tokenizer().tokenize("a --> b");
        assert_eq!(texts(&tokens), vec!["a", "-->", "b"]);
    }

    #[test]
    fn test_etc_dots() {
        let tokens = tokenizer().tokenize("cats, dogs, etc...");
        assert!(texts(&tokens).contains(&"etc"));
        assert!(texts(&tokens).contains(&"..."));
    }

    #[test]
    fn test_coverage_on_noisy_input() {
        let text = "RT @bob: $DOGE to the moon!!! 🚀 https://t.co/xyz #crypto (not financial advice)";
        let tokens = tokenizer().tokenize(text);
        assert_coverage(text, &tokens);
    }
}
