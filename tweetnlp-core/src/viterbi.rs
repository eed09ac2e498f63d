//! # Viterbi decoding
//!
//! Dynamic-programming search for the jointly most likely tag sequence
//! under the linear-chain scoring model. Exhaustive search over T tags and
//! N tokens would cost `O(T^N)`; Viterbi exploits that the best path ending
//! in tag `t` at token `i` only depends on the best paths at token `i-1`,
//! bringing it to `O(N × T²)`.
//!
//! ```text
//! Initialization: score[0][t] = initial(t) + emission(t, x_0)
//! Recursion:      score[i][t] = max_p [score[i-1][p] + transition(p, t)] + emission(t, x_i)
//! Backtracking:   reconstruct the optimal path from the last token backwards
//! ```

use crate::features::FeatureVector;
use crate::tagger::TagModel;

/// Decodes the best tag sequence for the whole feature sequence, returning
/// one tag index (into the model's tagset) per token. Empty input yields an
/// empty path.
pub fn decode(model: &TagModel, feature_vectors: &[FeatureVector]) -> Vec<usize> {
    if feature_vectors.is_empty() {
        return vec![];
    }

    let n_tokens = feature_vectors.len();
    let n_tags = model.tags.len();

    // Pre-computed emission scores: emission[i][t]
    let emission: Vec<Vec<f64>> = feature_vectors
        .iter()
        .map(|fv| {
            (0..n_tags)
                .map(|t| model.emission_score(fv, &model.tags[t]))
                .collect()
        })
        .collect();

    let mut scores: Vec<f64> = (0..n_tags)
        .map(|t| model.initial_score(t) + emission[0][t])
        .collect();
    let mut backptr: Vec<Vec<usize>> = vec![vec![0usize; n_tags]; n_tokens];

    for i in 1..n_tokens {
        let mut next = vec![f64::NEG_INFINITY; n_tags];
        for t in 0..n_tags {
            let mut best_score = f64::NEG_INFINITY;
            let mut best_prev = 0usize;
            for p in 0..n_tags {
                let score = scores[p] + model.transition_score(p, t);
                if score > best_score {
                    best_score = score;
                    best_prev = p;
                }
            }
            next[t] = best_score + emission[i][t];
            backptr[i][t] = best_prev;
        }
        scores = next;
    }

    let (mut last, _) = best_in_slice(&scores);
    let mut path = vec![0usize; n_tokens];
    path[n_tokens - 1] = last;
    for i in (0..n_tokens - 1).rev() {
        last = backptr[i + 1][last];
        path[i] = last;
    }
    path
}

/// Returns (index, value) of the maximum in a slice.
fn best_in_slice(scores: &[f64]) -> (usize, f64) {
    scores
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, &v)| (i, v))
        .unwrap_or((0, f64::NEG_INFINITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Token;
    use crate::features::extract_features;

    fn model() -> TagModel {
        let mut m = TagModel::new(&["DT", "NN", "VBZ"]);
        m.set_emission("word=the", "DT", 5.0);
        m.set_emission("word=runs", "VBZ", 2.0);
        m.set_emission("bias", "NN", 0.5);
        m.set_transition("DT", "NN", 3.0);
        m.set_transition("NN", "VBZ", 2.0);
        m
    }

    fn tokens(words: &[&str]) -> Vec<Token> {
        let mut out = Vec::new();
        let mut pos = 0;
        for w in words {
            out.push(Token::span(w, pos, pos + w.len()));
            pos += w.len() + 1;
        }
        out
    }

    #[test]
    fn test_empty_sequence() {
        assert!(decode(&model(), &[]).is_empty());
    }

    #[test]
    fn test_transitions_inform_the_path() {
        let m = model();
        let toks = tokens(&["the", "dog", "runs"]);
        let path = decode(&m, &extract_features(&toks));
        let tags: Vec<&str> = path.iter().map(|&t| m.tags[t].as_str()).collect();
        assert_eq!(tags, vec!["DT", "NN", "VBZ"]);
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let m = model();
        let toks = tokens(&["the", "thing"]);
        let fvs = extract_features(&toks);
        assert_eq!(decode(&m, &fvs), decode(&m, &fvs));
    }
}
