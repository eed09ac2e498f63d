//! # Sequence tagger
//!
//! Assigns one fine-grained tag per token by decoding the whole sequence
//! under a pretrained linear-chain scoring model, then forcing any
//! exact-text overrides from the tag gazetteer. Override replacement is
//! unconditional and happens last, regardless of what the decoder chose.
//!
//! The scoring artifact is opaque to the rest of the pipeline: the tagger
//! only needs `decode(tokens) → tags` to be deterministic for fixed
//! weights. The artifact is parsed and validated exactly once, at
//! construction; a missing or structurally invalid artifact aborts pipeline
//! construction with [`PipelineError::ModelLoad`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::doc::Token;
use crate::error::{PipelineError, Result};
use crate::features::{extract_features, FeatureVector};
use crate::viterbi;

/// The pretrained scoring model: a fine tagset, start/transition scores
/// over it, and sparse per-feature emission weights keyed
/// `"feature|TAG"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagModel {
    /// The fine tagset; tag index = position in this list.
    pub tags: Vec<String>,
    /// Start score per tag.
    pub initial: Vec<f64>,
    /// Transition score matrix, indexed `[prev][next]`.
    pub transitions: Vec<Vec<f64>>,
    /// Emission weights: `"feature|TAG"` → weight.
    pub emissions: HashMap<String, f64>,
}

impl TagModel {
    /// An all-zero model over the given tagset, to be filled in with
    /// `set_*` calls.
    pub fn new<S: AsRef<str>>(tags: &[S]) -> Self {
        let n = tags.len();
        Self {
            tags: tags.iter().map(|t| t.as_ref().to_string()).collect(),
            initial: vec![0.0; n],
            transitions: vec![vec![0.0; n]; n],
            emissions: HashMap::new(),
        }
    }

    /// Parses a serialized artifact and validates its structure. Any
    /// failure here is fatal for pipeline construction.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(PipelineError::ModelLoad("empty artifact".to_string()));
        }
        let model: TagModel = serde_json::from_slice(bytes)
            .map_err(|e| PipelineError::ModelLoad(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    /// Structural validation: non-empty unique tagset, score tables shaped
    /// to it, emission keys referencing known tags.
    pub fn validate(&self) -> Result<()> {
        if self.tags.is_empty() {
            return Err(PipelineError::ModelLoad("tagset is empty".to_string()));
        }
        let unique: HashSet<&str> = self.tags.iter().map(|t| t.as_str()).collect();
        if unique.len() != self.tags.len() {
            return Err(PipelineError::ModelLoad("tagset has duplicates".to_string()));
        }
        let n = self.tags.len();
        if self.initial.len() != n {
            return Err(PipelineError::ModelLoad(format!(
                "initial scores have length {}, expected {n}",
                self.initial.len()
            )));
        }
        if self.transitions.len() != n || self.transitions.iter().any(|row| row.len() != n) {
            return Err(PipelineError::ModelLoad(format!(
                "transition matrix is not {n}x{n}"
            )));
        }
        for key in self.emissions.keys() {
            let tag_ok = key
                .rsplit_once('|')
                .is_some_and(|(_, tag)| unique.contains(tag));
            if !tag_ok {
                return Err(PipelineError::ModelLoad(format!(
                    "emission key '{key}' does not name a known tag"
                )));
            }
        }
        Ok(())
    }

    pub fn tag_index(&self, tag: &str) -> Option<usize> {
        self.tags.iter().position(|t| t == tag)
    }

    /// Emission score: sum of weights of the active features for this tag.
    pub fn emission_score(&self, features: &FeatureVector, tag: &str) -> f64 {
        features
            .features
            .iter()
            .map(|(name, value)| {
                let key = format!("{name}|{tag}");
                value * self.emissions.get(&key).unwrap_or(&0.0)
            })
            .sum()
    }

    pub fn transition_score(&self, prev: usize, next: usize) -> f64 {
        self.transitions[prev][next]
    }

    pub fn initial_score(&self, tag: usize) -> f64 {
        self.initial[tag]
    }

    pub fn set_emission(&mut self, feature: &str, tag: &str, weight: f64) {
        self.emissions.insert(format!("{feature}|{tag}"), weight);
    }

    pub fn set_transition(&mut self, prev: &str, next: &str, weight: f64) {
        if let (Some(p), Some(n)) = (self.tag_index(prev), self.tag_index(next)) {
            self.transitions[p][n] = weight;
        }
    }

    pub fn set_initial(&mut self, tag: &str, weight: f64) {
        if let Some(t) = self.tag_index(tag) {
            self.initial[t] = weight;
        }
    }
}

/// Whole-sequence tagger: Viterbi decode, then exact-text overrides.
#[derive(Debug)]
pub struct SequenceTagger {
    model: TagModel,
    overrides: HashMap<String, String>,
}

impl SequenceTagger {
    /// Wraps an already-parsed model. The model is re-validated and every
    /// override target is checked against its tagset; both checks are
    /// construction-time failures.
    pub fn new(model: TagModel, overrides: HashMap<String, String>) -> Result<Self> {
        model.validate()?;
        for (text, tag) in &overrides {
            if model.tag_index(tag).is_none() {
                return Err(PipelineError::UnknownOverrideTag {
                    text: text.clone(),
                    tag: tag.clone(),
                });
            }
        }
        Ok(Self { model, overrides })
    }

    /// Loads the model from serialized artifact bytes.
    pub fn from_artifact(bytes: &[u8], overrides: HashMap<String, String>) -> Result<Self> {
        Self::new(TagModel::from_bytes(bytes)?, overrides)
    }

    /// The fine tagset the decoder ranges over.
    pub fn tagset(&self) -> &[String] {
        &self.model.tags
    }

    /// Tags the whole sequence. Returns one tag per token, in order; an
    /// empty sequence yields an empty result, never an error.
    pub fn tag(&self, tokens: &[Token]) -> Vec<String> {
        if tokens.is_empty() {
            return vec![];
        }
        let feature_vectors = extract_features(tokens);
        let path = viterbi::decode(&self.model, &feature_vectors);
        let mut tags: Vec<String> = path.iter().map(|&t| self.model.tags[t].clone()).collect();

        // Exact-text overrides win unconditionally, after decoding.
        for (i, token) in tokens.iter().enumerate() {
            if let Some(tag) = self.overrides.get(&token.text) {
                tags[i] = tag.clone();
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::Token;

    fn tokens(words: &[&str]) -> Vec<Token> {
        let mut out = Vec::new();
        let mut pos = 0;
        for w in words {
            out.push(Token::span(w, pos, pos + w.len()));
            pos += w.len() + 1;
        }
        out
    }

    fn small_model() -> TagModel {
        let mut m = TagModel::new(&["NN", "UH"]);
        m.set_emission("bias", "NN", 1.0);
        m
    }

    #[test]
    fn test_empty_sequence_yields_empty_tags() {
        let tagger = SequenceTagger::new(small_model(), HashMap::new()).unwrap();
        assert!(tagger.tag(&[]).is_empty());
    }

    #[test]
    fn test_override_replaces_decoded_tag() {
        let mut overrides = HashMap::new();
        overrides.insert("lol".to_string(), "UH".to_string());
        let tagger = SequenceTagger::new(small_model(), overrides).unwrap();

        let tags = tagger.tag(&tokens(&["lol", "cat"]));
        assert_eq!(tags, vec!["UH", "NN"]);
    }

    #[test]
    fn test_override_with_unknown_tag_fails_construction() {
        let mut overrides = HashMap::new();
        overrides.insert("lol".to_string(), "NOPE".to_string());
        let err = SequenceTagger::new(small_model(), overrides).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownOverrideTag { .. }));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            TagModel::from_bytes(b"not json"),
            Err(PipelineError::ModelLoad(_))
        ));
        assert!(matches!(
            TagModel::from_bytes(b""),
            Err(PipelineError::ModelLoad(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_bad_shape() {
        let mut model = small_model();
        model.transitions.pop();
        let bytes = serde_json::to_vec(&model).unwrap();
        assert!(matches!(
            TagModel::from_bytes(&bytes),
            Err(PipelineError::ModelLoad(_))
        ));
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let model = small_model();
        let bytes = serde_json::to_vec(&model).unwrap();
        let loaded = TagModel::from_bytes(&bytes).unwrap();
        assert_eq!(loaded.tags, model.tags);
    }

    #[test]
    fn test_validate_rejects_bad_emission_key() {
        let mut model = small_model();
        model.emissions.insert("bias|NOPE".to_string(), 1.0);
        assert!(model.validate().is_err());
    }
}
