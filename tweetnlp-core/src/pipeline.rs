//! # Pipeline
//!
//! [`Language`] is the explicit, immutable context value owning every
//! shared resource: the trie, the compiled pattern groups, the scoring
//! model, the correction rules and all lookup tables. It is built once from
//! a [`ResourceBundle`], validated fatally at that point, and afterwards
//! only ever read — which makes it safe to share across any number of
//! concurrent document invocations without locking.
//!
//! Control flow per document:
//!
//! ```text
//! text → Tokenizer → SequenceTagger → TagCorrector
//!      → POS map + Lemmatizer (per token) → EntityTagger → Document
//! ```
//!
//! Processing a document never fails: every lookup miss degrades to a
//! defined fallback (identity lemma, unset entity, decoded tag).

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corrector::TagCorrector;
use crate::doc::Document;
use crate::en_twitter;
use crate::error::Result;
use crate::lemmatizer::{LemmaTables, Lemmatizer};
use crate::ner::EntityTagger;
use crate::patterns::{PatternSet, PatternSpec};
use crate::tagger::{SequenceTagger, TagModel};
use crate::tagset::{Pos, TagMap};
use crate::tokenizer::Tokenizer;
use crate::trie::Trie;

/// Everything a language configuration ships: loaded once by an external
/// collaborator, consumed by [`Language::from_bundle`]. The whole bundle is
/// serializable, so a deployment can keep it as versioned configuration
/// data next to the model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceBundle {
    /// Word list backing the tokenizer's trie.
    pub vocabulary: Vec<String>,
    /// Ordered exception patterns (multi-character/irregular tokens).
    pub exception_patterns: Vec<PatternSpec>,
    /// Ordered punctuation patterns (edge peeling).
    pub punctuation_patterns: Vec<PatternSpec>,
    /// The pretrained sequence scoring model.
    pub model: TagModel,
    /// Exact-text tag overrides applied after decoding.
    pub tag_overrides: HashMap<String, String>,
    /// Fine → universal tag map; must be total over the model's tagset.
    pub tag_map: HashMap<String, Pos>,
    /// Lemmatizer tables.
    pub lemmas: LemmaTables,
    /// Entity gazetteer: normalized multi-token key → entity type.
    pub gazetteer: HashMap<String, String>,
}

/// A fully constructed annotation pipeline for one language variant.
#[derive(Debug)]
pub struct Language {
    tokenizer: Tokenizer,
    tagger: SequenceTagger,
    corrector: TagCorrector,
    tag_map: TagMap,
    lemmatizer: Lemmatizer,
    ner: EntityTagger,
}

impl Language {
    /// Validates and assembles a pipeline from its resources. Every
    /// structural problem — an uncompilable pattern, a corrupt model
    /// artifact, a fine tag without a universal mapping, an override
    /// naming an unknown tag — fails here, before any document can be
    /// processed.
    pub fn from_bundle(bundle: ResourceBundle) -> Result<Self> {
        let trie = Trie::from_words(&bundle.vocabulary);
        let exceptions = PatternSet::compile(&bundle.exception_patterns)?;
        let punctuation = PatternSet::compile(&bundle.punctuation_patterns)?;
        let tokenizer = Tokenizer::new(trie, exceptions, punctuation);

        let tagger = SequenceTagger::new(bundle.model, bundle.tag_overrides)?;
        let tag_map = TagMap::new(bundle.tag_map);
        tag_map.validate(tagger.tagset())?;

        debug!(
            vocabulary = bundle.vocabulary.len(),
            tags = tagger.tagset().len(),
            "language resources validated"
        );

        Ok(Self {
            tokenizer,
            tagger,
            corrector: TagCorrector::default_rules(),
            tag_map,
            lemmatizer: Lemmatizer::new(bundle.lemmas),
            ner: EntityTagger::new(bundle.gazetteer),
        })
    }

    /// The built-in casual-English configuration.
    pub fn en_twitter() -> Result<Self> {
        Self::from_bundle(en_twitter::bundle())
    }

    /// Runs the full pipeline over one text, producing a complete
    /// [`Document`]. Input is expected to be already normalized (HTML
    /// entities decoded) by the caller.
    pub fn make_doc(&self, text: &str) -> Document {
        let mut tokens = self.tokenizer.tokenize(text);
        debug!(tokens = tokens.len(), "tokenized");

        let tags = self.tagger.tag(&tokens);
        for (token, tag) in tokens.iter_mut().zip(tags) {
            token.tag = tag;
        }

        self.corrector.correct(&mut tokens);

        for token in &mut tokens {
            token.pos = self.tag_map.map(&token.tag);

            // Leading #/$ markers are dropped before lemma lookup when the
            // tag disagrees with the marker: the strip applies when the tag
            // is NOT the hashtag/cashtag tag.
            let first = token.text.chars().next();
            let lemma_source = if token.text.len() > 1
                && (first == Some('#') && token.tag != "HT"
                    || first == Some('$') && token.tag != "CT")
            {
                &token.text[1..]
            } else {
                token.text.as_str()
            };

            token.lemma = self
                .lemmatizer
                .lemmatize(lemma_source, token.pos)
                .into_iter()
                .next()
                .unwrap_or_else(|| lemma_source.to_lowercase());
        }

        self.ner.tag(&mut tokens);

        Document::new(text, tokens)
    }

    /// Annotates a batch of texts in parallel, one independent document
    /// per text. The shared resources are read-only, so invocations never
    /// contend; output order matches input order.
    pub fn pipe(&self, texts: &[&str]) -> Vec<Document> {
        texts.par_iter().map(|text| self.make_doc(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundle_constructs() {
        assert!(Language::en_twitter().is_ok());
    }

    #[test]
    fn test_missing_pos_mapping_is_fatal() {
        let mut bundle = en_twitter::bundle();
        bundle.tag_map.remove("NN");
        let err = Language::from_bundle(bundle).unwrap_err();
        assert!(err.to_string().contains("NN"));
    }

    #[test]
    fn test_bad_pattern_is_fatal() {
        let mut bundle = en_twitter::bundle();
        bundle.exception_patterns.push(PatternSpec::new("broken", "["));
        assert!(Language::from_bundle(bundle).is_err());
    }

    #[test]
    fn test_empty_text_yields_empty_document() {
        let nlp = Language::en_twitter().unwrap();
        let doc = nlp.make_doc("");
        assert!(doc.is_empty());
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_hashtag_lemma_keeps_marker() {
        // Tag is HT, so the inverse-polarity strip does not apply and the
        // lemma keeps the leading marker.
        let nlp = Language::en_twitter().unwrap();
        let doc = nlp.make_doc("#Bitcoin");
        assert_eq!(doc.tokens()[0].tag, "HT");
        assert_eq!(doc.tokens()[0].lemma, "#bitcoin");
    }

    #[test]
    fn test_pipe_matches_serial_processing() {
        let nlp = Language::en_twitter().unwrap();
        let texts = ["gm frens", "wen moon", "ngmi lol"];
        let parallel = nlp.pipe(&texts);
        for (text, doc) in texts.iter().zip(&parallel) {
            let serial = nlp.make_doc(text);
            assert_eq!(serial.tokens(), doc.tokens());
        }
    }
}
