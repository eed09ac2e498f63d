//! # tweetnlp-core — Annotation pipeline for noisy social-media English
//!
//! This crate turns raw short-form text (posts, replies, captions) into a
//! structured [`Document`]: a sequence of [`Token`]s each carrying a
//! fine-grained tag, a universal part-of-speech category, a lemma and an
//! optional entity label.
//!
//! ## Architecture
//!
//! The pipeline is linear; text flows through it stage by stage:
//!
//! 1. **Tokenization** ([`tokenizer`]): ordered exception patterns (URLs,
//!    hashtags, contractions, ...) plus punctuation peeling guided by a
//!    vocabulary [`trie`]. Offsets into the original text are preserved
//!    exactly.
//! 2. **Sequence tagging** ([`tagger`]): Viterbi decoding over a
//!    pretrained linear-chain model ([`viterbi`]), then exact-text
//!    overrides.
//! 3. **Correction** ([`corrector`]): ordered local-context rules fix
//!    social-media tags and mark sentence boundaries.
//! 4. **POS mapping + lemmatization** ([`tagset`], [`lemmatizer`]): each
//!    fine tag maps to a universal category; each surface form gets a base
//!    form through exception tables, suffix rules and lookups.
//! 5. **Entity tagging** ([`ner`]): longest-match gazetteer spans.
//!
//! ## Example
//!
//! ```rust
//! use tweetnlp_core::Language;
//!
//! let nlp = Language::en_twitter().expect("default resources are valid");
//! let doc = nlp.make_doc("RT @bob: buying $BTC in New York!! #crypto");
//!
//! for token in &doc {
//!     println!("{}\t{}\t{}\t{:?}", token.text, token.tag, token.lemma, token.entity_type);
//! }
//! ```
//!
//! All shared resources are built once by [`Language::from_bundle`] and
//! read-only afterwards, so one `Language` value can serve any number of
//! threads; [`Language::pipe`] processes batches in parallel on that
//! guarantee.

pub mod corrector;
pub mod doc;
pub mod en_twitter;
pub mod error;
pub mod features;
pub mod lemmatizer;
pub mod ner;
pub mod patterns;
pub mod pipeline;
pub mod tagger;
pub mod tagset;
pub mod tokenizer;
pub mod trie;
pub mod viterbi;

pub use corrector::TagCorrector;
pub use doc::{Document, Token};
pub use error::{PipelineError, Result};
pub use lemmatizer::{LemmaTables, Lemmatizer};
pub use ner::EntityTagger;
pub use patterns::{Boundary, PatternSet, PatternSpec};
pub use pipeline::{Language, ResourceBundle};
pub use tagger::{SequenceTagger, TagModel};
pub use tagset::{Pos, TagMap, TAGSET};
pub use tokenizer::Tokenizer;
pub use trie::Trie;
