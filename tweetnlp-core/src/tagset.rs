//! # Fine tagset and universal POS mapping
//!
//! The tagger emits **fine-grained** tags: the Penn treebank inventory
//! extended with social-media tags (`HT` hashtag, `CT` cashtag, `USR`
//! mention, `URL`, `EMJ` emoji, `ABB` abbreviation). Each fine tag maps to
//! one of the fixed **universal** categories via [`TagMap`].
//!
//! The mapping is a total function over the tagset: a fine tag without a
//! universal mapping is a configuration error caught when the pipeline is
//! constructed, never at annotation time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Every fine tag the sequence tagger can emit, in a fixed order.
pub const TAGSET: &[&str] = &[
    "\"", "$", "(", ")", ",", ".", ":", "ABB", "CC", "CD", "CT", "DT", "EMJ",
    "EX", "FW", "HT", "IN", "JJ", "JJR", "JJS", "MD", "NN", "NNP", "NNPS",
    "NNS", "PDT", "POS", "PRP", "PRP$", "RB", "RBR", "RBS", "RP", "SYM", "TO",
    "UH", "URL", "USR", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "WDT", "WP",
    "WP$", "WRB",
];

/// Universal part-of-speech categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sym,
    Verb,
    /// Everything that does not fit a linguistic category: hashtags,
    /// mentions, URLs, emoji, foreign words.
    X,
}

impl Pos {
    /// Name of the category as string (for serialization and display).
    pub fn name(&self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
        }
    }

    /// Parses a category from its name (ex: "NOUN" → Some(Noun)).
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "ADJ" => Some(Pos::Adj),
            "ADP" => Some(Pos::Adp),
            "ADV" => Some(Pos::Adv),
            "CCONJ" => Some(Pos::Cconj),
            "DET" => Some(Pos::Det),
            "INTJ" => Some(Pos::Intj),
            "NOUN" => Some(Pos::Noun),
            "NUM" => Some(Pos::Num),
            "PART" => Some(Pos::Part),
            "PRON" => Some(Pos::Pron),
            "PROPN" => Some(Pos::Propn),
            "PUNCT" => Some(Pos::Punct),
            "SYM" => Some(Pos::Sym),
            "VERB" => Some(Pos::Verb),
            "X" => Some(Pos::X),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Static fine → universal lookup, validated against the model tagset
/// before the pipeline becomes usable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagMap {
    map: HashMap<String, Pos>,
}

impl TagMap {
    pub fn new(map: HashMap<String, Pos>) -> Self {
        Self { map }
    }

    /// Checks that every fine tag in `tagset` has a mapping. Called once
    /// during pipeline construction; any gap aborts construction.
    pub fn validate(&self, tagset: &[String]) -> Result<()> {
        for tag in tagset {
            if !self.map.contains_key(tag) {
                return Err(PipelineError::MissingPosMapping(tag.clone()));
            }
        }
        Ok(())
    }

    /// Maps a fine tag to its universal category. Total after `validate`.
    pub fn map(&self, tag: &str) -> Pos {
        self.map.get(tag).copied().unwrap_or(Pos::X)
    }
}
