//! # Ordered token patterns
//!
//! Two pattern groups drive the tokenizer: an **exception set** recognizing
//! irregular multi-character tokens (URLs, hashtags, contractions, numbers
//! with suffixes, ...) and a **punctuation set** used to peel punctuation,
//! quotes and brackets from chunk edges.
//!
//! Both groups are ordered, and order is a behavioral contract: at a given
//! position the first pattern in declared order that matches wins, even when
//! a later pattern would match a longer span. The ordinal pattern must sit
//! before the generic number pattern or "10th" splits into "10" + "th".
//!
//! Rust's `regex` engine has no lookaround, so the context conditions the
//! patterns need (word char before, whitespace after, a specific word to the
//! left) are expressed as explicit [`Boundary`] conditions checked by the
//! matching primitive against the surrounding text. Patterns plus boundaries
//! are plain serializable data, compiled once at pipeline construction.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Context requirement on the character(s) adjacent to a candidate match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Boundary {
    /// No requirement.
    #[default]
    Free,
    /// Adjacent char must not be a word char (`\w`); text edge is fine.
    NotWord,
    /// Adjacent char must be a word char.
    Word,
    /// Adjacent char must not be alphabetic; text edge is fine.
    NotAlpha,
    /// Adjacent char must be whitespace, or the match touches a text edge.
    WhitespaceOrEdge,
    /// The text before the match must end with one of these strings.
    /// Only meaningful on the left side.
    EndsWithAny(Vec<String>),
    /// The text after the match must start with one of these strings.
    /// Only meaningful on the right side.
    StartsWithAny(Vec<String>),
}

impl Boundary {
    fn ok_before(&self, text: &str, pos: usize) -> bool {
        let prev = text[..pos].chars().next_back();
        match self {
            Boundary::Free => true,
            Boundary::NotWord => !prev.is_some_and(is_word_char),
            Boundary::Word => prev.is_some_and(is_word_char),
            Boundary::NotAlpha => !prev.is_some_and(|c| c.is_alphabetic()),
            Boundary::WhitespaceOrEdge => prev.map_or(true, |c| c.is_whitespace()),
            Boundary::EndsWithAny(options) => {
                options.iter().any(|s| text[..pos].ends_with(s.as_str()))
            }
            Boundary::StartsWithAny(_) => true,
        }
    }

    fn ok_after(&self, text: &str, end: usize) -> bool {
        let next = text[end..].chars().next();
        match self {
            Boundary::Free => true,
            Boundary::NotWord => !next.is_some_and(is_word_char),
            Boundary::Word => next.is_some_and(is_word_char),
            Boundary::NotAlpha => !next.is_some_and(|c| c.is_alphabetic()),
            Boundary::WhitespaceOrEdge => next.map_or(true, |c| c.is_whitespace()),
            Boundary::StartsWithAny(options) => {
                options.iter().any(|s| text[end..].starts_with(s.as_str()))
            }
            Boundary::EndsWithAny(_) => true,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// One pattern as configuration data: a regex body plus its boundary
/// conditions. The regex is anchored to the match position at compile time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub before: Boundary,
    #[serde(default)]
    pub after: Boundary,
    /// Shrink the match so it does not end on trailing punctuation: the
    /// last kept char must be alphanumeric, `_` or `/`. Used by the URL
    /// patterns, whose greedy paths would otherwise swallow a final ")" or
    /// ".".
    #[serde(default)]
    pub trim_tail: bool,
}

impl PatternSpec {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            before: Boundary::Free,
            after: Boundary::Free,
            trim_tail: false,
        }
    }

    pub fn before(mut self, boundary: Boundary) -> Self {
        self.before = boundary;
        self
    }

    pub fn after(mut self, boundary: Boundary) -> Self {
        self.after = boundary;
        self
    }

    pub fn trim_tail(mut self) -> Self {
        self.trim_tail = true;
        self
    }
}

/// A compiled pattern entry.
#[derive(Debug)]
struct TokenPattern {
    name: String,
    /// Anchored form, for matching exactly at a position.
    anchored: Regex,
    /// Unanchored form, for locating matches at chunk edges while peeling.
    floating: Regex,
    before: Boundary,
    after: Boundary,
    trim_tail: bool,
}

/// A successful match at a position.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternMatch {
    /// Index of the winning pattern in declared order.
    pub order: usize,
    /// Match length in bytes.
    pub len: usize,
}

/// Peel candidates at a chunk edge: one winning pattern, several lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeCandidates {
    /// Index of the winning pattern in declared order.
    pub order: usize,
    /// Every byte length the pattern covers at this edge, ascending; the
    /// last entry is the greedy match.
    pub lens: Vec<usize>,
}

/// An immutable, ordered collection of compiled patterns.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<TokenPattern>,
}

impl PatternSet {
    /// Compiles an ordered spec list. A malformed regex aborts pipeline
    /// construction.
    pub fn compile(specs: &[PatternSpec]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(specs.len());
        for spec in specs {
            let anchored = Regex::new(&format!("^(?:{})", spec.pattern)).map_err(|e| {
                PipelineError::Pattern {
                    name: spec.name.clone(),
                    message: e.to_string(),
                }
            })?;
            let floating =
                Regex::new(&spec.pattern).map_err(|e| PipelineError::Pattern {
                    name: spec.name.clone(),
                    message: e.to_string(),
                })?;
            patterns.push(TokenPattern {
                name: spec.name.clone(),
                anchored,
                floating,
                before: spec.before.clone(),
                after: spec.after.clone(),
                trim_tail: spec.trim_tail,
            });
        }
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn name(&self, order: usize) -> &str {
        &self.patterns[order].name
    }

    /// Tries every pattern in declared order at `pos`; the first whose
    /// regex matches there and whose boundary conditions hold wins.
    /// Leftmost-first, never longest-match.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<PatternMatch> {
        let rest = &text[pos..];
        for (order, pattern) in self.patterns.iter().enumerate() {
            let Some(found) = pattern.anchored.find(rest) else {
                continue;
            };
            let mut len = found.end();
            if pattern.trim_tail {
                len = trim_to_url_tail(rest, len);
                if len == 0 {
                    continue;
                }
            }
            if !pattern.before.ok_before(text, pos) {
                continue;
            }
            if !pattern.after.ok_after(text, pos + len) {
                continue;
            }
            return Some(PatternMatch { order, len });
        }
        None
    }

    /// Peel candidates for one edge of `chunk`: the first pattern in
    /// declared order that matches there, together with every length it can
    /// cover at that edge (ascending). The longest length is the greedy
    /// match; shorter ones exist for run patterns and give the tokenizer
    /// alternative boundaries to test against the vocabulary.
    pub fn edge_candidates(&self, chunk: &str, suffix: bool) -> Option<EdgeCandidates> {
        for (order, pattern) in self.patterns.iter().enumerate() {
            let max = if suffix {
                pattern
                    .floating
                    .find_iter(chunk)
                    .find(|m| m.end() == chunk.len())
                    .map(|m| chunk.len() - m.start())
            } else {
                pattern.anchored.find(chunk).map(|m| m.end()).filter(|&l| l > 0)
            };
            let Some(max) = max else { continue };

            let mut lens = Vec::new();
            for len in 1..=max {
                let segment = if suffix {
                    if !chunk.is_char_boundary(chunk.len() - len) {
                        continue;
                    }
                    &chunk[chunk.len() - len..]
                } else {
                    if !chunk.is_char_boundary(len) {
                        continue;
                    }
                    &chunk[..len]
                };
                if pattern
                    .anchored
                    .find(segment)
                    .is_some_and(|m| m.end() == segment.len())
                {
                    lens.push(len);
                }
            }
            if !lens.is_empty() {
                return Some(EdgeCandidates { order, lens });
            }
        }
        None
    }
}

/// Shrinks `len` so the last kept char of `text[..len]` is alphanumeric,
/// `_` or `/`. Returns 0 when nothing qualifies.
fn trim_to_url_tail(text: &str, len: usize) -> usize {
    let mut end = len;
    while end > 0 {
        let ch = text[..end].chars().next_back().unwrap_or(' ');
        if ch.is_alphanumeric() || ch == '_' || ch == '/' {
            return end;
        }
        end -= ch.len_utf8();
    }
    0
}
