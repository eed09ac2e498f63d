//! # Vocabulary trie
//!
//! Prefix tree over the language's word list, built once at initialization
//! and read-only afterwards. The tokenizer consults it while peeling
//! punctuation from chunk edges: a peel boundary that leaves a
//! dictionary-known core is preferred over one that does not. Membership is
//! a tie-break signal, not a requirement — unknown words still tokenize.
//!
//! Nodes live in a flat arena indexed by integer id, which keeps the
//! structure compact and trivially shareable across threads once frozen.

use std::collections::HashMap;

/// Arena-backed prefix tree with terminal markers.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, u32>,
    terminal: bool,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Builds a trie from a word list in one pass.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Inserts a word. Bulk construction only; the trie is never mutated
    /// after the pipeline is assembled.
    pub fn insert(&mut self, word: &str) {
        let mut node = 0usize;
        for ch in word.chars() {
            let existing = self.nodes[node].children.get(&ch).copied();
            node = match existing {
                Some(id) => id as usize,
                None => {
                    let id = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, id);
                    id as usize
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// Exact membership test.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = 0usize;
        for ch in word.chars() {
            match self.nodes[node].children.get(&ch) {
                Some(&id) => node = id as usize,
                None => return false,
            }
        }
        self.nodes[node].terminal
    }

    /// Byte length of the longest prefix of `s` that is a complete word.
    /// Returns 0 when no prefix is known.
    pub fn longest_known_prefix(&self, s: &str) -> usize {
        let mut node = 0usize;
        let mut best = 0usize;
        for (idx, ch) in s.char_indices() {
            match self.nodes[node].children.get(&ch) {
                Some(&id) => {
                    node = id as usize;
                    if self.nodes[node].terminal {
                        best = idx + ch.len_utf8();
                    }
                }
                None => break,
            }
        }
        best
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_exact_words_only() {
        let trie = Trie::from_words(["can", "cant", "do"]);
        assert!(trie.contains("can"));
        assert!(trie.contains("cant"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cans"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_longest_known_prefix() {
        let trie = Trie::from_words(["go", "gone", "going"]);
        assert_eq!(trie.longest_known_prefix("gone..."), 4);
        assert_eq!(trie.longest_known_prefix("gox"), 2);
        assert_eq!(trie.longest_known_prefix("xyz"), 0);
    }

    #[test]
    fn test_unicode_words() {
        let trie = Trie::from_words(["café"]);
        assert!(trie.contains("café"));
        assert_eq!(trie.longest_known_prefix("café!"), "café".len());
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::new();
        assert!(!trie.contains("anything"));
        assert_eq!(trie.longest_known_prefix("anything"), 0);
        assert_eq!(trie.node_count(), 1);
    }
}
