//! # Lemmatizer
//!
//! Produces base forms from (surface text, universal POS) through a fixed
//! resolution order:
//!
//! 1. exact exception lookup keyed by (lower-cased text, POS);
//! 2. per-POS suffix rules, longest suffix first — candidates present in
//!    the base-form index win, otherwise the first rule's raw output;
//! 3. a global surface → lemma lookup independent of POS;
//! 4. the lower-cased text itself.
//!
//! The fallback chain means lemmatization never fails and always returns a
//! non-empty candidate list; the same inputs always produce the same list.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::tagset::Pos;

/// The loadable lemmatizer tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LemmaTables {
    /// (POS → lower-cased surface → lemma candidates), for irregulars.
    pub exceptions: HashMap<Pos, HashMap<String, Vec<String>>>,
    /// (POS → ordered (suffix, replacement) pairs).
    pub rules: HashMap<Pos, Vec<(String, String)>>,
    /// (POS → known base forms) consulted to rank rule outputs.
    pub index: HashMap<Pos, HashSet<String>>,
    /// Global surface → lemma lookup, POS-independent.
    pub lookup: HashMap<String, String>,
}

/// Deterministic rule/exception-table lemmatizer.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    tables: LemmaTables,
}

impl Lemmatizer {
    /// Takes ownership of the tables, sorting each POS's rules by suffix
    /// length descending (stable, so equal-length rules keep their
    /// configured order).
    pub fn new(mut tables: LemmaTables) -> Self {
        for rules in tables.rules.values_mut() {
            rules.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }
        Self { tables }
    }

    /// Returns the ordered, non-empty candidate list for the text under
    /// the given POS. The first candidate is the preferred lemma.
    pub fn lemmatize(&self, text: &str, pos: Pos) -> Vec<String> {
        let lower = text.to_lowercase();

        if let Some(found) = self
            .tables
            .exceptions
            .get(&pos)
            .and_then(|table| table.get(&lower))
        {
            return found.clone();
        }

        if let Some(rules) = self.tables.rules.get(&pos) {
            let empty = HashSet::new();
            let index = self.tables.index.get(&pos).unwrap_or(&empty);

            let mut raw: Vec<String> = Vec::new();
            let mut indexed: Vec<String> = Vec::new();
            for (suffix, replacement) in rules {
                if let Some(stem) = lower.strip_suffix(suffix.as_str()) {
                    let candidate = format!("{stem}{replacement}");
                    if index.contains(&candidate) && !indexed.contains(&candidate) {
                        indexed.push(candidate.clone());
                    }
                    raw.push(candidate);
                }
            }
            if !indexed.is_empty() {
                return indexed;
            }
            if let Some(first) = raw.into_iter().next() {
                return vec![first];
            }
        }

        if let Some(found) = self.tables.lookup.get(&lower) {
            return vec![found.clone()];
        }

        vec![lower]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer() -> Lemmatizer {
        let mut tables = LemmaTables::default();

        let mut verb_exc = HashMap::new();
        verb_exc.insert("was".to_string(), vec!["be".to_string()]);
        verb_exc.insert("ran".to_string(), vec!["run".to_string()]);
        tables.exceptions.insert(Pos::Verb, verb_exc);

        tables.rules.insert(
            Pos::Verb,
            vec![
                ("s".to_string(), "".to_string()),
                ("ing".to_string(), "".to_string()),
                ("ing".to_string(), "e".to_string()),
                ("ed".to_string(), "".to_string()),
                ("ed".to_string(), "e".to_string()),
            ],
        );
        let mut verb_index = HashSet::new();
        verb_index.insert("run".to_string());
        verb_index.insert("take".to_string());
        verb_index.insert("walk".to_string());
        tables.index.insert(Pos::Verb, verb_index);

        tables.lookup.insert("gonna".to_string(), "go".to_string());

        Lemmatizer::new(tables)
    }

    #[test]
    fn test_exception_wins() {
        assert_eq!(lemmatizer().lemmatize("was", Pos::Verb), vec!["be"]);
        assert_eq!(lemmatizer().lemmatize("Ran", Pos::Verb), vec!["run"]);
    }

    #[test]
    fn test_rule_with_index_hit() {
        // "taking" → "tak" (raw) and "take" (indexed); the indexed form wins.
        assert_eq!(lemmatizer().lemmatize("taking", Pos::Verb), vec!["take"]);
        assert_eq!(lemmatizer().lemmatize("walked", Pos::Verb), vec!["walk"]);
    }

    #[test]
    fn test_rule_without_index_hit_uses_first_rule() {
        // No indexed candidate: the longest-suffix rule's raw output stands.
        assert_eq!(lemmatizer().lemmatize("spamming", Pos::Verb), vec!["spamm"]);
    }

    #[test]
    fn test_global_lookup() {
        // No verb suffix matches "gonna"; resolution falls to the lookup.
        assert_eq!(lemmatizer().lemmatize("gonna", Pos::Verb), vec!["go"]);
    }

    #[test]
    fn test_identity_fallback_never_empty() {
        let lemmas = lemmatizer().lemmatize("Xyzzyx", Pos::Noun);
        assert_eq!(lemmas, vec!["xyzzyx"]);
    }

    #[test]
    fn test_determinism() {
        let a = lemmatizer().lemmatize("running", Pos::Verb);
        let b = lemmatizer().lemmatize("running", Pos::Verb);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }
}
