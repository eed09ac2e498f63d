//! # Tag corrector
//!
//! Deterministic post-correction of the decoded tag sequence. Rules run in
//! a fixed declared order, one application per token per rule, and each
//! rule sees only the current token and its immediate neighbors — total
//! cost is linear in sequence length times rule count. Later rules observe
//! tags already rewritten by earlier rules.
//!
//! The rules fix what the statistical decoder gets wrong on social-media
//! conventions (a `#...` token is a hashtag no matter what the model
//! scored), repair the tags of contraction pieces the tokenizer split, and
//! mark sentence starts after sentence-final punctuation.

use crate::doc::Token;

/// Immutable view of one token and its immediate neighbors.
pub struct Window<'a> {
    pub prev: Option<Neighbor<'a>>,
    pub text: &'a str,
    pub tag: &'a str,
    pub next: Option<Neighbor<'a>>,
    pub is_first: bool,
}

pub struct Neighbor<'a> {
    pub text: &'a str,
    pub tag: &'a str,
}

/// What a rule may do to the current token.
pub enum Edit {
    SetTag(&'static str),
    MarkSentenceStart,
}

type RuleFn = fn(&Window) -> Option<Edit>;

/// A named correction rule.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    apply: RuleFn,
}

impl Rule {
    pub fn new(name: &'static str, apply: RuleFn) -> Self {
        Self { name, apply }
    }
}

/// Ordered rule list applied as one pass per rule.
#[derive(Debug)]
pub struct TagCorrector {
    rules: Vec<Rule>,
}

const NEGATIONS: &[&str] = &["n't", "n’t", "nt"];
const AUXILIARIES: &[&str] = &["ca", "can", "do", "does", "did"];

impl TagCorrector {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The standard social-media ruleset, in its contractual order.
    pub fn default_rules() -> Self {
        Self::new(vec![
            Rule::new("hashtag", |w| {
                (w.text.starts_with('#') && w.text.len() > 1).then_some(Edit::SetTag("HT"))
            }),
            Rule::new("cashtag", |w| {
                let mut chars = w.text.chars();
                (chars.next() == Some('$') && chars.next().is_some_and(|c| c.is_alphabetic()))
                    .then_some(Edit::SetTag("CT"))
            }),
            Rule::new("mention", |w| {
                (w.text.starts_with('@') && w.text.len() > 1).then_some(Edit::SetTag("USR"))
            }),
            Rule::new("auxiliary_split", |w| {
                let next_is_negation = w
                    .next
                    .as_ref()
                    .is_some_and(|n| NEGATIONS.contains(&n.text));
                if !next_is_negation {
                    return None;
                }
                match w.text.to_lowercase().as_str() {
                    "ca" | "can" => Some(Edit::SetTag("MD")),
                    "do" => Some(Edit::SetTag("VBP")),
                    "does" => Some(Edit::SetTag("VBZ")),
                    "did" => Some(Edit::SetTag("VBD")),
                    _ => None,
                }
            }),
            Rule::new("negation_split", |w| {
                let prev_is_auxiliary = w
                    .prev
                    .as_ref()
                    .is_some_and(|p| AUXILIARIES.contains(&p.text.to_lowercase().as_str()));
                (NEGATIONS.contains(&w.text) && prev_is_auxiliary).then_some(Edit::SetTag("RB"))
            }),
            Rule::new("clitic", |w| {
                let prev_is_word = w
                    .prev
                    .as_ref()
                    .is_some_and(|p| p.text.chars().next_back().is_some_and(|c| c.is_alphanumeric()));
                if !prev_is_word {
                    return None;
                }
                match w.text {
                    "'s" | "’s" => Some(Edit::SetTag("POS")),
                    "'m" | "’m" | "'re" | "’re" | "'ve" | "’ve" => Some(Edit::SetTag("VBP")),
                    "'ll" | "’ll" | "'d" | "’d" => Some(Edit::SetTag("MD")),
                    _ => None,
                }
            }),
            Rule::new("sentence_start", |w| {
                if w.is_first {
                    return Some(Edit::MarkSentenceStart);
                }
                let after_sentence_end = w
                    .prev
                    .as_ref()
                    .is_some_and(|p| !p.text.is_empty() && p.text.chars().all(|c| ".!?…".contains(c)));
                let starts_lowercase = w.text.chars().next().is_some_and(|c| c.is_lowercase());
                (after_sentence_end && !starts_lowercase).then_some(Edit::MarkSentenceStart)
            }),
        ])
    }

    /// Applies every rule, in declared order, to every token.
    pub fn correct(&self, tokens: &mut [Token]) {
        for rule in &self.rules {
            for i in 0..tokens.len() {
                let edit = {
                    let window = Window {
                        prev: i.checked_sub(1).map(|p| Neighbor {
                            text: &tokens[p].text,
                            tag: &tokens[p].tag,
                        }),
                        text: &tokens[i].text,
                        tag: &tokens[i].tag,
                        next: (i + 1 < tokens.len()).then(|| Neighbor {
                            text: &tokens[i + 1].text,
                            tag: &tokens[i + 1].tag,
                        }),
                        is_first: i == 0,
                    };
                    (rule.apply)(&window)
                };
                match edit {
                    Some(Edit::SetTag(tag)) => tokens[i].tag = tag.to_string(),
                    Some(Edit::MarkSentenceStart) => tokens[i].is_sentence_start = true,
                    None => {}
                }
            }
        }
    }
}

impl Default for TagCorrector {
    fn default() -> Self {
        Self::default_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<Token> {
        let mut out = Vec::new();
        let mut pos = 0;
        for (text, tag) in pairs {
            let mut t = Token::span(text, pos, pos + text.len());
            t.tag = tag.to_string();
            out.push(t);
            pos += text.len() + 1;
        }
        out
    }

    #[test]
    fn test_hashtag_tag_is_forced() {
        let mut tokens = tagged(&[("#rust", "NN")]);
        TagCorrector::default_rules().correct(&mut tokens);
        assert_eq!(tokens[0].tag, "HT");
    }

    #[test]
    fn test_cashtag_requires_alpha_after_dollar() {
        let mut tokens = tagged(&[("$BTC", "NN"), ("$", "SYM")]);
        TagCorrector::default_rules().correct(&mut tokens);
        assert_eq!(tokens[0].tag, "CT");
        assert_eq!(tokens[1].tag, "SYM");
    }

    #[test]
    fn test_contraction_pair_repair() {
        let mut tokens = tagged(&[("ca", "NN"), ("n't", "NN"), ("stop", "VB")]);
        TagCorrector::default_rules().correct(&mut tokens);
        assert_eq!(tokens[0].tag, "MD");
        assert_eq!(tokens[1].tag, "RB");
    }

    #[test]
    fn test_do_split_keeps_verb_tag() {
        let mut tokens = tagged(&[("does", "NN"), ("n't", "NN")]);
        TagCorrector::default_rules().correct(&mut tokens);
        assert_eq!(tokens[0].tag, "VBZ");
        assert_eq!(tokens[1].tag, "RB");
    }

    #[test]
    fn test_possessive_clitic() {
        let mut tokens = tagged(&[("John", "NNP"), ("'s", "NN"), ("dog", "NN")]);
        TagCorrector::default_rules().correct(&mut tokens);
        assert_eq!(tokens[1].tag, "POS");
    }

    #[test]
    fn test_sentence_start_after_final_punctuation() {
        let mut tokens = tagged(&[
            ("Done", "NN"),
            (".", "."),
            ("Next", "NN"),
            ("one", "CD"),
        ]);
        TagCorrector::default_rules().correct(&mut tokens);
        assert!(tokens[0].is_sentence_start);
        assert!(tokens[2].is_sentence_start);
        assert!(!tokens[3].is_sentence_start);
    }

    #[test]
    fn test_no_sentence_start_before_lowercase() {
        let mut tokens = tagged(&[("ok", "UH"), ("...", "."), ("whatever", "NN")]);
        TagCorrector::default_rules().correct(&mut tokens);
        assert!(!tokens[2].is_sentence_start);
    }
}
