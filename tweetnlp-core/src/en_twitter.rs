//! # Built-in resources for casual English
//!
//! The default language bundle: vocabulary, the two ordered pattern groups,
//! heuristic tagger weights, the exact-text tag override gazetteer, the
//! fine→universal map, lemmatizer tables and the entity gazetteer.
//!
//! The tagger weights here are hand-estimated rather than trained; they
//! encode the strong orthographic signals of short-form English (a leading
//! `#` means hashtag, an all-digit token is a number, `-ly` words are
//! adverbs) plus a small closed-class lexicon. A production deployment can
//! swap in a trained artifact through [`crate::TagModel::from_bytes`]
//! without touching anything else.

use std::collections::{HashMap, HashSet};

use crate::lemmatizer::LemmaTables;
use crate::patterns::{Boundary, PatternSpec};
use crate::pipeline::ResourceBundle;
use crate::tagger::TagModel;
use crate::tagset::{Pos, TAGSET};

/// Assembles the complete default bundle.
pub fn bundle() -> ResourceBundle {
    ResourceBundle {
        vocabulary: vocabulary(),
        exception_patterns: exception_patterns(),
        punctuation_patterns: punctuation_patterns(),
        model: model(),
        tag_overrides: tag_overrides(),
        tag_map: tag_map(),
        lemmas: lemma_tables(),
        gazetteer: gazetteer(),
    }
}

/// The ordered exception patterns. Order is a contract: the first pattern
/// matching at a position wins, so ordinals sit before generic numbers and
/// URLs before everything that could eat a domain fragment.
pub fn exception_patterns() -> Vec<PatternSpec> {
    let negation_follows = || {
        Boundary::StartsWithAny(vec![
            "not".into(),
            "n't".into(),
            "n’t".into(),
            "nt".into(),
        ])
    };

    vec![
        PatternSpec::new("url_scheme", r"(?:https?|ftp|mailto)://[^\s]+").trim_tail(),
        PatternSpec::new(
            "url_ip",
            r"(?:https?://)?\d{1,3}(?:\.\d{1,3}){3}(?::\d{2,5})?(?:/[^\s]*)?",
        )
        .trim_tail(),
        PatternSpec::new(
            "url_domain",
            r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.(?:com|net|org|edu|gov|mil|int|io|co|ai|app|dev|ly|me|tv|gg|info|biz|xyz|uk|us|ca|au|de|fr|es|it|nl|jp|br|ru|in|ch|se|no|pl)(?::\d{2,5})?(?:/[^\s]*)?",
        )
        .trim_tail(),
        PatternSpec::new("hashtag", r"#(?:\w+(?:\.\w+)?)")
            .before(Boundary::NotWord)
            .after(Boundary::NotWord),
        PatternSpec::new("cashtag", r"\$[A-Za-z][A-Za-z0-9]*(?:[._][A-Za-z0-9]+)?")
            .before(Boundary::WhitespaceOrEdge),
        PatternSpec::new("mention", r"@\w+").after(Boundary::NotWord),
        PatternSpec::new("email", r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
            .before(Boundary::NotWord)
            .after(Boundary::NotWord),
        PatternSpec::new("wallet", r"0x[0-9a-fA-F]+"),
        PatternSpec::new("money", r"\d+[kKmM]")
            .before(Boundary::NotWord)
            .after(Boundary::NotWord),
        PatternSpec::new("age", r"\d+-years?-old"),
        PatternSpec::new("digit_word", r"\d+-+\w+"),
        PatternSpec::new("version", r"[vV]?\d+(?:\.\d+){2,}").after(Boundary::NotWord),
        // Ordinals and unit-suffixed numbers must precede the generic
        // number pattern or "10th" splits into "10" + "th".
        PatternSpec::new("ordinal", r"\d+(?:th|TH|s|G|g|B|b|PM|h)")
            .before(Boundary::NotWord)
            .after(Boundary::NotWord),
        PatternSpec::new("number", r"\d+(?:[\d,.':]+\d)?").before(Boundary::NotWord),
        PatternSpec::new("signed_number", r"[+-]+\d+(?:[\d,.':]+\d)?"),
        PatternSpec::new("clitic", r"['’](?:s|m|re|d|ve|ll|t)")
            .before(Boundary::Word)
            .after(Boundary::WhitespaceOrEdge),
        PatternSpec::new("abbrev", r"(?:\w\.){2,}"),
        PatternSpec::new("neo_prefix", r"[nN]eo-+\w+"),
        PatternSpec::new("negation", r"n['’]t")
            .before(Boundary::Word)
            .after(Boundary::WhitespaceOrEdge),
        // One entry per auxiliary family: the boundary check runs after the
        // regex has committed to an alternative, so alternatives that need
        // different look-ahead outcomes ("do" vs "does", "ca" vs "can")
        // cannot share an alternation.
        PatternSpec::new("contraction_ca", r"ca|Ca")
            .before(Boundary::NotAlpha)
            .after(negation_follows()),
        PatternSpec::new("contraction_does", r"does|Does|did|Did")
            .before(Boundary::NotAlpha)
            .after(negation_follows()),
        PatternSpec::new("contraction_do", r"do|Do")
            .before(Boundary::NotAlpha)
            .after(negation_follows()),
        PatternSpec::new("contraction_can", r"can|Can")
            .before(Boundary::NotAlpha)
            .after(negation_follows()),
        PatternSpec::new("contraction_right", r"not|n['’]t|nt")
            .before(Boundary::EndsWithAny(vec![
                "ca".into(),
                "Ca".into(),
                "can".into(),
                "Can".into(),
                "do".into(),
                "Do".into(),
                "did".into(),
                "Did".into(),
                "does".into(),
                "Does".into(),
            ]))
            .after(Boundary::NotAlpha),
        PatternSpec::new("bracket_open", r"\(").after(Boundary::Word),
        PatternSpec::new("bracket_close", r"\)").before(Boundary::Word),
        PatternSpec::new("co_prefix", r"(?:CO|Co|co)-+\w+"),
        PatternSpec::new("quote_open", "\"").after(Boundary::Word),
        PatternSpec::new("quote_close", "\"").before(Boundary::Word),
        PatternSpec::new("etc_dots", r"\.+").before(Boundary::EndsWithAny(vec!["etc".into()])),
        PatternSpec::new(
            "emoji",
            r"[\u{1F1E6}-\u{1F1FF}\u{1F300}-\u{1F5FF}\u{1F600}-\u{1F64F}\u{1F680}-\u{1F6FF}\u{1F900}-\u{1F9FF}\u{1FA70}-\u{1FAFF}\u{2600}-\u{26FF}\u{2700}-\u{27BF}\u{2764}\u{FE0F}\u{1F3FB}-\u{1F3FF}]+",
        ),
    ]
}

/// The ordered punctuation patterns used for edge peeling. Arrows precede
/// the generic run so "-->" survives whole.
pub fn punctuation_patterns() -> Vec<PatternSpec> {
    vec![
        PatternSpec::new("arrow", r"-+>+|<->"),
        PatternSpec::new("punct_run", r"[.,\-!?:;…]+"),
        PatternSpec::new("slash", r"/"),
        PatternSpec::new("quote_bracket", r#"["'“”‘’«»„()\[\]{}]"#),
    ]
}

/// Heuristic linear-chain weights over the full fine tagset.
pub fn model() -> TagModel {
    let mut m = TagModel::new(TAGSET);

    // ==================================================================
    // Emissions: orthographic signals
    // ==================================================================
    m.set_emission("starts_hash", "HT", 8.0);
    m.set_emission("starts_dollar", "CT", 7.0);
    m.set_emission("starts_at", "USR", 8.0);
    m.set_emission("looks_url", "URL", 8.0);
    m.set_emission("is_emoji", "EMJ", 6.0);

    m.set_emission("is_digit", "CD", 6.0);
    m.set_emission("has_digit", "CD", 2.5);
    m.set_emission("is_title", "NNP", 2.2);
    m.set_emission("is_upper", "NNP", 1.2);
    m.set_emission("bias", "NN", 0.8);

    m.set_emission("suffix3=ing", "VBG", 2.0);
    m.set_emission("suffix2=ed", "VBD", 2.0);
    m.set_emission("suffix2=ly", "RB", 2.5);
    m.set_emission("suffix1=s", "NNS", 0.7);
    m.set_emission("suffix3=est", "JJS", 2.0);
    m.set_emission("suffix2=er", "JJR", 0.8);

    // Punctuation classes
    m.set_emission("punct_sentence", ".", 8.0);
    m.set_emission("punct_comma", ",", 8.0);
    m.set_emission("punct_colon", ":", 8.0);
    m.set_emission("is_symbol", "SYM", 2.0);
    m.set_emission("word=(", "(", 8.0);
    m.set_emission("word=)", ")", 8.0);
    m.set_emission("word=[", "(", 7.0);
    m.set_emission("word=]", ")", 7.0);
    m.set_emission("word=$", "$", 8.0);
    for quote in ["\"", "'", "“", "”", "‘", "’", "«", "»"] {
        m.set_emission(&format!("word={quote}"), "\"", 7.0);
    }

    // ==================================================================
    // Emissions: closed-class lexicon
    // ==================================================================
    for word in ["the", "a", "an"] {
        m.set_emission(&format!("word={word}"), "DT", 5.0);
    }
    for word in ["this", "that", "these", "those"] {
        m.set_emission(&format!("word={word}"), "DT", 3.0);
    }
    for word in ["and", "or", "but", "nor"] {
        m.set_emission(&format!("word={word}"), "CC", 5.0);
    }
    for word in [
        "of", "in", "on", "at", "for", "with", "from", "by", "about", "into", "over", "after",
        "before", "under",
    ] {
        m.set_emission(&format!("word={word}"), "IN", 4.0);
    }
    m.set_emission("word=to", "TO", 4.5);
    for word in [
        "can", "could", "will", "would", "shall", "should", "may", "might", "must", "ca", "wo",
    ] {
        m.set_emission(&format!("word={word}"), "MD", 5.0);
    }
    for word in ["not", "never", "always", "really", "very", "just", "too", "also", "still"] {
        m.set_emission(&format!("word={word}"), "RB", 4.0);
    }
    for word in ["i", "you", "he", "she", "it", "we", "they", "me", "him", "them", "us", "u"] {
        m.set_emission(&format!("word={word}"), "PRP", 5.0);
    }
    for word in ["my", "your", "his", "its", "our", "their", "ur"] {
        m.set_emission(&format!("word={word}"), "PRP$", 5.0);
    }
    m.set_emission("word=is", "VBZ", 5.0);
    m.set_emission("word=has", "VBZ", 5.0);
    m.set_emission("word=does", "VBZ", 5.0);
    for word in ["are", "am", "do", "have"] {
        m.set_emission(&format!("word={word}"), "VBP", 5.0);
    }
    for word in ["was", "were", "did", "had"] {
        m.set_emission(&format!("word={word}"), "VBD", 5.0);
    }
    m.set_emission("word=be", "VB", 5.0);
    m.set_emission("word=been", "VBN", 5.0);
    m.set_emission("word=being", "VBG", 5.0);
    for word in ["what", "who", "whom"] {
        m.set_emission(&format!("word={word}"), "WP", 4.0);
    }
    m.set_emission("word=whose", "WP$", 4.0);
    m.set_emission("word=which", "WDT", 4.0);
    for word in ["when", "where", "why", "how"] {
        m.set_emission(&format!("word={word}"), "WRB", 4.0);
    }
    m.set_emission("word=there", "EX", 3.0);
    for word in ["oh", "wow", "yay", "ugh", "hey", "yes", "please"] {
        m.set_emission(&format!("word={word}"), "UH", 4.0);
    }

    // ==================================================================
    // Transitions: the common chains of short-form English
    // ==================================================================
    m.set_transition("DT", "NN", 2.0);
    m.set_transition("DT", "JJ", 1.2);
    m.set_transition("DT", "NNS", 1.2);
    m.set_transition("JJ", "NN", 1.5);
    m.set_transition("JJ", "NNS", 1.0);
    m.set_transition("NNP", "NNP", 1.2);
    m.set_transition("MD", "VB", 2.0);
    m.set_transition("MD", "RB", 1.0);
    m.set_transition("RB", "VB", 1.0);
    m.set_transition("TO", "VB", 2.0);
    m.set_transition("PRP", "VBP", 1.0);
    m.set_transition("PRP$", "NN", 1.5);
    m.set_transition("IN", "DT", 1.0);
    m.set_transition("IN", "NNP", 0.8);
    m.set_transition("NN", "VBZ", 0.6);
    m.set_transition("NNS", "VBP", 0.6);
    m.set_transition("VBZ", "DT", 0.5);
    m.set_transition("CD", "NNS", 0.6);

    m
}

/// Exact-text tag overrides, applied unconditionally after decoding.
pub fn tag_overrides() -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (text, tag) in [
        ("RT", "ABB"),
        ("rt", "ABB"),
        ("btw", "ABB"),
        ("fyi", "ABB"),
        ("imo", "ABB"),
        ("imho", "ABB"),
        ("lol", "UH"),
        ("LOL", "UH"),
        ("lmao", "UH"),
        ("omg", "UH"),
        ("OMG", "UH"),
        ("smh", "UH"),
        ("tbh", "UH"),
        ("idk", "UH"),
        ("ikr", "UH"),
    ] {
        map.insert(text.to_string(), tag.to_string());
    }
    map
}

/// Fine → universal map, total over [`TAGSET`].
pub fn tag_map() -> HashMap<String, Pos> {
    let pairs: &[(&str, Pos)] = &[
        ("\"", Pos::Punct),
        ("$", Pos::Sym),
        ("(", Pos::Punct),
        (")", Pos::Punct),
        (",", Pos::Punct),
        (".", Pos::Punct),
        (":", Pos::Punct),
        ("ABB", Pos::X),
        ("CC", Pos::Cconj),
        ("CD", Pos::Num),
        ("CT", Pos::X),
        ("DT", Pos::Det),
        ("EMJ", Pos::X),
        ("EX", Pos::Adv),
        ("FW", Pos::X),
        ("HT", Pos::X),
        ("IN", Pos::Adp),
        ("JJ", Pos::Adj),
        ("JJR", Pos::Adj),
        ("JJS", Pos::Adj),
        ("MD", Pos::Verb),
        ("NN", Pos::Noun),
        ("NNP", Pos::Propn),
        ("NNPS", Pos::Propn),
        ("NNS", Pos::Noun),
        ("PDT", Pos::Adj),
        ("POS", Pos::Part),
        ("PRP", Pos::Pron),
        ("PRP$", Pos::Adj),
        ("RB", Pos::Adv),
        ("RBR", Pos::Adv),
        ("RBS", Pos::Adv),
        ("RP", Pos::Part),
        ("SYM", Pos::Sym),
        ("TO", Pos::Part),
        ("UH", Pos::Intj),
        ("URL", Pos::X),
        ("USR", Pos::X),
        ("VB", Pos::Verb),
        ("VBD", Pos::Verb),
        ("VBG", Pos::Verb),
        ("VBN", Pos::Verb),
        ("VBP", Pos::Verb),
        ("VBZ", Pos::Verb),
        ("WDT", Pos::Adj),
        ("WP", Pos::Noun),
        ("WP$", Pos::Adj),
        ("WRB", Pos::Adv),
    ];
    pairs
        .iter()
        .map(|(tag, pos)| (tag.to_string(), *pos))
        .collect()
}

/// Lemmatizer tables: irregular exceptions, per-POS suffix rules, base-form
/// index and the slang lookup.
pub fn lemma_tables() -> LemmaTables {
    let mut tables = LemmaTables::default();

    let verb_exceptions: &[(&str, &str)] = &[
        ("was", "be"),
        ("were", "be"),
        ("is", "be"),
        ("are", "be"),
        ("am", "be"),
        ("been", "be"),
        ("being", "be"),
        ("has", "have"),
        ("had", "have"),
        ("did", "do"),
        ("done", "do"),
        ("went", "go"),
        ("gone", "go"),
        ("ran", "run"),
        ("running", "run"),
        ("got", "get"),
        ("gotten", "get"),
        ("said", "say"),
        ("made", "make"),
        ("took", "take"),
        ("taken", "take"),
        ("came", "come"),
        ("saw", "see"),
        ("seen", "see"),
        ("knew", "know"),
        ("known", "know"),
        ("thought", "think"),
        ("felt", "feel"),
        ("left", "leave"),
        ("told", "tell"),
        ("kept", "keep"),
        ("won", "win"),
        ("lost", "lose"),
        ("met", "meet"),
        ("paid", "pay"),
        ("bought", "buy"),
        ("brought", "bring"),
        ("wrote", "write"),
        ("written", "write"),
        ("broke", "break"),
        ("broken", "break"),
        ("chose", "choose"),
        ("gave", "give"),
        ("given", "give"),
        ("found", "find"),
        ("heard", "hear"),
        ("held", "hold"),
        ("meant", "mean"),
        ("sat", "sit"),
        ("stood", "stand"),
        ("ate", "eat"),
        ("eaten", "eat"),
    ];
    tables.exceptions.insert(
        Pos::Verb,
        verb_exceptions
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect(),
    );

    let noun_exceptions: &[(&str, &str)] = &[
        ("men", "man"),
        ("women", "woman"),
        ("children", "child"),
        ("people", "person"),
        ("teeth", "tooth"),
        ("feet", "foot"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
    ];
    tables.exceptions.insert(
        Pos::Noun,
        noun_exceptions
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect(),
    );

    let adj_exceptions: &[(&str, &str)] = &[
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
    ];
    tables.exceptions.insert(
        Pos::Adj,
        adj_exceptions
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect(),
    );

    let rule = |s: &str, r: &str| (s.to_string(), r.to_string());
    tables.rules.insert(
        Pos::Noun,
        vec![
            rule("s", ""),
            rule("ses", "s"),
            rule("ves", "f"),
            rule("xes", "x"),
            rule("zes", "z"),
            rule("ches", "ch"),
            rule("shes", "sh"),
            rule("ies", "y"),
        ],
    );
    tables.rules.insert(
        Pos::Verb,
        vec![
            rule("s", ""),
            rule("ies", "y"),
            rule("es", "e"),
            rule("ed", "e"),
            rule("ed", ""),
            rule("ing", "e"),
            rule("ing", ""),
        ],
    );
    tables.rules.insert(
        Pos::Adj,
        vec![
            rule("er", ""),
            rule("est", ""),
            rule("er", "e"),
            rule("est", "e"),
        ],
    );

    let index = |words: &[&str]| -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    };
    tables.index.insert(
        Pos::Verb,
        index(&[
            "be", "have", "do", "go", "run", "get", "say", "make", "take", "come", "see", "know",
            "think", "feel", "leave", "tell", "keep", "win", "lose", "meet", "pay", "buy", "sell",
            "bring", "write", "speak", "break", "choose", "give", "find", "hear", "hold", "mean",
            "sit", "stand", "eat", "love", "like", "hate", "want", "need", "use", "work", "play",
            "call", "try", "ask", "turn", "follow", "show", "move", "live", "believe", "happen",
            "tweet", "post", "share", "block", "vote", "stream", "drop", "check", "miss", "watch",
            "read", "walk", "talk", "look",
        ]),
    );
    tables.index.insert(
        Pos::Noun,
        index(&[
            "man", "woman", "child", "person", "time", "day", "year", "way", "thing", "world",
            "life", "hand", "part", "eye", "place", "week", "case", "point", "company", "number",
            "group", "problem", "fact", "cat", "dog", "meme", "tweet", "thread", "story", "photo",
            "video", "game", "team", "fan", "price", "coin", "market", "chart", "moon", "phone",
            "app", "link", "post", "friend", "follower",
        ]),
    );
    tables.index.insert(
        Pos::Adj,
        index(&[
            "good", "bad", "big", "small", "new", "old", "high", "low", "great", "real", "fake",
            "viral", "hot", "cool", "nice", "free", "true", "false", "happy", "sad", "late",
            "early", "fast", "slow",
        ]),
    );

    for (slang, lemma) in [
        ("u", "you"),
        ("ur", "your"),
        ("r", "are"),
        ("ya", "you"),
        ("gonna", "go"),
        ("wanna", "want"),
        ("kinda", "kind"),
        ("sorta", "sort"),
        ("outta", "out"),
        ("thx", "thanks"),
        ("pls", "please"),
        ("plz", "please"),
        ("ppl", "people"),
        ("b4", "before"),
        ("2day", "today"),
        ("2moro", "tomorrow"),
        ("bc", "because"),
        ("cuz", "because"),
        ("tho", "though"),
        ("thru", "through"),
        ("luv", "love"),
        ("fav", "favorite"),
        ("pic", "picture"),
        ("vid", "video"),
    ] {
        tables.lookup.insert(slang.to_string(), lemma.to_string());
    }

    tables
}

/// Vocabulary backing the tokenizer's trie. Peel boundaries that leave one
/// of these as the core token are preferred.
pub fn vocabulary() -> Vec<String> {
    const WORDS: &[&str] = &[
        // Closed class
        "the", "a", "an", "and", "or", "but", "nor", "not", "no", "yes", "of", "in", "on", "at",
        "for", "with", "from", "by", "about", "into", "over", "after", "before", "under", "again",
        "to", "is", "are", "was", "were", "be", "been", "am", "do", "does", "did", "have", "has",
        "had", "can", "could", "will", "would", "shall", "should", "may", "might", "must", "i",
        "you", "he", "she", "it", "we", "they", "me", "him", "her", "them", "us", "my", "your",
        "his", "its", "our", "their", "this", "that", "these", "those", "what", "who", "which",
        "when", "where", "why", "how", "there", "here", "now", "then", "than", "too", "also",
        "very", "really", "just", "still", "never", "always", "more", "less", "much", "many",
        "some", "any", "all", "every", "other", "out", "up", "down", "off", "so", "if", "as",
        // Common content words
        "etc", "go", "going", "gone", "come", "back", "new", "old", "big", "small", "good", "bad",
        "great", "best", "worst", "first", "last", "next", "day", "night", "time", "today",
        "tomorrow", "people", "man", "woman", "friend", "love", "like", "hate", "want", "need",
        "know", "think", "see", "look", "watch", "read", "check", "play", "win", "lose", "work",
        "make", "made", "get", "got", "say", "said", "right", "wrong", "true", "fake", "real",
        "nice", "cool", "hot", "free", "happy", "sad", "wow", "haha", "ok", "okay", "thanks",
        "please", "sorry", "moon", "game", "team", "fan", "video", "photo", "story", "phone",
        "news", "world", "life", "thing", "way", "year", "week",
        // Platform vocabulary
        "follow", "unfollow", "tweet", "retweet", "reply", "post", "share", "block", "mute",
        "trend", "trending", "viral", "thread", "meme", "stan", "crypto", "coin", "token",
        "market", "chart", "pump", "dump", "hodl",
    ];
    WORDS.iter().map(|w| w.to_string()).collect()
}

/// Default entity gazetteer: normalized multi-token key → entity type.
pub fn gazetteer() -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (key, label) in [
        ("new york", "LOC"),
        ("new york city", "LOC"),
        ("los angeles", "LOC"),
        ("san francisco", "LOC"),
        ("united states", "LOC"),
        ("united kingdom", "LOC"),
        ("london", "LOC"),
        ("paris", "LOC"),
        ("tokyo", "LOC"),
        ("elon musk", "PER"),
        ("taylor swift", "PER"),
        ("donald trump", "PER"),
        ("joe biden", "PER"),
        ("twitter", "ORG"),
        ("tesla", "ORG"),
        ("spacex", "ORG"),
        ("google", "ORG"),
        ("youtube", "ORG"),
        ("netflix", "ORG"),
        ("nasa", "ORG"),
        ("bitcoin", "MISC"),
        ("ethereum", "MISC"),
        ("dogecoin", "MISC"),
        ("world cup", "MISC"),
        ("super bowl", "MISC"),
        ("black friday", "MISC"),
    ] {
        map.insert(key.to_string(), label.to_string());
    }
    map
}
