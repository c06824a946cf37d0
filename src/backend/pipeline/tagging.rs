//! Fine tags from the shared Penn tagger, restated in the pipeline's tag
//! conventions, plus Universal POS.

use super::doc::Doc;
use crate::text::{glossary, tagger};

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "if", "whether", "while", "unless", "whereas", "that",
    "since", "until", "once",
];

pub fn annotate(doc: &mut Doc<'_>) {
    for range in doc.sentences.clone() {
        let words: Vec<&str> = doc.tokens[range.clone()]
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        let fine: Vec<&'static str> = tagger::tag(&words)
            .into_iter()
            .zip(&words)
            .map(|(tag, word)| restate(tag, word))
            .collect();
        let annotations: Vec<(&'static str, &'static str)> = fine
            .iter()
            .enumerate()
            .map(|(offset, &tag)| {
                let lower = words[offset].to_lowercase();
                (tag, universal(&lower, tag, &fine[offset + 1..]))
            })
            .collect();

        for (token, (tag, pos)) in doc.tokens[range].iter_mut().zip(annotations) {
            token.tag = tag;
            token.pos = pos;
        }
    }
}

fn restate(tag: &'static str, word: &str) -> &'static str {
    match (tag, word) {
        ("(", _) => "-LRB-",
        (")", _) => "-RRB-",
        (":", "-" | "\u{2010}" | "\u{2011}") => "HYPH",
        _ => tag,
    }
}

fn universal(lower: &str, tag: &'static str, following: &[&'static str]) -> &'static str {
    let lower = lower.replace('\u{2019}', "'");
    match lower.as_str() {
        "n't" | "not" => return "PART",
        "is" | "am" | "are" | "was" | "were" | "be" | "been" | "being" | "'m" | "'re" => {
            return "AUX";
        }
        "'s" if tag == "VBZ" => return "AUX",
        "has" | "have" | "had" | "having" | "'ve" | "do" | "does" | "did"
            if governs_verb(following) =>
        {
            return "AUX";
        }
        _ => {}
    }
    match tag {
        "MD" => "AUX",
        "IN" if SUBORDINATORS.contains(&lower.as_str()) => "SCONJ",
        "WDT" => "PRON",
        _ => glossary::penn_to_universal(tag),
    }
}

/// A verb follows within two tokens, skipping adverbs and negation.
fn governs_verb(following: &[&'static str]) -> bool {
    following
        .iter()
        .take(3)
        .find(|t| !t.starts_with("RB"))
        .is_some_and(|t| t.starts_with("VB"))
}
