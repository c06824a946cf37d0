//! Human-readable descriptions of tag and entity labels, and the mapping from
//! Penn Treebank tags to Universal POS.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const ENTRIES: &[(&str, &str)] = &[
    // Universal POS
    ("ADJ", "adjective"),
    ("ADP", "adposition"),
    ("ADV", "adverb"),
    ("AUX", "auxiliary"),
    ("CONJ", "conjunction"),
    ("CCONJ", "coordinating conjunction"),
    ("DET", "determiner"),
    ("INTJ", "interjection"),
    ("NOUN", "noun"),
    ("NUM", "numeral"),
    ("PART", "particle"),
    ("PRON", "pronoun"),
    ("PROPN", "proper noun"),
    ("PUNCT", "punctuation"),
    ("SCONJ", "subordinating conjunction"),
    ("SYM", "symbol"),
    ("VERB", "verb"),
    ("X", "other"),
    ("SPACE", "space"),
    // Penn Treebank
    (".", "punctuation mark, sentence closer"),
    (",", "punctuation mark, comma"),
    ("-LRB-", "left round bracket"),
    ("-RRB-", "right round bracket"),
    ("``", "opening quotation mark"),
    ("\"\"", "closing quotation mark"),
    ("''", "closing quotation mark"),
    (":", "punctuation mark, colon or ellipsis"),
    ("$", "symbol, currency"),
    ("#", "symbol, number sign"),
    ("AFX", "affix"),
    ("CC", "conjunction, coordinating"),
    ("CD", "cardinal number"),
    ("DT", "determiner"),
    ("EX", "existential there"),
    ("FW", "foreign word"),
    ("HYPH", "punctuation mark, hyphen"),
    ("IN", "conjunction, subordinating or preposition"),
    ("JJ", "adjective (English), other noun-modifier (Chinese)"),
    ("JJR", "adjective, comparative"),
    ("JJS", "adjective, superlative"),
    ("LS", "list item marker"),
    ("MD", "verb, modal auxiliary"),
    ("NFP", "superfluous punctuation"),
    ("NN", "noun, singular or mass"),
    ("NNP", "noun, proper singular"),
    ("NNPS", "noun, proper plural"),
    ("NNS", "noun, plural"),
    ("PDT", "predeterminer"),
    ("POS", "possessive ending"),
    ("PRP", "pronoun, personal"),
    ("PRP$", "pronoun, possessive"),
    ("RB", "adverb"),
    ("RBR", "adverb, comparative"),
    ("RBS", "adverb, superlative"),
    ("RP", "adverb, particle"),
    ("SYM", "symbol"),
    ("TO", "infinitival \"to\""),
    ("UH", "interjection"),
    ("VB", "verb, base form"),
    ("VBD", "verb, past tense"),
    ("VBG", "verb, gerund or present participle"),
    ("VBN", "verb, past participle"),
    ("VBP", "verb, non-3rd person singular present"),
    ("VBZ", "verb, 3rd person singular present"),
    ("WDT", "wh-determiner"),
    ("WP", "wh-pronoun, personal"),
    ("WP$", "wh-pronoun, possessive"),
    ("WRB", "wh-adverb"),
    ("_SP", "whitespace"),
    // Named entities
    ("PERSON", "People, including fictional"),
    ("NORP", "Nationalities or religious or political groups"),
    ("FAC", "Buildings, airports, highways, bridges, etc."),
    ("ORG", "Companies, agencies, institutions, etc."),
    ("GPE", "Countries, cities, states"),
    ("LOC", "Non-GPE locations, mountain ranges, bodies of water"),
    ("PRODUCT", "Objects, vehicles, foods, etc. (not services)"),
    ("EVENT", "Named hurricanes, battles, wars, sports events, etc."),
    ("WORK_OF_ART", "Titles of books, songs, etc."),
    ("LAW", "Named documents made into laws."),
    ("LANGUAGE", "Any named language"),
    ("DATE", "Absolute or relative dates or periods"),
    ("TIME", "Times smaller than a day"),
    ("PERCENT", "Percentage, including \"%\""),
    ("MONEY", "Monetary values, including unit"),
    ("QUANTITY", "Measurements, as of weight or distance"),
    ("ORDINAL", "\"first\", \"second\", etc."),
    ("CARDINAL", "Numerals that do not fall under another type"),
];

static GLOSSARY: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Describe a POS tag or entity label, `None` when the label is unknown.
pub fn explain(label: &str) -> Option<&'static str> {
    GLOSSARY.get(label).copied()
}

/// Coarse Universal POS for a Penn Treebank tag.
pub fn penn_to_universal(tag: &str) -> &'static str {
    match tag {
        "NN" | "NNS" => "NOUN",
        "NNP" | "NNPS" => "PROPN",
        "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => "VERB",
        "MD" => "AUX",
        "JJ" | "JJR" | "JJS" | "AFX" => "ADJ",
        "RB" | "RBR" | "RBS" | "WRB" => "ADV",
        "IN" | "RP" => "ADP",
        "TO" | "POS" => "PART",
        "DT" | "PDT" | "WDT" => "DET",
        "PRP" | "PRP$" | "WP" | "WP$" | "EX" => "PRON",
        "CC" => "CCONJ",
        "CD" => "NUM",
        "UH" => "INTJ",
        "$" | "#" | "SYM" => "SYM",
        "." | "," | ":" | "``" | "''" | "(" | ")" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => "PUNCT",
        "_SP" => "SPACE",
        _ => "X",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explains_tags_and_labels() {
        assert_eq!(explain("NNP"), Some("noun, proper singular"));
        assert_eq!(explain("VBD"), Some("verb, past tense"));
        assert_eq!(explain("ORG"), Some("Companies, agencies, institutions, etc."));
        assert_eq!(explain("PROPN"), Some("proper noun"));
    }

    #[test]
    fn unknown_label_has_no_explanation() {
        assert_eq!(explain("ORGANIZATION"), None);
        assert_eq!(explain(""), None);
    }

    #[test]
    fn universal_mapping() {
        assert_eq!(penn_to_universal("NNS"), "NOUN");
        assert_eq!(penn_to_universal("NNP"), "PROPN");
        assert_eq!(penn_to_universal("VBZ"), "VERB");
        assert_eq!(penn_to_universal("CC"), "CCONJ");
        assert_eq!(penn_to_universal("-LRB-"), "PUNCT");
        assert_eq!(penn_to_universal("???"), "X");
    }
}
