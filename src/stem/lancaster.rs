//! The Paice/Husk (Lancaster) stemmer with the standard rule table.
//!
//! A rule reads `<reversed ending>[*]<remove count>[append]<'>' | '.'>`:
//! `*` restricts it to words no rule has touched yet, `>` keeps stemming
//! and `.` stops.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Stemmer;

const DEFAULT_RULES: &[&str] = &[
    "ai*2.", "a*1.", "bb1.", "city3s.", "ci2>", "cn1t>", "dd1.", "dei3y>", "deec2ss.", "dee1.",
    "de2>", "dooh4>", "e1>", "feil1v.", "fi2>", "gni3>", "gai3y.", "ga2>", "gg1.", "ht*2.",
    "hsiug5ct.", "hsi3>", "i*1.", "i1y>", "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.",
    "jrev1t.", "jsim2t.", "jn1d.", "j1s.", "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>",
    "lc1.", "lufi4y.", "luf3>", "lu2.", "lai3>", "lau3>", "la2>", "ll1.", "mui3.", "mu*2.",
    "msi3>", "mm1.", "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.",
    "pihs4>", "pp1.", "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>",
    "sei3y>", "sis2.", "si2>", "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.", "tacilp4y.",
    "ta2>", "tnem4>", "tne3>", "tna3>", "tpir2b.", "tpro2b.", "tcud1.", "tpmus2.", "tpec2iv.",
    "tulo2v.", "tsis0.", "tsi3>", "tt1.", "uqi3.", "ugo1.", "vis3j>", "vie0.", "vi2>", "ylb1>",
    "yli3y>", "ylp0.", "yl2>", "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>", "yte3>", "ytl2.",
    "yrtsi5.", "yra3>", "yro3>", "yfi3.", "ycn2t>", "yca3>", "zi2>", "zy1s.",
];

#[derive(Debug, Clone)]
struct Rule {
    ending: String,
    intact_only: bool,
    remove: usize,
    append: String,
    stop: bool,
}

impl Rule {
    fn parse(raw: &str) -> Option<Self> {
        let digit_at = raw.find(|c: char| c.is_ascii_digit())?;
        let (head, tail) = raw.split_at(digit_at);
        let (reversed, intact_only) = match head.strip_suffix('*') {
            Some(r) => (r, true),
            None => (head, false),
        };
        if reversed.is_empty() || !reversed.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        let mut chars = tail.chars();
        let remove = chars.next()?.to_digit(10)? as usize;
        let rest: String = chars.collect();
        let (append, stop) = match rest.chars().last() {
            Some('.') => (&rest[..rest.len() - 1], true),
            Some('>') => (&rest[..rest.len() - 1], false),
            _ => (rest.as_str(), false),
        };
        if !append.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        Some(Self {
            ending: reversed.chars().rev().collect(),
            intact_only,
            remove,
            append: append.to_string(),
            stop,
        })
    }
}

/// Rules indexed by the last letter of their ending, in table order.
type RuleTable = HashMap<char, Vec<Rule>>;

static DEFAULT_TABLE: Lazy<RuleTable> = Lazy::new(|| build_table(DEFAULT_RULES));

fn build_table(rules: &[&str]) -> RuleTable {
    let mut table: RuleTable = HashMap::new();
    for rule in rules.iter().filter_map(|r| Rule::parse(r)) {
        if let Some(last) = rule.ending.chars().last() {
            table.entry(last).or_default().push(rule);
        }
    }
    table
}

#[derive(Debug, Clone)]
pub struct LancasterStemmer {
    table: &'static RuleTable,
}

impl LancasterStemmer {
    pub fn new() -> Self {
        Self {
            table: &DEFAULT_TABLE,
        }
    }
}

impl Default for LancasterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for LancasterStemmer {
    fn name(&self) -> &'static str {
        "lancaster"
    }

    fn stem(&self, word: &str) -> String {
        let intact: Vec<char> = word.to_lowercase().chars().collect();
        let mut word = intact.clone();

        loop {
            let Some(last) = last_letter(&word) else {
                break;
            };
            let Some(rules) = self.table.get(&last) else {
                break;
            };

            let mut applied = None;
            for rule in rules {
                if !ends_with(&word, &rule.ending) {
                    continue;
                }
                if rule.intact_only && word != intact {
                    continue;
                }
                if acceptable(&word, rule.remove) {
                    word.truncate(word.len() - rule.remove);
                    word.extend(rule.append.chars());
                    applied = Some(rule.stop);
                    break;
                }
            }

            match applied {
                Some(false) => continue,
                _ => break,
            }
        }

        word.into_iter().collect()
    }
}

/// Last character of the leading run of letters.
fn last_letter(word: &[char]) -> Option<char> {
    word.iter().take_while(|c| c.is_alphabetic()).last().copied()
}

fn ends_with(word: &[char], ending: &str) -> bool {
    let ending: Vec<char> = ending.chars().collect();
    word.ends_with(&ending)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// A stem must keep two letters if it starts with a vowel, otherwise three
/// letters with a vowel in the second or third position.
fn acceptable(word: &[char], remove: usize) -> bool {
    let Some(remaining) = word.len().checked_sub(remove) else {
        return false;
    };
    if is_vowel(word[0]) {
        remaining >= 2
    } else {
        remaining >= 3 && (is_vowel(word[1]) || is_vowel(word[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(word: &str) -> String {
        LancasterStemmer::new().stem(word)
    }

    #[test]
    fn whole_table_parses() {
        let parsed: usize = DEFAULT_TABLE.values().map(Vec::len).sum();
        assert_eq!(parsed, DEFAULT_RULES.len());
    }

    #[test]
    fn parses_rule_parts() {
        let rule = Rule::parse("deec2ss.").unwrap();
        assert_eq!(rule.ending, "ceed");
        assert_eq!(rule.remove, 2);
        assert_eq!(rule.append, "ss");
        assert!(rule.stop);
        assert!(!rule.intact_only);

        let rule = Rule::parse("s*1>").unwrap();
        assert!(rule.intact_only);
        assert!(!rule.stop);
        assert!(Rule::parse("bogus").is_none());
    }

    #[test]
    fn running_and_runs_share_a_stem() {
        assert_eq!(stem("running"), "run");
        assert_eq!(stem("runs"), "run");
        assert_eq!(stem("ran"), "ran");
    }

    #[test]
    fn strips_aggressively() {
        assert_eq!(stem("generously"), "gen");
        assert_eq!(stem("maximum"), "maxim");
        assert_eq!(stem("presumably"), "presum");
    }

    #[test]
    fn leaves_short_and_non_alpha_alone() {
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("."), ".");
        assert_eq!(stem("42"), "42");
        assert_eq!(stem(""), "");
    }
}
