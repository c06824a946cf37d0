//! The Porter stemmer with the refinements of the NLTK variant: a pool of
//! irregular forms, untouched words of one or two letters, and the
//! `-fulli` / `-lessli` rules.
//!
//! The buffer holds chars, so words outside ASCII are stemmed without ever
//! splitting a character.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::Stemmer;

/// Forms returned as-is or mapped straight to their stem.
const IRREGULAR: &[(&str, &str)] = &[
    ("skies", "sky"),
    ("sky", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

static IRREGULAR_MAP: Lazy<HashMap<&str, &str>> =
    Lazy::new(|| IRREGULAR.iter().copied().collect());

#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn name(&self) -> &'static str {
        "porter"
    }

    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some(stem) = IRREGULAR_MAP.get(lower.as_str()) {
            return stem.to_string();
        }
        if lower.chars().count() <= 2 {
            return lower;
        }
        let mut state = State::new(lower.chars().collect());
        state.step1ab();
        state.step1c();
        state.step2();
        state.step3();
        state.step4();
        state.step5();
        state.finish()
    }
}

/// Working buffer. `k` is the index of the last live char, `j` a scratch
/// offset set by `ends` to the char before the matched suffix.
struct State {
    b: Vec<char>,
    k: isize,
    j: isize,
}

impl State {
    fn new(b: Vec<char>) -> Self {
        let k = b.len() as isize - 1;
        Self { b, k, j: 0 }
    }

    fn at(&self, i: isize) -> char {
        self.b[i as usize]
    }

    fn cons(&self, i: isize) -> bool {
        match self.at(i) {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `b[0..=j]`.
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.cons(i))
    }

    fn double_cons(&self, i: isize) -> bool {
        i >= 1 && self.at(i) == self.at(i - 1) && self.cons(i)
    }

    /// consonant-vowel-consonant ending at `i`, where the last consonant is
    /// not w, x or y. A two-letter vowel-consonant stem also counts.
    fn cvc(&self, i: isize) -> bool {
        if i == 1 {
            return !self.cons(0) && self.cons(1);
        }
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.at(i), 'w' | 'x' | 'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        let len = suffix.chars().count() as isize;
        if len > self.k + 1 {
            return false;
        }
        let start = (self.k - len + 1) as usize;
        if !self.b[start..=self.k as usize].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.j = self.k - len;
        true
    }

    fn set_to(&mut self, s: &str) {
        let start = (self.j + 1) as usize;
        self.b.truncate(start);
        self.b.extend(s.chars());
        self.k = self.j + s.chars().count() as isize;
    }

    fn replace_if_measured(&mut self, s: &str) {
        if self.m() > 0 {
            self.set_to(s);
        }
    }

    /// Truncate the buffer to the live region.
    fn shrink(&mut self) {
        self.b.truncate((self.k + 1) as usize);
    }

    /// Plurals and -ed / -ing. Four-letter -ies / -ied words keep `ie`.
    fn step1ab(&mut self) {
        if self.at(self.k) == 's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to(if self.k == 3 { "ie" } else { "i" });
            } else if self.at(self.k - 1) != 's' {
                self.k -= 1;
            }
            self.shrink();
        }
        if self.ends("ied") {
            self.set_to(if self.k == 3 { "ie" } else { "i" });
            return;
        }
        if self.ends("eed") {
            if self.m() > 0 {
                self.k -= 1;
                self.shrink();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            self.shrink();
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_cons(self.k) {
                if !matches!(self.at(self.k), 'l' | 's' | 'z') {
                    self.k -= 1;
                    self.shrink();
                }
            } else {
                self.j = self.k;
                if self.m() == 1 && self.cvc(self.k) {
                    self.b.push('e');
                    self.k += 1;
                }
            }
        }
    }

    /// Terminal y becomes i after a consonant, unless the stem is a single
    /// letter.
    fn step1c(&mut self) {
        if self.ends("y") && self.j >= 1 && self.cons(self.j) {
            let k = self.k as usize;
            self.b[k] = 'i';
        }
    }

    fn step2(&mut self) {
        if self.k < 1 {
            return;
        }
        let rules: &[(&str, &str)] = match self.at(self.k - 1) {
            'a' => &[("ational", "ate"), ("tional", "tion")],
            'c' => &[("enci", "ence"), ("anci", "ance")],
            'e' => &[("izer", "ize")],
            'l' => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
                ("fulli", "ful"),
                ("lessli", "less"),
            ],
            'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            's' => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            'g' => &[("logi", "log")],
            _ => &[],
        };
        self.apply_first(rules);
    }

    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.at(self.k) {
            'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            'i' => &[("iciti", "ic")],
            'l' => &[("ical", "ic"), ("ful", "")],
            's' => &[("ness", "")],
            _ => &[],
        };
        self.apply_first(rules);
    }

    fn apply_first(&mut self, rules: &[(&str, &str)]) {
        for &(suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Drop -ant, -ence, -ment ... when m > 1.
    fn step4(&mut self) {
        if self.k < 1 {
            return;
        }
        let suffixes: &[&str] = match self.at(self.k - 1) {
            'a' => &["al"],
            'c' => &["ance", "ence"],
            'e' => &["er"],
            'i' => &["ic"],
            'l' => &["able", "ible"],
            'n' => &["ant", "ement", "ment", "ent"],
            'o' => &["ion", "ou"],
            's' => &["ism"],
            't' => &["ate", "iti"],
            'u' => &["ous"],
            'v' => &["ive"],
            'z' => &["ize"],
            _ => return,
        };
        let mut matched = false;
        for suffix in suffixes {
            if self.ends(suffix) {
                if *suffix == "ion" && !(self.j >= 0 && matches!(self.at(self.j), 's' | 't')) {
                    continue;
                }
                matched = true;
                break;
            }
        }
        if matched && self.m() > 1 {
            self.k = self.j;
            self.shrink();
        }
    }

    /// Final -e and double l.
    fn step5(&mut self) {
        self.j = self.k;
        if self.at(self.k) == 'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
                self.shrink();
            }
        }
        if self.at(self.k) == 'l' && self.double_cons(self.k) {
            self.j = self.k;
            if self.m() > 1 {
                self.k -= 1;
                self.shrink();
            }
        }
    }

    fn finish(mut self) -> String {
        self.shrink();
        self.b.into_iter().collect()
    }
}
