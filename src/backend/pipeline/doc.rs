use std::ops::Range;

/// One token of an analysed document. Offsets are counted in characters
/// (Unicode scalar values) and the byte range is kept for slicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub bytes: Range<usize>,
    pub tag: &'static str,
    pub pos: &'static str,
    pub lemma: String,
}

impl Token {
    pub fn new(text: &str, bytes: Range<usize>, chars: Range<usize>) -> Self {
        Self {
            text: text.to_string(),
            start: chars.start,
            end: chars.end,
            bytes,
            tag: "",
            pos: "",
            lemma: String::new(),
        }
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    pub fn is_punct(&self) -> bool {
        self.pos == "PUNCT"
    }
}

/// A labelled run of tokens, `tokens` end exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntity {
    pub tokens: Range<usize>,
    pub label: &'static str,
}

/// The annotated form of a request text.
#[derive(Debug, Clone)]
pub struct Doc<'t> {
    pub text: &'t str,
    pub tokens: Vec<Token>,
    /// Token ranges, one per sentence.
    pub sentences: Vec<Range<usize>>,
    pub entities: Vec<DocEntity>,
}

impl<'t> Doc<'t> {
    /// Source text covered by a run of tokens, including inner whitespace.
    pub fn slice(&self, tokens: Range<usize>) -> &'t str {
        if tokens.is_empty() {
            return "";
        }
        let start = self.tokens[tokens.start].bytes.start;
        let end = self.tokens[tokens.end - 1].bytes.end;
        &self.text[start..end]
    }

    /// Character offsets of a run of tokens.
    pub fn char_span(&self, tokens: Range<usize>) -> Range<usize> {
        self.tokens[tokens.start].start..self.tokens[tokens.end - 1].end
    }

    pub fn sentence_texts(&self) -> Vec<&'t str> {
        self.sentences.iter().map(|s| self.slice(s.clone())).collect()
    }
}

/// Converts increasing byte offsets into character offsets in one pass.
pub struct CharCursor<'t> {
    text: &'t str,
    byte: usize,
    char: usize,
}

impl<'t> CharCursor<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            byte: 0,
            char: 0,
        }
    }

    /// Character offset of `byte`, which must not be behind the previous call.
    pub fn advance_to(&mut self, byte: usize) -> usize {
        if byte > self.byte {
            self.char += self.text[self.byte..byte].chars().count();
            self.byte = byte;
        }
        self.char
    }
}
