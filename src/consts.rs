//! Project-wide constants.

use std::path::PathBuf;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Version string reported by `GET /`.
pub const API_VERSION: &str = "1.0.0";

pub const API_TITLE: &str = "NLP Preprocessing API";

pub const API_DESCRIPTION: &str = "API for text preprocessing functions including tokenization, \
     lemmatization, stemming, POS tagging, and NER";

pub const USAGE_HINT: &str = "Send a POST request with JSON payload: {'text': 'Your text here'}";

/// Every route the service answers, in display order.
pub const ENDPOINTS: &[&str] = &[
    "/tokenize",
    "/lemmatize",
    "/stem",
    "/pos-tag",
    "/ner",
    "/process-all",
];

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Where the client looks for the service when nothing is configured.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";

/// Client request timeout.
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 10;

/// Largest JSON body the service accepts.
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Name of the word-list resource both backends validate lemmas against.
pub const WORDS_RESOURCE: &str = "words";

pub const WORDS_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

/// Text the client offers before the user has typed anything.
pub const SAMPLE_TEXT: &str = "Natural Language Processing (NLP) is a subfield of artificial \
     intelligence. It helps computers understand, interpret, and manipulate human language. \
     The goal of NLP is to bridge the gap between human communication and computer \
     understanding. Dr. Ram developed a new algorithm at Kathmandu University.";

/// Default resource directory: `~/.lexis/data`.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lexis")
        .join("data")
}

/// Format a number with comma separators (e.g. 1,234,567).
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}
