//! Plain-text rendering of service responses for the terminal.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Operation;
use crate::backend::LemmaPair;
use crate::service::schema::{
    LemmatizeResponse, NerResponse, PosTagResponse, ProcessAllResponse, StemResponse,
    TokenizeResponse,
};

const NONE_FOUND: &str = "(none found)";
const CLASSIC: &str = "nltk";
const PIPELINE: &str = "spacy";

/// Render the raw JSON answer to `op`.
pub fn render(op: Operation, value: &Value) -> Result<String> {
    Ok(match op {
        Operation::Tokenize => tokenize(&decode(value)?),
        Operation::Lemmatize => lemmatize(&decode(value)?),
        Operation::Stem => stem(&decode(value)?),
        Operation::PosTag => pos_tag(&decode(value)?),
        Operation::Ner => ner(&decode(value)?),
        Operation::ProcessAll => process_all(&decode(value)?),
    })
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T> {
    serde_json::from_value(value.clone()).context("unexpected response shape")
}

pub fn tokenize(resp: &TokenizeResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "sentences: {} {} / {} {}",
        CLASSIC,
        resp.nltk.sentences.len(),
        PIPELINE,
        resp.spacy.sentences.len()
    );
    out.push_str(&columns(
        &numbered(&resp.nltk.sentences),
        &numbered(&resp.spacy.sentences),
    ));
    let _ = writeln!(
        out,
        "\ntokens: {} {} / {} {}",
        CLASSIC,
        resp.nltk.words.len(),
        PIPELINE,
        resp.spacy.tokens.len()
    );
    out.push_str(&columns(&resp.nltk.words, &resp.spacy.tokens));
    out
}

pub fn lemmatize(resp: &LemmatizeResponse) -> String {
    let mut out = String::from("changed lemmas:\n");
    let classic = changes(&resp.nltk_pairs);
    let pipeline = changes(&resp.spacy_pairs);
    out.push_str(&columns(&classic, &pipeline));
    out.push('\n');
    let _ = writeln!(out, "{CLASSIC}: {}", resp.nltk_lemmas.join(" "));
    let _ = writeln!(out, "{PIPELINE}: {}", resp.spacy_lemmas.join(" "));
    out
}

pub fn stem(resp: &StemResponse) -> String {
    let rows: Vec<Vec<String>> = resp
        .comparison
        .iter()
        .map(|r| {
            vec![
                r.original.clone(),
                r.porter.clone(),
                r.lancaster.clone(),
                r.snowball.clone(),
            ]
        })
        .collect();
    table(&["word", "porter", "lancaster", "snowball"], &rows)
}

pub fn pos_tag(resp: &PosTagResponse) -> String {
    let classic: Vec<String> = resp
        .nltk
        .iter()
        .map(|t| format!("{}/{}", t.text, t.pos))
        .collect();
    let pipeline: Vec<String> = resp
        .spacy
        .iter()
        .map(|t| match &t.explanation {
            Some(explanation) => format!("{}/{} {} ({explanation})", t.text, t.pos, t.tag),
            None => format!("{}/{} {}", t.text, t.pos, t.tag),
        })
        .collect();
    columns(&classic, &pipeline)
}

pub fn ner(resp: &NerResponse) -> String {
    let classic: Vec<String> = resp
        .nltk
        .iter()
        .map(|e| format!("{} [{}]", e.text, e.kind))
        .collect();
    let pipeline: Vec<String> = resp
        .spacy
        .iter()
        .map(|e| format!("{} [{}] {}..{}", e.text, e.kind, e.start, e.end))
        .collect();
    columns(&or_none(classic), &or_none(pipeline))
}

pub fn process_all(resp: &ProcessAllResponse) -> String {
    [
        ("Tokenization", tokenize(&resp.tokenization)),
        ("Lemmatization", lemmatize(&resp.lemmatization)),
        ("Stemming", stem(&resp.stemming)),
        ("POS tagging", pos_tag(&resp.pos_tagging)),
        ("Named entities", ner(&resp.ner)),
    ]
    .iter()
    .map(|(title, body)| format!("== {title} ==\n{body}"))
    .collect::<Vec<_>>()
    .join("\n")
}

fn changes(pairs: &[LemmaPair]) -> Vec<String> {
    or_none(
        pairs
            .iter()
            .map(|p| format!("{} -> {}", p.original, p.lemma))
            .collect(),
    )
}

fn or_none(items: Vec<String>) -> Vec<String> {
    if items.is_empty() {
        vec![NONE_FOUND.to_string()]
    } else {
        items
    }
}

fn numbered(items: &[String]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {s}", i + 1))
        .collect()
}

/// Two engine columns side by side; the shorter one is padded with blanks.
fn columns(classic: &[String], pipeline: &[String]) -> String {
    let len = classic.len().max(pipeline.len());
    let rows: Vec<Vec<String>> = (0..len)
        .map(|i| {
            vec![
                classic.get(i).cloned().unwrap_or_default(),
                pipeline.get(i).cloned().unwrap_or_default(),
            ]
        })
        .collect();
    table(&[CLASSIC, PIPELINE], &rows)
}

/// Left-aligned table with a header rule. Widths count chars, not bytes.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::schema::{ClassicEntity, StemRow};

    #[test]
    fn table_aligns_unicode_cells() {
        let rows = vec![vec!["café".to_string(), "x".to_string()]];
        let out = table(&["a", "b"], &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a     b");
        assert_eq!(lines[1], "----  -");
        assert_eq!(lines[2], "café  x");
    }

    #[test]
    fn columns_pad_shorter_side() {
        let out = columns(&["one".into(), "two".into()], &["uno".into()]);
        assert_eq!(out.lines().count(), 4);
        assert_eq!(out.lines().last(), Some("two"));
    }

    #[test]
    fn empty_entity_lists_say_none_found() {
        let out = ner(&NerResponse {
            nltk: vec![ClassicEntity {
                text: "Ram".into(),
                kind: "PERSON".into(),
            }],
            spacy: vec![],
        });
        assert!(out.contains("Ram [PERSON]"));
        assert!(out.contains(NONE_FOUND));
    }

    #[test]
    fn stem_table_has_one_row_per_word() {
        let out = stem(&StemResponse {
            original: vec!["running".into()],
            porter_stems: vec!["run".into()],
            lancaster_stems: vec!["run".into()],
            snowball_stems: vec!["run".into()],
            comparison: vec![StemRow {
                original: "running".into(),
                porter: "run".into(),
                lancaster: "run".into(),
                snowball: "run".into(),
            }],
        });
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("word"));
    }

    #[test]
    fn wrong_shape_is_an_error() {
        let value = serde_json::json!({"unexpected": true});
        assert!(render(Operation::Stem, &value).is_err());
    }
}
