//! Terminal client for the preprocessing service.

pub mod mock;
pub mod render;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use clap::ValueEnum;
use log::debug;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

use crate::banner::print_farewell;
use crate::config::ClientSettings;
use crate::consts::SAMPLE_TEXT;
use crate::error::ErrorBody;
use crate::service::schema::TextRequest;
use crate::spinner::Spinner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Tokenize,
    Lemmatize,
    Stem,
    PosTag,
    Ner,
    ProcessAll,
}

impl Operation {
    /// Menu order.
    pub const ALL: [Operation; 6] = [
        Operation::Tokenize,
        Operation::Lemmatize,
        Operation::Stem,
        Operation::PosTag,
        Operation::Ner,
        Operation::ProcessAll,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            Operation::Tokenize => "/tokenize",
            Operation::Lemmatize => "/lemmatize",
            Operation::Stem => "/stem",
            Operation::PosTag => "/pos-tag",
            Operation::Ner => "/ner",
            Operation::ProcessAll => "/process-all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Tokenize => "tokenization",
            Operation::Lemmatize => "lemmatization",
            Operation::Stem => "stemming",
            Operation::PosTag => "POS tagging",
            Operation::Ner => "named entity recognition",
            Operation::ProcessAll => "all operations",
        }
    }

    /// Parse a menu choice: its 1-based number or its name.
    pub fn from_choice(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::from_str(input.trim_start_matches('/'), true).ok()
    }
}

/// Something that can answer an operation over a text.
#[async_trait]
pub trait Processor: Send + Sync {
    /// The raw JSON response for `op`.
    async fn process(&self, op: Operation, text: &str) -> Result<Value>;
}

/// Talks to a running service over HTTP.
pub struct HttpProcessor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProcessor {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Processor for HttpProcessor {
    async fn process(&self, op: Operation, text: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, op.endpoint());
        debug!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(&TextRequest::new(text))
            .send()
            .await
            .with_context(|| format!("could not reach {}", self.base_url))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.detail)
                .unwrap_or(body);
            bail!("{} ({})", detail, status);
        }
        Ok(resp.json().await?)
    }
}

/// Client state carried between prompts.
pub struct Session {
    processor: Box<dyn Processor>,
    previous_text: Option<String>,
}

impl Session {
    /// A session that offers the sample paragraph until the user types text.
    pub fn new(processor: Box<dyn Processor>) -> Self {
        Self::with_text(processor, Some(SAMPLE_TEXT.to_string()))
    }

    pub fn with_text(processor: Box<dyn Processor>, previous_text: Option<String>) -> Self {
        Self {
            processor,
            previous_text,
        }
    }

    /// Text to send for `input`: what was typed, or the previous text when
    /// the input is blank. `None` when there is nothing to reuse.
    pub fn resolve_text(&mut self, input: &str) -> Option<String> {
        let input = input.trim();
        if !input.is_empty() {
            self.previous_text = Some(input.to_string());
        }
        self.previous_text.clone()
    }

    /// Call the service and render its answer.
    pub async fn call(&self, op: Operation, text: &str) -> Result<String> {
        let value = self.processor.process(op, text).await?;
        render::render(op, &value)
    }
}

/// Run one operation and print the result. Errors are returned so scripts
/// see a non-zero exit.
pub async fn one_shot(
    processor: &dyn Processor,
    op: Operation,
    text: Option<&str>,
    json: bool,
) -> Result<()> {
    let text = text.map(str::trim).filter(|t| !t.is_empty()).unwrap_or(SAMPLE_TEXT);
    let value = processor.process(op, text).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render::render(op, &value)?);
    }
    Ok(())
}

/// The interactive loop. Ctrl+D, Ctrl+C at a prompt, or `quit` exits;
/// Ctrl+C while a request is in flight cancels only that request.
pub async fn interactive(mut session: Session) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_menu();

    loop {
        let Some(choice) = prompt(&mut lines, "\nlexis> operation [1-6, name, quit]: ").await?
        else {
            break;
        };
        let choice = choice.trim();
        if choice.is_empty() {
            continue;
        }
        if choice == "quit" || choice == "exit" {
            break;
        }
        let Some(op) = Operation::from_choice(choice) else {
            eprintln!("unknown operation: {choice}");
            print_menu();
            continue;
        };

        let Some(input) = prompt(&mut lines, "text (enter to reuse previous): ").await? else {
            break;
        };
        let Some(text) = session.resolve_text(&input) else {
            eprintln!("warning: no text to process, type some first");
            continue;
        };

        let spinner = Spinner::start(op.label());
        let outcome = tokio::select! {
            result = session.call(op, &text) => Some(result),
            _ = tokio::signal::ctrl_c() => None,
        };
        let elapsed = spinner.stop().await;
        debug!("{} finished in {elapsed:?}", op.endpoint());

        match outcome {
            Some(Ok(rendered)) => println!("\n{rendered}"),
            Some(Err(e)) => eprintln!("\nerror: {e:#}"),
            None => println!("\ninterrupted"),
        }
    }

    print_farewell();
    Ok(())
}

fn print_menu() {
    println!();
    for (i, op) in Operation::ALL.iter().enumerate() {
        let name = op.to_possible_value().map(|v| v.get_name().to_string());
        println!("  {}. {:<12} {}", i + 1, name.unwrap_or_default(), op.label());
    }
}

/// Print `label` and read one line. `None` on EOF or Ctrl+C.
async fn prompt<R>(lines: &mut Lines<R>, label: &str) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{label}");
    io::stdout().flush()?;
    tokio::select! {
        result = lines.next_line() => match result {
            Ok(line) => {
                if line.is_none() {
                    println!();
                }
                Ok(line)
            }
            Err(e) => Err(e).context("input error"),
        },
        _ = tokio::signal::ctrl_c() => {
            println!();
            Ok(None)
        }
    }
}
