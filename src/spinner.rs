//! Progress indicator for in-flight requests.

use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// A spinner drawn on stderr while a request is in flight, so rendered
/// results on stdout stay clean for piping. Nothing is drawn when stderr is
/// not a terminal.
pub struct Spinner {
    started: Instant,
    task: Option<(JoinHandle<()>, watch::Sender<bool>)>,
}

impl Spinner {
    /// Start a spinner labelled with the operation being run.
    pub fn start(label: &str) -> Self {
        let started = Instant::now();
        if !std::io::stderr().is_terminal() {
            return Self {
                started,
                task: None,
            };
        }

        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let label = label.to_string();
        let handle = tokio::spawn(async move {
            for frame in FRAMES.iter().cycle() {
                let elapsed = started.elapsed().as_secs_f32();
                // \x1b[2K clears the line
                eprint!("\x1b[2K\r{frame} {label} ({elapsed:.1}s)");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            started,
            task: Some((handle, cancel_tx)),
        }
    }

    /// Stop the spinner, clear its line and report how long it ran.
    pub async fn stop(self) -> Duration {
        if let Some((handle, cancel)) = self.task {
            let _ = cancel.send(true);
            let _ = handle.await;
        }
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_single_braille_chars() {
        assert!(!FRAMES.is_empty());
        for frame in FRAMES {
            assert_eq!(frame.chars().count(), 1);
        }
    }

    #[tokio::test]
    async fn reports_elapsed_time() {
        let spinner = Spinner::start("tokenization");
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(spinner.stop().await >= Duration::from_millis(100));
    }

    #[tokio::test]
    async fn immediate_stop() {
        let spinner = Spinner::start("stemming");
        spinner.stop().await;
    }
}
