//! `Emotone` - tone-matched emoji suggestions for Korean messages
//!
//! Built with Rust, clap, and the rule pipeline in `emotone-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod clipboard;
mod message;
mod model;
mod view;

use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use emotone_core::{MessageVariant, RecipientCategory, generate_suggestions};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use message::Message;
use model::AppSettings;
use view::{Notification, notify, view_header, view_help, view_json, view_suggestions};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emotone=warn,emotone_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings_path = cli.config.clone().unwrap_or_else(AppSettings::default_path);
    let mut settings = AppSettings::load(&settings_path).await?;

    if cli.set_default
        && let Some(recipient) = cli.recipient
    {
        settings.default_recipient = recipient;
        settings.save(&settings_path).await?;
    }

    let mut app = Emotone::new(settings, cli.recipient, cli.json, cli.no_delay);
    info!(recipient = %app.recipient, "Starting Emotone");

    match cli.message {
        Some(text) => app.run_once(&text, cli.copy).await,
        None => app.run_interactive().await,
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Application state.
struct Emotone {
    /// Loaded settings.
    settings: AppSettings,
    /// Recipient for the next submission.
    recipient: RecipientCategory,
    /// Pause before showing results.
    delay: Duration,
    /// Print JSON instead of the list view.
    json: bool,
    /// Last submitted message, trimmed.
    original_message: String,
    /// Suggestions for the last submitted message.
    suggestions: Vec<MessageVariant>,
}

impl Emotone {
    /// Create new application instance.
    fn new(
        settings: AppSettings,
        recipient: Option<RecipientCategory>,
        json: bool,
        no_delay: bool,
    ) -> Self {
        let delay = if no_delay {
            Duration::ZERO
        } else {
            Duration::from_millis(settings.response_delay_ms)
        };
        Self {
            recipient: recipient.unwrap_or(settings.default_recipient),
            settings,
            delay,
            json,
            original_message: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Handles one message and prints its result.
    async fn run_once(&mut self, text: &str, copy: Option<usize>) -> anyhow::Result<ExitCode> {
        if !self.submit(text).await? {
            return Ok(ExitCode::FAILURE);
        }
        if let Some(index) = copy
            && !self.copy(index)
        {
            return Ok(ExitCode::FAILURE);
        }
        Ok(ExitCode::SUCCESS)
    }

    /// Reads messages and commands from stdin until EOF or `:quit`.
    async fn run_interactive(&mut self) -> anyhow::Result<ExitCode> {
        let interactive = std::io::stdin().is_terminal();
        if interactive {
            println!("{}", view_header(self.recipient));
            println!("{}\n", view_help());
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            if interactive {
                write_prompt(&mut std::io::stdout(), self.recipient)?;
            }
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.update(Message::parse(&line)).await? == Flow::Quit {
                break;
            }
        }

        Ok(ExitCode::SUCCESS)
    }

    /// Update state based on message.
    async fn update(&mut self, message: Message) -> anyhow::Result<Flow> {
        match message {
            Message::Submit(text) => {
                self.submit(&text).await?;
            }
            Message::SetRecipient(recipient) => {
                self.recipient = recipient;
                println!("{}", view_header(recipient));
            }
            Message::Copy(index) => {
                self.copy(index);
            }
            Message::Reset => {
                self.original_message.clear();
                self.suggestions.clear();
            }
            Message::Help => println!("{}", view_help()),
            Message::Quit => return Ok(Flow::Quit),
            Message::Invalid(reason) => notify(&Notification::Error(reason)),
        }
        Ok(Flow::Continue)
    }

    /// Generates and prints suggestions. Returns false if the input was rejected.
    async fn submit(&mut self, text: &str) -> anyhow::Result<bool> {
        let variants = match generate_suggestions(text, self.recipient) {
            Ok(variants) => variants,
            Err(err) => {
                notify(&Notification::Error(err.user_message().to_string()));
                return Ok(false);
            }
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.original_message = text.trim().to_string();
        self.suggestions = variants;

        if self.json {
            println!("{}", view_json(&self.suggestions)?);
        } else {
            print!(
                "{}",
                view_suggestions(
                    &self.original_message,
                    &self.suggestions,
                    self.settings.show_corrections
                )
            );
        }
        Ok(true)
    }

    /// Copies the n-th (1-based) suggestion. Returns false on failure.
    fn copy(&self, index: usize) -> bool {
        let Some(variant) = index.checked_sub(1).and_then(|i| self.suggestions.get(i)) else {
            notify(&Notification::Error(format!("{index}번 추천 메시지가 없습니다")));
            return false;
        };

        match clipboard::copy_text(&variant.message) {
            Ok(()) => {
                notify(&Notification::copied(variant.label));
                true
            }
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                notify(&Notification::copy_failed());
                false
            }
        }
    }
}

/// Writes the input prompt and flushes it so it shows before the read.
fn write_prompt(out: &mut impl Write, recipient: RecipientCategory) -> std::io::Result<()> {
    write!(out, "{} > ", recipient.icon())?;
    out.flush()
}
