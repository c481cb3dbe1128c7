//! Command-line front end for the demo binary.

use crate::config::{Config, EditorOptions};
use crate::session::{self, Outcome};
use crate::screen::TerminalScreen;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status after the user cancelled.
pub const EXIT_CANCELLED: u8 = 1;
/// Exit status after an interrupt or terminal failure.
pub const EXIT_ABORTED: u8 = 130;

/// Edit a block of text in a word-wrapping terminal box
#[derive(Parser, Debug, Default)]
#[command(name = "wrapedit", version, about)]
pub struct Cli {
    /// Title shown above the text area
    #[arg(long)]
    pub title: Option<String>,

    /// Initial text
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the initial text from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Text area height
    #[arg(long)]
    pub rows: Option<u16>,

    /// Text area width
    #[arg(long)]
    pub cols: Option<u16>,

    /// Top row of the widget
    #[arg(long)]
    pub row: Option<u16>,

    /// Left column of the widget
    #[arg(long)]
    pub col: Option<u16>,

    /// Maximum wrapped rows (0 = unlimited, 1 = single-line entry)
    #[arg(long, value_name = "N")]
    pub max_rows: Option<usize>,

    /// Do not echo the text
    #[arg(long)]
    pub password: bool,

    /// Draw without a border
    #[arg(long)]
    pub no_box: bool,
}

impl Cli {
    /// Session options: config defaults, then flags on top.
    pub fn editor_options(&self, config: &Config) -> Result<EditorOptions> {
        let mut options = config.editor_options();

        if let Some(title) = &self.title {
            options.title.clone_from(title);
        }
        if let Some(text) = &self.text {
            options.text.clone_from(text);
        } else if let Some(path) = &self.file {
            options.text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if options.text.ends_with('\n') {
                options.text.pop();
            }
        }
        if let Some(rows) = self.rows {
            options.size.0 = rows;
        }
        if let Some(cols) = self.cols {
            options.size.1 = cols;
        }
        if let Some(row) = self.row {
            options.location.0 = row;
        }
        if let Some(col) = self.col {
            options.location.1 = col;
        }
        if let Some(max_rows) = self.max_rows {
            options.max_rows = max_rows;
        }
        options.password = self.password;
        if self.no_box {
            options.boxed = false;
        }

        options.validate()?;
        Ok(options)
    }
}

/// Install a tracing subscriber when asked to.
///
/// `WRAPEDIT_LOG=<path>` logs to a file, since the terminal is in use;
/// otherwise `RUST_LOG` logs to stderr.
pub fn init_logging() {
    if let Some(path) = std::env::var_os("WRAPEDIT_LOG") {
        use std::fs::File;
        use tracing_subscriber::prelude::*;
        match File::create(&path) {
            Ok(file) => {
                let file_layer = tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false);
                let filter = tracing_subscriber::EnvFilter::new("wrapedit=debug");
                let _ = tracing_subscriber::registry()
                    .with(file_layer.with_filter(filter))
                    .try_init();
            }
            Err(err) => {
                eprintln!("Failed to create log file: {err}");
            }
        }
    } else if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Run one session on the real terminal and report the outcome.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = Config::load().context("Failed to load config")?;
    let options = cli.editor_options(&config)?;

    let screen = TerminalScreen::new().context("Failed to initialize terminal")?;
    let outcome = session::run(screen, options);

    Ok(match outcome {
        Outcome::Saved(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Outcome::Cancelled => ExitCode::from(EXIT_CANCELLED),
        Outcome::Aborted => ExitCode::from(EXIT_ABORTED),
    })
}
