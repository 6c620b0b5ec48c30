// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `cink` command: resolves settings, then filters files or stdin to
//! stdout.

use std::io;
use std::path::{Path, PathBuf};

use cink_lexer::ParseMode;
use thiserror::Error;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

use crate::ansi::{incomplete_tail_len, strip_control_sequences};
use crate::cli::Cli;
use crate::config::{load_config, ConfigError, Overrides, Settings};
use crate::demo;
use crate::highlighter::Highlighter;
use crate::output_diagnostic::print_note;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// What to do with each chunk of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Highlight,
    Strip,
    PassThrough,
}

/// A configured filter.
#[derive(Debug)]
pub struct App {
    highlighter: Highlighter,
    settings: Settings,
    action: Action,
}

impl App {
    /// Resolve configuration and build the theme.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let file = load_config(cli.config.as_deref())?;
        let overrides = Overrides {
            theme: cli.theme.clone(),
            mode: cli.mode.map(ParseMode::from),
            force: cli.force,
        };
        let settings = Settings::resolve(file, overrides);
        let theme = settings.build_theme()?;

        let action = if cli.strip {
            Action::Strip
        } else if cli.no_color || crate::env::no_color() {
            Action::PassThrough
        } else {
            Action::Highlight
        };

        Ok(App {
            highlighter: Highlighter::with_theme(theme),
            settings,
            action,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Transform one chunk of input.
    ///
    /// With the default auto mode the content check applies; `force` or a
    /// pinned mode skips it.
    pub fn process(&self, input: &str) -> String {
        match self.action {
            Action::Strip => strip_control_sequences(input),
            Action::PassThrough => input.to_string(),
            Action::Highlight => {
                if self.settings.force || self.settings.mode != ParseMode::Auto {
                    self.highlighter
                        .highlight_with_mode(input, self.settings.mode)
                } else {
                    self.highlighter.highlight(input)
                }
            }
        }
    }

    /// Text produced by `--demo`, respecting `--strip` / `--no-color`.
    pub fn demo(&self, kind: crate::cli::DemoKind) -> String {
        let rendered = demo::render(kind, &self.highlighter);
        match self.action {
            Action::Highlight => rendered,
            Action::Strip | Action::PassThrough => strip_control_sequences(&rendered),
        }
    }

    fn report(&self) {
        let settings = &self.settings;
        match &settings.source {
            Some(path) => print_note(format_args!("config: {}", path.display())),
            None => print_note("config: none"),
        }
        print_note(format_args!("theme: {}", self.highlighter.theme().name()));
        print_note(format_args!("mode: {}", settings.mode));
        print_note(format_args!("force: {}", settings.force));
    }
}

/// Run the command described by `cli`.
///
/// A closed stdout (e.g. piping into `head`) ends the run quietly.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    match execute(&cli).await {
        Err(AppError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

async fn execute(cli: &Cli) -> Result<(), AppError> {
    let mut stdout = tokio::io::stdout();

    if cli.list_themes {
        stdout.write_all(demo::theme_list().as_bytes()).await?;
        stdout.flush().await?;
        return Ok(());
    }

    let app = App::from_cli(cli)?;
    if cli.verbose {
        app.report();
    }

    if let Some(kind) = cli.demo {
        stdout.write_all(app.demo(kind).as_bytes()).await?;
        stdout.flush().await?;
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut stdin = BufReader::new(tokio::io::stdin());
        if cli.stream {
            stream(&app, stdin, &mut stdout).await?;
        } else {
            let mut input = Vec::new();
            stdin.read_to_end(&mut input).await?;
            write_chunk(&app, &input, &mut stdout).await?;
        }
        return Ok(());
    }

    for path in &cli.files {
        if cli.verbose {
            print_note(format_args!("reading {}", path.display()));
        }
        if cli.stream {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|source| read_error(path, source))?;
            stream(&app, BufReader::new(file), &mut stdout).await?;
        } else {
            let input = tokio::fs::read(path)
                .await
                .map_err(|source| read_error(path, source))?;
            write_chunk(&app, &input, &mut stdout).await?;
        }
    }
    Ok(())
}

fn read_error(path: &Path, source: io::Error) -> AppError {
    AppError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Process the whole input at once.
async fn write_chunk<W>(app: &App, input: &[u8], out: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let text = String::from_utf8_lossy(input);
    out.write_all(app.process(&text).as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

/// Process input as it arrives.
///
/// Every complete line goes through [`App::process`] on its own and is
/// flushed right away. A partial line left in the buffer is processed too,
/// so prompts without a trailing newline show up immediately. Bytes that
/// would split a UTF-8 character or a control sequence wait for the next
/// read.
async fn stream<R, W>(app: &App, mut reader: R, out: &mut W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut pending = Vec::new();
    loop {
        let chunk = reader.fill_buf().await?;
        if chunk.is_empty() {
            return write_lines(app, &pending, out).await;
        }
        let read = chunk.len();
        pending.extend_from_slice(chunk);
        reader.consume(read);

        let held = incomplete_utf8_len(&pending).max(incomplete_tail_len(&pending));
        let ready = pending.len() - held;
        if ready > 0 {
            write_lines(app, &pending[..ready], out).await?;
            pending.drain(..ready);
        }
    }
}

async fn write_lines<W>(app: &App, bytes: &[u8], out: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let text = String::from_utf8_lossy(bytes);
    for line in text.split_inclusive('\n') {
        out.write_all(app.process(line).as_bytes()).await?;
        out.flush().await?;
    }
    Ok(())
}

/// Trailing bytes of a UTF-8 character cut off by the end of `bytes`.
fn incomplete_utf8_len(bytes: &[u8]) -> usize {
    match std::str::from_utf8(bytes) {
        Err(e) if e.error_len().is_none() => bytes.len() - e.valid_up_to(),
        _ => 0,
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
