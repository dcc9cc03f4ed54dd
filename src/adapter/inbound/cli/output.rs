//! Terminal output for the snippetbox CLI.
//!
//! Every command renders in one of three modes. `Text` prints labelled,
//! colored lines for a person at a terminal. `Quiet` prints only the data
//! asked for (an id, a body, tab-separated rows). `Json` prints a single JSON
//! document per command; the text helpers are silent in that mode.
//!
//! All stdout writes go through [`write_line`], which treats a closed pipe
//! (`snippetbox latest | head -1`) as the end of output rather than a panic.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::{OwoColorize, Stream};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::warn;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Text,
    Quiet,
    Json,
}

impl Mode {
    /// Resolve the global `--json` / `--quiet` flags. JSON wins.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Self::Json,
            (false, true) => Self::Quiet,
            (false, false) => Self::Text,
        }
    }
}

static MODE: OnceLock<Mode> = OnceLock::new();

/// Set the output mode. Only the first call takes effect.
pub fn configure(mode: Mode) {
    let _ = MODE.set(mode);
}

fn mode() -> Mode {
    MODE.get().copied().unwrap_or_default()
}

#[must_use]
pub fn is_json() -> bool {
    mode() == Mode::Json
}

#[must_use]
pub fn is_quiet() -> bool {
    mode() == Mode::Quiet
}

/// Write one line, treating a closed reader as success.
///
/// # Errors
/// Any I/O error other than `BrokenPipe`.
pub fn write_line(out: &mut impl Write, line: impl Display) -> io::Result<()> {
    match writeln!(out, "{line}") {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn stdout_line(line: impl Display) {
    if let Err(e) = write_line(&mut io::stdout().lock(), line) {
        warn!(error = %e, "Failed to write to stdout");
    }
}

fn text_line(line: impl Display) {
    if mode() == Mode::Text {
        stdout_line(line);
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    text_line(format_args!(
        "  {:<12} {}",
        label.if_supports_color(Stream::Stdout, |l| l.dimmed()),
        value
    ));
}

pub fn success(message: &str) {
    text_line(format_args!(
        "  {} {}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green()),
        message
    ));
}

/// Print an error to stderr. Shown in every mode; JSON mode gets an object.
pub fn error(message: &str) {
    let line = if is_json() {
        serde_json::json!({ "error": message }).to_string()
    } else {
        format!(
            "  {} {}",
            "×".if_supports_color(Stream::Stderr, |s| s.red()),
            message
        )
    };
    let _ = write_line(&mut io::stderr().lock(), line);
}

pub fn section(title: &str) {
    text_line("");
    text_line(title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

pub fn note(message: &str) {
    text_line(format_args!(
        "  {}",
        message.if_supports_color(Stream::Stdout, |m| m.dimmed())
    ));
}

/// Print a hint with "hint:" prefix.
pub fn hint(message: &str) {
    text_line(format_args!(
        "  {}: {}",
        "hint".if_supports_color(Stream::Stdout, |h| h.cyan()),
        message.if_supports_color(Stream::Stdout, |m| m.dimmed())
    ));
}

/// Print multiple lines of content, each indented.
pub fn lines(content: &str) {
    for line in content.lines() {
        text_line(format_args!("  {line}"));
    }
}

/// Render rows as a rounded table.
pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    lines(&table.to_string());
}

/// Print data the user asked for, unindented, in text and quiet modes.
pub fn raw(content: impl Display) {
    if !is_json() {
        stdout_line(content);
    }
}

/// Print the command's JSON document.
pub fn json_output(value: serde_json::Value) {
    stdout_line(value);
}

/// Format a dimmed value for a [`field`].
pub fn muted(value: impl Display) -> String {
    value
        .if_supports_color(Stream::Stdout, |v| v.dimmed())
        .to_string()
}
