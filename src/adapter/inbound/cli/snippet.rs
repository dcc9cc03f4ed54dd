//! Handlers for `create`, `view` and `latest`.

use chrono::{DateTime, Utc};
use serde_json::json;
use tabled::Tabled;

use super::command::{CreateArgs, ViewArgs};
use super::output;
use crate::application::SnippetService;
use crate::domain::{Retention, Snippet};
use crate::error::Result;
use crate::port::SnippetStore;

const TITLE_WIDTH: usize = 40;

#[derive(Tabled)]
struct SnippetRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "Expires")]
    expires: String,
}

impl From<&Snippet> for SnippetRow {
    fn from(snippet: &Snippet) -> Self {
        Self {
            id: snippet.id.get(),
            title: truncate(&snippet.title, TITLE_WIDTH),
            created: timestamp(snippet.created),
            expires: timestamp(snippet.expires),
        }
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn truncate(text: &str, max: usize) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let single_line = first_line.len() == text.trim_end_matches('\n').len();
    if single_line && first_line.chars().count() <= max {
        return first_line.to_string();
    }
    let kept: String = first_line.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Execute `create`.
pub async fn execute_create<S: SnippetStore>(
    service: &SnippetService<S>,
    args: &CreateArgs,
) -> Result<()> {
    let retention = Retention::days(args.expires)?;
    let id = service.create(&args.title, &args.content, retention).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "create",
            "id": id,
            "retention_days": retention.as_days(),
        }));
        return Ok(());
    }
    if output::is_quiet() {
        output::raw(id);
        return Ok(());
    }

    output::success(&format!("Created snippet {id}"));
    output::field("Expires in", retention);
    output::hint(&format!("view it with: snippetbox view {id}"));
    Ok(())
}

/// Execute `view`.
pub async fn execute_view<S: SnippetStore>(
    service: &SnippetService<S>,
    args: &ViewArgs,
) -> Result<()> {
    let snippet = service.get(args.id).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "view",
            "snippet": snippet,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        output::raw(&snippet.content);
        return Ok(());
    }

    output::section(&snippet.title);
    output::field("ID", snippet.id);
    output::field("Created", timestamp(snippet.created));
    output::field("Expires", timestamp(snippet.expires));
    output::section("Content");
    output::lines(&snippet.content);
    Ok(())
}

/// Execute `latest`.
pub async fn execute_latest<S: SnippetStore>(service: &SnippetService<S>) -> Result<()> {
    let snippets = service.latest().await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "latest",
            "count": snippets.len(),
            "snippets": snippets,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        for snippet in &snippets {
            output::raw(format_args!("{}\t{}", snippet.id, snippet.title));
        }
        return Ok(());
    }

    output::section("Latest snippets");
    if snippets.is_empty() {
        output::note("(no live snippets)");
        return Ok(());
    }

    output::table(snippets.iter().map(SnippetRow::from));
    Ok(())
}
