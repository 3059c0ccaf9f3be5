//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use lumina::{Book, Profile};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Turn a library error into the message shown to the user: the server's
/// detail when it sent one, otherwise `fallback`.
pub fn failure(err: lumina::Error, fallback: &str) -> anyhow::Error {
    let message = err.user_message(fallback);
    anyhow::Error::new(err).context(message)
}

/// Render a book as a card.
///
/// The title is always shown. The author line and the summary block only
/// appear when the book has them.
pub fn book_card(book: &Book) -> String {
    let mut card = format!("{}", book.title.bold());

    if let Some(author) = book.author.as_deref().filter(|a| !a.is_empty()) {
        card.push_str(&format!("\n  {}", format!("by {author}").dimmed()));
    }

    if let Some(summary) = book.summary.as_deref().filter(|s| !s.is_empty()) {
        card.push_str(&format!("\n  {summary}"));
    }

    card
}

/// Print profile fields.
pub fn profile(profile: &Profile) {
    field("Email", &profile.email);
    field(
        "Name",
        profile
            .full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("(none)"),
    );
}
