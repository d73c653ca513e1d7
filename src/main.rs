// Obsidian Clipper
// Turns a shared URL or text into a Markdown bullet in the daily note

mod api;
mod features;
mod models;
mod utils;

use std::env;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use crate::features::handler::ShareRequestHandler;
use crate::features::sink::OsOpenSink;
use crate::models::payload::{ItemKind, Outcome, ProvidedItem};

/// Build the attachment list the way a share sheet would:
/// an absolute URL plus an optional title hint, or plain text
fn items_from_args(content: &str, hint: Option<&str>) -> Vec<ProvidedItem> {
    let mut items = Vec::new();

    if Url::parse(content).is_ok() {
        items.push(ProvidedItem::new(ItemKind::Url, content));
        if let Some(hint) = hint {
            items.push(ProvidedItem::new(ItemKind::RichText, hint));
        }
    } else {
        items.push(ProvidedItem::new(ItemKind::PlainText, content));
    }

    items
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "obsidian_clipper=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let mut args = env::args().skip(1);
    let content = match args.next() {
        Some(content) => content,
        None => {
            eprintln!("usage: obsidian-clipper <url-or-text> [title hint]");
            std::process::exit(2);
        }
    };
    let hint = args.next();

    // Build HTTP client for title lookups
    let http_client = reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client");

    let items = items_from_args(&content, hint.as_deref());
    let sink = OsOpenSink;
    let handler = ShareRequestHandler::new(&http_client, &sink);

    match handler.handle(&items).await {
        Outcome::Done(line) => info!("Appended to daily note: {}", line),
        Outcome::NoOp => info!("Nothing to share"),
    }
}
