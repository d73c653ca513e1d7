// Share request handling
// Classify, resolve, format, emit; every failure path lands on NoOp

use std::time::Duration;

use tracing::{debug, error, info};
use url::Url;

use crate::features::resolver;
use crate::features::sink::IngestSink;
use crate::models::error::ShareError;
use crate::models::payload::{ItemKind, Outcome, ProvidedItem, SharedPayload};
use crate::utils::config;
use crate::utils::deeplink;
use crate::utils::markdown;

/// Drives one share request from raw attachments to sink delivery
pub struct ShareRequestHandler<'a, S: IngestSink> {
    client: &'a reqwest::Client,
    sink: &'a S,
    grace: Duration,
}

impl<'a, S: IngestSink> ShareRequestHandler<'a, S> {
    pub fn new(client: &'a reqwest::Client, sink: &'a S) -> Self {
        Self {
            client,
            sink,
            grace: config::grace_period(),
        }
    }

    /// Override the completion grace period
    #[allow(dead_code)]
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Process one share request end to end; never panics, never retries
    pub async fn handle(&self, items: &[ProvidedItem]) -> Outcome {
        let payload = match classify(items) {
            Ok(payload) => payload,
            Err(err) => {
                debug!("Share request aborted: {}", err);
                return Outcome::NoOp;
            }
        };

        let markdown = match payload {
            SharedPayload::Url { url, caller_title } => {
                let title = resolver::resolve(self.client, &url, caller_title.as_deref()).await;
                markdown::format_url(url.as_str(), &title)
            }
            SharedPayload::Text(text) => match Url::parse(&text) {
                // Shared text that is itself a link re-enters the URL flow
                Ok(url) => {
                    let title = resolver::resolve(self.client, &url, None).await;
                    markdown::format_url(url.as_str(), &title)
                }
                Err(_) => markdown::format_text(&text),
            },
        };

        info!("Markdown line: {}", markdown);
        self.emit(&markdown).await
    }

    async fn emit(&self, markdown: &str) -> Outcome {
        let deeplink = match deeplink::build_deeplink(markdown) {
            Ok(deeplink) => deeplink,
            Err(err) => {
                error!("Could not encode deep link: {}", err);
                return Outcome::NoOp;
            }
        };

        if let Err(err) = self
            .sink
            .deliver(&deeplink)
            .map_err(|e| ShareError::Sink(e.to_string()))
        {
            error!("{}", err);
            return Outcome::NoOp;
        }

        // Let the sink's asynchronous activation dispatch before we finish
        tokio::time::sleep(self.grace).await;

        Outcome::Done(markdown.to_string())
    }
}

/// Probe attachments in fixed priority: URL, then rich text, then plain text
fn classify(items: &[ProvidedItem]) -> Result<SharedPayload, ShareError> {
    if let Some(item) = items.iter().find(|i| i.kind == ItemKind::Url) {
        // The probe said URL; a value that fails to parse is a dead payload
        let url = Url::parse(&item.value).map_err(|_| ShareError::PayloadUnavailable)?;
        let caller_title = items
            .iter()
            .find(|i| i.kind == ItemKind::RichText)
            .map(|i| i.value.clone())
            .filter(|t| !t.is_empty());
        return Ok(SharedPayload::Url { url, caller_title });
    }

    if let Some(item) = items.iter().find(|i| i.kind == ItemKind::RichText) {
        return Ok(SharedPayload::Text(item.value.clone()));
    }

    if let Some(item) = items.iter().find(|i| i.kind == ItemKind::PlainText) {
        return Ok(SharedPayload::Text(item.value.clone()));
    }

    Err(ShareError::PayloadUnavailable)
}
