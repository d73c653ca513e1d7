// Title resolution strategy chain
// An ordered list of strategies; first Some wins and the fallback is total

use tracing::debug;
use url::Url;

use crate::api::{fetch, oembed};
use crate::utils::html;

/// Resolution strategies, tried in the order of STRATEGY_CHAIN
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// Caller-supplied title from the share sheet
    Supplied,
    /// Video-platform oEmbed lookup
    OEmbed,
    /// Page fetch plus HTML title extraction
    HtmlScrape,
}

const STRATEGY_CHAIN: [Strategy; 3] = [Strategy::Supplied, Strategy::OEmbed, Strategy::HtmlScrape];

/// Resolve a usable title for a URL; never absent
/// Falls back to the URL host, then to the literal "Link"
pub async fn resolve(client: &reqwest::Client, url: &Url, caller_title: Option<&str>) -> String {
    for strategy in STRATEGY_CHAIN {
        if let Some(title) = attempt(client, url, caller_title, strategy).await {
            debug!("Resolved title via {:?}: {}", strategy, title);
            return title;
        }
    }

    url.host_str()
        .map(|host| host.to_string())
        .unwrap_or_else(|| "Link".to_string())
}

/// Remote strategies only apply to web URLs
fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

async fn attempt(
    client: &reqwest::Client,
    url: &Url,
    caller_title: Option<&str>,
    strategy: Strategy,
) -> Option<String> {
    match strategy {
        Strategy::Supplied => caller_title
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string()),
        Strategy::OEmbed => {
            if !is_web_url(url) || !oembed::is_video_url(url.as_str()) {
                return None;
            }
            oembed::fetch_title(client, url.as_str()).await
        }
        Strategy::HtmlScrape => {
            // Video links get oEmbed or nothing; never a second fetch
            if !is_web_url(url) || oembed::is_video_url(url.as_str()) {
                return None;
            }
            match fetch::fetch_html(client, url.as_str()).await {
                Ok(body) => html::extract_title(&body),
                Err(err) => {
                    debug!("Page fetch failed for {}: {}", url, err);
                    None
                }
            }
        }
    }
}
