// YouTube oEmbed client
// Title lookups for video links without scraping the watch page

use serde::Deserialize;
use tracing::debug;

use crate::models::error::ShareError;
use crate::utils::config::{FETCH_TIMEOUT, OEMBED_ENDPOINT, VIDEO_HOSTS};

/// True when the URL is served by the video platform's oEmbed endpoint
pub fn is_video_url(url: &str) -> bool {
    let lowered = url.to_lowercase();
    VIDEO_HOSTS.iter().any(|host| lowered.contains(host))
}

/// Build the oEmbed query URL for a video link
pub fn build_oembed_url(url: &str) -> String {
    format!(
        "{}?url={}&format=json",
        OEMBED_ENDPOINT,
        urlencoding::encode(url)
    )
}

/// Fetch the video title via oEmbed
/// Every failure mode collapses to None and the resolver moves on
pub async fn fetch_title(client: &reqwest::Client, url: &str) -> Option<String> {
    match try_fetch_title(client, url).await {
        Ok(title) => title,
        Err(err) => {
            debug!("oEmbed lookup failed for {}: {}", url, err);
            None
        }
    }
}

async fn try_fetch_title(
    client: &reqwest::Client,
    url: &str,
) -> Result<Option<String>, ShareError> {
    let response = client
        .get(build_oembed_url(url))
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    parse_oembed_title(&body)
}

/// Pull the `title` string out of an oEmbed JSON body
pub fn parse_oembed_title(body: &str) -> Result<Option<String>, ShareError> {
    let response: OEmbedResponse = serde_json::from_str(body)?;
    Ok(response.title.filter(|t| !t.is_empty()))
}

// oEmbed response shape; only the title matters here
#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_video_url() {
        assert!(is_video_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_video_url("https://youtu.be/dQw4w9WgXcQ"));
        assert!(is_video_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_video_url("https://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ"));
        assert!(!is_video_url("https://example.com/watch?v=dQw4w9WgXcQ"));
        assert!(!is_video_url("https://vimeo.com/123456"));
    }

    #[test]
    fn test_build_oembed_url() {
        assert_eq!(
            build_oembed_url("https://youtu.be/dQw4w9WgXcQ"),
            "https://www.youtube.com/oembed?url=https%3A%2F%2Fyoutu.be%2FdQw4w9WgXcQ&format=json"
        );
    }

    #[test]
    fn test_parse_oembed_title() {
        let body = r#"{"title": "My Video", "author_name": "Someone"}"#;
        assert_eq!(
            parse_oembed_title(body).unwrap(),
            Some("My Video".to_string())
        );
    }

    #[test]
    fn test_parse_oembed_missing_title() {
        let body = r#"{"author_name": "Someone"}"#;
        assert_eq!(parse_oembed_title(body).unwrap(), None);
    }

    #[test]
    fn test_parse_oembed_empty_title() {
        let body = r#"{"title": ""}"#;
        assert_eq!(parse_oembed_title(body).unwrap(), None);
    }

    #[test]
    fn test_parse_oembed_non_string_title() {
        let body = r#"{"title": 42}"#;
        assert!(parse_oembed_title(body).is_err());
    }

    #[test]
    fn test_parse_oembed_malformed_json() {
        assert!(parse_oembed_title("not json at all").is_err());
    }
}
