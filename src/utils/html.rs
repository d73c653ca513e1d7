// Title extraction from raw HTML
// Deliberately shallow: a handful of compiled patterns, not a full parser

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern compiles"));

// Meta patterns are duplicated per attribute order and attribute name;
// first match wins, matching the original extractor semantics
static OG_TITLE_RES: Lazy<Vec<Regex>> = Lazy::new(|| compile_meta_patterns("og:title"));
static TWITTER_TITLE_RES: Lazy<Vec<Regex>> = Lazy::new(|| compile_meta_patterns("twitter:title"));

fn compile_meta_patterns(property: &str) -> Vec<Regex> {
    [
        format!(r#"<meta[^>]*property=["']{property}["'][^>]*content=["']([^"']*)["'][^>]*>"#),
        format!(r#"<meta[^>]*content=["']([^"']*)["'][^>]*property=["']{property}["'][^>]*>"#),
        format!(r#"<meta[^>]*name=["']{property}["'][^>]*content=["']([^"']*)["'][^>]*>"#),
        format!(r#"<meta[^>]*content=["']([^"']*)["'][^>]*name=["']{property}["'][^>]*>"#),
    ]
    .into_iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("meta pattern compiles"))
    .collect()
}

/// Extract the best available title from an HTML document
/// Priority: <title> element, then og:title, then twitter:title
pub fn extract_title(html: &str) -> Option<String> {
    if let Some(caps) = TITLE_RE.captures(html) {
        let cleaned = clean_title(caps.get(1).map_or("", |m| m.as_str()));
        if !cleaned.is_empty() {
            return Some(cleaned);
        }
    }

    if let Some(og_title) = extract_meta_content(html, &OG_TITLE_RES) {
        return Some(og_title);
    }

    extract_meta_content(html, &TWITTER_TITLE_RES)
}

fn extract_meta_content(html: &str, patterns: &[Regex]) -> Option<String> {
    for re in patterns {
        if let Some(caps) = re.captures(html) {
            let cleaned = clean_title(caps.get(1).map_or("", |m| m.as_str()));
            if !cleaned.is_empty() {
                return Some(cleaned);
            }
        }
    }
    None
}

/// Trim, decode HTML entities and collapse internal whitespace runs
pub fn clean_title(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw.trim());
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_tag() {
        let html = "<html><head><title>Example Page</title></head></html>";
        assert_eq!(extract_title(html), Some("Example Page".to_string()));
    }

    #[test]
    fn test_title_tag_case_insensitive_with_attributes() {
        let html = r#"<HTML><HEAD><TITLE data-rh="true">Shouty Page</TITLE></HEAD></HTML>"#;
        assert_eq!(extract_title(html), Some("Shouty Page".to_string()));
    }

    #[test]
    fn test_title_spanning_lines() {
        let html = "<title>\n  A Title\n  Split Across Lines\n</title>";
        assert_eq!(extract_title(html), Some("A Title Split Across Lines".to_string()));
    }

    #[test]
    fn test_title_beats_meta_tags() {
        let html = r#"
            <title>Real Title</title>
            <meta property="og:title" content="OG Title">
            <meta name="twitter:title" content="Twitter Title">
        "#;
        assert_eq!(extract_title(html), Some("Real Title".to_string()));
    }

    #[test]
    fn test_empty_title_falls_through_to_og() {
        let html = r#"<title>   </title><meta property="og:title" content="OG Title">"#;
        assert_eq!(extract_title(html), Some("OG Title".to_string()));
    }

    #[test]
    fn test_og_title_property_first() {
        let html = r#"<meta property="og:title" content="OG Title">"#;
        assert_eq!(extract_title(html), Some("OG Title".to_string()));
    }

    #[test]
    fn test_og_title_content_first() {
        let html = r#"<meta content="OG Title" property="og:title">"#;
        assert_eq!(extract_title(html), Some("OG Title".to_string()));
    }

    #[test]
    fn test_og_title_name_attribute() {
        let html = r#"<meta name="og:title" content="Named OG Title">"#;
        assert_eq!(extract_title(html), Some("Named OG Title".to_string()));
    }

    #[test]
    fn test_twitter_title_fallback() {
        let html = r#"<meta name="twitter:title" content="Twitter Title">"#;
        assert_eq!(extract_title(html), Some("Twitter Title".to_string()));
    }

    #[test]
    fn test_og_beats_twitter() {
        let html = r#"
            <meta name="twitter:title" content="Twitter Title">
            <meta property="og:title" content="OG Title">
        "#;
        assert_eq!(extract_title(html), Some("OG Title".to_string()));
    }

    #[test]
    fn test_no_title_anywhere() {
        let html = "<html><body><h1>Heading</h1></body></html>";
        assert_eq!(extract_title(html), None);
    }

    #[test]
    fn test_clean_decodes_entities() {
        assert_eq!(clean_title("Fish &amp; Chips"), "Fish & Chips");
        assert_eq!(clean_title("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
        assert_eq!(clean_title("&quot;quoted&quot;"), "\"quoted\"");
        assert_eq!(clean_title("it&#39;s"), "it's");
        assert_eq!(clean_title("it&apos;s"), "it's");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean_title("  spaced \n\t out  "), "spaced out");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let inputs = ["  Fish &amp; Chips \n", "plain", "", "  a  b  "];
        for input in inputs {
            let once = clean_title(input);
            assert_eq!(clean_title(&once), once);
        }
    }
}
