// Markdown line formatting
// One bullet line per share, ready for the daily note

use crate::utils::config::{MUSIC_HOSTS, MUSIC_TITLE_SUFFIX};

/// Escape closing parens so the URL survives Markdown link syntax
pub fn escape_parens(url: &str) -> String {
    url.replace(')', "\\)")
}

/// Inverse of escape_parens
#[allow(dead_code)]
pub fn unescape_parens(url: &str) -> String {
    url.replace("\\)", ")")
}

/// True when the URL belongs to a music platform
pub fn is_music_url(url: &str) -> bool {
    MUSIC_HOSTS.iter().any(|host| url.contains(host))
}

/// Format a resolved (title, URL) pair as a Markdown bullet
pub fn format_url(url: &str, title: &str) -> String {
    let escaped = escape_parens(url);
    if is_music_url(url) {
        let title = title.replace(MUSIC_TITLE_SUFFIX, "");
        format!("- Listening to 🎧 [{}]({})", title, escaped)
    } else {
        format!("- [{}]({})", title, escaped)
    }
}

/// Format plain shared text as a Markdown bullet, verbatim
pub fn format_text(text: &str) -> String {
    format!("- {}", text)
}
