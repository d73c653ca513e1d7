// Obsidian Advanced URI deep link construction
// The encoded Markdown keeps its syntax characters readable in the query

use url::Url;

use crate::models::error::ShareError;

/// Escape sequences restored after encoding; Markdown link syntax must
/// arrive at the destination unmangled (`-` is already left alone)
const MARKDOWN_KEEP: [(&str, &str); 5] = [
    ("%5B", "["),
    ("%5D", "]"),
    ("%28", "("),
    ("%29", ")"),
    ("%23", "#"),
];

/// Percent-encode a Markdown line for the deep link query parameter
pub fn encode_markdown(line: &str) -> String {
    let mut encoded = urlencoding::encode(line).into_owned();
    for (sequence, literal) in MARKDOWN_KEEP {
        encoded = encoded.replace(sequence, literal);
    }
    encoded
}

/// Build the adv-uri deep link carrying the Markdown line
pub fn build_deeplink(markdown: &str) -> Result<String, ShareError> {
    let deeplink = format!(
        "obsidian://adv-uri?daily=true&mode=append&heading=Explore&data={}",
        encode_markdown(markdown)
    );

    // A link the URL parser rejects would be unusable by the OS opener
    Url::parse(&deeplink).map_err(|_| ShareError::Encoding)?;

    Ok(deeplink)
}
