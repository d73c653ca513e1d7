// Centralized configuration for the clipper
// Fixed constants of the share workflow plus environment overrides

use std::time::Duration;

/// Network budget for any single fetch (oEmbed or page HTML)
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Browser-like User-Agent sent with page fetches to avoid bot blocks
pub const USER_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15";

/// Hosts served by the video platform's oEmbed endpoint
pub const VIDEO_HOSTS: [&str; 3] = ["youtube.com", "youtu.be", "m.youtube.com"];

/// oEmbed endpoint for video titles
pub const OEMBED_ENDPOINT: &str = "https://www.youtube.com/oembed";

/// Music-platform hosts that get the listening prefix
pub const MUSIC_HOSTS: [&str; 2] = ["music.apple.com", "itunes.apple.com"];

/// Suffix Apple Music appends to shared titles
pub const MUSIC_TITLE_SUFFIX: &str = " – Apple Music";

/// Default grace period between sink delivery and completion
pub const DEFAULT_GRACE_MS: u64 = 500;

/// Grace period between handing off the deep link and signaling completion
/// Override with CLIPPER_GRACE_MS for hosts with slower activation
pub fn grace_period() -> Duration {
    let ms = std::env::var("CLIPPER_GRACE_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_GRACE_MS);
    Duration::from_millis(ms)
}
