// Ingest sink for the destination app
// The handler never reaches for the OS directly; a sink is injected

use anyhow::Result;
use tracing::info;

/// Destination for the finished deep link
pub trait IngestSink {
    /// Hand over the deep link; delivery is fire-and-forget
    fn deliver(&self, deeplink: &str) -> Result<()>;
}

/// Opens the deep link with the platform opener
pub struct OsOpenSink;

impl IngestSink for OsOpenSink {
    fn deliver(&self, deeplink: &str) -> Result<()> {
        info!("Opening deep link: {}", deeplink);

        #[cfg(target_os = "macos")]
        let opener = "open";
        #[cfg(not(target_os = "macos"))]
        let opener = "xdg-open";

        tokio::process::Command::new(opener).arg(deeplink).spawn()?;
        Ok(())
    }
}
