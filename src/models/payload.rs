// Share payload data model
// One immutable payload per share action

use url::Url;

/// Attachment kinds probed during classification, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Url,
    RichText,
    PlainText,
}

/// A single typed attachment handed over by the host
#[derive(Debug, Clone)]
pub struct ProvidedItem {
    pub kind: ItemKind,
    pub value: String,
}

impl ProvidedItem {
    pub fn new(kind: ItemKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Classified share payload
#[derive(Debug, Clone)]
pub enum SharedPayload {
    Url {
        url: Url,
        /// Title hint from the share sheet; empty is treated the same as absent
        caller_title: Option<String>,
    },
    Text(String),
}

/// Terminal state of a share request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Carries the Markdown line that was handed to the sink
    Done(String),
    /// Nothing usable; the request ended without side effects
    NoOp,
}
