// Remote lookup clients
pub mod fetch;
pub mod oembed;
