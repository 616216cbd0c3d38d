// Client configuration
pub mod config;

pub use config::{ClientConfig, DEFAULT_BASE_URL, NOTION_VERSION};
