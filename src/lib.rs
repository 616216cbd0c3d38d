pub mod config;
pub mod clients;
pub mod cli;
pub mod error;
pub mod formatter;

pub use config::ClientConfig;
pub use clients::{NotionDatabaseClient, SprintFilter};
pub use cli::App;
pub use error::{Error, RemoteApiError, Result};
pub use formatter::ResponseFormatter;
