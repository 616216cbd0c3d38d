// Notion API client modules
pub mod filter;
pub mod notion;

pub use filter::SprintFilter;
pub use notion::NotionDatabaseClient;
