// Command-line front end
pub mod app;
pub mod args;

pub use app::App;
pub use args::{Cli, Command};
