//! CLI command handlers. Each command is in its own file.

mod check_url;
mod serve;

pub use check_url::run_check_url;
pub use serve::run_serve;
