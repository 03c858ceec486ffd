//! CLI commands
//!
//! Command implementations for the `sanitize` binary.

mod download;
mod health;
mod list;
mod notice;
mod rate;
mod render;
mod session;
mod style;
mod submit;
mod watch;

pub use download::run_download;
pub use health::run_health;
pub use list::run_list;
pub use rate::run_rate;
pub use session::Session;
pub use submit::run_submit;
pub use watch::run_watch;
