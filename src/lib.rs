pub mod cli;
pub mod config;
pub mod ecs;
pub mod error;
pub mod output;
pub mod resolve;

pub use config::FindConfig;
pub use error::{FindError, Result};
pub use resolve::locate;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
