/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing URL path helpers
pub mod path;

pub use config::*;
pub use logger::*;
pub use path::*;
