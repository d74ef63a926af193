pub mod bootstrap;
pub mod config;
pub mod console;
pub mod paths;
pub mod process;
pub mod project;
pub mod username;

// Re-export commonly used types
pub use bootstrap::{Outcome, RepoBootstrapper, Visibility};
pub use config::Config;
