//! Single source of truth for every file kickoff reads.
//!
//! No I/O happens here; callers decide what to do when a file is missing.
//!
//! ```text
//! ~/.config/
//! ├── kickoff/config.toml      # Optional kickoff defaults
//! └── gh/hosts.yml             # Written by `gh auth login`, read for the username
//! ```

use std::path::PathBuf;

/// The user's home directory (`$HOME`), falling back to the working directory.
pub fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// `~/.config/`
fn dot_config() -> PathBuf {
    home().join(".config")
}

/// kickoff settings: `~/.config/kickoff/config.toml`
pub fn config_path() -> PathBuf {
    dot_config().join("kickoff").join("config.toml")
}

/// GitHub CLI host registry: `~/.config/gh/hosts.yml`
pub fn gh_hosts_path() -> PathBuf {
    dot_config().join("gh").join("hosts.yml")
}
