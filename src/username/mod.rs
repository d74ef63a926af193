//! GitHub username discovery.
//!
//! Two sources, tried in order:
//! 1. `git config --global user.username`
//! 2. the `user` field of the host entry in gh's `hosts.yml`
//!
//! Finding nothing is normal. Every failure along the way (git missing,
//! unreadable or malformed hosts file) just means "no username".

mod internal;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::process::Runner;

/// Where a username was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsernameSource {
    GitConfig,
    GhHosts,
}

impl fmt::Display for UsernameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsernameSource::GitConfig => f.write_str("git config user.username"),
            UsernameSource::GhHosts => f.write_str("gh hosts.yml"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Username {
    pub name: String,
    pub source: UsernameSource,
}

/// Looks up the current user's GitHub username.
#[derive(Debug, Clone)]
pub struct UsernameResolver {
    hosts_path: PathBuf,
    host: String,
}

impl UsernameResolver {
    /// Resolver reading gh's host registry at `hosts_path`, for `github.com`.
    pub fn new(hosts_path: impl Into<PathBuf>) -> Self {
        Self {
            hosts_path: hosts_path.into(),
            host: "github.com".to_string(),
        }
    }

    /// Look up the entry for another host (GitHub Enterprise).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn hosts_path(&self) -> &Path {
        &self.hosts_path
    }

    /// The username alone, if any source has one.
    pub fn resolve(&self, runner: &mut dyn Runner) -> Option<String> {
        self.lookup(runner).map(|username| username.name)
    }

    /// The username together with where it came from.
    pub fn lookup(&self, runner: &mut dyn Runner) -> Option<Username> {
        if let Some(name) = internal::from_git_config(runner) {
            return Some(Username {
                name,
                source: UsernameSource::GitConfig,
            });
        }

        internal::from_gh_hosts(&self.hosts_path, &self.host).map(|name| Username {
            name,
            source: UsernameSource::GhHosts,
        })
    }
}
