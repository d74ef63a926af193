//! Username sources. Each returns `None` rather than an error.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::process::{Invocation, Runner};

/// One host entry in gh's `hosts.yml`. Other fields (tokens, protocol) are ignored.
#[derive(Debug, Deserialize)]
struct GhHost {
    #[serde(default)]
    user: Option<String>,
}

pub(crate) fn git_config_invocation() -> Invocation {
    Invocation::new("git").args(["config", "--global", "user.username"])
}

/// Non-empty output of `git config --global user.username`.
pub(crate) fn from_git_config(runner: &mut dyn Runner) -> Option<String> {
    let output = runner.run(&git_config_invocation()).ok()?;
    non_empty(&output.stdout)
}

/// The `<host>.user` field of the hosts file, if the file exists and has one.
pub(crate) fn from_gh_hosts(path: &Path, host: &str) -> Option<String> {
    if !path.is_file() {
        return None;
    }

    let contents = fs::read_to_string(path).ok()?;
    parse_hosts(&contents, host)
}

pub(crate) fn parse_hosts(contents: &str, host: &str) -> Option<String> {
    let hosts: HashMap<String, GhHost> = serde_yaml::from_str(contents).ok()?;
    hosts.get(host)?.user.as_deref().and_then(non_empty)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOSTS: &str = r#"
github.com:
    users:
        bob:
            oauth_token: gho_xxxxxxxxxxxx
    git_protocol: ssh
    oauth_token: gho_xxxxxxxxxxxx
    user: bob
ghe.example.com:
    user: robert
    git_protocol: https
"#;

    #[test]
    fn test_parse_github_user() {
        assert_eq!(parse_hosts(HOSTS, "github.com"), Some("bob".to_string()));
    }

    #[test]
    fn test_parse_other_host() {
        assert_eq!(
            parse_hosts(HOSTS, "ghe.example.com"),
            Some("robert".to_string())
        );
    }

    #[test]
    fn test_parse_missing_host() {
        assert_eq!(parse_hosts(HOSTS, "gitlab.com"), None);
    }

    #[test]
    fn test_parse_host_without_user() {
        let contents = "github.com:\n    git_protocol: ssh\n";
        assert_eq!(parse_hosts(contents, "github.com"), None);
    }

    #[test]
    fn test_parse_blank_user() {
        let contents = "github.com:\n    user: \"  \"\n";
        assert_eq!(parse_hosts(contents, "github.com"), None);
    }

    #[test]
    fn test_parse_malformed_yaml() {
        assert_eq!(parse_hosts("github.com: [unterminated", "github.com"), None);
        assert_eq!(parse_hosts("", "github.com"), None);
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            from_gh_hosts(Path::new("/definitely/not/hosts.yml"), "github.com"),
            None
        );
    }

    #[test]
    fn test_non_empty_trims_newline() {
        assert_eq!(non_empty("alice\n"), Some("alice".to_string()));
        assert_eq!(non_empty("\n"), None);
    }
}
