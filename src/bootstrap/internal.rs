//! Command lists and naming for the bootstrap flow.

use std::path::Path;

use super::{Options, Visibility};
use crate::process::Invocation;
use crate::project::slug;

/// init, stage, commit, rename branch.
pub(crate) fn local_commands(options: &Options, root: &Path) -> Vec<Invocation> {
    vec![
        git(root).arg("init"),
        git(root).args(["add", "."]),
        git(root).args(["commit", "-m", options.commit_message.as_str()]),
        git(root).args(["branch", "-M", options.branch.as_str()]),
    ]
}

/// create on GitHub, add `origin`, push.
pub(crate) fn remote_commands(
    options: &Options,
    root: &Path,
    repo: &str,
    visibility: Visibility,
) -> Vec<Invocation> {
    vec![
        Invocation::new("gh")
            .args(["repo", "create", repo])
            .arg(visibility.flag())
            .current_dir(root),
        git(root)
            .args(["remote", "add", "origin"])
            .arg(ssh_remote_url(&options.host, repo)),
        git(root).args(["push", "-u", "origin", options.branch.as_str()]),
    ]
}

pub(crate) fn repo_identifier(owner: &str, app_name: &str) -> String {
    format!("{}/{}", owner, slug(app_name))
}

/// `git@github.com:owner/repo.git`
pub(crate) fn ssh_remote_url(host: &str, repo: &str) -> String {
    format!("git@{}:{}.git", host, repo)
}

fn git(root: &Path) -> Invocation {
    Invocation::new("git").current_dir(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_commands_in_order() {
        let lines: Vec<String> = local_commands(&Options::default(), Path::new("/tmp/demo"))
            .iter()
            .map(|inv| inv.to_string())
            .collect();

        assert_eq!(
            lines,
            vec![
                "git init",
                "git add .",
                "git commit -m kickoff",
                "git branch -M main",
            ]
        );
    }

    #[test]
    fn test_remote_commands_in_order() {
        let commands = remote_commands(
            &Options::default(),
            Path::new("/tmp/demo"),
            "alice/demo",
            Visibility::Private,
        );
        let lines: Vec<String> = commands.iter().map(|inv| inv.to_string()).collect();

        assert_eq!(
            lines,
            vec![
                "gh repo create alice/demo --private",
                "git remote add origin git@github.com:alice/demo.git",
                "git push -u origin main",
            ]
        );
        assert!(commands
            .iter()
            .all(|inv| inv.dir() == Some(Path::new("/tmp/demo"))));
    }

    #[test]
    fn test_repo_name_is_single_argument() {
        let commands = remote_commands(
            &Options::default(),
            Path::new("."),
            "alice/demo; rm -rf ~",
            Visibility::Public,
        );
        assert_eq!(
            commands[0].arguments(),
            ["repo", "create", "alice/demo; rm -rf ~", "--public"]
        );
    }

    #[test]
    fn test_repo_identifier() {
        assert_eq!(repo_identifier("alice", "My Cool App"), "alice/my-cool-app");
    }

    #[test]
    fn test_ssh_remote_url_custom_host() {
        assert_eq!(
            ssh_remote_url("ghe.example.com", "team/tool"),
            "git@ghe.example.com:team/tool.git"
        );
    }
}
