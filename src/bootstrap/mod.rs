//! Turn a project directory into a git repository and publish it on GitHub.
//!
//! # Flow
//!
//! 1. Confirm with the user. "No" ends the run with nothing executed.
//! 2. `git init`, `git add .`, `git commit -m <message>`, `git branch -M <branch>`.
//!    Exit codes are not checked: each step runs even if the previous one failed
//!    or could not be started.
//! 3. Look for `gh` on `PATH`. Without it, warn, point at the install page, stop.
//! 4. Ask for the repository name (prefilled with `<username>/<slug>` when a
//!    username is known) and visibility, then `gh repo create`, add `origin`,
//!    push. Again unchecked, in order.
//!
//! # Example
//!
//! ```no_run
//! use kickoff::bootstrap::RepoBootstrapper;
//! use kickoff::console::TerminalConsole;
//! use kickoff::process::SystemRunner;
//! use kickoff::project::ProjectDir;
//! use kickoff::username::UsernameResolver;
//! use kickoff::paths;
//!
//! let project = ProjectDir::open(std::path::Path::new("."), None)?;
//! let mut console = TerminalConsole::stdio();
//! let mut runner = SystemRunner;
//! let resolver = UsernameResolver::new(paths::gh_hosts_path());
//!
//! let outcome = RepoBootstrapper::new(&mut console, &mut runner, &project, resolver).run()?;
//! println!("{outcome:?}");
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;
mod types;

pub use types::{Outcome, Visibility};

use anyhow::Result;

use crate::config::Config;
use crate::console::Console;
use crate::process::{Invocation, Runner};
use crate::project::Project;
use crate::username::UsernameResolver;

pub const CONFIRM_PROMPT: &str = "Initialize a GitHub repo?";
pub const REPO_NAME_PROMPT: &str = "GitHub repo name";
pub const VISIBILITY_PROMPT: &str = "Repo visibility";
pub const GH_MISSING_WARNING: &str =
    "GitHub CLI is not installed. Cannot create remote repository on GitHub.";
pub const GH_INSTALL_HINT: &str = "Install here: https://cli.github.com/";

/// Knobs for the git and GitHub steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub commit_message: String,
    pub branch: String,
    pub host: String,
    pub default_visibility: Visibility,
}

impl Default for Options {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Options {
    fn from(config: &Config) -> Self {
        Self {
            commit_message: config.git.commit_message.clone(),
            branch: config.git.branch.clone(),
            host: config.github.host.clone(),
            default_visibility: config.github.default_visibility,
        }
    }
}

/// Runs the bootstrap flow against injected console, runner and project.
pub struct RepoBootstrapper<'a> {
    console: &'a mut dyn Console,
    runner: &'a mut dyn Runner,
    project: &'a dyn Project,
    resolver: UsernameResolver,
    options: Options,
}

impl<'a> RepoBootstrapper<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        runner: &'a mut dyn Runner,
        project: &'a dyn Project,
        resolver: UsernameResolver,
    ) -> Self {
        Self {
            console,
            runner,
            project,
            resolver,
            options: Options::default(),
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Run the whole flow.
    ///
    /// Errors only when a prompt cannot be read. Commands that fail, or cannot
    /// be started at all, do not stop the flow.
    pub fn run(&mut self) -> Result<Outcome> {
        if !self.console.confirm(CONFIRM_PROMPT, true)? {
            return Ok(Outcome::Declined);
        }

        let root = self.project.root().to_path_buf();
        self.run_each(internal::local_commands(&self.options, &root));

        if self.runner.locate("gh").is_none() {
            self.console.warn(GH_MISSING_WARNING);
            self.console.info(GH_INSTALL_HINT);
            return Ok(Outcome::LocalOnly);
        }

        let suggestion = self.suggested_repo();
        let repo = self.console.ask(REPO_NAME_PROMPT, suggestion.as_deref())?;

        let choices: Vec<&str> = Visibility::ALL.iter().map(|v| v.as_str()).collect();
        let visibility: Visibility = self
            .console
            .choice(
                VISIBILITY_PROMPT,
                &choices,
                self.options.default_visibility.as_str(),
            )?
            .parse()?;

        self.run_each(internal::remote_commands(
            &self.options,
            &root,
            &repo,
            visibility,
        ));

        Ok(Outcome::Published { repo, visibility })
    }

    /// Run every command in order. Neither a failing exit nor a command that
    /// cannot start stops the rest; the latter is reported as a warning.
    fn run_each(&mut self, invocations: Vec<Invocation>) {
        for invocation in invocations {
            if let Err(err) = self.runner.run_with_output(&invocation) {
                self.console.warn(&format!("{err:#}"));
            }
        }
    }

    /// `<username>/<slug of app name>`, or `None` without a known username.
    pub fn suggested_repo(&mut self) -> Option<String> {
        let username = self.resolver.resolve(&mut *self.runner)?;
        Some(internal::repo_identifier(&username, &self.project.app_name()))
    }
}
