//! External command execution.
//!
//! Every command kickoff runs goes through the [`Runner`] trait so the
//! bootstrap flow can be driven by a fake in tests. Commands are argument
//! vectors handed straight to the OS, never a shell line, so repository and
//! project names are passed through verbatim and cannot inject commands.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A program plus its arguments and optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

/// Renders like the shell line a user would type, e.g. `git commit -m "first commit"`.
///
/// Display only; nothing ever executes this string.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\'' || c == '$');

    if needs_quotes {
        format!("\"{}\"", arg.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}

/// Exit status of a finished command. `code` is `None` when killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Captured result of a command run with [`Runner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: CommandStatus,
}

/// Process execution capability.
///
/// Errors are reserved for commands that could not be started at all.
/// A command that starts and exits non-zero is a successful call; the caller
/// decides whether the status matters.
pub trait Runner {
    /// Run to completion, capturing stdout and stderr.
    fn run(&mut self, invocation: &Invocation) -> Result<CommandOutput>;

    /// Run to completion with stdio inherited, so output streams to the user.
    fn run_with_output(&mut self, invocation: &Invocation) -> Result<CommandStatus>;

    /// Find `program` on `PATH`.
    fn locate(&mut self, program: &str) -> Option<PathBuf>;
}

/// [`Runner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandOutput> {
        let output = invocation
            .to_command()
            .output()
            .with_context(|| format!("Failed to run `{}`", invocation))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.into(),
        })
    }

    fn run_with_output(&mut self, invocation: &Invocation) -> Result<CommandStatus> {
        println!("{}", format!("$ {}", invocation).dimmed());

        let status = invocation.to_command().status().with_context(|| {
            format!(
                "Failed to run `{}`. Is {} installed?",
                invocation, invocation.program
            )
        })?;

        Ok(status.into())
    }

    fn locate(&mut self, program: &str) -> Option<PathBuf> {
        which::which(program)
            .ok()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
