// Each test binary compiles this module independently and uses a different
// subset of helpers, so unused-function warnings are expected.
#![allow(dead_code)]

use anyhow::{anyhow, bail, Result};
use std::path::{Path, PathBuf};

use kickoff::console::Console;
use kickoff::process::{CommandOutput, CommandStatus, Invocation, Runner};
use kickoff::project::Project;

/// Records every invocation instead of running it.
#[derive(Debug, Default)]
pub struct FakeRunner {
    /// Stdout of `git config --global user.username`.
    pub git_username: Option<String>,
    /// Where `gh` lives, or `None` when it is not installed.
    pub gh_path: Option<PathBuf>,
    /// Exit code every streamed command reports.
    pub exit_code: i32,
    /// Command lines that fail to start.
    pub unspawnable: Vec<String>,

    pub streamed: Vec<Invocation>,
    pub captured: Vec<Invocation>,
    pub located: Vec<String>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gh(mut self) -> Self {
        self.gh_path = Some(PathBuf::from("/usr/local/bin/gh"));
        self
    }

    pub fn with_git_username(mut self, name: &str) -> Self {
        self.git_username = Some(format!("{name}\n"));
        self
    }

    pub fn streamed_lines(&self) -> Vec<String> {
        self.streamed.iter().map(|inv| inv.to_string()).collect()
    }

    fn check_spawn(&self, invocation: &Invocation) -> Result<()> {
        let line = invocation.to_string();
        if self.unspawnable.contains(&line) {
            bail!("Failed to run `{}`", line);
        }
        Ok(())
    }
}

impl Runner for FakeRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<CommandOutput> {
        self.captured.push(invocation.clone());
        self.check_spawn(invocation)?;

        let stdout = if invocation.to_string() == "git config --global user.username" {
            self.git_username.clone().unwrap_or_default()
        } else {
            String::new()
        };
        let code = if stdout.is_empty() { 1 } else { 0 };

        Ok(CommandOutput {
            stdout,
            stderr: String::new(),
            status: CommandStatus { code: Some(code) },
        })
    }

    fn run_with_output(&mut self, invocation: &Invocation) -> Result<CommandStatus> {
        self.streamed.push(invocation.clone());
        self.check_spawn(invocation)?;

        Ok(CommandStatus {
            code: Some(self.exit_code),
        })
    }

    fn locate(&mut self, program: &str) -> Option<PathBuf> {
        self.located.push(program.to_string());
        match program {
            "gh" => self.gh_path.clone(),
            _ => None,
        }
    }
}

/// Answers prompts from a script and records what was asked.
#[derive(Debug)]
pub struct ScriptedConsole {
    pub confirm_answer: bool,
    /// `None` accepts the offered default.
    pub name_answer: Option<String>,
    /// `None` accepts the offered default.
    pub visibility_answer: Option<String>,

    pub confirms: Vec<(String, bool)>,
    pub asks: Vec<(String, Option<String>)>,
    pub choices: Vec<(String, Vec<String>, String)>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl ScriptedConsole {
    pub fn accepting() -> Self {
        Self {
            confirm_answer: true,
            name_answer: None,
            visibility_answer: None,
            confirms: Vec::new(),
            asks: Vec::new(),
            choices: Vec::new(),
            warnings: Vec::new(),
            infos: Vec::new(),
        }
    }

    pub fn declining() -> Self {
        Self {
            confirm_answer: false,
            ..Self::accepting()
        }
    }

    pub fn answering(name: &str, visibility: &str) -> Self {
        Self {
            name_answer: Some(name.to_string()),
            visibility_answer: Some(visibility.to_string()),
            ..Self::accepting()
        }
    }
}

impl Console for ScriptedConsole {
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        self.confirms.push((prompt.to_string(), default));
        Ok(self.confirm_answer)
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        self.asks
            .push((prompt.to_string(), default.map(str::to_string)));

        self.name_answer
            .clone()
            .or_else(|| default.map(str::to_string))
            .ok_or_else(|| anyhow!("no scripted answer for '{}'", prompt))
    }

    fn choice(&mut self, prompt: &str, options: &[&str], default: &str) -> Result<String> {
        self.choices.push((
            prompt.to_string(),
            options.iter().map(|o| o.to_string()).collect(),
            default.to_string(),
        ));

        Ok(self
            .visibility_answer
            .clone()
            .unwrap_or_else(|| default.to_string()))
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }
}

pub struct FakeProject {
    pub name: String,
    pub root: PathBuf,
}

impl FakeProject {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            root: PathBuf::from("/work/project"),
        }
    }
}

impl Project for FakeProject {
    fn app_name(&self) -> String {
        self.name.clone()
    }

    fn root(&self) -> &Path {
        &self.root
    }
}

/// Write a gh `hosts.yml` naming `user` for github.com.
pub fn write_hosts(dir: &Path, user: &str) -> Result<PathBuf> {
    let path = dir.join("hosts.yml");
    std::fs::write(
        &path,
        format!("github.com:\n    git_protocol: ssh\n    user: {user}\n"),
    )?;
    Ok(path)
}
