//! `kickoff init`: bootstrap the project directory.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use kickoff::bootstrap::{Options, Outcome, RepoBootstrapper};
use kickoff::console::TerminalConsole;
use kickoff::process::SystemRunner;
use kickoff::project::{Project, ProjectDir};
use kickoff::username::UsernameResolver;
use kickoff::{paths, Config};

pub fn execute(dir: PathBuf, name: Option<String>, yes: bool) -> Result<()> {
    let config = Config::load()?;
    let project = ProjectDir::open(&dir, name.or_else(|| config.app_name.clone()))?;

    println!(
        "🚀 Bootstrapping {} in {}",
        project.app_name().bold(),
        project.root().display()
    );

    let mut console = TerminalConsole::stdio().assume_yes(yes);
    let mut runner = SystemRunner;
    let resolver = UsernameResolver::new(paths::gh_hosts_path()).with_host(&config.github.host);

    let outcome = RepoBootstrapper::new(&mut console, &mut runner, &project, resolver)
        .with_options(Options::from(&config))
        .run()?;

    match outcome {
        Outcome::Declined => {
            println!("Skipped repository setup.");
        }
        Outcome::LocalOnly => {
            println!(
                "\n{} Local repository ready on branch {}",
                "✓".green().bold(),
                config.git.branch
            );
        }
        Outcome::Published { repo, visibility } => {
            println!(
                "\n{} {} repository https://{}/{}",
                "✅".green(),
                visibility,
                config.github.host,
                repo
            );
        }
    }

    Ok(())
}
