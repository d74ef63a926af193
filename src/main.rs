use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Turn a fresh project into a git repository and publish it on GitHub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize git, make the first commit, and create the GitHub repository
    Init {
        /// Application name used to suggest the repository name
        #[arg(long)]
        name: Option<String>,

        /// Project directory
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Accept the default answer for every prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the GitHub username kickoff would suggest repositories under
    Whoami {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name, dir, yes } => {
            commands::init::execute(dir, name, yes)?;
        }
        Commands::Whoami { json } => {
            commands::whoami::execute(json)?;
        }
        Commands::Config { json } => {
            commands::config::execute(json)?;
        }
    }

    Ok(())
}
