//! `kickoff whoami`: show which GitHub username would prefill the repo name.

use anyhow::Result;
use serde_json::json;

use kickoff::paths;
use kickoff::process::SystemRunner;
use kickoff::username::UsernameResolver;
use kickoff::Config;

pub fn execute(json: bool) -> Result<()> {
    let config = Config::load()?;
    let resolver = UsernameResolver::new(paths::gh_hosts_path()).with_host(&config.github.host);
    let username = resolver.lookup(&mut SystemRunner);

    if json {
        let value = json!({
            "username": username.as_ref().map(|u| &u.name),
            "source": username.as_ref().map(|u| u.source),
            "host": config.github.host,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match username {
        Some(username) => println!("{} (from {})", username.name, username.source),
        None => {
            println!("No GitHub username found.");
            println!("  Set one with: git config --global user.username <name>");
            println!("  or log in with: gh auth login");
            println!("  (looked in {})", resolver.hosts_path().display());
        }
    }

    Ok(())
}
