use anyhow::Result;

use kickoff::{paths, Config};

pub fn execute(json: bool) -> Result<()> {
    let path = paths::config_path();
    let config = Config::load_from(&path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, showing defaults)", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
