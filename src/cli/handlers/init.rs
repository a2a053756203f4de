use crate::config::{CONFIG_FILE_NAME, NexusConfig};
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    NexusConfig::default().save(&config_path)?;

    println!("{} nexus config in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());

    Ok(())
}
