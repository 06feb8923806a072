use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;

pub const DEFAULT_CONFIG: &str = r#"# usermgr configuration

[admin]
# Prefer the USERMGR_ADMIN_CREDENTIAL environment variable over storing
# the credential in this file.
# credential = ""

[thresholds]
# Users strictly older than this are reported as seniors
senior_age = 65
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote default configuration to {}", config_path.display());

    Ok(())
}
