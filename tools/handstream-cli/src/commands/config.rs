//! Print the effective configuration.

use std::path::PathBuf;

use handstream_common::config::{config_file_path, AppConfig};

pub fn run(config: AppConfig, explicit: Option<PathBuf>) -> anyhow::Result<()> {
    let path = explicit.unwrap_or_else(config_file_path);
    let origin = if path.exists() { "loaded" } else { "defaults; file not found" };
    println!("# {} ({origin})", path.display());

    config.validate()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
