use std::path::Path;

use anyhow::{Result, bail};

use crate::config::Config;
use crate::presentation::renderers::console::ConsoleRenderer;

pub fn init(config_path: &Path, force: bool, renderer: &ConsoleRenderer) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save_to(config_path)?;
    renderer.render_config_written(config_path);
    Ok(())
}

pub fn show(config: &Config, config_path: &Path, renderer: &ConsoleRenderer) -> Result<()> {
    renderer.render_config(config, config_path)
}
