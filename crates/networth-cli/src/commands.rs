use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::{Config, resolve_data_dir};
use crate::logging;
use crate::presentation::renderers::console::ConsoleRenderer;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);
    let renderer = ConsoleRenderer::new(cli.format);

    let command = cli.command.unwrap_or(Commands::Tui { fragment: None });

    if matches!(command, Commands::Tui { .. }) {
        logging::init_file(cli.log_level, &data_dir);
    } else {
        logging::init_console(cli.log_level);
    }
    log::debug!("Using data directory {}", data_dir.display());

    match command {
        Commands::Tui { fragment } => {
            handlers::tui::handle(Config::load_from(&config_path)?, fragment)
        }
        Commands::Route { fragments } => {
            let config = Config::load_from(&config_path)?;
            handlers::route::handle(&config, &fragments, &renderer)
        }
        Commands::Sections => {
            let config = Config::load_from(&config_path)?;
            handlers::sections::handle(&config, &renderer)
        }
        Commands::Config { command } => match command {
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force, &renderer),
            ConfigCommand::Show => {
                let config = Config::load_from(&config_path)?;
                handlers::config::show(&config, &config_path, &renderer)
            }
        },
    }
}
