use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if !*print_config {
            warning("Nothing to do: use --print to show the configuration.");
            return Ok(());
        }

        let path = Config::config_file();
        if path.exists() {
            info(format!("Configuration file: {}", path.display()));
        } else {
            info(format!("No configuration file at {}, using defaults", path.display()));
        }
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    Ok(())
}
