use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes `~/.bikeshare/bikeshare.conf` with the default settings. With
/// `--test` the file is left untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_file(cli.test)?;

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
