use crate::config::Config;
use crate::dataset::CsvSource;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::prompt::Console;
use log::info;

/// Handle the `explore` command (also the default without a subcommand)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let source = CsvSource::new(&cfg.data_dir);
    info!("datasets directory: {}", source.data_dir().display());

    let mut console = Console::stdio();
    Session::new(&mut console, &source, cfg).run()
}
