use crate::config::Config;
use crate::dataset::CsvSource;
use crate::errors::AppResult;
use crate::models::City;
use crate::ui::messages::header_line;
use crate::utils::table::{Column, Table};

/// Handle the `cities` command: list each city with its dataset file
pub fn handle(cfg: &Config) -> AppResult<()> {
    let source = CsvSource::new(&cfg.data_dir);

    let mut table = Table::new(vec![
        Column::left("City"),
        Column::left("Dataset"),
        Column::left("Status"),
    ]);
    for city in City::ALL {
        let path = source.dataset_path(city);
        let status = if path.is_file() { "ok" } else { "missing" };
        table.add_row(vec![
            city.name().to_string(),
            path.display().to_string(),
            status.to_string(),
        ]);
    }

    println!("{}", header_line("Cities"));
    print!("{}", table.render());
    Ok(())
}
