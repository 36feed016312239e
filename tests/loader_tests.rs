use bikeshare::core::loader::load;
use bikeshare::core::stats::mode::mode_lowest;
use bikeshare::dataset::timestamp::parse_start_time;
use bikeshare::dataset::{CsvSource, TripSource};
use bikeshare::errors::AppError;
use bikeshare::models::{City, DayFilter, FilterSelection, MonthFilter};
use chrono::Timelike;

mod common;
use common::{CHICAGO_CSV, chicago, setup_data_dir, washington};

#[test]
fn test_read_table_parses_all_rows_and_derived_fields() {
    let table = chicago();
    assert_eq!(table.len(), 7);

    let first = &table.trips()[0];
    assert_eq!(first.start_station, "Clark St");
    assert_eq!(first.end_station, "State St");
    assert_eq!(first.duration, 600.0);
    assert_eq!(first.month(), 1);
    assert_eq!(first.weekday(), 0, "2017-01-02 is a Monday");
    assert_eq!(first.hour(), 8);
    assert_eq!(first.user_type.as_deref(), Some("Subscriber"));
    assert_eq!(first.gender.as_deref(), Some("Male"));
    assert_eq!(first.birth_year, Some(1980));
    assert_eq!(first.end_time.as_deref(), Some("2017-01-02 08:20:00"));
}

#[test]
fn test_derived_fields_match_start_time() {
    for trip in chicago().iter() {
        let ts = trip.start_time();
        assert_eq!(trip.hour(), ts.hour());
        assert_eq!(trip.start_time().format("%m").to_string(), format!("{:02}", trip.month()));
    }
}

#[test]
fn test_empty_cells_become_missing_values() {
    let table = chicago();
    let customer = &table.trips()[2];
    assert_eq!(customer.gender, None);
    assert_eq!(customer.birth_year, None);
    assert!(table.has_gender(), "column is present even with empty cells");
}

#[test]
fn test_optional_columns_absent() {
    let table = washington();
    assert_eq!(table.len(), 3);
    assert!(!table.has_gender());
    assert!(!table.has_birth_year());
    assert!(table.columns().end_time);
    assert_eq!(table.trips()[1].duration, 1000.5);
}

#[test]
fn test_invalid_start_time_is_reported_with_line() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:10:00,600,A,B,Subscriber
yesterday,300,A,B,Subscriber
";
    match CsvSource::read_table(csv.as_bytes()) {
        Err(AppError::InvalidTimestamp { line, value }) => {
            assert_eq!(line, 3);
            assert_eq!(value, "yesterday");
        }
        other => panic!("expected InvalidTimestamp, got {other:?}"),
    }
}

#[test]
fn test_missing_required_column() {
    let csv = "Start Time,Start Station,End Station,User Type\n2017-01-02 08:10:00,A,B,Subscriber\n";
    let err = CsvSource::read_table(csv.as_bytes()).expect_err("should fail");
    assert!(matches!(err, AppError::MissingColumn("Trip Duration")));
    assert!(err.is_load_failure());
}

#[test]
fn test_unreadable_birth_year_is_missing() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Birth Year
2017-01-02 08:10:00,600,A,B,Subscriber,n/a
2017-01-02 09:10:00,600,A,B,Subscriber,1999.0
";
    let table = CsvSource::read_table(csv.as_bytes()).expect("parses");
    assert_eq!(table.trips()[0].birth_year, None);
    assert_eq!(table.trips()[1].birth_year, Some(1999));
}

#[test]
fn test_parse_start_time_formats() {
    assert!(parse_start_time("2017-06-23 15:09:32").is_some());
    assert!(parse_start_time("2017-06-23T15:09:32").is_some());
    assert!(parse_start_time("2017-06-23 15:09:32.123").is_some());
    assert!(parse_start_time("2017-06-23 15:09").is_some());
    assert!(parse_start_time("23/06/2017").is_none());
}

#[test]
fn test_month_filter_keeps_only_that_month() {
    let table = chicago().filtered(MonthFilter::Month(5), DayFilter::All);
    assert_eq!(table.len(), 2);
    assert!(table.iter().all(|t| t.month() == 5));
}

#[test]
fn test_day_filter_keeps_only_that_weekday() {
    let table = chicago().filtered(MonthFilter::All, DayFilter::Day(0));
    assert_eq!(table.len(), 4);
    assert!(table.iter().all(|t| t.weekday() == 0));
}

#[test]
fn test_filters_combine_and_preserve_order() {
    let table = chicago().filtered(MonthFilter::Month(5), DayFilter::Day(0));
    let stations: Vec<&str> = table.iter().map(|t| t.start_station.as_str()).collect();
    assert_eq!(stations, vec!["Lake St", "State St"]);
}

#[test]
fn test_filtering_is_idempotent() {
    let once = chicago().filtered(MonthFilter::Month(1), DayFilter::Day(1));
    let twice = once.clone().filtered(MonthFilter::Month(1), DayFilter::Day(1));
    assert_eq!(once, twice);
    assert_eq!(once.len(), 1);
}

#[test]
fn test_load_every_selection_matches_filters() {
    let dir = setup_data_dir("loader_every_selection");
    let source = CsvSource::new(&dir);

    for city in City::ALL {
        for month_name in MonthFilter::choices() {
            for day_name in DayFilter::choices() {
                let month = MonthFilter::from_name(month_name).expect("valid month");
                let day = DayFilter::from_name(day_name).expect("valid day");
                let table = load(&source, &FilterSelection::new(city, month, day))
                    .expect("fixture loads");

                for trip in table.iter() {
                    assert!(month.matches(trip.month()));
                    assert!(day.matches(trip.weekday()));
                }
            }
        }
    }
}

#[test]
fn test_load_chicago_all_returns_every_row() {
    let dir = setup_data_dir("loader_chicago_all");
    let source = CsvSource::new(&dir);

    let table = load(&source, &FilterSelection::whole_city(City::Chicago)).expect("loads");
    let source_rows = CHICAGO_CSV.lines().count() - 1;
    assert_eq!(table.len(), source_rows);

    // popular hour equals the mode of the hours read straight from the text
    let raw_hours = CHICAGO_CSV.lines().skip(1).map(|line| {
        let start = line.split(',').nth(1).expect("start time column");
        start[11..13].parse::<u32>().expect("hour")
    });
    let expected = mode_lowest(raw_hours);
    let popular = bikeshare::core::stats::time_stats(&table).map(|s| s.popular_hour);
    assert_eq!(popular, expected);
    assert_eq!(popular, Some(8));
}

#[test]
fn test_load_new_york_may_mondays() {
    let dir = setup_data_dir("loader_nyc_may_monday");
    let source = CsvSource::new(&dir);
    let selection = FilterSelection::new(
        City::NewYorkCity,
        MonthFilter::from_name("may").expect("may"),
        DayFilter::from_name("monday").expect("monday"),
    );

    let table = load(&source, &selection).expect("loads");
    assert_eq!(table.len(), 3);
    assert!(table.iter().all(|t| t.month() == 5 && t.weekday() == 0));
}

#[test]
fn test_missing_dataset_file() {
    let dir = setup_data_dir("loader_missing_file");
    std::fs::remove_file(dir.join(City::Washington.file_name())).expect("remove");

    let source = CsvSource::new(&dir);
    let err = source.load_city(City::Washington).expect_err("should fail");
    assert!(matches!(err, AppError::DatasetNotFound(_)));
    assert!(err.is_load_failure());
}
