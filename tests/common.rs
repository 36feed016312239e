#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::dataset::CsvSource;
use bikeshare::models::{City, TripTable};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:10:00,2017-01-02 08:20:00,600,Clark St,State St,Subscriber,Male,1980.0
1,2017-01-03 08:30:00,2017-01-03 08:35:00,300,Clark St,Lake St,Subscriber,Female,1990.0
2,2017-02-06 17:05:00,2017-02-06 17:25:00,1200,State St,Clark St,Customer,,
3,2017-03-07 08:45:00,2017-03-07 09:00:00,900,Clark St,State St,Subscriber,Male,1980.0
4,2017-05-01 12:00:00,2017-05-01 12:01:00,60,Lake St,Lake St,Customer,Female,1975.0
5,2017-05-08 17:30:00,2017-05-08 17:34:00,240,State St,Clark St,Subscriber,Male,1990.0
6,2017-06-04 09:15:00,2017-06-04 09:25:00,600,Clark St,State St,Subscriber,Female,1985.0
";

pub const NEW_YORK_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-05-01 07:00:00,2017-05-01 07:06:40,400,W 52 St,Broadway,Subscriber,Male,1970
2017-05-02 07:00:00,2017-05-02 07:08:20,500,Broadway,W 52 St,Subscriber,Female,1988
2017-05-15 18:20:00,2017-05-15 18:31:40,700,Broadway,Pier 40,Customer,,
2017-04-03 07:10:00,2017-04-03 07:15:00,300,W 52 St,Broadway,Subscriber,Male,1992
2017-05-22 07:40:00,2017-05-22 07:45:50,350,W 52 St,Broadway,,Male,1970
2017-06-05 08:00:00,2017-06-05 08:07:30,450,Pier 40,Broadway,Subscriber,Female,1965
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-01 00:07:57,2017-01-01 00:20:53,775.0,A St,B St,Subscriber
1,2017-01-02 12:00:00,2017-01-02 12:16:40,1000.5,B St,A St,Customer
2,2017-03-03 12:30:00,2017-03-03 12:33:44,224.5,A St,B St,Subscriber
";

pub fn bikeshare() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Create a fresh directory inside the system temp dir holding the three
/// city datasets.
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_bikeshare_data", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create data dir");

    for (city, content) in [
        (City::Chicago, CHICAGO_CSV),
        (City::NewYorkCity, NEW_YORK_CSV),
        (City::Washington, WASHINGTON_CSV),
    ] {
        fs::write(dir.join(city.file_name()), content).expect("write dataset");
    }
    dir
}

/// Empty directory used as HOME so no user configuration leaks into tests.
pub fn setup_home(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_bikeshare_home", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create home dir");
    dir
}

pub fn table(csv: &str) -> TripTable {
    CsvSource::read_table(csv.as_bytes()).expect("fixture parses")
}

pub fn chicago() -> TripTable {
    table(CHICAGO_CSV)
}

pub fn new_york() -> TripTable {
    table(NEW_YORK_CSV)
}

pub fn washington() -> TripTable {
    table(WASHINGTON_CSV)
}
