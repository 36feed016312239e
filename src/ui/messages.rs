use ansi_term::Colour::{Blue, Green, Red, Yellow};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info_line<T: fmt::Display>(msg: T) -> String {
    format!("{} {}", Blue.bold().paint(ICON_INFO), msg)
}

pub fn success_line<T: fmt::Display>(msg: T) -> String {
    format!("{} {}", Green.bold().paint(ICON_OK), msg)
}

pub fn warning_line<T: fmt::Display>(msg: T) -> String {
    format!("{} {}", Yellow.bold().paint(ICON_WARN), msg)
}

pub fn error_line<T: fmt::Display>(msg: T) -> String {
    format!("{} {}", Red.bold().paint(ICON_ERR), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", info_line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", success_line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", warning_line(msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", error_line(msg));
}

/// Section header
pub fn header_line<T: fmt::Display>(msg: T) -> String {
    format!("{}", Blue.bold().paint(format!("====================== {msg}")))
}
