//! Filter selection prompts.

use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, FilterSelection, MonthFilter};
use crate::ui::prompt::Terminal;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const MONTH_PROMPT: &str = "Which month? All, January, February, March, April, May, or June? ";
pub const DAY_PROMPT: &str = "Which day? All, Monday, Tuesday, ..., Sunday? ";

pub fn city_prompt() -> String {
    let cities = City::names();
    format!(
        "Please choose one of the {} cities ({}): ",
        cities.len(),
        cities.join(", ")
    )
}

/// Ask for city, month and day. Invalid answers are re-prompted by the
/// terminal, so only a closed input ends this early.
pub fn get_filters<T: Terminal + ?Sized>(term: &mut T, divider: &str) -> AppResult<FilterSelection> {
    term.say(GREETING)?;

    let city = term.choose(&city_prompt(), &City::names())?;
    let city = City::from_name(&city).ok_or(AppError::InvalidChoice(city))?;

    let month = term.choose(MONTH_PROMPT, &MonthFilter::choices())?;
    let month = MonthFilter::from_name(&month).ok_or(AppError::InvalidChoice(month))?;

    let day = term.choose(DAY_PROMPT, &DayFilter::choices())?;
    let day = DayFilter::from_name(&day).ok_or(AppError::InvalidChoice(day))?;

    term.say(divider)?;
    Ok(FilterSelection::new(city, month, day))
}
