//! Paged viewer for the raw rows of a filtered table.

use crate::errors::AppResult;
use crate::models::{TripRecord, TripTable};
use crate::models::filters::{month_title, weekday_title};
use crate::ui::prompt::Terminal;
use crate::utils::formatting::trim_float;
use crate::utils::table::{Column, Table};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    /// Nothing shown yet.
    Idle,
    /// `offset` is the first row of the next page.
    Paging { offset: usize },
    /// Every row has been shown at least once.
    ConfirmReplay,
    Done,
}

/// Yes/no driven pager over `len` rows.
#[derive(Debug, Clone)]
pub struct RowViewer {
    state: ViewerState,
    len: usize,
    page_size: usize,
}

impl RowViewer {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            state: ViewerState::Idle,
            len,
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Question for the current state; `None` once done.
    pub fn prompt(&self) -> Option<String> {
        match self.state {
            ViewerState::Idle => Some(format!(
                "Would you like to view {} rows of individual trip data? Enter yes or no: ",
                self.page_size
            )),
            ViewerState::Paging { .. } => Some(format!(
                "Would you like to view the next {} rows? Enter yes or no: ",
                self.page_size
            )),
            ViewerState::ConfirmReplay => Some(
                "You have seen all the data, do you want to see it again? Enter yes or no: "
                    .to_string(),
            ),
            ViewerState::Done => None,
        }
    }

    /// Feed the answer to the current prompt. Returns the rows to show next.
    pub fn answer(&mut self, yes: bool) -> Option<Range<usize>> {
        let start = match self.state {
            _ if !yes => {
                self.state = ViewerState::Done;
                return None;
            }
            // a yes to the replay prompt shows the first page right away
            ViewerState::Idle | ViewerState::ConfirmReplay => 0,
            ViewerState::Paging { offset } => offset,
            ViewerState::Done => return None,
        };

        if self.len == 0 {
            self.state = ViewerState::Done;
            return None;
        }

        let next = start + self.page_size;
        self.state = if next >= self.len {
            ViewerState::ConfirmReplay
        } else {
            ViewerState::Paging { offset: next }
        };
        Some(start..next.min(self.len))
    }
}

/// Run the pager against the terminal until the user declines.
pub fn view_rows<T: Terminal + ?Sized>(
    term: &mut T,
    table: &TripTable,
    page_size: usize,
) -> AppResult<()> {
    let mut viewer = RowViewer::new(table.len(), page_size);
    while let Some(prompt) = viewer.prompt() {
        let yes = term.confirm(&prompt)?;
        if let Some(rows) = viewer.answer(yes) {
            term.say(&render_rows(table, rows))?;
        }
    }
    Ok(())
}

/// Aligned text table of `rows`, numbered by position in the table.
pub fn render_rows(table: &TripTable, rows: Range<usize>) -> String {
    let columns = table.columns();

    let mut headers = vec![Column::right(""), Column::left("Start Time")];
    if columns.end_time {
        headers.push(Column::left("End Time"));
    }
    headers.push(Column::right("Trip Duration"));
    headers.push(Column::left("Start Station"));
    headers.push(Column::left("End Station"));
    headers.push(Column::left("User Type"));
    if columns.gender {
        headers.push(Column::left("Gender"));
    }
    if columns.birth_year {
        headers.push(Column::right("Birth Year"));
    }
    headers.push(Column::left("Month"));
    headers.push(Column::left("Weekday"));
    headers.push(Column::right("Hour"));

    let mut out = Table::new(headers);
    let end = rows.end.min(table.len());
    let start = rows.start.min(end);
    let page: &[TripRecord] = table.trips().get(start..end).unwrap_or_default();

    for (i, trip) in page.iter().enumerate() {
        let mut row = vec![
            (start + i).to_string(),
            trip.start_time().format("%Y-%m-%d %H:%M:%S").to_string(),
        ];
        if columns.end_time {
            row.push(trip.end_time.clone().unwrap_or_default());
        }
        row.push(trim_float(trip.duration));
        row.push(trip.start_station.clone());
        row.push(trip.end_station.clone());
        row.push(trip.user_type.clone().unwrap_or_default());
        if columns.gender {
            row.push(trip.gender.clone().unwrap_or_default());
        }
        if columns.birth_year {
            row.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        row.push(month_title(trip.month()));
        row.push(weekday_title(trip.weekday()));
        row.push(trip.hour().to_string());
        out.add_row(row);
    }

    out.render()
}
