//! Interactive exploration loop.
//!
//! One iteration: filter prompts → load → raw row viewer → the four
//! statistics blocks → restart prompt.

pub mod selector;
pub mod viewer;

use crate::config::Config;
use crate::core::loader;
use crate::dataset::TripSource;
use crate::errors::{AppError, AppResult};
use crate::models::{FilterSelection, TripTable};
use crate::ui::messages::{error_line, warning_line};
use crate::ui::prompt::Terminal;
use crate::ui::report::{Reporter, render_block};
use log::{debug, warn};
use std::time::Instant;

pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

pub struct Session<'a, T: Terminal + ?Sized, S: TripSource + ?Sized> {
    term: &'a mut T,
    source: &'a S,
    cfg: &'a Config,
}

impl<'a, T: Terminal + ?Sized, S: TripSource + ?Sized> Session<'a, T, S> {
    pub fn new(term: &'a mut T, source: &'a S, cfg: &'a Config) -> Self {
        Self { term, source, cfg }
    }

    /// Loop until the restart prompt is declined or the input closes.
    pub fn run(&mut self) -> AppResult<()> {
        match self.run_loop() {
            Err(AppError::InputClosed) => {
                debug!("input closed, leaving the session");
                Ok(())
            }
            other => other,
        }
    }

    fn run_loop(&mut self) -> AppResult<()> {
        let mut iteration = 1;
        loop {
            debug!("session iteration {iteration}");
            let selection = selector::get_filters(&mut *self.term, &self.cfg.divider())?;
            self.explore(&selection)?;

            let answer = self.term.ask(RESTART_PROMPT)?;
            if !answer.eq_ignore_ascii_case("yes") {
                return Ok(());
            }
            iteration += 1;
        }
    }

    /// Load the selection and show rows and statistics for it.
    ///
    /// A dataset that cannot be loaded is reported and the iteration ends
    /// there; only terminal failures are returned.
    pub fn explore(&mut self, selection: &FilterSelection) -> AppResult<()> {
        let table = match loader::load(self.source, selection) {
            Ok(table) => table,
            Err(e) if e.is_load_failure() => {
                warn!("could not load {}: {e}", selection.city.name());
                self.term.say(&error_line(format!(
                    "Could not load the {} dataset: {e}",
                    selection.city.title()
                )))?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if table.is_empty() {
            self.term.say(&warning_line(format!(
                "No trips match the selected filters ({selection})."
            )))?;
            return Ok(());
        }

        viewer::view_rows(&mut *self.term, &table, self.cfg.page_size)?;
        self.term.say(&self.cfg.divider())?;
        self.report(&table)
    }

    /// Print the four statistics blocks in their fixed order.
    pub fn report(&mut self, table: &TripTable) -> AppResult<()> {
        let divider = self.cfg.divider();
        for reporter in Reporter::ALL {
            let started = Instant::now();
            let lines = reporter.lines(table);
            let elapsed = self.cfg.show_timing.then(|| started.elapsed());
            self.term
                .say(&render_block(reporter.heading(), &lines, elapsed, &divider))?;
        }
        Ok(())
    }
}
