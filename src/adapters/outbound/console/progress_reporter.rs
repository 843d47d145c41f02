use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} listings - {msg}";

/// StderrProgressReporter adapter for reporting load progress to stderr
///
/// Writes to stderr so the board on stdout stays clean. The bar is created
/// on the first progress report and cleared on completion or warning.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut bar = self.progress_bar.borrow_mut();
        if let Some(existing) = bar.as_ref() {
            return existing.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let created = ProgressBar::new(total as u64);
        created.set_style(style);
        *bar = Some(created.clone());
        created
    }

    fn clear_progress_bar(&self) {
        if let Some(bar) = self.progress_bar.borrow().as_ref() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_progress(&self, settled: usize, total: usize, message: Option<&str>) {
        let bar = self.get_or_create_progress_bar(total);
        bar.set_position(settled as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_warning(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }
}
