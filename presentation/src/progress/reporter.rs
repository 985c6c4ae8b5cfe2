//! Spinner-based progress reporting for the two outbound calls

use bridgechat_application::ports::progress::QueryProgressNotifier;
use bridgechat_domain::Model;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows what the orchestrator is waiting on: the completion first,
/// then (when the model asked for one) the mapping lookup.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn start(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn finish(&self, message: Option<String>) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            match message {
                Some(msg) => pb.finish_with_message(msg),
                None => pb.finish_and_clear(),
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryProgressNotifier for ProgressReporter {
    fn on_completion_started(&self, model: &Model) {
        self.start(format!("Asking {}...", model));
    }

    fn on_completion_finished(&self) {
        self.finish(None);
    }

    fn on_lookup_started(&self, tool_name: &str) {
        self.start(format!("Looking up via {}...", tool_name));
    }

    fn on_lookup_finished(&self, success: bool) {
        let mark = if success {
            format!("{} lookup done", "v".green())
        } else {
            format!("{} lookup failed", "x".red())
        };
        self.finish(Some(mark));
    }
}
