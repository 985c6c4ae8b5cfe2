//! Progress callbacks for the two outbound calls of a query.

use bridgechat_domain::Model;

/// Notifications emitted while a query is in flight, so the presentation
/// layer can show what the orchestrator is waiting on.
pub trait QueryProgressNotifier: Send + Sync {
    /// The completion request is about to be sent.
    fn on_completion_started(&self, model: &Model);

    /// The completion arrived (or failed).
    fn on_completion_finished(&self);

    /// A mapping lookup is about to run.
    fn on_lookup_started(&self, tool_name: &str);

    /// The lookup finished.
    fn on_lookup_finished(&self, success: bool);
}

/// No-op implementation for tests and quiet mode.
pub struct NoQueryProgress;

impl QueryProgressNotifier for NoQueryProgress {
    fn on_completion_started(&self, _model: &Model) {}
    fn on_completion_finished(&self) {}
    fn on_lookup_started(&self, _tool_name: &str) {}
    fn on_lookup_finished(&self, _success: bool) {}
}
