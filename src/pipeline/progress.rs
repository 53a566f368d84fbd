/// One-way progress notifications emitted at the start of each major
/// pipeline step. The pipeline never blocks on or inspects the sink.
pub trait ProgressSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Sink for callers that don't care about progress.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn notify(&self, _message: &str) {}
}
