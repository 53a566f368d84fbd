mod discovery;
mod policy;
mod progress;
mod vulns;

pub use discovery::run_discovery;
pub use policy::SourcePolicy;
pub use progress::{NullSink, ProgressSink};
pub use vulns::run_vulnerability_scan;
