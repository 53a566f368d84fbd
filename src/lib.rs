pub mod aggregate;
pub mod config;
pub mod external;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod utils;

// re-export the stage entry points used by callers and tests
pub use crate::pipeline::{run_discovery, run_vulnerability_scan};
