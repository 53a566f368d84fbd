pub mod findings;
pub mod merge;

pub use findings::aggregate_findings;
pub use merge::{merge_emails, merge_subdomains};
