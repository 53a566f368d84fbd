pub mod emails;
pub mod harvest;
pub mod lines;
pub mod probe;
pub mod relations;
pub mod vuln;

pub use emails::{extract_emails, is_denylisted};
pub use harvest::{parse_harvest, HarvestOutput};
pub use lines::parse_host_list;
pub use probe::parse_probe_lines;
pub use relations::{parse_relations, RelationOutput};
pub use vuln::parse_vuln_lines;
