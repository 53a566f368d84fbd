pub mod locate;
pub mod process;
pub mod tools;

pub use process::{ToolInput, ToolOutput};
