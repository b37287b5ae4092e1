//! CLI command handlers. Each command is in its own file.

mod check;
mod filter;
mod links;
mod sample;

pub use check::run_check;
pub use filter::run_filter;
pub use links::run_links;
pub use sample::{run_sample, SampleArgs};
