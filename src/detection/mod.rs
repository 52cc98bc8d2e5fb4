//! Detection helpers shared by the command runner and the probes.
//!
//! - `find_executable`: PATH lookup with fallback directories
//! - `parse_version`: semantic version extraction from CLI output
//! - `first_line`: the summary line of multi-line tool output

mod parser;
mod path_finder;

pub(crate) use parser::{first_line, parse_version};
pub(crate) use path_finder::find_executable;
