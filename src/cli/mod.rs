//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes the flag surface, the operation dispatcher, the interactive
//! prompt flow, and result reporting.

mod commands;
mod prompts;
mod report;

pub use commands::*;
pub use prompts::*;
pub use report::*;
