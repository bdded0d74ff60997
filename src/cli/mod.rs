//! Command Line Interface (CLI) layer for minires.
//!
//! Defines argument parsing (`args`), error types (`errors`), and the
//! orchestration logic (`runner`) that merges flags with an optional JSON
//! config file and hands the result to `minires::api::process`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
