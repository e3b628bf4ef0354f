//! Command layer between argument parsing and the domain logic

pub mod input;
pub mod orchestration;

pub use orchestration::{run_request, CommandOutput, Request};
