pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{bump_suffix, compare, diff, extract, is_valid, Difference, Field, ParsedVersion};
pub use error::{Result, SemverError};
