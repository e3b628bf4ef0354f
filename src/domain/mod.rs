//! Domain logic - version grammar, precedence and bump rules, free of I/O

pub mod diff;
pub mod field;
pub mod grammar;
pub mod identifier;
pub mod suffix;
pub mod version;

pub use diff::{diff, Difference};
pub use field::{extract, extract_pretty, Field};
pub use grammar::is_valid;
pub use identifier::{compare_prerelease, Identifier};
pub use suffix::{bump_suffix, split_numeric_suffix};
pub use version::{compare, ParsedVersion};
