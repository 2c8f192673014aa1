/// Core of purifyllm: replacement table, ignore globs and in-place file
/// normalization.
///
/// The binary crate only parses arguments and maps the [`RunReport`] to an
/// exit code.

pub mod error;
pub mod escape;
pub mod filter;
pub mod mapping;
pub mod processor;
pub mod runner;

pub use error::CoreError;
pub use filter::IgnoreFilter;
pub use mapping::{Override, ReplacementMapping};
pub use processor::{FileOutcome, Loaded, SkipReason};
pub use runner::{RunReport, Settings, run};
