use thiserror::Error;

/// Configuration errors. All of them are raised before any file is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// `--map` entry without a `=` separator, or with an empty key.
    #[error(
        "invalid mapping '{entry}': {reason}. Expected format key=value (values may be unicode escapes, e.g. \\u2014=-)"
    )]
    InvalidMapping {
        /// The raw entry as given on the command line.
        entry: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Malformed backslash escape inside a mapping key or value.
    #[error("invalid escape in '{input}' at byte {offset}: {reason}")]
    InvalidEscape {
        /// The text being decoded.
        input: String,
        /// Byte offset of the offending backslash.
        offset: usize,
        /// What is wrong with the escape.
        reason: &'static str,
    },

    /// Ignore pattern that is not a valid glob.
    #[error("invalid ignore pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Parser message from globset.
        reason: String,
    },
}
