use std::path::PathBuf;

use clap::Parser;
use pf_core::{Override, Settings};

/// purifyllm: replace smart quotes, dashes, ellipses, non-breaking and
/// zero-width spaces with plain ASCII, in place.
///
/// Exits 1 when a file was modified (or could not be written), so it can
/// run as a pre-commit hook.
#[derive(Parser, Debug)]
#[command(name = "purifyllm", version, about, long_about = None)]
pub struct Cli {
    /// Files to process (provided by pre-commit).
    pub filenames: Vec<PathBuf>,

    /// Glob pattern of files to ignore (repeatable). Matched against the full
    /// path, and at any depth. Examples: 'LICENSES/**', '**/vendor/**', '*.md'.
    #[arg(long = "ignore-files", value_name = "GLOB")]
    pub ignore_files: Vec<String>,

    /// Disable the default replacements and use only --map entries.
    #[arg(long, default_value_t = false)]
    pub no_defaults: bool,

    /// Additional replacement key=value (repeatable). Unicode escapes are
    /// decoded, e.g. --map '\u2014=-' --map "\u2019='".
    #[arg(long = "map", value_name = "KEY=VALUE", value_parser = Override::parse)]
    pub maps: Vec<Override>,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Settings for one run of the normalizer.
    #[must_use]
    pub fn into_settings(self) -> Settings {
        Settings {
            files: self.filenames,
            ignore_patterns: self.ignore_files,
            use_defaults: !self.no_defaults,
            overrides: self.maps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "purifyllm",
            "--no-defaults",
            "--map",
            r"\u2605=*",
            "--ignore-files",
            "LICENSES/**",
            "--ignore-files",
            "*.md",
            "a.txt",
            "b.txt",
        ])
        .unwrap();
        let settings = cli.into_settings();
        assert!(!settings.use_defaults);
        assert_eq!(settings.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(settings.ignore_patterns, vec!["LICENSES/**", "*.md"]);
        assert_eq!(settings.overrides.len(), 1);
        assert_eq!(settings.overrides[0].key, "\u{2605}");
        assert_eq!(settings.overrides[0].value, "*");
    }

    #[test]
    fn defaults_when_no_arguments() {
        let cli = Cli::try_parse_from(["purifyllm"]).unwrap();
        assert!(cli.filenames.is_empty());
        assert_eq!(cli.log_level, "warn");
        assert!(cli.into_settings().use_defaults);
    }

    #[test]
    fn map_without_separator_is_rejected() {
        let err = Cli::try_parse_from(["purifyllm", "--map", "oops", "a.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn map_with_empty_key_is_a_usage_error() {
        let err = Cli::try_parse_from(["purifyllm", "--map", "=x", "a.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("empty key"));
    }
}
