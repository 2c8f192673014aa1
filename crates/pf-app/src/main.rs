use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

pub mod cli;

/// Exit code for a configuration error, same family as clap's usage errors.
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    // 1. Parser CLI (un --map invalide sort ici, avant tout accès fichier)
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match run(cli) {
        Ok(true) => ExitCode::FAILURE,
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("purifyllm: {e:#}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

/// Normalize the requested files. Returns whether anything changed.
fn run(cli: cli::Cli) -> Result<bool> {
    let settings = cli.into_settings();
    if settings.files.is_empty() {
        log::debug!("Aucun fichier fourni, rien à faire.");
        return Ok(false);
    }

    let report = pf_core::run(&settings).context("configuration invalide")?;
    Ok(report.changed())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn changed(args: &[&str]) -> bool {
        let argv = std::iter::once("purifyllm").chain(args.iter().copied());
        run(cli::Cli::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn no_files_reports_no_change() {
        assert!(!changed(&[]));
    }

    #[test]
    fn modified_file_reports_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(
            &path,
            "\u{201C}Hello\u{201D} \u{2014} world\u{2026}\nNBSP: X\u{00A0}Y\nZW: A\u{200B}B\n",
        )
        .unwrap();

        assert!(changed(&[path.to_str().unwrap()]));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"Hello\" - world...\nNBSP: X Y\nZW: AB\n"
        );
        // Second pass has nothing left to do.
        assert!(!changed(&[path.to_str().unwrap()]));
    }

    #[test]
    fn custom_map_without_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.txt");
        fs::write(&path, "rating: \u{2605}\u{2605}\u{2605}\n").unwrap();
        let p = path.to_str().unwrap();

        assert!(!changed(&["--no-defaults", p]));
        assert!(changed(&["--no-defaults", "--map", r"\u2605=*", p]));
        assert_eq!(fs::read_to_string(&path).unwrap(), "rating: ***\n");
    }

    #[test]
    fn ignored_directory_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("LICENSES")).unwrap();
        let license = dir.path().join("LICENSES/MIT.txt");
        let other = dir.path().join("notes.txt");
        fs::write(&license, "\u{2014}").unwrap();
        fs::write(&other, "\u{2014}").unwrap();

        assert!(changed(&[
            "--ignore-files",
            "LICENSES/",
            license.to_str().unwrap(),
            other.to_str().unwrap(),
        ]));
        assert_eq!(fs::read_to_string(&license).unwrap(), "\u{2014}");
        assert_eq!(fs::read_to_string(&other).unwrap(), "-");
    }

    #[test]
    fn invalid_glob_is_a_configuration_error() {
        let cli = cli::Cli::try_parse_from(["purifyllm", "--ignore-files", "[x", "a.txt"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("configuration invalide"));
    }
}
