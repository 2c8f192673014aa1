use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::filter::IgnoreFilter;
use crate::mapping::{Override, ReplacementMapping};
use crate::processor::{FileOutcome, SkipReason, process_file};

/// Everything one invocation needs.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Files to process, in order.
    pub files: Vec<PathBuf>,
    /// Glob patterns of paths to leave alone.
    pub ignore_patterns: Vec<String>,
    /// Seed the mapping with the built-in table.
    pub use_defaults: bool,
    /// `--map` entries, applied after the defaults.
    pub overrides: Vec<Override>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            ignore_patterns: Vec::new(),
            use_defaults: true,
            overrides: Vec::new(),
        }
    }
}

/// Per-file outcomes of one run, in input order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
}

impl RunReport {
    /// Any file modified, or any write failed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.outcomes.iter().any(|(_, o)| o.is_change())
    }

    #[must_use]
    pub fn modified_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Modified))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::WriteFailed(_)))
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped(_)))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Visit one path: existence check, ignore check, then normalize.
fn visit(path: &Path, filter: &IgnoreFilter, mapping: &ReplacementMapping) -> FileOutcome {
    if !path.is_file() {
        log::debug!("ignoré (pas un fichier) : {}", path.display());
        return FileOutcome::Skipped(SkipReason::NotAFile);
    }
    if filter.is_ignored(path) {
        log::debug!("ignoré (motif) : {}", path.display());
        return FileOutcome::Skipped(SkipReason::Ignored);
    }
    let outcome = process_file(path, mapping);
    match &outcome {
        FileOutcome::Modified => log::info!("modifié : {}", path.display()),
        FileOutcome::WriteFailed(e) => {
            eprintln!("purifyllm: failed to write {}: {e}", path.display());
        }
        FileOutcome::Skipped(reason) => {
            log::debug!("ignoré ({reason:?}) : {}", path.display());
        }
        FileOutcome::Unchanged => {}
    }
    outcome
}

/// Run one invocation.
///
/// The mapping and the ignore filter are built before any file is touched,
/// so a configuration error leaves every file as it was.
///
/// # Errors
/// Returns a [`CoreError`] if an ignore pattern does not compile.
pub fn run(settings: &Settings) -> Result<RunReport, CoreError> {
    let mapping = ReplacementMapping::build(settings.use_defaults, &settings.overrides);
    let filter = IgnoreFilter::new(settings.ignore_patterns.as_slice())?;
    log::debug!(
        "{} substitutions, {} motifs d'exclusion, {} fichiers",
        mapping.len(),
        filter.len(),
        settings.files.len()
    );

    let mut report = RunReport::default();
    for path in &settings.files {
        let outcome = visit(path, &filter, &mapping);
        report.outcomes.push((path.clone(), outcome));
    }

    log::info!(
        "{} fichier(s) modifié(s), {} échec(s) d'écriture, {} ignoré(s)",
        report.modified_count(),
        report.failed_count(),
        report.skipped_count()
    );
    Ok(report)
}
