use std::fs;
use std::io;
use std::path::Path;

use crate::mapping::ReplacementMapping;

/// Result of reading a file as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    /// Valid UTF-8.
    Strict(String),
    /// Invalid UTF-8; the offending bytes were dropped.
    Lossy(String),
    /// Could not be read at all.
    Unreadable,
}

impl Loaded {
    /// The decoded text, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Strict(text) | Self::Lossy(text) => Some(text),
            Self::Unreadable => None,
        }
    }
}

/// Why a path was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Missing, or not a regular file.
    NotAFile,
    /// Matched an ignore pattern.
    Ignored,
    /// Content could not be read.
    Unreadable,
}

/// What happened to one file.
#[derive(Debug)]
pub enum FileOutcome {
    Skipped(SkipReason),
    Unchanged,
    Modified,
    WriteFailed(io::Error),
}

impl FileOutcome {
    /// Counts towards the "changed" outcome signal.
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Modified | Self::WriteFailed(_))
    }
}

/// Decode `bytes` as UTF-8, dropping invalid sequences instead of
/// substituting U+FFFD.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// Read `path` as text: strict UTF-8 first, then the byte-dropping fallback.
#[must_use]
pub fn load_text(path: &Path) -> Loaded {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("lecture impossible {} : {e}", path.display());
            return Loaded::Unreadable;
        }
    };
    match String::from_utf8(bytes) {
        Ok(text) => Loaded::Strict(text),
        Err(e) => {
            log::debug!(
                "{} n'est pas en UTF-8 valide ({e}), décodage avec pertes",
                path.display()
            );
            Loaded::Lossy(decode_lossy(e.as_bytes()))
        }
    }
}

/// Normalize one file in place.
///
/// The caller has already checked that `path` is a regular file; anything
/// that cannot be read is skipped as [`SkipReason::Unreadable`]. The file
/// is rewritten only when the substituted text differs from what was read.
#[must_use]
pub fn process_file(path: &Path, mapping: &ReplacementMapping) -> FileOutcome {
    let loaded = load_text(path);
    let Some(content) = loaded.text() else {
        return FileOutcome::Skipped(SkipReason::Unreadable);
    };

    let normalized = mapping.apply(content);
    if normalized == content {
        return FileOutcome::Unchanged;
    }

    write_back(path, &normalized)
}

/// Overwrite `path` with `text` as UTF-8.
#[must_use]
pub fn write_back(path: &Path, text: &str) -> FileOutcome {
    match fs::write(path, text.as_bytes()) {
        Ok(()) => FileOutcome::Modified,
        Err(e) => FileOutcome::WriteFailed(e),
    }
}
