//! Text cleaner and manifest runner
//!
//! [`TextCleaner`] handles one document: read it whole, run the rule set,
//! write the result back over the original. [`clean_manifest`] walks a
//! manifest and drives the cleaner for each file that exists, printing the
//! progress lines operators expect:
//!
//! ```text
//! Cleaning Controllers/ContentController.cs...
//! Cleaned Controllers/ContentController.cs
//! Cleanup complete!
//! ```

use crate::errors::{CleanupError, Result};
use crate::manifest::Manifest;
use crate::rules::{RuleOutcome, RuleSet};
use crate::utils::fs::{read_text, write_atomic};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What happened to a single cleaned file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub path: PathBuf,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub outcomes: Vec<RuleOutcome>,
}

impl CleanReport {
    /// Total spans removed across all rules
    pub fn spans_removed(&self) -> usize {
        self.outcomes.iter().map(|o| o.spans).sum()
    }

    pub fn is_changed(&self) -> bool {
        self.spans_removed() > 0
    }
}

/// Removes dead code from one document at a time
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    rules: RuleSet,
}

impl TextCleaner {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Clean a document held in memory
    pub fn clean_str(&self, text: &str) -> String {
        self.rules.apply(text)
    }

    /// Clean a file in place.
    ///
    /// The file is read completely before anything is written. The result is
    /// always written back, even when no rule matched.
    pub fn clean_file(&self, path: &Path) -> Result<CleanReport> {
        let original = read_text(path)?;
        let (cleaned, outcomes) = self.rules.apply_with_outcomes(&original);

        write_atomic(path, &cleaned)?;

        let report = CleanReport {
            path: path.to_path_buf(),
            bytes_before: original.len(),
            bytes_after: cleaned.len(),
            outcomes,
        };

        if report.is_changed() {
            log::info!(
                "{}: removed {} span(s), {} -> {} bytes",
                path.display(),
                report.spans_removed(),
                report.bytes_before,
                report.bytes_after
            );
        } else {
            log::debug!("{}: no rule matched", path.display());
        }

        Ok(report)
    }
}

/// Clean every manifest entry that exists under `root`.
///
/// Missing entries are skipped without output. The first file that cannot be
/// read or written aborts the run; entries after it are left untouched.
pub fn clean_manifest<W: Write>(
    cleaner: &TextCleaner,
    root: &Path,
    manifest: &Manifest,
    out: &mut W,
) -> Result<Vec<CleanReport>> {
    let mut reports = Vec::new();

    for entry in manifest.iter() {
        let path = root.join(entry);
        if !path.exists() {
            continue;
        }

        writeln!(out, "Cleaning {}...", entry.display()).map_err(CleanupError::Output)?;
        reports.push(cleaner.clean_file(&path)?);
        writeln!(out, "Cleaned {}", entry.display()).map_err(CleanupError::Output)?;
    }

    writeln!(out, "Cleanup complete!").map_err(CleanupError::Output)?;
    Ok(reports)
}
