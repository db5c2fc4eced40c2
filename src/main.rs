//! Orphaned code cleanup
//!
//! Usage: `orphan-cleanup [MANIFEST]`
//!
//! Runs in the current directory. Without a manifest the built-in list of
//! controllers is cleaned.

use orphan_cleanup::{clean_manifest, Manifest, TextCleaner};
use std::env;
use std::io;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let manifest = match env::args_os().nth(1) {
        Some(path) => Manifest::load(Path::new(&path))?,
        None => Manifest::default(),
    };

    let root = env::current_dir()?;
    let stdout = io::stdout();
    let reports = clean_manifest(&TextCleaner::default(), &root, &manifest, &mut stdout.lock())?;

    log::debug!(
        "cleaned {} of {} target(s)",
        reports.len(),
        manifest.files.len()
    );
    Ok(())
}
