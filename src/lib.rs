//! Orphaned code cleanup
//!
//! Removes dead feature-flag blocks and the retired `CreateRedirectResponse`
//! helper from controller sources. Matching is purely textual; see [`rules`]
//! for the exact shapes that are removed.

pub mod cleaner;
pub mod errors;
pub mod manifest;
pub mod rules;
pub mod utils;

// Re-export commonly used types
pub use cleaner::{clean_manifest, CleanReport, TextCleaner};
pub use errors::{CleanupError, Result};
pub use manifest::Manifest;
pub use rules::{RewriteRule, RuleOutcome, RuleSet};
