//! Utility modules for orphaned code cleanup

pub mod fs;
