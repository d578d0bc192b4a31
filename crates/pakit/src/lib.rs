//! Command pipeline for hashing files and msix package signatures.

pub mod cli;
pub mod report;
pub mod workflow;
