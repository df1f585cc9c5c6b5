//! Core utilities and types for crdgo.
//!
//! This crate provides the file plumbing and small string helpers shared by
//! every other crate in the workspace.

mod file;
mod utils;
mod version;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// String utilities
pub use utils::{capitalize, non_vendor_path};
pub use version::Version;
