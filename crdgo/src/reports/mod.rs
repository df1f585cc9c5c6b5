//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod explain;
mod generate;
mod output;

pub use check::CheckReport;
pub use explain::{
    ConstructorInfo, DescriptorInfo, ExplainReport, LintInfo, ManifestInfo, PhaseInfo,
};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenFile};
pub use output::{Report, TerminalOutput};
