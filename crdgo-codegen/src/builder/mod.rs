//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - indented text output
//! - [`CodeFragment`] - intermediate representation for code pieces
//! - [`Renderable`] - types that can be converted to code fragments
//! - [`Expr`] - Go expression trees
//! - [`Indent`] - indentation configuration

mod code_builder;
mod expr;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use expr::{Entry, Expr};
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
