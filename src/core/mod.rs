//! Core algorithms – tab expansion, root traversal, and in-place rewriting.
//!
//! Nothing in this module knows about the CLI; the root set always arrives
//! as an explicit argument.

pub mod expand;
pub mod process;
pub mod walk;
