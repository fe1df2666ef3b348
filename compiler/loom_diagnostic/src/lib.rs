//! Diagnostic reporting for the Loom schema compiler.
//!
//! The conformance pass accumulates diagnostics rather than failing: every
//! violation across every parameter and every type node is reported, so a
//! front end can surface all problems in one pass over the tree.

mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};
