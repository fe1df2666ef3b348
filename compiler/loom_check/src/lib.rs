//! Type parameter conformance checking for the Loom compiler.
//!
//! A table-driven semantic pass run once per primitive-type usage node. For
//! every parameter it verifies, in order, that the name is legal for the
//! primitive, that it is not a duplicate, and that the value satisfies the
//! parameter's predicate — accumulating diagnostics and never failing hard.
//!
//! The check is independent of the lowering pass in `loom_lower`: both read
//! the same tree, neither calls the other, and diagnostics here never block
//! document production.

mod check;
mod table;

pub use check::{check_namespace, check_type};
