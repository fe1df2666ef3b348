//! Syntax tree types for the Loom schema compiler.
//!
//! The nodes in this crate are produced by the parser/linker front end and
//! consumed read-only by the lowering and conformance passes. Everything here
//! is plain immutable data: the passes never mutate a tree, they only read it
//! and build new output values.
//!
//! # Module Structure
//!
//! - `span`: compact source location spans
//! - `ast`: the node types (`Namespace`, `Record`, `Obj`, `Fn`, `Union`, ...)
//! - `visitor`: traversal over primitive-type usage sites

pub mod ast;
mod span;
mod visitor;

pub use ast::{
    AtomDecl, AtomRef, Declarations, Fn, FnKind, GlobalRef, LocalRef, Namespace, NsName, Obj,
    ParamValue, Primitive, Property, Record, Slice, TypeExpr, TypeParam, Union, UnionMember,
};
pub use span::{Span, Spanned};
pub use visitor::for_each_type;
