//! Loom syntax tree nodes.
//!
//! One `Namespace` is compiled per source file. A namespace owns top-level
//! records, reusable objects, and callable functions; their bodies nest
//! `Declarations` scopes, which in turn may nest further objects and atom
//! declarations (hoisted out during lowering).
//!
//! # Module Structure
//!
//! - `items`: namespace-level declarations (`Record`, `Obj`, `Fn`, ...)
//! - `types`: property values (`Union`, `TypeExpr`, refs, parameters)

mod items;
mod types;

pub use items::{AtomDecl, Declarations, Fn, FnKind, Namespace, NsName, Obj, Property, Record};
pub use types::{
    AtomRef, GlobalRef, LocalRef, ParamValue, Primitive, Slice, TypeExpr, TypeParam, Union,
    UnionMember,
};

#[cfg(test)]
mod tests;
