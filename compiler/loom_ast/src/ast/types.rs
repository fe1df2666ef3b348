//! Property value types: unions, primitive type usages, and references.

use std::fmt;

use super::items::{Declarations, NsName};
use crate::{Span, Spanned};

/// A property value: an ordered list of alternatives.
///
/// The lowering pass applies the collapse rule here: a single-member union
/// that is neither `closed` nor `forced` is indistinguishable from its member
/// type and lowers without a union wrapper.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Union {
    pub members: Vec<UnionMember>,
    /// Declared exhaustive: no server-side extension expected.
    pub closed: bool,
    /// Kept in wrapped form even with a single member.
    pub forced: bool,
    /// Array wrapper with optional length bounds.
    pub array: Option<Slice>,
    pub span: Span,
}

/// One alternative inside a union.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnionMember {
    /// Reference to an atom (token) declaration.
    Atom(AtomRef),
    /// A primitive type usage with parameters.
    Prim(TypeExpr),
    /// An inline declarations scope.
    Decls(Declarations),
    /// Cross-namespace reference.
    Global(GlobalRef),
    /// Within-file reference.
    Local(LocalRef),
    /// A nested union.
    Union(Union),
}

impl Spanned for UnionMember {
    fn span(&self) -> Span {
        match self {
            UnionMember::Atom(a) => a.span,
            UnionMember::Prim(t) => t.span,
            UnionMember::Decls(d) => d.span,
            UnionMember::Global(g) => g.span,
            UnionMember::Local(l) => l.span,
            UnionMember::Union(u) => u.span,
        }
    }
}

/// The primitive types of the schema language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    String,
    Integer,
    Boolean,
    Blob,
    DateTime,
    Did,
    Uri,
}

impl Primitive {
    /// The grammar-level name of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "String",
            Primitive::Integer => "Integer",
            Primitive::Boolean => "Boolean",
            Primitive::Blob => "Blob",
            Primitive::DateTime => "DateTime",
            Primitive::Did => "Did",
            Primitive::Uri => "Uri",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A primitive type usage site: primitive name plus ordered parameters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeExpr {
    pub prim: Primitive,
    pub params: Vec<TypeParam>,
    pub span: Span,
}

/// A single type constraint, e.g. `length: 1..64` or `default: 0`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParam {
    pub key: String,
    pub value: ParamValue,
    pub span: Span,
}

/// A parameter value literal.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Slice(Slice),
}

/// A numeric min/max range. Either bound may be open.
///
/// Shared by slice-valued parameters (`range: 1..5`) and the union array
/// wrapper's length bounds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Slice {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Slice {
    pub const fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Slice { min, max }
    }
}

/// A reference to a declarations-scope name within the same file.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LocalRef {
    pub name: String,
    pub span: Span,
}

/// A reference across namespaces, with an optional `#view` suffix.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GlobalRef {
    pub nsid: NsName,
    pub view: Option<String>,
    pub span: Span,
}

/// A reference to an atom (token) declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AtomRef {
    pub name: String,
    pub span: Span,
}

impl Spanned for Union {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for TypeExpr {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for TypeParam {
    fn span(&self) -> Span {
        self.span
    }
}
