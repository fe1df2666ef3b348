//! Namespace-Level Items
//!
//! Top-level declarations: `Namespace`, `Record`, `Obj`, `Fn`, plus the
//! `Declarations` scope shared by their bodies.

use std::fmt;

use super::types::{LocalRef, Union};
use crate::{Span, Spanned};

/// A dotted namespace identifier, e.g. `app.feed.post` as three segments.
///
/// Segments are always non-empty; the parser rejects empty identifiers.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NsName {
    pub segments: Vec<String>,
}

impl NsName {
    pub fn new(segments: Vec<String>) -> Self {
        NsName { segments }
    }

    /// The dotted namespace id string.
    pub fn nsid(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for NsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nsid())
    }
}

/// The root unit: one namespace per source file.
///
/// Declaration order within each list is preserved through lowering.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Namespace {
    pub name: NsName,
    pub records: Vec<Record>,
    pub objects: Vec<Obj>,
    pub functions: Vec<Fn>,
    pub span: Span,
}

/// A top-level record declaration.
///
/// Records carry a fixed key scheme: only the time-sortable identifier
/// (`tid`) scheme exists in the grammar today.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Record {
    pub name: String,
    pub doc: Option<String>,
    pub body: Declarations,
    pub span: Span,
}

/// A reusable object shape, referenceable by name.
///
/// Appears both at the top of a namespace and nested inside a
/// `Declarations` scope; the two positions lower differently.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Obj {
    pub name: String,
    pub doc: Option<String>,
    pub properties: Vec<Property>,
    pub span: Span,
}

/// The kind tag on a callable function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FnKind {
    Query,
    Procedure,
    Subscription,
}

impl FnKind {
    /// The schema type keyword for this kind.
    pub fn name(self) -> &'static str {
        match self {
            FnKind::Query => "query",
            FnKind::Procedure => "procedure",
            FnKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for FnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A callable function declaration.
///
/// `props` holds the input parameters; `body` holds the output shape.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fn {
    pub name: String,
    pub kind: FnKind,
    pub doc: Option<String>,
    pub props: Declarations,
    pub body: Declarations,
    pub span: Span,
}

/// Declaration of an enumerable token type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AtomDecl {
    pub name: String,
    pub span: Span,
}

/// A declarations scope: inline fields plus auxiliary nested declarations.
///
/// `properties` and `refs` become the scope's own field map; `objects` and
/// `atoms` are hoisted out as sibling named definitions in the enclosing
/// document. Names are assumed unique within one scope (the linker enforces
/// this, not the lowering pass).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Declarations {
    pub properties: Vec<Property>,
    pub refs: Vec<LocalRef>,
    pub objects: Vec<Obj>,
    pub atoms: Vec<AtomDecl>,
    pub span: Span,
}

/// A named field inside a declarations scope or object.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Property {
    pub key: String,
    pub doc: Option<String>,
    pub optional: bool,
    pub value: Union,
    pub span: Span,
}

impl Spanned for Namespace {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Record {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Obj {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Fn {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for AtomDecl {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Declarations {
    fn span(&self) -> Span {
        self.span
    }
}

impl Spanned for Property {
    fn span(&self) -> Span {
        self.span
    }
}
