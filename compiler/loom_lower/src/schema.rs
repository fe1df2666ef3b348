//! The lowered schema document model.
//!
//! Output shapes are structs with optional fields omitted at serialization
//! time, never dynamically-shaped maps with explicit nulls. Where a document
//! needs an ordered map with caller-chosen keys (`defs`, `properties`), the
//! `Entries` wrapper keeps insertion order through serialization.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use loom_ast::FnKind;

/// Ordered `(key, value)` entries serialized as a JSON map.
///
/// Declaration order in the source is meaningful and must survive into the
/// emitted document, so a hash map is not an option here.
#[derive(Clone, Debug, PartialEq)]
pub struct Entries<T>(Vec<(String, T)>);

impl<T> Entries<T> {
    pub fn new() -> Self {
        Entries(Vec::new())
    }

    /// Append an entry, preserving insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: T) {
        self.0.push((key.into(), value));
    }

    /// Look up the first entry with the given key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Entries::new()
    }
}

impl<T> FromIterator<(String, T)> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Entries(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Entries<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T> Extend<(String, T)> for Entries<T> {
    fn extend<I: IntoIterator<Item = (String, T)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Serialize> Serialize for Entries<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A complete lowered schema document: one per top-level declaration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    pub lexicon: u32,
    pub id: String,
    pub defs: Entries<Def>,
}

impl Document {
    /// Create a version-1 document.
    pub fn new(id: String, defs: Entries<Def>) -> Self {
        Document {
            lexicon: 1,
            id,
            defs,
        }
    }
}

/// A named definition inside a document's `defs` map.
///
/// `main` is one of the first three variants; hoisted auxiliary definitions
/// are full objects or tokens.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Def {
    Record(RecordDef),
    ObjectStub(ObjectStub),
    Function(FunctionDef),
    Object(ObjectDef),
    Token(TokenDef),
}

/// `{type: "record", key: "tid", description?, record}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordDef {
    #[serde(rename = "type")]
    ty: &'static str,
    key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub record: ObjectDef,
}

impl RecordDef {
    /// Only the time-sortable identifier key scheme exists today.
    pub fn new(description: Option<String>, record: ObjectDef) -> Self {
        RecordDef {
            ty: "record",
            key: "tid",
            description,
            record,
        }
    }
}

/// The placeholder emitted for a top-level object declaration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectStub {
    #[serde(rename = "type")]
    ty: &'static str,
}

impl ObjectStub {
    pub fn new() -> Self {
        ObjectStub { ty: "object" }
    }
}

impl Default for ObjectStub {
    fn default() -> Self {
        ObjectStub::new()
    }
}

/// `{type: <kind>, description?, parameters, output}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FunctionDef {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: ParamsDef,
    pub output: OutputDef,
}

impl FunctionDef {
    pub fn new(
        kind: FnKind,
        description: Option<String>,
        parameters: ParamsDef,
        output: OutputDef,
    ) -> Self {
        FunctionDef {
            ty: kind.name(),
            description,
            parameters,
            output,
        }
    }
}

/// A function's input parameter block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParamsDef {
    #[serde(rename = "type")]
    ty: &'static str,
    pub required: Vec<String>,
    pub properties: Entries<Fragment>,
}

impl ParamsDef {
    pub fn new(required: Vec<String>, properties: Entries<Fragment>) -> Self {
        ParamsDef {
            ty: "params",
            required,
            properties,
        }
    }
}

/// A function's output block. The transport encoding is fixed; the grammar
/// has no override for it yet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputDef {
    encoding: &'static str,
    #[serde(rename = "type")]
    ty: &'static str,
    pub schema: Entries<Fragment>,
}

impl OutputDef {
    pub fn new(schema: Entries<Fragment>) -> Self {
        OutputDef {
            encoding: "application/json",
            ty: "object",
            schema,
        }
    }
}

/// `{type: "object", description?, required, properties}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectDef {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: Vec<String>,
    pub properties: Entries<Fragment>,
}

impl ObjectDef {
    pub fn new(
        description: Option<String>,
        required: Vec<String>,
        properties: Entries<Fragment>,
    ) -> Self {
        ObjectDef {
            ty: "object",
            description,
            required,
            properties,
        }
    }
}

/// `{type: "token"}` — an opaque enumerable token definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TokenDef {
    #[serde(rename = "type")]
    ty: &'static str,
}

impl TokenDef {
    pub fn new() -> Self {
        TokenDef { ty: "token" }
    }
}

impl Default for TokenDef {
    fn default() -> Self {
        TokenDef::new()
    }
}

/// A lowered property-value fragment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fragment {
    Primitive(PrimitiveDef),
    Ref(RefDef),
    Union(UnionDef),
    Array(ArrayDef),
    Object(ObjectDef),
    Decls(DeclsFragment),
}

impl Fragment {
    /// Splice a doc string into the fragment, whatever its shape.
    #[must_use]
    pub fn with_description(mut self, doc: Option<String>) -> Fragment {
        if doc.is_none() {
            return self;
        }
        match &mut self {
            Fragment::Primitive(d) => d.description = doc,
            Fragment::Ref(d) => d.description = doc,
            Fragment::Union(d) => d.description = doc,
            Fragment::Array(d) => d.description = doc,
            Fragment::Object(d) => d.description = doc,
            Fragment::Decls(d) => d.description = doc,
        }
        self
    }
}

/// `{type, description?, format?, ...params}` — a primitive type usage.
///
/// Normalized parameters are flattened in alongside the type keyword under
/// their own keys; the lowering pass performs no conformance checking here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrimitiveDef {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
    #[serde(flatten)]
    pub params: Entries<Value>,
}

impl PrimitiveDef {
    pub fn new(keyword: &'static str, format: Option<&'static str>, params: Entries<Value>) -> Self {
        PrimitiveDef {
            ty: keyword,
            description: None,
            format,
            params,
        }
    }
}

/// `{type: "ref", ref, description?}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefDef {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(rename = "ref")]
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RefDef {
    pub fn new(target: impl Into<String>) -> Self {
        RefDef {
            ty: "ref",
            target: target.into(),
            description: None,
        }
    }
}

/// `{type: "union", closed?: true, refs, description?}`.
///
/// `closed` is present (and `true`) iff the union was declared closed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionDef {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    pub refs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UnionDef {
    pub fn new(closed: Option<bool>, refs: Vec<String>) -> Self {
        UnionDef {
            ty: "union",
            closed,
            refs,
            description: None,
        }
    }
}

/// `{type: "array", minLength?, maxLength?, items, description?}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArrayDef {
    #[serde(rename = "type")]
    ty: &'static str,
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    pub items: Box<Fragment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ArrayDef {
    pub fn new(min_length: Option<i64>, max_length: Option<i64>, items: Fragment) -> Self {
        ArrayDef {
            ty: "array",
            min_length,
            max_length,
            items: Box::new(items),
            description: None,
        }
    }
}

/// The singleton-collapsed form of an inline declarations member:
/// the scope's field map and hoisted definitions, side by side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeclsFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub main: Entries<Fragment>,
    pub defs: Entries<Def>,
}

impl DeclsFragment {
    pub fn new(main: Entries<Fragment>, defs: Entries<Def>) -> Self {
        DeclsFragment {
            description: None,
            main,
            defs,
        }
    }
}
