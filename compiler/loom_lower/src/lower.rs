//! Syntax tree → schema document lowering.
//!
//! Every function here is a pure transform from one node kind to its schema
//! fragment; composition is structural recursion with no shared state beyond
//! the enclosing namespace id. Any subtree lowers independently of the whole
//! document and produces the same fragment it would have contributed inside
//! a full-document lowering.

use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use loom_ast::{
    Declarations, Fn, GlobalRef, Namespace, Obj, ParamValue, Primitive, Property, Record, Span,
    Spanned, TypeExpr, Union, UnionMember,
};

use crate::schema::{
    ArrayDef, DeclsFragment, Def, Document, Entries, Fragment, FunctionDef, ObjectDef, ObjectStub,
    OutputDef, ParamsDef, PrimitiveDef, RecordDef, RefDef, TokenDef, UnionDef,
};

/// Structural lowering failure.
///
/// This is a DSL-authoring error, not a recoverable condition: the wrapped
/// union output shape is a list of ref strings and has no safe degraded form.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum LowerError {
    /// A multi-member, closed, or forced union contained a member that is
    /// not ref-shaped.
    #[error("Union members must be refs")]
    NonRefUnionMember {
        /// The offending member.
        span: Span,
    },
}

/// The result of lowering a declarations scope: the scope's own field map
/// plus the auxiliary definitions hoisted out of it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LoweredDeclarations {
    pub main: Entries<Fragment>,
    pub defs: Entries<Def>,
}

/// Lower a namespace to one document per top-level declaration.
///
/// Document order is records, then objects, then functions, declaration
/// order within each list.
pub fn lower_namespace(ns: &Namespace) -> Result<Vec<Document>, LowerError> {
    let nsid = ns.name.nsid();
    trace!(
        nsid = %nsid,
        records = ns.records.len(),
        objects = ns.objects.len(),
        functions = ns.functions.len(),
        "lowering namespace"
    );

    let mut documents =
        Vec::with_capacity(ns.records.len() + ns.objects.len() + ns.functions.len());
    for record in &ns.records {
        documents.push(lower_record(record, &nsid)?);
    }
    for object in &ns.objects {
        documents.push(lower_object(object, &nsid));
    }
    for function in &ns.functions {
        documents.push(lower_function(function, &nsid)?);
    }
    Ok(documents)
}

/// Lower a record declaration to its document.
pub fn lower_record(record: &Record, nsid: &str) -> Result<Document, LowerError> {
    let lowered = lower_declarations(&record.body)?;

    let main = RecordDef::new(
        record.doc.clone(),
        ObjectDef::new(None, required_keys(&record.body.properties), lowered.main),
    );

    let mut defs = Entries::new();
    defs.push("main", Def::Record(main));
    defs.extend(lowered.defs);

    Ok(Document::new(format!("{nsid}.{}", record.name), defs))
}

/// Lower a top-level object declaration to its document.
///
/// Emits only the `{type: "object"}` placeholder. Full property lowering for
/// the top-level entry point has not landed; objects nested inside a
/// declarations scope do lower fully via [`lower_object_declaration`].
pub fn lower_object(object: &Obj, nsid: &str) -> Document {
    let mut defs = Entries::new();
    defs.push("main", Def::ObjectStub(ObjectStub::new()));
    Document::new(format!("{nsid}.{}", object.name), defs)
}

/// Lower a function declaration to its document.
pub fn lower_function(function: &Fn, nsid: &str) -> Result<Document, LowerError> {
    let output = lower_declarations(&function.body)?;

    let mut properties = Entries::new();
    for property in &function.props.properties {
        properties.push(property.key.clone(), lower_property(property)?);
    }

    let main = FunctionDef::new(
        function.kind,
        function.doc.clone(),
        ParamsDef::new(required_keys(&function.props.properties), properties),
        OutputDef::new(output.main),
    );

    let mut defs = Entries::new();
    defs.push("main", Def::Function(main));
    defs.extend(output.defs);

    Ok(Document::new(format!("{nsid}.{}", function.name), defs))
}

/// Lower a declarations scope.
///
/// `main` collects inline fields: one entry per property, then one
/// `{type: "ref", ref: "#name"}` shorthand entry per local ref. `defs`
/// collects the hoisted auxiliary definitions: nested objects lower fully,
/// atoms lower to tokens. Nested declarations never nest inside `main`.
pub fn lower_declarations(decls: &Declarations) -> Result<LoweredDeclarations, LowerError> {
    let mut main = Entries::new();
    for property in &decls.properties {
        main.push(property.key.clone(), lower_property(property)?);
    }
    for local in &decls.refs {
        main.push(
            local.name.clone(),
            Fragment::Ref(RefDef::new(format!("#{}", local.name))),
        );
    }

    let mut defs = Entries::new();
    for object in &decls.objects {
        defs.push(
            object.name.clone(),
            Def::Object(lower_object_declaration(object)?),
        );
    }
    for atom in &decls.atoms {
        defs.push(atom.name.clone(), Def::Token(TokenDef::new()));
    }

    Ok(LoweredDeclarations { main, defs })
}

/// Lower an object nested inside a declarations scope: the full
/// `{type: "object", description?, required, properties}` shape.
pub fn lower_object_declaration(object: &Obj) -> Result<ObjectDef, LowerError> {
    let mut properties = Entries::new();
    for property in &object.properties {
        properties.push(property.key.clone(), lower_property(property)?);
    }
    Ok(ObjectDef::new(
        object.doc.clone(),
        required_keys(&object.properties),
        properties,
    ))
}

/// Lower a property: the doc string spliced into the value's lowering.
pub fn lower_property(property: &Property) -> Result<Fragment, LowerError> {
    Ok(lower_union(&property.value)?.with_description(property.doc.clone()))
}

/// Lower a union value.
///
/// The collapse rule: a single-member union that is neither closed nor
/// forced lowers as that member directly — a singleton open union is
/// indistinguishable from its member type. Every member of a wrapped union
/// must be ref-shaped; anything else fails with [`LowerError`]. An array
/// wrapper wraps whichever result was produced.
pub fn lower_union(union: &Union) -> Result<Fragment, LowerError> {
    let inner = if union.members.len() == 1 && !union.closed && !union.forced {
        lower_union_member(&union.members[0])?
    } else {
        let refs = union
            .members
            .iter()
            .map(ref_string)
            .collect::<Result<Vec<_>, _>>()?;
        Fragment::Union(UnionDef::new(union.closed.then_some(true), refs))
    };

    Ok(match union.array {
        Some(slice) => Fragment::Array(ArrayDef::new(slice.min, slice.max, inner)),
        None => inner,
    })
}

/// Lower a single union member, for the singleton-collapse case.
///
/// Unlike [`lower_union`]'s wrapped case this accepts non-ref shapes:
/// primitive types, inline declarations, and nested unions all lower here.
pub fn lower_union_member(member: &UnionMember) -> Result<Fragment, LowerError> {
    match member {
        UnionMember::Atom(atom) => Ok(Fragment::Ref(RefDef::new(format!("#{}", atom.name)))),
        UnionMember::Local(local) => Ok(Fragment::Ref(RefDef::new(format!("#{}", local.name)))),
        UnionMember::Global(global) => Ok(Fragment::Ref(RefDef::new(global_ref_string(global)))),
        UnionMember::Prim(ty) => Ok(lower_type(ty)),
        UnionMember::Decls(decls) => {
            let lowered = lower_declarations(decls)?;
            Ok(Fragment::Decls(DeclsFragment::new(
                lowered.main,
                lowered.defs,
            )))
        }
        UnionMember::Union(inner) => lower_union(inner),
    }
}

/// Lower a primitive type usage.
///
/// The primitive maps to its schema type keyword (with a `format` for the
/// string-derived primitives); parameters are normalized and merged in:
/// a slice-valued param `K` expands to `minK`/`maxK` sibling keys (open
/// bounds omitted), booleans become JSON booleans, everything else passes
/// through under its own key. No conformance checking happens here.
pub fn lower_type(ty: &TypeExpr) -> Fragment {
    let mut params = Entries::new();
    for param in &ty.params {
        match &param.value {
            ParamValue::Slice(slice) => {
                if let Some(min) = slice.min {
                    params.push(bound_key("min", &param.key), Value::from(min));
                }
                if let Some(max) = slice.max {
                    params.push(bound_key("max", &param.key), Value::from(max));
                }
            }
            ParamValue::Bool(value) => params.push(param.key.clone(), Value::Bool(*value)),
            ParamValue::Int(value) => params.push(param.key.clone(), Value::from(*value)),
            ParamValue::Str(value) => params.push(param.key.clone(), Value::from(value.clone())),
        }
    }

    let (keyword, format) = match ty.prim {
        Primitive::String => ("string", None),
        Primitive::Integer => ("integer", None),
        Primitive::Boolean => ("boolean", None),
        Primitive::Blob => ("blob", None),
        Primitive::DateTime => ("string", Some("datetime")),
        Primitive::Did => ("string", Some("did")),
        Primitive::Uri => ("string", Some("uri")),
    };

    Fragment::Primitive(PrimitiveDef::new(keyword, format, params))
}

/// Stringify a ref-shaped union member for the wrapped-union case.
///
/// Local refs and atoms become `#name`; global refs become `nsid` or
/// `nsid#view`. Any other member kind is the fail-fast structural error.
fn ref_string(member: &UnionMember) -> Result<String, LowerError> {
    match member {
        UnionMember::Local(local) => Ok(format!("#{}", local.name)),
        UnionMember::Atom(atom) => Ok(format!("#{}", atom.name)),
        UnionMember::Global(global) => Ok(global_ref_string(global)),
        UnionMember::Prim(_) | UnionMember::Decls(_) | UnionMember::Union(_) => {
            Err(LowerError::NonRefUnionMember {
                span: member.span(),
            })
        }
    }
}

fn global_ref_string(global: &GlobalRef) -> String {
    match &global.view {
        Some(view) => format!("{}#{view}", global.nsid.nsid()),
        None => global.nsid.nsid(),
    }
}

/// The non-optional property keys, in declaration order.
fn required_keys(properties: &[Property]) -> Vec<String> {
    properties
        .iter()
        .filter(|p| !p.optional)
        .map(|p| p.key.clone())
        .collect()
}

/// `("min", "range")` → `"minRange"`.
fn bound_key(prefix: &str, key: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + key.len());
    out.push_str(prefix);
    let mut chars = key.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out
}
