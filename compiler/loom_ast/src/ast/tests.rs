use pretty_assertions::assert_eq;

use super::*;
use crate::{for_each_type, Span, Spanned};

fn prim(prim: Primitive) -> Union {
    Union {
        members: vec![UnionMember::Prim(TypeExpr {
            prim,
            params: Vec::new(),
            span: Span::DUMMY,
        })],
        closed: false,
        forced: false,
        array: None,
        span: Span::DUMMY,
    }
}

fn property(key: &str, optional: bool, value: Union) -> Property {
    Property {
        key: key.into(),
        doc: None,
        optional,
        value,
        span: Span::DUMMY,
    }
}

#[test]
fn test_nsid_join() {
    let name = NsName::new(vec!["app".into(), "feed".into(), "post".into()]);
    assert_eq!(name.nsid(), "app.feed.post");
    assert_eq!(name.to_string(), "app.feed.post");
}

#[test]
fn test_fn_kind_names() {
    assert_eq!(FnKind::Query.name(), "query");
    assert_eq!(FnKind::Procedure.name(), "procedure");
    assert_eq!(FnKind::Subscription.name(), "subscription");
    assert_ne!(FnKind::Query, FnKind::Procedure);
}

#[test]
fn test_primitive_names() {
    assert_eq!(Primitive::DateTime.name(), "DateTime");
    assert_eq!(Primitive::Uri.to_string(), "Uri");
}

#[test]
fn test_node_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();

    set.insert(prim(Primitive::String));
    set.insert(prim(Primitive::String));
    set.insert(prim(Primitive::Integer));

    assert_eq!(set.len(), 2);
}

#[test]
fn test_union_member_span() {
    let member = UnionMember::Local(LocalRef {
        name: "item".into(),
        span: Span::new(4, 9),
    });
    assert_eq!(member.span(), Span::new(4, 9));
}

#[test]
fn test_for_each_type_source_order() {
    // Record property, nested-object property, and function input property
    // should be visited in that order.
    let record = Record {
        name: "post".into(),
        doc: None,
        body: Declarations {
            properties: vec![property("text", false, prim(Primitive::String))],
            objects: vec![Obj {
                name: "meta".into(),
                doc: None,
                properties: vec![property("count", true, prim(Primitive::Integer))],
                span: Span::DUMMY,
            }],
            ..Declarations::default()
        },
        span: Span::DUMMY,
    };
    let function = Fn {
        name: "getPost".into(),
        kind: FnKind::Query,
        doc: None,
        props: Declarations {
            properties: vec![property("uri", false, prim(Primitive::Uri))],
            ..Declarations::default()
        },
        body: Declarations::default(),
        span: Span::DUMMY,
    };
    let ns = Namespace {
        name: NsName::new(vec!["app".into(), "feed".into()]),
        records: vec![record],
        objects: Vec::new(),
        functions: vec![function],
        span: Span::DUMMY,
    };

    let mut seen = Vec::new();
    for_each_type(&ns, &mut |ty| seen.push(ty.prim));
    assert_eq!(
        seen,
        vec![Primitive::String, Primitive::Integer, Primitive::Uri]
    );
}

#[test]
fn test_for_each_type_recurses_nested_unions() {
    let inner = prim(Primitive::Blob);
    let union = Union {
        members: vec![
            UnionMember::Union(inner),
            UnionMember::Decls(Declarations {
                properties: vec![property("size", false, prim(Primitive::Integer))],
                ..Declarations::default()
            }),
        ],
        closed: false,
        forced: false,
        array: None,
        span: Span::DUMMY,
    };
    let ns = Namespace {
        name: NsName::new(vec!["app".into()]),
        records: Vec::new(),
        objects: vec![Obj {
            name: "media".into(),
            doc: None,
            properties: vec![property("content", false, union)],
            span: Span::DUMMY,
        }],
        functions: Vec::new(),
        span: Span::DUMMY,
    };

    let mut seen = Vec::new();
    for_each_type(&ns, &mut |ty| seen.push(ty.prim));
    assert_eq!(seen, vec![Primitive::Blob, Primitive::Integer]);
}
