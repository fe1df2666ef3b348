//! Traversal over primitive-type usage sites.
//!
//! The conformance pass validates every `TypeExpr` in a tree independently;
//! this walker finds them in source order, recursing through declarations,
//! properties, unions, and inline scopes. The tree remains immutable; the
//! callback may mutate its own state only.

use crate::ast::{Declarations, Namespace, Obj, Property, TypeExpr, Union, UnionMember};

/// Invoke `f` on every primitive-type usage node in `ns`, in source order.
pub fn for_each_type<'ast, F>(ns: &'ast Namespace, f: &mut F)
where
    F: FnMut(&'ast TypeExpr),
{
    for record in &ns.records {
        walk_declarations(&record.body, f);
    }
    for object in &ns.objects {
        walk_object(object, f);
    }
    for function in &ns.functions {
        walk_declarations(&function.props, f);
        walk_declarations(&function.body, f);
    }
}

fn walk_declarations<'ast, F>(decls: &'ast Declarations, f: &mut F)
where
    F: FnMut(&'ast TypeExpr),
{
    for property in &decls.properties {
        walk_property(property, f);
    }
    for object in &decls.objects {
        walk_object(object, f);
    }
}

fn walk_object<'ast, F>(object: &'ast Obj, f: &mut F)
where
    F: FnMut(&'ast TypeExpr),
{
    for property in &object.properties {
        walk_property(property, f);
    }
}

fn walk_property<'ast, F>(property: &'ast Property, f: &mut F)
where
    F: FnMut(&'ast TypeExpr),
{
    walk_union(&property.value, f);
}

fn walk_union<'ast, F>(union: &'ast Union, f: &mut F)
where
    F: FnMut(&'ast TypeExpr),
{
    for member in &union.members {
        match member {
            UnionMember::Prim(ty) => f(ty),
            UnionMember::Decls(decls) => walk_declarations(decls, f),
            UnionMember::Union(inner) => walk_union(inner, f),
            UnionMember::Atom(_) | UnionMember::Global(_) | UnionMember::Local(_) => {}
        }
    }
}
