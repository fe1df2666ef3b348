//! The per-primitive table of legal parameters and value predicates.

use loom_ast::ParamValue;

/// A legal parameter for some primitive: its name and value predicate.
pub(crate) struct ParamRule {
    pub name: &'static str,
    pub check: fn(&ParamValue) -> bool,
}

const fn rule(name: &'static str, check: fn(&ParamValue) -> bool) -> ParamRule {
    ParamRule { name, check }
}

fn is_bool(value: &ParamValue) -> bool {
    matches!(value, ParamValue::Bool(_))
}

fn is_int(value: &ParamValue) -> bool {
    matches!(value, ParamValue::Int(_))
}

fn is_str(value: &ParamValue) -> bool {
    matches!(value, ParamValue::Str(_))
}

fn is_slice(value: &ParamValue) -> bool {
    matches!(value, ParamValue::Slice(_))
}

const BOOLEAN: &[ParamRule] = &[rule("default", is_bool), rule("const", is_bool)];

const INTEGER: &[ParamRule] = &[
    rule("range", is_slice),
    rule("default", is_int),
    rule("const", is_int),
    // TODO: `enum` (known-value set) once the grammar grows list literals
];

const STRING: &[ParamRule] = &[
    rule("format", is_slice),
    rule("length", is_slice),
    rule("graphemes", is_slice),
    rule("default", is_str),
    rule("const", is_str),
    // TODO: `enum`/`knownValues` once the grammar grows list literals
];

const BLOB: &[ParamRule] = &[rule("accept", is_str), rule("size", is_slice)];

const NONE: &[ParamRule] = &[];

/// Look up the legal parameters for a primitive by its grammar-level name.
///
/// Returns `None` for a primitive with no table entry at all, which the
/// checker reports as an unknown type.
pub(crate) fn rules_for(primitive: &str) -> Option<&'static [ParamRule]> {
    match primitive {
        "Boolean" => Some(BOOLEAN),
        "Integer" => Some(INTEGER),
        "String" => Some(STRING),
        "Blob" => Some(BLOB),
        "Did" | "Uri" | "DateTime" => Some(NONE),
        _ => None,
    }
}
