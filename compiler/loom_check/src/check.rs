//! The conformance check itself.

use rustc_hash::FxHashSet;
use tracing::debug;

use loom_ast::{for_each_type, Namespace, TypeExpr};
use loom_diagnostic::Diagnostic;

use crate::table::rules_for;

/// Validate one primitive-type usage node's parameter list.
///
/// Reports every violation through `accept` and always checks the remaining
/// parameters: a bad parameter short-circuits only its own later checks. A
/// duplicate parameter skips its value check but still counts as seen.
pub fn check_type<F>(ty: &TypeExpr, accept: &mut F)
where
    F: FnMut(Diagnostic),
{
    let Some(rules) = rules_for(ty.prim.name()) else {
        accept(Diagnostic::error("Unknown type.", ty.span));
        return;
    };

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for param in &ty.params {
        let Some(rule) = rules.iter().find(|rule| rule.name == param.key) else {
            accept(Diagnostic::error(
                format!("Type does not have param {}", param.key),
                param.span,
            ));
            continue;
        };

        if !seen.insert(rule.name) {
            accept(Diagnostic::error(
                "Type cannot have duplicate params",
                param.span,
            ));
            continue;
        }

        if !(rule.check)(&param.value) {
            accept(Diagnostic::error(
                format!("Type param {} is invalid", param.key),
                param.span,
            ));
        }
    }
}

/// Check every primitive-type usage node in a namespace, in source order.
///
/// Convenience entry point for front ends that want the whole tree's
/// diagnostics in one list rather than driving [`check_type`] per node.
pub fn check_namespace(ns: &Namespace) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for_each_type(ns, &mut |ty| {
        check_type(ty, &mut |diagnostic| diagnostics.push(diagnostic));
    });
    debug!(
        nsid = %ns.name.nsid(),
        count = diagnostics.len(),
        "conformance check complete"
    );
    diagnostics
}
