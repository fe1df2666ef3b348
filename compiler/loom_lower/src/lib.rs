//! Schema lowering for the Loom compiler.
//!
//! Transforms a parsed, link-resolved syntax tree into self-contained lexicon
//! documents (`{lexicon: 1, id, defs}`), one per top-level record, object,
//! or function.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Parse → Link → **Lower** → lexicon JSON / editor preview
//! ```
//!
//! # What Happens During Lowering
//!
//! 1. **Union collapse**: a single-member union that is neither closed nor
//!    forced lowers as its bare member type, with no union wrapper
//! 2. **Hoisting**: objects and atoms nested inside a declarations scope
//!    surface as sibling entries in the enclosing document's `defs`
//! 3. **Reference stringification**: `#name` for local refs and atoms,
//!    `nsid` / `nsid#view` for cross-namespace refs
//! 4. **Parameter normalization**: slice-valued params expand to `minK`/`maxK`
//!    sibling keys, booleans become real JSON booleans
//!
//! Every lowering function is pure and takes at most the enclosing namespace
//! id beyond its node, so any subtree can be lowered on its own. Editor front
//! ends rely on this to preview a single declaration without compiling the
//! whole document.
//!
//! Lowering is independent of the conformance check in `loom_check`: a
//! document is produced even for a semantically invalid source, since tooling
//! needs best-effort previews. The only hard failure is a non-ref member
//! inside a wrapped union, which has no safe degraded output shape.

mod lower;
pub mod schema;

pub use lower::{
    lower_declarations, lower_function, lower_namespace, lower_object, lower_object_declaration,
    lower_property, lower_record, lower_type, lower_union, lower_union_member, LowerError,
    LoweredDeclarations,
};
