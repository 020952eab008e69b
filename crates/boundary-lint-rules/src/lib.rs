//! # boundary-lint-rules
//!
//! The module-boundary analysis engine.
//!
//! Modules are classified into architectural [`Role`]s from a top-of-file
//! marker plus their file kind; each value import or re-export is resolved
//! to its target module, the target is classified, and the dialect's
//! [`CompatibilityMatrix`] decides whether the pairing is allowed.
//!
//! Two dialects share one generic [`BoundaryEngine`]:
//!
//! - [`AttributeDialect`]: optional string-literal directive, absence
//!   defaults to a server role (7 roles)
//! - [`DirectiveDialect`]: mandatory leading marker comment, richer role
//!   set with a per-import-site strategy indirection (10 roles)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod dialect;
mod engine;
mod marker;
mod matrix;
mod resolve;
mod role;

pub use classify::{attribute_role, directive_role, DeclarationIssue};
pub use dialect::{
    AttributeDialect, Dialect, DirectiveDialect, ModuleRole, TargetRole, ATTRIBUTE_RULE,
    DIRECTIVE_RULE,
};
pub use engine::BoundaryEngine;
pub use marker::{
    extract_attribute_marker, extract_directive_marker, AttributeMarker, DirectiveMarker,
};
pub use matrix::{
    BlockedImportEntry, CompatibilityMatrix, MatrixError, ATTRIBUTE_MATRIX, DIRECTIVE_MATRIX,
};
pub use resolve::{has_recognized_extension, PathResolver, EXTENSIONS};
pub use role::{Role, StrategyTag, ATTRIBUTE_ROLES, DIRECTIVE_ROLES};
