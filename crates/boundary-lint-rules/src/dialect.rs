//! The `Dialect` trait and its two implementations.
//!
//! Both dialects share the same traversal mechanics; a dialect supplies
//! the marker vocabulary, the file-kind consistency rule, and the
//! compatibility matrix.

use boundary_lint_core::{FileKind, MessageKind, RuleInfo, Severity};

use crate::classify::{attribute_role, directive_role, DeclarationIssue};
use crate::marker::{extract_attribute_marker, extract_directive_marker};
use crate::matrix::{CompatibilityMatrix, ATTRIBUTE_MATRIX, DIRECTIVE_MATRIX};
use crate::role::{Role, ATTRIBUTE_ROLES, DIRECTIVE_ROLES};

/// Classification of the module currently being linted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRole {
    /// Concrete role; the module's edges will be checked.
    Role(Role),
    /// Declaration problem; reported once, edges skipped.
    Invalid(DeclarationIssue),
}

/// Classification of an edge's target module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRole {
    /// Concrete role.
    Role(Role),
    /// Strategy module; the concrete role comes from the import site.
    Deferred,
    /// Not classifiable; the edge is skipped.
    Unknown,
}

/// A rule dialect: vocabulary, consistency rule, and matrix.
pub trait Dialect: Send + Sync {
    /// Static rule registration data.
    fn info(&self) -> &'static RuleInfo;

    /// The closed role set of this dialect.
    fn roles(&self) -> &'static [Role];

    /// The dialect's blocked-import table.
    fn matrix(&self) -> &'static CompatibilityMatrix;

    /// Classifies the module under analysis from its raw text and kind.
    fn classify_module(&self, text: &str, kind: FileKind) -> ModuleRole;

    /// Classifies an edge target from its raw text and kind.
    fn classify_target(&self, text: &str, kind: FileKind) -> TargetRole;
}

/// Registration data for the attribute-dialect rule.
pub static ATTRIBUTE_RULE: RuleInfo = RuleInfo {
    code: "MB001",
    name: "attribute-boundaries",
    description: "enforce import legality between module roles inferred \
                  from optional top-of-file directives",
    message_kinds: &[MessageKind::ImportBlocked, MessageKind::ReExportRoleMismatch],
    default_severity: Severity::Error,
};

/// Registration data for the directive-dialect rule.
pub static DIRECTIVE_RULE: RuleInfo = RuleInfo {
    code: "MB002",
    name: "directive-boundaries",
    description: "enforce import legality between module roles declared \
                  by mandatory leading marker comments",
    message_kinds: &[
        MessageKind::ImportBlocked,
        MessageKind::ReExportRoleMismatch,
        MessageKind::MissingMarker,
        MessageKind::MarkerFileKindMismatch,
    ],
    default_severity: Severity::Error,
};

/// Attribute-Inferred dialect: optional string-literal directive,
/// absence defaults to a server role.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeDialect;

impl Dialect for AttributeDialect {
    fn info(&self) -> &'static RuleInfo {
        &ATTRIBUTE_RULE
    }

    fn roles(&self) -> &'static [Role] {
        ATTRIBUTE_ROLES
    }

    fn matrix(&self) -> &'static CompatibilityMatrix {
        &ATTRIBUTE_MATRIX
    }

    fn classify_module(&self, text: &str, kind: FileKind) -> ModuleRole {
        ModuleRole::Role(attribute_role(extract_attribute_marker(text), kind))
    }

    fn classify_target(&self, text: &str, kind: FileKind) -> TargetRole {
        TargetRole::Role(attribute_role(extract_attribute_marker(text), kind))
    }
}

/// Directive-First dialect: mandatory leading comment marker, richer role
/// set, strategy indirection.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectiveDialect;

impl Dialect for DirectiveDialect {
    fn info(&self) -> &'static RuleInfo {
        &DIRECTIVE_RULE
    }

    fn roles(&self) -> &'static [Role] {
        DIRECTIVE_ROLES
    }

    fn matrix(&self) -> &'static CompatibilityMatrix {
        &DIRECTIVE_MATRIX
    }

    fn classify_module(&self, text: &str, kind: FileKind) -> ModuleRole {
        let Some(marker) = extract_directive_marker(text) else {
            return ModuleRole::Invalid(DeclarationIssue::MissingMarker);
        };
        match directive_role(marker, kind) {
            Ok(role) => ModuleRole::Role(role),
            Err(issue) => ModuleRole::Invalid(issue),
        }
    }

    fn classify_target(&self, text: &str, kind: FileKind) -> TargetRole {
        let Some(marker) = extract_directive_marker(text) else {
            // The target gets its own diagnostic when linted itself.
            return TargetRole::Unknown;
        };
        match directive_role(marker, kind) {
            Ok(Role::AgnosticStrategy) => TargetRole::Deferred,
            Ok(role) => TargetRole::Role(role),
            Err(_) => TargetRole::Unknown,
        }
    }
}
