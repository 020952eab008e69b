//! Role classification: pure functions from (marker, file kind) to role.

use boundary_lint_core::FileKind;

use crate::marker::{AttributeMarker, DirectiveMarker};
use crate::role::Role;

/// A declaration-level problem in the directive dialect.
///
/// Reported once per module; the module's edges are not checked afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationIssue {
    /// No valid marker comment at line 1, column 0.
    MissingMarker,
    /// Marker present but inconsistent with the file kind.
    KindMismatch {
        /// The declared marker.
        marker: DirectiveMarker,
        /// What the marker requires.
        required: FileKind,
    },
}

/// What a marker expects of its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindRule {
    RequiresLogic,
    RequiresComponent,
    Either,
}

/// Attribute dialect: absent marker defaults to the server role, then an
/// exhaustive table over (marker, file kind). The `use server` marker
/// designates callable server functions for either file kind.
#[must_use]
pub fn attribute_role(marker: Option<AttributeMarker>, kind: FileKind) -> Role {
    match (marker, kind) {
        (None, FileKind::Logic) => Role::ServerLogic,
        (None, FileKind::Component) => Role::ServerComponent,
        (Some(AttributeMarker::UseServer), _) => Role::ServerFunction,
        (Some(AttributeMarker::UseClient), FileKind::Logic) => Role::ClientLogic,
        (Some(AttributeMarker::UseClient), FileKind::Component) => Role::ClientComponent,
        (Some(AttributeMarker::UseAgnostic), FileKind::Logic) => Role::AgnosticLogic,
        (Some(AttributeMarker::UseAgnostic), FileKind::Component) => Role::AgnosticComponent,
    }
}

/// Directive dialect: verifies the marker's file-kind rule, then maps the
/// marker to its role.
///
/// # Errors
///
/// Returns a [`DeclarationIssue`] when the marker and file kind disagree.
pub fn directive_role(
    marker: DirectiveMarker,
    kind: FileKind,
) -> Result<Role, DeclarationIssue> {
    let (role, rule) = directive_table(marker);
    let consistent = match rule {
        KindRule::RequiresLogic => kind == FileKind::Logic,
        KindRule::RequiresComponent => kind == FileKind::Component,
        KindRule::Either => true,
    };
    if consistent {
        Ok(role)
    } else {
        let required = match rule {
            KindRule::RequiresLogic => FileKind::Logic,
            KindRule::RequiresComponent | KindRule::Either => FileKind::Component,
        };
        Err(DeclarationIssue::KindMismatch { marker, required })
    }
}

fn directive_table(marker: DirectiveMarker) -> (Role, KindRule) {
    match marker {
        DirectiveMarker::ServerLogics => (Role::ServerLogic, KindRule::RequiresLogic),
        DirectiveMarker::ServerComponents => (Role::ServerComponent, KindRule::RequiresComponent),
        DirectiveMarker::ServerFunctions => (Role::ServerFunction, KindRule::RequiresLogic),
        DirectiveMarker::ClientLogics => (Role::ClientLogic, KindRule::RequiresLogic),
        DirectiveMarker::ClientComponents => (Role::ClientComponent, KindRule::RequiresComponent),
        DirectiveMarker::ClientContexts => (Role::ClientContext, KindRule::RequiresComponent),
        DirectiveMarker::AgnosticLogics => (Role::AgnosticLogic, KindRule::RequiresLogic),
        DirectiveMarker::AgnosticComponents => {
            (Role::AgnosticComponent, KindRule::RequiresComponent)
        }
        DirectiveMarker::AgnosticConditions => {
            (Role::AgnosticCondition, KindRule::RequiresComponent)
        }
        DirectiveMarker::AgnosticStrategies => (Role::AgnosticStrategy, KindRule::Either),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_attribute_marker_defaults_to_server() {
        assert_eq!(attribute_role(None, FileKind::Logic), Role::ServerLogic);
        assert_eq!(
            attribute_role(None, FileKind::Component),
            Role::ServerComponent
        );
    }

    #[test]
    fn use_server_is_a_function_module_for_either_kind() {
        assert_eq!(
            attribute_role(Some(AttributeMarker::UseServer), FileKind::Logic),
            Role::ServerFunction
        );
        assert_eq!(
            attribute_role(Some(AttributeMarker::UseServer), FileKind::Component),
            Role::ServerFunction
        );
    }

    #[test]
    fn client_and_agnostic_split_on_file_kind() {
        assert_eq!(
            attribute_role(Some(AttributeMarker::UseClient), FileKind::Logic),
            Role::ClientLogic
        );
        assert_eq!(
            attribute_role(Some(AttributeMarker::UseClient), FileKind::Component),
            Role::ClientComponent
        );
        assert_eq!(
            attribute_role(Some(AttributeMarker::UseAgnostic), FileKind::Logic),
            Role::AgnosticLogic
        );
        assert_eq!(
            attribute_role(Some(AttributeMarker::UseAgnostic), FileKind::Component),
            Role::AgnosticComponent
        );
    }

    #[test]
    fn logic_markers_forbid_component_files() {
        let err = directive_role(DirectiveMarker::AgnosticLogics, FileKind::Component)
            .expect_err("should mismatch");
        assert_eq!(
            err,
            DeclarationIssue::KindMismatch {
                marker: DirectiveMarker::AgnosticLogics,
                required: FileKind::Logic,
            }
        );
    }

    #[test]
    fn component_markers_require_component_files() {
        assert!(directive_role(DirectiveMarker::ClientComponents, FileKind::Logic).is_err());
        assert!(directive_role(DirectiveMarker::ClientContexts, FileKind::Logic).is_err());
        assert!(directive_role(DirectiveMarker::AgnosticConditions, FileKind::Logic).is_err());
    }

    #[test]
    fn strategy_marker_accepts_either_kind() {
        assert_eq!(
            directive_role(DirectiveMarker::AgnosticStrategies, FileKind::Logic),
            Ok(Role::AgnosticStrategy)
        );
        assert_eq!(
            directive_role(DirectiveMarker::AgnosticStrategies, FileKind::Component),
            Ok(Role::AgnosticStrategy)
        );
    }

    #[test]
    fn consistent_directive_markers_classify() {
        assert_eq!(
            directive_role(DirectiveMarker::ServerFunctions, FileKind::Logic),
            Ok(Role::ServerFunction)
        );
        assert_eq!(
            directive_role(DirectiveMarker::ClientContexts, FileKind::Component),
            Ok(Role::ClientContext)
        );
    }
}
