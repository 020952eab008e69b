//! Compatibility matrices: which roles may not import which.
//!
//! These tables are policy data, hand-authored and reviewed, not derived
//! from anything else. Each entry carries the rationale shown to the user.
//! `validate` checks internal consistency against a dialect's role set.

use crate::role::Role;

use Role::{
    AgnosticComponent, AgnosticCondition, AgnosticLogic, AgnosticStrategy, ClientComponent,
    ClientContext, ClientLogic, ServerComponent, ServerFunction, ServerLogic,
};

/// One disallowed (source, target) pairing with its rationale.
#[derive(Debug, Clone, Copy)]
pub struct BlockedImportEntry {
    /// Role of the importing module.
    pub source: Role,
    /// Role the source may not import.
    pub target: Role,
    /// Why this pairing is disallowed.
    pub rationale: &'static str,
}

const fn entry(source: Role, target: Role, rationale: &'static str) -> BlockedImportEntry {
    BlockedImportEntry {
        source,
        target,
        rationale,
    }
}

/// A dialect's full blocked-import table.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityMatrix {
    entries: &'static [BlockedImportEntry],
}

/// Matrix table errors found by [`CompatibilityMatrix::validate`].
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    /// An entry references a role outside the dialect's role set.
    #[error("entry ({from} -> {to}) references a role outside the dialect")]
    ForeignRole {
        /// Source role of the offending entry.
        from: Role,
        /// Target role of the offending entry.
        to: Role,
    },
    /// The same (source, target) pair appears twice.
    #[error("duplicate entry ({from} -> {to})")]
    Duplicate {
        /// Source role of the duplicated pair.
        from: Role,
        /// Target role of the duplicated pair.
        to: Role,
    },
}

impl CompatibilityMatrix {
    /// Looks up a pairing; `Some` means the import is blocked.
    #[must_use]
    pub fn lookup(&self, source: Role, target: Role) -> Option<&'static BlockedImportEntry> {
        self.entries
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    /// All roles the given source role may not import, in table order.
    #[must_use]
    pub fn blocked_targets(&self, source: Role) -> Vec<Role> {
        self.entries
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.target)
            .collect()
    }

    /// Checks the table against a dialect's role set.
    ///
    /// # Errors
    ///
    /// Returns the first foreign-role or duplicate-pair defect found.
    pub fn validate(&self, roles: &[Role]) -> Result<(), MatrixError> {
        for (i, e) in self.entries.iter().enumerate() {
            if !roles.contains(&e.source) || !roles.contains(&e.target) {
                return Err(MatrixError::ForeignRole {
                    from: e.source,
                    to: e.target,
                });
            }
            if self.entries[..i]
                .iter()
                .any(|prev| prev.source == e.source && prev.target == e.target)
            {
                return Err(MatrixError::Duplicate {
                    from: e.source,
                    to: e.target,
                });
            }
        }
        Ok(())
    }
}

const SERVER_LEAK: &str = "server logics must never leak into the client bundle";
const SC_SERVER_ONLY: &str =
    "server components render exclusively on the server and cannot be shipped to the client";
const SF_TRIGGER: &str =
    "server functions are only meant to be triggered by client or agnostic components";
const CL_BROWSER_ONLY: &str =
    "client logics rely on browser-only capabilities that never exist on the server";

/// Blocked-import table for the attribute dialect (7 roles).
pub const ATTRIBUTE_MATRIX: CompatibilityMatrix = CompatibilityMatrix {
    entries: &[
        entry(ServerLogic, ClientLogic, CL_BROWSER_ONLY),
        entry(ServerLogic, ServerFunction, SF_TRIGGER),
        entry(ServerComponent, ClientLogic, CL_BROWSER_ONLY),
        entry(ServerComponent, ServerFunction, SF_TRIGGER),
        entry(
            ServerFunction,
            ClientLogic,
            "server functions execute on the server and cannot reach browser-only code",
        ),
        entry(
            ServerFunction,
            ClientComponent,
            "server functions run exclusively on the server; they cannot render or reference client components",
        ),
        // NOTE: same-role function-to-function imports are deliberately
        // absent; whether to block them is an open policy question for
        // the table's owners.
        entry(ClientLogic, ServerLogic, SERVER_LEAK),
        entry(ClientLogic, ServerComponent, SC_SERVER_ONLY),
        entry(ClientLogic, ServerFunction, SF_TRIGGER),
        entry(ClientComponent, ServerLogic, SERVER_LEAK),
        entry(
            ClientComponent,
            ServerComponent,
            "server components cannot re-render in the browser; pass them as children instead of importing them",
        ),
        entry(
            AgnosticLogic,
            ServerLogic,
            "agnostic logics must stay runnable in both environments; server logics pin them to the server",
        ),
        entry(
            AgnosticLogic,
            ClientLogic,
            "agnostic logics must stay runnable in both environments; client logics pin them to the client",
        ),
        entry(AgnosticLogic, ServerComponent, SC_SERVER_ONLY),
        entry(AgnosticLogic, ServerFunction, SF_TRIGGER),
        entry(
            AgnosticComponent,
            ServerLogic,
            "server logics must never leak into code that may run on the client",
        ),
        entry(
            AgnosticComponent,
            ClientLogic,
            "agnostic components must stay renderable in both environments; client logics pin them to the client",
        ),
        entry(
            AgnosticComponent,
            ServerComponent,
            "server components cannot render below a boundary that may re-render on the client",
        ),
    ],
};

/// Blocked-import table for the directive dialect (10 roles).
///
/// Extends the attribute pairings with the context, condition, and
/// strategy roles. The strategy role never appears as a target: strategy
/// edges are resolved to a concrete role before any lookup.
pub const DIRECTIVE_MATRIX: CompatibilityMatrix = CompatibilityMatrix {
    entries: &[
        entry(ServerLogic, ClientLogic, CL_BROWSER_ONLY),
        entry(ServerLogic, ServerFunction, SF_TRIGGER),
        entry(ServerComponent, ClientLogic, CL_BROWSER_ONLY),
        entry(ServerComponent, ServerFunction, SF_TRIGGER),
        entry(
            ServerFunction,
            ClientLogic,
            "server functions execute on the server and cannot reach browser-only code",
        ),
        entry(
            ServerFunction,
            ClientComponent,
            "server functions run exclusively on the server; they cannot render or reference client components",
        ),
        entry(
            ServerFunction,
            ClientContext,
            "server functions run exclusively on the server; they cannot render or reference client contexts",
        ),
        entry(ClientLogic, ServerLogic, SERVER_LEAK),
        entry(ClientLogic, ServerComponent, SC_SERVER_ONLY),
        entry(ClientLogic, ServerFunction, SF_TRIGGER),
        entry(ClientComponent, ServerLogic, SERVER_LEAK),
        entry(
            ClientComponent,
            ServerComponent,
            "server components cannot re-render in the browser; pass them as children instead of importing them",
        ),
        entry(ClientContext, ServerLogic, SERVER_LEAK),
        entry(
            ClientContext,
            ServerComponent,
            "server components cannot re-render in the browser; pass them as children instead of importing them",
        ),
        entry(
            AgnosticLogic,
            ServerLogic,
            "agnostic logics must stay runnable in both environments; server logics pin them to the server",
        ),
        entry(
            AgnosticLogic,
            ClientLogic,
            "agnostic logics must stay runnable in both environments; client logics pin them to the client",
        ),
        entry(AgnosticLogic, ServerComponent, SC_SERVER_ONLY),
        entry(AgnosticLogic, ServerFunction, SF_TRIGGER),
        entry(
            AgnosticComponent,
            ServerLogic,
            "server logics must never leak into code that may run on the client",
        ),
        entry(
            AgnosticComponent,
            ClientLogic,
            "agnostic components must stay renderable in both environments; client logics pin them to the client",
        ),
        entry(
            AgnosticComponent,
            ServerComponent,
            "server components cannot render below a boundary that may re-render on the client",
        ),
        entry(
            AgnosticCondition,
            ServerLogic,
            "agnostic conditions must stay renderable in both environments; server logics pin them to the server",
        ),
        entry(
            AgnosticCondition,
            ClientLogic,
            "agnostic conditions must stay renderable in both environments; client logics pin them to the client",
        ),
        entry(AgnosticCondition, ServerComponent, SC_SERVER_ONLY),
        entry(
            AgnosticStrategy,
            ServerLogic,
            "agnostic strategies resolve per import site and must not pin themselves to the server",
        ),
        entry(
            AgnosticStrategy,
            ClientLogic,
            "agnostic strategies resolve per import site and must not pin themselves to the client",
        ),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::{ATTRIBUTE_ROLES, DIRECTIVE_ROLES};

    #[test]
    fn attribute_matrix_is_internally_consistent() {
        ATTRIBUTE_MATRIX
            .validate(ATTRIBUTE_ROLES)
            .expect("attribute matrix");
    }

    #[test]
    fn directive_matrix_is_internally_consistent() {
        DIRECTIVE_MATRIX
            .validate(DIRECTIVE_ROLES)
            .expect("directive matrix");
    }

    #[test]
    fn attribute_matrix_never_references_directive_only_roles() {
        for role in [
            Role::ClientContext,
            Role::AgnosticCondition,
            Role::AgnosticStrategy,
        ] {
            assert!(ATTRIBUTE_MATRIX.blocked_targets(role).is_empty());
            assert!(ATTRIBUTE_MATRIX
                .entries
                .iter()
                .all(|e| e.target != role && e.source != role));
        }
    }

    #[test]
    fn strategy_role_is_never_a_target() {
        assert!(DIRECTIVE_MATRIX
            .entries
            .iter()
            .all(|e| e.target != Role::AgnosticStrategy));
    }

    #[test]
    fn blocking_is_not_assumed_symmetric() {
        // server components may import client components...
        assert!(ATTRIBUTE_MATRIX
            .lookup(Role::ServerComponent, Role::ClientComponent)
            .is_none());
        // ...but client components may not import server components.
        assert!(ATTRIBUTE_MATRIX
            .lookup(Role::ClientComponent, Role::ServerComponent)
            .is_some());
    }

    #[test]
    fn both_directions_enumerated_independently() {
        // client logic -> server logic blocked, and the reverse is also
        // blocked, each with its own rationale.
        let forward = ATTRIBUTE_MATRIX
            .lookup(Role::ClientLogic, Role::ServerLogic)
            .expect("forward");
        let reverse = ATTRIBUTE_MATRIX
            .lookup(Role::ServerLogic, Role::ClientLogic)
            .expect("reverse");
        assert_ne!(forward.rationale, reverse.rationale);
    }

    #[test]
    fn server_function_trigger_rationale() {
        let e = ATTRIBUTE_MATRIX
            .lookup(Role::ServerLogic, Role::ServerFunction)
            .expect("entry");
        assert!(e.rationale.contains("triggered by"));
    }

    #[test]
    fn function_to_function_is_not_blocked() {
        // Deliberate policy gap, see the table comment.
        assert!(ATTRIBUTE_MATRIX
            .lookup(Role::ServerFunction, Role::ServerFunction)
            .is_none());
        assert!(DIRECTIVE_MATRIX
            .lookup(Role::ServerFunction, Role::ServerFunction)
            .is_none());
    }

    #[test]
    fn blocked_targets_preserve_table_order() {
        let targets = ATTRIBUTE_MATRIX.blocked_targets(Role::AgnosticLogic);
        assert_eq!(
            targets,
            vec![
                Role::ServerLogic,
                Role::ClientLogic,
                Role::ServerComponent,
                Role::ServerFunction,
            ]
        );
    }
}
