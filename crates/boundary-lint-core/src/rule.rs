//! Rule registration surface.
//!
//! Each dialect exposes exactly one reportable check, described by a
//! [`RuleInfo`] with a fixed code and a message template per
//! [`MessageKind`]. Severity is caller-configured, never hardcoded here.

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// The kinds of messages a boundary rule can emit.
///
/// Serializes to the same kebab-case identifier [`MessageKind::id`]
/// returns, so JSON consumers can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    /// A value import of a role the current role may not depend on.
    ImportBlocked,
    /// A re-export whose target role differs from the current role.
    ReExportRoleMismatch,
    /// No recognizable marker where the dialect requires one.
    MissingMarker,
    /// Marker is inconsistent with the file kind.
    MarkerFileKindMismatch,
}

impl MessageKind {
    /// Stable identifier used in output and configuration.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::ImportBlocked => "import-blocked",
            Self::ReExportRoleMismatch => "re-export-role-mismatch",
            Self::MissingMarker => "missing-marker",
            Self::MarkerFileKindMismatch => "marker-file-kind-mismatch",
        }
    }
}

/// Static description of one registered boundary rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleInfo {
    /// Rule code (e.g., "MB001").
    pub code: &'static str,
    /// Kebab-case rule name (e.g., "attribute-boundaries").
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Message kinds this rule can emit.
    pub message_kinds: &'static [MessageKind],
    /// Default severity when the caller does not override it.
    pub default_severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_kind_serializes_as_its_id() {
        for kind in [
            MessageKind::ImportBlocked,
            MessageKind::ReExportRoleMismatch,
            MessageKind::MissingMarker,
            MessageKind::MarkerFileKindMismatch,
        ] {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn message_kind_ids_are_distinct() {
        let ids = [
            MessageKind::ImportBlocked.id(),
            MessageKind::ReExportRoleMismatch.id(),
            MessageKind::MissingMarker.id(),
            MessageKind::MarkerFileKindMismatch.id(),
        ];
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
