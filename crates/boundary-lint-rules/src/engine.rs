//! Boundary traversal and reporting.
//!
//! A stateless per-module visitor: classify the module, walk its value
//! imports and re-exports, resolve and classify each target, consult the
//! dialect's matrix, and report. Nothing is carried between modules;
//! independent files can be checked in parallel by the caller.

use std::path::Path;
use std::sync::Arc;

use boundary_lint_core::{
    FileAccess, FileKind, ImportKind, Location, MessageKind, ModuleSource, RuleInfo, Violation,
};
use tracing::debug;

use crate::classify::DeclarationIssue;
use crate::dialect::{Dialect, ModuleRole, TargetRole};
use crate::matrix::{BlockedImportEntry, MatrixError};
use crate::resolve::PathResolver;
use crate::role::{Role, StrategyTag};

/// Checks one dialect's boundary rule against module sources.
pub struct BoundaryEngine<D: Dialect> {
    dialect: D,
    resolver: PathResolver,
    fs: Arc<dyn FileAccess>,
}

impl<D: Dialect> BoundaryEngine<D> {
    /// Creates an engine, checking the dialect's matrix for internal
    /// consistency first.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix references a role outside the
    /// dialect's set or contains duplicate pairs.
    pub fn new(
        dialect: D,
        resolver: PathResolver,
        fs: Arc<dyn FileAccess>,
    ) -> Result<Self, MatrixError> {
        dialect.matrix().validate(dialect.roles())?;
        Ok(Self {
            dialect,
            resolver,
            fs,
        })
    }

    /// Registration data for this engine's rule.
    #[must_use]
    pub fn info(&self) -> &'static RuleInfo {
        self.dialect.info()
    }

    /// Checks a single module and returns its violations.
    #[must_use]
    pub fn check(&self, module: &ModuleSource) -> Vec<Violation> {
        let mut violations = Vec::new();

        let current = match self.dialect.classify_module(&module.text, module.file_kind) {
            ModuleRole::Role(role) => role,
            ModuleRole::Invalid(issue) => {
                violations.push(self.declaration_violation(module, issue));
                return violations;
            }
        };

        let Some(importer_dir) = module.path.parent() else {
            return violations;
        };

        for import in &module.imports {
            if import.kind == ImportKind::TypeOnly {
                continue;
            }
            let Some(target) = self.edge_role(
                importer_dir,
                &import.specifier,
                import.inline_comment.as_deref(),
            ) else {
                continue;
            };
            if let Some(entry) = self.dialect.matrix().lookup(current, target) {
                violations.push(self.blocked_violation(module, &import.location, current, entry));
            }
        }

        for reexport in &module.reexports {
            if reexport.kind == ImportKind::TypeOnly {
                continue;
            }
            let Some(target) = self.edge_role(importer_dir, &reexport.specifier, None) else {
                continue;
            };
            if let Some(entry) = self.dialect.matrix().lookup(current, target) {
                violations.push(self.blocked_violation(module, &reexport.location, current, entry));
            }
            // Role preservation is independent of the matrix.
            if target != current {
                violations.push(self.reexport_violation(
                    module,
                    &reexport.location,
                    current,
                    target,
                ));
            }
        }

        violations
    }

    /// Resolves and classifies one edge target; `None` means skip.
    fn edge_role(&self, importer_dir: &Path, specifier: &str, tag: Option<&str>) -> Option<Role> {
        let target_path = self.resolver.resolve(importer_dir, specifier)?;
        let text = self.fs.read_to_string(&target_path).ok()?;
        match self
            .dialect
            .classify_target(&text, FileKind::from_path(&target_path))
        {
            TargetRole::Role(role) => Some(role),
            TargetRole::Deferred => match tag.and_then(StrategyTag::parse) {
                Some(tag) => Some(tag.role()),
                None => {
                    debug!(
                        "strategy import {} has no recognized tag, skipping",
                        specifier
                    );
                    None
                }
            },
            TargetRole::Unknown => {
                debug!("target {} is unclassifiable, skipping", specifier);
                None
            }
        }
    }

    fn blocked_violation(
        &self,
        module: &ModuleSource,
        location: &Location,
        current: Role,
        entry: &BlockedImportEntry,
    ) -> Violation {
        let blocked = join_names(&self.dialect.matrix().blocked_targets(current));
        let info = self.dialect.info();
        Violation::new(
            info.code,
            info.name,
            MessageKind::ImportBlocked,
            info.default_severity,
            self.at(module, location),
            format!(
                "{current} modules are not allowed to import {blocked} modules. {rationale}",
                rationale = entry.rationale
            ),
        )
    }

    fn reexport_violation(
        &self,
        module: &ModuleSource,
        location: &Location,
        current: Role,
        target: Role,
    ) -> Violation {
        let info = self.dialect.info();
        Violation::new(
            info.code,
            info.name,
            MessageKind::ReExportRoleMismatch,
            info.default_severity,
            self.at(module, location),
            format!(
                "re-export must preserve the module role: this {current} module \
                 re-exports from a {target} module"
            ),
        )
        .with_help("import and re-wrap the content instead of re-exporting it")
    }

    fn declaration_violation(&self, module: &ModuleSource, issue: DeclarationIssue) -> Violation {
        let info = self.dialect.info();
        let (kind, message) = match issue {
            DeclarationIssue::MissingMarker => (
                MessageKind::MissingMarker,
                "module declares no role: the first comment must be a role marker \
                 at line 1, column 0"
                    .to_string(),
            ),
            DeclarationIssue::KindMismatch { marker, required } => (
                MessageKind::MarkerFileKindMismatch,
                match required {
                    FileKind::Component => format!(
                        "'{}' marker requires a component-bearing file",
                        marker.as_str()
                    ),
                    FileKind::Logic => format!(
                        "'{}' marker must not appear in a component-bearing file",
                        marker.as_str()
                    ),
                },
            ),
        };
        Violation::new(
            info.code,
            info.name,
            kind,
            info.default_severity,
            self.at(module, &Location::new(module.path.clone(), 1, 1)),
            message,
        )
    }

    /// Rebinds a location to the module's root-relative display path.
    fn at(&self, module: &ModuleSource, location: &Location) -> Location {
        let mut location = location.clone();
        location.file = self.resolver.display_path(&module.path);
        location
    }
}

/// Joins role names as "a, b, or c".
fn join_names(roles: &[Role]) -> String {
    let names: Vec<&str> = roles.iter().map(|r| r.module_name()).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head, tail] => format!("{head} or {tail}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{AttributeDialect, DirectiveDialect};
    use boundary_lint_core::{ImportDecl, MemoryFileSystem, ReExportDecl};
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn import(specifier: &str, line: usize) -> ImportDecl {
        ImportDecl {
            specifier: specifier.to_string(),
            kind: ImportKind::Value,
            location: Location::new(PathBuf::new(), line, 1),
            inline_comment: None,
        }
    }

    fn tagged_import(specifier: &str, tag: &str, line: usize) -> ImportDecl {
        ImportDecl {
            inline_comment: Some(tag.to_string()),
            ..import(specifier, line)
        }
    }

    fn type_import(specifier: &str, line: usize) -> ImportDecl {
        ImportDecl {
            kind: ImportKind::TypeOnly,
            ..import(specifier, line)
        }
    }

    fn reexport(specifier: &str, line: usize) -> ReExportDecl {
        ReExportDecl {
            specifier: specifier.to_string(),
            kind: ImportKind::Value,
            location: Location::new(PathBuf::new(), line, 1),
        }
    }

    fn attribute_engine(files: &[(&str, &str)]) -> BoundaryEngine<AttributeDialect> {
        let mut fs = MemoryFileSystem::new();
        for (path, text) in files {
            fs.insert(*path, *text);
        }
        let fs = Arc::new(fs);
        let aliases: BTreeMap<String, String> =
            [("@/*".to_string(), "src/*".to_string())].into();
        let resolver = PathResolver::new("/project", &aliases, fs.clone());
        BoundaryEngine::new(AttributeDialect, resolver, fs).expect("engine")
    }

    fn directive_engine(files: &[(&str, &str)]) -> BoundaryEngine<DirectiveDialect> {
        let mut fs = MemoryFileSystem::new();
        for (path, text) in files {
            fs.insert(*path, *text);
        }
        let fs = Arc::new(fs);
        let resolver = PathResolver::new("/project", &BTreeMap::new(), fs.clone());
        BoundaryEngine::new(DirectiveDialect, resolver, fs).expect("engine")
    }

    // --- attribute dialect ---

    #[test]
    fn server_logic_importing_server_function_is_blocked() {
        let engine = attribute_engine(&[(
            "/project/src/actions.ts",
            "'use server';\nexport async function save() {}\n",
        )]);
        let module = ModuleSource::new("/project/src/db.ts", "export const db = 1;\n")
            .with_import(import("./actions", 2));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].code, "MB001");
        assert_eq!(v[0].kind, MessageKind::ImportBlocked);
        assert!(v[0].message.contains("server logics modules"));
        assert!(v[0].message.contains("server functions"));
        assert!(v[0].message.contains("triggered by"));
        assert_eq!(v[0].location.file, PathBuf::from("src/db.ts"));
        assert_eq!(v[0].location.line, 2);
    }

    #[test]
    fn client_component_importing_server_logic_is_blocked() {
        let engine = attribute_engine(&[(
            "/project/src/secrets.ts",
            "export const apiKey = process.env.KEY;\n",
        )]);
        let module = ModuleSource::new("/project/src/Widget.tsx", "'use client';\n")
            .with_import(import("./secrets", 3));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("never leak into the client bundle"));
    }

    #[test]
    fn allowed_pairing_reports_nothing() {
        // server component importing client component is legal
        let engine = attribute_engine(&[(
            "/project/src/Button.tsx",
            "'use client';\nexport const Button = () => null;\n",
        )]);
        let module = ModuleSource::new("/project/src/Page.tsx", "export default () => null;\n")
            .with_import(import("./Button", 1));

        assert!(engine.check(&module).is_empty());
    }

    #[test]
    fn type_only_import_is_exempt() {
        let engine = attribute_engine(&[(
            "/project/src/secrets.ts",
            "export type Config = { key: string };\n",
        )]);
        let module = ModuleSource::new("/project/src/Widget.tsx", "'use client';\n")
            .with_import(type_import("./secrets", 2));

        assert!(engine.check(&module).is_empty());
    }

    #[test]
    fn unresolved_import_is_skipped() {
        let engine = attribute_engine(&[]);
        let module = ModuleSource::new("/project/src/a.ts", "")
            .with_import(import("react", 1))
            .with_import(import("./missing", 2));

        assert!(engine.check(&module).is_empty());
    }

    #[test]
    fn alias_import_resolves_and_reports() {
        let engine = attribute_engine(&[("/project/src/x.ts", "'use server';\n")]);
        let module =
            ModuleSource::new("/project/src/deep/a.ts", "").with_import(import("@/x", 1));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1, "alias target must resolve, not skip");
    }

    #[test]
    fn reexport_role_mismatch_is_reported() {
        // server logic re-exporting agnostic logic is a legal import
        // pairing, so only the role mismatch fires
        let engine = attribute_engine(&[(
            "/project/src/util.ts",
            "'use agnostic';\nexport const id = (x) => x;\n",
        )]);
        let module = ModuleSource::new("/project/src/index.ts", "")
            .with_reexport(reexport("./util", 1));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, MessageKind::ReExportRoleMismatch);
        assert!(v[0].message.contains("preserve the module role"));
        assert!(v[0].message.contains("server logics"));
        assert!(v[0].message.contains("agnostic logics"));
    }

    #[test]
    fn blocked_reexport_reports_both_problems() {
        // client logic re-exporting server logic: blocked pairing AND a
        // role mismatch, reported independently.
        let engine = attribute_engine(&[(
            "/project/src/db.ts",
            "export const conn = 1;\n",
        )]);
        let module = ModuleSource::new("/project/src/shim.ts", "'use client';\n")
            .with_reexport(reexport("./db", 1));

        let v = engine.check(&module);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].kind, MessageKind::ImportBlocked);
        assert!(v[0].message.contains("not allowed to import"));
        assert_eq!(v[1].kind, MessageKind::ReExportRoleMismatch);
        assert!(v[1].message.contains("preserve the module role"));
    }

    #[test]
    fn same_role_reexport_is_preserved_through_chain() {
        // a re-exports b, both server logic: no violation at any hop.
        let engine = attribute_engine(&[
            ("/project/src/b.ts", "export const b = 1;\n"),
            ("/project/src/a.ts", "export * from './b';\n"),
        ]);
        let first = ModuleSource::new("/project/src/a.ts", "export * from './b';\n")
            .with_reexport(reexport("./b", 1));
        let second = ModuleSource::new("/project/src/index.ts", "")
            .with_reexport(reexport("./a", 1));

        assert!(engine.check(&first).is_empty());
        assert!(engine.check(&second).is_empty());
    }

    // --- directive dialect ---

    #[test]
    fn missing_directive_marker_halts_module() {
        let engine = directive_engine(&[(
            "/project/src/db.ts",
            "// 'use server logics'\nexport const db = 1;\n",
        )]);
        let module = ModuleSource::new("/project/src/a.ts", "export const a = 1;\n")
            .with_import(import("./db", 2));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1, "edges must not be checked after the error");
        assert_eq!(v[0].code, "MB002");
        assert_eq!(v[0].kind, MessageKind::MissingMarker);
        assert!(v[0].message.contains("declares no role"));
        assert_eq!(v[0].location.line, 1);
        assert_eq!(v[0].location.column, 1);
    }

    #[test]
    fn marker_kind_mismatch_halts_module() {
        let engine = directive_engine(&[(
            "/project/src/db.ts",
            "// 'use server logics'\nexport const db = 1;\n",
        )]);
        // logic marker in a component-bearing file, plus an import that
        // would otherwise be blocked
        let module = ModuleSource::new(
            "/project/src/View.tsx",
            "// 'use agnostic logics'\nexport const a = 1;\n",
        )
        .with_import(import("./db", 2));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].kind, MessageKind::MarkerFileKindMismatch);
        assert!(v[0]
            .message
            .contains("'use agnostic logics' marker must not appear"));
    }

    #[test]
    fn strategy_target_uses_import_site_tag() {
        let engine = directive_engine(&[(
            "/project/src/strategy.ts",
            "// 'use agnostic strategies'\nexport const pick = 1;\n",
        )]);
        // server function importing via @clientComponents: the edge is
        // classified as client components, which is blocked for functions.
        let module = ModuleSource::new(
            "/project/src/act.ts",
            "// 'use server functions'\nexport const act = 1;\n",
        )
        .with_import(tagged_import("./strategy", "@clientComponents", 2));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("client components"));
    }

    #[test]
    fn strategy_target_without_tag_is_skipped() {
        let engine = directive_engine(&[(
            "/project/src/strategy.ts",
            "// 'use agnostic strategies'\nexport const pick = 1;\n",
        )]);
        let module = ModuleSource::new(
            "/project/src/act.ts",
            "// 'use server functions'\nexport const act = 1;\n",
        )
        .with_import(import("./strategy", 2))
        .with_import(tagged_import("./strategy", "@nonsense", 3));

        assert!(engine.check(&module).is_empty());
    }

    #[test]
    fn directive_blocked_pairing_reports() {
        let engine = directive_engine(&[(
            "/project/src/db.ts",
            "// 'use server logics'\nexport const db = 1;\n",
        )]);
        let module = ModuleSource::new(
            "/project/src/Widget.tsx",
            "// 'use client components'\nexport const W = () => null;\n",
        )
        .with_import(import("./db", 2));

        let v = engine.check(&module);
        assert_eq!(v.len(), 1);
        assert!(v[0].message.contains("client components modules"));
        assert!(v[0].message.contains("never leak into the client bundle"));
    }

    #[test]
    fn unclassifiable_directive_target_is_skipped() {
        let engine = directive_engine(&[(
            "/project/src/legacy.ts",
            "export const old = 1;\n",
        )]);
        let module = ModuleSource::new(
            "/project/src/a.ts",
            "// 'use server logics'\nexport const a = 1;\n",
        )
        .with_import(import("./legacy", 2));

        assert!(engine.check(&module).is_empty());
    }

    // --- helpers ---

    #[test]
    fn join_names_formats() {
        assert_eq!(join_names(&[]), "");
        assert_eq!(join_names(&[Role::ClientLogic]), "client logics");
        assert_eq!(
            join_names(&[Role::ClientLogic, Role::ServerFunction]),
            "client logics or server functions"
        );
        assert_eq!(
            join_names(&[Role::ClientLogic, Role::ServerComponent, Role::ServerFunction]),
            "client logics, server components, or server functions"
        );
    }
}
