//! Module intermediate representation.
//!
//! The syntax provider (Tree-sitter in the CLI, hand-built values in
//! tests) reduces a parsed source file to this IR: the raw text plus the
//! import and re-export declarations with their locations. The engine
//! never sees the full syntax tree.

use std::path::{Path, PathBuf};

use crate::types::Location;

/// Whether a file may contain UI-tree-producing syntax.
///
/// Derived from the extension alone, never from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Plain logic file (`.ts`, `.js`, ...).
    Logic,
    /// Component-bearing file (`.tsx`, `.jsx`).
    Component,
}

impl FileKind {
    /// Derives the file kind from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsx" | "jsx") => Self::Component,
            _ => Self::Logic,
        }
    }
}

/// Kind of an import or re-export declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// Runtime dependency.
    Value,
    /// `import type` / `export type` - carries no runtime dependency.
    TypeOnly,
}

/// A single import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Raw module specifier (e.g., `"./user"`, `"@/lib/db"`).
    pub specifier: String,
    /// Value or type-only.
    pub kind: ImportKind,
    /// Location of the declaration.
    pub location: Location,
    /// Text of the first comment physically nested inside the declaration,
    /// if any (carries the strategy tag in the directive dialect).
    pub inline_comment: Option<String>,
}

/// A re-export declaration (`export ... from "specifier"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExportDecl {
    /// Raw module specifier.
    pub specifier: String,
    /// Value or type-only.
    pub kind: ImportKind,
    /// Location of the declaration.
    pub location: Location,
}

/// Everything the engine needs to know about one source module.
#[derive(Debug, Clone)]
pub struct ModuleSource {
    /// Absolute path of the module.
    pub path: PathBuf,
    /// Component-bearing or plain logic.
    pub file_kind: FileKind,
    /// Raw module text (marker extraction reads the leading trivia).
    pub text: String,
    /// All import declarations, in source order.
    pub imports: Vec<ImportDecl>,
    /// All re-export declarations, in source order.
    pub reexports: Vec<ReExportDecl>,
}

impl ModuleSource {
    /// Creates a module with no declarations; file kind is derived
    /// from the path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let path = path.into();
        let file_kind = FileKind::from_path(&path);
        Self {
            path,
            file_kind,
            text: text.into(),
            imports: Vec::new(),
            reexports: Vec::new(),
        }
    }

    /// Adds an import declaration.
    #[must_use]
    pub fn with_import(mut self, import: ImportDecl) -> Self {
        self.imports.push(import);
        self
    }

    /// Adds a re-export declaration.
    #[must_use]
    pub fn with_reexport(mut self, reexport: ReExportDecl) -> Self {
        self.reexports.push(reexport);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_kind_from_extension() {
        assert_eq!(FileKind::from_path(Path::new("a.tsx")), FileKind::Component);
        assert_eq!(FileKind::from_path(Path::new("a.jsx")), FileKind::Component);
        assert_eq!(FileKind::from_path(Path::new("a.ts")), FileKind::Logic);
        assert_eq!(FileKind::from_path(Path::new("a.js")), FileKind::Logic);
        assert_eq!(FileKind::from_path(Path::new("Makefile")), FileKind::Logic);
    }

    #[test]
    fn module_source_derives_kind() {
        let m = ModuleSource::new("/p/src/page.tsx", "");
        assert_eq!(m.file_kind, FileKind::Component);
        assert!(m.imports.is_empty());
    }
}
