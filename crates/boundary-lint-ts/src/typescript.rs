//! TypeScript/TSX module extraction using Tree-sitter.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use boundary_lint_core::{ImportDecl, ImportKind, Location, ModuleSource, ReExportDecl};

use crate::extractor::{ExtractError, SyntaxProvider};

/// Extracts imports and re-exports from TypeScript sources.
///
/// `.tsx`/`.jsx` files go through the TSX grammar; everything else uses
/// the plain TypeScript grammar (which also accepts JavaScript).
pub struct TypeScriptExtractor {
    typescript: Language,
    tsx: Language,
}

impl TypeScriptExtractor {
    /// Creates a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    fn language_for(&self, path: &Path) -> &Language {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsx" | "jsx") => &self.tsx,
            _ => &self.typescript,
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    /// Value of a `string` node, without the quotes.
    fn string_value(node: &Node<'_>, src: &[u8]) -> Option<String> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "string_fragment" {
                return Some(Self::text(&child, src).to_owned());
            }
        }
        // Empty string literal has no fragment child.
        Some(String::new())
    }

    /// Whether a statement carries a statement-level `type` keyword
    /// (`import type ... from`, `export type { } from`).
    fn is_type_only(node: &Node<'_>) -> bool {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if matches!(child.kind(), "type" | "typeof") {
                return true;
            }
        }
        false
    }

    /// First comment physically nested inside the declaration, with the
    /// comment delimiters stripped and the body trimmed.
    fn inline_comment(node: &Node<'_>, src: &[u8]) -> Option<String> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "comment" {
                return Some(strip_comment_delimiters(Self::text(&child, src)));
            }
        }
        None
    }

    fn location(path: &Path, node: &Node<'_>) -> Location {
        let start = node.start_position();
        Location::new(path.to_path_buf(), start.row + 1, start.column + 1)
            .with_span(node.start_byte(), node.end_byte() - node.start_byte())
    }

    fn extract_import(node: &Node<'_>, src: &[u8], path: &Path) -> Option<ImportDecl> {
        let source = node.child_by_field_name("source")?;
        let kind = if Self::is_type_only(node) {
            ImportKind::TypeOnly
        } else {
            ImportKind::Value
        };
        Some(ImportDecl {
            specifier: Self::string_value(&source, src)?,
            kind,
            location: Self::location(path, node),
            inline_comment: Self::inline_comment(node, src),
        })
    }

    fn extract_reexport(node: &Node<'_>, src: &[u8], path: &Path) -> Option<ReExportDecl> {
        // Plain exports have no source; only re-exports do.
        let source = node.child_by_field_name("source")?;
        let kind = if Self::is_type_only(node) {
            ImportKind::TypeOnly
        } else {
            ImportKind::Value
        };
        Some(ReExportDecl {
            specifier: Self::string_value(&source, src)?,
            kind,
            location: Self::location(path, node),
        })
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxProvider for TypeScriptExtractor {
    fn extensions(&self) -> &'static [&'static str] {
        &["ts", "tsx", "js", "jsx"]
    }

    fn extract(&self, path: &Path, source: &str) -> Result<ModuleSource, ExtractError> {
        let mut parser = Parser::new();
        parser.set_language(self.language_for(path))?;

        let src = source.as_bytes();
        let tree = parser.parse(src, None).ok_or_else(|| ExtractError::Parse {
            path: path.to_path_buf(),
        })?;
        let root = tree.root_node();

        let mut module = ModuleSource::new(path, source);

        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            match node.kind() {
                "import_statement" => {
                    if let Some(import) = Self::extract_import(&node, src, path) {
                        module.imports.push(import);
                    }
                }
                "export_statement" => {
                    if let Some(reexport) = Self::extract_reexport(&node, src, path) {
                        module.reexports.push(reexport);
                    }
                }
                _ => {}
            }
        }

        Ok(module)
    }
}

/// Strips `//` or `/* */` delimiters and trims the body.
fn strip_comment_delimiters(text: &str) -> String {
    let body = if let Some(rest) = text.strip_prefix("//") {
        rest
    } else if let Some(rest) = text.strip_prefix("/*") {
        rest.strip_suffix("*/").unwrap_or(rest)
    } else {
        text
    };
    body.trim().to_owned()
}
