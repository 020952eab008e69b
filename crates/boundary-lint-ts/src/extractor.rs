//! Syntax provider trait.
//!
//! `SyntaxProvider` is the seam between the host's parsing machinery and
//! the boundary engine: it reduces a source file to the core
//! [`ModuleSource`] IR. Implement it to plug in another parser.

use std::path::{Path, PathBuf};

use boundary_lint_core::ModuleSource;

/// Errors while extracting a module.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser produced no tree for this file.
    #[error("failed to parse {path}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
    },
}

/// Reduces parsed source files to the module IR.
pub trait SyntaxProvider: Send + Sync {
    /// File extensions this provider handles (e.g., `&["ts", "tsx"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts the import/re-export declarations of one module.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed at all; malformed
    /// constructs inside an otherwise parsable file are skipped, not
    /// errors.
    fn extract(&self, path: &Path, source: &str) -> Result<ModuleSource, ExtractError>;
}
