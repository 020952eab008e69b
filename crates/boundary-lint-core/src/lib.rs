//! # boundary-lint-core
//!
//! Shared types for module-boundary linting.
//!
//! This crate carries everything the engine and CLI agree on:
//!
//! - [`Violation`], [`Severity`], [`Location`], [`LintResult`] for findings
//! - [`Config`] for TOML-based project configuration
//! - [`FileAccess`] as the injected read-only file-system capability
//! - [`ModuleSource`] as the module IR produced by syntax providers
//! - [`RuleInfo`] / [`MessageKind`] as the rule registration surface

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fs;
mod module;
mod rule;
mod types;

pub use config::{AnalyzerConfig, Config, ConfigError, DialectKind, ResolverConfig, RuleConfig};
pub use fs::{FileAccess, MemoryFileSystem, OsFileSystem};
pub use module::{FileKind, ImportDecl, ImportKind, ModuleSource, ReExportDecl};
pub use rule::{MessageKind, RuleInfo};
pub use types::{LintResult, Location, Severity, Violation, ViolationDiagnostic};
