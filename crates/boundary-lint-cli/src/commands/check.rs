//! Check command implementation.
//!
//! Loads the project config, classifies every source module under the
//! analyzer root, and reports boundary violations.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use boundary_lint_core::{Config, DialectKind, FileAccess, LintResult, OsFileSystem};
use boundary_lint_rules::{
    AttributeDialect, BoundaryEngine, Dialect, DirectiveDialect, PathResolver, ATTRIBUTE_RULE,
    DIRECTIVE_RULE,
};
use boundary_lint_ts::{SyntaxProvider, TypeScriptExtractor};

use crate::{DialectArg, OutputFormat};

const CONFIG_FILE: &str = "boundary-lint.toml";

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    dialect: Option<DialectArg>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(path, config_path)?;
    config
        .validate(&[ATTRIBUTE_RULE.name, DIRECTIVE_RULE.name])
        .context("Config validation failed")?;

    let dialect_kind = match dialect {
        Some(DialectArg::Attribute) => DialectKind::Attribute,
        Some(DialectArg::Directive) => DialectKind::Directive,
        None => config.dialect,
    };

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        path.join(&config.analyzer.root)
    };

    let fs: Arc<dyn FileAccess> = Arc::new(OsFileSystem);
    let resolver = PathResolver::new(&root, &config.resolver.aliases, Arc::clone(&fs));

    let result = match dialect_kind {
        DialectKind::Attribute => {
            let engine = BoundaryEngine::new(AttributeDialect, resolver, Arc::clone(&fs))?;
            run_engine(&engine, &root, &config)?
        }
        DialectKind::Directive => {
            let engine = BoundaryEngine::new(DirectiveDialect, resolver, Arc::clone(&fs))?;
            run_engine(&engine, &root, &config)?
        }
    };

    super::output::print(&result, format)?;

    if result.has_violations_at(config.fail_on()) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(path: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return Config::from_file(p).with_context(|| format!("Failed to load {}", p.display()));
    }

    let candidate = path.join(CONFIG_FILE);
    if candidate.is_file() {
        tracing::debug!("Using config: {}", candidate.display());
        return Config::from_file(&candidate)
            .with_context(|| format!("Failed to load {}", candidate.display()));
    }

    tracing::debug!("No {CONFIG_FILE} found, using defaults");
    Ok(Config::default())
}

fn run_engine<D: Dialect>(
    engine: &BoundaryEngine<D>,
    root: &Path,
    config: &Config,
) -> Result<LintResult> {
    let info = engine.info();

    if !config.is_rule_enabled(info.name) {
        tracing::warn!("Rule {} is disabled in config, nothing to check", info.name);
        return Ok(LintResult::new());
    }

    let extractor = TypeScriptExtractor::new();
    let files = discover_files(root, &config.analyzer.exclude, extractor.extensions())?;

    tracing::info!("Analyzing {} files with rule {}", files.len(), info.name);

    let severity_override = config.rule_severity(info.name);

    let mut result = LintResult::new();

    for file_path in &files {
        let source = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let module = match extractor.extract(file_path, &source) {
            Ok(module) => module,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", file_path.display());
                continue;
            }
        };

        let mut violations = engine.check(&module);
        if let Some(severity) = severity_override {
            for violation in &mut violations {
                violation.severity = severity;
            }
        }

        result.violations.extend(violations);
        result.files_checked += 1;
    }

    result.sort();
    Ok(result)
}

fn discover_files(root: &Path, exclude: &[String], extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !extensions.contains(&ext) {
            continue;
        }

        let rel_str = path.strip_prefix(root).unwrap_or(path).to_string_lossy();

        let excluded = exclude.iter().any(|pattern| {
            let clean = pattern.replace("**/", "").replace("/**", "");
            !clean.is_empty() && rel_str.contains(&clean)
        });

        if !excluded {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_skips_excluded_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        std::fs::create_dir_all(root.join("src")).expect("mkdir");
        std::fs::create_dir_all(root.join("node_modules/pkg")).expect("mkdir");
        std::fs::write(root.join("src/a.ts"), "export const a = 1;\n").expect("write");
        std::fs::write(root.join("src/readme.md"), "docs\n").expect("write");
        std::fs::write(root.join("node_modules/pkg/index.ts"), "export {};\n").expect("write");

        let exclude = vec!["**/node_modules/**".to_string()];
        let files = discover_files(root, &exclude, &["ts", "tsx"]).expect("discover");

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/a.ts"));
    }

    #[test]
    fn load_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(dir.path(), None).expect("load");
        assert_eq!(config.dialect, DialectKind::Attribute);
    }

    #[test]
    fn load_config_reads_project_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), "dialect = \"directive\"\n")
            .expect("write config");
        let config = load_config(dir.path(), None).expect("load");
        assert_eq!(config.dialect, DialectKind::Directive);
    }
}
