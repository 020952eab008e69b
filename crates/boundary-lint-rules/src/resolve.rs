//! Import specifier resolution.
//!
//! Turns a raw import specifier into the absolute path of an existing
//! source file, or an explicit miss. Resolution order: alias table, then
//! relative to the importing directory; then exact extension, appended
//! extensions in priority order, and finally a directory `index.*`
//! fallback. Anything under `node_modules` is out of jurisdiction.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use boundary_lint_core::FileAccess;
use tracing::debug;

/// Recognized source extensions, in resolution priority order.
pub const EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// One alias entry, pattern and target both optionally ending in `/*`.
#[derive(Debug, Clone)]
struct Alias {
    pattern: String,
    target: String,
}

/// Resolves import specifiers against the project file set.
pub struct PathResolver {
    root: PathBuf,
    /// Sorted longest-pattern-first so more specific aliases win.
    aliases: Vec<Alias>,
    fs: Arc<dyn FileAccess>,
}

impl PathResolver {
    /// Creates a resolver for a project root.
    ///
    /// The alias table is loaded once and immutable for the run.
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        aliases: &BTreeMap<String, String>,
        fs: Arc<dyn FileAccess>,
    ) -> Self {
        let mut aliases: Vec<Alias> = aliases
            .iter()
            .map(|(pattern, target)| Alias {
                pattern: pattern.clone(),
                target: target.clone(),
            })
            .collect();
        aliases.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        Self {
            root: root.into(),
            aliases,
            fs,
        }
    }

    /// The project root this resolver is bound to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the project root, for display in violations.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }

    /// Resolves `specifier` as imported from `importer_dir`.
    ///
    /// Returns the absolute path of an existing source file, or `None`
    /// when nothing matches or the match is vendored.
    #[must_use]
    pub fn resolve(&self, importer_dir: &Path, specifier: &str) -> Option<PathBuf> {
        let base = match self.apply_alias(specifier) {
            Some(aliased) => aliased,
            None if specifier.starts_with('.') => normalize(&importer_dir.join(specifier)),
            // Bare specifier with no alias: a package import, not ours.
            None => return None,
        };

        let found = self.existing_file(&base)?;
        if is_vendored(&found) {
            debug!("resolved {} into node_modules, skipping", specifier);
            return None;
        }
        Some(found)
    }

    /// Applies the alias table; first (longest) matching entry wins.
    fn apply_alias(&self, specifier: &str) -> Option<PathBuf> {
        for alias in &self.aliases {
            if let Some(prefix) = alias.pattern.strip_suffix("/*") {
                if let Some(rest) = specifier
                    .strip_prefix(prefix)
                    .and_then(|r| r.strip_prefix('/'))
                {
                    let target_prefix = alias.target.trim_end_matches("/*");
                    return Some(normalize(&self.root.join(target_prefix).join(rest)));
                }
            } else if specifier == alias.pattern {
                return Some(normalize(&self.root.join(&alias.target)));
            }
        }
        None
    }

    /// Finds an existing file for a base path, trying the exact path,
    /// appended extensions, and a directory index.
    fn existing_file(&self, base: &Path) -> Option<PathBuf> {
        if has_recognized_extension(base) && self.fs.is_file(base) {
            return Some(base.to_path_buf());
        }

        for ext in EXTENSIONS {
            let candidate = append_extension(base, ext);
            if self.fs.is_file(&candidate) {
                return Some(candidate);
            }
        }

        for ext in EXTENSIONS {
            let candidate = base.join(format!("index.{ext}"));
            if self.fs.is_file(&candidate) {
                return Some(candidate);
            }
        }

        None
    }
}

/// True if the path has one of the recognized source extensions.
#[must_use]
pub fn has_recognized_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e))
}

/// Appends `.ext` without replacing an existing dotted segment
/// (`store.test` must become `store.test.ts`, not `store.ts`).
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// True if the path passes through a vendored directory.
fn is_vendored(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(s) if s == "node_modules"))
}

/// Lexically normalizes `.` and `..` components so in-memory lookups
/// behave like disk lookups.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else {
                    parts.push(component);
                }
            }
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}
