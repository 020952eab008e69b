//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# boundary-lint configuration

# Rule dialect:
#   "attribute"  - roles inferred from optional 'use client' / 'use server'
#                  style directives; unmarked modules default to server roles
#   "directive"  - roles declared by a mandatory leading marker comment,
#                  e.g. //'use client components'
dialect = "attribute"

# Lowest severity that fails the process (default: "error").
# fail_on = "warning"

[analyzer]
root = "."
exclude = ["**/node_modules/**", "**/dist/**", "**/.next/**"]

# Import alias table. Patterns ending in /* remap a whole subtree;
# targets are relative to the analyzer root.
[resolver.aliases]
"@/*" = "src/*"

# Per-rule overrides (optional)
# [rules.attribute-boundaries]
# severity = "warning"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("boundary-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, CONFIG_TEMPLATE)?;

    println!("Created boundary-lint.toml");
    println!();
    println!("Next steps:");
    println!("  1. Pick a dialect and adjust [resolver.aliases] for your project");
    println!("  2. Run: boundary-lint check");

    Ok(())
}
