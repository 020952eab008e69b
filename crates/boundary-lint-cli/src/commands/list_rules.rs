//! List rules command implementation.

use boundary_lint_rules::{ATTRIBUTE_RULE, DIRECTIVE_RULE};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in [&ATTRIBUTE_RULE, &DIRECTIVE_RULE] {
        println!("{:<10} {:<25} {}", rule.code, rule.name, rule.description);
        for kind in rule.message_kinds {
            println!("{:<10} {:<25}   emits: {}", "", "", kind.id());
        }
    }

    println!("\nOne rule runs per project, selected by the `dialect` config key:");
    println!("  dialect = \"attribute\"  enables {}", ATTRIBUTE_RULE.name);
    println!("  dialect = \"directive\"  enables {}", DIRECTIVE_RULE.name);
}
