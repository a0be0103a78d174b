//! Demo showing the interactive role selector
//!
//! Runs the ratatui selector over the built-in catalog and prints what the
//! host callback received.

use rolepick::Catalog;
use rolepick::ui::{DisplayMode, RatatuiSelector, RoleSelector, SelectorConfig};

fn main() {
    println!("=== Rolepick Selector Demo ===\n");

    let catalog = Catalog::builtin();
    println!("Available roles:");
    for role in &catalog {
        println!("  - {}: {}", role.title, role.label);
    }

    println!("\nInstructions:");
    println!("  - Press Enter to open the role menu");
    println!("  - Type to filter roles (substring, case-insensitive)");
    println!("  - Use arrow keys to navigate, Enter to select");
    println!("  - ESC closes the menu (your search is kept); ESC again quits\n");

    let config = SelectorConfig::new(catalog)
        .with_identifier("demo-session")
        .with_display_mode(DisplayMode::Full)
        .with_on_role_select(|title, context| {
            // This is what a chat frontend would feed into its system prompt
            println!("callback fired: {title}\n{context}");
        });

    match RatatuiSelector::new().run(config) {
        Ok(outcome) => {
            if let Some(selection) = outcome.selected {
                println!("\n=== Selected Role ===");
                println!("  ✓ {}", selection.title);
                println!("  context: {}", selection.context);
            } else {
                println!("\nSelection cancelled by user.");
            }
        }
        Err(e) => {
            eprintln!("\nError during selection: {e}");
            std::process::exit(1);
        }
    }
}
