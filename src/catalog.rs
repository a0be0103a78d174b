//! Role definitions and the catalog they live in
//!
//! These are pure data structures with no business logic. The catalog is
//! constructed once and never mutated; roles are only ever selected, never
//! created or destroyed at runtime.

use serde::{Deserialize, Serialize};

/// A named persona preset
///
/// The `context` is the full descriptive text handed downstream on selection
/// (typically used as a system prompt). It is searchable but not shown in
/// full in the collapsed list view.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Short display name, unique within the catalog by convention
    pub title: String,

    /// One-line human-readable summary
    pub label: String,

    /// Full descriptive text passed to the host on selection
    pub context: String,
}

impl RoleDefinition {
    /// Create a new role definition
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        label: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            context: context.into(),
        }
    }
}

/// Fixed, ordered sequence of available roles
///
/// Titles are expected to be unique but uniqueness is not enforced; display
/// layers key entries by position together with the title.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    roles: Vec<RoleDefinition>,
}

impl Catalog {
    /// Create a catalog from a fixed set of roles
    #[must_use]
    pub const fn new(roles: Vec<RoleDefinition>) -> Self {
        Self { roles }
    }

    /// The stock catalog shipped with the widget
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            RoleDefinition::new(
                "Terraform",
                "I will help you to manage your infrastructure as code",
                "You are a Terraform expert. Help users with infrastructure as code, \
                 Terraform configurations, best practices, and troubleshooting. Provide \
                 clear, practical solutions.",
            ),
            RoleDefinition::new(
                "Pythonista",
                "Create a python script to manage your data",
                "You are a Python expert. Help users with Python programming, data \
                 analysis, scripting, libraries, and best practices. Write clean, \
                 efficient code with explanations.",
            ),
            RoleDefinition::new(
                "TypeScripter",
                "Build a shiny web app from scratch",
                "You are a TypeScript/JavaScript expert. Help users build web \
                 applications, work with frameworks like React/Next.js, and write \
                 type-safe code.",
            ),
            RoleDefinition::new(
                "DB Magician",
                "Query your database with SQL",
                "You are a database expert. Help users with SQL queries, database \
                 design, optimization, and troubleshooting across different database \
                 systems.",
            ),
        ])
    }

    /// All roles in catalog order
    #[must_use]
    pub fn roles(&self) -> &[RoleDefinition] {
        &self.roles
    }

    /// Number of roles in the catalog
    #[must_use]
    pub const fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Get a role by catalog position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RoleDefinition> {
        self.roles.get(index)
    }

    /// Iterate over roles in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, RoleDefinition> {
        self.roles.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RoleDefinition;
    type IntoIter = std::slice::Iter<'a, RoleDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());

        let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Terraform", "Pythonista", "TypeScripter", "DB Magician"]
        );
    }

    #[test]
    fn test_role_definition_creation() {
        let role = RoleDefinition::new("Rustacean", "Write safe systems code", "You are a Rust expert.");

        assert_eq!(role.title, "Rustacean");
        assert_eq!(role.label, "Write safe systems code");
        assert_eq!(role.context, "You are a Rust expert.");
    }

    #[test]
    fn test_catalog_get_by_position() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.get(1).map(|r| r.title.as_str()), Some("Pythonista"));
        assert_eq!(catalog.get(4), None);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![RoleDefinition::new("Solo", "only role", "context")]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.roles()[0].title, "Solo");
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new());

        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }
}
