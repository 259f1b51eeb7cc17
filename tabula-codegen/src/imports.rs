//! Import collection for generated modules.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks named imports per module and renders them as TypeScript import
/// statements.
///
/// Modules keep insertion order; symbols within a module are sorted so the
/// rendered block is deterministic.
///
/// # Example
///
/// ```
/// use tabula_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("sequelize", "Model");
/// imports.add("sequelize", "DataTypes");
///
/// assert_eq!(
///     imports.render(),
///     "import { DataTypes, Model } from 'sequelize';\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    values: IndexMap<String, BTreeSet<String>>,
    types: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.values
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a type-only symbol from a module.
    pub fn add_type(&mut self, module: &str, symbol: &str) {
        self.types
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Check if a specific value symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.values
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.types.is_empty()
    }

    /// Render value imports, one statement per module.
    pub fn render(&self) -> String {
        render_block(&self.values, "import")
    }

    /// Render type-only imports, one statement per module.
    pub fn render_types(&self) -> String {
        render_block(&self.types, "import type")
    }

    /// Render type-only symbols as re-exports, one statement per module.
    pub fn render_type_exports(&self) -> String {
        render_block(&self.types, "export type")
    }
}

fn render_block(imports: &IndexMap<String, BTreeSet<String>>, keyword: &str) -> String {
    imports
        .iter()
        .filter(|(_, symbols)| !symbols.is_empty())
        .map(|(module, symbols)| {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            format!("{keyword} {{ {} }} from '{module}';\n", symbols.join(", "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_deduplicated_and_sorted() {
        let mut imports = ImportCollector::new();
        imports.add("sequelize", "Sequelize");
        imports.add("sequelize", "DataTypes");
        imports.add("sequelize", "Sequelize");

        assert!(imports.has_symbol("sequelize", "DataTypes"));
        assert!(!imports.has_symbol("sequelize", "Optional"));
        assert_eq!(
            imports.render(),
            "import { DataTypes, Sequelize } from 'sequelize';\n"
        );
    }

    #[test]
    fn test_modules_keep_insertion_order() {
        let mut imports = ImportCollector::new();
        imports.add("./user", "User");
        imports.add("./blog-post", "BlogPost");

        assert_eq!(
            imports.render(),
            "import { User } from './user';\nimport { BlogPost } from './blog-post';\n"
        );
    }

    #[test]
    fn test_type_imports_render_separately() {
        let mut imports = ImportCollector::new();
        imports.add_type("./user", "UserAttributes");
        imports.add_type("./user", "UserCreationAttributes");

        assert!(!imports.is_empty());
        assert_eq!(imports.render(), "");
        assert_eq!(
            imports.render_types(),
            "import type { UserAttributes, UserCreationAttributes } from './user';\n"
        );
        assert_eq!(
            imports.render_type_exports(),
            "export type { UserAttributes, UserCreationAttributes } from './user';\n"
        );
    }
}
