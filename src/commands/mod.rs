//! Shell command implementations and the registry that maps names to them.

pub mod listing;
pub mod product;
pub mod search;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::Formatter;
use anyhow::Result;
use indexmap::IndexMap;

/// Read-only state shared by every command invocation.
pub struct ShellContext<'a> {
    pub catalog: &'a Catalog,
    pub formatter: Formatter,
}

impl<'a> ShellContext<'a> {
    /// Creates a context rendering output as configured.
    pub fn new(catalog: &'a Catalog, config: &Config) -> Self {
        Self { catalog, formatter: Formatter::new(config.format, config.columns()) }
    }
}

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next command.
    Continue(String),
    /// Stop the loop.
    Exit,
}

/// Signature shared by every command handler: the trimmed argument text and the context.
pub type Handler = fn(&str, &ShellContext<'_>) -> Result<Outcome>;

/// A named command with its help texts.
#[derive(Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    /// One line shown by `help`
    pub summary: &'static str,
    /// Shown by `help <name>`
    pub usage: &'static str,
    pub handler: Handler,
}

/// Explicit mapping from command names to handlers, in registration order.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: IndexMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every built-in command.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(CommandSpec {
                name: "ingredients",
                summary: "List all Ingredients",
                usage: "List all Ingredients",
                handler: listing::ingredients,
            })
            .register(CommandSpec {
                name: "products",
                summary: "List all products.",
                usage: "List all products.",
                handler: listing::products,
            })
            .register(CommandSpec {
                name: "collections",
                summary: "List all collections with a representative product.",
                usage: "List all collections with a representative product.",
                handler: listing::collections,
            })
            .register(CommandSpec {
                name: "search_ingredients",
                summary: "Search all Ingredients",
                usage: "Search all Ingredients\nUsage: `search_ingredients Mushrooms`",
                handler: search::search_ingredients,
            })
            .register(CommandSpec {
                name: "search_products",
                summary: "Search all products",
                usage: "Search all products\nUsage: `search_products Acai + Cherry`",
                handler: search::search_products,
            })
            .register(CommandSpec {
                name: "search_with_ingredients",
                summary: "Filter products with ingredients",
                usage: "Filter products with ingredients\nUsage: \n\
                        1: `search_with_ingredients Organic Spinach`\n\
                        2: `search_with_ingredients Organic Cherry, Organic Blueberry`",
                handler: search::search_with_ingredients,
            })
            .register(CommandSpec {
                name: "show_product_ingredients",
                summary: "Get all ingredients of products",
                usage: "Get all ingredients of products\n\
                        Usage: `show_product_ingredients Acai + Cherry`",
                handler: product::show_product_ingredients,
            })
            .register(CommandSpec {
                name: "exit",
                summary: "Exit the prompt",
                usage: "Exit the prompt",
                handler: exit,
            });
        registry
    }

    /// Adds a command, replacing any command with the same name.
    pub fn register(&mut self, spec: CommandSpec) -> &mut Self {
        self.commands.insert(spec.name, spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn exit(_arg: &str, _ctx: &ShellContext<'_>) -> Result<Outcome> {
    Ok(Outcome::Exit)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::catalog::Catalog;

    pub fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"ingredients": [
                {"name": "Organic Cherry", "id": 1, "is_allergen": false},
                {"name": "Organic Blueberry", "id": 2, "is_allergen": false},
                {"name": "Ginger", "id": 3, "is_allergen": false},
                {"name": "Cashew", "id": 4, "is_allergen": true}
            ]}"#,
            r#"{"products": [
                {"id": 1, "name": "Acai + Cherry", "collection": "smoothie", "ingredient_ids": [1, 2]},
                {"id": 2, "name": "Cherry + Ginger", "collection": "smoothie", "ingredient_ids": [1, 3]},
                {"id": 3, "name": "Cashew Bowl", "collection": "bowl", "ingredient_ids": [4, 2]},
                {"id": 4, "name": "Mystery Mix", "collection": "misc", "ingredient_ids": [1, 99]}
            ]}"#,
        )
        .unwrap()
    }
}
