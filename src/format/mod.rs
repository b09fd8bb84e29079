//! Output formatting for name grids, product details and collections
//! (table, JSON, markdown, CSV).

use crate::catalog::ProductDetail;
use crate::config::OutputFormat;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;

/// Formats query results for output.
pub struct Formatter {
    format: OutputFormat,
    columns: usize,
}

#[derive(Serialize)]
struct CollectionEntry<'a> {
    collection: &'a str,
    product: &'a str,
}

impl Formatter {
    /// Creates a new formatter that lays name grids out `columns` per row.
    pub fn new(format: OutputFormat, columns: usize) -> Self {
        Self { format, columns: columns.max(1) }
    }

    /// Formats a list of names under a title, e.g. "Available Ingredients".
    ///
    /// `noun` names the listed things in the empty-result message.
    pub fn format_names(&self, title: &str, noun: &str, names: &[&str]) -> String {
        if names.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => "name".to_string(),
                OutputFormat::Table => format!("{}\nNo {} found.", title, noun),
                OutputFormat::Markdown => format!("## {}\n\n*No {} found.*", title, noun),
            };
        }

        match self.format {
            OutputFormat::Json => Self::json(&names, "[]"),
            OutputFormat::Table => format!("{}\n{}", title, self.table_grid(names)),
            OutputFormat::Markdown => self.markdown_names(title, names),
            OutputFormat::Csv => self.csv_names(names),
        }
    }

    /// Formats a product with its ingredients and allergen flags.
    pub fn format_product_detail(&self, detail: &ProductDetail) -> String {
        match self.format {
            OutputFormat::Json => Self::json(detail, "{}"),
            OutputFormat::Table => self.table_detail(detail),
            OutputFormat::Markdown => self.markdown_detail(detail),
            OutputFormat::Csv => self.csv_detail(detail),
        }
    }

    /// Formats collection labels with their representative product.
    pub fn format_collections(&self, collections: &[(&str, &str)]) -> String {
        if collections.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => "collection,product".to_string(),
                _ => "No collections found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => {
                let entries: Vec<CollectionEntry<'_>> = collections
                    .iter()
                    .map(|&(collection, product)| CollectionEntry { collection, product })
                    .collect();
                Self::json(&entries, "[]")
            }
            OutputFormat::Table => {
                let mut table = Self::table();
                table.set_header(vec!["Collection", "Product"]);
                for &(collection, product) in collections {
                    table.add_row(vec![collection, product]);
                }
                table.to_string()
            }
            OutputFormat::Markdown => {
                let mut lines = vec![
                    "| Collection | Product |".to_string(),
                    "|------------|---------|".to_string(),
                ];
                for (collection, product) in collections {
                    lines.push(format!("| {} | {} |", collection, product));
                }
                lines.join("\n")
            }
            OutputFormat::Csv => {
                let mut lines = vec!["collection,product".to_string()];
                for (collection, product) in collections {
                    lines.push(format!(
                        "{},{}",
                        Self::csv_escape(collection),
                        Self::csv_escape(product)
                    ));
                }
                lines.join("\n")
            }
        }
    }

    // JSON formatting

    fn json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
    }

    // Table formatting

    fn table() -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table
    }

    fn table_grid(&self, names: &[&str]) -> String {
        let mut table = Self::table();
        for row in names.chunks(self.columns) {
            table.add_row(row.to_vec());
        }
        table.to_string()
    }

    fn table_detail(&self, detail: &ProductDetail) -> String {
        let mut table = Self::table();
        table.set_header(vec!["Product", "Ingredients", "Allergen"]);
        table.add_row(vec![detail.product.as_str(), "-", "-"]);

        for ingredient in &detail.ingredients {
            table.add_row(vec!["-", ingredient.name.as_str(), Self::yes_no(ingredient.is_allergen)]);
        }

        table.to_string()
    }

    // Markdown formatting

    fn markdown_names(&self, title: &str, names: &[&str]) -> String {
        let mut lines = vec![format!("## {}", title), String::new()];
        lines.extend(names.iter().map(|name| format!("- {}", name)));
        lines.push(String::new());
        lines.push(format!("*{} found*", names.len()));
        lines.join("\n")
    }

    fn markdown_detail(&self, detail: &ProductDetail) -> String {
        let mut lines = vec![
            "| Product | Ingredients | Allergen |".to_string(),
            "|---------|-------------|----------|".to_string(),
            format!("| {} | - | - |", detail.product),
        ];

        for ingredient in &detail.ingredients {
            lines.push(format!(
                "| - | {} | {} |",
                ingredient.name,
                Self::yes_no(ingredient.is_allergen)
            ));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_names(&self, names: &[&str]) -> String {
        let mut lines = vec!["name".to_string()];
        lines.extend(names.iter().map(|name| Self::csv_escape(name)));
        lines.join("\n")
    }

    fn csv_detail(&self, detail: &ProductDetail) -> String {
        let product = Self::csv_escape(&detail.product);
        let mut lines = vec!["product,ingredient,allergen".to_string()];

        for ingredient in &detail.ingredients {
            lines.push(format!(
                "{},{},{}",
                product,
                Self::csv_escape(&ingredient.name),
                ingredient.is_allergen
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag {
            "Yes"
        } else {
            "No"
        }
    }
}
