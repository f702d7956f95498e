use serde::{Deserialize, Serialize};

use discvr_core::ProductId;

/// A catalog entry.
///
/// Field names match the JSON records in the catalog data file and the HTTP
/// responses; there is no separate read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Case-insensitive exact match on the category.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match against name, description or any tag.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// One-line rendering used as model context.
    ///
    /// `[ID:<id>] <name> | <category> | $<price> | Tags: <tags> | <description>`
    pub fn context_line(&self) -> String {
        format!(
            "[ID:{}] {} | {} | ${} | Tags: {} | {}",
            self.id,
            self.name,
            self.category,
            self.price,
            self.tags.join(", "),
            self.description
        )
    }
}
