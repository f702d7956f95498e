use serde::{Deserialize, Serialize};
use serde_json::Value;

use discvr_products::{Product, ProductFilter};

// -------------------------
// Request DTOs
// -------------------------

/// `GET /api/products` query string.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl ProductsQuery {
    pub fn into_filter(self) -> ProductFilter {
        ProductFilter::new(self.category, self.q)
    }
}

/// Extract the trimmed `query` string from an ask body.
///
/// `None` when the field is missing, not a string, or blank after trimming.
pub fn ask_query(body: &Value) -> Option<String> {
    let query = body.get("query")?.as_str()?.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductsResponse<'a> {
    pub count: usize,
    pub products: Vec<&'a Product>,
}

impl<'a> ProductsResponse<'a> {
    pub fn new(products: Vec<&'a Product>) -> Self {
        Self {
            count: products.len(),
            products,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AskResponse<'a> {
    pub products: Vec<&'a Product>,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse<'a> {
    pub categories: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ask_query_trims_and_validates() {
        assert_eq!(ask_query(&json!({"query": "  quiet headphones "})).as_deref(), Some("quiet headphones"));
        assert_eq!(ask_query(&json!({"query": "  "})), None);
        assert_eq!(ask_query(&json!({"query": ""})), None);
        assert_eq!(ask_query(&json!({"query": 42})), None);
        assert_eq!(ask_query(&json!({"query": null})), None);
        assert_eq!(ask_query(&json!({"q": "phones"})), None);
        assert_eq!(ask_query(&json!(["query"])), None);
    }

    #[test]
    fn products_query_blank_params_are_ignored() {
        let query = ProductsQuery {
            category: Some(String::new()),
            q: None,
        };
        assert_eq!(query.into_filter(), ProductFilter::default());
    }
}
