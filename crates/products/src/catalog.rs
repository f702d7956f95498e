use std::collections::HashMap;
use std::path::Path;

use discvr_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

/// Optional category/keyword filters for [`Catalog::query`].
///
/// Empty strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    category: Option<String>,
    keyword: Option<String>,
}

impl ProductFilter {
    pub fn new(category: Option<String>, keyword: Option<String>) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
            keyword: keyword.filter(|k| !k.is_empty()).map(|k| k.to_lowercase()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Lowercased keyword.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category() {
            if !product.in_category(category) {
                return false;
            }
        }
        if let Some(keyword) = self.keyword() {
            if !product.matches_keyword(keyword) {
                return false;
            }
        }
        true
    }
}

/// Immutable, process-wide product catalog.
///
/// Built once at startup; shared behind `Arc` by the HTTP layer and the AI
/// gateway. There is no mutation path.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if index.insert(product.id, pos).is_some() {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a JSON array of product records.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog json: {e}")))?;
        Self::new(products)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DomainError::io(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The sample catalog bundled with the crate.
    pub fn builtin() -> DomainResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&pos| &self.products[pos])
    }

    /// Distinct categories in first-seen catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Linear scan in catalog order. Filters are ANDed; no match is an empty
    /// result, not an error.
    pub fn query(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Map AI-supplied ids back to catalog records.
    ///
    /// Keeps the order of `ids`, keeps repeats, drops ids that are not in the
    /// catalog.
    pub fn reconcile(&self, ids: &[ProductId]) -> Vec<&Product> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: &str, tags: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price: 100.0,
            description: format!("{name} description"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn two_item_catalog() -> Catalog {
        Catalog::new(vec![
            product(1, "Pixel", "Phones", &["android"]),
            product(2, "ThinkPad", "Laptops", &["business"]),
        ])
        .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            product(1, "A", "Phones", &[]),
            product(1, "B", "Phones", &[]),
        ])
        .unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains('1')),
            other => panic!("expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_validation_error() {
        match Catalog::from_json_str("{\"id\": 1}").unwrap_err() {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get(ProductId::new(1)).is_some());
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(
            &path,
            r#"[{"id":5,"name":"Speaker","category":"Audio","price":49.5,"description":"loud","tags":[]}]"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProductId::new(5)).unwrap().name, "Speaker");

        match Catalog::load(dir.path().join("missing.json")).unwrap_err() {
            DomainError::Io(_) => {}
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let catalog = two_item_catalog();
        let filter = ProductFilter::new(Some("phones".to_string()), None);
        assert_eq!(ids(&catalog.query(&filter)), vec![1]);
    }

    #[test]
    fn keyword_and_category_are_anded() {
        let catalog = two_item_catalog();

        let both = ProductFilter::new(Some("Laptops".to_string()), Some("BUSINESS".to_string()));
        assert_eq!(ids(&catalog.query(&both)), vec![2]);

        let disjoint = ProductFilter::new(Some("Phones".to_string()), Some("business".to_string()));
        assert!(catalog.query(&disjoint).is_empty());
    }

    #[test]
    fn empty_filters_are_ignored() {
        let catalog = two_item_catalog();
        let filter = ProductFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(filter, ProductFilter::default());
        assert_eq!(ids(&catalog.query(&filter)), vec![1, 2]);
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let catalog = two_item_catalog();
        let filter = ProductFilter::new(Some("Tablets".to_string()), None);
        assert!(catalog.query(&filter).is_empty());
    }

    #[test]
    fn reconcile_drops_unknown_ids() {
        let catalog = two_item_catalog();
        let out = catalog.reconcile(&[ProductId::new(2), ProductId::new(99)]);
        assert_eq!(ids(&out), vec![2]);
    }

    #[test]
    fn reconcile_keeps_ai_order_and_repeats() {
        let catalog = two_item_catalog();
        let out = catalog.reconcile(&[
            ProductId::new(2),
            ProductId::new(1),
            ProductId::new(2),
        ]);
        assert_eq!(ids(&out), vec![2, 1, 2]);
    }

    #[test]
    fn categories_are_distinct_in_catalog_order() {
        let catalog = Catalog::new(vec![
            product(1, "A", "Phones", &[]),
            product(2, "B", "Laptops", &[]),
            product(3, "C", "Phones", &[]),
        ])
        .unwrap();
        assert_eq!(catalog.categories(), vec!["Phones", "Laptops"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_catalog() -> impl Strategy<Value = Catalog> {
            prop::collection::vec(
                (
                    "[a-dA-D]{1,6}",
                    prop::sample::select(vec!["Phones", "phones", "Laptops", "Audio"]),
                    "[a-d ]{0,12}",
                    prop::collection::vec("[a-dA-D]{1,4}", 0..3),
                ),
                0..16,
            )
            .prop_map(|rows| {
                let products = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, (name, category, description, tags))| Product {
                        id: ProductId::new(i as i64),
                        name,
                        category: category.to_string(),
                        price: 1.0,
                        description,
                        tags,
                    })
                    .collect();
                Catalog::new(products).unwrap()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every result is in the catalog and satisfies both predicates.
            #[test]
            fn query_results_satisfy_filters(
                catalog in arb_catalog(),
                category in prop::option::of(prop::sample::select(vec!["PHONES", "laptops", "Audio", "Tablets"])),
                keyword in prop::option::of("[a-dA-D]{1,2}"),
            ) {
                let filter = ProductFilter::new(category.map(str::to_string), keyword.clone());
                let out = catalog.query(&filter);

                for p in &out {
                    prop_assert_eq!(catalog.get(p.id), Some(*p));
                    if let Some(c) = category {
                        prop_assert!(p.category.eq_ignore_ascii_case(c));
                    }
                    if let Some(k) = &keyword {
                        let k = k.to_lowercase();
                        prop_assert!(
                            p.name.to_lowercase().contains(&k)
                                || p.description.to_lowercase().contains(&k)
                                || p.tags.iter().any(|t| t.to_lowercase().contains(&k))
                        );
                    }
                }

                let expected = catalog.products().iter().filter(|p| filter.matches(p)).count();
                prop_assert_eq!(out.len(), expected);
            }

            /// Property: no filters returns the full catalog in catalog order.
            #[test]
            fn unfiltered_query_is_identity(catalog in arb_catalog()) {
                let out = catalog.query(&ProductFilter::default());
                let all: Vec<&Product> = catalog.products().iter().collect();
                prop_assert_eq!(out, all);
            }

            /// Property: reconcile is the order-preserving subsequence of known ids.
            #[test]
            fn reconcile_is_order_preserving_subset(
                catalog in arb_catalog(),
                raw_ids in prop::collection::vec(-2i64..20, 0..24),
            ) {
                let ids: Vec<ProductId> = raw_ids.iter().copied().map(ProductId::new).collect();
                let out = catalog.reconcile(&ids);

                let expected: Vec<ProductId> = ids
                    .iter()
                    .copied()
                    .filter(|id| catalog.get(*id).is_some())
                    .collect();
                let got: Vec<ProductId> = out.iter().map(|p| p.id).collect();
                prop_assert_eq!(got, expected);

                for p in out {
                    prop_assert!(ids.contains(&p.id));
                    prop_assert!(catalog.products().contains(p));
                }
            }
        }
    }
}
