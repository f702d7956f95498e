//! Prompt construction for the ask gateway.

use discvr_products::Catalog;

/// Every catalog entry on its own line, in catalog order.
pub fn catalog_context(catalog: &Catalog) -> String {
    catalog
        .products()
        .iter()
        .map(|p| p.context_line())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The fixed system instruction with the catalog embedded.
pub fn system_instruction(catalog: &Catalog) -> String {
    format!(
        r#"You are a helpful product discovery assistant for an electronics store.

Here is the current product catalog:
{context}

INSTRUCTIONS:
- Analyse the user's query and determine which products are most relevant.
- Return ONLY valid JSON in the following shape (no markdown, no code fences):
  {{ "productIds": [<list of matching product IDs as numbers>], "summary": "<a short 1-3 sentence summary explaining why these products match>" }}
- If no products match, return {{ "productIds": [], "summary": "<explain that nothing matched>" }}.
- Do NOT include any text outside the JSON object."#,
        context = catalog_context(catalog)
    )
}
