use std::sync::Arc;

use anyhow::Context;

use discvr_ai::{AskGateway, GeminiClient, GenerationConfig, LlmClient};
use discvr_products::Catalog;

use crate::config::ApiConfig;

/// Shared, read-only request-time services.
///
/// Nothing in here is mutated after startup, so handlers share it through an
/// `Arc` without locking.
pub struct AppServices {
    catalog: Arc<Catalog>,
    gateway: AskGateway,
}

impl AppServices {
    pub fn new(
        catalog: Arc<Catalog>,
        llm: Arc<dyn LlmClient>,
        generation: GenerationConfig,
    ) -> Self {
        let gateway = AskGateway::new(&catalog, llm).with_generation_config(generation);
        Self { catalog, gateway }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn gateway(&self) -> &AskGateway {
        &self.gateway
    }
}

/// Load the catalog and build the Gemini-backed gateway from configuration.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => {
            let catalog = Catalog::builtin().context("bundled catalog is invalid")?;
            tracing::info!(products = catalog.len(), "using bundled catalog");
            catalog
        }
    };

    let llm = GeminiClient::new(config.gemini.clone()).context("failed to build Gemini client")?;
    tracing::info!(
        model = %config.gemini.model,
        temperature = config.generation.temperature,
        max_output_tokens = config.generation.max_output_tokens,
        "AI gateway ready"
    );

    Ok(AppServices::new(
        Arc::new(catalog),
        Arc::new(llm),
        config.generation.clone(),
    ))
}
