use smartchef_shared::recipe::{BASELINE_SERVINGS, GeneratedRecipe};
use validator::Validate;

use crate::{
    constraints,
    provider::{GenerationProvider, ProviderChain},
    request::GenerationRequest,
    scaling,
};

/// Entry point for recipe generation.
///
/// Invalid requests are rejected before any provider runs. Provider failures
/// never surface; the caller always gets a recipe and cannot tell which
/// provider wrote it.
#[derive(Default)]
pub struct Generator {
    chain: ProviderChain,
}

impl Generator {
    pub fn new(primary: impl GenerationProvider + 'static) -> Self {
        Self {
            chain: ProviderChain::new(primary),
        }
    }

    pub fn local() -> Self {
        Self {
            chain: ProviderChain::local(),
        }
    }

    pub fn with_chain(chain: ProviderChain) -> Self {
        Self { chain }
    }

    #[tracing::instrument(
        skip_all,
        fields(
            ingredients = request.ingredients.len(),
            primary = self.chain.primary_name().unwrap_or("none")
        )
    )]
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> smartchef_shared::Result<GeneratedRecipe> {
        request.validate()?;

        let mut recipe = self.chain.generate(request).await;

        constraints::enforce(&mut recipe, request);
        scaling::scale(&mut recipe, BASELINE_SERVINGS);

        tracing::info!(title = %recipe.title, servings = recipe.servings, "recipe ready");

        Ok(recipe)
    }
}
