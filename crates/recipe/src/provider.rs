use smartchef_shared::recipe::GeneratedRecipe;

use crate::{fallback::LocalGenerator, request::GenerationRequest};

/// Why a provider could not produce a recipe. Never reaches callers of
/// [`crate::Generator`]; the chain logs it and moves on to the fallback.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("http request failed: {0}")]
    Http(String),

    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("provider returned no content")]
    EmptyResponse,

    #[error("no JSON object in provider output")]
    NoJson,

    #[error("invalid recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

#[async_trait::async_trait]
pub trait GenerationProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, request: &GenerationRequest)
    -> Result<GeneratedRecipe, ProviderError>;
}

/// Fixed-order chain: one attempt on the primary provider, then the local
/// generator, which cannot fail.
pub struct ProviderChain {
    primary: Option<Box<dyn GenerationProvider>>,
    fallback: LocalGenerator,
}

impl Default for ProviderChain {
    fn default() -> Self {
        Self::local()
    }
}

impl ProviderChain {
    pub fn new(primary: impl GenerationProvider + 'static) -> Self {
        Self {
            primary: Some(Box::new(primary)),
            fallback: LocalGenerator,
        }
    }

    /// Chain without a primary provider; every request is served locally.
    pub fn local() -> Self {
        Self {
            primary: None,
            fallback: LocalGenerator,
        }
    }

    pub fn primary_name(&self) -> Option<&'static str> {
        self.primary.as_ref().map(|p| p.name())
    }

    pub async fn generate(&self, request: &GenerationRequest) -> GeneratedRecipe {
        if let Some(primary) = &self.primary {
            match primary.generate(request).await {
                Ok(recipe) => {
                    tracing::debug!(provider = primary.name(), "recipe generated");
                    return recipe;
                }
                Err(err) => {
                    tracing::warn!(
                        provider = primary.name(),
                        error = %err,
                        "primary provider failed, using local generator"
                    );
                }
            }
        }

        tracing::debug!(provider = self.fallback.name(), "recipe generated");

        self.fallback.generate_recipe(request)
    }
}
