use smartchef_recipe::{GenerationProvider, GenerationRequest, ProviderError, decode_recipe};
use smartchef_shared::recipe::GeneratedRecipe;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Always fails, like a provider behind a dead network.
#[derive(Clone, Default)]
pub struct Unreachable {
    pub calls: Arc<AtomicUsize>,
}

impl Unreachable {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl GenerationProvider for Unreachable {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::Http("connection refused".to_owned()))
    }
}

/// Answers every request with the same raw model output.
pub struct FixedText(pub String);

impl FixedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

#[async_trait::async_trait]
impl GenerationProvider for FixedText {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GeneratedRecipe, ProviderError> {
        decode_recipe(&self.0)
    }
}

pub const RISOTTO: &str = r#"Sure! Here is a recipe:
{
  "title": "Mushroom Risotto",
  "ingredients": [
    {"name": "Arborio rice", "amount": "1.5 cups", "category": "pantry"},
    {"name": "Mushrooms", "amount": "8 oz", "category": "produce"},
    {"name": "Parmesan cheese", "amount": "1/2 cup", "category": "dairy"},
    {"name": "Salt", "amount": "to taste", "category": "spices"}
  ],
  "instructions": ["Toast the rice", "Add stock gradually", "Stir in cheese"],
  "cookTime": "45 minutes",
  "estimatedCalories": 480,
  "cuisine": "Italian",
  "dietaryTags": ["vegetarian"],
  "difficulty": "medium",
  "servings": 2
}"#;
