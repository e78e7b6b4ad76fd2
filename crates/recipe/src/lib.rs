mod constraints;
mod extract;
mod fallback;
#[cfg(feature = "gemini")]
mod gemini;
mod prompt;
mod provider;
mod request;
mod scaling;
mod service;

pub use extract::{decode_recipe, extract_json_span};
pub use fallback::LocalGenerator;
#[cfg(feature = "gemini")]
pub use gemini::{API_BASE_URL, DEFAULT_MODEL, GeminiProvider};
pub use prompt::build_prompt;
pub use provider::{GenerationProvider, ProviderChain, ProviderError};
pub use request::GenerationRequest;
pub use service::Generator;
