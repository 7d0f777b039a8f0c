//! Message generation strategy adapters.
//!
//! Two implementations of the `MessageGenerator` port: a static in-memory
//! pool for local development and as a fallback, and an OpenRouter-backed
//! generator for production.

mod openrouter;
mod static_pool;

pub use openrouter::{OpenRouterConfig, OpenRouterGenerator};
pub use static_pool::StaticPoolGenerator;
