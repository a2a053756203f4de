use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// An external service that turns a prompt into suggestion JSON.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Check configuration that must be present before any request is made.
    ///
    /// Runs synchronously so a missing credential never turns into a network call.
    fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }

    /// Send `prompt` with the declared output `schema` and return the raw response text.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String>;
}
