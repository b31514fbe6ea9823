use async_trait::async_trait;

use crate::domain::message::MessageFormat;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// Returns the raw text of the model's reply for `diff`.
    async fn generate_commit_message(&self, diff: &str, format: MessageFormat) -> AppResult<String>;
}
