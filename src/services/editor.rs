use std::path::Path;

use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait EditorService: Send + Sync {
    /// Opens `path` in an interactive editor and waits for it to exit.
    async fn edit(&self, path: &Path) -> AppResult<()>;
}
