use async_trait::async_trait;

use crate::domain::change::{Diff, DiffScope, ShortHash};
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// `true` when the short status lists any change at all.
    async fn has_changes(&self) -> AppResult<bool>;
    async fn diff(&self, scope: DiffScope) -> AppResult<Diff>;
    async fn commit(&self, message: &str, scope: DiffScope) -> AppResult<()>;
    async fn head_short_hash(&self) -> AppResult<ShortHash>;
}
