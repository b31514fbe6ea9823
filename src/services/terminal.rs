use async_trait::async_trait;

use crate::domain::change::ShortHash;
use crate::domain::keypress::Keypress;
use crate::error::AppResult;

#[async_trait]
pub trait TerminalService: Send + Sync {
    /// Prints the message with no trailing newline.
    fn propose(&self, message: &str) -> AppResult<()>;
    /// Reads one key without echo or line buffering.
    async fn read_keypress(&self) -> AppResult<Keypress>;
    fn end_line(&self) -> AppResult<()>;
    fn report_commit(&self, hash: &ShortHash) -> AppResult<()>;
}
