use async_trait::async_trait;

#[async_trait]
pub trait InterruptService: Send + Sync {
    /// `true` once the user has asked to cancel; stays set.
    fn is_interrupted(&self) -> bool;
    /// Resolves once the user asks to cancel.
    async fn interrupted(&self);
}
