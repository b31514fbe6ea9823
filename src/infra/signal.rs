use std::io;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::warn;

use crate::services::InterruptService;

/// Latches the first Ctrl-C for the rest of the run.
pub struct CtrlC {
    fired: watch::Receiver<bool>,
}

impl CtrlC {
    /// Registers the handler immediately; call once, inside the runtime, before any other work.
    pub fn listen() -> Self {
        let (tx, fired) = watch::channel(false);
        match interrupt_stream() {
            Ok(mut stream) => {
                tokio::spawn(async move {
                    while stream.recv().await.is_some() {
                        tx.send_replace(true);
                    }
                });
            }
            Err(err) => warn!(%err, "unable to listen for Ctrl-C"),
        }
        Self { fired }
    }
}

#[cfg(unix)]
fn interrupt_stream() -> io::Result<tokio::signal::unix::Signal> {
    use tokio::signal::unix::{SignalKind, signal};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn interrupt_stream() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}

#[async_trait]
impl InterruptService for CtrlC {
    fn is_interrupted(&self) -> bool {
        *self.fired.borrow()
    }

    async fn interrupted(&self) {
        let mut fired = self.fired.clone();
        if fired.wait_for(|fired| *fired).await.is_err() {
            // No listener: nothing can ever interrupt.
            std::future::pending::<()>().await;
        }
    }
}
