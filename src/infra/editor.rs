use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::EditorCommand;
use crate::error::{AppError, AppResult};
use crate::services::EditorService;

pub struct ExternalEditor {
    command: EditorCommand,
}

impl ExternalEditor {
    pub fn new(command: EditorCommand) -> Self {
        Self { command }
    }
}

#[async_trait]
impl EditorService for ExternalEditor {
    async fn edit(&self, path: &Path) -> AppResult<()> {
        debug!(editor = %self.command.program, path = %path.display(), "launching editor");
        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(path)
            .status()
            .await
            .map_err(|err| {
                AppError::Editor(format!("failed to launch {}: {err}", self.command.program))
            })?;

        if !status.success() {
            return Err(AppError::Editor(format!(
                "{} exited with {status}",
                self.command.program
            )));
        }
        Ok(())
    }
}
