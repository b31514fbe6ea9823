use std::fs;
use std::future::Future;
use std::io::Write;

use tracing::{debug, warn};

use crate::context::AppContext;
use crate::domain::change::{Diff, DiffScope, ShortHash};
use crate::domain::keypress::Decision;
use crate::domain::message::{CommitMessage, MessageFormat};
use crate::error::{AppError, AppResult};
use crate::services::{EditorService, VersionControlService};

#[derive(Debug, Clone, Copy)]
pub struct CommitRequest {
    pub scope: DiffScope,
    pub format: MessageFormat,
    pub commit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitWorkflowOutcome {
    NothingToCommit,
    /// Printed only; `--commit` was not given.
    Proposed(CommitMessage),
    Committed {
        message: CommitMessage,
        hash: Option<ShortHash>,
    },
    Aborted,
}

impl CommitWorkflowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            CommitWorkflowOutcome::Proposed(_) | CommitWorkflowOutcome::Committed { .. }
        )
    }
}

pub async fn generate_and_commit(
    ctx: &AppContext,
    request: CommitRequest,
) -> AppResult<CommitWorkflowOutcome> {
    let diff = until_interrupted(ctx, collect_diff(ctx.version_control.as_ref(), request.scope))
        .await?;
    if diff.is_empty() {
        return Ok(CommitWorkflowOutcome::NothingToCommit);
    }
    debug!(
        scope = ?request.scope,
        format = ?request.format,
        model = %ctx.config.model,
        diff_bytes = diff.text.len(),
        "generating commit message"
    );

    let raw = until_interrupted(
        ctx,
        ctx.language_model
            .generate_commit_message(&diff.text, request.format),
    )
    .await??;
    let message = CommitMessage::from_generated(&raw, request.format)?;

    ctx.terminal.propose(message.as_str())?;
    if !request.commit {
        return Ok(CommitWorkflowOutcome::Proposed(message));
    }

    confirm_and_commit(ctx, message, request.scope).await
}

/// Empty when the tree is clean or any git call fails.
pub async fn collect_diff(version_control: &dyn VersionControlService, scope: DiffScope) -> Diff {
    match version_control.has_changes().await {
        Ok(true) => {}
        Ok(false) => return Diff::empty(),
        Err(err) => {
            debug!(%err, "status query failed, treating as no diff");
            return Diff::empty();
        }
    }

    version_control.diff(scope).await.unwrap_or_else(|err| {
        debug!(%err, "diff query failed, treating as no diff");
        Diff::empty()
    })
}

async fn until_interrupted<T>(ctx: &AppContext, work: impl Future<Output = T>) -> AppResult<T> {
    tokio::select! {
        biased;
        result = work => Ok(result),
        () = ctx.interrupt.interrupted() => Err(AppError::Interrupted),
    }
}

async fn confirm_and_commit(
    ctx: &AppContext,
    proposed: CommitMessage,
    scope: DiffScope,
) -> AppResult<CommitWorkflowOutcome> {
    let decision = ctx.terminal.read_keypress().await?.decision();
    if decision == Decision::Interrupt {
        return Err(AppError::Interrupted);
    }
    ctx.terminal.end_line()?;

    let message = match decision {
        Decision::Accept => proposed,
        Decision::Edit => edit_message(ctx.editor.as_ref(), proposed).await?,
        Decision::Abort | Decision::Interrupt => return Ok(CommitWorkflowOutcome::Aborted),
    };

    // Ctrl-C while the editor ran reaches us too; never commit after it.
    if ctx.interrupt.is_interrupted() {
        return Err(AppError::Interrupted);
    }

    ctx.version_control.commit(message.as_str(), scope).await?;

    let hash = match ctx.version_control.head_short_hash().await {
        Ok(hash) => {
            ctx.terminal.report_commit(&hash)?;
            Some(hash)
        }
        Err(err) => {
            warn!(%err, "commit created but its hash could not be read");
            None
        }
    };

    Ok(CommitWorkflowOutcome::Committed { message, hash })
}

/// Round-trips `proposed` through the editor; the temp file is removed on return.
pub async fn edit_message(
    editor: &dyn EditorService,
    proposed: CommitMessage,
) -> AppResult<CommitMessage> {
    let mut file = tempfile::Builder::new()
        .prefix("gcai-")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(proposed.as_str().as_bytes())?;
    file.flush()?;
    file.as_file().sync_all()?;

    let edited = match editor.edit(file.path()).await {
        // Editors may replace the file, so read by path rather than through the handle.
        Ok(()) => match fs::read_to_string(file.path()) {
            Ok(text) => CommitMessage::from_edit(&text),
            Err(err) => {
                warn!(%err, "could not read edited message, keeping the original");
                None
            }
        },
        Err(err) => {
            warn!(%err, "editor failed, keeping the original message");
            None
        }
    };

    Ok(edited.unwrap_or(proposed))
}
