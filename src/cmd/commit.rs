use crate::context::AppContext;
use crate::domain::change::DiffScope;
use crate::domain::message::MessageFormat;
use crate::error::AppResult;
use crate::workflow::commit::{CommitRequest, CommitWorkflowOutcome, generate_and_commit};

#[derive(Debug, Clone)]
pub struct CommitCommandArgs {
    pub all: bool,
    pub commit: bool,
    pub conventional: bool,
}

impl From<CommitCommandArgs> for CommitRequest {
    fn from(args: CommitCommandArgs) -> Self {
        CommitRequest {
            scope: DiffScope::from_all_flag(args.all),
            format: MessageFormat::from_conventional_flag(args.conventional),
            commit: args.commit,
        }
    }
}

pub async fn run(ctx: &AppContext, args: CommitCommandArgs) -> AppResult<CommitWorkflowOutcome> {
    generate_and_commit(ctx, args.into()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_flags_to_request() {
        let request = CommitRequest::from(CommitCommandArgs {
            all: true,
            commit: false,
            conventional: true,
        });
        assert_eq!(request.scope, DiffScope::All);
        assert_eq!(request.format, MessageFormat::Conventional);
        assert!(!request.commit);

        let request = CommitRequest::from(CommitCommandArgs {
            all: false,
            commit: true,
            conventional: false,
        });
        assert_eq!(request.scope, DiffScope::Staged);
        assert_eq!(request.format, MessageFormat::FreeForm);
        assert!(request.commit);
    }
}
