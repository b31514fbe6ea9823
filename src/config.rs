use std::env;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_API_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_EDITOR: &str = "nvim";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub anthropic_api_key: Option<String>,
    pub anthropic_base_url: String,
    pub model: String,
    pub editor: EditorCommand,
    pub workspace_root: PathBuf,
}

/// Editor program plus any leading arguments, e.g. `code --wait`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl EditorCommand {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let mut parts = raw.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::Configuration("editor command is empty".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl AppConfig {
    pub fn load(workspace_hint: &Path) -> AppResult<Self> {
        Self::from_lookup(workspace_hint, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(workspace_hint: &Path, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let editor = ["GCAI_EDITOR", "VISUAL", "EDITOR"]
            .into_iter()
            .find_map(|key| non_empty(key))
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

        Ok(Self {
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            anthropic_base_url: non_empty("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            model: non_empty("GCAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            editor: EditorCommand::parse(&editor)?,
            workspace_root: workspace_hint.to_path_buf(),
        })
    }
}
