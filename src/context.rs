use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{
    EditorService, InterruptService, LanguageModelService, TerminalService, VersionControlService,
};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub language_model: Arc<dyn LanguageModelService>,
    pub terminal: Arc<dyn TerminalService>,
    pub editor: Arc<dyn EditorService>,
    pub interrupt: Arc<dyn InterruptService>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        language_model: Arc<dyn LanguageModelService>,
        terminal: Arc<dyn TerminalService>,
        editor: Arc<dyn EditorService>,
        interrupt: Arc<dyn InterruptService>,
    ) -> Self {
        Self {
            config,
            version_control,
            language_model,
            terminal,
            editor,
            interrupt,
        }
    }
}
