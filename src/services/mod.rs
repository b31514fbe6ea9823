pub mod editor;
pub mod interrupt;
pub mod language_model;
pub mod terminal;
pub mod version_control;

pub use editor::EditorService;
pub use interrupt::InterruptService;
pub use language_model::LanguageModelService;
pub use terminal::TerminalService;
pub use version_control::VersionControlService;
