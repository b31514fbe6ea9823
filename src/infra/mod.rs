pub mod editor;
pub mod git;
pub mod llm;
pub mod signal;
pub mod terminal;
