pub mod change;
pub mod keypress;
pub mod message;
