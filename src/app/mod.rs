pub mod field;
pub mod prompt;
pub mod render;
pub mod session;
