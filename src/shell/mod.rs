pub mod format;
pub mod repl;
pub mod validate;
