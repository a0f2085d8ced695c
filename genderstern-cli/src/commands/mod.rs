//! CLI command implementations

pub mod process;
pub mod validate;

pub use process::ProcessArgs;
pub use validate::ValidateArgs;
