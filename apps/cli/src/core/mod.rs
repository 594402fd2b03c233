pub mod context;
pub mod error;

pub use context::CliContext;
pub use error::CliError;
