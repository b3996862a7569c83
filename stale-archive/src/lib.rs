pub mod cli;
pub mod upload;

pub use cli::{run, run_with_store, Cli};
