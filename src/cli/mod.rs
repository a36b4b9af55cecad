pub mod args;
pub mod context;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbosity, Args, HELP_MESSAGE};
pub use context::ScaffoldContext;
pub use runner::{run, Runner};
