pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, FullArgs, ShuffleArgs, SplitArgs, usage_exit_code};
pub use handlers::run_command;
