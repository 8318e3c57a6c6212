//! Shell command execution used by command-backed checks and fixes.

pub mod command;
pub mod platform;

pub use command::{execute, CommandResult};
pub use platform::{is_ci, shell_executable, shell_flag};
