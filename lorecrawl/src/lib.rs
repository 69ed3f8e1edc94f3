// Include the binary's modules so integration tests can reach them
#[path = "commands.rs"]
pub mod commands;
#[path = "handlers.rs"]
pub mod handlers;

pub use commands::command_argument_builder;
pub use handlers::{handle_scan, resolve_output_path};
