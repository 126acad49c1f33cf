//! Console protocol
//!
//! Line-oriented command parsing, dispatch, and numeric responses.

pub mod commands;
pub mod handlers;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus, parse_command};
pub use handlers::handle_command;
