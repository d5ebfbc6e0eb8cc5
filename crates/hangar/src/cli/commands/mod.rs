//! CLI commands

mod status;
mod submit;

pub use status::StatusCommand;
pub use submit::SubmitCommand;
