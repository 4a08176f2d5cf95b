//! CLI module for the `moodlens` binary
//!
//! Argument parsing lives in `commands`, one handler per subcommand in
//! `handlers`, and all terminal formatting in `output`.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::*;
pub use handlers::*;
pub use output::*;
