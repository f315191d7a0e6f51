//! Game-session plumbing around the board engine.
//!
//! Everything a single interactive game needs besides the board itself:
//! startup configuration parsed from the command line, and the append-only
//! move log used by external tooling to verify a session.

pub mod config;
pub mod move_log;

pub use fifteen_core as core;
pub use fifteen_types as types;

pub use config::{GameConfig, SetupError};
pub use move_log::{MoveLog, LOG_FILE};
