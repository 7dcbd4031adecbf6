//! Console shell around `game-core`.
//!
//! The library half holds everything the `dungeon` binary wires together,
//! so sessions can be driven from tests with scripted input.
pub mod config;
pub mod logging;
pub mod prompt;
pub mod session;

pub use config::ClientConfig;
pub use logging::setup_logging;
pub use prompt::{Prompter, StdioPrompter};
pub use session::{PlayThroughOutcome, Session, SessionError, player_summary};
