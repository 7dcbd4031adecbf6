//! Dungeon game client binary.
//!
//! # Examples
//!
//! ```bash
//! # Reproducible session with custom tables
//! DUNGEON_SEED=7 DUNGEON_TABLES=data/tables.ron cargo run -p dungeon-client
//! ```

use anyhow::Result;
use dungeon_client::{ClientConfig, Session, SessionError, StdioPrompter, setup_logging};
use game_core::PcgRng;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    setup_logging(&config.session_id, config.log_dir.as_deref())?;

    // 3. Load content
    let game_config = config.load_game_config()?;
    let tables = config.load_tables()?;

    let seed = config.seed_or_random();
    tracing::info!("Starting Dungeon client");
    tracing::info!("Seed: {}", seed);
    tracing::info!("Win streak target: {}", game_config.win_streak_target);

    // 4. Run the session on stdin/stdout
    let mut session = Session::new(
        StdioPrompter::stdio(),
        PcgRng::new(seed),
        &tables,
        &game_config,
    );

    match session.run() {
        Ok(outcomes) => {
            tracing::info!("Session ended after {} play-through(s)", outcomes.len());
        }
        Err(SessionError::InputClosed) => {
            tracing::info!("Input closed, exiting");
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "Session failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
