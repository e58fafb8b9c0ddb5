//! Logger setup shared by the binaries.
//!
//! Filtering follows `RUST_LOG` (default `warn`). Setting `CGE_LOG_FILE` sends
//! records to that file instead of stderr, which keeps them off the game screen.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

pub const ENV_LOG_FILE: &str = "CGE_LOG_FILE";

pub fn init_logging() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    let path = std::env::var(ENV_LOG_FILE)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(path) = path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
