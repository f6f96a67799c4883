//! Background track loading
//!
//! Music is decoration: a missing or unreadable file is logged and the game
//! carries on in silence.

use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{info, warn};

/// Default location of the background track, relative to the working directory
pub const DEFAULT_TRACK: &str = "assets/background_music.wav";

fn read_track(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read background track {}", path.display()))?;
    if bytes.is_empty() {
        bail!("Background track {} is empty", path.display());
    }
    Ok(bytes)
}

/// Load the background track, or `None` with a warning if it can't be read
pub fn load_track(path: &Path) -> Option<Vec<u8>> {
    match read_track(path) {
        Ok(bytes) => {
            info!("Loaded background track {} ({} bytes)", path.display(), bytes.len());
            Some(bytes)
        }
        Err(e) => {
            warn!("Playing without music: {:#}", e);
            None
        }
    }
}
