use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable naming the dataset file
pub const DATASET_ENV_VAR: &str = "EMOJI_TRANSLATOR_DATASET";

const APP_DIR: &str = "emoji-translator";
const DATASET_FILENAME: &str = "emoji_tts.json";

/// Get the default dataset location (`<data dir>/emoji-translator/emoji_tts.json`)
pub fn default_dataset_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(data_dir.join(APP_DIR).join(DATASET_FILENAME))
}

/// Resolve the dataset path: explicit path, then `EMOJI_TRANSLATOR_DATASET`,
/// then the platform default
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match env::var(DATASET_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => Ok(PathBuf::from(value)),
        _ => default_dataset_path(),
    }
}
