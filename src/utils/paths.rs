use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use crate::errors::DatasetLoadError;

// Maximum dataset file size: 32MB (full CLDR annotation files are a few MB)
const MAX_DATASET_SIZE_BYTES: u64 = 32 * 1024 * 1024;

/// Validates that a dataset file's size is within acceptable limits (32MB)
///
/// Takes an open file handle so the size check and the subsequent read
/// refer to the same file.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 32MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<(), DatasetLoadError> {
    let metadata = file
        .metadata()
        .map_err(|source| DatasetLoadError::Io { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > MAX_DATASET_SIZE_BYTES {
        return Err(DatasetLoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_DATASET_SIZE_BYTES,
        });
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_small_file_passes() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[]").unwrap();
        let handle = File::open(file.path()).unwrap();
        assert!(validate_file_size(&handle, file.path()).is_ok());
    }

    #[test]
    fn test_oversized_file_rejected() {
        let file = NamedTempFile::new().unwrap();
        // Sparse file: sets the length without writing 32MB
        file.as_file().set_len(MAX_DATASET_SIZE_BYTES + 1).unwrap();
        let handle = File::open(file.path()).unwrap();
        let err = validate_file_size(&handle, file.path()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::TooLarge { .. }));
    }

    #[test]
    fn test_tilde_substitution() {
        let path = PathBuf::from("/home/alice/data/emoji_tts.json");
        assert_eq!(
            format_path_with_tilde_internal(&path, Some("/home/alice")),
            "~/data/emoji_tts.json"
        );
    }

    #[test]
    fn test_tilde_outside_home() {
        let path = PathBuf::from("/srv/emoji_tts.json");
        assert_eq!(format_path_with_tilde_internal(&path, Some("/home/alice")), "/srv/emoji_tts.json");
    }
}
