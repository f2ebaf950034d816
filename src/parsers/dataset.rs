use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::DatasetLoadError;
use crate::models::{AnnotationsDocument, DatasetEntry};
use crate::utils::validate_file_size;

/// Read a dataset file and return its entries in file order.
///
/// Accepts either a JSON array of `{emoji, translation}` records or a CLDR
/// annotation document. Consistency rules (uniqueness, ambiguity) are enforced
/// later by the index builder.
///
/// # Errors
///
/// - [`DatasetLoadError::Io`] if the file cannot be opened or read
/// - [`DatasetLoadError::TooLarge`] if the file exceeds the size limit
/// - [`DatasetLoadError::Malformed`] if the JSON is invalid or a record is incomplete
pub fn parse_dataset_file(path: &Path) -> Result<Vec<DatasetEntry>, DatasetLoadError> {
    // Open first, then check size on the handle
    let file = File::open(path)
        .map_err(|source| DatasetLoadError::Io { path: path.to_path_buf(), source })?;
    validate_file_size(&file, path)?;

    let reader = BufReader::new(file);
    let document: Value = serde_json::from_reader(reader)
        .map_err(|source| DatasetLoadError::Malformed { path: path.to_path_buf(), source })?;

    let entries = parse_dataset_value(document, path)?;
    info!("Parsed dataset {}: {} entries", path.display(), entries.len());

    Ok(entries)
}

/// Interpret an already-parsed JSON document as a dataset
pub fn parse_dataset_value(
    document: Value,
    origin: &Path,
) -> Result<Vec<DatasetEntry>, DatasetLoadError> {
    let malformed = |source| DatasetLoadError::Malformed { path: origin.to_path_buf(), source };

    match document {
        Value::Array(_) => serde_json::from_value::<Vec<DatasetEntry>>(document).map_err(malformed),
        other => {
            let annotations: AnnotationsDocument =
                serde_json::from_value(other).map_err(malformed)?;
            let (entries, skipped) = annotations.into_entries();

            if !skipped.is_empty() {
                warn!(
                    "Skipped {} annotation(s) without a tts phrase in {}",
                    skipped.len(),
                    origin.display()
                );
                debug!("Skipped annotations: {}", skipped.join(" "));
            }

            Ok(entries)
        }
    }
}
