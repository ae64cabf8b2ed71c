//! Listing of available models and data files.

use std::path::Path;

use ms_models::ModelRegistry;

use crate::error::{AppError, AppResult};

/// Extension of data files shown by [`list_data_files`].
pub const DATA_EXTENSION: &str = "txt";

/// Variant names in alphabetical order.
pub fn list_models(registry: &ModelRegistry) -> Vec<String> {
    registry.names().into_iter().map(str::to_string).collect()
}

/// File names of the data files in `dir`, sorted.
pub fn list_data_files(dir: &Path) -> AppResult<Vec<String>> {
    let read_err = |e| AppError::DataDirRead {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(DATA_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
