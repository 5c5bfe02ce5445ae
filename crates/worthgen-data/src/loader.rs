//! Input loading pipeline: finds data files, deserializes them, and resolves
//! them into engine types.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and the
//! directory-level [`load_inputs`] entry point.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use worthgen_core::item::ItemTable;
use worthgen_core::worth::BasePrices;

use crate::schema::{
    resolve_base_prices, resolve_item_table, BasePricesData, GeneratorConfigData, ItemTableData,
};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading input data.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name (without
/// extension).
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let extensions = ["ron", "toml", "json"];
    let mut found: Option<PathBuf> = None;

    for ext in &extensions {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(ref existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing.clone(),
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but returns an error if no file is found.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Read a file and deserialize it according to its format (detected from the
/// extension).
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
        Format::Toml => toml::from_str(&content).map_err(|e| DataLoadError::Parse {
            file: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

// ===========================================================================
// Directory-level loading
// ===========================================================================

/// Everything the generator needs, loaded from one data directory.
#[derive(Debug)]
pub struct GenerationInputs {
    pub items: ItemTable,
    pub base_prices: BasePrices,
    pub config: GeneratorConfigData,
}

/// Load the generator inputs from a directory: `items.*` and
/// `base_prices.*` are required; `config.*` is optional and defaults.
pub fn load_inputs(dir: &Path) -> Result<GenerationInputs, DataLoadError> {
    let items_path = require_data_file(dir, "items")?;
    let items_data: ItemTableData = deserialize_file(&items_path)?;
    tracing::debug!(file = %items_path.display(), "loaded item table");

    let prices_path = require_data_file(dir, "base_prices")?;
    let prices_data: BasePricesData = deserialize_file(&prices_path)?;
    tracing::debug!(file = %prices_path.display(), "loaded base prices");

    let config = match find_data_file(dir, "config")? {
        Some(path) => deserialize_file(&path)?,
        None => GeneratorConfigData::default(),
    };

    Ok(GenerationInputs {
        items: resolve_item_table(items_data),
        base_prices: resolve_base_prices(prices_data),
        config,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
