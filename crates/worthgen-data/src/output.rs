//! Worth document output.
//!
//! Serializes the final worth mapping as `{ worth: { item: value } }` in the
//! format implied by the output path, prepending the descriptive header as
//! comment lines where the format allows them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use worthgen_core::worth::WorthTable;

use crate::loader::{detect_format, Format};

/// Default descriptive header prepended to generated worth files.
pub const DEFAULT_HEADER: &str = "\
Worth values generated from the game's recipe data.
Base prices are hand-assigned; every other value is derived by propagating
ingredient costs through the recipe graph until no further item can be
priced. Edit the base price list, not this file.";

/// Errors from rendering or writing the output document.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The output path has an extension we can't serialize to.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A serialization error occurred.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct WorthDocument {
    worth: BTreeMap<String, f64>,
}

/// Rewrite an id to the consuming plugin's convention: separators stripped,
/// lowercase.
pub fn flat_item_name(id: &str) -> String {
    id.replace('_', "").to_lowercase()
}

/// Render the worth table as a document in the given format.
///
/// The header goes in as `#` comments for TOML and `//` comments for RON;
/// JSON has no comment syntax, so the header is dropped there.
pub fn render_worth(
    worth: &WorthTable,
    format: Format,
    flat_names: bool,
    header: &str,
) -> Result<String, OutputError> {
    let document = WorthDocument {
        worth: worth
            .iter()
            .map(|(id, value)| {
                let name = if flat_names {
                    flat_item_name(id.as_str())
                } else {
                    id.to_string()
                };
                (name, value)
            })
            .collect(),
    };

    let mut out = String::new();
    let comment_prefix = match format {
        Format::Toml => Some("#"),
        Format::Ron => Some("//"),
        Format::Json => None,
    };
    if let Some(prefix) = comment_prefix {
        for line in header.lines() {
            out.push_str(prefix);
            out.push(' ');
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    } else if !header.is_empty() {
        tracing::debug!("output format has no comment syntax; header dropped");
    }

    let body = match format {
        Format::Toml => {
            toml::to_string_pretty(&document).map_err(|e| OutputError::Serialize(e.to_string()))?
        }
        Format::Ron => {
            ron::ser::to_string_pretty(&document, ron::ser::PrettyConfig::default())
                .map_err(|e| OutputError::Serialize(e.to_string()))?
        }
        Format::Json => serde_json::to_string_pretty(&document)
            .map_err(|e| OutputError::Serialize(e.to_string()))?,
    };
    out.push_str(&body);
    if !out.ends_with('\n') {
        out.push('\n');
    }

    Ok(out)
}

/// Serialize and write the final worth mapping to `path`, choosing the format
/// from the extension.
pub fn write_worth_file(
    path: &Path,
    worth: &WorthTable,
    flat_names: bool,
    header: &str,
) -> Result<(), OutputError> {
    let format = detect_format(path).map_err(|_| OutputError::UnsupportedFormat {
        file: path.to_path_buf(),
    })?;
    let rendered = render_worth(worth, format, flat_names, header)?;
    std::fs::write(path, rendered)?;
    tracing::info!(file = %path.display(), entries = worth.len(), "wrote worth file");
    Ok(())
}

// ===========================================================================
// Tests
// ===========================================================================
