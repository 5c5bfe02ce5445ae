//! Data I/O for the worth generator: input loading and worth file output.
//!
//! Inputs are RON, JSON, or TOML files in one data directory: the extracted
//! item/recipe table (`items.*`), the hand-maintained base price list
//! (`base_prices.*`), and an optional generator configuration (`config.*`).
//! The output is a `{ worth: { item: value } }` document with a descriptive
//! comment header where the format supports one.

pub mod loader;
pub mod output;
pub mod schema;

pub use loader::{load_inputs, DataLoadError, Format, GenerationInputs};
pub use output::{write_worth_file, OutputError, DEFAULT_HEADER};
pub use schema::GeneratorConfigData;
