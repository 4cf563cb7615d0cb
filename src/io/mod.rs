/// Command-line interface and batch processing
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// SVG, PNG and JSON file output
pub mod export;
/// Batch progress display
pub mod progress;
