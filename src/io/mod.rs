//! Room input, textual and image output, and error handling

/// Command-line parsing and per-room orchestration
pub mod cli;
/// Constants shared across the crate
pub mod configuration;
/// Error type and context helpers
pub mod error;
/// PNG and GIF export of layouts
pub mod image;
/// Terminal progress display
pub mod progress;
/// Glyph rendering of grids, layouts and corner counts
pub mod render;
/// Room description parsing
pub mod room;
