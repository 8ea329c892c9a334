/// Command-line parsing and request orchestration
pub mod cli;
/// Limits, defaults and rendering constants
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// JSON request and report messages
pub mod export;
/// Raster rendering and PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Terminal progress bars
pub mod progress;
/// Plain-text wall rendering
pub mod text;
/// Animated GIF export
pub mod visualization;
