/// Command-line parsing and fill sessions
pub mod cli;
/// Grid defaults and runtime constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG rendering and loading
pub mod image;
/// Initial grid coloring
pub mod initializer;
/// Pointer position to cell mapping
pub mod pointer;
/// Terminal progress display
pub mod progress;
/// Animated fill sequences
pub mod visualization;
