/// Command-line interface and sheet orchestration
pub mod cli;
/// Default geometry and sheet constants
pub mod configuration;
/// Advisory conditions reported next to results
pub mod diagnostics;
/// Error types and result alias
pub mod error;
/// Sheet export to PNG and JPEG
pub mod image;
/// Progress display during generation
pub mod progress;
