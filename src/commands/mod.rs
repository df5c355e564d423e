//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod utils;

// Re-export main command functions
pub use convert::{
    execute_convert, generate_text_summary, section_mode_from_flag, validate_args, ConvertArgs,
    ConvertOutcome,
};
pub use utils::{display_schema, display_version, validate_document_file};
