//! `.chi` log parsing and schema definitions.
//!
//! This module handles:
//! - Detecting simulation section headers
//! - Resolving `Print_Legend` aliases
//! - Classifying header mnemonics into trace names and units
//! - Accumulating data rows into plots
//! - Defining output schema

pub mod chi;
pub mod classifier;
pub mod legend;
pub mod rows;
pub mod schema;
pub mod section;

// Re-export main types
pub use chi::{parse_chi, parse_chi_with, parse_lines, ChiParser, ParserState};
pub use classifier::{classify_header, classify_token};
pub use legend::LegendTable;
pub use schema::{Plot, SimType, SimulationGroup, SimulationRun, Trace, Unit};
