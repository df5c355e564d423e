//! Configuration and constants for the parser and CLI.

use crate::parser::schema::SimType;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Section header markers, in priority order.
///
/// A line containing more than one marker opens the section of the first entry.
pub const SECTION_MARKERS: &[(&str, SimType)] = &[
    ("TRANSIENT ANALYSIS", SimType::Transient),
    ("DC TRANSFER CURVES", SimType::DcSweep),
    ("AC ANALYSIS", SimType::Ac),
];

/// Prefix of a legend alias declaration
pub const LEGEND_PREFIX: &str = "Print_Legend";

/// Token marking the line right after a column-header row
pub const HEADER_MARKER_TOKEN: &str = "X";

/// Token marking the end of a data table
pub const CLOSING_MARKER_TOKEN: &str = "Y";

/// JSON Schema for the output document, embedded at build time
pub const DEFAULT_SCHEMA: &str = include_str!("../../schema/simulation_run.schema.json");

/// What the parser does once a plot has been sealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionMode {
    /// The section is fully consumed; wait for the next section marker
    #[default]
    SinglePlot,
    /// Stay inside the section and wait for another header row
    MultiPlot,
}

/// Runtime options for a parsing pass
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub section_mode: SectionMode,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set section mode
    pub fn with_section_mode(mut self, mode: SectionMode) -> Self {
        self.section_mode = mode;
        self
    }
}
