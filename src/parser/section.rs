//! Section header detection.

use super::schema::SimType;
use crate::utils::config::SECTION_MARKERS;

/// Return the simulation type opened by `line`, if any.
///
/// Markers are checked in `SECTION_MARKERS` order so the first one wins.
pub fn detect_section(line: &str) -> Option<SimType> {
    detect_section_with(line, SECTION_MARKERS)
}

/// Same as [`detect_section`] with an explicit marker table
fn detect_section_with(line: &str, markers: &[(&str, SimType)]) -> Option<SimType> {
    markers
        .iter()
        .find(|(marker, _)| line.contains(*marker))
        .map(|(_, sim_type)| *sim_type)
}
