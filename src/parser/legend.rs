//! `Print_Legend` alias declarations.
//!
//! ELDO prints long column names once as a legend and then refers to them
//! by number in the table header:
//!
//! ```text
//! Print_Legend 1: V(OUT)
//! Print_Legend 2: I(R1.A)
//! ```

use crate::utils::config::LEGEND_PREFIX;
use crate::utils::error::ParseError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static LEGEND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Print_Legend\s+(\d+):\s+(\w+\(\w+(?:\.\w+)?\))\s*$")
        .expect("static regex must compile")
});

/// Short-code to mnemonic aliases declared in the current section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegendTable {
    entries: HashMap<String, String>,
}

impl LegendTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an alias, replacing any earlier one for the same key
    pub fn insert(&mut self, key: impl Into<String>, mnemonic: impl Into<String>) {
        self.entries.insert(key.into(), mnemonic.into());
    }

    /// Mnemonic for `token`, or `token` itself when it is not an alias
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.entries.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// True when `line` opens with the `Print_Legend` token (well-formed or not)
pub fn is_legend_line(line: &str) -> bool {
    line.strip_prefix(LEGEND_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Parse `Print_Legend <n>: <mnemonic>` into `(n, mnemonic)`
///
/// # Errors
/// * `ParseError::LegendParse` - line does not have the expected shape
pub fn parse_legend_line(line: &str, line_no: usize) -> Result<(String, String), ParseError> {
    let caps = LEGEND_PATTERN
        .captures(line.trim_end())
        .ok_or_else(|| ParseError::LegendParse {
            line: line_no,
            text: line.trim().to_string(),
        })?;

    Ok((caps[1].to_string(), caps[2].to_string()))
}
