//! Header token classification.
//!
//! Turns a column-header row into ordered trace stubs. Each token is first
//! resolved through the section legend, lower-cased, then run through
//! [`CLASSIFICATION_RULES`] top to bottom. The first matching rule fixes the
//! trace name and unit.

use super::legend::LegendTable;
use super::schema::{Trace, Unit};
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

static MNEMONIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\(([^()]+)\)$").expect("static regex must compile")
});

/// A lower-cased header token split into its mnemonic parts when possible
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// `<code>(<name>)`, e.g. `vdb(out)`
    Mnemonic { code: String, name: String },
    /// Anything else, kept whole
    Plain(String),
}

impl HeaderToken {
    pub fn parse(token: &str) -> Self {
        match MNEMONIC_PATTERN.captures(token) {
            Some(caps) => Self::Mnemonic {
                code: caps[1].to_string(),
                name: caps[2].to_string(),
            },
            None => Self::Plain(token.to_string()),
        }
    }

    fn code(&self) -> Option<&str> {
        match self {
            Self::Mnemonic { code, .. } => Some(code.as_str()),
            Self::Plain(_) => None,
        }
    }

    fn plain(&self) -> Option<&str> {
        match self {
            Self::Plain(token) => Some(token.as_str()),
            Self::Mnemonic { .. } => None,
        }
    }
}

/// One entry of the ordered classification table
pub struct ClassificationRule {
    pub label: &'static str,
    pub matches: fn(&HeaderToken) -> bool,
    pub name: fn(&HeaderToken) -> String,
    pub unit: Option<Unit>,
}

fn mnemonic_name(token: &HeaderToken) -> String {
    match token {
        HeaderToken::Mnemonic { name, .. } => name.clone(),
        HeaderToken::Plain(raw) => raw.clone(),
    }
}

fn whole_token(token: &HeaderToken) -> String {
    match token {
        HeaderToken::Mnemonic { code, name } => format!("{}({})", code, name),
        HeaderToken::Plain(raw) => raw.clone(),
    }
}

fn code_ends_with_db(t: &HeaderToken) -> bool {
    t.code().is_some_and(|c| c.ends_with("db"))
}

fn code_ends_with_p(t: &HeaderToken) -> bool {
    t.code().is_some_and(|c| c.ends_with('p'))
}

fn code_starts_with_v(t: &HeaderToken) -> bool {
    t.code().is_some_and(|c| c.starts_with('v'))
}

fn code_starts_with_i(t: &HeaderToken) -> bool {
    t.code().is_some_and(|c| c.starts_with('i'))
}

fn is_mnemonic(t: &HeaderToken) -> bool {
    t.code().is_some()
}

fn is_time(t: &HeaderToken) -> bool {
    t.plain() == Some("time")
}

fn is_hertz(t: &HeaderToken) -> bool {
    t.plain() == Some("hertz")
}

fn always(_: &HeaderToken) -> bool {
    true
}

/// Ordered rule table; evaluation stops at the first match.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        label: "magnitude in decibels",
        matches: code_ends_with_db,
        name: mnemonic_name,
        unit: Some(Unit::Decibel),
    },
    ClassificationRule {
        label: "phase in degrees",
        matches: code_ends_with_p,
        name: mnemonic_name,
        unit: Some(Unit::Degree),
    },
    ClassificationRule {
        label: "voltage",
        matches: code_starts_with_v,
        name: mnemonic_name,
        unit: Some(Unit::Volt),
    },
    ClassificationRule {
        label: "current",
        matches: code_starts_with_i,
        name: mnemonic_name,
        unit: Some(Unit::Ampere),
    },
    ClassificationRule {
        label: "other mnemonic",
        matches: is_mnemonic,
        name: mnemonic_name,
        unit: None,
    },
    ClassificationRule {
        label: "time axis",
        matches: is_time,
        name: whole_token,
        unit: Some(Unit::Second),
    },
    ClassificationRule {
        label: "frequency axis",
        matches: is_hertz,
        name: whole_token,
        unit: Some(Unit::Hertz),
    },
    ClassificationRule {
        label: "unrecognized",
        matches: always,
        name: whole_token,
        unit: None,
    },
];

/// Classify one already-resolved header token into a `(name, unit)` pair
pub fn classify_token(token: &str) -> (String, Option<Unit>) {
    let parsed = HeaderToken::parse(&token.to_lowercase());

    CLASSIFICATION_RULES
        .iter()
        .find(|rule| (rule.matches)(&parsed))
        .map(|rule| {
            trace!("header token `{}` classified as {}", token, rule.label);
            ((rule.name)(&parsed), rule.unit)
        })
        .unwrap_or_else(|| (whole_token(&parsed), None))
}

/// Build empty traces for every token of `header`, in column order
pub fn classify_header(header: &str, legend: &LegendTable) -> Vec<Trace> {
    header
        .split_whitespace()
        .map(|token| {
            let (name, unit) = classify_token(legend.resolve(token));
            Trace::new(name, unit)
        })
        .collect()
}
