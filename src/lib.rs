//! chi-to-json
//!
//! Converts ELDO `.chi` circuit-simulation logs into a normalized,
//! schema-validated JSON document.
//!
//! This crate provides the core implementation for the
//! `chi-to-json` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! chi-to-json convert amplifier.chi -o amplifier.json
//! chi-to-json --help
//! ```
//!
//! As a library:
//!
//! ```
//! use chi_to_json::parser::{parse_chi, Unit};
//!
//! let log = "TRANSIENT ANALYSIS\nPrint_Legend 1: V(out)\n1 TIME\nX\n1.0 0.5\nY\n";
//! let run = parse_chi(log).unwrap();
//! let trace = &run.groups[0].plots[0].traces[0];
//! assert_eq!(trace.name, "out");
//! assert_eq!(trace.unit, Some(Unit::Volt));
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
