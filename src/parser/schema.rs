//! Output JSON schema definitions for simulation data.
//!
//! This module defines the structure of JSON documents we write to disk.
//! The matching JSON Schema lives in `schema/simulation_run.schema.json`.

use serde::{Deserialize, Serialize};

/// Simulation analysis type, one per section header kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimType {
    #[serde(rename = "tran", alias = "transient")]
    Transient,
    #[serde(rename = "dc", alias = "dc_sweep")]
    DcSweep,
    #[serde(rename = "ac")]
    Ac,
}

impl SimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transient => "tran",
            Self::DcSweep => "dc",
            Self::Ac => "ac",
        }
    }
}

impl std::fmt::Display for SimType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Physical unit label attached to a trace.
///
/// Units are labels only; no values are ever converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "V")]
    Volt,
    #[serde(rename = "A")]
    Ampere,
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "Hz")]
    Hertz,
    #[serde(rename = "dB")]
    Decibel,
    #[serde(rename = "°")]
    Degree,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Volt => "V",
            Self::Ampere => "A",
            Self::Second => "s",
            Self::Hertz => "Hz",
            Self::Decibel => "dB",
            Self::Degree => "°",
        }
    }
}

/// One named numeric column of a plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Node or element name (e.g. `out`, `r1.a`, `time`)
    pub name: String,

    /// Unit label; `None` when the header did not identify one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,

    /// Samples in row order
    #[serde(default)]
    pub data: Vec<f64>,
}

impl Trace {
    /// Create a trace with no samples yet
    pub fn new(name: impl Into<String>, unit: Option<Unit>) -> Self {
        Self {
            name: name.into(),
            unit,
            data: Vec::new(),
        }
    }
}

/// A table of traces sharing one row index.
///
/// Serialized as a bare array of traces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plot {
    pub traces: Vec<Trace>,
}

impl Plot {
    pub fn new(traces: Vec<Trace>) -> Self {
        Self { traces }
    }

    /// Number of rows, taken from the first trace
    pub fn row_count(&self) -> usize {
        self.traces.first().map_or(0, |t| t.data.len())
    }

    /// True when every trace has the same number of samples
    pub fn is_aligned(&self) -> bool {
        let rows = self.row_count();
        self.traces.iter().all(|t| t.data.len() == rows)
    }
}

/// All plots of one simulation type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationGroup {
    pub sim_type: SimType,
    pub plots: Vec<Plot>,
}

impl SimulationGroup {
    pub fn new(sim_type: SimType) -> Self {
        Self {
            sim_type,
            plots: Vec::new(),
        }
    }
}

/// Top-level document: groups in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationRun {
    pub groups: Vec<SimulationGroup>,
}

impl SimulationRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the group for `sim_type`, creating it at the end if absent
    pub fn upsert_group(&mut self, sim_type: SimType) -> usize {
        if let Some(index) = self.groups.iter().position(|g| g.sim_type == sim_type) {
            return index;
        }
        self.groups.push(SimulationGroup::new(sim_type));
        self.groups.len() - 1
    }

    pub fn plot_count(&self) -> usize {
        self.groups.iter().map(|g| g.plots.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
