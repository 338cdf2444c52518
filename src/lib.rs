//lib.rs
pub mod parser;
pub mod generator;

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::info;
use thiserror::Error;

pub use parser::{classify_line, LineKind, Summarizer};

// Mockup ASIC cell library: relative area of each Yosys internal primitive
pub const DEFAULT_GATE_WEIGHTS: [(&str, f64); 12] = [
    ("$_NOT_", 0.5),
    ("$_NAND_", 1.0),
    ("$_NOR_", 1.0),
    ("$_XOR_", 3.0),
    ("$_XNOR_", 3.0),
    ("$_DFF_P_", 4.0),
    ("$_AOI3_", 1.5),
    ("$_OAI3_", 1.5),
    ("$_AOI4_", 2.0),
    ("$_OAI4_", 2.0),
    ("$_NMUX_", 2.5),
    ("$_MUX_", 3.0),
];

pub const HEADER_MARKER: &str = "===";        // `=== <module> ===` section boundary
pub const TRANSISTORS_MARKER: &str = "transistors:";
pub const TOPOLOGICAL_MARKER: &str = "topological";
pub const GATE_PREFIX: &str = "$_";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("gate {gate} has non-positive weight {weight}")]
    NonPositive { gate: String, weight: f64 },
}

/// A recognized line whose numeric field could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid transistor count `{0}`")]
    TransistorCount(String),
    #[error("invalid gate count `{0}`")]
    GateCount(String),
    #[error("invalid topological depth token `{0}`")]
    Depth(String),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read report {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{report}:{line}: {kind}")]
    Field {
        report: String,
        line: usize,
        kind: FieldError,
    },
    #[error("failed to write summary")]
    Write(#[from] io::Error),
}

/// Gate-type identifier (`$_NAME_`) to strictly positive weight.
#[derive(Debug, Clone)]
pub struct GateWeights {
    weights: HashMap<String, f64>,
}

impl GateWeights {
    pub fn new<I, S>(entries: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut weights = HashMap::new();
        for (gate, weight) in entries {
            let gate = gate.into();
            // Rejects NaN as well
            if !(weight > 0.0 && weight.is_finite()) {
                return Err(WeightError::NonPositive { gate, weight });
            }
            weights.insert(gate, weight);
        }
        Ok(Self { weights })
    }

    pub fn weight(&self, gate: &str) -> Option<f64> {
        self.weights.get(gate).copied()
    }
}

impl Default for GateWeights {
    fn default() -> Self {
        Self {
            weights: DEFAULT_GATE_WEIGHTS
                .iter()
                .map(|&(gate, weight)| (gate.to_string(), weight))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionRecord {
    pub gate_equivalent: f64,
    pub transistors: i64,
    pub depth: i64,
}

/// Section name to its latest snapshot, in first-seen order.
pub type RecordTable = IndexMap<String, SectionRecord>;

/// Whether the record table survives from one report to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Every report starts from an empty table.
    #[default]
    PerFile,
    /// One table for the whole run; later reports see (and overwrite) earlier sections.
    Run,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGate {
    pub report: String,
    pub line: usize,
    pub gate: String,
}

impl fmt::Display for UnknownGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} unknown gate {}", self.report, self.line, self.gate)
    }
}

#[derive(Debug, Clone)]
pub struct FileSummary {
    pub report: String,
    pub sections: RecordTable,
    pub unknown_gates: Vec<UnknownGate>,
}

/// Scans every report in order, writing each one's summary as soon as it is done.
///
/// The first unreadable report or malformed numeric field aborts the whole run;
/// summaries of the reports before it have already been written.
pub fn summarize_reports<P, W>(paths: &[P], scope: Scope, writer: &mut W) -> Result<usize, ReportError>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut summarizer = Summarizer::new(GateWeights::default(), scope);

    for path in paths {
        let path = path.as_ref();
        info!("Scanning report: {:?}", path);
        generator::write_banner(writer, &path.display().to_string())?;
        writer.flush()?;

        let summary = summarizer.scan_file(path)?;
        generator::write_sections(writer, &summary.sections)?;
        writer.flush()?;
    }

    Ok(paths.len())
}
