//parser/mod.rs
mod parsers;

use std::fs;
use std::path::Path;
use itertools::Itertools;
use log::{debug, warn};

use crate::{
    FieldError, FileSummary, GateWeights, RecordTable, ReportError, Scope, SectionRecord,
    UnknownGate, GATE_PREFIX, HEADER_MARKER, TOPOLOGICAL_MARKER, TRANSISTORS_MARKER,
};

pub use self::parsers::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind<'a> {
    /// `=== <name> ...`
    Header(&'a str),
    Transistors(i64),
    Depth(i64),
    Gate { name: &'a str, count: f64 },
    Irrelevant,
}

/// Classifies a report line by its token count and marker tokens.
pub fn classify_line<'a>(tokens: &[&'a str]) -> Result<LineKind<'a>, FieldError> {
    let kind = match *tokens {
        [HEADER_MARKER, name, _] => LineKind::Header(name),
        [_, _, _, TRANSISTORS_MARKER, count] => LineKind::Transistors(parse_transistor_count(count)?),
        [_, TOPOLOGICAL_MARKER, _, _, _, depth] => LineKind::Depth(parse_depth_token(depth)?),
        [name, count] if name.starts_with(GATE_PREFIX) => LineKind::Gate {
            name,
            count: parse_gate_count(count)?,
        },
        _ => LineKind::Irrelevant,
    };
    Ok(kind)
}

/// Single-pass report scanner holding the section record table.
pub struct Summarizer {
    weights: GateWeights,
    scope: Scope,
    records: RecordTable,
}

impl Summarizer {
    pub fn new(weights: GateWeights, scope: Scope) -> Self {
        Self {
            weights,
            scope,
            records: RecordTable::new(),
        }
    }

    pub fn records(&self) -> &RecordTable {
        &self.records
    }

    pub fn scan_file<P: AsRef<Path>>(&mut self, path: P) -> Result<FileSummary, ReportError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.scan_str(&path.display().to_string(), &text)
    }

    /// Scans one report. `report` names it in diagnostics and in the summary.
    pub fn scan_str(&mut self, report: &str, text: &str) -> Result<FileSummary, ReportError> {
        if self.scope == Scope::PerFile {
            self.records.clear();
        }

        let mut current: Option<&str> = None;
        let mut running = SectionRecord::default();
        let mut unknown_gates = Vec::new();

        for (idx, line) in report_lines(text).enumerate() {
            let line_no = idx + 1;
            let tokens = line.split_whitespace().collect_vec();

            let kind = classify_line(&tokens).map_err(|kind| ReportError::Field {
                report: report.to_string(),
                line: line_no,
                kind,
            })?;

            match kind {
                LineKind::Header(name) => {
                    debug!("{}:{} section {}", report, line_no, name);
                    current = Some(name);
                    running = SectionRecord::default();
                }
                LineKind::Transistors(count) => running.transistors = count,
                LineKind::Depth(depth) => running.depth = depth,
                LineKind::Gate { name, count } => match self.weights.weight(name) {
                    Some(weight) => running.gate_equivalent += count * weight,
                    None => {
                        let diag = UnknownGate {
                            report: report.to_string(),
                            line: line_no,
                            gate: name.to_string(),
                        };
                        warn!("{}", diag);
                        unknown_gates.push(diag);
                    }
                },
                LineKind::Irrelevant => {}
            }

            // Every line rewrites the snapshot of the current section
            if let Some(name) = current {
                match self.records.get_mut(name) {
                    Some(record) => *record = running,
                    None => {
                        self.records.insert(name.to_string(), running);
                    }
                }
            }
        }

        debug!(
            "{}: {} section(s), {} unknown gate line(s)",
            report,
            self.records.len(),
            unknown_gates.len()
        );

        Ok(FileSummary {
            report: report.to_string(),
            sections: self.records.clone(),
            unknown_gates,
        })
    }
}
