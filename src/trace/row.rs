//! Playout trace rows.
//!
//! A trace is a CSV file with one row per search step:
//! `operation,playout,move,policy,value,lcb`. `explore` rows record the
//! policy prior considered while descending; `update` rows record the
//! backpropagated evaluation for each node on the playout's path, leaf
//! first and root (`move == "pass"`) last.

use std::path::Path;

use serde::Deserialize;

use crate::{Result, TraceSgfError};

/// What a trace row records: a descent step or a backpropagation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Explore,
    Update,
}

/// One row of the playout trace.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceRow {
    pub operation: Operation,

    /// Playout number, 1-based and non-decreasing across the file.
    pub playout: u32,

    /// Coordinate text such as `F1`, or the literal `pass` for rows that
    /// refer to the playout's current node rather than a move.
    #[serde(rename = "move")]
    pub mv: String,

    /// Policy prior; only meaningful on explore rows and may be empty.
    pub policy: Option<f64>,

    pub value: f64,
    pub lcb: f64,
}

/// Reads the whole trace file into memory.
///
/// The reconstruction needs random access to row positions (a backward and
/// a forward cursor per playout), so the trace is not streamed.
pub fn read_trace(path: &Path) -> Result<Vec<TraceRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let row: TraceRow = record
            .map_err(|e| TraceSgfError::MalformedTrace(format!("row {}: {}", i + 1, e)))?;
        if row.playout == 0 {
            return Err(TraceSgfError::MalformedTrace(format!(
                "row {}: playout numbers start at 1",
                i + 1
            )));
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(TraceSgfError::MalformedTrace(
            "trace contains no rows".to_string(),
        ));
    }
    Ok(rows)
}
