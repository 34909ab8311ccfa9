//! Per-playout segment boundaries over the flat row stream.

use crate::trace::row::TraceRow;
use crate::{Result, TraceSgfError};

/// Row range of one playout within the trace.
#[derive(Debug, Clone, Copy)]
pub struct PlayoutSegment {
    /// First row index at which this playout number appears (start of its
    /// explore phase).
    pub first_row: usize,
    /// Last row index at which this playout number appears (end of its
    /// update phase).
    pub last_row: usize,
}

/// Locates each playout's rows before reconstruction begins.
///
/// The tree builder scans a playout's update rows backward from
/// `last_row` while advancing an explore cursor forward from `first_row`,
/// so both boundaries must be known up front.
#[derive(Debug)]
pub struct TraceIndex {
    // segments[i] holds playout i + 1
    segments: Vec<PlayoutSegment>,
}

impl TraceIndex {
    /// Builds the index in one pass over the rows.
    ///
    /// `requested_max == 0` means all playouts present in the trace;
    /// otherwise the count is clamped to what the trace actually holds.
    /// Every playout number in `1..=count` must appear in the stream.
    pub fn build(rows: &[TraceRow], requested_max: u32) -> Result<Self> {
        let max_present = rows.iter().map(|r| r.playout).max().unwrap_or(0);
        let count = if requested_max > 0 {
            max_present.min(requested_max)
        } else {
            max_present
        };

        let mut first: Vec<Option<usize>> = vec![None; count as usize];
        let mut last: Vec<Option<usize>> = vec![None; count as usize];
        for (i, row) in rows.iter().enumerate() {
            if row.playout >= 1 && row.playout <= count {
                let slot = (row.playout - 1) as usize;
                if first[slot].is_none() {
                    first[slot] = Some(i);
                }
                last[slot] = Some(i);
            }
        }

        let mut segments = Vec::with_capacity(count as usize);
        for (slot, (first, last)) in first.into_iter().zip(last).enumerate() {
            match (first, last) {
                (Some(first_row), Some(last_row)) => {
                    segments.push(PlayoutSegment {
                        first_row,
                        last_row,
                    });
                }
                _ => {
                    return Err(TraceSgfError::MalformedTrace(format!(
                        "playout {} does not appear in the trace",
                        slot + 1
                    )))
                }
            }
        }
        Ok(TraceIndex { segments })
    }

    /// Number of playouts that will be merged into the tree.
    pub fn playout_count(&self) -> u32 {
        self.segments.len() as u32
    }

    /// Segment of the given 1-based playout number.
    pub fn segment(&self, playout: u32) -> PlayoutSegment {
        self.segments[(playout - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::row::Operation;
    use assert_matches::assert_matches;

    fn row(operation: Operation, playout: u32) -> TraceRow {
        TraceRow {
            operation,
            playout,
            mv: "pass".to_string(),
            policy: None,
            value: 0.0,
            lcb: 0.0,
        }
    }

    #[test]
    fn test_finds_segment_boundaries() {
        let rows = vec![
            row(Operation::Explore, 1),
            row(Operation::Update, 1),
            row(Operation::Explore, 2),
            row(Operation::Update, 2),
            row(Operation::Update, 2),
        ];
        let index = TraceIndex::build(&rows, 0).unwrap();
        assert_eq!(index.playout_count(), 2);
        assert_eq!(index.segment(1).first_row, 0);
        assert_eq!(index.segment(1).last_row, 1);
        assert_eq!(index.segment(2).first_row, 2);
        assert_eq!(index.segment(2).last_row, 4);
    }

    #[test]
    fn test_clamps_to_requested_max() {
        let rows = vec![
            row(Operation::Update, 1),
            row(Operation::Update, 2),
            row(Operation::Update, 3),
        ];
        assert_eq!(TraceIndex::build(&rows, 2).unwrap().playout_count(), 2);
        assert_eq!(TraceIndex::build(&rows, 10).unwrap().playout_count(), 3);
        assert_eq!(TraceIndex::build(&rows, 0).unwrap().playout_count(), 3);
    }

    #[test]
    fn test_missing_playout_is_fatal() {
        let rows = vec![row(Operation::Update, 1), row(Operation::Update, 3)];
        assert_matches!(
            TraceIndex::build(&rows, 0),
            Err(TraceSgfError::MalformedTrace(_))
        );
    }
}
