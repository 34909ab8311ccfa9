//! # Trace To SGF
//!
//! Reconstructs an MCTS search tree from a flat playout trace (CSV) and
//! overlays it onto an existing SGF game record as variations. Each node in
//! the output carries the policy prior recorded when the node was first
//! explored, one evaluation line per playout that passed through it, and a
//! total visit count.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use trace_to_sgf::pipeline::annotate_game_record;
//!
//! let playouts = annotate_game_record(
//!     Path::new("game.sgf"),
//!     Path::new("trace.csv"),
//!     Path::new("annotated.sgf"),
//!     0, // 0 = all playouts in the trace
//! ).unwrap();
//! ```

use std::path::PathBuf;

/// Board coordinate parsing and rendering
pub mod coords;

/// Logging setup
pub mod logging;

/// End-to-end annotation pipeline
pub mod pipeline;

/// SGF game records: parsing, mutation, serialization
pub mod sgf;

/// Playout trace loading and indexing
pub mod trace;

/// Search tree reconstruction and finalization
pub mod tree;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the trace-to-SGF library
#[derive(Debug, thiserror::Error)]
pub enum TraceSgfError {
    #[error("output file {0} already exists")]
    OutputExists(PathBuf),

    #[error("malformed trace: {0}")]
    MalformedTrace(String),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("malformed game record: {0}")]
    MalformedRecord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TraceSgfError>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
