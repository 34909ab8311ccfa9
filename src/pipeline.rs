//! The whole transform, end to end: load record, load trace, rebuild the
//! playout tree, finalize visit counts, attach variations, write the new
//! record.

use std::path::Path;

use crate::sgf;
use crate::trace::index::TraceIndex;
use crate::trace::row::read_trace;
use crate::tree::annotate::add_visits_to_comments;
use crate::tree::builder::build_tree;
use crate::{Result, TraceSgfError};

/// Runs the batch transform and returns the number of playouts merged.
///
/// `max_playouts <= 0` means all playouts present in the trace. Refuses to
/// overwrite `output_sgf`; any error aborts before the output is written.
pub fn annotate_game_record(
    input_sgf: &Path,
    trace_csv: &Path,
    output_sgf: &Path,
    max_playouts: i64,
) -> Result<u32> {
    if output_sgf.exists() {
        return Err(TraceSgfError::OutputExists(output_sgf.to_path_buf()));
    }

    let mut game = sgf::parse::load_sgf(input_sgf)?;
    log::info!("loaded game record {}", input_sgf.display());

    let rows = read_trace(trace_csv)?;
    log::info!("loaded {} trace rows from {}", rows.len(), trace_csv.display());

    let requested = u32::try_from(max_playouts).unwrap_or(0);
    let index = TraceIndex::build(&rows, requested)?;

    let mut tree = build_tree(&rows, &index, game.last_move_color())?;
    add_visits_to_comments(&mut tree.root);

    sgf::write::attach_variations(&mut game, &tree)?;
    sgf::write::save_sgf(&game, output_sgf)?;
    log::info!(
        "wrote {} playouts to {}",
        index.playout_count(),
        output_sgf.display()
    );

    Ok(index.playout_count())
}
