//! Core reconstruction: replays each playout's trace segment against the
//! shared tree.
//!
//! A playout's update rows are logged in backpropagation order, so within
//! its segment the leaf comes first and the root (`move == "pass"`) comes
//! last. Walking the update cursor backward from the segment's end
//! therefore discovers the path from the root down, and a second cursor
//! walking the explore rows forward stays aligned with the descent depth.
//! No auxiliary path buffer is needed.

use crate::coords::text_to_coord;
use crate::trace::index::TraceIndex;
use crate::trace::row::{Operation, TraceRow};
use crate::tree::node::{Color, GameTree, TreeNode};
use crate::{Result, TraceSgfError};

/// Floating point values are rendered to 4 decimal places everywhere.
fn numstr(x: f64) -> String {
    format!("{x:.4}")
}

/// Replays playouts `1..=index.playout_count()` and merges their paths
/// into one tree.
///
/// `last_move_color` is the color of the source record's last move; the
/// first move of every variation plays the opposite color.
pub fn build_tree(
    rows: &[TraceRow],
    index: &TraceIndex,
    last_move_color: Color,
) -> Result<GameTree> {
    let mut root = TreeNode::root();

    // Row 0 seeds the root's baseline evaluation, read exactly once.
    let first = rows
        .first()
        .ok_or_else(|| TraceSgfError::MalformedTrace("trace contains no rows".to_string()))?;
    root.comment_lines
        .push(format!("Initial value +{}", numstr(first.value)));

    for i in 1..=index.playout_count() {
        let segment = index.segment(i);
        merge_playout(rows, i, segment.first_row, segment.last_row, last_move_color, &mut root)?;
        log::debug!("merged playout {i}");
    }

    Ok(GameTree { root })
}

/// Merges one playout into the tree.
///
/// `u` walks the update rows backward from `last_row`; `e` walks the
/// explore rows forward and supplies the policy prior whenever the descent
/// creates a new node. Playout 1's segment carries one extra leading row
/// (the root seed consumed by [`build_tree`]), so its explore cursor skips
/// that row; every later playout starts one row before its segment because
/// the leading root "pass" step consumes a cursor advance without reading.
fn merge_playout(
    rows: &[TraceRow],
    playout: u32,
    first_row: usize,
    last_row: usize,
    last_move_color: Color,
    root: &mut TreeNode,
) -> Result<()> {
    let mut u = last_row;
    let mut e = if playout == 1 {
        first_row
    } else {
        first_row.checked_sub(1).ok_or_else(|| {
            TraceSgfError::MalformedTrace(format!(
                "playout {playout} starts at row 0, which belongs to playout 1"
            ))
        })?
    };
    let mut color = last_move_color;
    let mut node = &mut *root;

    loop {
        let row = &rows[u];
        if row.operation != Operation::Update {
            break;
        }

        if row.mv != "pass" {
            // Descend one level, creating the child on first discovery.
            let coord = text_to_coord(&row.mv).map_err(|err| {
                TraceSgfError::MalformedTrace(format!("row {}: {}", u + 1, err))
            })?;
            color = color.flip();
            let child = match node.child_index(coord) {
                Some(idx) => idx,
                None => {
                    let mut created = TreeNode::new(color, coord);
                    // The policy prior never changes after the first visit,
                    // so it is written once, at creation.
                    let policy = rows
                        .get(e)
                        .and_then(|r| r.policy)
                        .ok_or_else(|| {
                            TraceSgfError::MalformedTrace(format!(
                                "playout {playout}: no policy value at row {}",
                                e + 1
                            ))
                        })?;
                    created
                        .comment_lines
                        .push(format!("policy={}", numstr(policy)));
                    node.children.push(created);
                    node.children.len() - 1
                }
            };
            node = &mut node.children[child];
        }
        // A "pass" row annotates the current node itself (root updates).

        node.comment_lines.push(format!(
            "Playout {} value={}, LCB={}",
            playout,
            numstr(row.value),
            numstr(row.lcb)
        ));
        node.visit_count += 1;

        e += 1;
        if u == 0 {
            break;
        }
        u -= 1;
    }

    Ok(())
}
