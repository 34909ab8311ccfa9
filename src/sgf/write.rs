//! Attaching the reconstructed tree to a game record and serializing the
//! result.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::coords::{coord_to_text, Coord};
use crate::sgf::game::{SgfGame, SgfNode};
use crate::tree::node::{Color, GameTree, TreeNode};
use crate::{Result, TraceSgfError};

/// Maps a trace coordinate to the two-letter SGF point. Trace rows count
/// from the bottom edge while SGF rows count from the top, so the row
/// flips against the board size.
pub fn coord_to_sgf(coord: Coord, board_size: usize) -> Result<String> {
    if coord.row >= board_size || coord.col >= board_size {
        return Err(TraceSgfError::InvalidCoordinate(format!(
            "{} is outside a {board_size}x{board_size} board",
            coord_to_text(coord)
        )));
    }
    let col = (b'a' + coord.col as u8) as char;
    let row = (b'a' + (board_size - 1 - coord.row) as u8) as char;
    Ok(format!("{col}{row}"))
}

/// Hangs the finished tree's variations off the record's last main-line
/// node and folds the tree root's comment into that node.
///
/// Call after the visit annotator has finalized the comments.
pub fn attach_variations(game: &mut SgfGame, tree: &GameTree) -> Result<()> {
    let board_size = game.board_size();
    let last = game.last_node_mut();

    let body = tree.root.comment_lines.join("\n");
    let comment = match last.get("C") {
        Some(existing) => format!("{existing}\n{body}"),
        None => body,
    };
    last.set("C", comment);

    for child in &tree.root.children {
        let node = to_sgf_node(child, board_size)?;
        last.children.push(node);
    }
    Ok(())
}

fn to_sgf_node(node: &TreeNode, board_size: usize) -> Result<SgfNode> {
    let mut sgf = SgfNode::default();
    if let Some((color, coord)) = node.mv {
        let ident = match color {
            Color::Black => "B",
            Color::White => "W",
        };
        sgf.set(ident, coord_to_sgf(coord, board_size)?);
    }
    if !node.comment_lines.is_empty() {
        sgf.set("C", node.comment_lines.join("\n"));
    }
    for child in &node.children {
        sgf.children.push(to_sgf_node(child, board_size)?);
    }
    Ok(sgf)
}

/// Writes the record to a new file, whole and once.
pub fn save_sgf(game: &SgfGame, path: &Path) -> Result<()> {
    if path.exists() {
        return Err(TraceSgfError::OutputExists(path.to_path_buf()));
    }
    fs::write(path, game.to_string())?;
    Ok(())
}

impl fmt::Display for SgfGame {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "(")?;
        write_node(fmt, &self.root)?;
        write!(fmt, ")")
    }
}

fn write_node(fmt: &mut fmt::Formatter<'_>, node: &SgfNode) -> fmt::Result {
    write!(fmt, ";")?;
    for (ident, values) in &node.props {
        write!(fmt, "{ident}")?;
        for value in values {
            write!(fmt, "[{}]", escape_value(value))?;
        }
    }
    match node.children.len() {
        0 => Ok(()),
        // a single continuation stays in the same sequence
        1 => write_node(fmt, &node.children[0]),
        _ => {
            for child in &node.children {
                write!(fmt, "(")?;
                write_node(fmt, child)?;
                write!(fmt, ")")?;
            }
            Ok(())
        }
    }
}

fn escape_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace(']', "\\]")
}
