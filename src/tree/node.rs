//! Nodes of the reconstructed search tree.

use crate::coords::Coord;

/// Stone color; alternates strictly with depth from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn flip(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// One node of the reconstructed tree.
///
/// `comment_lines` accumulates during reconstruction and is only joined
/// into a single comment string at the SGF boundary. `visit_count` is
/// construction-time scratch: it is folded into the comment text and
/// zeroed by [`crate::tree::annotate::add_visits_to_comments`].
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Move that leads to this node; `None` for the tree root.
    pub mv: Option<(Color, Coord)>,
    /// Child nodes in order of first discovery. No two children share a
    /// coordinate.
    pub children: Vec<TreeNode>,
    pub comment_lines: Vec<String>,
    pub visit_count: u32,
}

impl TreeNode {
    /// The root sentinel, standing in for the game record's last node.
    pub fn root() -> Self {
        TreeNode {
            mv: None,
            children: Vec::new(),
            comment_lines: Vec::new(),
            visit_count: 0,
        }
    }

    pub fn new(color: Color, coord: Coord) -> Self {
        TreeNode {
            mv: Some((color, coord)),
            children: Vec::new(),
            comment_lines: Vec::new(),
            visit_count: 0,
        }
    }

    /// Position of the child reached by `coord`, if that move has already
    /// been visited. Linear scan; branching factors stay small in practice.
    pub fn child_index(&self, coord: Coord) -> Option<usize> {
        self.children
            .iter()
            .position(|child| matches!(child.mv, Some((_, c)) if c == coord))
    }
}

/// The finished reconstruction: a root whose children are the playout
/// variations, ready to be attached under the game record's last node.
#[derive(Debug)]
pub struct GameTree {
    pub root: TreeNode,
}
