//! In-memory SGF game records.
//!
//! Only the structure this tool needs: an ordered property list per node,
//! the main line (repeated first child), the board size, and the color of
//! the last move played.

use crate::tree::node::Color;

/// One SGF node: ordered `(identifier, values)` properties plus children.
/// Property values are stored unescaped.
#[derive(Debug, Default, Clone)]
pub struct SgfNode {
    pub props: Vec<(String, Vec<String>)>,
    pub children: Vec<SgfNode>,
}

impl SgfNode {
    /// First value of the given property, if present.
    pub fn get(&self, ident: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(id, _)| id == ident)
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    /// Replaces the property's values, or appends the property if absent.
    pub fn set(&mut self, ident: &str, value: String) {
        match self.props.iter_mut().find(|(id, _)| id == ident) {
            Some((_, values)) => *values = vec![value],
            None => self.props.push((ident.to_string(), vec![value])),
        }
    }
}

/// A parsed game record.
#[derive(Debug, Clone)]
pub struct SgfGame {
    pub root: SgfNode,
}

impl SgfGame {
    /// Board size from the root's `SZ` property, defaulting to 19.
    pub fn board_size(&self) -> usize {
        self.root
            .get("SZ")
            .and_then(|value| value.parse().ok())
            .unwrap_or(19)
    }

    /// Last node of the main line (repeated first child). This is the node
    /// the playout variations hang off.
    pub fn last_node_mut(&mut self) -> &mut SgfNode {
        let mut node = &mut self.root;
        while !node.children.is_empty() {
            node = &mut node.children[0];
        }
        node
    }

    /// Color of the last `B`/`W` move on the main line. A record with no
    /// move at all counts as a black last move, so the first variation
    /// move comes out white.
    pub fn last_move_color(&self) -> Color {
        let mut color = Color::Black;
        let mut node = &self.root;
        loop {
            if node.get("B").is_some() {
                color = Color::Black;
            } else if node.get("W").is_some() {
                color = Color::White;
            }
            match node.children.first() {
                Some(child) => node = child,
                None => return color,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with(ident: &str, value: &str) -> SgfNode {
        let mut node = SgfNode::default();
        node.set(ident, value.to_string());
        node
    }

    #[test]
    fn test_board_size_defaults_to_19() {
        let game = SgfGame {
            root: SgfNode::default(),
        };
        assert_eq!(game.board_size(), 19);
        let game = SgfGame {
            root: node_with("SZ", "9"),
        };
        assert_eq!(game.board_size(), 9);
    }

    #[test]
    fn test_last_move_color_follows_main_line() {
        let mut root = node_with("B", "aa");
        root.children.push(node_with("W", "bb"));
        let game = SgfGame { root };
        assert_eq!(game.last_move_color(), Color::White);
    }

    #[test]
    fn test_empty_record_counts_as_black_last_move() {
        let game = SgfGame {
            root: SgfNode::default(),
        };
        assert_eq!(game.last_move_color(), Color::Black);
    }

    #[test]
    fn test_last_node_ignores_side_variations() {
        let mut root = SgfNode::default();
        let mut main = node_with("B", "aa");
        main.children.push(node_with("W", "bb"));
        root.children.push(main);
        root.children.push(node_with("B", "cc")); // existing side variation
        let mut game = SgfGame { root };
        assert_eq!(game.last_node_mut().get("W"), Some("bb"));
    }
}
