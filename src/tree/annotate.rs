//! Finishing pass: folds each node's transient visit counter into its
//! permanent comment text.

use crate::tree::node::TreeNode;

/// Prefixes every node's comment with `"<k> visit, "` / `"<k> visits, "`
/// and clears the scratch counter. After this pass the counts only exist
/// as comment text.
pub fn add_visits_to_comments(node: &mut TreeNode) {
    let visits = node.visit_count;
    let prefix = if visits == 1 {
        format!("{visits} visit, ")
    } else {
        format!("{visits} visits, ")
    };
    match node.comment_lines.first_mut() {
        Some(first) => *first = format!("{prefix}{first}"),
        None => node.comment_lines.push(prefix),
    }
    node.visit_count = 0;

    for child in &mut node.children {
        add_visits_to_comments(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Coord;
    use crate::tree::node::Color;

    fn leaf(visits: u32, lines: &[&str]) -> TreeNode {
        let mut node = TreeNode::new(Color::Black, Coord { row: 0, col: 0 });
        node.visit_count = visits;
        node.comment_lines = lines.iter().map(|s| s.to_string()).collect();
        node
    }

    #[test]
    fn test_prefixes_first_line_and_clears_counter() {
        let mut root = TreeNode::root();
        root.visit_count = 2;
        root.comment_lines = vec![
            "Initial value +0.5000".to_string(),
            "Playout 1 value=0.5000, LCB=0.4000".to_string(),
        ];
        root.children.push(leaf(1, &["policy=0.9000"]));

        add_visits_to_comments(&mut root);

        assert_eq!(root.comment_lines[0], "2 visits, Initial value +0.5000");
        assert_eq!(root.comment_lines[1], "Playout 1 value=0.5000, LCB=0.4000");
        assert_eq!(root.visit_count, 0);
        assert_eq!(root.children[0].comment_lines[0], "1 visit, policy=0.9000");
        assert_eq!(root.children[0].visit_count, 0);
    }

    #[test]
    fn test_singular_exactly_at_one_visit() {
        for (visits, expected) in [(0, "0 visits, x"), (1, "1 visit, x"), (3, "3 visits, x")] {
            let mut node = leaf(visits, &["x"]);
            add_visits_to_comments(&mut node);
            assert_eq!(node.comment_lines[0], expected);
        }
    }
}
