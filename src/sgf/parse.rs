//! Recursive-descent SGF reader.
//!
//! Handles the subset this tool consumes: one game tree of nodes with
//! `IDENT[value]...` properties, `\]` and `\\` escapes inside values, and
//! nested variations. Anything after the first game tree is ignored.

use std::fs;
use std::path::Path;

use crate::sgf::game::{SgfGame, SgfNode};
use crate::{Result, TraceSgfError};

/// Reads and parses an SGF file.
pub fn load_sgf(path: &Path) -> Result<SgfGame> {
    let text = fs::read_to_string(path)?;
    parse_sgf(&text)
}

/// Parses SGF text into a game record.
pub fn parse_sgf(text: &str) -> Result<SgfGame> {
    let mut parser = Parser {
        input: text.as_bytes(),
        pos: 0,
    };
    parser.skip_whitespace();
    let root = parser.parse_game_tree()?;
    Ok(SgfGame { root })
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.pos += 1;
                Ok(())
            }
            found => Err(self.error(format!(
                "expected {:?}, found {:?}",
                expected as char,
                found.map(|c| c as char)
            ))),
        }
    }

    fn error(&self, message: String) -> TraceSgfError {
        TraceSgfError::MalformedRecord(format!("byte {}: {}", self.pos, message))
    }

    /// `( ;node ;node ... (subtree) (subtree) )` — returns the first node
    /// of the sequence with the rest chained through `children`.
    fn parse_game_tree(&mut self) -> Result<SgfNode> {
        self.expect(b'(')?;
        self.skip_whitespace();
        self.expect(b';')?;
        let mut first = self.parse_node()?;
        let mut tail = &mut first;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b';') => {
                    self.pos += 1;
                    let node = self.parse_node()?;
                    tail.children.push(node);
                    tail = tail.children.last_mut().unwrap();
                }
                Some(b'(') => {
                    let subtree = self.parse_game_tree()?;
                    tail.children.push(subtree);
                }
                Some(b')') => {
                    self.pos += 1;
                    return Ok(first);
                }
                _ => return Err(self.error("expected ';', '(' or ')'".to_string())),
            }
        }
    }

    fn parse_node(&mut self) -> Result<SgfNode> {
        let mut node = SgfNode::default();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(c) if c.is_ascii_uppercase() => {
                    let ident = self.parse_ident();
                    let mut values = Vec::new();
                    self.skip_whitespace();
                    while self.peek() == Some(b'[') {
                        values.push(self.parse_value()?);
                        self.skip_whitespace();
                    }
                    if values.is_empty() {
                        return Err(self.error(format!("property {ident} has no value")));
                    }
                    node.props.push((ident, values));
                }
                _ => return Ok(node),
            }
        }
    }

    fn parse_ident(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_uppercase()) {
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn parse_value(&mut self) -> Result<String> {
        self.expect(b'[')?;
        let mut value = Vec::new();
        loop {
            match self.peek() {
                Some(b']') => {
                    self.pos += 1;
                    return String::from_utf8(value)
                        .map_err(|_| self.error("property value is not UTF-8".to_string()));
                }
                Some(b'\\') => {
                    self.pos += 1;
                    match self.peek() {
                        Some(escaped) => {
                            value.push(escaped);
                            self.pos += 1;
                        }
                        None => return Err(self.error("unterminated escape".to_string())),
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
                None => return Err(self.error("unterminated property value".to_string())),
            }
        }
    }
}
