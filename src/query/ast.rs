// std imports
use std::fmt;
use std::mem::take;

// third-party imports
use wildcard::Pattern;

// local imports
use crate::model::{Haystack, RecordFilter};

// ---

/// A parsed query expression.
///
/// Nodes are stored flat in pre-order: each binary node is followed by its
/// left operand subtree and then by its right operand subtree. Evaluation,
/// formatting, cloning and dropping never recurse, so the depth of a query is
/// bounded only by memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Pattern),
    /// `rhs` is the index of the right operand, `end` is the index just past the subtree.
    Binary { op: Op, rhs: usize, end: usize },
}

/// An element of a postfix expression as produced by the parser.
#[derive(Debug)]
pub(super) enum Postfix {
    Literal(Pattern),
    Op(Op),
}

impl Expr {
    /// Builds an expression from a well-formed, non-empty postfix sequence.
    pub(super) fn from_postfix(mut items: Vec<Postfix>) -> Self {
        // size of the subtree rooted at each postfix position
        let mut sizes = Vec::with_capacity(items.len());
        for item in &items {
            let size = match item {
                Postfix::Literal(_) => 1,
                Postfix::Op(_) => {
                    let rhs = sizes.len() - 1;
                    let lhs = rhs - sizes[rhs];
                    1 + sizes[lhs] + sizes[rhs]
                }
            };
            sizes.push(size);
        }

        let mut nodes = Vec::with_capacity(items.len());
        let mut pending: Vec<usize> = items.len().checked_sub(1).into_iter().collect();
        while let Some(k) = pending.pop() {
            let pos = nodes.len();
            match &mut items[k] {
                Postfix::Literal(pattern) => nodes.push(Node::Literal(take(pattern))),
                Postfix::Op(op) => {
                    let rhs = k - 1;
                    let lhs = rhs - sizes[rhs];
                    nodes.push(Node::Binary {
                        op: *op,
                        rhs: pos + 1 + sizes[lhs],
                        end: pos + sizes[k],
                    });
                    pending.push(rhs);
                    pending.push(lhs);
                }
            }
        }

        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl RecordFilter for Expr {
    fn apply(&self, record: &Haystack) -> bool {
        let mut frames: Vec<(Op, usize, usize)> = Vec::new();
        let mut i = 0;

        loop {
            let value = loop {
                match &self.nodes[i] {
                    Node::Binary { op, rhs, end } => frames.push((*op, *rhs, *end)),
                    Node::Literal(pattern) => break record.contains(pattern),
                }
                i += 1;
            };
            i += 1;

            loop {
                match frames.last() {
                    None => return value,
                    Some(&(op, rhs, end)) if i == rhs => {
                        if value == (op == Op::Or) {
                            i = end;
                            frames.pop();
                        } else {
                            break;
                        }
                    }
                    Some(_) => {
                        frames.pop();
                    }
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frames: Vec<(Op, usize)> = Vec::new();

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Binary { op, rhs, .. } => {
                    f.write_str("(")?;
                    frames.push((*op, *rhs));
                }
                Node::Literal(pattern) => {
                    write!(f, "\"{}\"", pattern.to_string().replace('"', "\\\""))?;
                    let next = i + 1;
                    while let Some(&(op, rhs)) = frames.last() {
                        if next == rhs {
                            write!(f, " {} ", op)?;
                            break;
                        }
                        f.write_str(")")?;
                        frames.pop();
                    }
                }
            }
        }

        Ok(())
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

#[cfg(test)]
mod tests;
