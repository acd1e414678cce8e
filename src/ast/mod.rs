/*
 * ==========================================================================
 * KITTEN - Small Steps, Sharp Claws
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the KITTEN teaching language front end.
 *
 * KITTEN is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

pub mod expr;
pub mod stmt;

pub use expr::{Comparator, Condition, Expr, Operand};
pub use stmt::Stmt;

use serde::Serialize;

/// One parsed statement.
///
/// Nodes are stored flat in [`Program::nodes`], in source order. `parent` is
/// the index of the node that parsed this one as its body; top-level
/// statements have none. A parent always comes before its body, so a
/// program of any length is built, walked and dropped without recursion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(flatten)]
    pub stmt: Stmt,
    pub line: usize,
    pub parent: Option<usize>,
}

impl Node {
    pub fn new(stmt: Stmt, line: usize, parent: Option<usize>) -> Self {
        Self { stmt, line, parent }
    }
}

/// Every node of an accepted program, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Program {
    pub nodes: Vec<Node>,
}

impl Program {
    /// Fragments in source order (parents before their bodies).
    pub fn fragments(&self) -> Vec<&Stmt> {
        self.nodes.iter().map(|node| &node.stmt).collect()
    }

    /// The statements dispatched by the top-level driver, with their indices.
    pub fn top_level(&self) -> impl Iterator<Item = (usize, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
    }

    /// The body of the node at `index`, in source order.
    ///
    /// A class lists its constructor or field-init node first.
    pub fn body(&self, index: usize) -> impl Iterator<Item = (usize, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .skip(index + 1)
            .filter(move |(_, node)| node.parent == Some(index))
    }

    /// True when the last node is the terminal `end`.
    pub fn is_terminated(&self) -> bool {
        self.nodes.last().is_some_and(|node| node.stmt == Stmt::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Program {
        Program {
            nodes: vec![
                Node::new(Stmt::Else, 1, None),
                Node::new(Stmt::Print, 2, Some(0)),
                Node::new(Stmt::IncDec, 3, Some(1)),
                Node::new(Stmt::Arithmetic, 4, Some(0)),
                Node::new(Stmt::End, 5, None),
            ],
        }
    }

    #[test]
    fn test_fragments_are_in_source_order() {
        assert_eq!(
            sample().fragments(),
            vec![&Stmt::Else, &Stmt::Print, &Stmt::IncDec, &Stmt::Arithmetic, &Stmt::End]
        );
    }

    #[test]
    fn test_top_level_and_body() {
        let program = sample();
        let top: Vec<usize> = program.top_level().map(|(index, _)| index).collect();
        assert_eq!(top, vec![0, 4]);

        let body: Vec<usize> = program.body(0).map(|(index, _)| index).collect();
        assert_eq!(body, vec![1, 3]);
        assert_eq!(program.body(2).count(), 0);
        assert!(program.is_terminated());
    }

    #[test]
    fn test_node_serialization_flattens_fragment() {
        let node = Node::new(
            Stmt::ObjectCall {
                object: "cat".to_string(),
                method: "purr".to_string(),
                arguments: vec![Operand::Numeral("3".to_string())],
            },
            4,
            Some(2),
        );
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["construct"], "object_call");
        assert_eq!(value["object"], "cat");
        assert_eq!(value["line"], 4);
        assert_eq!(value["parent"], 2);
        assert_eq!(value["arguments"][0]["value"], "3");
    }
}
