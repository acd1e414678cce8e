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

use crate::lexer::token::{Token, TokenKind};
use serde::{Serialize, Serializer};

/// A single value position: a condition side, a parameter, an argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Operand {
    Identifier(String),
    Numeral(String),
    Float(String),
    Str(String),
    SelfRef,
}

impl Operand {
    /// Converts a value token. Quote delimiters are not values; the string
    /// literal token that follows them is.
    pub fn from_token(token: &Token) -> Option<Operand> {
        match token.kind {
            TokenKind::Identifier => Some(Operand::Identifier(token.lexeme.clone())),
            TokenKind::Numeral => Some(Operand::Numeral(token.lexeme.clone())),
            TokenKind::FloatNumeral => Some(Operand::Float(token.lexeme.clone())),
            TokenKind::StringLiteral => Some(Operand::Str(token.literal_text().to_string())),
            TokenKind::SelfKw => Some(Operand::SelfRef),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Eq,
    NotEq,
}

impl Comparator {
    pub fn from_kind(kind: TokenKind) -> Option<Comparator> {
        match kind {
            TokenKind::Less => Some(Comparator::Less),
            TokenKind::Gt => Some(Comparator::Greater),
            TokenKind::LessEq => Some(Comparator::LessEq),
            TokenKind::GtEq => Some(Comparator::GreaterEq),
            TokenKind::Eq => Some(Comparator::Eq),
            TokenKind::NotEq => Some(Comparator::NotEq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Less => "<",
            Comparator::Greater => ">",
            Comparator::LessEq => "<=",
            Comparator::GreaterEq => ">=",
            Comparator::Eq => "==",
            Comparator::NotEq => "!=",
        }
    }

    /// Only the one-character comparators may be followed by a detached `=`.
    pub fn allows_detached_equals(&self) -> bool {
        matches!(self, Comparator::Less | Comparator::Greater)
    }
}

impl Serialize for Comparator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The comparison used by `while`, `if` and `elif`.
///
/// `detached_equals` records a bare `=` token written after `<` or `>`
/// (`a < = b`). It is kept as written and never folded into `<=`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub left: Operand,
    pub comparator: Comparator,
    pub right: Operand,
    pub detached_equals: bool,
}

/// Right-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Expr {
    /// `input("prompt")`, optionally wrapped in a datatype: `int(input("n"))`
    Input {
        datatype: Option<String>,
        prompt: String,
    },
    Str(String),
    Numeral(String),
    Float(String),
    Identifier(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenClass;

    #[test]
    fn test_operand_from_string_literal_drops_quote() {
        let token = Token::new(2, "meow\"", TokenKind::StringLiteral, Some(TokenClass::Literal), 1);
        assert_eq!(Operand::from_token(&token), Some(Operand::Str("meow".to_string())));
    }

    #[test]
    fn test_non_values_are_not_operands() {
        let token = Token::new(0, "(", TokenKind::LParen, Some(TokenClass::Separator), 1);
        assert_eq!(Operand::from_token(&token), None);
    }

    #[test]
    fn test_comparators() {
        assert_eq!(Comparator::from_kind(TokenKind::GtEq), Some(Comparator::GreaterEq));
        assert_eq!(Comparator::from_kind(TokenKind::Assign), None);
        assert!(Comparator::Less.allows_detached_equals());
        assert!(!Comparator::LessEq.allows_detached_equals());
    }

    #[test]
    fn test_condition_serialization() {
        let condition = Condition {
            left: Operand::Identifier("a".to_string()),
            comparator: Comparator::Less,
            right: Operand::Numeral("10".to_string()),
            detached_equals: false,
        };
        let value = serde_json::to_value(&condition).unwrap();
        assert_eq!(value["comparator"], "<");
        assert_eq!(value["left"]["kind"], "identifier");
        assert_eq!(value["right"]["value"], "10");
    }
}
