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

use crate::ast::{Comparator, Condition, Expr};
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::cursor::Cursor;
use crate::parser::dispatch::Construct;
use crate::parser::helpers::VALUES;
use crate::parser::parser::Parser;

const WORD_OPERATORS: &[TokenKind] = &[
    TokenKind::Add,
    TokenKind::Sub,
    TokenKind::Mul,
    TokenKind::Div,
    TokenKind::Mod,
];

impl<'t> Parser<'t> {
    /// Parses the right-hand side of an assignment.
    ///
    /// ```text
    /// datatype ( input ( "prompt" ) )
    /// input ( "prompt" )
    /// "text" | numeral | float | identifier
    /// ```
    pub(crate) fn expression(&self, cursor: Cursor<'t>) -> Result<(Expr, Cursor<'t>), ParseError> {
        let construct = Construct::Expression;
        let token = cursor.peek(construct)?;

        let parsed = match token.kind {
            TokenKind::Int | TokenKind::Float | TokenKind::Bool => {
                let (_, cursor) = cursor.advance().expect(TokenKind::LParen, construct)?;
                let (prompt, cursor) = self.input_call(cursor)?;
                let (_, cursor) = cursor.expect(TokenKind::RParen, construct)?;
                let expr = Expr::Input {
                    datatype: Some(token.lexeme.clone()),
                    prompt,
                };
                (expr, cursor)
            }
            TokenKind::Input => {
                let (prompt, cursor) = self.input_call(cursor)?;
                (Expr::Input { datatype: None, prompt }, cursor)
            }
            TokenKind::DoubleQuote | TokenKind::Apostrophe => {
                let (text, cursor) = self.string_literal(cursor, construct)?;
                (Expr::Str(text), cursor)
            }
            TokenKind::Numeral => (Expr::Numeral(token.lexeme.clone()), cursor.advance()),
            TokenKind::FloatNumeral => (Expr::Float(token.lexeme.clone()), cursor.advance()),
            TokenKind::Identifier => (Expr::Identifier(token.lexeme.clone()), cursor.advance()),
            _ => {
                return Err(ParseError::syntax(
                    construct,
                    "input call, string literal, numeral or identifier",
                    token.lexeme.as_str(),
                    token.line,
                ))
            }
        };

        Ok(parsed)
    }

    /// `input` `(` string-literal `)`, returning the prompt text.
    fn input_call(&self, cursor: Cursor<'t>) -> Result<(String, Cursor<'t>), ParseError> {
        let construct = Construct::Expression;

        let (_, cursor) = cursor.expect(TokenKind::Input, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (prompt, cursor) = self.string_literal(cursor, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::RParen, construct)?;

        Ok((prompt, cursor))
    }

    /// value comparator value
    ///
    /// After `<` or `>` a separate `=` token is tolerated and recorded.
    pub(crate) fn condition(
        &self,
        cursor: Cursor<'t>,
    ) -> Result<(Condition, Cursor<'t>), ParseError> {
        let construct = Construct::Condition;

        let (left, cursor) = self.operand(cursor, VALUES, construct, "identifier or numeral")?;

        let token = cursor.peek(construct)?;
        let Some(comparator) = Comparator::from_kind(token.kind) else {
            return Err(ParseError::syntax(
                construct,
                "comparison operator",
                token.lexeme.as_str(),
                token.line,
            ));
        };
        let cursor = cursor.advance();

        let (detached_equals, cursor) =
            if comparator.allows_detached_equals() && cursor.check(TokenKind::Assign) {
                (true, cursor.advance())
            } else {
                (false, cursor)
            };

        let (right, cursor) = self.operand(cursor, VALUES, construct, "identifier or numeral")?;

        let condition = Condition {
            left,
            comparator,
            right,
            detached_equals,
        };
        Ok((condition, cursor))
    }

    /// word-operator value `,` value
    pub(crate) fn operation(
        &self,
        cursor: Cursor<'t>,
        construct: Construct,
    ) -> Result<Cursor<'t>, ParseError> {
        let (_, cursor) = cursor.expect_one_of(WORD_OPERATORS, construct, "arithmetic operator")?;
        let (_, cursor) = self.operand(cursor, VALUES, construct, "identifier or numeral")?;
        let (_, cursor) = cursor.expect(TokenKind::Comma, construct)?;
        let (_, cursor) = self.operand(cursor, VALUES, construct, "identifier or numeral")?;
        Ok(cursor)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Comparator, Condition, Operand, Stmt};
    use crate::lexer::tokenize;
    use crate::parser::{parse, ParserOptions};

    fn first_condition(source: &str) -> Condition {
        let lexed = tokenize(source);
        let outcome = parse(&lexed.tokens, &ParserOptions::default());
        match outcome.program().map(|p| &p.nodes[0].stmt) {
            Some(Stmt::While { condition }) | Some(Stmt::If { condition }) => condition.clone(),
            other => panic!("no condition: {:?}", other),
        }
    }

    #[test]
    fn test_combined_comparator() {
        let condition = first_condition("while count <= 10:\nend");
        assert_eq!(condition.comparator, Comparator::LessEq);
        assert_eq!(condition.left, Operand::Identifier("count".to_string()));
        assert_eq!(condition.right, Operand::Numeral("10".to_string()));
        assert!(!condition.detached_equals);
    }

    #[test]
    fn test_detached_equals_after_less_or_greater() {
        let condition = first_condition("if (a > = b):\nend");
        assert_eq!(condition.comparator, Comparator::Greater);
        assert!(condition.detached_equals);
    }

    #[test]
    fn test_detached_equals_only_after_one_character_comparators() {
        let lexed = tokenize("while a == = b:\nend");
        let outcome = parse(&lexed.tokens, &ParserOptions::default());
        let message = &outcome.diagnostic().unwrap().message;
        assert!(message.starts_with("invalid condition"));
    }

    #[test]
    fn test_condition_needs_comparator() {
        let lexed = tokenize("while a b:\nend");
        let outcome = parse(&lexed.tokens, &ParserOptions::default());
        let message = &outcome.diagnostic().unwrap().message;
        assert_eq!(message, "invalid condition: expected comparison operator, found `b`");
    }

    #[test]
    fn test_input_needs_string_prompt() {
        let lexed = tokenize("x = input(prompt)\nend");
        let outcome = parse(&lexed.tokens, &ParserOptions::default());
        assert!(outcome.diagnostic().unwrap().message.contains("expression"));
    }
}
