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

use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::dispatch::Construct;

/// A read position over the token stream.
///
/// Cursors are plain values: every grammar rule receives one and returns a
/// new one. Nothing moves unless a rule hands back the advanced copy.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    position: usize,
}

impl<'t> Cursor<'t> {
    /// A cursor at the first token.
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true once every token has been read.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The current token, if any remain.
    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position)
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<&'t Token> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// The current token, or `UnexpectedEnd` while parsing `construct`.
    pub fn peek(&self, construct: Construct) -> Result<&'t Token, ParseError> {
        self.current().ok_or(ParseError::UnexpectedEnd {
            construct,
            line: self.last_line(),
        })
    }

    /// Moves one position forward.
    pub fn advance(self) -> Self {
        Self {
            tokens: self.tokens,
            position: (self.position + 1).min(self.tokens.len()),
        }
    }

    /// Checks the current token's type without consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|token| token.kind == kind)
    }

    /// Consumes a required token of type `kind`.
    pub fn expect(
        self,
        kind: TokenKind,
        construct: Construct,
    ) -> Result<(&'t Token, Self), ParseError> {
        self.expect_one_of(&[kind], construct, kind.describe())
    }

    /// Consumes a token whose type is one of `kinds`.
    ///
    /// `expected` is the wording used in the diagnostic on a mismatch.
    pub fn expect_one_of(
        self,
        kinds: &[TokenKind],
        construct: Construct,
        expected: &str,
    ) -> Result<(&'t Token, Self), ParseError> {
        let token = self.peek(construct)?;

        if kinds.contains(&token.kind) {
            Ok((token, self.advance()))
        } else {
            Err(ParseError::syntax(construct, expected, token.lexeme.as_str(), token.line))
        }
    }

    /// Consumes the current token only if it has type `kind`.
    pub fn accept(self, kind: TokenKind) -> Self {
        if self.check(kind) {
            self.advance()
        } else {
            self
        }
    }

    /// Skips any `newline` tokens.
    pub fn skip_newlines(self) -> Self {
        let mut cursor = self;
        while cursor.check(TokenKind::Newline) {
            cursor = cursor.advance();
        }
        cursor
    }

    /// Line of the final token in the stream.
    pub fn last_line(&self) -> Option<usize> {
        self.tokens.last().map(|token| token.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenClass;

    fn tokens() -> Vec<Token> {
        vec![
            Token::new(0, "x", TokenKind::Identifier, Some(TokenClass::Identifier), 1),
            Token::new(1, "\n", TokenKind::Newline, Some(TokenClass::Separator), 1),
            Token::new(2, "\n", TokenKind::Newline, Some(TokenClass::Separator), 1),
            Token::new(3, "=", TokenKind::Assign, Some(TokenClass::Operator), 2),
        ]
    }

    #[test]
    fn test_cursor_is_a_value() {
        let tokens = tokens();
        let start = Cursor::new(&tokens);
        let next = start.advance();
        assert_eq!(start.position(), 0);
        assert_eq!(next.position(), 1);
        assert_eq!(next.previous().map(|t| t.lexeme.as_str()), Some("x"));
    }

    #[test]
    fn test_expect_mismatch_is_a_syntax_error() {
        let tokens = tokens();
        let error = Cursor::new(&tokens)
            .expect(TokenKind::Assign, Construct::Assignment)
            .unwrap_err();
        assert!(matches!(
            error,
            ParseError::Syntax { construct: Construct::Assignment, line: 1, .. }
        ));
    }

    #[test]
    fn test_reading_past_the_end() {
        let tokens = tokens();
        let mut cursor = Cursor::new(&tokens);
        for _ in 0..10 {
            cursor = cursor.advance();
        }
        assert!(cursor.is_at_end());
        assert_eq!(
            cursor.peek(Construct::Program).unwrap_err(),
            ParseError::UnexpectedEnd { construct: Construct::Program, line: Some(2) }
        );
    }

    #[test]
    fn test_skip_newlines_and_accept() {
        let tokens = tokens();
        let cursor = Cursor::new(&tokens).advance().skip_newlines();
        assert!(cursor.check(TokenKind::Assign));
        assert_eq!(cursor.accept(TokenKind::Colon).position(), 3);
        assert_eq!(cursor.accept(TokenKind::Assign).position(), 4);
    }
}
