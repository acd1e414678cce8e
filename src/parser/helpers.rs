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

use crate::ast::Operand;
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::cursor::Cursor;
use crate::parser::dispatch::Construct;
use crate::parser::parser::Parser;

/* ----------------------------- */
/* ACCEPTED VALUE TOKENS         */
/* ----------------------------- */
// A quote delimiter in one of these lists stands for a whole string literal.

pub(crate) const VALUES: &[TokenKind] = &[TokenKind::Identifier, TokenKind::Numeral];

pub(crate) const PARAMS: &[TokenKind] = VALUES;

pub(crate) const CONSTRUCTOR_PARAMS: &[TokenKind] =
    &[TokenKind::Identifier, TokenKind::Numeral, TokenKind::SelfKw];

pub(crate) const RETURN_VALUES: &[TokenKind] =
    &[TokenKind::Identifier, TokenKind::Numeral, TokenKind::FloatNumeral];

pub(crate) const PRINT_ARGUMENTS: &[TokenKind] = &[
    TokenKind::DoubleQuote,
    TokenKind::Apostrophe,
    TokenKind::Identifier,
    TokenKind::Numeral,
];

pub(crate) const OBJECT_ARGUMENTS: &[TokenKind] = &[
    TokenKind::DoubleQuote,
    TokenKind::Apostrophe,
    TokenKind::Identifier,
    TokenKind::Numeral,
    TokenKind::FloatNumeral,
];

impl<'t> Parser<'t> {
    /// Consumes one value whose token type is in `accepts`.
    pub(crate) fn operand(
        &self,
        cursor: Cursor<'t>,
        accepts: &[TokenKind],
        construct: Construct,
        expected: &str,
    ) -> Result<(Operand, Cursor<'t>), ParseError> {
        let token = cursor.peek(construct)?;
        let mismatch =
            || ParseError::syntax(construct, expected, token.lexeme.as_str(), token.line);

        if !accepts.contains(&token.kind) {
            return Err(mismatch());
        }

        if token.kind.is_quote() {
            let (text, cursor) = self.string_literal(cursor, construct)?;
            return Ok((Operand::Str(text), cursor));
        }

        let operand = Operand::from_token(token).ok_or_else(mismatch)?;
        Ok((operand, cursor.advance()))
    }

    /// Reads `value (, value)* )` right after an opening parenthesis.
    ///
    /// With `allow_empty` a lone `)` gives an empty list.
    pub(crate) fn operand_list(
        &self,
        cursor: Cursor<'t>,
        accepts: &[TokenKind],
        construct: Construct,
        expected: &str,
        allow_empty: bool,
    ) -> Result<(Vec<Operand>, Cursor<'t>), ParseError> {
        let mut operands = Vec::new();

        if allow_empty && cursor.check(TokenKind::RParen) {
            return Ok((operands, cursor.advance()));
        }

        let mut cursor = cursor;
        loop {
            let (operand, next) = self.operand(cursor, accepts, construct, expected)?;
            operands.push(operand);

            let (separator, next) = next.expect_one_of(
                &[TokenKind::Comma, TokenKind::RParen],
                construct,
                "`,` or `)`",
            )?;
            cursor = next;

            if separator.kind == TokenKind::RParen {
                return Ok((operands, cursor));
            }
        }
    }

    /// A quote delimiter followed by its string literal token.
    pub(crate) fn string_literal(
        &self,
        cursor: Cursor<'t>,
        construct: Construct,
    ) -> Result<(String, Cursor<'t>), ParseError> {
        let (_, cursor) = cursor.expect_one_of(
            &[TokenKind::DoubleQuote, TokenKind::Apostrophe],
            construct,
            "string literal",
        )?;
        let (literal, cursor) = cursor.expect(TokenKind::StringLiteral, construct)?;

        Ok((literal.literal_text().to_string(), cursor))
    }

    /// Requires a line break: a `newline` token, or a next token that sits
    /// on a later line than the one just consumed.
    pub(crate) fn line_break(
        &self,
        cursor: Cursor<'t>,
        construct: Construct,
    ) -> Result<Cursor<'t>, ParseError> {
        let token = cursor.peek(construct)?;

        if token.kind == TokenKind::Newline {
            return Ok(cursor.advance());
        }

        let previous_line = cursor.previous().map_or(0, |previous| previous.line);
        if token.line > previous_line {
            Ok(cursor)
        } else {
            Err(ParseError::syntax(
                construct,
                "a line break",
                token.lexeme.as_str(),
                token.line,
            ))
        }
    }
}
