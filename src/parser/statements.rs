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

use crate::ast::Stmt;
use crate::error::ParseError;
use crate::lexer::token::TokenKind;
use crate::parser::cursor::Cursor;
use crate::parser::dispatch::Construct;
use crate::parser::helpers::{
    CONSTRUCTOR_PARAMS, OBJECT_ARGUMENTS, PARAMS, PRINT_ARGUMENTS, RETURN_VALUES, VALUES,
};
use crate::parser::parser::{Parsed, ParseResult, Parser};

impl<'t> Parser<'t> {
    /// identifier `=` expression
    pub(crate) fn assignment(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let (name, cursor) = cursor.expect(TokenKind::Identifier, Construct::Assignment)?;
        let (_, cursor) = cursor.expect(TokenKind::Assign, Construct::Assignment)?;

        let (expression, cursor) = self.expression(cursor)?;
        let stmt = Stmt::Assignment { expression };
        Ok(Parsed::open(stmt, name.line, cursor, Construct::Expression))
    }

    /// `while` condition `:` body
    pub(crate) fn while_loop(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let (keyword, cursor) = cursor.expect(TokenKind::While, Construct::While)?;
        let (condition, cursor) = self.condition(cursor)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, Construct::While)?;

        let stmt = Stmt::While { condition };
        Ok(Parsed::open(stmt, keyword.line, cursor, Construct::While))
    }

    /// `for` identifier `in` `range` `(` start `,` stop `)` `:` body
    pub(crate) fn for_loop(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::For;

        let (keyword, cursor) = cursor.expect(TokenKind::For, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::In, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Range, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (_, cursor) = self.operand(cursor, VALUES, construct, "identifier or numeral")?;
        let (_, cursor) = cursor.expect(TokenKind::Comma, construct)?;
        let (_, cursor) = self.operand(cursor, VALUES, construct, "identifier or numeral")?;
        let (_, cursor) = cursor.expect(TokenKind::RParen, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, construct)?;

        Ok(Parsed::open(Stmt::For, keyword.line, cursor, construct))
    }

    pub(crate) fn if_statement(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        self.conditional(cursor, TokenKind::If, Construct::If)
    }

    pub(crate) fn elif_statement(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        self.conditional(cursor, TokenKind::Elif, Construct::Elif)
    }

    /// keyword `(` condition `)` `:` body, shared by `if` and `elif`.
    fn conditional(
        &self,
        cursor: Cursor<'t>,
        keyword: TokenKind,
        construct: Construct,
    ) -> ParseResult<'t> {
        let (token, cursor) = cursor.expect(keyword, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (condition, cursor) = self.condition(cursor)?;
        let (_, cursor) = cursor.expect(TokenKind::RParen, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, construct)?;

        let stmt = if keyword == TokenKind::Elif {
            Stmt::Elif { condition }
        } else {
            Stmt::If { condition }
        };
        Ok(Parsed::open(stmt, token.line, cursor, construct))
    }

    /// `else` `:` body
    pub(crate) fn else_statement(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let (keyword, cursor) = cursor.expect(TokenKind::Else, Construct::Else)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, Construct::Else)?;

        Ok(Parsed::open(Stmt::Else, keyword.line, cursor, Construct::Else))
    }

    /// `print` `(` argument (`,` argument)* `)` [`:`] body
    pub(crate) fn print_statement(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::Print;

        let (keyword, cursor) = cursor.expect(TokenKind::Print, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (_, cursor) = self.operand_list(
            cursor,
            PRINT_ARGUMENTS,
            construct,
            "string literal, identifier or numeral",
            false,
        )?;
        let cursor = cursor.accept(TokenKind::Colon);

        Ok(Parsed::open(Stmt::Print, keyword.line, cursor, construct))
    }

    /// (`++` | `--`) identifier `:`
    pub(crate) fn inc_dec(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::IncDec;

        let (operator, cursor) =
            cursor.expect_one_of(&[TokenKind::Inc, TokenKind::Dec], construct, "`++` or `--`")?;
        let (_, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, construct)?;

        Ok(Parsed::leaf(Stmt::IncDec, operator.line, cursor))
    }

    /// `def` identifier `(` [params] `)` `:` body
    pub(crate) fn function_def(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::FunctionDef;

        let (keyword, cursor) = cursor.expect(TokenKind::Def, construct)?;
        let (name, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (params, cursor) = self.operand_list(cursor, PARAMS, construct, "parameter", true)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, construct)?;

        let stmt = Stmt::FunctionDef {
            name: name.lexeme.clone(),
            params,
        };
        Ok(Parsed::open(stmt, keyword.line, cursor, construct))
    }

    /// `function_call` identifier `(` [params] `)` `:` body
    pub(crate) fn function_call(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::FunctionCall;

        let (keyword, cursor) = cursor.expect(TokenKind::FunctionCall, construct)?;
        let (name, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (params, cursor) = self.operand_list(cursor, PARAMS, construct, "parameter", true)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, construct)?;

        let stmt = Stmt::FunctionCall {
            name: name.lexeme.clone(),
            params,
        };
        Ok(Parsed::open(stmt, keyword.line, cursor, construct))
    }

    /// `return` [value | operation], then a line break and a body.
    ///
    /// A return with nothing to give back is bare and has no body. That is
    /// the case when a `newline` token follows it, when the next token sits
    /// on a later line, or when the next token cannot start a value.
    pub(crate) fn return_statement(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::Return;

        let (keyword, cursor) = cursor.expect(TokenKind::Return, construct)?;

        let cursor = match cursor.current() {
            Some(next) if next.kind == TokenKind::Newline => {
                return Ok(Parsed::leaf(Stmt::Return, keyword.line, cursor.advance()));
            }
            Some(next) if next.line > keyword.line => {
                return Ok(Parsed::leaf(Stmt::Return, keyword.line, cursor));
            }
            Some(next) if RETURN_VALUES.contains(&next.kind) => {
                let (_, cursor) = self.operand(cursor, RETURN_VALUES, construct, "return value")?;
                cursor
            }
            Some(next) if next.kind.is_word_operator() => self.operation(cursor, construct)?,
            _ => return Ok(Parsed::leaf(Stmt::Return, keyword.line, cursor)),
        };

        let cursor = self.line_break(cursor, construct)?;
        Ok(Parsed::open(Stmt::Return, keyword.line, cursor, construct))
    }

    /// (`add` | `sub` | `mul` | `div` | `mod`) value `,` value
    pub(crate) fn arithmetic(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let line = cursor.peek(Construct::Arithmetic)?.line;
        let cursor = self.operation(cursor, Construct::Arithmetic)?;
        Ok(Parsed::leaf(Stmt::Arithmetic, line, cursor))
    }

    /// `class` identifier `:` (constructor | field-init) body
    ///
    /// The program loop reads the branch through [`Parser::class_branch`]
    /// before the body.
    pub(crate) fn class_def(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::Class;

        let (keyword, cursor) = cursor.expect(TokenKind::Class, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, construct)?;

        Ok(Parsed::open(Stmt::Class, keyword.line, cursor, construct))
    }

    /// The first member of a class, chosen by its first token: `def` starts
    /// the constructor and `self` starts a field init.
    pub(crate) fn class_branch(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let cursor = cursor.skip_newlines();
        let next = cursor.peek(Construct::Class)?;

        match next.kind {
            TokenKind::Def => self.constructor(cursor),
            TokenKind::SelfKw => self.field_init(cursor),
            _ => Err(ParseError::syntax(
                Construct::Class,
                "`def` or `self`",
                next.lexeme.as_str(),
                next.line,
            )),
        }
    }

    /// `def` `__init__` `(` [params, `self` allowed] `)` `:` body
    pub(crate) fn constructor(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::Constructor;

        let (keyword, cursor) = cursor.expect(TokenKind::Def, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Init, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (params, cursor) =
            self.operand_list(cursor, CONSTRUCTOR_PARAMS, construct, "parameter", true)?;
        let (_, cursor) = cursor.expect(TokenKind::Colon, construct)?;

        let stmt = Stmt::Constructor { params };
        Ok(Parsed::open(stmt, keyword.line, cursor, construct))
    }

    /// `self` `.` identifier `=` identifier [`:`]
    pub(crate) fn field_init(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::FieldInit;

        let (keyword, cursor) = cursor.expect(TokenKind::SelfKw, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Dot, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Assign, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let cursor = cursor.accept(TokenKind::Colon);

        Ok(Parsed::leaf(Stmt::FieldInit, keyword.line, cursor))
    }

    /// `object_call` object `=` method `(` [arguments] `)`
    pub(crate) fn object_call(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let construct = Construct::ObjectCall;

        let (keyword, cursor) = cursor.expect(TokenKind::ObjectCall, construct)?;
        let (object, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::Assign, construct)?;
        let (method, cursor) = cursor.expect(TokenKind::Identifier, construct)?;
        let (_, cursor) = cursor.expect(TokenKind::LParen, construct)?;
        let (arguments, cursor) =
            self.operand_list(cursor, OBJECT_ARGUMENTS, construct, "argument", true)?;

        let stmt = Stmt::ObjectCall {
            object: object.lexeme.clone(),
            method: method.lexeme.clone(),
            arguments,
        };
        Ok(Parsed::leaf(stmt, keyword.line, cursor))
    }

    /// The terminal keyword.
    pub(crate) fn end(&self, cursor: Cursor<'t>) -> ParseResult<'t> {
        let (keyword, cursor) = cursor.expect(TokenKind::End, Construct::End)?;
        Ok(Parsed::leaf(Stmt::End, keyword.line, cursor))
    }
}
