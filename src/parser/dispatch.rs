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

use crate::lexer::token::TokenKind;
use crate::parser::cursor::Cursor;
use crate::parser::parser::{ParseResult, Parser};
use std::fmt;

/// A named grammar form. Diagnostics say which one was under parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Program,
    Assignment,
    Expression,
    While,
    For,
    If,
    Elif,
    Else,
    Condition,
    Print,
    IncDec,
    FunctionDef,
    FunctionCall,
    Return,
    Arithmetic,
    Class,
    Constructor,
    FieldInit,
    ObjectCall,
    End,
}

impl Construct {
    pub fn name(&self) -> &'static str {
        match self {
            Construct::Program => "program",
            Construct::Assignment => "assignment statement",
            Construct::Expression => "expression",
            Construct::While => "while loop",
            Construct::For => "for loop",
            Construct::If => "if condition",
            Construct::Elif => "elif condition",
            Construct::Else => "else condition",
            Construct::Condition => "condition",
            Construct::Print => "print statement",
            Construct::IncDec => "increment/decrement statement",
            Construct::FunctionDef => "function definition",
            Construct::FunctionCall => "function call",
            Construct::Return => "return statement",
            Construct::Arithmetic => "arithmetic operation",
            Construct::Class => "class definition",
            Construct::Constructor => "constructor",
            Construct::FieldInit => "field initializer",
            Construct::ObjectCall => "object call",
            Construct::End => "end",
        }
    }

    /// The construct a statement starting with `kind` is parsed as.
    pub fn for_token(kind: TokenKind) -> Option<Construct> {
        rule_for(kind).map(|(construct, _)| construct)
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A statement rule: consumes tokens from the cursor it is given and
/// returns the advanced cursor with the node it built.
pub type Rule<'t> = fn(&Parser<'t>, Cursor<'t>) -> ParseResult<'t>;

/// The statement-level dispatch table.
///
/// Every token type is listed so that a new one cannot be added without
/// deciding whether it starts a statement.
pub fn rule_for<'t>(kind: TokenKind) -> Option<(Construct, Rule<'t>)> {
    use TokenKind::*;

    let entry: (Construct, Rule<'t>) = match kind {
        Identifier => (Construct::Assignment, Parser::assignment),
        While => (Construct::While, Parser::while_loop),
        For => (Construct::For, Parser::for_loop),
        If => (Construct::If, Parser::if_statement),
        Elif => (Construct::Elif, Parser::elif_statement),
        Else => (Construct::Else, Parser::else_statement),
        Print => (Construct::Print, Parser::print_statement),
        Inc | Dec => (Construct::IncDec, Parser::inc_dec),
        Def => (Construct::FunctionDef, Parser::function_def),
        FunctionCall => (Construct::FunctionCall, Parser::function_call),
        Return => (Construct::Return, Parser::return_statement),
        Add | Sub | Mul | Div | Mod => (Construct::Arithmetic, Parser::arithmetic),
        Class => (Construct::Class, Parser::class_def),
        SelfKw => (Construct::FieldInit, Parser::field_init),
        ObjectCall => (Construct::ObjectCall, Parser::object_call),
        End => (Construct::End, Parser::end),

        Less | Gt | LessEq | GtEq | Eq | NotEq => return None,
        Plus | Minus | Star | Slash | Percent | Assign => return None,
        Newline | Tab | Colon | Comma => return None,
        LParen | RParen | LBrace | RBrace | LBracket | RBracket => return None,
        DoubleQuote | Apostrophe | Dot => return None,
        Int | Float | Bool => return None,
        Numeral | FloatNumeral | StringLiteral | Boolean => return None,
        Init | This | In | Range | Input => return None,
    };

    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_starters() {
        assert_eq!(Construct::for_token(TokenKind::Identifier), Some(Construct::Assignment));
        assert_eq!(Construct::for_token(TokenKind::Dec), Some(Construct::IncDec));
        assert_eq!(Construct::for_token(TokenKind::Mod), Some(Construct::Arithmetic));
        assert_eq!(Construct::for_token(TokenKind::SelfKw), Some(Construct::FieldInit));
        assert_eq!(Construct::for_token(TokenKind::End), Some(Construct::End));
    }

    #[test]
    fn test_tokens_without_a_rule() {
        for kind in [TokenKind::Numeral, TokenKind::RParen, TokenKind::Init, TokenKind::Newline] {
            assert_eq!(Construct::for_token(kind), None, "{kind} should not start a statement");
        }
    }

    #[test]
    fn test_every_kind_is_decided() {
        let starters = TokenKind::ALL
            .iter()
            .filter(|kind| Construct::for_token(**kind).is_some())
            .count();
        assert_eq!(starters, 21);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Construct::Print.to_string(), "print statement");
        assert_eq!(Construct::Condition.to_string(), "condition");
    }
}
