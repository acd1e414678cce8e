/*
 * ==========================================================================
 * KITTEN - Small Steps, Sharp Claws
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token vocabulary shared by the KITTEN
 *            scanner and the syntax checker.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the KITTEN teaching language front end.
 *
 * KITTEN is dual-licensed under the terms of:
 *   - The MIT License
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

use serde::{Serialize, Serializer};
use std::fmt;

/// The **closed vocabulary** of token types understood by KITTEN.
///
/// Every rule in the scanner's pattern table produces one of these, and
/// every grammar rule in the parser dispatches or expects on them.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → Fragments
/// ```
///
/// Each variant serializes as its vocabulary name (see [`TokenKind::as_str`]),
/// which is the name external reporters see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /* ----------------------------- */
    /* RELATIONAL / EQUALITY         */
    /* ----------------------------- */
    Less,
    Gt,
    LessEq,
    GtEq,
    Eq,
    NotEq,

    /* ----------------------------- */
    /* SYMBOLIC OPERATORS            */
    /* ----------------------------- */
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,

    /* ----------------------------- */
    /* WORD OPERATORS                */
    /* ----------------------------- */
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    /* ----------------------------- */
    /* SEPARATORS                    */
    /* ----------------------------- */
    Newline,
    Tab,
    Colon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    /* ----------------------------- */
    /* DELIMITERS                    */
    /* ----------------------------- */
    DoubleQuote,
    Apostrophe,
    Dot,

    /* ----------------------------- */
    /* DATATYPES                     */
    /* ----------------------------- */
    Int,
    Float,
    Bool,

    /* ----------------------------- */
    /* LITERALS                      */
    /* ----------------------------- */
    Numeral,
    FloatNumeral,
    StringLiteral,
    Boolean,

    Identifier,

    /* ----------------------------- */
    /* KEYWORDS                      */
    /* ----------------------------- */
    While,
    For,
    If,
    Elif,
    Else,
    Def,
    Class,
    Init,
    SelfKw,
    This,
    In,
    Range,
    Print,
    Input,
    Return,
    FunctionCall,
    ObjectCall,
    Inc,
    Dec,
    End,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Less,
        TokenKind::Gt,
        TokenKind::LessEq,
        TokenKind::GtEq,
        TokenKind::Eq,
        TokenKind::NotEq,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Assign,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Newline,
        TokenKind::Tab,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::DoubleQuote,
        TokenKind::Apostrophe,
        TokenKind::Dot,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Bool,
        TokenKind::Numeral,
        TokenKind::FloatNumeral,
        TokenKind::StringLiteral,
        TokenKind::Boolean,
        TokenKind::Identifier,
        TokenKind::While,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Elif,
        TokenKind::Else,
        TokenKind::Def,
        TokenKind::Class,
        TokenKind::Init,
        TokenKind::SelfKw,
        TokenKind::This,
        TokenKind::In,
        TokenKind::Range,
        TokenKind::Print,
        TokenKind::Input,
        TokenKind::Return,
        TokenKind::FunctionCall,
        TokenKind::ObjectCall,
        TokenKind::Inc,
        TokenKind::Dec,
        TokenKind::End,
    ];

    /// Returns the vocabulary name of this token type.
    ///
    /// These names are part of the external contract: they appear in
    /// serialized token streams and in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Less => "less",
            TokenKind::Gt => "gt",
            TokenKind::LessEq => "lesseq",
            TokenKind::GtEq => "gteq",
            TokenKind::Eq => "eq",
            TokenKind::NotEq => "noteq",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Star => "star",
            TokenKind::Slash => "slash",
            TokenKind::Percent => "percent",
            TokenKind::Assign => "assignment_operator",
            TokenKind::Add => "add",
            TokenKind::Sub => "sub",
            TokenKind::Mul => "mul",
            TokenKind::Div => "div",
            TokenKind::Mod => "mod",
            TokenKind::Newline => "newline",
            TokenKind::Tab => "tab",
            TokenKind::Colon => "colon",
            TokenKind::Comma => "comma",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::LBrace => "l_brace",
            TokenKind::RBrace => "r_brace",
            TokenKind::LBracket => "l_bracket",
            TokenKind::RBracket => "r_bracket",
            TokenKind::DoubleQuote => "double quote",
            TokenKind::Apostrophe => "apostrophe",
            TokenKind::Dot => "dot",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Bool => "bool",
            TokenKind::Numeral => "numeral",
            TokenKind::FloatNumeral => "flt_numeral",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::Boolean => "boolean",
            TokenKind::Identifier => "identifier",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::Def => "def",
            TokenKind::Class => "class",
            TokenKind::Init => "__init__",
            TokenKind::SelfKw => "self",
            TokenKind::This => "this.",
            TokenKind::In => "in",
            TokenKind::Range => "range",
            TokenKind::Print => "print",
            TokenKind::Input => "input",
            TokenKind::Return => "return",
            TokenKind::FunctionCall => "function_call",
            TokenKind::ObjectCall => "object_call",
            TokenKind::Inc => "inc",
            TokenKind::Dec => "dec",
            TokenKind::End => "end",
        }
    }

    /// Short human wording for "expected …" messages.
    ///
    /// Punctuation and keywords are shown as source text, the remaining
    /// categories by name.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Less => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LessEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Eq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Assign => "`=`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::DoubleQuote => "`\"`",
            TokenKind::Apostrophe => "`'`",
            TokenKind::Dot => "`.`",
            TokenKind::Inc => "`++`",
            TokenKind::Dec => "`--`",
            TokenKind::Newline => "newline",
            TokenKind::Tab => "tab",
            TokenKind::Numeral => "numeral",
            TokenKind::FloatNumeral => "float numeral",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Boolean => "boolean",
            TokenKind::Identifier => "identifier",
            TokenKind::Add => "`add`",
            TokenKind::Sub => "`sub`",
            TokenKind::Mul => "`mul`",
            TokenKind::Div => "`div`",
            TokenKind::Mod => "`mod`",
            TokenKind::Int => "`int`",
            TokenKind::Float => "`float`",
            TokenKind::Bool => "`bool`",
            TokenKind::While => "`while`",
            TokenKind::For => "`for`",
            TokenKind::If => "`if`",
            TokenKind::Elif => "`elif`",
            TokenKind::Else => "`else`",
            TokenKind::Def => "`def`",
            TokenKind::Class => "`class`",
            TokenKind::Init => "`__init__`",
            TokenKind::SelfKw => "`self`",
            TokenKind::This => "`this.`",
            TokenKind::In => "`in`",
            TokenKind::Range => "`range`",
            TokenKind::Print => "`print`",
            TokenKind::Input => "`input`",
            TokenKind::Return => "`return`",
            TokenKind::FunctionCall => "`function_call`",
            TokenKind::ObjectCall => "`object_call`",
            TokenKind::End => "`end`",
        }
    }

    /// True for the two quote delimiters that open quoted mode.
    pub fn is_quote(&self) -> bool {
        matches!(self, TokenKind::DoubleQuote | TokenKind::Apostrophe)
    }

    /// True for the word arithmetic operators (`add`, `sub`, `mul`, `div`, `mod`).
    pub fn is_word_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div | TokenKind::Mod
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Coarse category attached to a token by the rule that produced it.
///
/// Many keywords carry no class at all, so tokens hold an
/// `Option<TokenClass>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Keyword,
    Operator,
    Separator,
    Delimiter,
    Literal,
    Identifier,
    Datatype,
}

/// Represents a **single lexical token** produced by the KITTEN lexer.
///
/// # Example Tokens
/// ```text
/// while  →  { id: 0, kind: while,       class: -,          line: 1 }
/// count  →  { id: 1, kind: identifier,  class: identifier, line: 1 }
/// <=     →  { id: 2, kind: lesseq,      class: operator,   line: 1 }
/// ```
///
/// Tokens are created once by the lexer and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// Emission order, equal to the token's position in the stream.
    pub id: usize,

    /// The exact source text that produced this token.
    ///
    /// For string literals this is the raw content followed by the
    /// closing quote character.
    pub lexeme: String,

    /// The token type.
    pub kind: TokenKind,

    /// Coarse category, absent for most keywords.
    pub class: Option<TokenClass>,

    /// The 1-based line number where this token appeared.
    pub line: usize,
}

impl Token {
    pub fn new(
        id: usize,
        lexeme: impl Into<String>,
        kind: TokenKind,
        class: Option<TokenClass>,
        line: usize,
    ) -> Self {
        Self {
            id,
            lexeme: lexeme.into(),
            kind,
            class,
            line,
        }
    }

    /// Returns the literal text of the token.
    ///
    /// String literal lexemes end with their closing quote; that quote is
    /// dropped here. Escapes are left exactly as written. Every other token
    /// returns its lexeme unchanged.
    pub fn literal_text(&self) -> &str {
        if self.kind != TokenKind::StringLiteral {
            return &self.lexeme;
        }

        self.lexeme
            .strip_suffix(|c: char| c == '"' || c == '\'')
            .unwrap_or(&self.lexeme)
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// Only the lexeme is printed: in diagnostics users care about what
    /// they wrote, not the token's internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_names_are_unique() {
        let mut names: Vec<&str> = TokenKind::ALL.iter().map(|k| k.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_kind_serializes_as_vocabulary_name() {
        let json = serde_json::to_string(&TokenKind::FloatNumeral).unwrap();
        assert_eq!(json, "\"flt_numeral\"");
        let json = serde_json::to_string(&TokenKind::DoubleQuote).unwrap();
        assert_eq!(json, "\"double quote\"");
    }

    #[test]
    fn test_token_serialization() {
        let token = Token::new(3, "<=", TokenKind::LessEq, Some(TokenClass::Operator), 2);
        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["kind"], "lesseq");
        assert_eq!(value["class"], "operator");
        assert_eq!(value["line"], 2);

        let keyword = Token::new(0, "while", TokenKind::While, None, 1);
        let value = serde_json::to_value(&keyword).unwrap();
        assert!(value["class"].is_null());
    }

    #[test]
    fn test_literal_text_drops_closing_quote() {
        let literal = Some(TokenClass::Literal);
        let token = Token::new(1, "hello world\"", TokenKind::StringLiteral, literal, 1);
        assert_eq!(token.literal_text(), "hello world");

        let single = Token::new(1, "it\\'s'", TokenKind::StringLiteral, literal, 1);
        assert_eq!(single.literal_text(), "it\\'s");

        let ident = Token::new(0, "x", TokenKind::Identifier, Some(TokenClass::Identifier), 1);
        assert_eq!(ident.literal_text(), "x");
    }

    #[test]
    fn test_display_prints_lexeme_only() {
        let token = Token::new(7, "count", TokenKind::Identifier, Some(TokenClass::Identifier), 4);
        assert_eq!(token.to_string(), "count");
    }

    #[test]
    fn test_quote_and_word_operator_predicates() {
        assert!(TokenKind::DoubleQuote.is_quote());
        assert!(TokenKind::Apostrophe.is_quote());
        assert!(!TokenKind::StringLiteral.is_quote());
        assert!(TokenKind::Mod.is_word_operator());
        assert!(!TokenKind::Percent.is_word_operator());
    }
}
