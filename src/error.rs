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
use crate::parser::dispatch::Construct;
use serde::Serialize;
use std::fmt;

/// Hint attached to every missing-terminator diagnostic.
pub const MISSING_END_HELP: &str = "make sure the program ends with `end`";

/// A lexical problem. Both kinds are recoverable: the rest of the line is
/// dropped and scanning resumes on the next line.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LexError {
    #[error("invalid character `{character}`")]
    InvalidCharacter { character: char, line: usize },

    #[error("invalid string literal {literal}")]
    InvalidStringLiteral { literal: String, line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::InvalidCharacter { line, .. }
            | LexError::InvalidStringLiteral { line, .. } => *line,
        }
    }
}

/// A syntactic failure. Never recovered: it unwinds to the parse entry point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid {construct}: expected {expected}, found `{found}`")]
    Syntax {
        construct: Construct,
        expected: String,
        found: String,
        line: usize,
    },

    #[error("no statement begins with `{lexeme}` ({kind})")]
    NoRule {
        kind: TokenKind,
        lexeme: String,
        line: usize,
    },

    #[error("unexpected end of input while parsing {construct}")]
    UnexpectedEnd {
        construct: Construct,
        line: Option<usize>,
    },
}

impl ParseError {
    pub fn syntax(
        construct: Construct,
        expected: impl Into<String>,
        found: impl Into<String>,
        line: usize,
    ) -> Self {
        ParseError::Syntax {
            construct,
            expected: expected.into(),
            found: found.into(),
            line,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line, .. } | ParseError::NoRule { line, .. } => Some(*line),
            ParseError::UnexpectedEnd { line, .. } => *line,
        }
    }

    /// The construct that was under parse, when one is known.
    pub fn construct(&self) -> Option<Construct> {
        match self {
            ParseError::Syntax { construct, .. } | ParseError::UnexpectedEnd { construct, .. } => {
                Some(*construct)
            }
            ParseError::NoRule { .. } => None,
        }
    }
}

/// The closed set of diagnostic kinds an external reporter can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    InvalidCharacter,
    InvalidStringLiteral,
    SyntaxError,
    MissingTerminator,
}

impl DiagnosticKind {
    /// Stable error code (L0001, P0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidCharacter => "L0001",
            DiagnosticKind::InvalidStringLiteral => "L0002",
            DiagnosticKind::SyntaxError => "P0001",
            DiagnosticKind::MissingTerminator => "P0002",
        }
    }
}

/// Reporter-facing description of one failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,

    /// Stable error code, derived from `kind`
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// 1-based source line, when one is known
    pub line: Option<usize>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl Diagnostic {
    /// Generic constructor
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, line: Option<usize>) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: message.into(),
            line,
            help: None,
        }
    }

    /// Attach a help message to the diagnostic (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        let kind = match error {
            LexError::InvalidCharacter { .. } => DiagnosticKind::InvalidCharacter,
            LexError::InvalidStringLiteral { .. } => DiagnosticKind::InvalidStringLiteral,
        };
        Diagnostic::new(kind, error.to_string(), Some(error.line()))
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        Diagnostic::from(&error)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        match &error {
            ParseError::UnexpectedEnd { .. } => {
                Diagnostic::new(DiagnosticKind::MissingTerminator, error.to_string(), error.line())
                    .with_help(MISSING_END_HELP)
            }
            ParseError::Syntax { .. } | ParseError::NoRule { .. } => {
                Diagnostic::new(DiagnosticKind::SyntaxError, error.to_string(), error.line())
            }
        }
    }
}
