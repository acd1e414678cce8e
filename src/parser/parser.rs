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

use crate::ast::{Node, Program, Stmt};
use crate::error::{Diagnostic, ParseError};
use crate::lexer::token::Token;
use crate::parser::cursor::Cursor;
use crate::parser::dispatch::{rule_for, Construct};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Switches that change what the parser accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserOptions {
    /// Let a body run on for several statements instead of exactly one.
    pub multi_statement_blocks: bool,
}

/// What a statement rule hands back.
///
/// A rule only reads its own tokens. When the construct takes a body,
/// `opens` names the owner and the program loop parses that body next.
#[derive(Debug, Clone)]
pub struct Parsed<'t> {
    pub cursor: Cursor<'t>,
    pub stmt: Stmt,
    pub line: usize,
    pub opens: Option<Construct>,
}

impl<'t> Parsed<'t> {
    /// A fragment without a body.
    pub fn leaf(stmt: Stmt, line: usize, cursor: Cursor<'t>) -> Self {
        Self {
            cursor,
            stmt,
            line,
            opens: None,
        }
    }

    /// A fragment whose body, owned by `owner`, starts at `cursor`.
    pub fn open(stmt: Stmt, line: usize, cursor: Cursor<'t>, owner: Construct) -> Self {
        Self {
            cursor,
            stmt,
            line,
            opens: Some(owner),
        }
    }
}

pub type ParseResult<'t> = Result<Parsed<'t>, ParseError>;

/// A node whose body is still being parsed.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    owner: Construct,
    statements: usize,
    /// A class reads its constructor or field-init branch before its body.
    branch_pending: bool,
}

/// The single terminal result of a parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Accepted(Program),
    Rejected(Diagnostic),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn program(&self) -> Option<&Program> {
        match self {
            Outcome::Accepted(program) => Some(program),
            Outcome::Rejected(_) => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(diagnostic) => Some(diagnostic),
        }
    }
}

/// The core KITTEN recursive-descent parser.
///
/// This structure holds:
/// - The full token stream produced by the lexer (read-only)
/// - The options that shape block parsing
///
/// The read position is not stored here; it travels through the rules as a
/// [`Cursor`]. The grammar itself lives in extension modules
/// (`statements`, `expressions`, `helpers`) as additional `impl Parser`
/// blocks.
pub struct Parser<'t> {
    tokens: &'t [Token],
    options: ParserOptions,
}

/// Public entry point for the KITTEN parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → Outcome
/// ```
///
/// # Example
/// ```rust
/// use kitten::lexer::tokenize;
/// use kitten::parser::{parse, ParserOptions};
///
/// let lexed = tokenize("x = 5\nend");
/// let outcome = parse(&lexed.tokens, &ParserOptions::default());
/// assert!(outcome.is_accepted());
/// ```
pub fn parse(tokens: &[Token], options: &ParserOptions) -> Outcome {
    Parser::new(tokens, *options).parse()
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], options: ParserOptions) -> Self {
        Self { tokens, options }
    }

    /// Parses the whole token stream and reports exactly one outcome.
    ///
    /// The first failure wins; there is no resynchronization.
    pub fn parse(&self) -> Outcome {
        match self.program(Cursor::new(self.tokens)) {
            Ok(program) => {
                debug!(nodes = program.nodes.len(), "program accepted");
                Outcome::Accepted(program)
            }
            Err(error) => {
                let diagnostic = Diagnostic::from(error);
                debug!(code = diagnostic.code, "program rejected: {}", diagnostic.message);
                Outcome::Rejected(diagnostic)
            }
        }
    }

    /// Dispatches statements from the start of the stream until one of them
    /// is `end`. Tokens after `end` are never read.
    ///
    /// Open bodies are kept on an explicit stack. Each dispatched statement
    /// belongs to the innermost open body. By default a body is exactly one
    /// statement; with `multi_statement_blocks` it keeps going until `end`
    /// is reached, the tokens run out, or the next token starts no
    /// statement. Newlines before a body and after a closed body are
    /// skipped.
    fn program(&self, cursor: Cursor<'t>) -> Result<Program, ParseError> {
        let mut cursor = cursor;
        let mut nodes: Vec<Node> = Vec::new();
        let mut open: Vec<Frame> = Vec::new();

        loop {
            let (parent, parsed) = match open.last_mut() {
                None => (None, self.statement(cursor, Construct::Program)?),
                Some(frame) if frame.branch_pending => {
                    frame.branch_pending = false;
                    (Some(frame.node), self.class_branch(cursor)?)
                }
                Some(frame) => {
                    let next = cursor.skip_newlines();
                    let wants_more = frame.statements == 0
                        || (self.options.multi_statement_blocks && starts_statement(next));
                    if !wants_more {
                        open.pop();
                        cursor = next;
                        continue;
                    }

                    frame.statements += 1;
                    (Some(frame.node), self.statement(next, frame.owner)?)
                }
            };

            cursor = parsed.cursor;
            let index = nodes.len();
            let finished = parsed.stmt == Stmt::End;
            nodes.push(Node::new(parsed.stmt, parsed.line, parent));

            if finished {
                return Ok(Program { nodes });
            }

            if let Some(owner) = parsed.opens {
                open.push(Frame {
                    node: index,
                    owner,
                    statements: 0,
                    branch_pending: owner == Construct::Class,
                });
            }
        }
    }

    /// Parses one statement chosen by the current token's type.
    ///
    /// `within` names the construct that asked for the statement, for the
    /// missing-terminator diagnostic when the tokens have run out.
    pub(crate) fn statement(&self, cursor: Cursor<'t>, within: Construct) -> ParseResult<'t> {
        let token = cursor.peek(within)?;

        let Some((construct, rule)) = rule_for(token.kind) else {
            return Err(ParseError::NoRule {
                kind: token.kind,
                lexeme: token.lexeme.clone(),
                line: token.line,
            });
        };

        debug!(
            %construct,
            position = cursor.position(),
            line = token.line,
            "dispatch"
        );

        rule(self, cursor)
    }
}

fn starts_statement(cursor: Cursor<'_>) -> bool {
    cursor
        .current()
        .is_some_and(|token| Construct::for_token(token.kind).is_some())
}
