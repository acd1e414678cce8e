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

use crate::error::LexError;
use crate::lexer::rules;
use crate::lexer::symbols::{SymbolTable, SymbolType};
use crate::lexer::token::{Token, TokenClass, TokenKind};
use serde::Serialize;
use tracing::{trace, warn};

/// Everything one scan produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,

    /// Lexical diagnostics, in the order they were found.
    pub diagnostics: Vec<LexError>,
}

/// Line-oriented KITTEN scanner.
///
/// The lexer walks the source one line at a time. Inside a line it either
/// applies the rule table (normal mode) or looks for the closing quote of a
/// string literal (quoted mode).
///
/// # Compiler Stage
/// This is the **entry point for lexical analysis**:
/// ```text
/// Source → Lexer → Tokens + Symbols → Parser
/// ```
pub struct Lexer<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    symbols: SymbolTable,
    diagnostics: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over raw source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            symbols: SymbolTable::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Lines are numbered from 1 and trimmed; blank lines are skipped
    /// - Lexical problems never stop the scan, they only drop the rest of
    ///   the offending line
    pub fn scan_tokens(mut self) -> LexOutput {
        for (index, raw) in self.source.split('\n').enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            self.scan_line(line, index + 1);
        }

        LexOutput {
            tokens: self.tokens,
            symbols: self.symbols,
            diagnostics: self.diagnostics,
        }
    }

    /// Scans one trimmed, non-blank line.
    fn scan_line(&mut self, text: &str, line: usize) {
        let mut rest = text;

        while !rest.is_empty() {
            let Some((rule, len)) = rules::first_match(rest) else {
                // Guarded by the loop condition and the trim below.
                let character = rest.chars().next().unwrap_or_default();
                self.report(LexError::InvalidCharacter { character, line });
                return;
            };

            let (lexeme, after) = rest.split_at(len);

            let Some(kind) = rule.kind else {
                rest = after.trim_start();
                continue;
            };

            self.emit(lexeme, kind, rule.class, line);
            self.symbols.add_symbol(lexeme, SymbolType::Undefined);

            if kind.is_quote() {
                // A quote rule always matches exactly one ASCII character.
                let quote = lexeme.chars().next().unwrap_or('"');
                match self.quoted(after, quote, line) {
                    Some(remaining) => rest = remaining.trim_start(),
                    None => return,
                }
            } else {
                rest = after.trim_start();
            }
        }
    }

    /// Quoted mode: looks for the closing, unescaped `quote` in `text`.
    ///
    /// On success the string literal is emitted and the text after the
    /// closing quote is returned. On failure the rest of the line is
    /// reported and `None` is returned.
    fn quoted<'a>(&mut self, text: &'a str, quote: char, line: usize) -> Option<&'a str> {
        let mut chars = text.char_indices();

        while let Some((offset, c)) = chars.next() {
            if c == '\\' {
                chars.next();
                continue;
            }

            if c == quote {
                let end = offset + c.len_utf8();
                self.emit(&text[..end], TokenKind::StringLiteral, Some(TokenClass::Literal), line);
                return Some(&text[end..]);
            }
        }

        self.report(LexError::InvalidStringLiteral {
            literal: format!("{quote}{text}"),
            line,
        });
        None
    }

    fn emit(&mut self, lexeme: &str, kind: TokenKind, class: Option<TokenClass>, line: usize) {
        let token = Token::new(self.tokens.len(), lexeme, kind, class, line);
        trace!(id = token.id, kind = %token.kind, lexeme = %token.lexeme, line, "token");
        self.tokens.push(token);
    }

    fn report(&mut self, error: LexError) {
        warn!(line = error.line(), "{}", error);
        self.diagnostics.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> LexOutput {
        Lexer::new(source).scan_tokens()
    }

    fn kinds(output: &LexOutput) -> Vec<TokenKind> {
        output.tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_assignment_line() {
        let output = scan("x = 5");
        assert_eq!(
            kinds(&output),
            vec![TokenKind::Identifier, TokenKind::Assign, TokenKind::Numeral]
        );
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_ids_follow_positions_and_lines_are_counted() {
        let output = scan("a = 1\n\n   \nb = 2\nend");
        for (position, token) in output.tokens.iter().enumerate() {
            assert_eq!(token.id, position);
        }
        let lines: Vec<usize> = output.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 4, 4, 4, 5]);
    }

    #[test]
    fn test_string_literal_folds_closing_quote() {
        let output = scan(r#"print("hi there")"#);
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Print,
                TokenKind::LParen,
                TokenKind::DoubleQuote,
                TokenKind::StringLiteral,
                TokenKind::RParen,
            ]
        );
        assert_eq!(output.tokens[3].lexeme, "hi there\"");
        assert_eq!(output.tokens[3].class, Some(TokenClass::Literal));
    }

    #[test]
    fn test_leading_space_inside_quotes_is_kept() {
        let output = scan("'  padded'");
        assert_eq!(output.tokens[1].lexeme, "  padded'");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let output = scan(r#""say \"hi\"" x"#);
        assert_eq!(output.tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(output.tokens[1].lexeme, r#"say \"hi\"""#);
        assert_eq!(output.tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_other_quote_does_not_close() {
        let output = scan(r#"'it"s'"#);
        assert_eq!(output.tokens[1].lexeme, "it\"s'");
    }

    #[test]
    fn test_empty_string_literal() {
        let output = scan(r#"x = """#);
        assert_eq!(output.tokens.last().map(|t| t.lexeme.as_str()), Some("\""));
        assert!(output.diagnostics.is_empty());
    }

    #[test]
    fn test_string_literals_are_not_symbols() {
        let output = scan(r#"print("abc")"#);
        assert!(output.symbols.contains("print"));
        assert!(output.symbols.contains("\""));
        assert!(!output.symbols.contains("abc\""));
    }

    #[test]
    fn test_every_matched_lexeme_is_registered() {
        let output = scan("while a < 10:");
        for lexeme in ["while", "a", "<", "10", ":"] {
            assert!(output.symbols.contains(lexeme), "missing {lexeme}");
        }
        assert_eq!(output.symbols.len(), 5);
    }

    #[test]
    fn test_unterminated_string_drops_the_line() {
        let output = scan("abc \"oops\nx = 1");
        assert_eq!(
            output.diagnostics,
            vec![LexError::InvalidStringLiteral {
                literal: "\"oops".to_string(),
                line: 1,
            }]
        );
        assert_eq!(
            kinds(&output),
            vec![
                TokenKind::Identifier,
                TokenKind::DoubleQuote,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Numeral,
            ]
        );
    }

    #[test]
    fn test_quoted_mode_ends_with_the_line() {
        let output = scan("'open\nclose'");
        assert_eq!(output.diagnostics.len(), 2);
        assert_eq!(output.diagnostics[1].line(), 2);
    }

    #[test]
    fn test_invalid_character_drops_rest_of_line() {
        let output = scan("a ; b\nc");
        assert_eq!(
            output.diagnostics,
            vec![LexError::InvalidCharacter { character: ';', line: 1 }]
        );
        let lexemes: Vec<&str> = output.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["a", "c"]);
    }

    #[test]
    fn test_non_ascii_invalid_character() {
        let output = scan("x = é");
        assert_eq!(
            output.diagnostics,
            vec![LexError::InvalidCharacter { character: 'é', line: 1 }]
        );
        assert_eq!(output.tokens.len(), 2);
    }

    #[test]
    fn test_carriage_returns_are_trimmed() {
        let output = scan("x = 1\r\nend\r\n");
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::End));
    }

    #[test]
    fn test_class_tags() {
        let output = scan("end while x");
        assert_eq!(output.tokens[0].class, Some(TokenClass::Keyword));
        assert_eq!(output.tokens[1].class, None);
        assert_eq!(output.tokens[2].class, Some(TokenClass::Identifier));
    }
}
