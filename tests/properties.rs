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

use kitten::ast::{Comparator, Operand, Stmt};
use kitten::lexer::symbols::SymbolType;
use kitten::lexer::token::TokenKind;
use kitten::{analyze, tokenize, Config, DiagnosticKind, LexError, ParserOptions};

fn multi_statement() -> Config {
    Config {
        parser: ParserOptions {
            multi_statement_blocks: true,
        },
    }
}

#[test]
fn test_blank_input_yields_nothing() {
    for source in ["", "\n", "   \n\t\n  ", "\r\n\r\n"] {
        let lexed = tokenize(source);
        assert!(lexed.tokens.is_empty(), "tokens for {source:?}");
        assert!(lexed.diagnostics.is_empty(), "diagnostics for {source:?}");
        assert!(lexed.symbols.is_empty());
    }
}

#[test]
fn test_two_character_operators_are_single_tokens() {
    let cases = [
        ("<=", TokenKind::LessEq),
        (">=", TokenKind::GtEq),
        ("==", TokenKind::Eq),
        ("!=", TokenKind::NotEq),
    ];
    for (operator, kind) in cases {
        let lexed = tokenize(&format!("a {operator} b"));
        let kinds: Vec<TokenKind> = lexed.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Identifier, kind, TokenKind::Identifier]);
        assert_eq!(lexed.tokens[1].lexeme, operator);
    }
}

#[test]
fn test_repeated_identifier_has_one_symbol() {
    let lexed = tokenize("count = 1\nwhile count < 5:\n++count:\nprint(count)\nend");
    let occurrences = lexed.tokens.iter().filter(|t| t.lexeme == "count").count();
    assert_eq!(occurrences, 4);
    assert_eq!(lexed.symbols.get("count"), Some(SymbolType::Undefined));
    assert_eq!(lexed.symbols.iter().filter(|(name, _)| *name == "count").count(), 1);
}

#[test]
fn test_lexemes_reproduce_the_source() {
    let source = "print(\"hi there\", x)\nwhile a <= 10:\n  y = int(input('n?'))\nend";
    let lexed = tokenize(source);
    assert!(lexed.diagnostics.is_empty());

    let joined: String = lexed.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    let strip = |text: &str| text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(strip(&joined), strip(source));
}

#[test]
fn test_missing_end_is_a_missing_terminator() {
    let accepted = analyze("x = 5\nend", &Config::default());
    assert!(accepted.is_accepted());

    let rejected = analyze("x = 5", &Config::default());
    let diagnostic = rejected.outcome.diagnostic().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::MissingTerminator);
    assert_eq!(diagnostic.code, "P0002");
    assert_eq!(diagnostic.help.as_deref(), Some("make sure the program ends with `end`"));
}

#[test]
fn test_if_condition_fragment() {
    let analysis = analyze("if (a < b):\n    print(a)\nend", &Config::default());
    let program = analysis.outcome.program().unwrap();

    let Stmt::If { condition } = &program.nodes[0].stmt else {
        panic!("expected an if fragment");
    };
    assert_eq!(condition.left, Operand::Identifier("a".to_string()));
    assert_eq!(condition.comparator, Comparator::Less);
    assert_eq!(condition.right, Operand::Identifier("b".to_string()));
}

#[test]
fn test_print_trailing_comma_is_rejected() {
    let analysis = analyze("print(a, ) :", &Config::default());
    let diagnostic = analysis.outcome.diagnostic().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::SyntaxError);
    assert!(diagnostic.message.contains("print statement"), "{}", diagnostic.message);
}

#[test]
fn test_class_field_init_branch() {
    let analysis = analyze("class Cat:\nself.x = y\nend", &Config::default());
    let program = analysis.outcome.program().unwrap();
    assert_eq!(program.nodes[0].stmt, Stmt::Class);

    let (_, first_member) = program.body(0).next().unwrap();
    assert_eq!(first_member.stmt, Stmt::FieldInit);
    assert!(program
        .fragments()
        .iter()
        .all(|stmt| !matches!(stmt, Stmt::Constructor { .. })));
}

#[test]
fn test_unterminated_string_recovers_on_next_line() {
    let lexed = tokenize("abc \"unterminated\nx = 1\nend");
    assert_eq!(
        lexed.diagnostics,
        vec![LexError::InvalidStringLiteral {
            literal: "\"unterminated".to_string(),
            line: 1,
        }]
    );
    let later: Vec<&str> = lexed
        .tokens
        .iter()
        .filter(|t| t.line > 1)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert_eq!(later, vec!["x", "=", "1", "end"]);
}

#[test]
fn test_invalid_character_drops_the_rest_of_the_line() {
    let lexed = tokenize("a ; b");
    assert_eq!(
        lexed.diagnostics,
        vec![LexError::InvalidCharacter { character: ';', line: 1 }]
    );
    assert_eq!(lexed.tokens.len(), 1);
    assert_eq!(lexed.tokens[0].lexeme, "a");
}

#[test]
fn test_multi_statement_blocks_change_nesting_only() {
    let source = "while a < b:\n++i:\n--j:\nend";

    let single = analyze(source, &Config::default());
    let single = single.outcome.program().unwrap().clone();
    assert_eq!(single.body(0).count(), 1);
    assert_eq!(single.top_level().count(), 3);

    let multi = analyze(source, &multi_statement());
    let multi = multi.outcome.program().unwrap().clone();
    assert_eq!(multi.top_level().count(), 1);
    assert_eq!(multi.body(0).count(), 3);

    assert_eq!(single.fragments(), multi.fragments());
}
