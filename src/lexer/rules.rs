/*
 * ==========================================================================
 * KITTEN - Small Steps, Sharp Claws
 * ==========================================================================
 *
 * File:      rules.rs
 * Purpose:   The priority-ordered pattern table that drives the scanner.
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

use crate::lexer::token::{TokenClass, TokenKind};
use regex::Regex;
use std::sync::LazyLock;

use crate::lexer::token::TokenClass::{
    Datatype, Delimiter, Identifier as IdentClass, Keyword, Literal, Operator, Separator,
};

/// One entry of the scanner's rule table.
///
/// A rule without a `kind` consumes input but emits no token.
#[derive(Debug)]
pub struct Rule {
    pub kind: Option<TokenKind>,
    pub class: Option<TokenClass>,
    pattern: Regex,
}

impl Rule {
    /// Length in bytes of the match at the very start of `text`, if any.
    ///
    /// Empty matches never count, so every applied rule makes progress.
    pub fn match_len(&self, text: &str) -> Option<usize> {
        self.pattern
            .find(text)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }
}

/// Pattern, token type, class tag.
///
/// Order is precedence. The first rule matching at the cursor wins, so:
/// - two-character comparisons come before `<` and `>`
/// - `++` / `--` come before `+` / `-`
/// - every reserved word comes before the identifier rule
/// - the trailing-sign numeral comes before the signed decimal, and the
///   plain integer comes after both
const RULE_TABLE: &[(&str, Option<TokenKind>, Option<TokenClass>)] = &[
    (r"<=", Some(TokenKind::LessEq), Some(Operator)),
    (r">=", Some(TokenKind::GtEq), Some(Operator)),
    (r"==", Some(TokenKind::Eq), Some(Operator)),
    (r"!=", Some(TokenKind::NotEq), Some(Operator)),
    (r"<", Some(TokenKind::Less), Some(Operator)),
    (r">", Some(TokenKind::Gt), Some(Operator)),
    (r"\n", Some(TokenKind::Newline), Some(Separator)),
    (r"\t", Some(TokenKind::Tab), Some(Separator)),
    (r"\bend\b", Some(TokenKind::End), Some(Keyword)),
    (r"\badd\b", Some(TokenKind::Add), Some(Operator)),
    (r"\bsub\b", Some(TokenKind::Sub), Some(Operator)),
    (r"\bmul\b", Some(TokenKind::Mul), Some(Operator)),
    (r"\bdiv\b", Some(TokenKind::Div), Some(Operator)),
    (r"\bmod\b", Some(TokenKind::Mod), Some(Operator)),
    (r":", Some(TokenKind::Colon), Some(Separator)),
    (r"\bint\b", Some(TokenKind::Int), Some(Datatype)),
    (r"\bfloat\b", Some(TokenKind::Float), Some(Datatype)),
    (r"\bbool\b", Some(TokenKind::Bool), Some(Datatype)),
    (r"\bif\b", Some(TokenKind::If), None),
    (r"\belif\b", Some(TokenKind::Elif), None),
    (r#"""#, Some(TokenKind::DoubleQuote), Some(Delimiter)),
    (r"\belse\b", Some(TokenKind::Else), None),
    (r"\bwhile\b", Some(TokenKind::While), None),
    (r"\bfor\b", Some(TokenKind::For), None),
    (r"\breturn\b", Some(TokenKind::Return), None),
    (r"\bdef\b", Some(TokenKind::Def), None),
    (r"\bthis\.", Some(TokenKind::This), None),
    (r"\bfunction_call\b", Some(TokenKind::FunctionCall), None),
    (r"\bobject_call\b", Some(TokenKind::ObjectCall), None),
    (r"\bprint\b", Some(TokenKind::Print), None),
    (r"\binput\b", Some(TokenKind::Input), None),
    (r"\bself\b", Some(TokenKind::SelfKw), None),
    (r"\bin\b", Some(TokenKind::In), None),
    (r"\brange\b", Some(TokenKind::Range), None),
    (r"\bclass\b", Some(TokenKind::Class), None),
    (r"\b__init__\b", Some(TokenKind::Init), None),
    (r"\+\+", Some(TokenKind::Inc), None),
    (r"--", Some(TokenKind::Dec), None),
    (r"\b(?:true|false)\b", Some(TokenKind::Boolean), Some(Literal)),
    (r"[A-Za-z_][A-Za-z0-9_]*", Some(TokenKind::Identifier), Some(IdentClass)),
    (r"[0-9]+[+-]", Some(TokenKind::Numeral), Some(Literal)),
    (r"[+-]?[0-9]+\.[0-9]+", Some(TokenKind::FloatNumeral), Some(Literal)),
    (r"[0-9]+", Some(TokenKind::Numeral), Some(Literal)),
    (r"\+", Some(TokenKind::Plus), Some(Operator)),
    (r"-", Some(TokenKind::Minus), Some(Operator)),
    (r"\*", Some(TokenKind::Star), Some(Operator)),
    (r"/", Some(TokenKind::Slash), Some(Operator)),
    (r"%", Some(TokenKind::Percent), Some(Operator)),
    (r"=", Some(TokenKind::Assign), Some(Operator)),
    (r"\(", Some(TokenKind::LParen), Some(Separator)),
    (r"\)", Some(TokenKind::RParen), Some(Separator)),
    (r"\{", Some(TokenKind::LBrace), Some(Separator)),
    (r"\}", Some(TokenKind::RBrace), Some(Separator)),
    (r"\[", Some(TokenKind::LBracket), Some(Separator)),
    (r"\]", Some(TokenKind::RBracket), Some(Separator)),
    (r",", Some(TokenKind::Comma), Some(Separator)),
    (r"'", Some(TokenKind::Apostrophe), Some(Delimiter)),
    (r"\.", Some(TokenKind::Dot), Some(Delimiter)),
    (r"\s+", None, None),
];

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|(pattern, kind, class)| Rule {
            kind: *kind,
            class: *class,
            pattern: Regex::new(&format!("^(?:{pattern})"))
                .expect("scanner rule table contains an invalid pattern"),
        })
        .collect()
});

/// The compiled rule table, in priority order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Finds the first rule that matches at the start of `text`.
///
/// Returns the rule together with the byte length of its match.
pub fn first_match(text: &str) -> Option<(&'static Rule, usize)> {
    rules()
        .iter()
        .find_map(|rule| rule.match_len(text).map(|len| (rule, len)))
}
