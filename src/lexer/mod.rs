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

/// The line scanner:
/// - normal mode (rule table)
/// - quoted mode (string literals)
#[allow(clippy::module_inception)]
pub mod lexer;

/// Priority-ordered pattern table.
pub mod rules;

/// First-seen symbol table.
pub mod symbols;

/// Token vocabulary and the `Token` record.
pub mod token;

pub use lexer::{LexOutput, Lexer};
pub use symbols::{SymbolTable, SymbolType};
pub use token::{Token, TokenClass, TokenKind};

/// Scans `source` in one call.
///
/// ```rust
/// let output = kitten::lexer::tokenize("x = 5\nend");
/// assert_eq!(output.tokens.len(), 4);
/// ```
pub fn tokenize(source: &str) -> LexOutput {
    Lexer::new(source).scan_tokens()
}
