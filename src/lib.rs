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

//! KITTEN front end: a line-oriented scanner and a recursive-descent
//! syntax checker for the KITTEN teaching language.
//!
//! ```text
//! Source → Lexer → Tokens + Symbols → Parser → Outcome
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;

pub use config::{Config, ConfigError};
pub use error::{Diagnostic, DiagnosticKind, LexError, ParseError};
pub use lexer::{tokenize, LexOutput};
pub use parser::{parse, Outcome, ParserOptions};

use serde::Serialize;

/// Everything one run of the pipeline produced.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub lexed: LexOutput,
    pub outcome: Outcome,
}

impl Analysis {
    /// Lexical diagnostics alone do not reject a program.
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }

    /// Lexical diagnostics first, then the parse rejection if any.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lexed
            .diagnostics
            .iter()
            .map(Diagnostic::from)
            .chain(self.outcome.diagnostic().cloned())
            .collect()
    }
}

/// Scans and parses `source`.
///
/// ```rust
/// let analysis = kitten::analyze("x = 5\nend", &kitten::Config::default());
/// assert!(analysis.is_accepted());
/// ```
pub fn analyze(source: &str, config: &Config) -> Analysis {
    let lexed = tokenize(source);
    let outcome = parse(&lexed.tokens, &config.parser);
    Analysis { lexed, outcome }
}
