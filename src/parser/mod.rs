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

/// Core parser orchestration:
/// - Owns the `Parser` struct and `ParserOptions`
/// - Statement dispatch and body handling
/// - Exposes the main `parse(tokens, options)` entry point
#[allow(clippy::module_inception)]
pub mod parser;

/// The value-type read position threaded through every rule.
pub mod cursor;

/// Token type → construct → rule.
pub mod dispatch;

/// Statement-level rules:
/// - assignment / while / for / if / elif / else
/// - print / increment / return / arithmetic
/// - def / function_call / class / object_call / end
pub mod statements;

/// Sub-rules used inside statements:
/// - assignment right-hand sides
/// - conditions
/// - word-operator arithmetic
pub mod expressions;

/// Shared parser helpers:
/// - value operands and operand lists
/// - string literals
/// - line breaks
pub mod helpers;

pub use cursor::Cursor;
pub use dispatch::Construct;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{parse, Outcome, ParserOptions};
