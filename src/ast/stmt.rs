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

use crate::ast::{Condition, Expr, Operand};
use crate::parser::dispatch::Construct;
use serde::Serialize;

/// The fragment a statement rule captured.
///
/// Constructs that capture nothing are unit variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "construct", rename_all = "snake_case")]
pub enum Stmt {
    /* ----------------------------- */
    /* ASSIGNMENT                    */
    /* ----------------------------- */
    Assignment {
        expression: Expr,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */
    While {
        condition: Condition,
    },
    For,
    If {
        condition: Condition,
    },
    Elif {
        condition: Condition,
    },
    Else,

    /* ----------------------------- */
    /* SIMPLE STATEMENTS             */
    /* ----------------------------- */
    Print,
    IncDec,
    Return,
    Arithmetic,

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */
    FunctionDef {
        name: String,
        params: Vec<Operand>,
    },
    FunctionCall {
        name: String,
        params: Vec<Operand>,
    },

    /* ----------------------------- */
    /* CLASSES                       */
    /* ----------------------------- */
    Class,
    Constructor {
        params: Vec<Operand>,
    },
    FieldInit,
    ObjectCall {
        object: String,
        method: String,
        arguments: Vec<Operand>,
    },

    /// The terminal `end` keyword.
    End,
}

impl Stmt {
    /// The construct whose rule produced this fragment.
    pub fn construct(&self) -> Construct {
        match self {
            Stmt::Assignment { .. } => Construct::Assignment,
            Stmt::While { .. } => Construct::While,
            Stmt::For => Construct::For,
            Stmt::If { .. } => Construct::If,
            Stmt::Elif { .. } => Construct::Elif,
            Stmt::Else => Construct::Else,
            Stmt::Print => Construct::Print,
            Stmt::IncDec => Construct::IncDec,
            Stmt::Return => Construct::Return,
            Stmt::Arithmetic => Construct::Arithmetic,
            Stmt::FunctionDef { .. } => Construct::FunctionDef,
            Stmt::FunctionCall { .. } => Construct::FunctionCall,
            Stmt::Class => Construct::Class,
            Stmt::Constructor { .. } => Construct::Constructor,
            Stmt::FieldInit => Construct::FieldInit,
            Stmt::ObjectCall { .. } => Construct::ObjectCall,
            Stmt::End => Construct::End,
        }
    }
}
