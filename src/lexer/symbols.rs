/*
 * ==========================================================================
 * KITTEN - Small Steps, Sharp Claws
 * ==========================================================================
 *
 * File:      symbols.rs
 * Purpose:   First-seen symbol table filled in by the lexer.
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

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Placeholder type recorded for every symbol.
///
/// KITTEN performs no semantic analysis, so nothing ever refines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
    Undefined,
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolType::Undefined => f.write_str("undefined"),
        }
    }
}

/// Lexeme → placeholder type, one entry per distinct lexeme.
///
/// The first registration of a lexeme wins and is never overwritten.
/// Entries are kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: IndexMap<String, SymbolType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` unless it is already present.
    ///
    /// Returns `true` when a new entry was created.
    pub fn add_symbol(&mut self, name: &str, symbol_type: SymbolType) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_string(), symbol_type);
        true
    }

    pub fn get(&self, name: &str) -> Option<SymbolType> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SymbolType)> {
        self.entries.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut table = SymbolTable::new();
        assert!(table.add_symbol("count", SymbolType::Undefined));
        assert!(!table.add_symbol("count", SymbolType::Undefined));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("count"), Some(SymbolType::Undefined));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut table = SymbolTable::new();
        for name in ["b", "a", "c", "a", "b"] {
            table.add_symbol(name, SymbolType::Undefined);
        }
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut table = SymbolTable::new();
        table.add_symbol("x", SymbolType::Undefined);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"x":"undefined"}"#);
    }

    #[test]
    fn test_missing_symbol() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert!(!table.contains("ghost"));
        assert_eq!(table.get("ghost"), None);
    }
}
