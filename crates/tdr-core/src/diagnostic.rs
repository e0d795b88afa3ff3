// TDR - Tagged-scene Description Representation
//
// Copyright (c) 2025 TDR contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Diagnostics for the TDR pipeline.
//!
//! Every stage (lexer, parser, semantic analyzer) appends its findings to a
//! shared [`DiagnosticList`] and keeps going; nothing in the pipeline stops
//! at the first problem. Diagnostics are kept in insertion order, which by
//! construction is pipeline order: lexical problems precede syntactic ones,
//! which precede semantic ones.
//!
//! The file path is usually unknown while a stage runs (the lexer works on
//! an anonymous character stream); [`DiagnosticList::set_path`] stamps it
//! onto every collected location after the fact.

use crate::lex::SourcePos;
use std::fmt;

/// Advisory severity level for a diagnostic.
///
/// Severity is optional metadata: the lexer and parser report plain
/// diagnostics, while the semantic analyzer attaches a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational hint.
    Hint,
    /// Might be an issue.
    Warning,
    /// Definitely an issue.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint => write!(f, "hint"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A location in a source file: an optional path plus a line/column pair.
///
/// The path is filled in lazily by the language service once parsing
/// completes; see [`DiagnosticList::set_path`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    /// Source file path, if known.
    pub path: Option<String>,
    /// Position within the file; the unknown sentinel if never observed.
    pub pos: SourcePos,
}

impl SourceLocation {
    /// Creates a location from a position, with no path.
    #[inline]
    pub fn new(pos: SourcePos) -> Self {
        Self { path: None, pos }
    }

    /// Creates a location with both path and position.
    pub fn with_path(path: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            path: Some(path.into()),
            pos,
        }
    }

    /// Returns the line number (0 if unknown).
    #[inline]
    pub fn line(&self) -> usize {
        self.pos.line()
    }

    /// Returns the column number (0 if unknown).
    #[inline]
    pub fn column(&self) -> usize {
        self.pos.column()
    }
}

impl fmt::Display for SourceLocation {
    /// Renders `path:line:col:` with unknown parts omitted together with
    /// their trailing colon. An entirely unknown location renders as the
    /// empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}:", path)?;
        }
        if self.pos.line() != 0 {
            write!(f, "{}:", self.pos.line())?;
        }
        if self.pos.column() != 0 {
            write!(f, "{}:", self.pos.column())?;
        }
        Ok(())
    }
}

/// A single problem found in TDR source.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Where the problem was found.
    pub location: SourceLocation,
    /// Human-readable description.
    pub message: String,
    /// Optional advisory level.
    pub severity: Option<Severity>,
}

impl Diagnostic {
    /// Creates a diagnostic at a full location.
    pub fn new(location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            severity: None,
        }
    }

    /// Creates a diagnostic at a bare position (path stamped later).
    pub fn at(pos: SourcePos, message: impl Into<String>) -> Self {
        Self::new(SourceLocation::new(pos), message)
    }

    /// Creates a diagnostic with no location at all.
    pub fn bare(message: impl Into<String>) -> Self {
        Self::new(SourceLocation::default(), message)
    }

    /// Attaches a severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.location.to_string();
        if prefix.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} {}", prefix, self.message)
        }
    }
}

/// Ordered, append-only collector of diagnostics.
///
/// Single-writer: each pipeline run owns its list. No deduplication is
/// performed; repeated problems are reported repeatedly.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticList {
    items: Vec<Diagnostic>,
}

impl DiagnosticList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    #[inline]
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Returns `true` if nothing has been reported.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of collected diagnostics.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over the collected diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Stamps `path` onto every collected location that lacks one.
    ///
    /// Diagnostics that already carry a path keep it.
    pub fn set_path(&mut self, path: &str) {
        for diagnostic in &mut self.items {
            if diagnostic.location.path.is_none() {
                diagnostic.location.path = Some(path.to_string());
            }
        }
    }

    /// Consumes the list, returning the collected diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }

    /// Borrows the collected diagnostics as a slice.
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }
}

impl IntoIterator for DiagnosticList {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
