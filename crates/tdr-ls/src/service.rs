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

//! The TDR language service.
//!
//! Owns the schema (built once at construction) and dispatches the full
//! lex → parse → analyze pipeline. Entry points never fail: a fatal
//! pipeline error or an unreadable file is converted into a single
//! diagnostic next to a blank tree, so callers always get a
//! [`ParseResult`] to work with.

use crate::hover::get_hover;
use std::path::Path;
use tdr_analyze::Analyzer;
use tdr_core::{lex, parse, Diagnostic, DiagnosticList, Node, SourceLocation, TdrError};
use tdr_schema::SceneSchema;
use tracing::{debug, warn};

/// Outcome of a parse-and-analyze run.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Best-effort tree; the synthetic blank root on fatal failure.
    pub tree: Node,
    /// Everything the pipeline reported, in pipeline order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Returns `true` when no diagnostics were reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Scene-language front end: parsing, validation, hover.
///
/// The schema is built once here and shared read-only by every query;
/// a service value can serve any number of independent inputs.
pub struct LanguageService {
    schema: SceneSchema,
    analyzer: Analyzer,
}

impl LanguageService {
    /// Creates a service with the built-in scene schema and default
    /// analyzer (filesystem-backed path checking).
    pub fn new() -> Self {
        Self {
            schema: SceneSchema::new(),
            analyzer: Analyzer::default(),
        }
    }

    /// Creates a service with a custom analyzer (e.g. a stubbed path
    /// checker for tests).
    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        Self {
            schema: SceneSchema::new(),
            analyzer,
        }
    }

    /// The schema this service validates against.
    pub fn schema(&self) -> &SceneSchema {
        &self.schema
    }

    /// Parses and analyzes in-memory content.
    pub fn parse_content(&self, text: &str) -> ParseResult {
        let (tree, diagnostics) = self.run_pipeline(text);
        ParseResult {
            tree,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Parses and analyzes a file, stamping its path onto every
    /// diagnostic that came back without one.
    ///
    /// An unreadable file yields a single diagnostic and a blank tree.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> ParseResult {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = %path_str, error = %err, "cannot read scene file");
                let error = TdrError::io(&path_str, err);
                let diagnostic = Diagnostic::new(
                    SourceLocation::with_path(&path_str, Default::default()),
                    error.to_string(),
                );
                return ParseResult {
                    tree: Node::root(),
                    diagnostics: vec![diagnostic],
                };
            }
        };

        let (tree, mut diagnostics) = self.run_pipeline(&text);
        diagnostics.set_path(&path_str);
        ParseResult {
            tree,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Answers a hover query against a previously parsed tree.
    ///
    /// `line` and `col` are 1-based. `None` means there is nothing to
    /// show at that position.
    pub fn hover(&self, tree: &Node, line: usize, col: usize) -> Option<String> {
        let hover = get_hover(tree, &self.schema, line, col);
        debug!(line, col, found = hover.is_some(), "hover query");
        hover
    }

    fn run_pipeline(&self, text: &str) -> (Node, DiagnosticList) {
        let mut diagnostics = DiagnosticList::new();
        let tokens = lex(text, &mut diagnostics);

        match parse(tokens, &mut diagnostics) {
            Ok(tree) => {
                self.analyzer.analyze(&tree, &self.schema, &mut diagnostics);
                debug!(
                    nodes = tree.subtree_size(),
                    diagnostics = diagnostics.len(),
                    "parsed TDR content"
                );
                (tree, diagnostics)
            }
            Err(error) => {
                warn!(error = %error, "fatal pipeline error");
                diagnostics.report(Diagnostic::bare(error.to_string()));
                (Node::root(), diagnostics)
            }
        }
    }
}

impl Default for LanguageService {
    fn default() -> Self {
        Self::new()
    }
}
