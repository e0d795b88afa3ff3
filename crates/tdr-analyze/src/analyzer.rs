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

//! The semantic analyzer: walks a parsed tree and the schema in parallel.
//!
//! For every node the analyzer checks, in order: that the tag is known
//! under its parent, that text content is allowed and well-typed, that
//! every attribute is known and well-typed, that required attributes are
//! present; then it recurses. After a parent's children are processed it
//! checks multiplicity and required children. Unknown tags are reported
//! once and their subtrees skipped.
//!
//! Location convention: name-level problems (unknown name, missing
//! required) point at the name, value-level problems point at the content
//! one past the opening quote.

use crate::typecheck::{validate_value, FsPathChecker, PathChecker};
use std::collections::BTreeMap;
use tdr_core::{Diagnostic, DiagnosticList, Node, Severity, SourcePos};
use tdr_schema::{effective_schema, SceneSchema, TagSchema};

/// Configuration for an [`Analyzer`].
pub struct AnalyzerOptions {
    /// File-path validation backend.
    pub path_checker: Box<dyn PathChecker>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            path_checker: Box::new(FsPathChecker),
        }
    }
}

impl AnalyzerOptions {
    /// Uses a custom path checker (tests stub the filesystem this way).
    pub fn with_path_checker(checker: Box<dyn PathChecker>) -> Self {
        Self {
            path_checker: checker,
        }
    }
}

/// Schema-driven validator for parsed TDR trees.
///
/// The analyzer never mutates the tree and never stops at the first
/// problem; every finding is appended to the given [`DiagnosticList`] with
/// [`Severity::Error`].
pub struct Analyzer {
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Creates an analyzer with the given options.
    pub fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// Validates `root` against `schema`, reporting into `diagnostics`.
    ///
    /// `root` is expected to be the synthetic document root produced by
    /// the parser; it is matched against the schema root.
    pub fn analyze(&self, root: &Node, schema: &SceneSchema, diagnostics: &mut DiagnosticList) {
        self.analyze_children(root, &schema.root, diagnostics);
    }

    fn report(&self, diagnostics: &mut DiagnosticList, pos: SourcePos, message: String) {
        diagnostics.report(Diagnostic::at(pos, message).with_severity(Severity::Error));
    }

    fn analyze_children(
        &self,
        parent: &Node,
        parent_schema: &TagSchema,
        diagnostics: &mut DiagnosticList,
    ) {
        for node in &parent.children {
            let Some(base) = parent_schema.get_child(&node.identifier) else {
                self.report(
                    diagnostics,
                    node.identifier_pos,
                    format!("Unknown identifier '{}'", node.identifier),
                );
                continue;
            };

            let effective = effective_schema(base, node);

            self.check_text(node, &effective, diagnostics);
            self.check_attributes(node, &effective, diagnostics);
            self.analyze_children(node, &effective, diagnostics);
        }

        self.check_multiplicity(parent, parent_schema, diagnostics);
        self.check_required_children(parent, parent_schema, diagnostics);
    }

    fn check_text(&self, node: &Node, schema: &TagSchema, diagnostics: &mut DiagnosticList) {
        if node.has_text() && !schema.allow_text {
            self.report(
                diagnostics,
                node.text_pos,
                format!("Text is not allowed in '<{}>'", node.identifier),
            );
        } else if let Some(text_type) = schema.text_type {
            if let Err(message) = validate_value(
                text_type,
                schema.text_range,
                &schema.text_enum,
                &node.text,
                self.options.path_checker.as_ref(),
            ) {
                self.report(diagnostics, node.text_pos, message);
            }
        }
    }

    fn check_attributes(&self, node: &Node, schema: &TagSchema, diagnostics: &mut DiagnosticList) {
        for (name, attribute) in &node.attributes {
            let Some(attr_schema) = schema.get_attribute(name) else {
                self.report(
                    diagnostics,
                    attribute.attr_location,
                    format!("Unknown property '{}'", name),
                );
                continue;
            };

            if let Err(message) = validate_value(
                attr_schema.value_type,
                attr_schema.range,
                &attr_schema.enum_values,
                &attribute.content,
                self.options.path_checker.as_ref(),
            ) {
                self.report(diagnostics, attribute.content_location, message);
            }
        }

        for (name, attr_schema) in &schema.attributes {
            if attr_schema.required && !node.attributes.contains_key(name) {
                self.report(
                    diagnostics,
                    node.identifier_pos,
                    format!("Missing required property '{}'", name),
                );
            }
        }
    }

    fn check_multiplicity(
        &self,
        parent: &Node,
        parent_schema: &TagSchema,
        diagnostics: &mut DiagnosticList,
    ) {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for child in &parent.children {
            *counts.entry(child.identifier.as_str()).or_default() += 1;
        }

        for (name, count) in counts {
            if count <= 1 {
                continue;
            }
            if let Some(child_schema) = parent_schema.get_child(name) {
                if !child_schema.allow_multiple {
                    self.report(
                        diagnostics,
                        parent.identifier_pos,
                        format!(
                            "Tag '{}' appears {} times but is not allowed to repeat",
                            name, count
                        ),
                    );
                }
            }
        }
    }

    fn check_required_children(
        &self,
        parent: &Node,
        parent_schema: &TagSchema,
        diagnostics: &mut DiagnosticList,
    ) {
        for (name, child_schema) in &parent_schema.children {
            if child_schema.required && parent.child(name).is_none() {
                self.report(
                    diagnostics,
                    parent.identifier_pos,
                    format!("Missing required tag '{}'", name),
                );
            }
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default())
    }
}

/// Validates `root` against `schema` with the default (filesystem-backed)
/// options.
pub fn analyze(root: &Node, schema: &SceneSchema, diagnostics: &mut DiagnosticList) {
    Analyzer::default().analyze(root, schema, diagnostics);
}
