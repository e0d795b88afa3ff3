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

//! Semantic analysis for TDR scene trees.
//!
//! Validates a parsed tree against a [`tdr_schema::SceneSchema`],
//! reporting structural problems (unknown tags, missing required tags,
//! multiplicity violations) and typed problems (attribute and text values
//! that fail their declared [`tdr_schema::ValueType`]).
//!
//! ## Quick start
//!
//! ```
//! use tdr_core::{lex, parse, DiagnosticList};
//! use tdr_schema::SceneSchema;
//! use tdr_analyze::analyze;
//!
//! let mut diagnostics = DiagnosticList::new();
//! let tokens = lex("<camera position=\"0 1 0\" fov=\"500\"/>", &mut diagnostics);
//! let tree = parse(tokens, &mut diagnostics).unwrap();
//!
//! let schema = SceneSchema::new();
//! analyze(&tree, &schema, &mut diagnostics);
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics.iter().next().unwrap().message.contains("[1, 180]"));
//! ```
//!
//! ## Stubbing the filesystem
//!
//! File-path validation is injectable through the [`PathChecker`] trait:
//!
//! ```
//! use tdr_analyze::{Analyzer, AnalyzerOptions, PathChecker};
//!
//! struct NoPaths;
//! impl PathChecker for NoPaths {
//!     fn check(&self, _path: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let analyzer = Analyzer::new(AnalyzerOptions::with_path_checker(Box::new(NoPaths)));
//! # let _ = analyzer;
//! ```

mod analyzer;
mod typecheck;

pub use analyzer::{analyze, Analyzer, AnalyzerOptions};
pub use typecheck::{validate_value, FsPathChecker, PathChecker};
