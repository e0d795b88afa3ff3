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

//! # TDR - Tagged-scene Description Representation
//!
//! TDR is an XML-like language for authoring 3D scenes: materials, camera,
//! assets, lights, and render settings. This crate bundles the whole
//! toolchain — lexer, error-tolerant parser, schema-driven semantic
//! analyzer, and the hover query used by editor integrations.
//!
//! ## Quick Start
//!
//! ```rust
//! use tdr::LanguageService;
//!
//! let scene = r#"
//! <materials>
//!     <material name="metal">
//!         <color>#C0C0C0</color>
//!         <roughness>0.3</roughness>
//!     </material>
//! </materials>
//! <camera position="0 4 -10" fov="60"/>
//! "#;
//!
//! let service = LanguageService::new();
//! let result = service.parse_content(scene);
//!
//! assert!(result.is_clean());
//! assert_eq!(result.tree.children.len(), 2);
//! ```
//!
//! ## Pipeline
//!
//! Every input flows through three stages, all reporting into one ordered
//! diagnostic collection and none stopping at the first problem:
//!
//! 1. [`lex`]: source text to tokens, with line/column tracking
//! 2. [`parse`]: tokens to a [`Node`] tree, tolerant of malformed input
//! 3. [`analyze`]: tree against the [`SceneSchema`], reporting unknown
//!    tags and attributes, type mismatches, range and enum violations,
//!    missing required entries, and multiplicity violations
//!
//! The stages can be driven individually, or together through
//! [`LanguageService`].
//!
//! ## Features
//!
//! - **Error tolerance**: crossed tags, stray characters, and truncated
//!   files still produce a best-effort tree plus diagnostics
//! - **Conditional variants**: `type`-discriminated sub-schemas, e.g.
//!   `<asset type="primitive">` allows different children than
//!   `<asset type="object">`
//! - **Hover**: markdown descriptions for the tag or attribute under a
//!   cursor position, via [`get_hover`] or [`LanguageService::hover`]
//! - **Injectable path checking**: `filepath`-typed values validate
//!   against the [`PathChecker`] seam, so tests run without a filesystem

// Re-export the core pipeline.
pub use tdr_core::{
    // Functions
    lex,
    parse,
    // Diagnostics
    Diagnostic,
    DiagnosticList,
    Severity,
    SourceLocation,
    SourcePos,
    // Tokens
    Token,
    TokenKind,
    // Tree
    Attribute,
    Node,
    // Errors
    TdrError,
    TdrResult,
};

// Re-export the schema model.
pub use tdr_schema::{
    effective_schema, AttributeSchema, ConditionalVariant, GroupRegistry, SceneSchema, TagSchema,
    ValueType,
};

// Re-export the analyzer.
pub use tdr_analyze::{
    analyze, validate_value, Analyzer, AnalyzerOptions, FsPathChecker, PathChecker,
};

// Re-export the language service.
pub use tdr_ls::{get_hover, LanguageService, ParseResult};
