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

//! Core analysis pipeline for the TDR scene-description language.
//!
//! TDR is an XML-like language used to author 3D scenes:
//!
//! ```text
//! <materials>
//!     <material name="metal">
//!         <color>#FF8800</color>
//!     </material>
//! </materials>
//! <camera position="0 1 0" fov="60"/>
//! ```
//!
//! This crate provides the first two stages of the pipeline:
//!
//! - [`lex`](mod@lex): conversion of source text into a token stream with
//!   line/column tracking ([`lex::lex`])
//! - [`parse`]: error-tolerant construction of a [`Node`] tree from tokens
//!
//! Both stages report problems through a [`DiagnosticList`] and keep going;
//! the only hard failure is an internal invariant violation surfaced as
//! [`TdrError`]. Schema-driven validation and hover live in the companion
//! crates.

mod diagnostic;
mod error;
pub mod lex;
mod parser;
mod tree;

pub use diagnostic::{Diagnostic, DiagnosticList, Severity, SourceLocation};
pub use error::{TdrError, TdrResult};
pub use lex::{lex, SourcePos, Token, TokenKind};
pub use parser::parse;
pub use tree::{Attribute, Node};
