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

//! Lexical analysis for TDR source.
//!
//! - [`SourcePos`]: line/column tracking with an unknown sentinel
//! - [`Token`] / [`TokenKind`]: the token model of the tag grammar
//! - [`lex`]: the scanner turning source text into a token stream
//!
//! The scanner reports every lexical problem through a
//! [`crate::DiagnosticList`] and never fails; see [`lex`].

mod scanner;
mod span;
mod token;

pub use scanner::lex;
pub use span::SourcePos;
pub use token::{Token, TokenKind};
