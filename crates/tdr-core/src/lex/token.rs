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

//! Token model for the TDR tag grammar.

use crate::lex::SourcePos;
use std::fmt;

/// Classification of a lexed token.
///
/// Only [`Identifier`](TokenKind::Identifier), [`String`](TokenKind::String)
/// and [`Text`](TokenKind::Text) carry a non-empty value; the punctuation
/// kinds are fully described by their kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `<` opening a start tag.
    TagOpen,
    /// `</` opening an end tag.
    TagEndOpen,
    /// `>` closing a tag bracket.
    TagClose,
    /// `/>` self-closing a tag.
    TagSelfClose,
    /// A tag or attribute name: `[A-Za-z][A-Za-z0-9_-]*`.
    Identifier,
    /// `=` between an attribute name and its value.
    Equals,
    /// A quoted string literal (value is the unescaped content).
    String,
    /// Trimmed text content between tags.
    Text,
    /// End of input; emitted exactly once, always last.
    EndOfFile,
}

/// A single token with its source position.
///
/// The position points at the first character of the token in source; for
/// [`TokenKind::String`] that is the opening quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Carried value; empty for punctuation.
    pub value: String,
    /// Position of the token's first character.
    pub pos: SourcePos,
}

impl Token {
    /// Creates a token carrying a value.
    pub fn new(kind: TokenKind, value: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            kind,
            value: value.into(),
            pos,
        }
    }

    /// Creates a valueless punctuation token.
    pub fn punct(kind: TokenKind, pos: SourcePos) -> Self {
        Self {
            kind,
            value: String::new(),
            pos,
        }
    }

    /// Returns `true` for the terminal end-of-file token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Human-readable form for use in diagnostics, e.g. `'='` or
    /// `identifier 'camera'`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::TagOpen => "'<'".to_string(),
            TokenKind::TagEndOpen => "'</'".to_string(),
            TokenKind::TagClose => "'>'".to_string(),
            TokenKind::TagSelfClose => "'/>'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Identifier => format!("identifier '{}'", self.value),
            TokenKind::String => format!("string \"{}\"", self.value),
            TokenKind::Text => "text block".to_string(),
            TokenKind::EndOfFile => "end of file".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_new_carries_value() {
        let tok = Token::new(TokenKind::Identifier, "camera", SourcePos::new(1, 2));
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.value, "camera");
        assert_eq!(tok.pos, SourcePos::new(1, 2));
    }

    #[test]
    fn test_token_punct_is_valueless() {
        let tok = Token::punct(TokenKind::TagClose, SourcePos::new(1, 8));
        assert!(tok.value.is_empty());
    }

    #[test]
    fn test_token_is_eof() {
        assert!(Token::punct(TokenKind::EndOfFile, SourcePos::default()).is_eof());
        assert!(!Token::punct(TokenKind::TagClose, SourcePos::default()).is_eof());
    }

    #[test]
    fn test_token_describe() {
        let pos = SourcePos::new(1, 1);
        assert_eq!(Token::punct(TokenKind::TagOpen, pos).describe(), "'<'");
        assert_eq!(Token::punct(TokenKind::TagSelfClose, pos).describe(), "'/>'");
        assert_eq!(
            Token::new(TokenKind::Identifier, "fov", pos).describe(),
            "identifier 'fov'"
        );
        assert_eq!(
            Token::new(TokenKind::String, "60", pos).describe(),
            "string \"60\""
        );
        assert_eq!(Token::punct(TokenKind::EndOfFile, pos).describe(), "end of file");
    }
}
