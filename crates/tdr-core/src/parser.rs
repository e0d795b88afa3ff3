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

//! Error-tolerant recursive-descent parser for the TDR tag grammar.
//!
//! ```text
//! document  = tag* EOF
//! tag       = TagOpen Identifier attribute*
//!             (TagSelfClose | TagClose content TagEndOpen Identifier TagClose)
//! attribute = Identifier (Equals String)?
//! content   = (Text | tag)*
//! ```
//!
//! The parser never gives up on a token stream: every syntactic problem is
//! reported through the [`DiagnosticList`] and parsing resumes at the next
//! plausible point, so a best-effort tree is always produced. Recoveries:
//!
//! - a missing identifier leaves the name empty and keeps going;
//! - an `=` without a following string records the attribute without
//!   content;
//! - a mismatched end tag ("crossed tags") closes the current node early
//!   and hands the end tag back to the enclosing scope;
//! - a `/>` inside an open tag's content ends the tag;
//! - end-of-file inside a tag unwinds to the top level, where the document
//!   loop terminates.
//!
//! The only `Err` is [`TdrError::Internal`], raised when the token cursor
//! would overrun the stream — a broken invariant, not bad input.

use crate::diagnostic::{Diagnostic, DiagnosticList};
use crate::error::{TdrError, TdrResult};
use crate::lex::{SourcePos, Token, TokenKind};
use crate::tree::{Attribute, Node};

/// Parses a token stream into a tree, reporting problems into
/// `diagnostics`.
///
/// The returned root is synthetic (identifier `"root"`) and holds the
/// document's top-level tags as children.
///
/// # Examples
///
/// ```
/// use tdr_core::{lex, parse, DiagnosticList};
///
/// let mut diagnostics = DiagnosticList::new();
/// let tokens = lex("<camera position=\"0 1 0\"/>", &mut diagnostics);
/// let tree = parse(tokens, &mut diagnostics).unwrap();
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(tree.children.len(), 1);
/// assert_eq!(tree.children[0].identifier, "camera");
/// assert_eq!(
///     tree.children[0].attribute_content("position"),
///     Some("0 1 0")
/// );
/// ```
///
/// # Errors
///
/// Returns [`TdrError::Internal`] if the stream is not terminated by an
/// end-of-file token or the cursor overruns it.
pub fn parse(tokens: Vec<Token>, diagnostics: &mut DiagnosticList) -> TdrResult<Node> {
    if !tokens.last().is_some_and(Token::is_eof) {
        return Err(TdrError::internal(
            "token stream is not terminated by an end-of-file token",
        ));
    }
    Parser {
        tokens,
        cursor: 0,
        diagnostics,
    }
    .parse_document()
}

struct Parser<'d> {
    tokens: Vec<Token>,
    cursor: usize,
    diagnostics: &'d mut DiagnosticList,
}

impl Parser<'_> {
    #[inline]
    fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    #[inline]
    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Advances the cursor. Moving past the terminal end-of-file token is
    /// the pipeline's one fatal invariant.
    fn advance(&mut self) -> TdrResult<()> {
        if self.cursor + 1 >= self.tokens.len() {
            return Err(TdrError::internal("token cursor overran the end of input"));
        }
        self.cursor += 1;
        Ok(())
    }

    /// Consumes the current token, attaching it to `node`.
    fn bump(&mut self, node: &mut Node) -> TdrResult<()> {
        node.tokens.push(self.current().clone());
        self.advance()
    }

    /// Consumes the current token without attaching it anywhere. Used when
    /// scanning past noise during recovery.
    fn skip(&mut self) -> TdrResult<()> {
        self.advance()
    }

    fn report(&mut self, pos: SourcePos, message: impl Into<String>) {
        self.diagnostics.report(Diagnostic::at(pos, message));
    }

    fn report_eof(&mut self, identifier: &str) {
        let pos = self.current().pos;
        if identifier.is_empty() {
            self.report(pos, "Unexpected end of file inside a tag");
        } else {
            self.report(
                pos,
                format!("Unexpected end of file inside '<{}>'", identifier),
            );
        }
    }

    fn parse_document(mut self) -> TdrResult<Node> {
        let mut root = Node::root();

        loop {
            match self.current().kind {
                TokenKind::EndOfFile => break,
                TokenKind::TagOpen => {
                    if let Some(tag) = self.parse_tag()? {
                        root.children.push(tag);
                    }
                }
                TokenKind::TagEndOpen => self.skip_stray_end_tag()?,
                _ => {
                    let message =
                        format!("Unexpected {} at top level", self.current().describe());
                    let pos = self.current().pos;
                    self.report(pos, message);
                    self.skip()?;
                }
            }
        }

        Ok(root)
    }

    /// Skips a stray `</name>` that no open tag is waiting for, as a unit.
    fn skip_stray_end_tag(&mut self) -> TdrResult<()> {
        let pos = self.current().pos;
        self.skip()?; // TagEndOpen
        let name = if self.at(TokenKind::Identifier) {
            let name = self.current().value.clone();
            self.skip()?;
            name
        } else {
            String::new()
        };
        if self.at(TokenKind::TagClose) {
            self.skip()?;
        }
        self.report(pos, format!("Unexpected closing tag '</{}>'", name));
        Ok(())
    }

    /// Parses one tag. Returns `None` when end-of-file was reached inside
    /// the tag; the caller discards the partial result and unwinds.
    fn parse_tag(&mut self) -> TdrResult<Option<Node>> {
        let mut node = Node::default();
        self.bump(&mut node)?; // TagOpen

        if self.at(TokenKind::Identifier) {
            node.identifier = self.current().value.clone();
            node.identifier_pos = self.current().pos;
            self.bump(&mut node)?;
        } else if self.at(TokenKind::EndOfFile) {
            self.report_eof(&node.identifier);
            return Ok(None);
        } else {
            let pos = self.current().pos;
            self.report(pos, "Tag identifier expected");
        }

        // Attribute list, tolerating noise between entries.
        loop {
            match self.current().kind {
                TokenKind::Identifier => self.parse_attribute(&mut node)?,
                TokenKind::TagClose | TokenKind::TagSelfClose => break,
                TokenKind::EndOfFile => {
                    self.report_eof(&node.identifier);
                    return Ok(None);
                }
                _ => {
                    let message = format!(
                        "Unexpected {} inside '<{}>'",
                        self.current().describe(),
                        node.identifier
                    );
                    let pos = self.current().pos;
                    self.report(pos, message);
                    self.skip()?;
                }
            }
        }

        if self.at(TokenKind::TagSelfClose) {
            self.bump(&mut node)?;
            return Ok(Some(node));
        }

        self.bump(&mut node)?; // TagClose
        self.parse_content(node)
    }

    /// Parses one `Identifier (Equals String)?` attribute onto `node`.
    fn parse_attribute(&mut self, node: &mut Node) -> TdrResult<()> {
        let name = self.current().value.clone();
        let name_pos = self.current().pos;
        self.bump(node)?;

        let mut attribute = Attribute::bare(name_pos);

        if self.at(TokenKind::Equals) {
            self.bump(node)?;
            if self.at(TokenKind::String) {
                let content = self.current().value.clone();
                let quote_pos = self.current().pos;
                attribute = Attribute::valued(
                    content,
                    name_pos,
                    SourcePos::new(quote_pos.line(), quote_pos.column() + 1),
                );
                self.bump(node)?;
            } else if !self.at(TokenKind::EndOfFile) {
                let pos = self.current().pos;
                self.report(
                    pos,
                    format!("Expected string value for attribute '{}'", name),
                );
            }
        }

        if node.attributes.contains_key(&name) {
            self.report(name_pos, format!("Duplicate attribute '{}'", name));
        }
        node.attributes.insert(name, attribute);
        Ok(())
    }

    /// Parses the content block of an open tag up to its end tag.
    fn parse_content(&mut self, mut node: Node) -> TdrResult<Option<Node>> {
        loop {
            match self.current().kind {
                TokenKind::Text => {
                    if node.text.is_empty() {
                        node.text = self.current().value.clone();
                        node.text_pos = self.current().pos;
                    } else {
                        let pos = self.current().pos;
                        let message = format!(
                            "Multiple text blocks are not allowed in '<{}>'",
                            node.identifier
                        );
                        self.report(pos, message);
                    }
                    self.bump(&mut node)?;
                }
                TokenKind::TagOpen => {
                    let Some(child) = self.parse_tag()? else {
                        return Ok(None);
                    };
                    node.tokens.extend(child.tokens.iter().cloned());
                    node.children.push(child);
                }
                TokenKind::TagSelfClose => {
                    let pos = self.current().pos;
                    let message = format!(
                        "Unexpected '/>' in content of '<{}>'; treating it as the end of the tag",
                        node.identifier
                    );
                    self.report(pos, message);
                    self.bump(&mut node)?;
                    return Ok(Some(node));
                }
                TokenKind::TagEndOpen => return self.parse_end_tag(node),
                TokenKind::EndOfFile => {
                    self.report_eof(&node.identifier);
                    return Ok(None);
                }
                _ => {
                    let message = format!(
                        "Unexpected {} in content of '<{}>'",
                        self.current().describe(),
                        node.identifier
                    );
                    let pos = self.current().pos;
                    self.report(pos, message);
                    self.skip()?;
                }
            }
        }
    }

    /// Parses `TagEndOpen Identifier TagClose`, handling crossed tags by
    /// rewinding and returning the partial node to the enclosing scope.
    fn parse_end_tag(&mut self, mut node: Node) -> TdrResult<Option<Node>> {
        self.bump(&mut node)?; // TagEndOpen

        match self.current().kind {
            TokenKind::Identifier if self.current().value == node.identifier => {
                self.bump(&mut node)?;
                match self.current().kind {
                    TokenKind::TagClose => {
                        self.bump(&mut node)?;
                    }
                    TokenKind::EndOfFile => {
                        self.report_eof(&node.identifier);
                        return Ok(None);
                    }
                    _ => {
                        let pos = self.current().pos;
                        let message =
                            format!("Expected '>' to close '</{}>'", node.identifier);
                        self.report(pos, message);
                    }
                }
                Ok(Some(node))
            }
            TokenKind::Identifier => {
                // Crossed tags: this end tag belongs to an enclosing node.
                // Rewind so the outer scope sees it and close early.
                self.cursor -= 1;
                node.tokens.pop();
                self.report(
                    node.identifier_pos,
                    format!("Unclosed tag '<{}>'", node.identifier),
                );
                Ok(Some(node))
            }
            TokenKind::EndOfFile => {
                self.report_eof(&node.identifier);
                Ok(None)
            }
            _ => {
                let pos = self.current().pos;
                self.report(pos, "Tag identifier expected in closing tag");
                if self.at(TokenKind::TagClose) {
                    self.bump(&mut node)?;
                }
                Ok(Some(node))
            }
        }
    }
}
