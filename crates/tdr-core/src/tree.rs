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

//! Tree structure for parsed TDR.

use crate::lex::{SourcePos, Token};
use std::collections::BTreeMap;

/// An attribute value recorded on a tag.
///
/// `attr_location` points at the attribute name; `content_location` points
/// at the first character inside the quoted value (one past the opening
/// quote). For a bare attribute (no `=value` clause) the content is empty
/// and `content_location` is the unknown sentinel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attribute {
    /// The unescaped attribute value; empty for bare attributes.
    pub content: String,
    /// Position of the attribute name.
    pub attr_location: SourcePos,
    /// Position of the first character inside the quotes.
    pub content_location: SourcePos,
}

impl Attribute {
    /// Creates an attribute that appeared without an `=value` clause.
    pub fn bare(attr_location: SourcePos) -> Self {
        Self {
            content: String::new(),
            attr_location,
            content_location: SourcePos::default(),
        }
    }

    /// Creates an attribute with a value.
    pub fn valued(
        content: impl Into<String>,
        attr_location: SourcePos,
        content_location: SourcePos,
    ) -> Self {
        Self {
            content: content.into(),
            attr_location,
            content_location,
        }
    }

    /// Returns `true` if the attribute carried an `=value` clause.
    #[inline]
    pub fn has_content(&self) -> bool {
        self.content_location.is_known()
    }
}

/// A node in the parsed tag tree.
///
/// The synthetic root has identifier `"root"` and holds the document's
/// top-level tags as children. `tokens` is the contiguous slice of tokens
/// the parser consumed to build the node (including those of nested tags),
/// which lets editor features map a node back onto source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Tag name; empty when the parser had to invent a node during
    /// recovery.
    pub identifier: String,
    /// Position of the tag-name identifier token.
    pub identifier_pos: SourcePos,
    /// Attributes keyed by name; a duplicated name keeps the later value.
    pub attributes: BTreeMap<String, Attribute>,
    /// Child tags in document order.
    pub children: Vec<Node>,
    /// Trimmed text content; empty if the tag had none. Only the first
    /// text block is kept.
    pub text: String,
    /// Position of the first character of the text content.
    pub text_pos: SourcePos,
    /// Tokens consumed while building this node.
    pub tokens: Vec<Token>,
}

impl Node {
    /// Creates an empty node with the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Creates the synthetic document root.
    pub fn root() -> Self {
        Self::new("root")
    }

    /// Looks up an attribute record by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Looks up an attribute's content by name.
    pub fn attribute_content(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|a| a.content.as_str())
    }

    /// Returns the first child with the given identifier.
    pub fn child(&self, identifier: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.identifier == identifier)
    }

    /// Counts children with the given identifier.
    pub fn count_children(&self, identifier: &str) -> usize {
        self.children
            .iter()
            .filter(|c| c.identifier == identifier)
            .count()
    }

    /// Returns `true` if the node carries text content.
    #[inline]
    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Total number of nodes in this subtree, the node itself included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}
