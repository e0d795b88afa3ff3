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

//! Hover information for TDR scene files.
//!
//! Given a cursor position, [`get_hover`] walks the parsed tree top-down
//! and returns a markdown description of the token beneath the cursor:
//!
//! - on a tag name: the tag's description, required attributes, children
//!   and an example, plus the active variant when one is selected;
//! - on an attribute name or inside its quoted value: the attribute's
//!   type, description, default, range or allowed values, and an example.
//!
//! The first match wins; `None` means there is nothing to show.

use tdr_core::{Attribute, Node};
use tdr_schema::{effective_schema, AttributeSchema, SceneSchema, TagSchema};

/// Returns hover markdown for the token at `(line, col)`, or `None` when
/// the cursor is not over a known tag or attribute.
///
/// `line` and `col` are 1-based, matching token positions.
pub fn get_hover(tree: &Node, schema: &SceneSchema, line: usize, col: usize) -> Option<String> {
    find_hover(tree, &schema.root, line, col)
}

fn find_hover(node: &Node, base: &TagSchema, line: usize, col: usize) -> Option<String> {
    let effective = effective_schema(base, node);

    // 1. The tag name itself.
    if cursor_on_identifier(node, line, col) {
        return Some(render_tag_hover(&effective));
    }

    // 2. Attribute names and quoted values.
    for (name, attribute) in &node.attributes {
        if cursor_on_attr_name(attribute, name, line, col)
            || cursor_on_attr_content(attribute, line, col)
        {
            return effective.get_attribute(name).map(render_attribute_hover);
        }
    }

    // 3. Children known to the schema.
    for child in &node.children {
        if let Some(child_schema) = effective.get_child(&child.identifier) {
            if let Some(hover) = find_hover(child, child_schema, line, col) {
                return Some(hover);
            }
        }
    }

    None
}

fn cursor_on_identifier(node: &Node, line: usize, col: usize) -> bool {
    let pos = node.identifier_pos;
    pos.is_known()
        && pos.line() == line
        && col >= pos.column()
        && col < pos.column() + node.identifier.len()
}

fn cursor_on_attr_name(attribute: &Attribute, name: &str, line: usize, col: usize) -> bool {
    let pos = attribute.attr_location;
    pos.is_known() && pos.line() == line && col >= pos.column() && col < pos.column() + name.len()
}

/// The value region covers the surrounding quotes: from one before the
/// content start (the opening quote) through one past its end (the
/// closing quote).
fn cursor_on_attr_content(attribute: &Attribute, line: usize, col: usize) -> bool {
    let pos = attribute.content_location;
    pos.is_known()
        && pos.line() == line
        && col + 1 >= pos.column()
        && col <= pos.column() + attribute.content.len()
}

fn render_tag_hover(schema: &TagSchema) -> String {
    let title = format!("**`<{}>`**", schema.name);
    let mut sections: Vec<String> = Vec::new();

    if !schema.hover_info.is_empty() {
        sections.push(schema.hover_info.clone());
    }
    if let Some((attr, value)) = &schema.from_condition {
        sections.push(format!("Active variant: `{}=\"{}\"`", attr, value));
    }

    let required: Vec<String> = schema
        .attributes
        .values()
        .filter(|a| a.required)
        .map(|a| format!("`{}`", a.name))
        .collect();
    if !required.is_empty() {
        sections.push(format!("**Required attributes:** {}", required.join(", ")));
    }

    if !schema.children.is_empty() {
        let children: Vec<String> = schema
            .children
            .keys()
            .map(|name| format!("`<{}>`", name))
            .collect();
        sections.push(format!("**Children:** {}", children.join(", ")));
    }

    if let Some(example) = schema.examples.first() {
        sections.push(format!("**Example:** `{}`", example));
    }

    format!("{}\n\n---\n\n{}", title, sections.join("\n\n"))
}

fn render_attribute_hover(schema: &AttributeSchema) -> String {
    let title = format!("**(attribute) {}: {}**", schema.name, schema.value_type);
    let mut sections: Vec<String> = Vec::new();

    if !schema.hover_info.is_empty() {
        sections.push(schema.hover_info.clone());
    }
    if let Some(default) = &schema.default_value {
        sections.push(format!("**Default:** `{}`", default));
    }
    if let Some((min, max)) = schema.range {
        sections.push(format!("**Range:** `[{}, {}]`", min, max));
    }
    if !schema.enum_values.is_empty() {
        let allowed: Vec<String> = schema
            .enum_values
            .iter()
            .map(|v| format!("`{}`", v))
            .collect();
        sections.push(format!("**Allowed values:** {}", allowed.join(", ")));
    }
    if let Some(example) = schema.examples.first() {
        sections.push(format!("**Example:** `{}`", example));
    }

    format!("{}\n\n---\n\n{}", title, sections.join("\n\n"))
}
