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

//! Schema model: value types, attribute schemas, tag schemas and
//! conditional variants.
//!
//! A schema is a tree of [`TagSchema`] values rooted at a sentinel whose
//! children are the allowed top-level tags. Schemas are built in code with
//! the builder-style `with_*` methods, constructed once at service
//! start-up, and immutable afterwards; they are safe to share across
//! concurrent analyses.

use std::collections::BTreeMap;
use std::fmt;

/// The value type of an attribute or of a tag's text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Any string; always valid.
    String,
    /// 32-bit floating point.
    Float,
    /// Signed integer.
    Int,
    /// One of `1`, `0`, `true`, `false`.
    Bool,
    /// Three space-separated floats.
    Vec3,
    /// `#RRGGBB` or `r,g,b` with components in `[0, 255]`.
    Color,
    /// A readable regular file, resolved against the working directory.
    FilePath,
    /// Case-sensitive match against a fixed value list.
    Enum,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Float => write!(f, "float"),
            Self::Int => write!(f, "integer"),
            Self::Bool => write!(f, "boolean"),
            Self::Vec3 => write!(f, "vec3"),
            Self::Color => write!(f, "color"),
            Self::FilePath => write!(f, "filepath"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// Schema for a single attribute of a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSchema {
    /// Attribute name.
    pub name: String,
    /// Whether the attribute must be present.
    pub required: bool,
    /// Expected value type.
    pub value_type: ValueType,
    /// Default value shown in hover output.
    pub default_value: Option<String>,
    /// Inclusive bounds for numeric types (applies per component for
    /// [`ValueType::Vec3`]).
    pub range: Option<(f32, f32)>,
    /// Allowed values for [`ValueType::Enum`].
    pub enum_values: Vec<String>,
    /// Hover description.
    pub hover_info: String,
    /// Short completion label.
    pub completion_detail: String,
    /// Usage examples.
    pub examples: Vec<String>,
}

impl AttributeSchema {
    /// Creates an optional attribute of the given type.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            required: false,
            value_type,
            default_value: None,
            range: None,
            enum_values: Vec::new(),
            hover_info: String::new(),
            completion_detail: String::new(),
            examples: Vec::new(),
        }
    }

    /// Marks the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets inclusive numeric bounds.
    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Sets the allowed enum values.
    pub fn with_enum_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the hover description.
    pub fn with_hover(mut self, info: impl Into<String>) -> Self {
        self.hover_info = info.into();
        self
    }

    /// Sets the completion label.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.completion_detail = detail.into();
        self
    }

    /// Appends a usage example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }
}

/// A type-discriminated sub-schema of a tag.
///
/// When the enclosing tag's concrete value for `discriminator_attr` equals
/// `discriminator_value`, the variant's attributes and children are merged
/// additively into the tag's schema, variant entries overriding on name
/// collision. Text settings are overridden only when the variant enables
/// text.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalVariant {
    /// Attribute whose value selects this variant.
    pub discriminator_attr: String,
    /// Value that selects this variant.
    pub discriminator_value: String,
    /// Attributes contributed by the variant.
    pub attributes: BTreeMap<String, AttributeSchema>,
    /// Children contributed by the variant.
    pub children: BTreeMap<String, TagSchema>,
    /// Whether the variant enables text content.
    pub allow_text: bool,
    /// Text type enforced when the variant enables text.
    pub text_type: Option<ValueType>,
}

impl ConditionalVariant {
    /// Creates a variant selected by `attr="value"`.
    pub fn new(attr: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            discriminator_attr: attr.into(),
            discriminator_value: value.into(),
            attributes: BTreeMap::new(),
            children: BTreeMap::new(),
            allow_text: false,
            text_type: None,
        }
    }

    /// Contributes an attribute.
    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    /// Contributes a child tag.
    pub fn child(mut self, schema: TagSchema) -> Self {
        self.children.insert(schema.name.clone(), schema);
        self
    }

    /// Enables text content of the given type.
    pub fn with_text(mut self, text_type: ValueType) -> Self {
        self.allow_text = true;
        self.text_type = Some(text_type);
        self
    }
}

/// Schema for a single tag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagSchema {
    /// Tag name.
    pub name: String,
    /// Whether the tag must appear under its parent.
    pub required: bool,
    /// Whether the tag may appear more than once under its parent.
    pub allow_multiple: bool,
    /// Whether the tag may carry text content.
    pub allow_text: bool,
    /// Value type enforced on the text content.
    pub text_type: Option<ValueType>,
    /// Inclusive numeric bounds on the text content.
    pub text_range: Option<(f32, f32)>,
    /// Allowed values when the text type is [`ValueType::Enum`].
    pub text_enum: Vec<String>,
    /// Allowed attributes keyed by name.
    pub attributes: BTreeMap<String, AttributeSchema>,
    /// Allowed child tags keyed by name.
    pub children: BTreeMap<String, TagSchema>,
    /// Conditional variants, tried in order.
    pub variants: Vec<ConditionalVariant>,
    /// The `(attribute, value)` pair of the variant that produced this
    /// schema, set only on effective schemas.
    pub from_condition: Option<(String, String)>,
    /// Hover description.
    pub hover_info: String,
    /// Short completion label.
    pub completion_detail: String,
    /// Usage examples.
    pub examples: Vec<String>,
}

impl TagSchema {
    /// Creates an optional, single-occurrence tag with no text.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Marks the tag as required under its parent.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allows the tag to repeat under its parent.
    pub fn multiple(mut self) -> Self {
        self.allow_multiple = true;
        self
    }

    /// Enables text content of the given type.
    pub fn with_text(mut self, text_type: ValueType) -> Self {
        self.allow_text = true;
        self.text_type = Some(text_type);
        self
    }

    /// Enables free-form text content with no type constraint.
    pub fn with_plain_text(mut self) -> Self {
        self.allow_text = true;
        self
    }

    /// Sets inclusive numeric bounds on the text content.
    pub fn with_text_range(mut self, min: f32, max: f32) -> Self {
        self.text_range = Some((min, max));
        self
    }

    /// Sets the allowed text values for an enum-typed text content.
    pub fn with_text_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.text_enum = values.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an allowed attribute.
    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    /// Adds an allowed child tag.
    pub fn child(mut self, schema: TagSchema) -> Self {
        self.children.insert(schema.name.clone(), schema);
        self
    }

    /// Adds a conditional variant.
    pub fn variant(mut self, variant: ConditionalVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Sets the hover description.
    pub fn with_hover(mut self, info: impl Into<String>) -> Self {
        self.hover_info = info.into();
        self
    }

    /// Sets the completion label.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.completion_detail = detail.into();
        self
    }

    /// Appends a usage example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Looks up an allowed attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }

    /// Looks up an allowed child by name.
    pub fn get_child(&self, name: &str) -> Option<&TagSchema> {
        self.children.get(name)
    }
}
