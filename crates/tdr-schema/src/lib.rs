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

//! Schema model for the TDR scene-description language.
//!
//! A schema declares which tags may appear where, which attributes they
//! carry, the value type of each attribute and text block, and — through
//! [`ConditionalVariant`] — sub-schemas selected by a discriminator
//! attribute such as `type="primitive"`.
//!
//! ```
//! use tdr_schema::SceneSchema;
//!
//! let schema = SceneSchema::new();
//! let fov = schema.get_attribute_schema("camera", "fov").unwrap();
//! assert_eq!(fov.range, Some((1.0, 180.0)));
//! ```
//!
//! The schema is built once at service start-up and read-only afterwards.

mod groups;
mod model;
mod scene;

pub use groups::GroupRegistry;
pub use model::{AttributeSchema, ConditionalVariant, TagSchema, ValueType};
pub use scene::{effective_schema, SceneSchema};
