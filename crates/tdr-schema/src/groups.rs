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

//! Named groups of reusable child schemas.
//!
//! Several tags share the same sub-tree (the classic case is a transform
//! block with `position`, `rotation` and `scale`). Instead of repeating the
//! definitions, the schema builder registers the group once and each tag
//! copies it in with [`TagSchema::include_group`].

use crate::model::TagSchema;
use std::collections::BTreeMap;

/// Registry of named, reusable child-schema groups.
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    groups: BTreeMap<String, BTreeMap<String, TagSchema>>,
}

impl GroupRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a group under `name`, replacing any previous definition.
    pub fn register(&mut self, name: impl Into<String>, children: Vec<TagSchema>) {
        let entries = children
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();
        self.groups.insert(name.into(), entries);
    }

    /// Looks up a group's entries by name.
    pub fn get(&self, name: &str) -> Option<&BTreeMap<String, TagSchema>> {
        self.groups.get(name)
    }
}

impl TagSchema {
    /// Copies the entries of the named group into this tag's children.
    ///
    /// Group entries override existing children on name collision. An
    /// unknown group name is ignored.
    pub fn include_group(mut self, registry: &GroupRegistry, name: &str) -> Self {
        if let Some(entries) = registry.get(name) {
            for (child_name, child) in entries {
                self.children.insert(child_name.clone(), child.clone());
            }
        }
        self
    }
}
