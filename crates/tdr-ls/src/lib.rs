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

//! Language service for TDR scene files.
//!
//! [`LanguageService`] bundles the whole pipeline behind two entry points
//! plus a hover query:
//!
//! ```
//! use tdr_ls::LanguageService;
//!
//! let service = LanguageService::new();
//! let result = service.parse_content("<camera position=\"0 1 0\" fov=\"500\"/>");
//!
//! assert_eq!(result.diagnostics.len(), 1);
//! assert!(result.diagnostics[0].message.contains("[1, 180]"));
//!
//! let hover = service.hover(&result.tree, 1, 2).unwrap();
//! assert!(hover.contains("<camera>"));
//! ```
//!
//! Entry points never fail; see [`ParseResult`].

mod hover;
mod service;

pub use hover::get_hover;
pub use service::{LanguageService, ParseResult};
