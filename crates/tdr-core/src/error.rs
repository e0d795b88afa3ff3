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

//! Fatal error type for the TDR pipeline.
//!
//! Recoverable problems (bad characters, crossed tags, type mismatches)
//! never surface here; they go through [`crate::DiagnosticList`] and the
//! pipeline keeps running. `TdrError` is reserved for conditions the
//! pipeline cannot continue past: a broken internal invariant, or failing
//! to open the input at all.

use thiserror::Error;

/// A fatal pipeline error.
#[derive(Debug, Error)]
pub enum TdrError {
    /// An internal invariant was violated (e.g. the token cursor overran
    /// the end of the stream). Indicates a bug, not bad input.
    #[error("internal error: {message}")]
    Internal {
        /// What went wrong.
        message: String,
    },

    /// The input file could not be opened or read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl TdrError {
    /// Create an internal-invariant error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for fallible TDR operations.
pub type TdrResult<T> = Result<T, TdrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_display() {
        let err = TdrError::internal("cursor overran the end of input");
        let msg = format!("{}", err);
        assert!(msg.contains("internal error"));
        assert!(msg.contains("cursor overran"));
    }

    #[test]
    fn test_io_display() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = TdrError::io("scene.tdr", source);
        let msg = format!("{}", err);
        assert!(msg.contains("scene.tdr"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(TdrError::internal("test"));
    }
}
