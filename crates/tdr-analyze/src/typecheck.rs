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

//! Value-type validation for attribute contents and text blocks.
//!
//! [`validate_value`] checks a raw string against a [`ValueType`] plus the
//! optional range and enum constraints, returning a ready-to-report message
//! on failure. File-path existence checks go through the [`PathChecker`]
//! seam so tests can run without touching the filesystem.

use tdr_schema::ValueType;

/// Validates file-path values.
///
/// `None` means the path is acceptable; `Some(reason)` carries the
/// human-readable rejection. The default implementation is
/// [`FsPathChecker`]; tests may substitute a stub.
pub trait PathChecker: Send + Sync {
    /// Checks `path`, returning a rejection reason if it is not usable.
    fn check(&self, path: &str) -> Option<String>;
}

/// [`PathChecker`] backed by the real filesystem.
///
/// A path is accepted when it exists, is a regular file, and grants read
/// permission to at least one of owner, group, or others. Relative paths
/// resolve against the current working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathChecker;

impl PathChecker for FsPathChecker {
    fn check(&self, path: &str) -> Option<String> {
        if path.is_empty() {
            return Some("Invalid file path: path is empty".to_string());
        }
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Some("Invalid file path: no such file or directory".to_string());
            }
            Err(err) => return Some(format!("Invalid file path: {}", err)),
        };
        if !metadata.is_file() {
            return Some("Invalid file path: not a regular file".to_string());
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o444 == 0 {
                return Some("Invalid file path: permission denied".to_string());
            }
        }
        None
    }
}

/// Validates `text` against a value type and its constraints.
///
/// Numeric parses must consume the whole string; ranges are inclusive at
/// both ends and, for [`ValueType::Vec3`], apply to every component; enum
/// matching is case-sensitive. No trimming is performed anywhere.
///
/// # Errors
///
/// Returns a human-readable message describing the first violation found.
pub fn validate_value(
    value_type: ValueType,
    range: Option<(f32, f32)>,
    enum_values: &[String],
    text: &str,
    paths: &dyn PathChecker,
) -> Result<(), String> {
    match value_type {
        ValueType::String => Ok(()),
        ValueType::Float => {
            let value: f32 = text
                .parse()
                .map_err(|_| invalid(text, "Expected a float value"))?;
            check_range(text, value, range)
        }
        ValueType::Int => {
            let value: i32 = text
                .parse()
                .map_err(|_| invalid(text, "Expected an integer value"))?;
            check_range(text, value as f32, range)
        }
        ValueType::Bool => {
            if matches!(text, "1" | "0" | "true" | "false") {
                Ok(())
            } else {
                Err(invalid(text, "Expected one of '1', '0', 'true', 'false'"))
            }
        }
        ValueType::Vec3 => {
            let parts: Vec<&str> = text.split(' ').collect();
            if parts.len() != 3 {
                return Err(invalid(text, "Wrong amount of numbers for a vec3"));
            }
            for part in &parts {
                let value: f32 = part.parse().map_err(|_| {
                    format!(
                        "Invalid parameter '{}'. '{}' is not a valid number",
                        text, part
                    )
                })?;
                if let Some((min, max)) = range {
                    if value < min || value > max {
                        return Err(format!(
                            "Invalid parameter '{}'. '{}' is out of range [{}, {}]",
                            text, part, min, max
                        ));
                    }
                }
            }
            Ok(())
        }
        ValueType::Color => {
            if is_valid_color(text) {
                Ok(())
            } else {
                Err(invalid(text, "Expected \"#RRGGBB\" or \"r,g,b\""))
            }
        }
        ValueType::FilePath => match paths.check(text) {
            None => Ok(()),
            Some(reason) => Err(reason),
        },
        ValueType::Enum => {
            if enum_values.iter().any(|v| v == text) {
                Ok(())
            } else {
                let allowed = enum_values
                    .iter()
                    .map(|v| format!("'{}'", v))
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(format!(
                    "Invalid parameter '{}'. Must be one of [{}]",
                    text, allowed
                ))
            }
        }
    }
}

fn invalid(text: &str, reason: &str) -> String {
    format!("Invalid parameter '{}'. {}", text, reason)
}

fn check_range(text: &str, value: f32, range: Option<(f32, f32)>) -> Result<(), String> {
    if let Some((min, max)) = range {
        if value < min || value > max {
            return Err(format!(
                "Invalid parameter '{}'. Value must be in range [{}, {}]",
                text, min, max
            ));
        }
    }
    Ok(())
}

/// Accepts `#RRGGBB` (exactly 7 characters, hex digits) or `r,g,b` with
/// decimal components in `[0, 255]` and exactly two commas. Surrounding
/// whitespace is significant.
fn is_valid_color(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if let Some(hex) = text.strip_prefix('#') {
        return text.len() == 7 && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let parts: Vec<&str> = text.split(',').collect();
    parts.len() == 3 && parts.iter().all(|p| is_valid_byte(p))
}

fn is_valid_byte(text: &str) -> bool {
    matches!(text.parse::<i64>(), Ok(value) if (0..=255).contains(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Stub accepting every path.
    struct NoPaths;
    impl PathChecker for NoPaths {
        fn check(&self, _path: &str) -> Option<String> {
            None
        }
    }

    fn validate(
        value_type: ValueType,
        range: Option<(f32, f32)>,
        enum_values: &[String],
        text: &str,
    ) -> Result<(), String> {
        validate_value(value_type, range, enum_values, text, &NoPaths)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    // ==================== String ====================

    #[test]
    fn test_string_always_valid() {
        assert!(validate(ValueType::String, None, &[], "").is_ok());
        assert!(validate(ValueType::String, None, &[], "anything at all").is_ok());
    }

    // ==================== Float ====================

    #[test]
    fn test_float_valid() {
        assert!(validate(ValueType::Float, None, &[], "60").is_ok());
        assert!(validate(ValueType::Float, None, &[], "45.5").is_ok());
        assert!(validate(ValueType::Float, None, &[], "-0.25").is_ok());
    }

    #[test]
    fn test_float_whole_string_must_parse() {
        assert!(validate(ValueType::Float, None, &[], "60deg").is_err());
        assert!(validate(ValueType::Float, None, &[], " 60").is_err());
        assert!(validate(ValueType::Float, None, &[], "").is_err());
    }

    #[test]
    fn test_float_range_inclusive() {
        let range = Some((1.0, 180.0));
        assert!(validate(ValueType::Float, range, &[], "1").is_ok());
        assert!(validate(ValueType::Float, range, &[], "180").is_ok());
        assert!(validate(ValueType::Float, range, &[], "0.999").is_err());
        assert!(validate(ValueType::Float, range, &[], "180.001").is_err());
    }

    #[test]
    fn test_float_range_message_quotes_bounds() {
        let err = validate(ValueType::Float, Some((1.0, 180.0)), &[], "500").unwrap_err();
        assert!(err.contains("[1, 180]"), "message was: {}", err);
        assert!(err.contains("'500'"));
    }

    // ==================== Int ====================

    #[test]
    fn test_int_valid() {
        assert!(validate(ValueType::Int, None, &[], "42").is_ok());
        assert!(validate(ValueType::Int, None, &[], "-7").is_ok());
    }

    #[test]
    fn test_int_rejects_float_syntax() {
        assert!(validate(ValueType::Int, None, &[], "1.5").is_err());
        assert!(validate(ValueType::Int, None, &[], "1e3").is_err());
    }

    #[test]
    fn test_int_range() {
        let range = Some((1.0, 16384.0));
        assert!(validate(ValueType::Int, range, &[], "1920").is_ok());
        assert!(validate(ValueType::Int, range, &[], "0").is_err());
        assert!(validate(ValueType::Int, range, &[], "20000").is_err());
    }

    // ==================== Bool ====================

    #[test]
    fn test_bool_accepts_exactly_four_spellings() {
        for value in ["1", "0", "true", "false"] {
            assert!(validate(ValueType::Bool, None, &[], value).is_ok());
        }
        for value in ["True", "FALSE", "yes", "2", ""] {
            assert!(validate(ValueType::Bool, None, &[], value).is_err());
        }
    }

    // ==================== Vec3 ====================

    #[test]
    fn test_vec3_valid() {
        assert!(validate(ValueType::Vec3, None, &[], "0 1 0").is_ok());
        assert!(validate(ValueType::Vec3, None, &[], "-1.5 2.25 3").is_ok());
    }

    #[test]
    fn test_vec3_wrong_arity() {
        assert!(validate(ValueType::Vec3, None, &[], "1 2").is_err());
        assert!(validate(ValueType::Vec3, None, &[], "1 2 3 4").is_err());
        assert!(validate(ValueType::Vec3, None, &[], "").is_err());
    }

    #[test]
    fn test_vec3_double_space_is_invalid() {
        // Split on single ASCII spaces: a doubled space makes four parts.
        assert!(validate(ValueType::Vec3, None, &[], "1  2 3").is_err());
    }

    #[test]
    fn test_vec3_component_not_a_number() {
        let err = validate(ValueType::Vec3, None, &[], "1 x 3").unwrap_err();
        assert!(err.contains("'x' is not a valid number"), "message was: {}", err);
    }

    #[test]
    fn test_vec3_range_applies_per_component() {
        let range = Some((0.0, 1.0));
        assert!(validate(ValueType::Vec3, range, &[], "0 0.5 1").is_ok());
        let err = validate(ValueType::Vec3, range, &[], "0 2 1").unwrap_err();
        assert!(err.contains("'2' is out of range [0, 1]"), "message was: {}", err);
    }

    // ==================== Color ====================

    #[test]
    fn test_color_hex_valid() {
        assert!(validate(ValueType::Color, None, &[], "#FF8800").is_ok());
        assert!(validate(ValueType::Color, None, &[], "#00ff00").is_ok());
    }

    #[test]
    fn test_color_hex_invalid() {
        assert!(validate(ValueType::Color, None, &[], "#FF880").is_err());
        assert!(validate(ValueType::Color, None, &[], "#FF88001").is_err());
        assert!(validate(ValueType::Color, None, &[], "#GG8800").is_err());
    }

    #[test]
    fn test_color_rgb_valid() {
        assert!(validate(ValueType::Color, None, &[], "255,0,0").is_ok());
        assert!(validate(ValueType::Color, None, &[], "0,128,255").is_ok());
    }

    #[test]
    fn test_color_rgb_component_bounds() {
        assert!(validate(ValueType::Color, None, &[], "256,0,0").is_err());
        assert!(validate(ValueType::Color, None, &[], "-1,0,0").is_err());
    }

    #[test]
    fn test_color_rgb_comma_count() {
        assert!(validate(ValueType::Color, None, &[], "255,0").is_err());
        assert!(validate(ValueType::Color, None, &[], "255,0,0,0").is_err());
    }

    #[test]
    fn test_color_whitespace_is_significant() {
        assert!(validate(ValueType::Color, None, &[], "255, 0, 0").is_err());
        assert!(validate(ValueType::Color, None, &[], " #FF8800").is_err());
    }

    #[test]
    fn test_color_empty_is_invalid() {
        assert!(validate(ValueType::Color, None, &[], "").is_err());
    }

    // ==================== Enum ====================

    #[test]
    fn test_enum_exact_match() {
        let values = strings(&["sphere", "cube"]);
        assert!(validate(ValueType::Enum, None, &values, "sphere").is_ok());
        assert!(validate(ValueType::Enum, None, &values, "Sphere").is_err());
        assert!(validate(ValueType::Enum, None, &values, "cone").is_err());
    }

    #[test]
    fn test_enum_message_lists_allowed_values() {
        let values = strings(&["point", "directional", "spot"]);
        let err = validate(ValueType::Enum, None, &values, "area").unwrap_err();
        assert!(err.contains("'point', 'directional', 'spot'"), "message was: {}", err);
    }

    // ==================== FilePath ====================

    struct StubPaths(Option<String>);
    impl PathChecker for StubPaths {
        fn check(&self, _path: &str) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_filepath_uses_checker() {
        let accept = StubPaths(None);
        assert!(validate_value(ValueType::FilePath, None, &[], "x.obj", &accept).is_ok());

        let reject = StubPaths(Some("Invalid file path: no such file or directory".into()));
        let err = validate_value(ValueType::FilePath, None, &[], "x.obj", &reject).unwrap_err();
        assert!(err.contains("no such file"));
    }

    #[test]
    fn test_fs_checker_accepts_readable_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "v 0 0 0").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert_eq!(FsPathChecker.check(&path), None);
    }

    #[test]
    fn test_fs_checker_rejects_missing_file() {
        let reason = FsPathChecker.check("definitely/not/here.obj").unwrap();
        assert!(reason.contains("no such file or directory"));
    }

    #[test]
    fn test_fs_checker_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let reason = FsPathChecker.check(dir.path().to_str().unwrap()).unwrap();
        assert!(reason.contains("not a regular file"));
    }

    #[test]
    fn test_fs_checker_rejects_empty_path() {
        let reason = FsPathChecker.check("").unwrap();
        assert!(reason.contains("path is empty"));
    }
}
