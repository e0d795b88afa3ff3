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

//! End-to-end scenarios for the full pipeline, driven through the
//! language service exactly the way an editor integration would.

use std::io::Write;
use tdr::{LanguageService, Severity};

fn service() -> LanguageService {
    LanguageService::new()
}

// ==================== Scenario: well-formed material block ====================

#[test]
fn test_well_formed_material_block() {
    let result = service().parse_content(
        "<materials><material name=\"metal\"><color>#FF8800</color></material></materials>",
    );

    assert!(result.is_clean(), "got: {:?}", result.diagnostics);

    let materials = &result.tree.children[0];
    assert_eq!(result.tree.children.len(), 1);
    assert_eq!(materials.identifier, "materials");

    let material = &materials.children[0];
    assert_eq!(material.identifier, "material");
    assert_eq!(material.attribute("name").unwrap().content, "metal");

    let color = &material.children[0];
    assert_eq!(color.text, "#FF8800");
}

// ==================== Scenario: unknown attribute ====================

#[test]
fn test_unknown_attribute() {
    let result = service().parse_content("<camera position=\"0 1 0\" bogus=\"x\" fov=\"60\"/>");

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.message, "Unknown property 'bogus'");
    // `bogus` starts at column 26.
    assert_eq!(diagnostic.location.pos.column(), 26);
    assert_eq!(diagnostic.severity, Some(Severity::Error));

    // The tree is still built.
    assert_eq!(result.tree.children.len(), 1);
    assert_eq!(result.tree.children[0].attribute_content("bogus"), Some("x"));
}

// ==================== Scenario: range violation ====================

#[test]
fn test_fov_range_violation() {
    let result = service().parse_content("<camera position=\"0 1 0\" fov=\"500\"/>");

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert!(diagnostic.message.contains("[1, 180]"), "got: {}", diagnostic.message);
    // Opening quote at column 30; the content location is one past it.
    assert_eq!(diagnostic.location.pos.column(), 31);
}

// ==================== Scenario: crossed tags ====================

#[test]
fn test_crossed_tags() {
    let result = service().parse_content("<a><b></a></b>");

    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message.contains("Unclosed tag '<b>'")));

    // `a` contains the partial `b`.
    let a = result
        .tree
        .children
        .iter()
        .find(|c| c.identifier == "a")
        .expect("a was built");
    assert_eq!(a.children.len(), 1);
    assert_eq!(a.children[0].identifier, "b");
}

// ==================== Scenario: variant dispatch ====================

#[test]
fn test_variant_dispatch_primitive() {
    let result = service()
        .parse_content("<asset type=\"primitive\" id=\"x\"><primitive type=\"sphere\"/></asset>");
    assert!(result.is_clean(), "got: {:?}", result.diagnostics);
}

#[test]
fn test_variant_dispatch_object_rejects_primitive_child() {
    let result = service()
        .parse_content("<asset type=\"object\" id=\"x\"><primitive type=\"sphere\"/></asset>");
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message == "Unknown identifier 'primitive'"));
}

// ==================== Scenario: hover on attribute name ====================

#[test]
fn test_hover_on_material_name_attribute() {
    let service = service();
    let result = service.parse_content(
        "<materials><material name=\"metal\"><color>#FF8800</color></material></materials>",
    );
    assert!(result.is_clean());

    // `name` starts at column 22 inside `<material name=...>`.
    let hover = service.hover(&result.tree, 1, 22).expect("hover hit");
    assert!(hover.contains("(attribute) name: string"), "got: {}", hover);
}

#[test]
fn test_hover_miss_is_none() {
    let service = service();
    let result = service.parse_content("<camera position=\"0 1 0\"/>");
    assert!(service.hover(&result.tree, 7, 1).is_none());
}

// ==================== Cross-stage behavior ====================

#[test]
fn test_stage_ordering_of_diagnostics() {
    // One lexical, two syntactic, two semantic problems in one input.
    let result = service().parse_content("<a ~></b><wormhole/>");

    let index_of = |needle: &str| {
        result
            .diagnostics
            .iter()
            .position(|d| d.message.contains(needle))
            .unwrap_or_else(|| panic!("missing diagnostic: {}", needle))
    };

    let lexical = index_of("Unexpected character '~'");
    let syntactic = index_of("Unclosed tag '<a>'");
    let stray = index_of("Unexpected closing tag '</b>'");
    let semantic = index_of("Unknown identifier 'wormhole'");

    assert!(lexical < syntactic);
    assert!(syntactic < stray);
    assert!(stray < semantic);
}

#[test]
fn test_tolerant_pipeline_still_analyzes() {
    // A truncated file: the unterminated tag is discarded with a
    // diagnostic, while the well-formed sibling before it is still fully
    // validated.
    let result =
        service().parse_content("<camera position=\"0 1 0\" fov=\"500\"/><asset id=\"x\"");
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message.contains("Unexpected end of file")));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message.contains("[1, 180]")));
    assert_eq!(result.tree.children.len(), 1);
}

// ==================== Diagnostic rendering ====================

#[test]
fn test_diagnostic_format_with_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<camera position=\"0 1 0\" fov=\"500\"/>").unwrap();

    let result = service().parse_file(file.path());
    assert_eq!(result.diagnostics.len(), 1);

    let rendered = result.diagnostics[0].to_string();
    let expected_prefix = format!("{}:1:31:", file.path().display());
    assert!(
        rendered.starts_with(&expected_prefix),
        "got: {} (wanted prefix {})",
        rendered,
        expected_prefix
    );
}

#[test]
fn test_unreadable_file_single_diagnostic_blank_tree() {
    let result = service().parse_file("no/such/scene.tdr");
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.tree.children.is_empty());
    let rendered = result.diagnostics[0].to_string();
    assert!(rendered.starts_with("no/such/scene.tdr:"), "got: {}", rendered);
}

// ==================== FilePath validation end to end ====================

#[test]
fn test_texture_src_must_exist() {
    let result = service().parse_content(
        "<materials><material name=\"m\">\
           <color>#000000</color>\
           <texture src=\"definitely/not/here.png\"/>\
         </material></materials>",
    );
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message.contains("no such file or directory")));
}

#[test]
fn test_texture_src_accepts_real_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "png").unwrap();

    let source = format!(
        "<materials><material name=\"m\">\
           <color>#000000</color>\
           <texture src=\"{}\"/>\
         </material></materials>",
        file.path().display()
    );
    let result = service().parse_content(&source);
    assert!(result.is_clean(), "got: {:?}", result.diagnostics);
}

// ==================== Larger conforming scene ====================

#[test]
fn test_full_scene_is_clean() {
    let scene = r##"
// showcase scene
<materials>
    <material name="metal">
        <color>#C0C0C0</color>
        <roughness>0.25</roughness>
        <metallic>1</metallic>
    </material>
    <material name="matte">
        <color>40,40,45</color>
    </material>
</materials>

<camera position="0 4 -10" rotation="15 0 0" fov="60"/>

<asset id="ball" type="primitive" material="metal">
    <position>0 1 0</position>
    <primitive type="sphere"/>
</asset>
<asset id="floor" type="primitive" material="matte">
    <scale>10 1 10</scale>
    <primitive type="plane"/>
</asset>

<lights>
    <light type="point" position="0 5 0" intensity="2"/>
    <light type="directional" direction="0 -1 0.2" color="#FFF4E0"/>
</lights>

<render width="1920" height="1080" samples="128"/>
"##;

    let result = service().parse_content(scene);
    assert!(result.is_clean(), "got: {:?}", result.diagnostics);
    assert_eq!(result.tree.children.len(), 6);
}

#[test]
fn test_repeated_singleton_tag_rejected() {
    let result = service().parse_content(
        "<camera position=\"0 0 0\"/><camera position=\"1 1 1\"/>",
    );
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.message.contains("appears 2 times but is not allowed to repeat")));
}
