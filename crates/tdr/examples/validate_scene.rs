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

//! Scene Validation Example
//!
//! Parses a TDR scene, prints every diagnostic the pipeline finds, and
//! answers a hover query the way an editor integration would.
//!
//! Run with: cargo run --example validate_scene

use tdr::LanguageService;

fn main() {
    println!("=== TDR Scene Validation Example ===\n");

    let scene = r#"
// a small showcase scene, with a few deliberate mistakes
<materials>
    <material name="metal">
        <color>#C0C0C0</color>
        <roughness>1.4</roughness>
    </material>
    <material name="metal" glossy="very">
        <color>#808080</color>
    </material>
</materials>

<camera position="0 4 -10" fov="500"/>

<asset id="ball" type="primitive">
    <position>0 1 0</position>
    <primitive type="dodecahedron"/>
</asset>
"#;

    let service = LanguageService::new();
    let result = service.parse_content(scene);

    println!("Parsed {} top-level tags.\n", result.tree.children.len());

    if result.is_clean() {
        println!("Scene is valid.");
    } else {
        println!("Found {} problems:", result.diagnostics.len());
        for diagnostic in &result.diagnostics {
            println!("  {}", diagnostic);
        }
    }

    // Hover over the `fov` attribute of the camera (line 13, column 28).
    println!("\n--- hover on `fov` ---");
    match service.hover(&result.tree, 13, 28) {
        Some(markdown) => println!("{}", markdown),
        None => println!("(no hover here)"),
    }
}
