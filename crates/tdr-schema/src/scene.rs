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

//! The built-in scene schema and schema queries.
//!
//! [`SceneSchema`] describes every tag a TDR scene file may contain. It is
//! built once, in code, and never mutated; the analyzer and the hover
//! service only read it. [`effective_schema`] resolves a tag's conditional
//! variants against a concrete node.

use crate::groups::GroupRegistry;
use crate::model::{AttributeSchema, ConditionalVariant, TagSchema, ValueType};
use tdr_core::Node;

/// The schema tree for TDR scene files.
///
/// The root is a sentinel named `"root"`; its children are the allowed
/// top-level tags.
#[derive(Debug, Clone)]
pub struct SceneSchema {
    /// Sentinel root schema.
    pub root: TagSchema,
}

impl SceneSchema {
    /// Builds the scene schema.
    pub fn new() -> Self {
        Self {
            root: build_schema(),
        }
    }

    /// Finds the first tag schema named `name`, searching depth-first from
    /// the root.
    pub fn get_tag_schema(&self, name: &str) -> Option<&TagSchema> {
        find_tag_recursive(&self.root, name)
    }

    /// Finds an attribute schema by tag and attribute name.
    pub fn get_attribute_schema(&self, tag_name: &str, attr_name: &str) -> Option<&AttributeSchema> {
        self.get_tag_schema(tag_name)
            .and_then(|tag| tag.get_attribute(attr_name))
    }
}

impl Default for SceneSchema {
    fn default() -> Self {
        Self::new()
    }
}

fn find_tag_recursive<'a>(tag: &'a TagSchema, name: &str) -> Option<&'a TagSchema> {
    if tag.name == name {
        return Some(tag);
    }
    for child in tag.children.values() {
        if let Some(found) = find_tag_recursive(child, name) {
            return Some(found);
        }
    }
    None
}

/// Computes the effective schema of `base` for a concrete `node`.
///
/// The first variant whose discriminator attribute matches the node's
/// concrete value wins: its attributes and children are merged into a copy
/// of the base (variant entries override on collision), text settings are
/// overridden when the variant enables text, and the discriminator pair is
/// recorded as `from_condition`. If no variant matches — or the base has
/// none — the base is returned unchanged.
///
/// The effective schema's attributes are always a superset of the base's.
pub fn effective_schema(base: &TagSchema, node: &Node) -> TagSchema {
    if base.variants.is_empty() {
        return base.clone();
    }

    for variant in &base.variants {
        let matches = node
            .attribute_content(&variant.discriminator_attr)
            .is_some_and(|content| content == variant.discriminator_value);
        if !matches {
            continue;
        }

        let mut effective = base.clone();
        for (name, attr) in &variant.attributes {
            effective.attributes.insert(name.clone(), attr.clone());
        }
        for (name, child) in &variant.children {
            effective.children.insert(name.clone(), child.clone());
        }
        if variant.allow_text {
            effective.allow_text = true;
            effective.text_type = variant.text_type;
        }
        effective.variants.clear();
        effective.from_condition = Some((
            variant.discriminator_attr.clone(),
            variant.discriminator_value.clone(),
        ));
        return effective;
    }

    base.clone()
}

/// Builds the full scene schema tree.
fn build_schema() -> TagSchema {
    let mut groups = GroupRegistry::new();
    groups.register(
        "transform",
        vec![
            TagSchema::new("position")
                .with_text(ValueType::Vec3)
                .with_hover("Position in the parent's space (x y z).")
                .with_detail("Position")
                .with_example("<position>0 1 0</position>"),
            TagSchema::new("rotation")
                .with_text(ValueType::Vec3)
                .with_hover("Euler rotation in degrees (x y z).")
                .with_detail("Rotation")
                .with_example("<rotation>0 90 0</rotation>"),
            TagSchema::new("scale")
                .with_text(ValueType::Vec3)
                .with_hover("Per-axis scale factors (x y z).")
                .with_detail("Scale")
                .with_example("<scale>1 1 1</scale>"),
        ],
    );

    TagSchema::new("root")
        .child(materials_schema())
        .child(camera_schema())
        .child(asset_schema(&groups))
        .child(lights_schema())
        .child(render_schema())
}

fn materials_schema() -> TagSchema {
    let color = TagSchema::new("color")
        .required()
        .with_text(ValueType::Color)
        .with_hover("RGB color of the material. Format: \"r,g,b\" or \"#RRGGBB\"")
        .with_detail("Material color (required)")
        .with_example("<color>#FF0000</color>")
        .with_example("<color>255,0,0</color>");

    let roughness = TagSchema::new("roughness")
        .with_text(ValueType::Float)
        .with_text_range(0.0, 1.0)
        .with_hover("Surface roughness. 0 is a perfect mirror, 1 fully diffuse.")
        .with_detail("Roughness [0, 1]")
        .with_example("<roughness>0.4</roughness>");

    let metallic = TagSchema::new("metallic")
        .with_text(ValueType::Float)
        .with_text_range(0.0, 1.0)
        .with_hover("Metalness of the surface. 0 is dielectric, 1 fully metallic.")
        .with_detail("Metallic [0, 1]")
        .with_example("<metallic>1</metallic>");

    let texture = TagSchema::new("texture")
        .attribute(
            AttributeSchema::new("src", ValueType::FilePath)
                .required()
                .with_hover("Path to the texture image, relative to the working directory.")
                .with_detail("Texture file (required)")
                .with_example("src=\"textures/rust.png\""),
        )
        .with_hover("Image texture applied to the material.")
        .with_detail("Texture map")
        .with_example("<texture src=\"textures/rust.png\"/>");

    let material = TagSchema::new("material")
        .multiple()
        .attribute(
            AttributeSchema::new("name", ValueType::String)
                .required()
                .with_hover("Unique identifier for this material. Used to reference it in assets.")
                .with_detail("Material name (required)")
                .with_example("name=\"metal\"")
                .with_example("name=\"wood\""),
        )
        .child(color)
        .child(roughness)
        .child(metallic)
        .child(texture)
        .with_hover("Material definition with all its properties.")
        .with_detail("Material definition")
        .with_example("<material name=\"metal\"><color>#C0C0C0</color></material>");

    TagSchema::new("materials")
        .child(material)
        .with_hover("List of materials in the scene. Contains <material> tags.")
        .with_detail("Materials container")
        .with_example("<materials>...</materials>")
}

fn camera_schema() -> TagSchema {
    TagSchema::new("camera")
        .attribute(
            AttributeSchema::new("position", ValueType::Vec3)
                .required()
                .with_hover("3D position of the camera in world space (x y z).")
                .with_detail("Camera position (required)")
                .with_example("position=\"0 4 -10\""),
        )
        .attribute(
            AttributeSchema::new("rotation", ValueType::Vec3)
                .with_hover("Euler rotation of the camera in degrees (x y z).")
                .with_detail("Camera rotation")
                .with_example("rotation=\"15 0 0\""),
        )
        .attribute(
            AttributeSchema::new("fov", ValueType::Float)
                .with_default("60")
                .with_range(1.0, 180.0)
                .with_hover("Field of view in degrees. Default: 60. Range: [1, 180]")
                .with_detail("Field of view (optional, default: 60)")
                .with_example("fov=\"90\"")
                .with_example("fov=\"45.5\""),
        )
        .with_hover("Camera definition with position, rotation and field of view.")
        .with_detail("Camera")
        .with_example("<camera position=\"0 4 -10\" fov=\"60\"/>")
}

fn asset_schema(groups: &GroupRegistry) -> TagSchema {
    let primitive = TagSchema::new("primitive")
        .attribute(
            AttributeSchema::new("type", ValueType::Enum)
                .required()
                .with_enum_values(["sphere", "cube", "plane", "cylinder"])
                .with_hover("Shape of the primitive.")
                .with_detail("Primitive shape (required)")
                .with_example("type=\"sphere\""),
        )
        .attribute(
            AttributeSchema::new("size", ValueType::Vec3)
                .with_hover("Extent of the primitive along each axis (x y z).")
                .with_detail("Primitive size")
                .with_example("size=\"1 1 1\""),
        )
        .with_hover("Built-in parametric shape.")
        .with_detail("Primitive shape")
        .with_example("<primitive type=\"sphere\"/>");

    let object = TagSchema::new("object")
        .attribute(
            AttributeSchema::new("src", ValueType::FilePath)
                .required()
                .with_hover("Path to the mesh file, relative to the working directory.")
                .with_detail("Mesh file (required)")
                .with_example("src=\"meshes/teapot.obj\""),
        )
        .attribute(
            AttributeSchema::new("scale", ValueType::Float)
                .with_default("1")
                .with_hover("Uniform scale applied to the imported mesh.")
                .with_detail("Import scale (optional, default: 1)")
                .with_example("scale=\"0.01\""),
        )
        .with_hover("Mesh imported from a file.")
        .with_detail("Imported mesh")
        .with_example("<object src=\"meshes/teapot.obj\"/>");

    TagSchema::new("asset")
        .multiple()
        .include_group(groups, "transform")
        .attribute(
            AttributeSchema::new("id", ValueType::String)
                .required()
                .with_hover("Unique identifier for this asset.")
                .with_detail("Asset id (required)")
                .with_example("id=\"floor\""),
        )
        .attribute(
            AttributeSchema::new("type", ValueType::Enum)
                .required()
                .with_enum_values(["primitive", "object"])
                .with_hover(
                    "Kind of asset. \"primitive\" allows a <primitive> child, \
                     \"object\" allows an <object> child.",
                )
                .with_detail("Asset kind (required)")
                .with_example("type=\"primitive\""),
        )
        .attribute(
            AttributeSchema::new("material", ValueType::String)
                .with_hover("Name of the material applied to this asset.")
                .with_detail("Material reference")
                .with_example("material=\"metal\""),
        )
        .variant(ConditionalVariant::new("type", "primitive").child(primitive))
        .variant(ConditionalVariant::new("type", "object").child(object))
        .with_hover("A renderable object in the scene, either a primitive or an imported mesh.")
        .with_detail("Scene asset")
        .with_example("<asset id=\"ball\" type=\"primitive\"><primitive type=\"sphere\"/></asset>")
}

fn lights_schema() -> TagSchema {
    let position = AttributeSchema::new("position", ValueType::Vec3)
        .required()
        .with_hover("Light position in world space (x y z).")
        .with_detail("Light position (required)")
        .with_example("position=\"0 5 0\"");

    let direction = AttributeSchema::new("direction", ValueType::Vec3)
        .required()
        .with_hover("Direction the light points at (x y z).")
        .with_detail("Light direction (required)")
        .with_example("direction=\"0 -1 0\"");

    let light = TagSchema::new("light")
        .multiple()
        .attribute(
            AttributeSchema::new("type", ValueType::Enum)
                .required()
                .with_enum_values(["point", "directional", "spot"])
                .with_hover("Kind of light source.")
                .with_detail("Light kind (required)")
                .with_example("type=\"point\""),
        )
        .attribute(
            AttributeSchema::new("color", ValueType::Color)
                .with_default("#FFFFFF")
                .with_hover("Light color. Format: \"r,g,b\" or \"#RRGGBB\"")
                .with_detail("Light color (optional, default: #FFFFFF)")
                .with_example("color=\"#FFE0B0\""),
        )
        .attribute(
            AttributeSchema::new("intensity", ValueType::Float)
                .with_default("1")
                .with_range(0.0, 10000.0)
                .with_hover("Light intensity. Range: [0, 10000]")
                .with_detail("Intensity (optional, default: 1)")
                .with_example("intensity=\"2.5\""),
        )
        .variant(
            ConditionalVariant::new("type", "point")
                .attribute(position.clone())
                .attribute(
                    AttributeSchema::new("radius", ValueType::Float)
                        .with_range(0.0, 1000.0)
                        .with_hover("Soft-shadow radius of the emitter. Range: [0, 1000]")
                        .with_detail("Emitter radius")
                        .with_example("radius=\"0.2\""),
                ),
        )
        .variant(ConditionalVariant::new("type", "directional").attribute(direction.clone()))
        .variant(
            ConditionalVariant::new("type", "spot")
                .attribute(position)
                .attribute(direction)
                .attribute(
                    AttributeSchema::new("angle", ValueType::Float)
                        .with_default("45")
                        .with_range(0.0, 180.0)
                        .with_hover("Full cone angle in degrees. Range: [0, 180]")
                        .with_detail("Cone angle (optional, default: 45)")
                        .with_example("angle=\"30\""),
                ),
        )
        .with_hover("A light source. The \"type\" attribute selects which properties apply.")
        .with_detail("Light source")
        .with_example("<light type=\"point\" position=\"0 5 0\"/>");

    TagSchema::new("lights")
        .child(light)
        .with_hover("List of light sources in the scene. Contains <light> tags.")
        .with_detail("Lights container")
        .with_example("<lights>...</lights>")
}

fn render_schema() -> TagSchema {
    TagSchema::new("render")
        .attribute(
            AttributeSchema::new("width", ValueType::Int)
                .with_default("1920")
                .with_range(1.0, 16384.0)
                .with_hover("Output image width in pixels. Range: [1, 16384]")
                .with_detail("Image width (optional, default: 1920)")
                .with_example("width=\"1280\""),
        )
        .attribute(
            AttributeSchema::new("height", ValueType::Int)
                .with_default("1080")
                .with_range(1.0, 16384.0)
                .with_hover("Output image height in pixels. Range: [1, 16384]")
                .with_detail("Image height (optional, default: 1080)")
                .with_example("height=\"720\""),
        )
        .attribute(
            AttributeSchema::new("samples", ValueType::Int)
                .with_default("64")
                .with_range(1.0, 65536.0)
                .with_hover("Samples per pixel. Range: [1, 65536]")
                .with_detail("Samples per pixel (optional, default: 64)")
                .with_example("samples=\"256\""),
        )
        .attribute(
            AttributeSchema::new("exposure", ValueType::Float)
                .with_default("0")
                .with_hover("Exposure compensation in stops.")
                .with_detail("Exposure (optional, default: 0)")
                .with_example("exposure=\"-0.5\""),
        )
        .child(
            TagSchema::new("tonemap")
                .with_text(ValueType::Enum)
                .with_text_enum(["linear", "filmic", "aces"])
                .with_hover("Tonemapping curve applied to the final image.")
                .with_detail("Tonemap curve")
                .with_example("<tonemap>filmic</tonemap>"),
        )
        .with_hover("Render settings: output resolution and sampling.")
        .with_detail("Render settings")
        .with_example("<render width=\"1920\" height=\"1080\" samples=\"64\"/>")
}
