// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Draw command structures
//!
//! Fully decoded drawing commands as handed to the rasterizer by the GP0
//! command processor. All per-draw configuration travels in the command:
//! the rasterizer keeps no state between primitives apart from the drawing
//! area.
//!
//! Vertex positions are expected to be sign-extended from 11 bits (with the
//! drawing offset already applied); texture coordinates are 8-bit and wrap
//! modulo 256.

use super::types::{BlendMode, Color, DrawParams, TexCoord, TextureInfo, TextureWindow};

/// A rectangle (sprite) draw command
///
/// Sprites are axis-aligned and never Gouraud-shaded or dithered: the same
/// color modulates every pixel. Texture coordinates increase by one per
/// pixel from `texcoord`, wrapping at 256.
///
/// # Examples
///
/// ```
/// use raster_core::core::gpu::{Color, RectangleCommand};
///
/// let cmd = RectangleCommand {
///     x: 32,
///     y: 48,
///     width: 16,
///     height: 16,
///     color: Color { r: 128, g: 128, b: 128 },
///     ..Default::default()
/// };
/// assert!(!cmd.textured);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RectangleCommand {
    /// Top-left X coordinate in VRAM
    pub x: i32,

    /// Top-left Y coordinate in VRAM
    pub y: i32,

    /// Width in pixels (0 draws nothing)
    pub width: u32,

    /// Height in pixels (0 draws nothing)
    pub height: u32,

    /// Flat color (modulation color when textured)
    pub color: Color,

    /// Texture coordinate of the top-left pixel
    pub texcoord: TexCoord,

    /// Texture page and CLUT (ignored unless `textured`)
    pub texture: TextureInfo,

    /// Texture window (ignored unless `textured`)
    pub window: TextureWindow,

    /// Semi-transparency mode (ignored unless `semi_transparent`)
    pub blend_mode: BlendMode,

    /// Mask and interlace parameters
    pub params: DrawParams,

    /// Sample the texture page instead of using the flat color alone
    pub textured: bool,

    /// Use texels unmodified, skipping color modulation
    pub raw_texture: bool,

    /// Blend against the background with `blend_mode`
    pub semi_transparent: bool,
}

/// A polygon vertex: position, color, and texture coordinate
#[derive(Debug, Clone, Copy, Default)]
pub struct PolygonVertex {
    /// X coordinate in VRAM (sign-extended from 11 bits)
    pub x: i32,
    /// Y coordinate in VRAM (sign-extended from 11 bits)
    pub y: i32,
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// U texture coordinate
    pub u: u8,
    /// V texture coordinate
    pub v: u8,
}

/// A polygon (triangle or quadrilateral) draw command
///
/// A 4-vertex polygon is rasterized as the two triangles (0,1,2) and
/// (1,2,3), matching the hardware's quad decomposition. Flat-shaded
/// polygons carry the command color in every vertex.
#[derive(Debug, Clone, Default)]
pub struct PolygonCommand {
    /// Vertices; only the first `num_vertices` entries are used
    pub vertices: [PolygonVertex; 4],

    /// Number of vertices: 3 (triangle) or 4 (quad)
    pub num_vertices: u8,

    /// Texture page and CLUT (ignored unless `textured`)
    pub texture: TextureInfo,

    /// Texture window (ignored unless `textured`)
    pub window: TextureWindow,

    /// Semi-transparency mode (ignored unless `semi_transparent`)
    pub blend_mode: BlendMode,

    /// Mask and interlace parameters
    pub params: DrawParams,

    /// Gouraud shading: interpolate per-vertex colors
    pub shaded: bool,

    /// Sample the texture page
    pub textured: bool,

    /// Use texels unmodified, skipping color modulation and dithering
    pub raw_texture: bool,

    /// Blend against the background with `blend_mode`
    pub semi_transparent: bool,

    /// Apply the 4×4 ordered dither when truncating to 15-bit color
    pub dithering: bool,
}

/// A line vertex: position and color
#[derive(Debug, Clone, Copy, Default)]
pub struct LineVertex {
    /// X coordinate in VRAM (sign-extended from 11 bits)
    pub x: i32,
    /// Y coordinate in VRAM (sign-extended from 11 bits)
    pub y: i32,
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// A line (or polyline) draw command
///
/// Lines are single-pixel-wide and never textured. A polyline with N
/// vertices draws N-1 connected segments.
#[derive(Debug, Clone, Default)]
pub struct LineCommand {
    /// Polyline vertices (at least 2 for anything to be drawn)
    pub vertices: Vec<LineVertex>,

    /// Semi-transparency mode (ignored unless `semi_transparent`)
    pub blend_mode: BlendMode,

    /// Mask and interlace parameters
    pub params: DrawParams,

    /// Gouraud shading: interpolate the endpoint colors along the segment
    pub shaded: bool,

    /// Blend against the background with `blend_mode`
    pub semi_transparent: bool,

    /// Apply the 4×4 ordered dither when truncating to 15-bit color
    pub dithering: bool,
}
