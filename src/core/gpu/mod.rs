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

//! GPU software rasterizer
//!
//! This module implements the drawing engine of the Sony CXD8561Q GPU used
//! in the PlayStation console: rectangles (sprites), single-pixel-wide
//! lines, and triangles, rendered into a 1024×512 16-bit VRAM surface.
//!
//! # Coordinate System
//!
//! The coordinate system origin (0, 0) is at the top-left corner of VRAM:
//! - X-axis: 0 to 1023 (left to right)
//! - Y-axis: 0 to 511 (top to bottom)
//!
//! Vertex positions arrive sign-extended from 11 bits, with the drawing
//! offset already applied by the command processor.
//!
//! # Color Format
//!
//! VRAM pixels use 16-bit color in 5-5-5 RGB format:
//! - Bits 0-4: Red (5 bits)
//! - Bits 5-9: Green (5 bits)
//! - Bits 10-14: Blue (5 bits)
//! - Bit 15: Mask bit (used for draw masking and semi-transparency)
//!
//! # References
//!
//! - [PSX-SPX: GPU](http://problemkaputt.de/psx-spx.htm#gpu)
//! - [PSX-SPX: GPU Rendering](http://problemkaputt.de/psx-spx.htm#gpurenderstatecommands)

// Module declarations
mod primitives;
mod render;
mod types;
mod vram;

#[cfg(test)]
mod tests;

// Public re-exports
pub use primitives::*;
pub use render::{
    DitherLut, DrawLineFn, DrawRectangleFn, DrawTriangleFn, DITHER_LUT, DITHER_LUT_SIZE,
    DRAW_LINE_FUNCTIONS, DRAW_RECTANGLE_FUNCTIONS, DRAW_TRIANGLE_FUNCTIONS,
    MAX_PRIMITIVE_HEIGHT, MAX_PRIMITIVE_WIDTH,
};
pub use types::*;
pub use vram::{Vram, VRAM_HEIGHT, VRAM_WIDTH};

/// Software rasterizer for drawing primitives
///
/// Draws one fully decoded command at a time into a caller-owned [`Vram`]
/// surface. The rasterizer keeps no state between commands apart from the
/// drawing area; everything else travels in the command structure.
///
/// # Examples
///
/// ```
/// use raster_core::core::gpu::{Color, Rasterizer, RectangleCommand, Vram};
///
/// let mut vram = Vram::new();
/// let mut rasterizer = Rasterizer::new();
/// rasterizer.set_drawing_area(0, 0, 319, 239);
///
/// let cmd = RectangleCommand {
///     x: 0,
///     y: 0,
///     width: 320,
///     height: 240,
///     color: Color { r: 0, g: 0, b: 255 },
///     ..Default::default()
/// };
/// rasterizer.draw_rectangle(&mut vram, &cmd);
/// assert_eq!(vram.read_pixel(160, 120), 0x7C00); // Blue
/// ```
pub struct Rasterizer {
    /// Drawing area (clipping rectangle)
    ///
    /// All drawing operations are clipped to this rectangle.
    drawing_area: DrawingArea,
}

impl Rasterizer {
    /// Create a new rasterizer with default clipping (full VRAM)
    pub fn new() -> Self {
        Self {
            drawing_area: DrawingArea::default(),
        }
    }

    /// Set the drawing area
    ///
    /// All drawing operations are clipped to this rectangle. Coordinates
    /// are inclusive; `right < left` or `bottom < top` rejects everything.
    pub fn set_drawing_area(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.drawing_area = DrawingArea {
            left,
            top,
            right,
            bottom,
        };
    }

    /// The current drawing area
    pub fn drawing_area(&self) -> &DrawingArea {
        &self.drawing_area
    }

    /// Draw a rectangle (sprite)
    ///
    /// Looks up the rasterizer specialization for the command's flags and
    /// scans the rectangle. Sprites never dither and never Gouraud-shade.
    pub fn draw_rectangle(&self, vram: &mut Vram, cmd: &RectangleCommand) {
        log::trace!(
            "Drawing rectangle: pos=({}, {}) size={}x{} textured={} raw={} semi_transparent={}",
            cmd.x,
            cmd.y,
            cmd.width,
            cmd.height,
            cmd.textured,
            cmd.raw_texture,
            cmd.semi_transparent
        );

        let draw = DRAW_RECTANGLE_FUNCTIONS[cmd.textured as usize][cmd.raw_texture as usize]
            [cmd.semi_transparent as usize];
        draw(vram, &self.drawing_area, cmd);
    }

    /// Draw one line segment
    ///
    /// The caller iterates polyline segments; see [`Self::draw_polyline`]
    /// for the whole-command form.
    pub fn draw_line(&self, vram: &mut Vram, cmd: &LineCommand, p0: &LineVertex, p1: &LineVertex) {
        log::trace!(
            "Drawing line: ({}, {}) -> ({}, {}) shaded={} semi_transparent={} dithering={}",
            p0.x,
            p0.y,
            p1.x,
            p1.y,
            cmd.shaded,
            cmd.semi_transparent,
            cmd.dithering
        );

        let draw = DRAW_LINE_FUNCTIONS[cmd.shaded as usize][cmd.semi_transparent as usize]
            [cmd.dithering as usize];
        draw(vram, &self.drawing_area, cmd, p0, p1);
    }

    /// Draw a polyline as consecutive segments
    ///
    /// Requires at least 2 vertices; otherwise nothing is drawn.
    pub fn draw_polyline(&self, vram: &mut Vram, cmd: &LineCommand) {
        if cmd.vertices.len() < 2 {
            return;
        }

        for pair in cmd.vertices.windows(2) {
            self.draw_line(vram, cmd, &pair[0], &pair[1]);
        }
    }

    /// Draw a polygon
    ///
    /// Triangles are drawn directly; a 4-vertex polygon is rasterized as
    /// the two triangles (0,1,2) and (1,2,3), matching the hardware's quad
    /// decomposition.
    pub fn draw_polygon(&self, vram: &mut Vram, cmd: &PolygonCommand) {
        log::trace!(
            "Drawing polygon: {} vertices shaded={} textured={} raw={} semi_transparent={} dithering={}",
            cmd.num_vertices,
            cmd.shaded,
            cmd.textured,
            cmd.raw_texture,
            cmd.semi_transparent,
            cmd.dithering
        );

        let draw = DRAW_TRIANGLE_FUNCTIONS[cmd.shaded as usize][cmd.textured as usize]
            [cmd.raw_texture as usize][cmd.semi_transparent as usize][cmd.dithering as usize];

        draw(
            vram,
            &self.drawing_area,
            cmd,
            &cmd.vertices[0],
            &cmd.vertices[1],
            &cmd.vertices[2],
        );

        if cmd.num_vertices == 4 {
            draw(
                vram,
                &self.drawing_area,
                cmd,
                &cmd.vertices[1],
                &cmd.vertices[2],
                &cmd.vertices[3],
            );
        }
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
