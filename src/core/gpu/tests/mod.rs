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

//! GPU rasterizer tests
//!
//! Tests are organized into the following modules:
//! - `vram`: VRAM surface accessors and address wrapping
//! - `blending`: semi-transparency modes, saturation, and mask-bit rules
//! - `rectangle`: sprite rasterization, clipping, texturing, interlacing
//! - `triangle`: edge walking, Gouraud shading, dithering, rejection rules
//! - `dispatch`: function-table flag collapse

mod triangle;

use super::*;

/// Flat opaque rectangle helper
pub(crate) fn flat_rect(x: i32, y: i32, width: u32, height: u32, color: Color) -> RectangleCommand {
    RectangleCommand {
        x,
        y,
        width,
        height,
        color,
        ..Default::default()
    }
}

/// Flat (non-shaded) triangle helper: the command color in every vertex
pub(crate) fn flat_triangle(positions: [(i32, i32); 3], color: Color) -> PolygonCommand {
    let mut cmd = PolygonCommand {
        num_vertices: 3,
        ..Default::default()
    };
    for (vertex, &(x, y)) in cmd.vertices.iter_mut().zip(positions.iter()) {
        *vertex = PolygonVertex {
            x,
            y,
            r: color.r,
            g: color.g,
            b: color.b,
            u: 0,
            v: 0,
        };
    }
    cmd
}

/// Count VRAM words that differ from zero
pub(crate) fn count_nonzero(vram: &Vram) -> usize {
    vram.as_slice().iter().filter(|&&p| p != 0).count()
}
