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

//! Line rasterization
//!
//! Single-pixel-wide DDA stepping in 32.32 fixed point, with colors carried
//! in 12-bit-fraction fixed point when Gouraud shading is enabled. The
//! stepping constants and rounding match the original GPU's quirks: step
//! divisions round away from zero, the start position carries a half-step
//! bias minus a small epsilon, and endpoints are swapped so the walk always
//! runs left to right.
//!
//! Lines are never textured.

use super::super::primitives::{LineCommand, LineVertex};
use super::super::types::{DrawingArea, TextureInfo, TextureWindow};
use super::super::vram::Vram;
use super::shade::shade_pixel;
use super::{MAX_PRIMITIVE_HEIGHT, MAX_PRIMITIVE_WIDTH};

/// Fractional bits of the DDA position accumulators
const XY_FRACT_BITS: u32 = 32;

/// Fractional bits of the DDA color accumulators
const RGB_FRACT_BITS: u32 = 12;

/// Per-step DDA increments
#[derive(Default)]
struct LineStep {
    dx_dk: i64,
    dy_dk: i64,
    dr_dk: i32,
    dg_dk: i32,
    db_dk: i32,
}

/// Divide a coordinate delta by the step count, rounding away from zero
#[inline(always)]
fn line_divide(delta: i64, dk: i32) -> i64 {
    let mut delta = ((delta as u64) << XY_FRACT_BITS) as i64;

    if delta < 0 {
        delta -= i64::from(dk) - 1;
    }
    if delta > 0 {
        delta += i64::from(dk) - 1;
    }

    delta / i64::from(dk)
}

/// Rasterize one line segment
///
/// Walks `max(|dx|, |dy|) + 1` steps from `p0` to `p1`, plotting each pixel
/// that lands inside the drawing area and survives the interlace filter.
/// Segments spanning 1024 or more columns or 512 or more rows are silently
/// rejected, as on hardware.
pub(crate) fn draw_line<const SHADING: bool, const TRANSPARENCY: bool, const DITHERING: bool>(
    vram: &mut Vram,
    drawing_area: &DrawingArea,
    cmd: &LineCommand,
    p0: &LineVertex,
    p1: &LineVertex,
) {
    let i_dx = (p1.x - p0.x).abs();
    let i_dy = (p1.y - p0.y).abs();
    let k = i_dx.max(i_dy);
    if i_dx >= MAX_PRIMITIVE_WIDTH as i32 || i_dy >= MAX_PRIMITIVE_HEIGHT as i32 {
        return;
    }

    // Canonicalize direction: always walk with increasing x
    let (p0, p1) = if p0.x >= p1.x && k > 0 {
        (p1, p0)
    } else {
        (p0, p1)
    };

    let mut step = LineStep::default();
    if k > 0 {
        step.dx_dk = line_divide(i64::from(p1.x - p0.x), k);
        step.dy_dk = line_divide(i64::from(p1.y - p0.y), k);

        if SHADING {
            step.dr_dk = ((i32::from(p1.r) - i32::from(p0.r)) << RGB_FRACT_BITS) / k;
            step.dg_dk = ((i32::from(p1.g) - i32::from(p0.g)) << RGB_FRACT_BITS) / k;
            step.db_dk = ((i32::from(p1.b) - i32::from(p0.b)) << RGB_FRACT_BITS) / k;
        }
    }

    // Start at the pixel center, backed off by a small epsilon so the
    // truncation matches hardware rounding; the y epsilon only applies on
    // downward-stepping walks.
    let mut cur_x =
        (((p0.x as u64) << XY_FRACT_BITS) | (1 << (XY_FRACT_BITS - 1))).wrapping_sub(1024);
    let mut cur_y = ((p0.y as u64) << XY_FRACT_BITS) | (1 << (XY_FRACT_BITS - 1));
    if step.dy_dk < 0 {
        cur_y = cur_y.wrapping_sub(1024);
    }

    let mut cur_r = 0u32;
    let mut cur_g = 0u32;
    let mut cur_b = 0u32;
    if SHADING {
        cur_r = (u32::from(p0.r) << RGB_FRACT_BITS) | (1 << (RGB_FRACT_BITS - 1));
        cur_g = (u32::from(p0.g) << RGB_FRACT_BITS) | (1 << (RGB_FRACT_BITS - 1));
        cur_b = (u32::from(p0.b) << RGB_FRACT_BITS) | (1 << (RGB_FRACT_BITS - 1));
    }

    let texture = TextureInfo::default();
    let window = TextureWindow::default();

    for _ in 0..=k {
        let x = ((cur_x >> XY_FRACT_BITS) & 2047) as i32;
        let y = ((cur_y >> XY_FRACT_BITS) & 2047) as i32;

        if (!cmd.params.interlaced_rendering || cmd.params.active_line_lsb != (y as u8 & 1))
            && x >= drawing_area.left
            && x <= drawing_area.right
            && y >= drawing_area.top
            && y <= drawing_area.bottom
        {
            let r = if SHADING {
                (cur_r >> RGB_FRACT_BITS) as u8
            } else {
                p0.r
            };
            let g = if SHADING {
                (cur_g >> RGB_FRACT_BITS) as u8
            } else {
                p0.g
            };
            let b = if SHADING {
                (cur_b >> RGB_FRACT_BITS) as u8
            } else {
                p0.b
            };

            shade_pixel::<false, false, TRANSPARENCY, DITHERING>(
                vram,
                &texture,
                &window,
                cmd.blend_mode,
                &cmd.params,
                x as u32,
                y as u32,
                r,
                g,
                b,
                0,
                0,
            );
        }

        cur_x = cur_x.wrapping_add(step.dx_dk as u64);
        cur_y = cur_y.wrapping_add(step.dy_dk as u64);

        if SHADING {
            cur_r = cur_r.wrapping_add(step.dr_dk as u32);
            cur_g = cur_g.wrapping_add(step.dg_dk as u32);
            cur_b = cur_b.wrapping_add(step.db_dk as u32);
        }
    }
}
