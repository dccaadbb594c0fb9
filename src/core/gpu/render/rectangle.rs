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

//! Rectangle (sprite) rasterization
//!
//! Sprites are a simple double scan over the command's width and height.
//! Rows outside the drawing area or masked by interlacing are skipped
//! whole; columns are clipped individually. Sprites never dither and never
//! Gouraud-shade: the flat command color reaches every pixel.

use super::super::primitives::RectangleCommand;
use super::super::types::DrawingArea;
use super::super::vram::Vram;
use super::shade::shade_pixel;

/// Rasterize a rectangle
///
/// Texture coordinates advance by one per pixel from the command's origin
/// texcoord and wrap at 256 by 8-bit truncation.
pub(crate) fn draw_rectangle<
    const TEXTURE: bool,
    const RAW_TEXTURE: bool,
    const TRANSPARENCY: bool,
>(
    vram: &mut Vram,
    drawing_area: &DrawingArea,
    cmd: &RectangleCommand,
) {
    let origin_x = cmd.x;
    let origin_y = cmd.y;

    for offset_y in 0..cmd.height {
        let y = origin_y + offset_y as i32;
        if y < drawing_area.top
            || y > drawing_area.bottom
            || (cmd.params.interlaced_rendering && cmd.params.active_line_lsb == (y as u8 & 1))
        {
            continue;
        }

        let texcoord_y = cmd.texcoord.v.wrapping_add(offset_y as u8);

        for offset_x in 0..cmd.width {
            let x = origin_x + offset_x as i32;
            if x < drawing_area.left || x > drawing_area.right {
                continue;
            }

            let texcoord_x = cmd.texcoord.u.wrapping_add(offset_x as u8);

            // Sprites never dither
            shade_pixel::<TEXTURE, RAW_TEXTURE, TRANSPARENCY, false>(
                vram,
                &cmd.texture,
                &cmd.window,
                cmd.blend_mode,
                &cmd.params,
                x as u32,
                y as u32,
                cmd.color.r,
                cmd.color.g,
                cmd.color.b,
                texcoord_x,
                texcoord_y,
            );
        }
    }
}
