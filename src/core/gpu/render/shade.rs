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

//! Pixel shading pipeline
//!
//! One routine computes the final VRAM word for every primitive type:
//! texture sampling (with window masking and palette indirection), color
//! modulation through the dither table, semi-transparency blending, and the
//! mask-bit test. The four pipeline stages that vary per command are const
//! generic parameters, so each draw loop runs a fully monomorphized shader
//! with no per-pixel flag branching.
//!
//! # Stage order
//!
//! The order is load-bearing: an all-zero texel discards the pixel before
//! modulation, blending, and the mask test ever happen.

use super::super::types::{BlendMode, DrawParams, TextureDepth, TextureInfo, TextureWindow};
use super::super::vram::{Vram, VRAM_HEIGHT, VRAM_WIDTH};
use super::dither::DITHER_LUT;

/// Shade and store a single pixel
///
/// `color_r/g/b` is the flat or interpolated primitive color (the
/// modulation color for textured pixels); `texcoord_x/y` is ignored unless
/// `TEXTURE` is set. Writes at most one VRAM word at `(x, y)`.
///
/// Pixels are discarded without a write when the sampled texel is zero or
/// when the existing pixel matches the mask test.
#[allow(clippy::too_many_arguments)]
#[inline(always)]
pub(crate) fn shade_pixel<
    const TEXTURE: bool,
    const RAW_TEXTURE: bool,
    const TRANSPARENCY: bool,
    const DITHERING: bool,
>(
    vram: &mut Vram,
    texture: &TextureInfo,
    window: &TextureWindow,
    blend_mode: BlendMode,
    params: &DrawParams,
    x: u32,
    y: u32,
    color_r: u8,
    color_g: u8,
    color_b: u8,
    texcoord_x: u8,
    texcoord_y: u8,
) {
    let mut color: u16;
    if TEXTURE {
        // Apply texture window
        let texcoord_x = (texcoord_x & window.and_x) | window.or_x;
        let texcoord_y = (texcoord_y & window.and_y) | window.or_y;

        let texture_color = match texture.depth {
            TextureDepth::T4Bit => {
                // 4 texels per VRAM word; the nibble index is tc.x mod 4
                let palette_value = vram.read_pixel(
                    (u32::from(texture.page_x) + u32::from(texcoord_x / 4)) % VRAM_WIDTH,
                    (u32::from(texture.page_y) + u32::from(texcoord_y)) % VRAM_HEIGHT,
                );
                let palette_index = (palette_value >> ((texcoord_x % 4) * 4)) & 0x0F;

                vram.read_pixel(
                    (u32::from(texture.clut_x) + u32::from(palette_index)) % VRAM_WIDTH,
                    u32::from(texture.clut_y),
                )
            }

            TextureDepth::T8Bit => {
                // 2 texels per VRAM word; the byte index is tc.x mod 2
                let palette_value = vram.read_pixel(
                    (u32::from(texture.page_x) + u32::from(texcoord_x / 2)) % VRAM_WIDTH,
                    (u32::from(texture.page_y) + u32::from(texcoord_y)) % VRAM_HEIGHT,
                );
                let palette_index = (palette_value >> ((texcoord_x % 2) * 8)) & 0xFF;

                vram.read_pixel(
                    (u32::from(texture.clut_x) + u32::from(palette_index)) % VRAM_WIDTH,
                    u32::from(texture.clut_y),
                )
            }

            TextureDepth::T15Bit => vram.read_pixel(
                (u32::from(texture.page_x) + u32::from(texcoord_x)) % VRAM_WIDTH,
                (u32::from(texture.page_y) + u32::from(texcoord_y)) % VRAM_HEIGHT,
            ),
        };

        // All-zero texels are fully transparent: no modulation, no blend,
        // no mask check, no write.
        if texture_color == 0 {
            return;
        }

        if RAW_TEXTURE {
            color = texture_color;
        } else {
            let dither_y = if DITHERING { y & 3 } else { 2 };
            let dither_x = if DITHERING { x & 3 } else { 3 };

            // Each 5-bit texel channel is scaled by the 8-bit modulation
            // color; 128 is neutral. The texel's mask bit survives.
            color = u16::from(DITHER_LUT.get(
                dither_y,
                dither_x,
                ((texture_color & 0x1F) * u16::from(color_r)) >> 4,
            )) | (u16::from(DITHER_LUT.get(
                dither_y,
                dither_x,
                (((texture_color >> 5) & 0x1F) * u16::from(color_g)) >> 4,
            )) << 5)
                | (u16::from(DITHER_LUT.get(
                    dither_y,
                    dither_x,
                    (((texture_color >> 10) & 0x1F) * u16::from(color_b)) >> 4,
                )) << 10)
                | (texture_color & 0x8000);
        }
    } else {
        let dither_y = if DITHERING { y & 3 } else { 2 };
        let dither_x = if DITHERING { x & 3 } else { 3 };

        // Non-textured transparent primitives don't store bit 15, but are
        // still treated as transparent while blending.
        color = u16::from(DITHER_LUT.get(dither_y, dither_x, u16::from(color_r)))
            | (u16::from(DITHER_LUT.get(dither_y, dither_x, u16::from(color_g))) << 5)
            | (u16::from(DITHER_LUT.get(dither_y, dither_x, u16::from(color_b))) << 10)
            | (if TRANSPARENCY { 0x8000 } else { 0 });
    }

    let bg_color = vram.read_pixel(x, y);
    if TRANSPARENCY && (color & 0x8000 != 0 || !TEXTURE) {
        color = blend_mode.blend(bg_color, color);

        // See above.
        if !TEXTURE {
            color &= !0x8000;
        }
    }

    if (bg_color & params.mask_and) != 0 {
        return;
    }

    vram.write_pixel(x, y, color | params.mask_or);
}
