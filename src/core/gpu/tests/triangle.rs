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

//! Triangle rasterization tests
//! Edge walking, Gouraud interpolation, dithering, and rejection rules

use super::super::*;
use super::{count_nonzero, flat_triangle};

/// Gouraud right triangle with a red ramp along the top edge:
/// (0,0) is full red, (10,0) and (0,10) are black.
fn red_ramp() -> PolygonCommand {
    let mut cmd = PolygonCommand {
        num_vertices: 3,
        shaded: true,
        ..Default::default()
    };
    cmd.vertices[0] = PolygonVertex {
        x: 0,
        y: 0,
        r: 255,
        g: 0,
        b: 0,
        u: 0,
        v: 0,
    };
    cmd.vertices[1] = PolygonVertex {
        x: 10,
        y: 0,
        r: 0,
        g: 0,
        b: 0,
        u: 0,
        v: 0,
    };
    cmd.vertices[2] = PolygonVertex {
        x: 0,
        y: 10,
        r: 0,
        g: 0,
        b: 0,
        u: 0,
        v: 0,
    };
    cmd
}

#[test]
fn test_flat_triangle_coverage() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    // Right triangle with vertical left edge and horizontal top edge:
    // row y covers x in [0, 10 - y).
    let cmd = flat_triangle(
        [(0, 0), (10, 0), (0, 10)],
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    );
    rasterizer.draw_polygon(&mut vram, &cmd);

    for y in 0..10u32 {
        for x in 0..10u32 {
            let inside = x + y < 10;
            let expected = if inside { 0x7FFF } else { 0 };
            assert_eq!(vram.read_pixel(x, y), expected, "({}, {})", x, y);
        }
    }
    assert_eq!(count_nonzero(&vram), 55);
}

#[test]
fn test_gouraud_ramp_exact_values() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();
    rasterizer.draw_polygon(&mut vram, &red_ramp());

    // The interpolant at pixel x on the top row is 255.5 - 25.5x, then
    // truncated through the no-dither table cell.
    assert_eq!(vram.read_pixel(0, 0) & 0x1F, 31); // 255 >> 3
    assert_eq!(vram.read_pixel(5, 0) & 0x1F, 16); // 128 >> 3
    assert_eq!(vram.read_pixel(9, 0) & 0x1F, 3); // 26 >> 3

    // The ramp is symmetric down the left column
    assert_eq!(vram.read_pixel(0, 5) & 0x1F, 16);

    // Green and blue stay zero everywhere
    assert_eq!(vram.read_pixel(5, 0) & !0x1F, 0);

    // The top row ends before x = 10
    assert_eq!(vram.read_pixel(10, 0), 0);
}

#[test]
fn test_gouraud_ramp_survives_left_clip() {
    // Clipping the span start must re-bias the attribute accumulator so
    // visible pixels keep their unclipped colors.
    let rasterizer = Rasterizer::new();

    let mut unclipped = Vram::new();
    rasterizer.draw_polygon(&mut unclipped, &red_ramp());

    let mut clipped = Vram::new();
    let mut clipping = Rasterizer::new();
    clipping.set_drawing_area(3, 0, 1023, 511);
    clipping.draw_polygon(&mut clipped, &red_ramp());

    assert_eq!(clipped.read_pixel(2, 0), 0);
    for x in 3..10u32 {
        assert_eq!(
            clipped.read_pixel(x, 0),
            unclipped.read_pixel(x, 0),
            "x = {}",
            x
        );
    }
}

#[test]
fn test_all_horizontal_triangle_rejected() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    let cmd = flat_triangle(
        [(10, 10), (20, 10), (15, 10)],
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    );
    rasterizer.draw_polygon(&mut vram, &cmd);

    assert_eq!(count_nonzero(&vram), 0);
}

#[test]
fn test_collinear_triangle_rejected() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    // Non-zero height, but zero area: the gradient determinant is zero
    let cmd = flat_triangle(
        [(0, 0), (5, 5), (10, 10)],
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    );
    rasterizer.draw_polygon(&mut vram, &cmd);

    assert_eq!(count_nonzero(&vram), 0);
}

#[test]
fn test_oversized_triangle_rejected() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    // Horizontal edge of exactly 1024 columns
    let cmd = flat_triangle(
        [(0, 0), (1024, 1), (512, 2)],
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    );
    rasterizer.draw_polygon(&mut vram, &cmd);
    assert_eq!(count_nonzero(&vram), 0);

    // Vertical span of exactly 512 rows
    let cmd = flat_triangle(
        [(0, 0), (10, 500), (20, 512)],
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    );
    rasterizer.draw_polygon(&mut vram, &cmd);
    assert_eq!(count_nonzero(&vram), 0);
}

#[test]
fn test_vertex_order_invariance() {
    // The same triangle must rasterize identically whatever the vertex
    // submission order: the sort and core-vertex selection normalize it.
    let positions = [(5, 3), (20, 7), (11, 19)];
    let rotations = [
        [positions[0], positions[1], positions[2]],
        [positions[1], positions[2], positions[0]],
        [positions[2], positions[0], positions[1]],
    ];

    let rasterizer = Rasterizer::new();
    let color = Color {
        r: 200,
        g: 100,
        b: 50,
    };

    let mut reference: Option<Vram> = None;
    for rotation in &rotations {
        let mut vram = Vram::new();
        rasterizer.draw_polygon(&mut vram, &flat_triangle(*rotation, color));
        assert!(count_nonzero(&vram) > 0);

        match &reference {
            None => reference = Some(vram),
            Some(expected) => assert_eq!(expected.as_slice(), vram.as_slice()),
        }
    }
}

#[test]
fn test_quad_partitions_without_seam() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    // Axis-aligned square as a quad: the two halves must tile the region
    // [20,40)×[20,40) exactly, with no gap and no double coverage.
    let mut cmd = PolygonCommand {
        num_vertices: 4,
        ..Default::default()
    };
    let corners = [(20, 20), (40, 20), (20, 40), (40, 40)];
    for (vertex, &(x, y)) in cmd.vertices.iter_mut().zip(corners.iter()) {
        *vertex = PolygonVertex {
            x,
            y,
            r: 255,
            g: 255,
            b: 255,
            u: 0,
            v: 0,
        };
    }
    rasterizer.draw_polygon(&mut vram, &cmd);

    assert_eq!(count_nonzero(&vram), 400);
    for y in 20..40u32 {
        for x in 20..40u32 {
            assert_eq!(vram.read_pixel(x, y), 0x7FFF, "({}, {})", x, y);
        }
    }
}

#[test]
fn test_dithering_varies_with_position() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    // Channel value 5 truncates to 0, but dither offsets push some cells
    // over the step: (5 + 3) >> 3 = 1 at matrix cell (1, 2).
    let mut cmd = flat_triangle([(0, 0), (8, 0), (0, 8)], Color { r: 5, g: 5, b: 5 });
    cmd.dithering = true;
    rasterizer.draw_polygon(&mut vram, &cmd);

    assert_eq!(vram.read_pixel(0, 0), 0); // (5 - 4) >> 3
    assert_eq!(vram.read_pixel(2, 1), (1 << 10) | (1 << 5) | 1);
    assert_eq!(vram.read_pixel(3, 1), 0); // (5 - 1) >> 3

    // Without dithering every pixel truncates to black
    let mut vram = Vram::new();
    let cmd = flat_triangle([(0, 0), (8, 0), (0, 8)], Color { r: 5, g: 5, b: 5 });
    rasterizer.draw_polygon(&mut vram, &cmd);
    assert_eq!(count_nonzero(&vram), 0);
}

#[test]
fn test_textured_triangle_maps_texels() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    // Direct-color 16×16 texture at (512, 0) with a distinct value per texel
    for v in 0..16u32 {
        for u in 0..16u32 {
            vram.write_pixel(512 + u, v, ((v as u16 + 1) << 5) | (u as u16 + 1));
        }
    }

    let mut cmd = PolygonCommand {
        num_vertices: 3,
        textured: true,
        raw_texture: true,
        ..Default::default()
    };
    cmd.texture = TextureInfo {
        page_x: 512,
        page_y: 0,
        clut_x: 0,
        clut_y: 0,
        depth: TextureDepth::T15Bit,
    };
    let mapping = [(0, 0), (16, 0), (0, 16)];
    for (vertex, &(x, y)) in cmd.vertices.iter_mut().zip(mapping.iter()) {
        *vertex = PolygonVertex {
            x,
            y,
            r: 128,
            g: 128,
            b: 128,
            u: x as u8,
            v: y as u8,
        };
    }
    rasterizer.draw_polygon(&mut vram, &cmd);

    // The unit mapping samples texel (x, y) at pixel (x, y)
    for &(x, y) in &[(0u32, 0u32), (3, 2), (10, 5), (0, 15)] {
        assert_eq!(
            vram.read_pixel(x, y),
            ((y as u16 + 1) << 5) | (x as u16 + 1),
            "({}, {})",
            x,
            y
        );
    }
}

#[test]
fn test_interlaced_rows_skipped() {
    let mut vram = Vram::new();
    let rasterizer = Rasterizer::new();

    let mut cmd = flat_triangle(
        [(0, 0), (12, 0), (0, 12)],
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    );
    cmd.params.interlaced_rendering = true;
    cmd.params.active_line_lsb = 1;
    rasterizer.draw_polygon(&mut vram, &cmd);

    for y in 0..12u32 {
        let row_pixels = (0..12u32)
            .filter(|&x| vram.read_pixel(x, y) != 0)
            .count();
        if y & 1 == 1 {
            assert_eq!(row_pixels, 0, "odd row {} must be skipped", y);
        } else {
            assert_eq!(row_pixels, (12 - y) as usize, "even row {}", y);
        }
    }
}

#[test]
fn test_triangle_clipped_to_drawing_area() {
    let mut vram = Vram::new();
    let mut rasterizer = Rasterizer::new();
    rasterizer.set_drawing_area(2, 2, 6, 6);

    let cmd = flat_triangle(
        [(0, 0), (10, 0), (0, 10)],
        Color {
            r: 255,
            g: 255,
            b: 255,
        },
    );
    rasterizer.draw_polygon(&mut vram, &cmd);

    for y in 0..12u32 {
        for x in 0..12u32 {
            let inside_triangle = x + y < 10;
            let inside_area = (2..=6).contains(&x) && (2..=6).contains(&y);
            let expected = if inside_triangle && inside_area {
                0x7FFF
            } else {
                0
            };
            assert_eq!(vram.read_pixel(x, y), expected, "({}, {})", x, y);
        }
    }
}
