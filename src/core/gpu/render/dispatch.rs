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

//! Draw function dispatch tables
//!
//! Each draw command's boolean feature flags index into a static table of
//! monomorphized rasterizer functions, so flag selection happens once per
//! primitive and never inside a pixel loop.
//!
//! The tables collapse impossible or inert combinations onto their
//! canonical variants:
//! - untextured rectangles/triangles ignore `raw_texture` (those slots
//!   reuse the untextured function),
//! - raw-textured triangles never dither (the dithering slot repeats the
//!   undithered function).

use super::super::primitives::{LineCommand, LineVertex, PolygonCommand, PolygonVertex, RectangleCommand};
use super::super::types::DrawingArea;
use super::super::vram::Vram;
use super::line::draw_line;
use super::rectangle::draw_rectangle;
use super::triangle::draw_triangle;

/// Monomorphized rectangle rasterizer entry
pub type DrawRectangleFn = fn(&mut Vram, &DrawingArea, &RectangleCommand);

/// Monomorphized line rasterizer entry
pub type DrawLineFn = fn(&mut Vram, &DrawingArea, &LineCommand, &LineVertex, &LineVertex);

/// Monomorphized triangle rasterizer entry
pub type DrawTriangleFn =
    fn(&mut Vram, &DrawingArea, &PolygonCommand, &PolygonVertex, &PolygonVertex, &PolygonVertex);

/// Rectangle rasterizers indexed by `[textured][raw_texture][semi_transparent]`
pub static DRAW_RECTANGLE_FUNCTIONS: [[[DrawRectangleFn; 2]; 2]; 2] = [
    [
        [
            draw_rectangle::<false, false, false>,
            draw_rectangle::<false, false, true>,
        ],
        [
            draw_rectangle::<false, false, false>,
            draw_rectangle::<false, false, true>,
        ],
    ],
    [
        [
            draw_rectangle::<true, false, false>,
            draw_rectangle::<true, false, true>,
        ],
        [
            draw_rectangle::<true, true, false>,
            draw_rectangle::<true, true, true>,
        ],
    ],
];

/// Line rasterizers indexed by `[shaded][semi_transparent][dithering]`
pub static DRAW_LINE_FUNCTIONS: [[[DrawLineFn; 2]; 2]; 2] = [
    [
        [
            draw_line::<false, false, false>,
            draw_line::<false, false, true>,
        ],
        [
            draw_line::<false, true, false>,
            draw_line::<false, true, true>,
        ],
    ],
    [
        [
            draw_line::<true, false, false>,
            draw_line::<true, false, true>,
        ],
        [draw_line::<true, true, false>, draw_line::<true, true, true>],
    ],
];

/// Triangle rasterizers indexed by
/// `[shaded][textured][raw_texture][semi_transparent][dithering]`
pub static DRAW_TRIANGLE_FUNCTIONS: [[[[[DrawTriangleFn; 2]; 2]; 2]; 2]; 2] = [
    [
        [
            [
                [
                    draw_triangle::<false, false, false, false, false>,
                    draw_triangle::<false, false, false, false, true>,
                ],
                [
                    draw_triangle::<false, false, false, true, false>,
                    draw_triangle::<false, false, false, true, true>,
                ],
            ],
            [
                [
                    draw_triangle::<false, false, false, false, false>,
                    draw_triangle::<false, false, false, false, false>,
                ],
                [
                    draw_triangle::<false, false, false, true, false>,
                    draw_triangle::<false, false, false, true, false>,
                ],
            ],
        ],
        [
            [
                [
                    draw_triangle::<false, true, false, false, false>,
                    draw_triangle::<false, true, false, false, true>,
                ],
                [
                    draw_triangle::<false, true, false, true, false>,
                    draw_triangle::<false, true, false, true, true>,
                ],
            ],
            [
                [
                    draw_triangle::<false, true, true, false, false>,
                    draw_triangle::<false, true, true, false, false>,
                ],
                [
                    draw_triangle::<false, true, true, true, false>,
                    draw_triangle::<false, true, true, true, false>,
                ],
            ],
        ],
    ],
    [
        [
            [
                [
                    draw_triangle::<true, false, false, false, false>,
                    draw_triangle::<true, false, false, false, true>,
                ],
                [
                    draw_triangle::<true, false, false, true, false>,
                    draw_triangle::<true, false, false, true, true>,
                ],
            ],
            [
                [
                    draw_triangle::<true, false, false, false, false>,
                    draw_triangle::<true, false, false, false, false>,
                ],
                [
                    draw_triangle::<true, false, false, true, false>,
                    draw_triangle::<true, false, false, true, false>,
                ],
            ],
        ],
        [
            [
                [
                    draw_triangle::<true, true, false, false, false>,
                    draw_triangle::<true, true, false, false, true>,
                ],
                [
                    draw_triangle::<true, true, false, true, false>,
                    draw_triangle::<true, true, false, true, true>,
                ],
            ],
            [
                [
                    draw_triangle::<true, true, true, false, false>,
                    draw_triangle::<true, true, true, false, false>,
                ],
                [
                    draw_triangle::<true, true, true, true, false>,
                    draw_triangle::<true, true, true, true, false>,
                ],
            ],
        ],
    ],
];
