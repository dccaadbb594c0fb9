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

//! Software rasterization
//!
//! The pixel-producing half of the GPU: a shared pixel shading pipeline
//! (`shade`), per-primitive rasterizers (`rectangle`, `line`, `triangle`),
//! the precomputed dither table (`dither`), and the function tables that
//! map command feature flags onto monomorphized rasterizer instances
//! (`dispatch`).

mod dither;
mod shade;

mod line;
mod rectangle;
mod triangle;

mod dispatch;

pub use dispatch::{
    DrawLineFn, DrawRectangleFn, DrawTriangleFn, DRAW_LINE_FUNCTIONS, DRAW_RECTANGLE_FUNCTIONS,
    DRAW_TRIANGLE_FUNCTIONS,
};
pub use dither::{DitherLut, DITHER_LUT, DITHER_LUT_SIZE};

/// Primitives with any edge spanning this many columns or more are dropped
pub const MAX_PRIMITIVE_WIDTH: u32 = 1024;

/// Primitives with any edge spanning this many rows or more are dropped
pub const MAX_PRIMITIVE_HEIGHT: u32 = 512;
