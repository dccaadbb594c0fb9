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

//! PlayStation 1 GPU software rasterizer core
//!
//! This library implements the pixel-exact 2D primitive drawing engine of a
//! PlayStation 1 GPU emulator: rectangles (sprites), single-pixel-wide lines,
//! and Gouraud/textured triangles, rendered into a simulated 1MB VRAM with
//! the original console's quirks (15-bit color, 4×4 ordered dithering,
//! semi-transparency blending, texture windows, palette indirection, mask
//! bits, and interlaced-field skipping).
//!
//! Command decoding, GPU registers, timing, and display output belong to the
//! surrounding emulator; this crate consumes already-decoded draw commands
//! and mutates a caller-owned VRAM buffer.
//!
//! # Example
//!
//! ```
//! use raster_core::core::gpu::{Color, Rasterizer, RectangleCommand, Vram};
//!
//! let mut vram = Vram::new();
//! let rasterizer = Rasterizer::new();
//!
//! let cmd = RectangleCommand {
//!     x: 10,
//!     y: 20,
//!     width: 2,
//!     height: 2,
//!     color: Color { r: 255, g: 0, b: 0 },
//!     ..Default::default()
//! };
//! rasterizer.draw_rectangle(&mut vram, &cmd);
//!
//! assert_eq!(vram.read_pixel(10, 20), 0x001F); // Red in 5-5-5 RGB
//! ```

pub mod core;
