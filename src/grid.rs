// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Block grid rasterizer.
//!
//! The image is a [`GRID`]×[`GRID`] grid of [`BLOCK`]-pixel square blocks.
//! An L-shaped group of three cells is cut out of every corner; the
//! remaining [`ACTIVE`] cells receive one color each in row-major order.

use std::path::Path;

use image::{ColorType, Rgb};
use ndarray::parallel::prelude::*;
use ndarray::prelude::*;

use crate::error::{Error, Result};
use crate::palette::DECK_SIZE;

pub const GRID: usize = 8;
pub const BLOCK: usize = 30;
pub const IMAGE_SIZE: usize = GRID * BLOCK;
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Top-left corner cut. The other three corners are its mirror images.
const CORNER: [(usize, usize); 3] = [(0, 0), (0, 1), (1, 0)];

pub const SKIPPED: usize = 4 * CORNER.len();
pub const ACTIVE: usize = GRID * GRID - SKIPPED;

const SKIP_MASK: [[bool; GRID]; GRID] = skip_mask();
const SLOTS: [[Option<usize>; GRID]; GRID] = slots();

const _: () = assert!(count_skipped(&SKIP_MASK) == SKIPPED);
const _: () = assert!(ACTIVE == DECK_SIZE);

const fn skip_mask() -> [[bool; GRID]; GRID] {
    let mut mask = [[false; GRID]; GRID];
    let mut i = 0;
    while i < CORNER.len() {
        let (r, c) = CORNER[i];
        let (fr, fc) = (GRID - 1 - r, GRID - 1 - c);
        mask[r][c] = true;
        mask[r][fc] = true;
        mask[fr][c] = true;
        mask[fr][fc] = true;
        i += 1;
    }
    mask
}

const fn count_skipped(mask: &[[bool; GRID]; GRID]) -> usize {
    let mut n = 0;
    let mut r = 0;
    while r < GRID {
        let mut c = 0;
        while c < GRID {
            if mask[r][c] {
                n += 1;
            }
            c += 1;
        }
        r += 1;
    }
    n
}

/// Scan index of every active cell.
const fn slots() -> [[Option<usize>; GRID]; GRID] {
    let mut slots = [[None; GRID]; GRID];
    let mut n = 0;
    let mut r = 0;
    while r < GRID {
        let mut c = 0;
        while c < GRID {
            if !SKIP_MASK[r][c] {
                slots[r][c] = Some(n);
                n += 1;
            }
            c += 1;
        }
        r += 1;
    }
    slots
}

pub fn is_skipped(row: usize, col: usize) -> bool {
    SKIP_MASK[row][col]
}

/// Active `(row, col)` cells in the order they consume colors.
pub fn active_positions() -> impl Iterator<Item = (usize, usize)> {
    (0..GRID)
        .flat_map(|r| (0..GRID).map(move |c| (r, c)))
        .filter(|&(r, c)| !is_skipped(r, c))
}

/// RGB pixel buffer, indexed `[y, x, channel]`.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Array3<u8>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Blank canvas filled with [`BACKGROUND`].
    pub fn new() -> Self {
        Self {
            pixels: Array3::from_shape_fn((IMAGE_SIZE, IMAGE_SIZE, 3), |(_, _, ch)| {
                BACKGROUND.0[ch]
            }),
        }
    }

    /// Paints `colors` onto a blank canvas.
    ///
    /// Colors are consumed in scan order. Missing colors leave their blocks
    /// as background, surplus colors are ignored.
    pub fn paint(colors: &[Rgb<u8>]) -> Self {
        let mut canvas = Self::new();

        par_azip!((index (r, c, _), mut block in canvas.pixels.exact_chunks_mut((BLOCK, BLOCK, 3))) {
            if let Some(color) = SLOTS[r][c].and_then(|i| colors.get(i)) {
                block.assign(&aview1(&color.0));
            }
        });

        canvas
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb<u8> {
        Rgb([
            self.pixels[[y, x, 0]],
            self.pixels[[y, x, 1]],
            self.pixels[[y, x, 2]],
        ])
    }

    pub fn block(&self, row: usize, col: usize) -> ArrayView3<'_, u8> {
        self.pixels.slice(s![
            row * BLOCK..(row + 1) * BLOCK,
            col * BLOCK..(col + 1) * BLOCK,
            ..
        ])
    }

    /// Color of a block, or `None` if the block is not uniform.
    pub fn block_color(&self, row: usize, col: usize) -> Option<Rgb<u8>> {
        let first = self.pixel(col * BLOCK, row * BLOCK);
        self.block(row, col)
            .rows()
            .into_iter()
            .all(|px| px.as_slice() == Some(&first.0[..]))
            .then_some(first)
    }

    /// Number of pixels that differ from [`BACKGROUND`].
    pub fn painted_pixels(&self) -> usize {
        self.pixels
            .rows()
            .into_iter()
            .filter(|px| px.as_slice() != Some(&BACKGROUND.0[..]))
            .count()
    }

    /// Encodes the canvas, format chosen by the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        let size = IMAGE_SIZE as u32;
        let bytes = self.pixels.as_slice().ok_or(Error::Buffer {
            width: size,
            height: size,
        })?;
        image::save_buffer(path, bytes, size, size, ColorType::Rgb8)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(n: usize) -> Vec<Rgb<u8>> {
        (0..n).map(|i| Rgb([i as u8 + 1, 100, 200])).collect()
    }

    #[test]
    fn skip_set_is_four_corners() {
        let skipped: Vec<_> = (0..GRID)
            .flat_map(|r| (0..GRID).map(move |c| (r, c)))
            .filter(|&(r, c)| is_skipped(r, c))
            .collect();
        assert_eq!(
            skipped,
            [
                (0, 0),
                (0, 1),
                (0, 6),
                (0, 7),
                (1, 0),
                (1, 7),
                (6, 0),
                (6, 7),
                (7, 0),
                (7, 1),
                (7, 6),
                (7, 7),
            ]
        );
    }

    #[test]
    fn active_scan_order() {
        let active: Vec<_> = active_positions().collect();
        assert_eq!(active.len(), ACTIVE);
        assert_eq!(active[0], (0, 2));
        assert_eq!(active[3], (0, 5));
        assert_eq!(active[4], (1, 1));
        assert_eq!(active[51], (7, 5));
    }

    #[test]
    fn paints_in_scan_order() {
        let colors = numbered(DECK_SIZE);
        let canvas = Canvas::paint(&colors);

        for (i, (r, c)) in active_positions().enumerate() {
            assert_eq!(canvas.block_color(r, c), Some(colors[i]));
        }
        assert_eq!(canvas.block_color(0, 0), Some(BACKGROUND));
        assert_eq!(canvas.pixel(0, 0), BACKGROUND);
        assert_eq!(canvas.pixel(60, 0), colors[0]);
        assert_eq!(canvas.pixel(89, 29), colors[0]);
        assert_eq!(canvas.pixel(90, 29), colors[1]);
        assert_eq!(canvas.pixel(239, 239), BACKGROUND);
    }

    #[test]
    fn short_input_leaves_background() {
        let canvas = Canvas::paint(&numbered(5));
        assert_eq!(canvas.painted_pixels(), 5 * BLOCK * BLOCK);
        assert_eq!(canvas.block_color(1, 1), Some(colors_at(4)));
        assert_eq!(canvas.block_color(1, 2), Some(BACKGROUND));

        assert_eq!(Canvas::paint(&[]).painted_pixels(), 0);
    }

    fn colors_at(i: usize) -> Rgb<u8> {
        numbered(i + 1)[i]
    }

    #[test]
    fn long_input_is_truncated() {
        let canvas = Canvas::paint(&numbered(60));
        assert_eq!(canvas.painted_pixels(), ACTIVE * BLOCK * BLOCK);
        assert_eq!(canvas.block_color(7, 5), Some(colors_at(51)));
    }

    #[test]
    fn save_writes_rgb_png() {
        let dir = std::env::temp_dir().join(format!("deckgrid-grid-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("canvas.png");

        Canvas::paint(&numbered(DECK_SIZE)).save(&path).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), ColorType::Rgb8);

        let img = img.into_rgb8();
        assert_eq!(img.dimensions(), (IMAGE_SIZE as u32, IMAGE_SIZE as u32));
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(75, 15), Rgb([1, 100, 200]));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    proptest! {
        #[test]
        fn full_deck_paints_every_active_block(
            colors in prop::collection::vec(any::<[u8; 3]>().prop_filter("non-background", |c| *c != [0, 0, 0]), DECK_SIZE)
        ) {
            let colors: Vec<_> = colors.into_iter().map(Rgb).collect();
            let canvas = Canvas::paint(&colors);

            prop_assert_eq!(canvas.painted_pixels(), DECK_SIZE * BLOCK * BLOCK);
            for r in 0..GRID {
                for c in 0..GRID {
                    if is_skipped(r, c) {
                        prop_assert_eq!(canvas.block_color(r, c), Some(BACKGROUND));
                    }
                }
            }
        }
    }
}
