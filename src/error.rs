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

use thiserror::Error;

/// Errors produced while building palettes and writing deck images.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid hex color {0:?} (expected six hex digits, optionally prefixed by '#')")]
    InvalidHex(String),
    #[error("expected {expected} base colors, got {found}")]
    BaseColorCount { expected: usize, found: usize },
    #[error("brightness limit {0} is outside (0, 100]")]
    BrightnessLimit(f64),
    #[error("unknown suit {0:?}")]
    UnknownSuit(String),
    #[error("pixel buffer does not match a {width}x{height} image")]
    Buffer { width: u32, height: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
