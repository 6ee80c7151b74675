//! Library to paint shuffled card decks as block images.
//!
//! A deck of 52 colored cards is shuffled with [shuffle::fisher_yates] and
//! drawn onto an 8×8 block grid whose four corners are cut away:
//!
//! * [palette] builds the deck colors, either straight RGB tones per
//!   [palette::Suit] or lightness ramps around arbitrary base colors.
//! * [grid] rasterizes the colors into a 240×240 [grid::Canvas].
//! * [batch] writes numbered image files.

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//

pub mod batch;
pub mod color;
pub mod error;
pub mod grid;
pub mod palette;
pub mod shuffle;

#[doc(inline)]
pub use crate::error::{Error, Result};
