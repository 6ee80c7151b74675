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

//! Deck palettes.
//!
//! A deck is [`SUITS`] families of [`TONES_PER_SUIT`] tones each. Two ways of
//! coloring it exist:
//!
//! * [`Palette::Direct`] places a fixed tone straight into RGB channels per
//!   [`Suit`].
//! * [`Palette::Hls`] keeps hue and saturation of a base color per family and
//!   ramps its lightness between the bounds of a [`BrightnessLimit`].

use std::fmt;
use std::str::FromStr;

use image::Rgb;
use log::debug;
use rand::Rng;

use crate::color::{parse_hex, to_hex, Hls};
use crate::error::{Error, Result};
use crate::shuffle::fisher_yates;

pub const SUITS: usize = 4;
pub const TONES_PER_SUIT: usize = 13;
pub const DECK_SIZE: usize = SUITS * TONES_PER_SUIT;

// Lightness interpolation divides by `TONES_PER_SUIT - 1`.
const _: () = assert!(TONES_PER_SUIT >= 2);

/// Card family of the direct-tone palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Suit {
    pub const ALL: [Suit; SUITS] = [Suit::Red, Suit::Green, Suit::Blue, Suit::Yellow];

    /// Yellow fills both red and green channels.
    pub fn color(self, tone: u8) -> Rgb<u8> {
        match self {
            Suit::Red => Rgb([tone, 0, 0]),
            Suit::Green => Rgb([0, tone, 0]),
            Suit::Blue => Rgb([0, 0, tone]),
            Suit::Yellow => Rgb([tone, tone, 0]),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Red => "red",
            Suit::Green => "green",
            Suit::Blue => "blue",
            Suit::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSuit(s.to_owned()))
    }
}

/// Direct-tone card, resolved to a color only when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub tone: u8,
}

impl Card {
    pub fn color(&self) -> Rgb<u8> {
        self.suit.color(self.tone)
    }
}

/// Tone of the `index`-th card of a direct-tone family: 16, 32, ..., 208.
pub const fn direct_tone(index: usize) -> u8 {
    ((index + 1) * 16) as u8
}

/// Unshuffled direct-tone deck, suit-major then tone ascending.
pub fn direct_deck() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| {
            (0..TONES_PER_SUIT).map(move |i| Card {
                suit,
                tone: direct_tone(i),
            })
        })
        .collect()
}

/// Brightness limit in percent, within `(0, 100]`.
///
/// Lightness ramps from `(100 - limit) / 100` to `limit / 100`. Limits under
/// 50 give a ramp that darkens instead of brightens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessLimit(f64);

impl BrightnessLimit {
    pub fn new(percent: f64) -> Result<Self> {
        if percent > 0.0 && percent <= 100.0 {
            Ok(Self(percent))
        } else {
            Err(Error::BrightnessLimit(percent))
        }
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// `(min, max)` lightness.
    pub fn lightness_bounds(self) -> (f64, f64) {
        ((100.0 - self.0) / 100.0, self.0 / 100.0)
    }

    /// Lightness of every tone, from the min bound to the max bound.
    pub fn lightness_ramp(self) -> [f64; TONES_PER_SUIT] {
        let (min, max) = self.lightness_bounds();
        std::array::from_fn(|i| min + (max - min) * (i as f64 / (TONES_PER_SUIT - 1) as f64))
    }
}

impl Default for BrightnessLimit {
    fn default() -> Self {
        Self(80.0)
    }
}

/// Tones of one base color: its hue and saturation at each ramp lightness.
pub fn hls_tones(base: Rgb<u8>, limit: BrightnessLimit) -> [Rgb<u8>; TONES_PER_SUIT] {
    let hls = Hls::from_rgb(base);
    limit.lightness_ramp().map(|lightness| Hls { lightness, ..hls }.to_rgb())
}

/// Base colors and brightness limit of an HLS palette.
#[derive(Debug, Clone, PartialEq)]
pub struct HlsPalette {
    pub bases: [Rgb<u8>; SUITS],
    pub limit: BrightnessLimit,
}

impl HlsPalette {
    /// `#EEE82C`, `#91CB3E`, `#53A548`, `#4C934C`.
    pub const DEFAULT_BASES: [Rgb<u8>; SUITS] = [
        Rgb([0xee, 0xe8, 0x2c]),
        Rgb([0x91, 0xcb, 0x3e]),
        Rgb([0x53, 0xa5, 0x48]),
        Rgb([0x4c, 0x93, 0x4c]),
    ];

    pub fn new(bases: [Rgb<u8>; SUITS], limit: BrightnessLimit) -> Self {
        Self { bases, limit }
    }

    /// Builds a palette from exactly [`SUITS`] hex strings.
    pub fn from_hex<I, S>(bases: I, limit: BrightnessLimit) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bases = bases
            .into_iter()
            .map(|s| parse_hex(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_colors(bases, limit)
    }

    pub fn from_colors(bases: Vec<Rgb<u8>>, limit: BrightnessLimit) -> Result<Self> {
        let found = bases.len();
        let bases = bases.try_into().map_err(|_| Error::BaseColorCount {
            expected: SUITS,
            found,
        })?;
        Ok(Self::new(bases, limit))
    }

    /// All tones, base-major then darkest first.
    pub fn colors(&self) -> Vec<Rgb<u8>> {
        self.bases
            .iter()
            .flat_map(|&base| hls_tones(base, self.limit))
            .collect()
    }
}

impl Default for HlsPalette {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASES, BrightnessLimit::default())
    }
}

/// Palette strategy used to color a deck.
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    Direct,
    Hls(HlsPalette),
}

impl Palette {
    /// Unshuffled deck colors.
    pub fn colors(&self) -> Vec<Rgb<u8>> {
        match self {
            Palette::Direct => direct_deck().iter().map(Card::color).collect(),
            Palette::Hls(p) => p.colors(),
        }
    }

    /// Fresh deck, shuffled once, as colors in deck order.
    pub fn shuffled<R>(&self, random: &mut R) -> Vec<Rgb<u8>>
    where
        R: Rng + ?Sized,
    {
        match self {
            Palette::Direct => {
                let mut deck = direct_deck();
                fisher_yates(&mut deck, random);
                deck.iter().map(Card::color).collect()
            }
            Palette::Hls(p) => {
                let mut deck = p.colors();
                fisher_yates(&mut deck, random);
                deck
            }
        }
    }

    pub fn log_summary(&self) {
        match self {
            Palette::Direct => debug!("Direct-tone palette, {DECK_SIZE} cards"),
            Palette::Hls(p) => {
                let bases: Vec<_> = p.bases.iter().map(|&c| to_hex(c)).collect();
                debug!(
                    "HLS palette, bases [{}], brightness limit {}%",
                    bases.join(", "),
                    p.limit.percent()
                );
            }
        }
    }
}
