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

//! Hex parsing and hue/lightness/saturation conversion.
//!
//! The HLS model here is the double-hexcone one (hue, lightness and
//! saturation all in `[0, 1]`), not HSL with hue in degrees.

use image::Rgb;

use crate::error::{Error, Result};

const ONE_SIXTH: f64 = 1.0 / 6.0;
const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Parses `#rrggbb` (or `rrggbb`) into an RGB triple.
///
/// Any number of leading `#` is accepted.
pub fn parse_hex(s: &str) -> Result<Rgb<u8>> {
    let digits = s.trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(s.to_owned()));
    }

    let mut out = [0u8; 3];
    for (i, v) in out.iter_mut().enumerate() {
        *v = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| Error::InvalidHex(s.to_owned()))?;
    }
    Ok(Rgb(out))
}

/// Formats an RGB triple as lowercase `#rrggbb`.
pub fn to_hex(Rgb([r, g, b]): Rgb<u8>) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Color in hue/lightness/saturation space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hls {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl Hls {
    pub fn from_rgb(Rgb([r, g, b]): Rgb<u8>) -> Self {
        let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);

        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let sumc = maxc + minc;
        let rangec = maxc - minc;
        let lightness = sumc / 2.0;
        if minc == maxc {
            return Self {
                hue: 0.0,
                lightness,
                saturation: 0.0,
            };
        }

        let saturation = if lightness <= 0.5 {
            rangec / sumc
        } else {
            rangec / (2.0 - maxc - minc)
        };

        let rc = (maxc - r) / rangec;
        let gc = (maxc - g) / rangec;
        let bc = (maxc - b) / rangec;
        let hue = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        Self {
            hue: (hue / 6.0).rem_euclid(1.0),
            lightness,
            saturation,
        }
    }

    /// Channels in `[0, 1]`.
    pub fn to_unit_rgb(self) -> [f64; 3] {
        let Self {
            hue: h,
            lightness: l,
            saturation: s,
        } = self;
        if s == 0.0 {
            return [l, l, l];
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        [
            channel(m1, m2, h + ONE_THIRD),
            channel(m1, m2, h),
            channel(m1, m2, h - ONE_THIRD),
        ]
    }

    /// Scales to `[0, 255]`, truncating each channel.
    pub fn to_rgb(self) -> Rgb<u8> {
        Rgb(self.to_unit_rgb().map(|v| (v * 255.0) as u8))
    }
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}
