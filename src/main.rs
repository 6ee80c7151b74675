//! Main Program for deckgrid
//! Run with `--help` for more instruction

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

use std::path::PathBuf;

use anyhow::Error;
use clap::{Parser, ValueEnum};
use image::Rgb;
use log::warn;

use deckgrid::batch::{generate_images, seeded_rng, BatchConfig};
use deckgrid::color::{parse_hex, to_hex};
use deckgrid::palette::{BrightnessLimit, HlsPalette, Palette};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PaletteKind {
    /// Lightness ramps around the base colors
    Hls,
    /// Fixed red, green, blue and yellow tones
    Direct,
}

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Number of images
    #[arg(default_value_t = 1000)]
    count: usize,

    /// Palette strategy
    #[arg(short = 'p', long, value_enum, default_value_t = PaletteKind::Hls)]
    palette: PaletteKind,

    /// Base color of a suit (hls palette only, give exactly 4)
    #[arg(
        short = 'c',
        long = "color",
        value_parser = parse_hex,
        default_values = ["EEE82C", "91CB3E", "53A548", "4C934C"],
    )]
    colors: Vec<Rgb<u8>>,

    /// Brightness limit in percent (hls palette only)
    #[arg(short = 'b', long, default_value_t = 80.0)]
    brightness_limit: f64,

    /// Random seed
    #[arg(long)]
    seed: Option<String>,

    /// Output directory
    #[arg(short = 'o', long, default_value = ".")]
    output_dir: PathBuf,

    /// Output file name prefix
    #[arg(long, default_value = "deck_image")]
    prefix: String,

    /// Worker threads
    #[arg(short = 'j', long, default_value_t = 1)]
    jobs: usize,

    /// Print the unshuffled palette and exit
    #[arg(long)]
    print_palette: bool,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let palette = match args.palette {
        PaletteKind::Direct => Palette::Direct,
        PaletteKind::Hls => {
            let limit = BrightnessLimit::new(args.brightness_limit)?;
            Palette::Hls(HlsPalette::from_colors(args.colors, limit)?)
        }
    };

    if args.print_palette {
        for (i, color) in palette.colors().into_iter().enumerate() {
            println!("{:2} {}", i, to_hex(color));
        }
        return Ok(());
    }

    if args.jobs == 0 {
        warn!("Job count must be at least 1, using 1");
    }

    let config = BatchConfig {
        count: args.count,
        output_dir: args.output_dir,
        prefix: args.prefix,
        jobs: args.jobs.max(1),
    };
    let mut random = seeded_rng(args.seed.as_deref());

    generate_images(&palette, &config, &mut random)?;

    Ok(())
}
