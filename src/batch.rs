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

//! Batch generation of deck images.

use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::grid::Canvas;
use crate::palette::Palette;

/// Random source of a run.
pub type DeckRng = Xoshiro256StarStar;

/// Seeds from the SHA-256 of `seed`, or from entropy when absent.
pub fn seeded_rng(seed: Option<&str>) -> DeckRng {
    if let Some(seed) = seed {
        let mut hasher = Sha256::new();
        hasher.update(seed);

        DeckRng::from_seed(hasher.finalize().into())
    } else {
        DeckRng::from_entropy()
    }
}

/// Where and how many images to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub count: usize,
    pub output_dir: PathBuf,
    pub prefix: String,
    /// Worker threads. 0 and 1 both run sequentially.
    pub jobs: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            output_dir: PathBuf::from("."),
            prefix: "deck_image".to_owned(),
            jobs: 1,
        }
    }
}

impl BatchConfig {
    /// Path of the `n`-th image, 1-based.
    pub fn image_path(&self, n: usize) -> PathBuf {
        self.output_dir.join(format!("{}_{}.png", self.prefix, n))
    }
}

/// Shuffles a fresh deck and paints it.
pub fn render<R>(palette: &Palette, random: &mut R) -> Canvas
where
    R: rand::Rng + ?Sized,
{
    Canvas::paint(&palette.shuffled(random))
}

/// One independent generator per image, `random` advanced past all of them.
fn split_streams(random: &mut DeckRng, count: usize) -> Vec<DeckRng> {
    (0..count)
        .map(|_| {
            let stream = random.clone();
            random.jump();
            stream
        })
        .collect()
}

/// Writes `config.count` images and returns their paths in order.
///
/// Every image draws from its own stream split off `random`, so a seeded run
/// produces the same files regardless of `config.jobs`. The first failure
/// aborts the batch; images already written stay on disk.
pub fn generate_images(
    palette: &Palette,
    config: &BatchConfig,
    random: &mut DeckRng,
) -> Result<Vec<PathBuf>> {
    palette.log_summary();
    if config.count == 0 {
        return Ok(Vec::new());
    }
    fs::create_dir_all(&config.output_dir)?;

    let streams = split_streams(random, config.count);
    let write = |(i, mut stream): (usize, DeckRng)| -> Result<PathBuf> {
        let n = i + 1;
        let path = config.image_path(n);
        render(palette, &mut stream).save(&path)?;
        info!("Image {} saved as {}", n, path.display());
        Ok(path)
    };

    if config.jobs <= 1 {
        streams.into_iter().enumerate().map(write).collect()
    } else {
        debug!("Writing {} images on {} threads", config.count, config.jobs);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()?;
        pool.install(|| streams.into_par_iter().enumerate().map(&write).collect())
    }
}
