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

use rand::prelude::*;

/// Fisher-Yates shuffle.
///
/// Walks the slice from the back; every position `i` is swapped with a
/// position drawn uniformly from `0..=i`. Uses `len - 1` random draws and
/// no extra allocation. Slices of length 0 or 1 are left untouched.
pub fn fisher_yates<T, R>(deck: &mut [T], random: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..deck.len()).rev() {
        let j = random.gen_range(0..=i);
        deck.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn empty_and_single_are_noop() {
        let mut random = Xoshiro256StarStar::seed_from_u64(1);

        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut random);

        let mut one = [7u8];
        fisher_yates(&mut one, &mut random);
        assert_eq!(one, [7]);
    }

    #[test]
    fn same_seed_same_permutation() {
        let deck: Vec<usize> = (0..52).collect();

        let mut a = deck.clone();
        let mut b = deck.clone();
        fisher_yates(&mut a, &mut Xoshiro256StarStar::seed_from_u64(42));
        fisher_yates(&mut b, &mut Xoshiro256StarStar::seed_from_u64(42));
        assert_eq!(a, b);

        let mut c = deck;
        fisher_yates(&mut c, &mut Xoshiro256StarStar::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn positions_are_uniform() {
        const N: usize = 8;
        const TRIALS: usize = 40_000;

        let mut random = Xoshiro256StarStar::seed_from_u64(0xdec4);
        let mut counts = [[0usize; N]; N];
        for _ in 0..TRIALS {
            let mut deck: [usize; N] = std::array::from_fn(|i| i);
            fisher_yates(&mut deck, &mut random);
            for (pos, &card) in deck.iter().enumerate() {
                counts[pos][card] += 1;
            }
        }

        // 7 degrees of freedom per position; 35.26 is roughly the p = 1e-5 cutoff.
        let expected = (TRIALS / N) as f64;
        for row in counts {
            let chi2: f64 = row
                .iter()
                .map(|&c| (c as f64 - expected).powi(2) / expected)
                .sum();
            assert!(chi2 < 35.26, "chi-square {chi2} too large for {row:?}");
        }
    }

    proptest! {
        #[test]
        fn output_is_permutation(mut deck in prop::collection::vec(any::<u16>(), 0..100), seed: u64) {
            let mut sorted = deck.clone();
            sorted.sort_unstable();

            fisher_yates(&mut deck, &mut Xoshiro256StarStar::seed_from_u64(seed));
            deck.sort_unstable();
            prop_assert_eq!(deck, sorted);
        }
    }
}
