//! Random-source seam consumed by the generators and seed derivation helpers.

use rand::{Rng, distributions::Standard, seq::index};

/// Seed used when callers do not supply one.
pub const DEFAULT_RNG_SEED: u64 = 0x5EED_CAFE;

/// SplitMix64 increment (the 64-bit golden ratio) used for stream seed
/// derivation.
const STREAM_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Sampling operations the generators draw on.
///
/// Every [`rand::Rng`] implements this trait, so callers usually pass a seeded
/// [`rand::rngs::SmallRng`]. Tests may substitute scripted sources.
///
/// # Examples
/// ```
/// use netgen_core::RandomSource;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let draw = rng.next_unit();
/// assert!((0.0..1.0).contains(&draw));
/// assert_eq!(rng.choose_index(0), None);
/// let picks = rng.sample_indices(10, 3);
/// assert_eq!(picks.len(), 3);
/// ```
pub trait RandomSource {
    /// Returns a uniform draw from `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns a uniform index in `0..len`, or `None` when `len` is zero.
    fn choose_index(&mut self, len: usize) -> Option<usize>;

    /// Returns `min(amount, len)` distinct uniform indices from `0..len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.sample(Standard)
    }

    fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.gen_range(0..len))
    }

    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(self, len, amount.min(len)).into_vec()
    }
}

/// Derives an independent seed for stream `stream` from `base_seed`.
///
/// Streams with different indices yield well-separated seeds even when the
/// base seed is small.
#[inline]
#[must_use]
pub fn mix_stream_seed(base_seed: u64, stream: u64) -> u64 {
    splitmix64(base_seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_SEED_SPACING))
}

#[inline]
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(STREAM_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
