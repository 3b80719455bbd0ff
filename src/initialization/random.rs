use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::{ParamGen, Result};

/// A parameter generator that follows a certain probabilistic distribution.
pub struct RandParamGen<R: Rng, D: Distribution<f64>> {
    rng: R,
    distribution: D,
}

impl<R: Rng, D: Distribution<f64>> RandParamGen<R, D> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator, owned for the lifetime of the generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    pub fn new(rng: R, distribution: D) -> Self {
        Self { rng, distribution }
    }
}

impl<R: Rng> RandParamGen<R, Uniform<f64>> {
    /// Creates a new `RandParamGen` parameter generator with an inclusive uniform distribution.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `low` - The inclusive lower limit.
    /// * `high` - The inclusive upper limit.
    ///
    /// # Returns
    /// An error if the range is invalid (low > high or non finite).
    pub fn uniform_inclusive(rng: R, low: f64, high: f64) -> Result<Self> {
        Ok(Self::new(rng, Uniform::new_inclusive(low, high)?))
    }
}

impl<R: Rng, D: Distribution<f64>> ParamGen for RandParamGen<R, D> {
    fn sample(&mut self, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| self.distribution.sample(&mut self.rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn exact() {
        const SIZE: usize = 10;

        let mut param_gen = RandParamGen::uniform_inclusive(seeded_rng(), -1., 1.).unwrap();
        let sample = param_gen.sample(SIZE);

        assert_eq!(sample.len(), SIZE);
        assert!(sample.iter().all(|w| (-1. ..=1.).contains(w)));
    }

    #[test]
    fn empty() {
        let mut param_gen = RandParamGen::uniform_inclusive(seeded_rng(), -1., 1.).unwrap();
        assert!(param_gen.sample(0).is_empty());
    }

    #[test]
    fn invalid_range() {
        assert!(RandParamGen::uniform_inclusive(seeded_rng(), 1., -1.).is_err());
        assert!(RandParamGen::uniform_inclusive(seeded_rng(), f64::NAN, 1.).is_err());
    }

    #[test]
    fn same_seed_same_sample() {
        let mut a = RandParamGen::uniform_inclusive(seeded_rng(), -1., 1.).unwrap();
        let mut b = RandParamGen::uniform_inclusive(seeded_rng(), -1., 1.).unwrap();

        assert_eq!(a.sample(5), b.sample(5));
    }
}
