mod error;
mod param_gen;
mod random;

use ndarray::Array1;
use num_traits::AsPrimitive;
use rand::{SeedableRng, rngs::StdRng};

pub use error::{RandErr, Result};
pub use param_gen::ParamGen;
pub use random::RandParamGen;

/// Lower bound of the initial weight distribution.
pub const INIT_LOW: f64 = -1.;

/// Upper bound of the initial weight distribution.
pub const INIT_HIGH: f64 = 1.;

/// Builds a fresh random number generator, deterministic if a seed is given.
pub fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Produces a new weight vector for feature vectors shaped like `representative`.
///
/// The width is taken from `representative`, whose elements may be of any primitive numeric
/// type; the weights are always `f64` and drawn independently from `U[-1, 1]`. A new generator
/// is built on every call so no random state leaks between ingestions.
///
/// # Arguments
/// * `representative` - One feature vector of the dataset being ingested.
/// * `seed` - Optional seed for reproducible initialization.
pub fn init_weights<T>(representative: &[T], seed: Option<u64>) -> Result<Array1<f64>>
where
    T: AsPrimitive<f64>,
{
    let rng = generate_rng(seed);
    let mut param_gen = RandParamGen::uniform_inclusive(rng, INIT_LOW, INIT_HIGH)?;
    Ok(Array1::from_vec(param_gen.sample(representative.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_representative_for_any_numeric_type() {
        assert_eq!(init_weights(&[1i32, 2, 3], Some(0)).unwrap().len(), 3);
        assert_eq!(init_weights(&[1f32, 2.], Some(0)).unwrap().len(), 2);
        assert_eq!(init_weights(&[7u8], Some(0)).unwrap().len(), 1);
        assert_eq!(init_weights(&[0i64; 4], Some(0)).unwrap().len(), 4);
        assert!(init_weights::<f64>(&[], Some(0)).unwrap().is_empty());
    }

    #[test]
    fn weights_within_bounds() {
        let weights = init_weights(&[0.; 64], None).unwrap();
        assert!(weights.iter().all(|w| (INIT_LOW..=INIT_HIGH).contains(w)));
    }

    #[test]
    fn seeded_initialization_is_reproducible() {
        let a = init_weights(&[0.; 8], Some(7)).unwrap();
        let b = init_weights(&[0u16; 8], Some(7)).unwrap();
        assert_eq!(a, b);
    }
}
