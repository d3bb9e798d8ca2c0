// Imports
use rand::{Rng, SeedableRng};

/// A new random number generator with the pcg64 algorithm.
///
/// Used for seedable, reproducible random numbers.
pub fn new_rng_default_pcg64(seed: Option<u64>) -> rand_pcg::Pcg64 {
    if let Some(seed) = seed {
        rand_pcg::Pcg64::seed_from_u64(seed)
    } else {
        rand_pcg::Pcg64::from_os_rng()
    }
}

/// Generate a new seed by generating a random value seeded from the old seed using the Pcg algorithm.
pub fn seed_advance(seed: u64) -> u64 {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
    rng.random()
}

/// A random seed from the operating system.
pub fn random_seed() -> u64 {
    rand::rng().random()
}
