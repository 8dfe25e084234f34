use rand_core::{CryptoRng, RngCore};

use crate::polynomial_ring::poly::Polynomial;

/// Bound on the magnitude of random coefficients and exponents. Kept small so
/// products stay far from overflow and evaluations stay well conditioned.
pub const SMALL_INT_BOUND: i32 = 5;

/// A uniform integer in -SMALL_INT_BOUND..=SMALL_INT_BOUND.
pub fn rand_small_int<R: CryptoRng + RngCore>(rng: &mut R) -> i32 {
    let range = (2 * SMALL_INT_BOUND + 1) as u64;
    // Reduce a 64-bit sample; the bias over 11 values is negligible.
    (rng.next_u64() % range) as i32 - SMALL_INT_BOUND
}

/// A uniform integer in 1..=SMALL_INT_BOUND.
pub fn rand_pos_int<R: CryptoRng + RngCore>(rng: &mut R) -> i32 {
    (rng.next_u64() % SMALL_INT_BOUND as u64) as i32 + 1
}

/// A uniform integer in -SMALL_INT_BOUND..=-1.
pub fn rand_neg_int<R: CryptoRng + RngCore>(rng: &mut R) -> i32 {
    -rand_pos_int(rng)
}

/// A random polynomial built from `n` random (coefficient, exponent) pairs,
/// so it has at most `n` terms once collisions and zeros are folded away.
pub fn rand_poly<R: CryptoRng + RngCore>(rng: &mut R, n: usize) -> Polynomial {
    let coeffs: Vec<i32> = (0..n).map(|_| rand_small_int(rng)).collect();
    let exps: Vec<i32> = (0..n).map(|_| rand_small_int(rng)).collect();
    Polynomial::new(&coeffs, &exps)
}

/// A random evaluation point with magnitude in [1, 5] and random sign.
/// Staying away from (-1, 1) keeps negative powers from blowing up.
pub fn rand_x<R: CryptoRng + RngCore>(rng: &mut R) -> f64 {
    let sample = rng.next_u64();
    let unit = (sample >> 11) as f64 / (1u64 << 53) as f64;
    let x = 1.0 + 4.0 * unit;
    if sample & 1 == 1 { -x } else { x }
}
