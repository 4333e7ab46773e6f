//! Random integers drawn from a caller-supplied RNG.
//!
//! The RNG is used as an opaque byte source. Any failure it reports is
//! returned as `Error::RandomFailed`; nothing is retried, except for
//! the bounded rejection loop of `random_range()`.

use num_bigint::{BigInt, Sign};
use rand_core::CryptoRngCore;

use crate::error::{Error, Result};

/// Fill `buf` with random bytes.
pub(crate) fn fill_bytes(rng: &mut dyn CryptoRngCore, buf: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(buf).map_err(|_| Error::RandomFailed)
}

/// Get a non-negative integer from `len` random bytes (big-endian).
pub(crate) fn fill_random(rng: &mut dyn CryptoRngCore, len: usize) -> Result<BigInt> {
    let mut buf = vec![0u8; len];
    fill_bytes(rng, &mut buf)?;
    Ok(BigInt::from_bytes_be(Sign::Plus, &buf))
}

/// Get a uniformly random integer in `[min, n)`.
///
/// Candidates are drawn with the bit length of `n` and rejected when out
/// of range. Since each candidate has probability at least 1/2 of being
/// accepted (when `min` is small), the number of attempts is capped;
/// past the cap, `RandomFailed` is returned.
pub(crate) fn random_range(min: u32, n: &BigInt, rng: &mut dyn CryptoRngCore) -> Result<BigInt> {
    let min = BigInt::from(min);
    if *n <= min {
        return Err(Error::BadInputData);
    }
    let n_bits = n.bits() as usize;
    let n_bytes = (n_bits + 7) >> 3;
    let max_tries = if n_bytes > 4 { 30 } else { 250 };
    let mut buf = vec![0u8; n_bytes];
    for _ in 0..max_tries {
        fill_bytes(rng, &mut buf)?;
        let x = BigInt::from_bytes_be(Sign::Plus, &buf) >> (8 * n_bytes - n_bits);
        if x >= min && x < *n {
            return Ok(x);
        }
    }
    Err(Error::RandomFailed)
}


// ========================================================================
