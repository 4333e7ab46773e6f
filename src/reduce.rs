//! Arithmetic modulo the field prime of a group.
//!
//! All field operations used by the point formulas go through the
//! functions of this module, which keep values in the canonical range
//! `[0, P)`. Multiplications are reduced with `mod_p()`; when the group
//! modulus has the form `2^k - c` for a small `c`, the reduction folds
//! the high bits (`x = h*2^k + l = h*c + l mod p`) instead of using a
//! generic division.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};
use crate::group::Group;
use crate::opcount;

/// Reduction modulo a pseudo-Mersenne prime `p = 2^k - c`.
#[derive(Clone, Debug)]
pub(crate) struct FastReduction {
    k: usize,
    c: BigUint,
    mask: BigUint,
}

impl FastReduction {

    /// Build the reduction for modulus `p`, of bit length `k`.
    pub(crate) fn new(p: &BigInt) -> Self {
        let k = p.bits() as usize;
        let top = BigUint::one() << k;
        let c = &top - p.magnitude();
        let mask = top - BigUint::one();
        FastReduction { k, c, mask }
    }

    /// Fold `x` until it fits on `k` bits. The result is congruent to
    /// the input, and lower than `2^k` (but possibly not lower than p).
    fn fold(&self, x: &mut BigUint) {
        while x.bits() as usize > self.k {
            let hi = &*x >> self.k;
            let lo = &*x & &self.mask;
            *x = hi * &self.c + lo;
        }
    }
}

/// Reduce `n` modulo the group prime, in place.
///
/// The input must be lower than `2^(2*pbits)` in absolute value (i.e.
/// the product of two reduced values); with a fast reduction routine,
/// it must also be non-negative. Inputs outside that range are
/// rejected with `BadInputData`.
pub(crate) fn mod_p(grp: &Group, n: &mut BigInt) -> Result<()> {
    if n.bits() > 2 * grp.pbits as u64 {
        return Err(Error::BadInputData);
    }
    match &grp.modp {
        Some(fr) => {
            if n.is_negative() {
                return Err(Error::BadInputData);
            }
            let mut x = n.magnitude().clone();
            fr.fold(&mut x);
            *n = BigInt::from_biguint(Sign::Plus, x);
        }
        None => {
            *n %= &grp.P;
        }
    }
    while n.is_negative() {
        *n += &grp.P;
    }
    while *n >= grp.P {
        *n -= &grp.P;
    }
    Ok(())
}

/// Multiplication modulo p.
pub(crate) fn mul_mod(grp: &Group, a: &BigInt, b: &BigInt) -> Result<BigInt> {
    opcount::count_mul();
    let mut r = a * b;
    mod_p(grp, &mut r)?;
    Ok(r)
}

/// Squaring modulo p.
#[inline]
pub(crate) fn sqr_mod(grp: &Group, a: &BigInt) -> Result<BigInt> {
    mul_mod(grp, a, a)
}

/// Addition modulo p (operands in `[0, p)`).
pub(crate) fn add_mod(grp: &Group, a: &BigInt, b: &BigInt) -> BigInt {
    let mut r = a + b;
    while r >= grp.P {
        r -= &grp.P;
    }
    r
}

/// Subtraction modulo p (operands in `[0, p)`).
pub(crate) fn sub_mod(grp: &Group, a: &BigInt, b: &BigInt) -> BigInt {
    let mut r = a - b;
    while r.is_negative() {
        r += &grp.P;
    }
    r
}

/// Left shift modulo p, for small shift counts.
pub(crate) fn shl_mod(grp: &Group, a: &BigInt, count: usize) -> BigInt {
    let mut r = a << count;
    while r >= grp.P {
        r -= &grp.P;
    }
    r
}

/// Multiplication by a small integer modulo p.
pub(crate) fn mul_int_mod(grp: &Group, a: &BigInt, k: u32) -> BigInt {
    let mut r = a * k;
    while r >= grp.P {
        r -= &grp.P;
    }
    r
}

/// Inversion modulo p (Fermat). Inverting zero is `BadInputData`.
pub(crate) fn inv_mod(grp: &Group, a: &BigInt) -> Result<BigInt> {
    if a.is_zero() {
        return Err(Error::BadInputData);
    }
    let e = &grp.P - 2u32;
    Ok(a.modpow(&e, &grp.P))
}

/// Square root modulo p; `None` if `a` is not a quadratic residue.
///
/// For `p = 3 mod 4` this is a single exponentiation; otherwise,
/// Tonelli-Shanks is used. This function is not constant-time; it is
/// used only when decoding public points.
pub(crate) fn sqrt_mod(grp: &Group, a: &BigInt) -> Option<BigInt> {
    let p = &grp.P;
    if a.is_zero() {
        return Some(BigInt::zero());
    }
    let one = BigInt::one();
    let pm1 = p - 1u32;
    if a.modpow(&(&pm1 >> 1), p) != one {
        return None;
    }
    if p.bit(0) && p.bit(1) {
        return Some(a.modpow(&((p + 1u32) >> 2), p));
    }

    // p - 1 = q*2^s with q odd.
    let s = pm1.trailing_zeros()?;
    let q = &pm1 >> s;

    // Any quadratic non-residue z.
    let mut z = BigInt::from(2u32);
    while z.modpow(&(&pm1 >> 1), p) != pm1 {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + 1u32) >> 1), p);
    while t != one {
        // Least i such that t^(2^i) = 1.
        let mut i = 0u64;
        let mut tt = t.clone();
        while tt != one {
            tt = (&tt * &tt) % p;
            i += 1;
            if i == m {
                return None;
            }
        }
        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = (&b * &b) % p;
        }
        m = i;
        c = (&b * &b) % p;
        t = (&t * &c) % p;
        r = (&r * &b) % p;
    }
    Some(r)
}

// ========================================================================
