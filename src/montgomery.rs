//! Montgomery curves: x-only arithmetic and the Montgomery ladder.
//!
//! Points are (X:Z) with x = X/Z; the Y coordinate is not used. The
//! group's `A` field holds (A + 2)/4 for curve equation
//! B*y^2 = x^3 + A*x^2 + x.
//!
//! The ladder processes all bits of the scalar, from the top bit which
//! private keys always have (see `keys::check_privkey()`), with the same
//! sequence of operations for every bit; the running points are
//! exchanged with constant-time conditional swaps. Coordinates are
//! randomized before the ladder and again before the final inversion.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

use crate::ct::{choice, CtAssign};
use crate::error::{Error, Result};
use crate::group::{Group, Point};
use crate::random::random_range;
use crate::reduce::{add_mod, inv_mod, mul_mod, sqr_mod, sub_mod};

/// Normalize: (X:Z) -> (X/Z : 1). The point at infinity (Z = 0) maps
/// to x = 0, as with the X25519 and X448 functions.
pub(crate) fn normalize_mxz(grp: &Group, P: &mut Point) -> Result<()> {
    if P.Z.is_zero() {
        P.X = BigInt::zero();
    } else {
        let Zi = inv_mod(grp, &P.Z)?;
        P.X = mul_mod(grp, &P.X, &Zi)?;
    }
    P.Z = BigInt::one();
    Ok(())
}

/// Randomize: (X:Z) -> (l*X : l*Z) for a random l in [2, p).
pub(crate) fn randomize_mxz(grp: &Group, P: &mut Point, rng: &mut dyn CryptoRngCore) -> Result<()> {
    let l = random_range(2, &grp.P, rng)?;
    P.X = mul_mod(grp, &P.X, &l)?;
    P.Z = mul_mod(grp, &P.Z, &l)?;
    Ok(())
}

/// Double-and-add: R <- 2*R and S <- R + S, with `d` the x coordinate
/// of S - R (RFC 7748, section 5).
///
/// Cost: 5M + 4S
fn double_add_mxz(grp: &Group, R: &mut Point, S: &mut Point, d: &BigInt) -> Result<()> {
    let A24 = grp.A.as_ref().ok_or(Error::BadInputData)?;

    let A = add_mod(grp, &R.X, &R.Z);
    let AA = sqr_mod(grp, &A)?;
    let B = sub_mod(grp, &R.X, &R.Z);
    let BB = sqr_mod(grp, &B)?;
    let E = sub_mod(grp, &AA, &BB);
    let C = add_mod(grp, &S.X, &S.Z);
    let D = sub_mod(grp, &S.X, &S.Z);
    let DA = mul_mod(grp, &D, &A)?;
    let CB = mul_mod(grp, &C, &B)?;

    let t = add_mod(grp, &DA, &CB);
    S.X = sqr_mod(grp, &t)?;
    let t = sub_mod(grp, &DA, &CB);
    let t = sqr_mod(grp, &t)?;
    S.Z = mul_mod(grp, d, &t)?;

    R.X = mul_mod(grp, &AA, &BB)?;
    let t = mul_mod(grp, A24, &E)?;
    let t = add_mod(grp, &BB, &t);
    R.Z = mul_mod(grp, &E, &t)?;
    Ok(())
}

/// Ladder multiplication R = m*P (x coordinate only).
///
/// An RNG is required: coordinates are always randomized. The scalar is
/// expected to have been checked as a private key, so that the number of
/// ladder steps is fixed for the curve.
pub(crate) fn mul_mxz(grp: &Group, m: &BigInt, P: &Point,
    rng: Option<&mut dyn CryptoRngCore>) -> Result<Point>
{
    let rng = rng.ok_or(Error::BadInputData)?;

    // Input x may be slightly above p.
    let mut PX = P.X.clone();
    while PX >= grp.P {
        PX -= &grp.P;
    }

    // R = 0, RP = P (randomized).
    let mut R = Point {
        X: BigInt::one(),
        Y: BigInt::zero(),
        Z: BigInt::zero(),
    };
    let mut RP = Point {
        X: PX.clone(),
        Y: BigInt::zero(),
        Z: BigInt::one(),
    };
    randomize_mxz(grp, &mut RP, rng)?;

    // Invariant: RP = R + P
    let mut i = m.bits();
    while i > 0 {
        i -= 1;
        let b = choice(m.bit(i));
        BigInt::ct_swap(&mut R.X, &mut RP.X, b);
        BigInt::ct_swap(&mut R.Z, &mut RP.Z, b);
        double_add_mxz(grp, &mut R, &mut RP, &PX)?;
        BigInt::ct_swap(&mut R.X, &mut RP.X, b);
        BigInt::ct_swap(&mut R.Z, &mut RP.Z, b);
    }

    // Projective coordinates may leak the low bits of the scalar
    // through the final inversion; randomize them first.
    randomize_mxz(grp, &mut R, rng)?;
    normalize_mxz(grp, &mut R)?;
    Ok(R)
}

// ========================================================================
