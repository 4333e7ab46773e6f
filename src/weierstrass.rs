//! Short Weierstrass curves: Jacobian coordinates and comb multiplication.
//!
//! Curve equation is y^2 = x^3 + a*x + b. Points are in Jacobian
//! coordinates: (X:Y:Z) represents the affine point (X/Z^2, Y/Z^3), and
//! Z = 0 is the point at infinity. When `a = -3` (the group's `A` field
//! is `None`), doublings use a cheaper formula.
//!
//! Multiplication by a scalar uses the comb method with odd-only digits
//! (Hedabou, Pinel and Beneteau, "A comb method to render ECC resistant
//! against Side Channel Attacks", 2004): the scalar is recoded into
//! `d + 1` signed digits of `w` bits each, so that every step of the main
//! loop is one doubling followed by one addition of a table entry. The
//! table holds the `2^(w-1)` combinations of `2^(d*j)*P` for `j < w`. The
//! entry is read with a constant-time lookup that touches all entries.
//!
//! The sequence of doublings and additions depends only on the bit
//! length of the group order and on whether the point is the
//! conventional generator, not on the scalar value.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use num_bigint::BigInt;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};

use crate::ct::{choice, CtAssign};
use crate::error::{Error, Result};
use crate::group::{Group, Point};
use crate::opcount;
use crate::random::random_range;
use crate::reduce::{add_mod, inv_mod, mul_int_mod, mul_mod, shl_mod, sqr_mod, sub_mod};
use crate::restart::{check_budget, MulPhase, MulRestart, RestartContext};
use crate::restart::{OPS_ADD, OPS_DBL, OPS_INV};

/// Maximum comb window size. The precomputed table for a point holds
/// `2^(w-1)` points for window size `w`.
pub const WINDOW_SIZE: usize = 6;

/// Normalize a point: (X:Y:Z) -> (X/Z^2 : Y/Z^3 : 1). The point at
/// infinity is left unchanged.
pub(crate) fn normalize_jac(grp: &Group, P: &mut Point) -> Result<()> {
    if P.Z.is_zero() {
        return Ok(());
    }
    let Zi = inv_mod(grp, &P.Z)?;
    let ZZi = sqr_mod(grp, &Zi)?;
    P.X = mul_mod(grp, &P.X, &ZZi)?;
    let ZZZi = mul_mod(grp, &ZZi, &Zi)?;
    P.Y = mul_mod(grp, &P.Y, &ZZZi)?;
    P.Z = BigInt::one();
    Ok(())
}

/// Normalize the points `T[i]` for all `i` in `idx`, with a single
/// inversion (Montgomery's trick). None of these points may be the point
/// at infinity.
pub(crate) fn normalize_jac_many(grp: &Group, T: &mut [Point], idx: &[usize]) -> Result<()> {
    match idx.len() {
        0 => return Ok(()),
        1 => return normalize_jac(grp, &mut T[idx[0]]),
        _ => {}
    }

    // c[i] = Z_0 * Z_1 * ... * Z_i
    let mut c: Vec<BigInt> = Vec::new();
    c.try_reserve_exact(idx.len()).map_err(|_| Error::AllocFailed)?;
    c.push(T[idx[0]].Z.clone());
    for k in 1..idx.len() {
        let v = mul_mod(grp, &c[k - 1], &T[idx[k]].Z)?;
        c.push(v);
    }

    // u = 1 / (Z_0 * ... * Z_k) at step k
    let mut u = inv_mod(grp, &c[idx.len() - 1])?;
    for k in (0..idx.len()).rev() {
        let Zi = if k == 0 {
            u.clone()
        } else {
            let zi = mul_mod(grp, &u, &c[k - 1])?;
            u = mul_mod(grp, &u, &T[idx[k]].Z)?;
            zi
        };
        let P = &mut T[idx[k]];
        let ZZi = sqr_mod(grp, &Zi)?;
        P.X = mul_mod(grp, &P.X, &ZZi)?;
        let ZZZi = mul_mod(grp, &ZZi, &Zi)?;
        P.Y = mul_mod(grp, &P.Y, &ZZZi)?;
        P.Z = BigInt::one();
    }
    Ok(())
}

/// Conditionally negate a point, in constant time (the point at
/// infinity, or a point with Y = 0, is left unchanged).
pub(crate) fn safe_invert_jac(grp: &Group, Q: &mut Point, inv: Choice) {
    let nonzero = !choice(Q.Y.is_zero());
    let mQY = &grp.P - &Q.Y;
    Q.Y.ct_assign(&mQY, inv & nonzero);
}

/// Point doubling, in Jacobian coordinates.
///
/// Cost: 1D := 3M + 4S (a = -3), 2M + 6S (a = 0), 3M + 6S (otherwise).
pub(crate) fn double_jac(grp: &Group, P: &Point) -> Result<Point> {
    opcount::count_dbl();

    let M = match &grp.A {
        None => {
            // M = 3*(X + Z^2)*(X - Z^2)
            let S = sqr_mod(grp, &P.Z)?;
            let T = add_mod(grp, &P.X, &S);
            let U = sub_mod(grp, &P.X, &S);
            let S = mul_mod(grp, &T, &U)?;
            mul_int_mod(grp, &S, 3)
        }
        Some(A) => {
            // M = 3*X^2 + A*Z^4
            let S = sqr_mod(grp, &P.X)?;
            let mut M = mul_int_mod(grp, &S, 3);
            if !A.is_zero() {
                let S = sqr_mod(grp, &P.Z)?;
                let T = sqr_mod(grp, &S)?;
                let S = mul_mod(grp, &T, A)?;
                M = add_mod(grp, &M, &S);
            }
            M
        }
    };

    // S = 4*X*Y^2
    let T = sqr_mod(grp, &P.Y)?;
    let T = shl_mod(grp, &T, 1);
    let S = mul_mod(grp, &P.X, &T)?;
    let S = shl_mod(grp, &S, 1);

    // U = 8*Y^4
    let U = sqr_mod(grp, &T)?;
    let U = shl_mod(grp, &U, 1);

    // X3 = M^2 - 2*S
    let X3 = sqr_mod(grp, &M)?;
    let X3 = sub_mod(grp, &X3, &S);
    let X3 = sub_mod(grp, &X3, &S);

    // Y3 = M*(S - X3) - U
    let Y3 = sub_mod(grp, &S, &X3);
    let Y3 = mul_mod(grp, &Y3, &M)?;
    let Y3 = sub_mod(grp, &Y3, &U);

    // Z3 = 2*Y*Z
    let Z3 = mul_mod(grp, &P.Y, &P.Z)?;
    let Z3 = shl_mod(grp, &Z3, 1);

    Ok(Point { X: X3, Y: Y3, Z: Z3 })
}

/// Mixed addition: P + Q, with P in Jacobian coordinates and Q affine
/// (Z = 1) or the point at infinity. A Q with any other Z is rejected.
///
/// Special cases (P or Q is zero, P = Q, P = -Q) are handled, but not
/// in constant time; they do not occur in the comb when the scalar is
/// in range.
///
/// Cost: 1A := 8M + 3S
pub(crate) fn add_mixed(grp: &Group, P: &Point, Q: &Point) -> Result<Point> {
    opcount::count_add();

    if P.Z.is_zero() {
        return Ok(Q.clone());
    }
    if Q.Z.is_zero() {
        return Ok(P.clone());
    }
    if !Q.Z.is_one() {
        return Err(Error::BadInputData);
    }

    let T1 = sqr_mod(grp, &P.Z)?;
    let T2 = mul_mod(grp, &T1, &P.Z)?;
    let T1 = mul_mod(grp, &T1, &Q.X)?;
    let T2 = mul_mod(grp, &T2, &Q.Y)?;
    let T1 = sub_mod(grp, &T1, &P.X);
    let T2 = sub_mod(grp, &T2, &P.Y);

    if T1.is_zero() {
        if T2.is_zero() {
            return double_jac(grp, P);
        } else {
            return Ok(Point::zero());
        }
    }

    let Z = mul_mod(grp, &P.Z, &T1)?;
    let T3 = sqr_mod(grp, &T1)?;
    let T4 = mul_mod(grp, &T3, &T1)?;
    let T3 = mul_mod(grp, &T3, &P.X)?;
    let T1 = mul_int_mod(grp, &T3, 2);
    let X = sqr_mod(grp, &T2)?;
    let X = sub_mod(grp, &X, &T1);
    let X = sub_mod(grp, &X, &T4);
    let T3 = sub_mod(grp, &T3, &X);
    let T3 = mul_mod(grp, &T3, &T2)?;
    let T4 = mul_mod(grp, &T4, &P.Y)?;
    let Y = sub_mod(grp, &T3, &T4);

    Ok(Point { X, Y, Z })
}

/// Randomize Jacobian coordinates: (X:Y:Z) -> (l^2*X : l^3*Y : l*Z)
/// for a random l in [2, p).
pub(crate) fn randomize_jac(grp: &Group, P: &mut Point, rng: &mut dyn CryptoRngCore) -> Result<()> {
    let l = random_range(2, &grp.P, rng)?;
    P.Z = mul_mod(grp, &P.Z, &l)?;
    let ll = sqr_mod(grp, &l)?;
    P.X = mul_mod(grp, &P.X, &ll)?;
    let ll = mul_mod(grp, &ll, &l)?;
    P.Y = mul_mod(grp, &P.Y, &ll)?;
    Ok(())
}

// ========================================================================

/// Recode odd scalar `m` into `d + 1` comb digits (`x.len() == d + 1`).
///
/// Digit `x[i]` (for `i < d`) first gets bits `i + d*j` of `m`, for
/// `j < w`, as bit `j`. All digits are then made odd by propagating a
/// carry, using `-x[i-1]` in place of a digit when needed; bit 7 of a
/// digit is set when that digit is to be negated. The represented value
/// is then the sum of `(+/-)C(x[i]) * 2^i`, with `C(x)` the combination
/// of `2^(d*j)` for the bits `j` of `x`.
fn comb_recode_core(x: &mut [u8], d: usize, w: usize, m: &BigInt) {
    for v in x.iter_mut() {
        *v = 0;
    }
    for i in 0..d {
        for j in 0..w {
            x[i] |= (m.bit((i + d * j) as u64) as u8) << j;
        }
    }

    let mut c = 0u8;
    for i in 1..=d {
        // Add carry and update it.
        let cc = x[i] & c;
        x[i] ^= c;
        c = cc;

        // Adjust if needed, without branching.
        let adjust = 1 - (x[i] & 0x01);
        c |= x[i] & (x[i - 1] * adjust);
        x[i] ^= x[i - 1] * adjust;
        x[i - 1] |= adjust << 7;
    }
}

/// Recode scalar `m` (`1 <= m < N`) for the comb. Since the recoding
/// needs an odd value, `N - m` is used when `m` is even; the returned
/// choice is then set, and the result must be negated.
fn comb_recode_scalar(grp: &Group, m: &BigInt, k: &mut [u8], d: usize, w: usize) -> Result<Choice> {
    // N is odd for all supported curves.
    if !grp.N.bit(0) {
        return Err(Error::BadInputData);
    }
    let parity_trick = !choice(m.bit(0));
    let mut M = m.clone();
    let mM = &grp.N - m;
    M.ct_assign(&mM, parity_trick);
    comb_recode_core(k, d, w, &M);
    Ok(parity_trick)
}

/// Select table entry `(i & 0x7F) >> 1`, in constant time, and negate
/// it if bit 7 of `i` is set. Entries must be normalized.
fn select_comb(grp: &Group, T: &[Point], i: u8) -> Point {
    let ii = ((i & 0x7F) >> 1) as u32;
    let mut R = Point {
        X: BigInt::zero(),
        Y: BigInt::zero(),
        Z: BigInt::one(),
    };
    for (j, Tj) in T.iter().enumerate() {
        let c = (j as u32).ct_eq(&ii);
        R.X.ct_assign(&Tj.X, c);
        R.Y.ct_assign(&Tj.Y, c);
    }
    safe_invert_jac(grp, &mut R, Choice::from(i >> 7));
    R
}

/// Window size and number of comb digits for the group. The
/// conventional generator gets a larger window when its table is kept
/// in the group.
pub(crate) fn comb_window(grp: &Group, p_eq_g: bool) -> (usize, usize) {
    let mut w = if grp.nbits >= 384 { 5 } else { 4 };
    if p_eq_g && cfg!(feature = "fixed_point_optim") {
        w += 1;
    }
    if w > WINDOW_SIZE {
        w = WINDOW_SIZE;
    }
    if w >= grp.nbits {
        w = 2;
    }
    (w, (grp.nbits + w - 1) / w)
}

/// Compute (or finish computing) the comb table for point P (affine):
///   T[i] = i_{w-1} 2^((w-1)d) P + ... + i_1 2^d P + P
/// for all i with the binary representation i_{w-1}...i_1, all
/// normalized. The table is built in `st.T`; progress is kept in `st`.
fn precompute_comb(grp: &Group, P: &Point, w: usize, d: usize,
    mut rs: Option<&mut RestartContext>, st: &mut MulRestart) -> Result<()>
{
    let T_size = 1usize << (w - 1);

    if st.phase == MulPhase::Init {
        st.T.clear();
        st.T.try_reserve_exact(T_size).map_err(|_| Error::AllocFailed)?;
        st.T.resize(T_size, Point::new());
        st.T[0] = P.clone();
        st.i = 0;
        st.phase = MulPhase::PreDbl;
    }

    if st.phase == MulPhase::PreDbl {
        // T[2^(l-1)] = 2^(d*l)*P for l = 1 to w-1 (not the final values).
        while st.i < d * (w - 1) {
            check_budget(grp, rs.as_deref_mut(), OPS_DBL)?;
            let j = st.i;
            let i = 1usize << (j / d);
            if j % d == 0 {
                st.T[i] = st.T[i >> 1].clone();
            }
            st.T[i] = double_jac(grp, &st.T[i])?;
            st.i += 1;
        }
        st.phase = MulPhase::PreNormDbl;
    }

    if st.phase == MulPhase::PreNormDbl {
        let idx: Vec<usize> = (0..(w - 1)).map(|l| 1usize << l).collect();
        check_budget(grp, rs.as_deref_mut(), OPS_INV + 6 * idx.len() as u32 - 2)?;
        normalize_jac_many(grp, &mut st.T, &idx)?;
        st.phase = MulPhase::PreAdd;
    }

    if st.phase == MulPhase::PreAdd {
        // T[i + j] = T[i] + T[j] for 0 <= j < i, i a power of 2.
        check_budget(grp, rs.as_deref_mut(), (T_size as u32 - 1) * OPS_ADD)?;
        let mut i = 1;
        while i < T_size {
            for j in (0..i).rev() {
                st.T[i + j] = add_mixed(grp, &st.T[j], &st.T[i])?;
            }
            i <<= 1;
        }
        st.phase = MulPhase::PreNormAdd;
    }

    if st.phase == MulPhase::PreNormAdd {
        let idx: Vec<usize> = (1..T_size).collect();
        check_budget(grp, rs.as_deref_mut(), OPS_INV + 6 * idx.len() as u32 - 2)?;
        normalize_jac_many(grp, &mut st.T, &idx)?;
        st.i = 0;
        st.phase = MulPhase::CombCore;
    }

    Ok(())
}

/// Comb multiplication R = m*P, with the scalar in [1, N) and P affine
/// and valid (both already checked).
///
/// If `rng` is provided, the Jacobian coordinates are randomized before
/// the main loop and before the final normalization. Progress is kept in
/// the restart context, if one is provided and restarting is enabled.
pub(crate) fn mul_comb(grp: &mut Group, m: &BigInt, P: &Point,
    rng: Option<&mut dyn CryptoRngCore>, mut rs: Option<&mut RestartContext>) -> Result<Point>
{
    let saved = match rs.as_deref_mut() {
        Some(ctx) => ctx.take_mul(),
        None => None,
    };
    let tracked = saved.is_some();
    let mut st = saved.unwrap_or_default();
    let r = mul_comb_steps(grp, m, P, rng, rs.as_deref_mut(), &mut st);
    if let Some(ctx) = rs {
        ctx.store_mul(st, tracked && r.as_ref().err() == Some(&Error::InProgress));
    }
    r
}

fn mul_comb_steps(grp: &mut Group, m: &BigInt, P: &Point,
    mut rng: Option<&mut dyn CryptoRngCore>, mut rs: Option<&mut RestartContext>,
    st: &mut MulRestart) -> Result<Point>
{
    let p_eq_g = cfg!(feature = "fixed_point_optim")
        && P.Y == grp.G.Y && P.X == grp.G.X;
    let (w, d) = comb_window(grp, p_eq_g);
    let T_size = 1usize << (w - 1);

    // Recoding is deterministic, hence redone when resuming.
    let mut k = vec![0u8; d + 1];
    let parity_trick = comb_recode_scalar(grp, m, &mut k, d, w)?;

    if st.phase < MulPhase::CombCore {
        if p_eq_g && grp.T.len() == T_size {
            // The table may have been kept by another multiplication
            // while this one was suspended; a partial table is dropped.
            st.T.clear();
            st.i = 0;
            st.phase = MulPhase::CombCore;
        } else {
            precompute_comb(grp, P, w, d, rs.as_deref_mut(), st)?;
            if p_eq_g {
                grp.T = core::mem::take(&mut st.T);
                log::debug!("comb table for the generator of {:?} kept ({} points)",
                    grp.id, T_size);
            }
        }
    }

    let grp: &Group = grp;
    let T: &[Point] = if p_eq_g && grp.T.len() == T_size {
        &grp.T
    } else if st.T.len() == T_size {
        &st.T
    } else {
        return Err(Error::BadInputData);
    };

    if st.phase == MulPhase::CombCore {
        if st.i == 0 {
            // Start with a non-zero point and randomize its coordinates.
            st.R = select_comb(grp, T, k[d]);
            if let Some(r) = rng.as_deref_mut() {
                randomize_jac(grp, &mut st.R, r)?;
            }
            st.i = d;
        }
        while st.i != 0 {
            check_budget(grp, rs.as_deref_mut(), OPS_DBL + OPS_ADD)?;
            let i = st.i - 1;
            let R2 = double_jac(grp, &st.R)?;
            let Txi = select_comb(grp, T, k[i]);
            st.R = add_mixed(grp, &R2, &Txi)?;
            st.i = i;
        }
        safe_invert_jac(grp, &mut st.R, parity_trick);
        st.phase = MulPhase::FinalNorm;
    }

    // Knowledge of the Jacobian coordinates may leak the last few bits
    // of the scalar (Naccache, Smart and Stern, "Projective coordinates
    // leak", 2004); randomize them before normalizing.
    check_budget(grp, rs, OPS_INV)?;
    if let Some(r) = rng {
        randomize_jac(grp, &mut st.R, r)?;
    }
    normalize_jac(grp, &mut st.R)?;
    Ok(core::mem::take(&mut st.R))
}

// ========================================================================
