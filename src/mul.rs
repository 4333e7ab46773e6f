//! Scalar multiplication and linear combinations.
//!
//! `mul()` computes m*P for a secret scalar `m`; it validates both
//! operands, and uses the comb method (short Weierstrass curves) or the
//! Montgomery ladder (Montgomery curves). An RNG is required: it is used
//! to randomize the projective coordinates, for both curve types.
//!
//! `muladd()` computes m*P + n*Q for public scalars and points (e.g. for
//! signature verification), and `mul_vartime()` is the corresponding
//! single multiplication. These two functions are NOT constant-time and
//! must not be used with secret values.
//!
//! The `_restartable` variants accept a `RestartContext`; see the
//! `restart` module.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rand_core::CryptoRngCore;

use crate::error::{Error, Result};
use crate::group::{CurveType, Group, Point};
use crate::keys::{check_privkey, check_pubkey};
use crate::montgomery;
use crate::restart::{check_budget, MulAddPhase, MulAddRestart, RestartContext};
use crate::restart::{OPS_ADD, OPS_CHK, OPS_INV};
use crate::weierstrass;

/// Multiplication R = m*P, with checks on both operands; without an
/// RNG, coordinates are not randomized (public values only).
fn mul_internal(grp: &mut Group, m: &BigInt, P: &Point,
    rng: Option<&mut dyn CryptoRngCore>, mut rs: Option<&mut RestartContext>) -> Result<Point>
{
    if let Some(ctx) = rs.as_deref_mut() {
        ctx.enter();
    }
    let r = mul_dispatch(grp, m, P, rng, rs.as_deref_mut());
    if let Some(ctx) = rs {
        ctx.leave();
    }
    r
}

fn mul_dispatch(grp: &mut Group, m: &BigInt, P: &Point,
    rng: Option<&mut dyn CryptoRngCore>, mut rs: Option<&mut RestartContext>) -> Result<Point>
{
    // Arguments were checked by the call which was interrupted.
    let resuming = rs.as_deref().map_or(false, |ctx| ctx.mul_in_flight());
    if !resuming {
        check_budget(grp, rs.as_deref_mut(), OPS_CHK)?;
        check_privkey(grp, m)?;
        check_pubkey(grp, P)?;
    }

    match grp.kind {
        CurveType::Montgomery => montgomery::mul_mxz(grp, m, P, rng),
        CurveType::ShortWeierstrass => weierstrass::mul_comb(grp, m, P, rng, rs),
        CurveType::None => Err(Error::BadInputData),
    }
}

/// Multiplication R = m*P.
///
/// `m` must be a valid private key for the group, and `P` a valid public
/// key; otherwise, `InvalidKey` is returned. The RNG is used for
/// blinding the coordinates. The returned point is normalized.
///
/// If `P` is the conventional generator and the `fixed_point_optim`
/// feature is enabled, the precomputed table is kept in the group, which
/// makes later multiplications of the generator faster.
pub fn mul(grp: &mut Group, m: &BigInt, P: &Point, rng: &mut dyn CryptoRngCore) -> Result<Point> {
    mul_internal(grp, m, P, Some(rng), None)
}

/// Restartable multiplication R = m*P.
///
/// Same as `mul()`, but with an optional restart context: when the
/// operation budget is exhausted, `InProgress` is returned, and the call
/// should be repeated with the same arguments.
pub fn mul_restartable(grp: &mut Group, m: &BigInt, P: &Point,
    rng: &mut dyn CryptoRngCore, rs: Option<&mut RestartContext>) -> Result<Point>
{
    mul_internal(grp, m, P, Some(rng), rs)
}

/// R = m*P with shortcuts for m = 0, 1 and -1 (the point is still
/// validated). This function is not constant-time.
fn mul_shortcuts(grp: &mut Group, m: &BigInt, P: &Point,
    rs: Option<&mut RestartContext>) -> Result<Point>
{
    if m.is_zero() {
        check_pubkey(grp, P)?;
        Ok(Point::zero())
    } else if m.is_one() {
        check_pubkey(grp, P)?;
        Ok(P.clone())
    } else if m.is_negative() && m.magnitude().is_one() {
        check_pubkey(grp, P)?;
        let mut R = P.clone();
        if !R.Y.is_zero() {
            R.Y = &grp.P - &R.Y;
        }
        Ok(R)
    } else {
        mul_internal(grp, m, P, None, rs)
    }
}

/// Multiplication R = m*P for a PUBLIC scalar and point. This function
/// is NOT constant-time.
///
/// The scalar may have any value; it is reduced modulo the group order.
/// Only short Weierstrass curves are supported (`FeatureUnavailable`
/// otherwise).
pub fn mul_vartime(grp: &mut Group, m: &BigInt, P: &Point) -> Result<Point> {
    if grp.kind != CurveType::ShortWeierstrass {
        return Err(Error::FeatureUnavailable);
    }
    let mut k = m % &grp.N;
    if k.is_negative() {
        k += &grp.N;
    }
    if k == &grp.N - 1u32 {
        k = -BigInt::one();
    }
    mul_shortcuts(grp, &k, P, None)
}

/// Linear combination R = m*P + n*Q, for PUBLIC scalars and points.
/// This function is NOT constant-time.
///
/// Scalars must be in [0, N-1] (or be -1), and points valid public keys.
/// Only short Weierstrass curves are supported (`FeatureUnavailable`
/// otherwise).
pub fn muladd(grp: &mut Group, m: &BigInt, P: &Point, n: &BigInt, Q: &Point) -> Result<Point> {
    muladd_restartable(grp, m, P, n, Q, None)
}

/// Restartable linear combination R = m*P + n*Q. This function is NOT
/// constant-time.
pub fn muladd_restartable(grp: &mut Group, m: &BigInt, P: &Point, n: &BigInt, Q: &Point,
    mut rs: Option<&mut RestartContext>) -> Result<Point>
{
    if grp.kind != CurveType::ShortWeierstrass {
        return Err(Error::FeatureUnavailable);
    }

    let saved = match rs.as_deref_mut() {
        Some(ctx) => {
            ctx.enter();
            ctx.take_muladd()
        }
        None => None,
    };
    let tracked = saved.is_some();
    let mut ma = saved.unwrap_or_else(MulAddRestart::new);

    let r = muladd_steps(grp, m, P, n, Q, rs.as_deref_mut(), &mut ma);

    if let Some(ctx) = rs {
        ctx.store_muladd(ma, tracked && r.as_ref().err() == Some(&Error::InProgress));
        ctx.leave();
    }
    r
}

fn muladd_steps(grp: &mut Group, m: &BigInt, P: &Point, n: &BigInt, Q: &Point,
    mut rs: Option<&mut RestartContext>, ma: &mut MulAddRestart) -> Result<Point>
{
    if ma.phase == MulAddPhase::Mul1 {
        ma.mP = mul_shortcuts(grp, m, P, rs.as_deref_mut())?;
        ma.phase = MulAddPhase::Mul2;
    }
    if ma.phase == MulAddPhase::Mul2 {
        ma.R = mul_shortcuts(grp, n, Q, rs.as_deref_mut())?;
        ma.phase = MulAddPhase::Add;
    }
    if ma.phase == MulAddPhase::Add {
        check_budget(grp, rs.as_deref_mut(), OPS_ADD)?;
        ma.R = weierstrass::add_mixed(grp, &ma.mP, &ma.R)?;
        ma.phase = MulAddPhase::Norm;
    }
    check_budget(grp, rs, OPS_INV)?;
    weierstrass::normalize_jac(grp, &mut ma.R)?;
    Ok(core::mem::take(&mut ma.R))
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::curves::{curve_list, CurveId};
    use crate::group::PointFormat;
    use crate::opcount;
    use crate::random::test_rng::{FailingRng, LcgRng};
    use crate::restart::{budget_lock, set_max_ops};
    use num_bigint::Sign;
    use sha2::{Digest, Sha256};

    // Multiples i*P1 of a random point P1 on P-256 (i = 1 to 6).
    const EPU: [&str; 6] = [
        "04aa0eb989a07c30f9ec83c1f102762f752d77d8d72271e55bdba6216a976b1eaf7d04ebef40bf57f4af34d2eb591484fad267bb92288a6c8c883dd124a7f9b8d6",
        "04bb49e8a7677e4cbab75855b309f3336dadb8aafff9547a39c4b5868d2fe9d4d6537bb04610f80e0043a79f52e4f8b85c88745e72e0cde9704b1982fa92976bf6",
        "04c4c308933735331dbd22d84a026fea53a18642f627ef9eb0d6e2a68a2eb8b47c86b770a3de940a786fc9970e9b418a7e26eacd70523f17a12c6af4fd0047b52c",
        "047fac28e6b52ba82e831edc293d5973b9c65f43f64ab4f37c3858802a994f34e880e9490bfb97758437c6e282686c087ddb2123dc445615b00171614279c3640c",
        "04aa1a3326bfbb578d4b16bd94a18e885c6f536ee1f46a99af43f0912efd446b85784619a3efe1d0ccd8616af11447bfd77e36b5f78d531cc86b8d7b2b58e6268f",
        "041458de7a34094e6831592d48135fdcc58aa525bf1bf765ce405b53362f36dea42027dfc59c29d1db2d5b676f36c8c7dac1637669d1aad8466326fed20f626b9c",
    ];

    #[cfg(feature = "secp192r1")]
    #[test]
    fn double_g_restartable() {
        let _guard = budget_lock();
        let mut grp = Group::load(CurveId::Secp192r1).unwrap();

        // 2*G from the affine doubling formulas.
        let E = {
            let p = &grp.P;
            let (x, y) = (&grp.G.X, &grp.G.Y);
            let num = (BigInt::from(3u32) * x * x - BigInt::from(3u32)) % p;
            let den = (BigInt::from(2u32) * y) % p;
            let l = num * den.modpow(&(p - 2u32), p) % p;
            let x2 = ((&l * &l - BigInt::from(2u32) * x) % p + p) % p;
            let y2 = ((&l * (x - &x2) - y) % p + p) % p;
            Point::from_affine(x2, y2)
        };
        assert_eq!(
            hex::encode(E.to_bytes(&grp, PointFormat::Uncompressed).unwrap()),
            "04dafebf5828783f2ad35534631588a3f629a70fb16982a888dd6bda0d993da0fa46b27bbc141b868f59331afa5c7e93ab"
        );

        let m = BigInt::from(2u32);
        let G = grp.G.clone();
        let mut rng = LcgRng(192);

        set_max_ops(0);
        let R = mul(&mut grp, &m, &G, &mut rng).unwrap();
        assert!(R.equals(&E));

        // Same operation, with a budget small enough to interrupt every
        // step. Both the generator (with a kept table) and another point
        // (computing its table) are tried.
        let P3 = mul_vartime(&mut grp, &BigInt::from(3u32), &G).unwrap();
        let E6 = mul(&mut grp, &m, &P3, &mut rng).unwrap();
        for (P, expected) in [(G.clone(), E.clone()), (P3, E6)].iter() {
            set_max_ops(1);
            let mut rs = RestartContext::new();
            let mut yields = 0;
            let R = loop {
                match mul_restartable(&mut grp, &m, P, &mut rng, Some(&mut rs)) {
                    Ok(R) => break R,
                    Err(Error::InProgress) => {
                        assert!(rs.is_in_progress());
                        yields += 1;
                    }
                    Err(e) => panic!("unexpected error: {:?}", e),
                }
            };
            set_max_ops(0);
            assert!(yields >= 2);
            assert!(!rs.is_in_progress());
            assert!(R.equals(expected));
        }

        // Abandoning an operation in progress.
        set_max_ops(1);
        let mut rs = RestartContext::new();
        assert_eq!(mul_restartable(&mut grp, &m, &G, &mut rng, Some(&mut rs)).err(),
            Some(Error::InProgress));
        rs.free();
        set_max_ops(0);
        let R = mul_restartable(&mut grp, &m, &G, &mut rng, Some(&mut rs)).unwrap();
        assert!(R.equals(&E));
    }

    #[test]
    fn edge_scalars() {
        let mut rng = LcgRng(11);
        for c in curve_list() {
            let mut grp = Group::load(c.id).unwrap();
            let G = grp.G.clone();
            let N = grp.N.clone();
            match grp.curve_type() {
                CurveType::ShortWeierstrass => {
                    let R = mul(&mut grp, &BigInt::one(), &G, &mut rng).unwrap();
                    assert!(R.equals(&G));
                    let R = mul(&mut grp, &(&N - 1u32), &G, &mut rng).unwrap();
                    assert_eq!(R.X, G.X);
                    assert_eq!(R.Y, &grp.P - &G.Y);
                    assert!(R.Z.is_one());

                    assert!(mul_vartime(&mut grp, &BigInt::zero(), &G).unwrap().is_zero());
                    assert!(mul_vartime(&mut grp, &N, &G).unwrap().is_zero());
                    assert!(mul_vartime(&mut grp, &BigInt::one(), &G).unwrap().equals(&G));
                    let R = mul_vartime(&mut grp, &(&N + 1u32), &G).unwrap();
                    assert!(R.equals(&G));
                    let R = mul_vartime(&mut grp, &(&N - 1u32), &G).unwrap();
                    assert_eq!(R.Y, &grp.P - &G.Y);
                    let R = mul_vartime(&mut grp, &-BigInt::one(), &G).unwrap();
                    assert_eq!(R.Y, &grp.P - &G.Y);

                    // Secret scalars outside [1, N-1] are rejected.
                    assert_eq!(mul(&mut grp, &BigInt::zero(), &G, &mut rng).err(), Some(Error::InvalidKey));
                    assert_eq!(mul(&mut grp, &N, &G, &mut rng).err(), Some(Error::InvalidKey));

                    // Invalid points are rejected.
                    let mut B = G.clone();
                    B.Y += 1u32;
                    assert_eq!(mul(&mut grp, &BigInt::from(2u32), &B, &mut rng).err(), Some(Error::InvalidKey));
                    assert_eq!(mul_vartime(&mut grp, &BigInt::zero(), &B).err(), Some(Error::InvalidKey));

                    // 2*G + 3*G = 5*G
                    let R = muladd(&mut grp, &BigInt::from(2u32), &G, &BigInt::from(3u32), &G).unwrap();
                    let E = mul(&mut grp, &BigInt::from(5u32), &G, &mut rng).unwrap();
                    assert!(R.equals(&E));
                    // 1*G + (N-1)*G = 0
                    let R = muladd(&mut grp, &BigInt::one(), &G, &(&N - 1u32), &G).unwrap();
                    assert!(R.is_zero());
                }
                CurveType::Montgomery => {
                    assert_eq!(mul_vartime(&mut grp, &BigInt::one(), &G).err(), Some(Error::FeatureUnavailable));
                    assert_eq!(muladd(&mut grp, &BigInt::one(), &G, &BigInt::one(), &G).err(), Some(Error::FeatureUnavailable));
                    assert_eq!(mul(&mut grp, &BigInt::from(8u32), &G, &mut rng).err(), Some(Error::InvalidKey));
                }
                CurveType::None => unreachable!(),
            }
        }
    }

    #[cfg(feature = "secp256r1")]
    #[test]
    fn p256_muladd() {
        let mut grp = Group::load(CurveId::Secp256r1).unwrap();
        let mut rng = LcgRng(256);
        let P: Vec<Point> = EPU.iter()
            .map(|s| Point::read_binary(&grp, &hex::decode(s).unwrap()).unwrap())
            .collect();
        for i in 1..=6u32 {
            let R = mul(&mut grp, &BigInt::from(i), &P[0], &mut rng).unwrap();
            assert!(R.equals(&P[(i - 1) as usize]));
            let R = mul_vartime(&mut grp, &BigInt::from(i), &P[0]).unwrap();
            assert!(R.equals(&P[(i - 1) as usize]));
        }
        for i in 0..=3u32 {
            for j in 0..=3u32 {
                if i + j == 0 {
                    continue;
                }
                // i*P1 + j*P2 = (i + 2*j)*P1
                let R = muladd(&mut grp, &BigInt::from(i), &P[0], &BigInt::from(j), &P[1]).unwrap();
                let k = (i + 2 * j) as usize;
                if k <= 6 {
                    assert!(R.equals(&P[k - 1]));
                }
            }
        }
        // 3*P1 + (-1)*P1 = 2*P1
        let R = muladd(&mut grp, &BigInt::from(3u32), &P[0], &-BigInt::one(), &P[0]).unwrap();
        assert!(R.equals(&P[1]));
    }

    #[cfg(feature = "secp256r1")]
    #[test]
    fn muladd_restartable_resumes() {
        let _guard = budget_lock();
        let mut grp = Group::load(CurveId::Secp256r1).unwrap();
        let G = grp.G.clone();
        let P1 = Point::read_binary(&grp, &hex::decode(EPU[0]).unwrap()).unwrap();
        let m = BigInt::parse_bytes(b"7DC39B763DF3A5EA46AC87887B246E48D9DC3839C0D466E46DFE006C126C829B", 16).unwrap();
        let n = BigInt::from(0x12345u32);
        set_max_ops(0);
        let E = muladd(&mut grp, &m, &G, &n, &P1).unwrap();

        set_max_ops(200);
        let mut rs = RestartContext::new();
        let mut yields = 0;
        let R = loop {
            match muladd_restartable(&mut grp, &m, &G, &n, &P1, Some(&mut rs)) {
                Ok(R) => break R,
                Err(Error::InProgress) => yields += 1,
                Err(e) => panic!("unexpected error: {:?}", e),
            }
            // Each call makes bounded progress.
            assert!(rs.ops_done() <= 200 + 2 * 120 + 6 * 8);
        };
        set_max_ops(0);
        assert!(yields > 2);
        assert!(!rs.is_in_progress());
        assert!(R.equals(&E));
    }

    #[cfg(feature = "secp192r1")]
    #[test]
    fn resume_after_generator_table_kept() {
        let _guard = budget_lock();
        let m = BigInt::parse_bytes(b"5ea6f389a38b8bc81e767753b15aa5569e1782e30abe7d25", 16).unwrap();
        let mut rng = LcgRng(77);

        set_max_ops(0);
        let mut grp = Group::load(CurveId::Secp192r1).unwrap();
        let G = grp.G.clone();
        let E = mul_vartime(&mut grp, &m, &G).unwrap();

        // Interrupt a multiplication of G while its table is being
        // computed, then let another multiplication of G keep the
        // generator table in the group before resuming.
        let mut grp = Group::load(CurveId::Secp192r1).unwrap();
        set_max_ops(30);
        let mut rs = RestartContext::new();
        assert_eq!(mul_restartable(&mut grp, &m, &G, &mut rng, Some(&mut rs)).err(),
            Some(Error::InProgress));
        assert!(rs.is_in_progress());

        set_max_ops(0);
        let R7 = mul(&mut grp, &BigInt::from(7u32), &G, &mut rng).unwrap();
        assert!(R7.equals(&mul_vartime(&mut grp, &BigInt::from(7u32), &G).unwrap()));

        let R = mul_restartable(&mut grp, &m, &G, &mut rng, Some(&mut rs)).unwrap();
        assert!(!rs.is_in_progress());
        assert!(R.equals(&E));
    }

    #[cfg(feature = "secp192r1")]
    #[test]
    fn mul_error_on_resume_clears_state() {
        let _guard = budget_lock();
        let mut grp = Group::load(CurveId::Secp192r1).unwrap();
        let G = grp.G.clone();
        let m = BigInt::parse_bytes(b"5ea6f389a38b8bc81e767753b15aa5569e1782e30abe7d25", 16).unwrap();
        set_max_ops(0);
        let E = mul_vartime(&mut grp, &m, &G).unwrap();
        let P = mul_vartime(&mut grp, &BigInt::from(3u32), &G).unwrap();
        let E3 = mul_vartime(&mut grp, &(&m * 3u32), &G).unwrap();

        let mut rs = RestartContext::new();
        let mut rng = LcgRng(5);
        set_max_ops(30);
        assert_eq!(mul_restartable(&mut grp, &m, &P, &mut rng, Some(&mut rs)).err(),
            Some(Error::InProgress));
        assert!(rs.is_in_progress());

        // The blinding fails on resume; the saved state is released.
        set_max_ops(0);
        assert_eq!(mul_restartable(&mut grp, &m, &P, &mut FailingRng, Some(&mut rs)).err(),
            Some(Error::RandomFailed));
        assert!(!rs.is_in_progress());

        // The context can be used again, for another multiplication.
        set_max_ops(30);
        let R = loop {
            match mul_restartable(&mut grp, &m, &G, &mut rng, Some(&mut rs)) {
                Ok(R) => break R,
                Err(Error::InProgress) => assert!(rs.is_in_progress()),
                Err(e) => panic!("unexpected error: {:?}", e),
            }
        };
        assert!(!rs.is_in_progress());
        assert!(R.equals(&E));
        set_max_ops(0);
        let R = mul_restartable(&mut grp, &m, &P, &mut rng, Some(&mut rs)).unwrap();
        assert!(!rs.is_in_progress());
        assert!(R.equals(&E3));
    }

    #[cfg(feature = "secp256r1")]
    #[test]
    fn muladd_error_on_resume_clears_state() {
        let _guard = budget_lock();
        let mut grp = Group::load(CurveId::Secp256r1).unwrap();
        let G = grp.G.clone();
        let P1 = Point::read_binary(&grp, &hex::decode(EPU[0]).unwrap()).unwrap();
        let mut B = P1.clone();
        B.Y += 1u32;
        let m = BigInt::parse_bytes(b"7DC39B763DF3A5EA46AC87887B246E48D9DC3839C0D466E46DFE006C126C829B", 16).unwrap();
        let n = BigInt::from(0x12345u32);
        set_max_ops(0);
        let E = muladd(&mut grp, &m, &G, &n, &P1).unwrap();

        // m*G is computed over several calls, then the invalid second
        // point is rejected.
        set_max_ops(200);
        let mut rs = RestartContext::new();
        let mut yields = 0;
        let r = loop {
            match muladd_restartable(&mut grp, &m, &G, &n, &B, Some(&mut rs)) {
                Err(Error::InProgress) => {
                    assert!(rs.is_in_progress());
                    yields += 1;
                }
                r => break r,
            }
        };
        assert!(yields > 0);
        assert_eq!(r.err(), Some(Error::InvalidKey));
        assert!(!rs.is_in_progress());

        let R = loop {
            match muladd_restartable(&mut grp, &m, &G, &n, &P1, Some(&mut rs)) {
                Ok(R) => break R,
                Err(Error::InProgress) => {}
                Err(e) => panic!("unexpected error: {:?}", e),
            }
        };
        set_max_ops(0);
        assert!(!rs.is_in_progress());
        assert!(R.equals(&E));
    }

    #[test]
    fn mul_consistency() {
        // a*(b*G) = (a*b mod N)*G, with pseudo-random a and b.
        let mut sh = Sha256::new();
        let mut rng = LcgRng(99);
        for c in curve_list() {
            let mut grp = Group::load(c.id).unwrap();
            if grp.curve_type() != CurveType::ShortWeierstrass {
                continue;
            }
            let G = grp.G.clone();
            for t in 0..3u32 {
                sh.update(c.name.as_bytes());
                sh.update(t.to_le_bytes());
                let a = BigInt::from_bytes_be(Sign::Plus, &sh.finalize_reset()) % &grp.N;
                sh.update(t.to_be_bytes());
                let b = BigInt::from_bytes_be(Sign::Plus, &sh.finalize_reset()) % &grp.N;
                let bG = mul(&mut grp, &b, &G, &mut rng).unwrap();
                let abG = mul(&mut grp, &a, &bG, &mut rng).unwrap();
                let ab = (&a * &b) % &grp.N;
                let E = mul(&mut grp, &ab, &G, &mut rng).unwrap();
                assert!(abG.equals(&E));
                let V = mul_vartime(&mut grp, &(&a * &b), &G).unwrap();
                assert!(V.equals(&E));

                // a*G + b*G = (a + b)*G
                let R = muladd(&mut grp, &a, &G, &b, &G).unwrap();
                let E2 = mul_vartime(&mut grp, &(&a + &b), &G).unwrap();
                assert!(R.equals(&E2));
            }
        }
    }

    #[cfg(all(feature = "secp192r1", feature = "curve25519"))]
    #[test]
    fn constant_op_count() {
        let scalars = [
            "ff",
            "7f",
            "ffffffffffffffffffffffff99def836146bc9b1b4d22800",
            "5ea6f389a38b8bc81e767753b15aa5569e1782e30abe7d25",
            "400000000000000000000000000000000000000000000000",
            "7fffffffffffffffffffffffffffffffffffffffffffffff",
            "555555555555555555555555555555555555555555555555",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "ffffffffffffffffffffffff99def836146bc9b1b4d22830",
        ];
        let mut grp = Group::load(CurveId::Secp192r1).unwrap();
        let mut rng = LcgRng(5);
        let G = grp.G.clone();
        let G2 = mul(&mut grp, &BigInt::from(2u32), &G, &mut rng).unwrap();
        for P in [G, G2].iter() {
            let mut counts = Vec::new();
            for s in scalars.iter() {
                let m = BigInt::parse_bytes(s.as_bytes(), 16).unwrap();
                opcount::reset();
                mul(&mut grp, &m, P, &mut rng).unwrap();
                counts.push(opcount::get());
            }
            for c in counts.iter() {
                assert_eq!(*c, counts[0]);
            }
            assert!(counts[0].dbl > 0 && counts[0].add > 0);
        }

        let mut grp = Group::load(CurveId::Curve25519).unwrap();
        let G = grp.G.clone();
        let mut counts = Vec::new();
        for s in [
            "4000000000000000000000000000000000000000000000000000000000000000",
            "7ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff8",
            "5555555555555555555555555555555555555555555555555555555555555550",
            "6aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa8",
            "4b01b2b8b6d3e0a48ebd4b1d1a2a7e67a7cbc4c91e9a9e06a8f0c1efd31ad1a0",
            "4000000000000000000000000000000000000000000000000000000000000008",
        ].iter() {
            let m = BigInt::parse_bytes(s.as_bytes(), 16).unwrap();
            opcount::reset();
            mul(&mut grp, &m, &G, &mut rng).unwrap();
            counts.push(opcount::get());
        }
        for c in counts.iter() {
            assert_eq!(*c, counts[0]);
        }
    }
}
