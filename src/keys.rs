//! Key validation, key generation, and key pairs.
//!
//! Public keys are points, private keys are scalars. For short
//! Weierstrass curves, a private key is an integer in [1, N-1], and a
//! public key an affine point on the curve (SEC 1, section 3.2). For
//! Montgomery curves, a private key has a fixed top bit and cleared low
//! bits (RFC 7748, section 5), and a public key is an x coordinate in
//! range, not equal to one of the few low-order points.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};
use rand_core::CryptoRngCore;

use crate::curves::CurveId;
use crate::error::{Error, Result};
use crate::group::{write_be_fixed, write_le_fixed, CurveType, Group, Point};
use crate::mul::mul;
use crate::random::{fill_random, random_range};
use crate::reduce::{add_mod, mul_mod, sqr_mod, sub_mod};

const CURVE25519_KEY_SIZE: usize = 32;
const CURVE448_KEY_SIZE: usize = 56;

// Curve25519 points of order 8 (other than 0, 1 and -1), little-endian.
// See: https://cr.yp.to/ecdh.html#validate
const X25519_BAD_POINT_1: [u8; 32] = [
    0xe0, 0xeb, 0x7a, 0x7c, 0x3b, 0x41, 0xb8, 0xae,
    0x16, 0x56, 0xe3, 0xfa, 0xf1, 0x9f, 0xc4, 0x6a,
    0xda, 0x09, 0x8d, 0xeb, 0x9c, 0x32, 0xb1, 0xfd,
    0x86, 0x62, 0x05, 0x16, 0x5f, 0x49, 0xb8, 0x00,
];
const X25519_BAD_POINT_2: [u8; 32] = [
    0x5f, 0x9c, 0x95, 0xbc, 0xa3, 0x50, 0x8c, 0x24,
    0xb1, 0xd0, 0xb1, 0x55, 0x9c, 0x83, 0xef, 0x5b,
    0x04, 0x44, 0x5c, 0xc4, 0x58, 0x1c, 0x8e, 0x86,
    0xd8, 0x22, 0x4e, 0xdd, 0xd0, 0x9f, 0x11, 0x57,
];

fn check_pubkey_sw(grp: &Group, pt: &Point) -> Result<()> {
    if pt.X.is_negative() || pt.Y.is_negative() || pt.X >= grp.P || pt.Y >= grp.P {
        return Err(Error::InvalidKey);
    }

    // Y^2 = X*(X^2 + A) + B
    let YY = sqr_mod(grp, &pt.Y)?;
    let XX = sqr_mod(grp, &pt.X)?;
    let RHS = match &grp.A {
        None => sub_mod(grp, &XX, &BigInt::from(3u32)),
        Some(A) => add_mod(grp, &XX, A),
    };
    let RHS = mul_mod(grp, &RHS, &pt.X)?;
    let RHS = add_mod(grp, &RHS, &grp.B);
    if YY != RHS {
        return Err(Error::InvalidKey);
    }
    Ok(())
}

fn check_bad_points_mx(grp: &Group, X: &BigInt) -> Result<()> {
    let mut XmP = X.clone();
    while XmP >= grp.P {
        XmP -= &grp.P;
    }
    if XmP <= BigInt::one() {
        return Err(Error::InvalidKey);
    }
    if grp.id == CurveId::Curve25519 {
        for bad in [&X25519_BAD_POINT_1, &X25519_BAD_POINT_2].iter() {
            if XmP == BigInt::from_bytes_le(Sign::Plus, &bad[..]) {
                return Err(Error::InvalidKey);
            }
        }
    }
    if XmP + 1u32 == grp.P {
        return Err(Error::InvalidKey);
    }
    Ok(())
}

fn check_pubkey_mx(grp: &Group, pt: &Point) -> Result<()> {
    // Values up to the encoding size are accepted, and reduced.
    if ((pt.X.bits() + 7) >> 3) as usize > (grp.nbits + 7) / 8 {
        return Err(Error::InvalidKey);
    }
    if pt.X.is_negative() {
        return Err(Error::InvalidKey);
    }
    check_bad_points_mx(grp, &pt.X)
}

/// Check that a point is a valid public key for the group. The point
/// must be affine (Z = 1).
pub fn check_pubkey(grp: &Group, pt: &Point) -> Result<()> {
    if !pt.Z.is_one() {
        return Err(Error::InvalidKey);
    }
    match grp.kind {
        CurveType::Montgomery => check_pubkey_mx(grp, pt),
        CurveType::ShortWeierstrass => check_pubkey_sw(grp, pt),
        CurveType::None => Err(Error::BadInputData),
    }
}

/// Check that an integer is a valid private key for the group.
pub fn check_privkey(grp: &Group, d: &BigInt) -> Result<()> {
    match grp.kind {
        CurveType::Montgomery => {
            if d.is_negative() || d.bit(0) || d.bit(1)
                || d.bits() != (grp.nbits as u64) + 1
            {
                return Err(Error::InvalidKey);
            }
            // Curve25519 keys are also multiples of 8.
            if grp.nbits == 254 && d.bit(2) {
                return Err(Error::InvalidKey);
            }
            Ok(())
        }
        CurveType::ShortWeierstrass => {
            if d.is_negative() || d.is_zero() || *d >= grp.N {
                return Err(Error::InvalidKey);
            }
            Ok(())
        }
        CurveType::None => Err(Error::BadInputData),
    }
}

/// Generate a private key.
pub fn gen_privkey(grp: &Group, rng: &mut dyn CryptoRngCore) -> Result<BigInt> {
    match grp.kind {
        CurveType::Montgomery => {
            // Random (nbits + 1)-bit value, with the top bit set and the
            // low bits cleared.
            let high_bit = grp.nbits;
            let n_bytes = high_bit / 8 + 1;
            let mut d = fill_random(rng, n_bytes)?;
            d >>= 8 * n_bytes - high_bit - 1;
            d.set_bit(high_bit as u64, true);
            d.set_bit(0, false);
            d.set_bit(1, false);
            if high_bit == 254 {
                d.set_bit(2, false);
            }
            Ok(d)
        }
        CurveType::ShortWeierstrass => random_range(1, &grp.N, rng),
        CurveType::None => Err(Error::BadInputData),
    }
}

/// Generate a key pair with the provided base point.
pub fn gen_keypair_base(grp: &mut Group, G: &Point, rng: &mut dyn CryptoRngCore)
    -> Result<(BigInt, Point)>
{
    let d = gen_privkey(grp, rng)?;
    let Q = mul(grp, &d, G, rng)?;
    Ok((d, Q))
}

/// Generate a key pair with the conventional generator.
pub fn gen_keypair(grp: &mut Group, rng: &mut dyn CryptoRngCore) -> Result<(BigInt, Point)> {
    let G = grp.G.clone();
    gen_keypair_base(grp, &G, rng)
}

// ========================================================================

/// A key pair: group, private scalar `d`, and public point `Q`.
///
/// A key pair may hold only a public key (e.g. the peer's key), or only
/// a private key (freshly imported). `Debug` is not implemented.
#[derive(Clone, Default)]
pub struct Keypair {
    grp: Group,
    d: BigInt,
    Q: Point,
}

impl Keypair {

    /// Create an empty key pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new key pair on the named curve.
    pub fn generate(id: CurveId, rng: &mut dyn CryptoRngCore) -> Result<Self> {
        let mut grp = Group::load(id)?;
        let (d, Q) = gen_keypair(&mut grp, rng)?;
        Ok(Keypair { grp, d, Q })
    }

    /// Make a key pair with only a public key; the point is validated.
    pub fn from_public(grp: Group, Q: Point) -> Result<Self> {
        check_pubkey(&grp, &Q)?;
        Ok(Keypair { grp, d: BigInt::zero(), Q })
    }

    /// Import a private key. The public key is not computed (see
    /// `calc_public()`).
    ///
    /// For Curve25519 and Curve448, the key is little-endian and has the
    /// exact length of the curve, and is masked as RFC 7748 specifies.
    /// For short Weierstrass curves, the key is big-endian and must be
    /// in range.
    pub fn read_key(id: CurveId, buf: &[u8]) -> Result<Self> {
        let grp = Group::load(id)?;
        let d = match grp.kind {
            CurveType::Montgomery => {
                match id {
                    CurveId::Curve25519 => {
                        if buf.len() != CURVE25519_KEY_SIZE {
                            return Err(Error::InvalidKey);
                        }
                        let mut d = BigInt::from_bytes_le(Sign::Plus, buf);
                        d.set_bit(0, false);
                        d.set_bit(1, false);
                        d.set_bit(2, false);
                        d.set_bit((CURVE25519_KEY_SIZE * 8 - 1) as u64, false);
                        d.set_bit((CURVE25519_KEY_SIZE * 8 - 2) as u64, true);
                        d
                    }
                    CurveId::Curve448 => {
                        if buf.len() != CURVE448_KEY_SIZE {
                            return Err(Error::InvalidKey);
                        }
                        let mut d = BigInt::from_bytes_le(Sign::Plus, buf);
                        d.set_bit(0, false);
                        d.set_bit(1, false);
                        d.set_bit((CURVE448_KEY_SIZE * 8 - 1) as u64, true);
                        d
                    }
                    _ => return Err(Error::FeatureUnavailable),
                }
            }
            CurveType::ShortWeierstrass => {
                let d = BigInt::from_bytes_be(Sign::Plus, buf);
                check_privkey(&grp, &d)?;
                d
            }
            CurveType::None => return Err(Error::FeatureUnavailable),
        };
        Ok(Keypair { grp, d, Q: Point::new() })
    }

    /// Export the private key into `buf`; the number of written bytes is
    /// returned. The encoding is the one expected by `read_key()`.
    pub fn write_key(&self, buf: &mut [u8]) -> Result<usize> {
        let len = match self.grp.kind {
            CurveType::Montgomery => {
                let len = match self.grp.id {
                    CurveId::Curve25519 => CURVE25519_KEY_SIZE,
                    CurveId::Curve448 => CURVE448_KEY_SIZE,
                    _ => return Err(Error::FeatureUnavailable),
                };
                if buf.len() < len {
                    return Err(Error::BufferTooSmall);
                }
                write_le_fixed(&self.d, &mut buf[..len])?;
                len
            }
            CurveType::ShortWeierstrass => {
                let len = (self.grp.nbits + 7) >> 3;
                if buf.len() < len {
                    return Err(Error::BufferTooSmall);
                }
                write_be_fixed(&self.d, &mut buf[..len])?;
                len
            }
            CurveType::None => return Err(Error::FeatureUnavailable),
        };
        Ok(len)
    }

    /// Compute the public key from the private key.
    pub fn calc_public(&mut self, rng: &mut dyn CryptoRngCore) -> Result<()> {
        let G = self.grp.G.clone();
        self.Q = mul(&mut self.grp, &self.d, &G, rng)?;
        Ok(())
    }

    /// Set the public key (after validation). The private key is not
    /// modified; see `check_pub_priv()` to verify consistency.
    pub fn set_public(&mut self, Q: Point) -> Result<()> {
        check_pubkey(&self.grp, &Q)?;
        self.Q = Q;
        Ok(())
    }

    pub fn group(&self) -> &Group {
        &self.grp
    }

    pub fn group_mut(&mut self) -> &mut Group {
        &mut self.grp
    }

    /// Private scalar (zero if not set).
    pub fn d(&self) -> &BigInt {
        &self.d
    }

    /// Public point.
    pub fn q(&self) -> &Point {
        &self.Q
    }

    /// Release all values; the key pair is then empty.
    pub fn free(&mut self) {
        *self = Self::default();
    }
}

/// Check that the public key in `pub_key` matches the private key in
/// `prv`: both must use the same group and hold the same public point,
/// and that point must be equal to d*G (recomputed). Any mismatch is
/// reported as `BadInputData`.
pub fn check_pub_priv(pub_key: &Keypair, prv: &Keypair, rng: &mut dyn CryptoRngCore) -> Result<()> {
    if pub_key.grp.id == CurveId::None
        || pub_key.grp.id != prv.grp.id
        || !pub_key.Q.equals(&prv.Q)
    {
        return Err(Error::BadInputData);
    }

    // The cached table, if any, is not needed.
    let mut grp = prv.grp.clone();
    let G = grp.G.clone();
    let Q = mul(&mut grp, &prv.d, &G, rng)?;
    if !Q.equals(&prv.Q) {
        return Err(Error::BadInputData);
    }
    Ok(())
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::curves::curve_list;
    use crate::group::PointFormat;
    use crate::random::test_rng::{FailingRng, LcgRng};

    #[cfg(feature = "secp192r1")]
    #[test]
    fn pubkey_sw() {
        let grp = Group::load(CurveId::Secp192r1).unwrap();
        let G = grp.G.clone();
        check_pubkey(&grp, &G).unwrap();

        let mut P = G.clone();
        P.Z = BigInt::from(2u32);
        assert_eq!(check_pubkey(&grp, &P), Err(Error::InvalidKey));
        assert_eq!(check_pubkey(&grp, &Point::zero()), Err(Error::InvalidKey));

        let mut P = G.clone();
        P.X += &grp.P;
        assert_eq!(check_pubkey(&grp, &P), Err(Error::InvalidKey));
        let mut P = G.clone();
        P.Y += &grp.P;
        assert_eq!(check_pubkey(&grp, &P), Err(Error::InvalidKey));
        let mut P = G.clone();
        P.X = -P.X;
        assert_eq!(check_pubkey(&grp, &P), Err(Error::InvalidKey));
        let mut P = G.clone();
        P.X += 1u32;
        assert_eq!(check_pubkey(&grp, &P), Err(Error::InvalidKey));

        // -G is valid.
        let mut P = G.clone();
        P.Y = &grp.P - &P.Y;
        check_pubkey(&grp, &P).unwrap();

        assert_eq!(check_pubkey(&Group::default(), &G), Err(Error::BadInputData));
    }

    #[cfg(feature = "curve25519")]
    #[test]
    fn pubkey_mx() {
        let grp = Group::load(CurveId::Curve25519).unwrap();
        let p = grp.P.clone();
        let ok = |x: BigInt| check_pubkey(&grp, &Point::from_affine(x, BigInt::zero()));

        ok(BigInt::from(9u32)).unwrap();
        ok(BigInt::from(2u32)).unwrap();
        // Values up to 2^256 - 1 are accepted and reduced.
        ok(&p + 9u32).unwrap();
        ok((BigInt::one() << 256) - 1u32).unwrap();

        for x in [
            BigInt::zero(),
            BigInt::one(),
            &p - 1u32,
            p.clone(),
            &p + 1u32,
            &p + &p - 1u32,
            BigInt::from_bytes_le(Sign::Plus, &X25519_BAD_POINT_1),
            BigInt::from_bytes_le(Sign::Plus, &X25519_BAD_POINT_2),
            BigInt::from_bytes_le(Sign::Plus, &X25519_BAD_POINT_2) + &p,
            BigInt::one() << 256,
            -BigInt::from(9u32),
        ].iter() {
            assert_eq!(ok(x.clone()), Err(Error::InvalidKey));
        }

        let mut P = Point::from_affine(BigInt::from(9u32), BigInt::zero());
        P.Z = BigInt::zero();
        assert_eq!(check_pubkey(&grp, &P), Err(Error::InvalidKey));
    }

    #[test]
    fn privkeys() {
        for c in curve_list() {
            let grp = Group::load(c.id).unwrap();
            let N = grp.N.clone();
            match grp.curve_type() {
                CurveType::ShortWeierstrass => {
                    check_privkey(&grp, &BigInt::one()).unwrap();
                    check_privkey(&grp, &(&N - 1u32)).unwrap();
                    for d in [BigInt::zero(), N.clone(), &N + 1u32, -BigInt::one()].iter() {
                        assert_eq!(check_privkey(&grp, d), Err(Error::InvalidKey));
                    }
                }
                CurveType::Montgomery => {
                    let nbits = grp.nbits as u64;
                    let mut d = BigInt::zero();
                    d.set_bit(nbits, true);
                    check_privkey(&grp, &d).unwrap();
                    d.set_bit(3, true);
                    check_privkey(&grp, &d).unwrap();

                    let mut e = d.clone();
                    e.set_bit(0, true);
                    assert_eq!(check_privkey(&grp, &e), Err(Error::InvalidKey));
                    let mut e = d.clone();
                    e.set_bit(1, true);
                    assert_eq!(check_privkey(&grp, &e), Err(Error::InvalidKey));
                    let mut e = d.clone();
                    e.set_bit(2, true);
                    if nbits == 254 {
                        assert_eq!(check_privkey(&grp, &e), Err(Error::InvalidKey));
                    } else {
                        check_privkey(&grp, &e).unwrap();
                    }
                    let mut e = d.clone();
                    e.set_bit(nbits + 1, true);
                    assert_eq!(check_privkey(&grp, &e), Err(Error::InvalidKey));
                    let mut e = d.clone();
                    e.set_bit(nbits, false);
                    assert_eq!(check_privkey(&grp, &e), Err(Error::InvalidKey));
                }
                CurveType::None => unreachable!(),
            }
        }
        assert_eq!(check_privkey(&Group::default(), &BigInt::one()), Err(Error::BadInputData));
    }

    #[test]
    fn generation() {
        let mut rng = LcgRng(1234);
        for c in curve_list() {
            let mut grp = Group::load(c.id).unwrap();
            for _ in 0..5 {
                let d = gen_privkey(&grp, &mut rng).unwrap();
                check_privkey(&grp, &d).unwrap();
            }
            assert_eq!(gen_privkey(&grp, &mut FailingRng).err(), Some(Error::RandomFailed));

            let (d, Q) = gen_keypair(&mut grp, &mut rng).unwrap();
            check_privkey(&grp, &d).unwrap();
            check_pubkey(&grp, &Q).unwrap();

            let kp = Keypair::generate(c.id, &mut rng).unwrap();
            assert_eq!(kp.group().id(), c.id);
            check_pub_priv(&kp, &kp, &mut rng).unwrap();

            // Corrupt one byte of the public key.
            let enc = kp.q().to_bytes(kp.group(), PointFormat::Uncompressed).unwrap();
            let mut bad = enc.clone();
            bad[3] ^= 0x01;
            let Qb = Point::read_binary(kp.group(), &bad).unwrap();
            let mut kb = kp.clone();
            kb.Q = Qb;
            assert_eq!(check_pub_priv(&kb, &kp, &mut rng), Err(Error::BadInputData));
            assert_eq!(check_pub_priv(&kb, &kb, &mut rng), Err(Error::BadInputData));

            // Distinct groups.
            assert_eq!(check_pub_priv(&Keypair::new(), &Keypair::new(), &mut rng),
                Err(Error::BadInputData));
        }
    }

    #[test]
    fn import_export() {
        let mut rng = LcgRng(77);
        for c in curve_list() {
            let kp = Keypair::generate(c.id, &mut rng).unwrap();
            let mut buf = [0u8; 80];
            let len = kp.write_key(&mut buf).unwrap();
            let mut kq = Keypair::read_key(c.id, &buf[..len]).unwrap();
            assert_eq!(kq.d(), kp.d());
            assert!(kq.q().is_zero());
            kq.calc_public(&mut rng).unwrap();
            assert!(kq.q().equals(kp.q()));
            check_pub_priv(&kp, &kq, &mut rng).unwrap();
            assert_eq!(kp.write_key(&mut buf[..len - 1]), Err(Error::BufferTooSmall));

            let pk = Keypair::from_public(kp.group().clone(), kp.q().clone()).unwrap();
            check_pub_priv(&pk, &kp, &mut rng).unwrap();
            let mut kq2 = kq.clone();
            kq2.set_public(pk.q().clone()).unwrap();
            kq2.free();
            assert_eq!(kq2.group().id(), CurveId::None);
        }
    }

    #[cfg(feature = "secp192r1")]
    #[test]
    fn read_key_sw() {
        let grp = Group::load(CurveId::Secp192r1).unwrap();
        let mut n = [0u8; 24];
        write_be_fixed(&grp.N, &mut n).unwrap();
        assert_eq!(Keypair::read_key(CurveId::Secp192r1, &n).err(), Some(Error::InvalidKey));
        assert_eq!(Keypair::read_key(CurveId::Secp192r1, &[0u8; 24]).err(), Some(Error::InvalidKey));
        let kp = Keypair::read_key(CurveId::Secp192r1, &[0x01]).unwrap();
        assert!(kp.d().is_one());
        let mut buf = [0xFFu8; 24];
        assert_eq!(kp.write_key(&mut buf), Ok(24));
        assert_eq!(buf[23], 0x01);
        assert!(buf[..23].iter().all(|&b| b == 0));
    }

    #[cfg(feature = "curve25519")]
    #[test]
    fn x25519_keys() {
        // RFC 7748, section 6.1.
        let a = hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a").unwrap();
        let b = hex::decode("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb").unwrap();
        let mut rng = LcgRng(7748);

        let mut ka = Keypair::read_key(CurveId::Curve25519, &a).unwrap();
        ka.calc_public(&mut rng).unwrap();
        assert_eq!(hex::encode(ka.q().to_bytes(ka.group(), PointFormat::Compressed).unwrap()),
            "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a");
        let mut kb = Keypair::read_key(CurveId::Curve25519, &b).unwrap();
        kb.calc_public(&mut rng).unwrap();
        assert_eq!(hex::encode(kb.q().to_bytes(kb.group(), PointFormat::Compressed).unwrap()),
            "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f");

        // Shared secret, both ways.
        let (da, qa) = (ka.d().clone(), ka.q().clone());
        let (db, qb) = (kb.d().clone(), kb.q().clone());
        let sa = mul(ka.group_mut(), &da, &qb, &mut rng).unwrap();
        let sb = mul(kb.group_mut(), &db, &qa, &mut rng).unwrap();
        assert!(sa.equals(&sb));
        assert_eq!(hex::encode(sa.to_bytes(ka.group(), PointFormat::Compressed).unwrap()),
            "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");

        // Masking on import.
        let kf = Keypair::read_key(CurveId::Curve25519, &[0xFFu8; 32]).unwrap();
        let mut buf = [0u8; 32];
        assert_eq!(kf.write_key(&mut buf), Ok(32));
        assert_eq!(buf[0], 0xF8);
        assert_eq!(buf[31], 0x7F);
        let kz = Keypair::read_key(CurveId::Curve25519, &[0u8; 32]).unwrap();
        kz.write_key(&mut buf).unwrap();
        assert_eq!(buf[31], 0x40);
        assert!(buf[..31].iter().all(|&x| x == 0));

        assert_eq!(Keypair::read_key(CurveId::Curve25519, &[0u8; 31]).err(), Some(Error::InvalidKey));
        assert_eq!(Keypair::read_key(CurveId::Curve25519, &[0u8; 33]).err(), Some(Error::InvalidKey));
    }

    #[cfg(feature = "curve448")]
    #[test]
    fn x448_keys() {
        let kf = Keypair::read_key(CurveId::Curve448, &[0xFFu8; 56]).unwrap();
        let mut buf = [0u8; 60];
        assert_eq!(kf.write_key(&mut buf), Ok(56));
        assert_eq!(buf[0], 0xFC);
        assert_eq!(buf[55], 0xFF);
        let kz = Keypair::read_key(CurveId::Curve448, &[0u8; 56]).unwrap();
        kz.write_key(&mut buf).unwrap();
        assert_eq!(buf[55], 0x80);
        assert_eq!(Keypair::read_key(CurveId::Curve448, &[0u8; 32]).err(), Some(Error::InvalidKey));
        assert_eq!(kz.write_key(&mut buf[..55]), Err(Error::BufferTooSmall));

        // Diffie-Hellman.
        let mut rng = LcgRng(448);
        let mut ka = Keypair::generate(CurveId::Curve448, &mut rng).unwrap();
        let mut kb = Keypair::generate(CurveId::Curve448, &mut rng).unwrap();
        let (da, qa) = (ka.d().clone(), ka.q().clone());
        let (db, qb) = (kb.d().clone(), kb.q().clone());
        let sa = mul(ka.group_mut(), &da, &qb, &mut rng).unwrap();
        let sb = mul(kb.group_mut(), &db, &qa, &mut rng).unwrap();
        assert!(sa.equals(&sb));
    }
}
