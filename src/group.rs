//! Groups (curves loaded with their domain parameters) and points.
//!
//! A `Group` holds the parameters of one named curve as big integers:
//! field modulus `P`, equation constants, conventional generator `G`,
//! and its order `N`. For short Weierstrass curves, the `A` coefficient
//! is absent when it is equal to -3 (all NIST curves), which enables a
//! faster doubling formula. For Montgomery curves, `A` holds the ladder
//! constant (A + 2)/4 instead of A itself, and points have no Y
//! coordinate.
//!
//! A `Point` uses Jacobian coordinates (X:Y:Z) for short Weierstrass
//! curves (affine point is (X/Z^2, Y/Z^3)) and projective x-only
//! coordinates (X:Z) for Montgomery curves. Z = 0 is the point at
//! infinity; Z = 1 is an affine (normalized) point. Results returned by
//! the multiplication functions are always normalized; encoding a point
//! that is neither normalized nor the point at infinity is rejected.
//!
//! Encoding follows SEC 1 (sections 2.3.3 and 2.3.4) for short
//! Weierstrass curves: a single 0x00 byte for the point at infinity,
//! 0x04 followed by X and Y (uncompressed), or 0x02/0x03 followed by X
//! (compressed, the low bit of the first byte is the parity of Y).
//! Montgomery curves use the fixed-length little-endian encoding of X
//! from RFC 7748.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

use crate::curves::{domain_params, CurveId, CurveInfo, Shape};
use crate::error::{Error, Result};
use crate::reduce::{self, FastReduction};

/// Kind of curve equation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveType {
    /// Empty group.
    None,
    /// y^2 = x^3 + a*x + b
    ShortWeierstrass,
    /// B*y^2 = x^3 + A*x^2 + x (x-only arithmetic)
    Montgomery,
}

/// Point encoding format (short Weierstrass curves).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointFormat {
    Uncompressed,
    Compressed,
}

/// A curve point.
#[derive(Clone, Debug, Default)]
pub struct Point {
    pub(crate) X: BigInt,
    pub(crate) Y: BigInt,
    pub(crate) Z: BigInt,
}

impl Point {

    /// Create a new point with all coordinates set to zero. This is a
    /// representation of the point at infinity; use `zero()` for the
    /// canonical one.
    pub fn new() -> Self {
        Point::default()
    }

    /// The point at infinity, as (1:1:0).
    pub fn zero() -> Self {
        Point { X: BigInt::one(), Y: BigInt::one(), Z: BigInt::zero() }
    }

    /// Set this point to the point at infinity.
    pub fn set_zero(&mut self) {
        *self = Point::zero();
    }

    /// Tell whether this point is the point at infinity.
    pub fn is_zero(&self) -> bool {
        self.Z.is_zero()
    }

    /// Make an affine point from its coordinates. For Montgomery curves,
    /// `y` is ignored by all operations.
    pub fn from_affine(x: BigInt, y: BigInt) -> Self {
        Point { X: x, Y: y, Z: BigInt::one() }
    }

    /// Make an affine point from the textual representation of its
    /// coordinates in the provided radix (2 to 36).
    pub fn read_string(radix: u32, x: &str, y: &str) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::BadInputData);
        }
        let X = BigInt::parse_bytes(x.as_bytes(), radix).ok_or(Error::BadInputData)?;
        let Y = BigInt::parse_bytes(y.as_bytes(), radix).ok_or(Error::BadInputData)?;
        Ok(Point::from_affine(X, Y))
    }

    pub fn x(&self) -> &BigInt {
        &self.X
    }

    pub fn y(&self) -> &BigInt {
        &self.Y
    }

    pub fn z(&self) -> &BigInt {
        &self.Z
    }

    /// Exact comparison of the coordinates (X, Y and Z). Two
    /// representations of the same point with distinct Z are NOT equal;
    /// points should be normalized first.
    pub fn equals(&self, rhs: &Point) -> bool {
        self.X == rhs.X && self.Y == rhs.Y && self.Z == rhs.Z
    }

    /// Release the coordinates; the point is then all-zero.
    pub fn free(&mut self) {
        *self = Point::new();
    }

    /// Decode a point for the provided group.
    ///
    /// The decoded point is NOT validated (see `keys::check_pubkey()`),
    /// except for compressed points, whose Y coordinate is recomputed
    /// from the curve equation.
    pub fn read_binary(grp: &Group, buf: &[u8]) -> Result<Point> {
        let plen = grp.plen();
        match grp.kind {
            CurveType::Montgomery => {
                if buf.len() != plen {
                    return Err(Error::BadInputData);
                }
                let mut tmp = buf.to_vec();
                // RFC 7748: the top bit of the X25519 u coordinate is ignored.
                if grp.id == CurveId::Curve25519 {
                    tmp[plen - 1] &= 0x7F;
                }
                let X = BigInt::from_bytes_le(Sign::Plus, &tmp);
                Ok(Point { X, Y: BigInt::zero(), Z: BigInt::one() })
            }
            CurveType::ShortWeierstrass => {
                if buf.is_empty() {
                    return Err(Error::BadInputData);
                }
                match buf[0] {
                    0x00 => {
                        if buf.len() == 1 {
                            Ok(Point::zero())
                        } else {
                            Err(Error::BadInputData)
                        }
                    }
                    0x04 => {
                        if buf.len() != 2 * plen + 1 {
                            return Err(Error::BadInputData);
                        }
                        let X = BigInt::from_bytes_be(Sign::Plus, &buf[1..1 + plen]);
                        let Y = BigInt::from_bytes_be(Sign::Plus, &buf[1 + plen..]);
                        Ok(Point::from_affine(X, Y))
                    }
                    0x02 | 0x03 => {
                        if buf.len() != plen + 1 {
                            return Err(Error::BadInputData);
                        }
                        let X = BigInt::from_bytes_be(Sign::Plus, &buf[1..]);
                        if X >= grp.P {
                            return Err(Error::BadInputData);
                        }
                        let Y = derive_y(grp, &X, buf[0] & 1 != 0)?;
                        Ok(Point::from_affine(X, Y))
                    }
                    _ => Err(Error::BadInputData),
                }
            }
            CurveType::None => Err(Error::BadInputData),
        }
    }

    /// Encode this point into `buf`; the encoded length is returned.
    /// For Montgomery curves, `format` is ignored, and the neutral
    /// (Z = 0) is encoded as u = 0. Points which are not normalized
    /// (Z != 0 and Z != 1) are rejected with `BadInputData`.
    pub fn write_binary(&self, grp: &Group, format: PointFormat, buf: &mut [u8]) -> Result<usize> {
        let plen = grp.plen();
        match grp.kind {
            CurveType::Montgomery => {
                if buf.len() < plen {
                    return Err(Error::BufferTooSmall);
                }
                if self.is_zero() {
                    for b in buf[..plen].iter_mut() {
                        *b = 0;
                    }
                    return Ok(plen);
                }
                if !self.Z.is_one() {
                    return Err(Error::BadInputData);
                }
                write_le_fixed(&self.X, &mut buf[..plen])?;
                Ok(plen)
            }
            CurveType::ShortWeierstrass => {
                if self.is_zero() {
                    if buf.is_empty() {
                        return Err(Error::BufferTooSmall);
                    }
                    buf[0] = 0x00;
                    return Ok(1);
                }
                if !self.Z.is_one() {
                    return Err(Error::BadInputData);
                }
                match format {
                    PointFormat::Uncompressed => {
                        let olen = 2 * plen + 1;
                        if buf.len() < olen {
                            return Err(Error::BufferTooSmall);
                        }
                        buf[0] = 0x04;
                        write_be_fixed(&self.X, &mut buf[1..1 + plen])?;
                        write_be_fixed(&self.Y, &mut buf[1 + plen..olen])?;
                        Ok(olen)
                    }
                    PointFormat::Compressed => {
                        let olen = plen + 1;
                        if buf.len() < olen {
                            return Err(Error::BufferTooSmall);
                        }
                        buf[0] = 0x02 + (self.Y.bit(0) as u8);
                        write_be_fixed(&self.X, &mut buf[1..olen])?;
                        Ok(olen)
                    }
                }
            }
            CurveType::None => Err(Error::BadInputData),
        }
    }

    /// Encode this point into a new vector.
    pub fn to_bytes(&self, grp: &Group, format: PointFormat) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; 2 * grp.plen() + 1];
        let len = self.write_binary(grp, format, &mut buf)?;
        buf.truncate(len);
        Ok(buf)
    }
}

/// Recover Y from X (with X < P) and the requested parity.
fn derive_y(grp: &Group, X: &BigInt, odd: bool) -> Result<BigInt> {
    // y^2 = x^3 + a*x + b
    let XX = reduce::sqr_mod(grp, X)?;
    let mut rhs = match &grp.A {
        None => reduce::sub_mod(grp, &XX, &BigInt::from(3u32)),
        Some(A) => reduce::add_mod(grp, &XX, A),
    };
    rhs = reduce::mul_mod(grp, &rhs, X)?;
    rhs = reduce::add_mod(grp, &rhs, &grp.B);
    let mut Y = reduce::sqrt_mod(grp, &rhs).ok_or(Error::InvalidKey)?;
    if Y.bit(0) != odd {
        if Y.is_zero() {
            return Err(Error::InvalidKey);
        }
        Y = &grp.P - &Y;
    }
    Ok(Y)
}

/// Write non-negative `x` over exactly `out.len()` bytes (big-endian).
pub(crate) fn write_be_fixed(x: &BigInt, out: &mut [u8]) -> Result<()> {
    if x.is_negative() {
        return Err(Error::BadInputData);
    }
    for b in out.iter_mut() {
        *b = 0;
    }
    if x.is_zero() {
        return Ok(());
    }
    let (_, bytes) = x.to_bytes_be();
    if bytes.len() > out.len() {
        return Err(Error::BufferTooSmall);
    }
    let off = out.len() - bytes.len();
    out[off..].copy_from_slice(&bytes);
    Ok(())
}

/// Write non-negative `x` over exactly `out.len()` bytes (little-endian).
pub(crate) fn write_le_fixed(x: &BigInt, out: &mut [u8]) -> Result<()> {
    if x.is_negative() {
        return Err(Error::BadInputData);
    }
    for b in out.iter_mut() {
        *b = 0;
    }
    if x.is_zero() {
        return Ok(());
    }
    let (_, bytes) = x.to_bytes_le();
    if bytes.len() > out.len() {
        return Err(Error::BufferTooSmall);
    }
    out[..bytes.len()].copy_from_slice(&bytes);
    Ok(())
}

// ========================================================================

/// A named curve with its domain parameters.
#[derive(Clone, Debug)]
pub struct Group {
    pub(crate) id: CurveId,
    pub(crate) kind: CurveType,
    pub(crate) P: BigInt,
    pub(crate) A: Option<BigInt>,
    pub(crate) B: BigInt,
    pub(crate) G: Point,
    pub(crate) N: BigInt,
    pub(crate) pbits: usize,
    pub(crate) nbits: usize,
    pub(crate) modp: Option<FastReduction>,
    // Comb table for G, filled by the first multiplication of G.
    pub(crate) T: Vec<Point>,
}

impl Default for Group {
    fn default() -> Self {
        Group {
            id: CurveId::None,
            kind: CurveType::None,
            P: BigInt::zero(),
            A: None,
            B: BigInt::zero(),
            G: Point::new(),
            N: BigInt::zero(),
            pbits: 0,
            nbits: 0,
            modp: None,
            T: Vec::new(),
        }
    }
}

fn hex_mpi(s: &str) -> Result<BigInt> {
    BigInt::parse_bytes(s.as_bytes(), 16).ok_or(Error::BadInputData)
}

impl Group {

    /// Load the parameters of a named curve. If the curve was not
    /// enabled at compile time, `FeatureUnavailable` is returned.
    pub fn load(id: CurveId) -> Result<Group> {
        let dp = domain_params(id).ok_or(Error::FeatureUnavailable)?;
        let P = hex_mpi(dp.p)?;
        let N = hex_mpi(dp.n)?;
        let gx = hex_mpi(dp.gx)?;
        let pbits = P.bits() as usize;
        let modp = if dp.pseudo_mersenne {
            Some(FastReduction::new(&P))
        } else {
            None
        };
        let grp = match dp.shape {
            Shape::ShortWeierstrass { a, b, gy } => {
                let A = match a {
                    Some(a) => Some(hex_mpi(a)?),
                    None => None,
                };
                let nbits = N.bits() as usize;
                Group {
                    id,
                    kind: CurveType::ShortWeierstrass,
                    A,
                    B: hex_mpi(b)?,
                    G: Point::from_affine(gx, hex_mpi(gy)?),
                    P,
                    N,
                    pbits,
                    nbits,
                    modp,
                    T: Vec::new(),
                }
            }
            Shape::Montgomery { a24, nbits } => {
                Group {
                    id,
                    kind: CurveType::Montgomery,
                    A: Some(hex_mpi(a24)?),
                    B: BigInt::zero(),
                    G: Point::from_affine(gx, BigInt::zero()),
                    P,
                    N,
                    pbits,
                    nbits,
                    modp,
                    T: Vec::new(),
                }
            }
        };
        log::debug!("loaded curve {:?} ({} bits)", id, pbits);
        Ok(grp)
    }

    /// Release all parameters and the cached table. The group is then
    /// empty; calling this function again has no effect.
    pub fn free(&mut self) {
        *self = Group::default();
    }

    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Registry entry for this group's curve (`None` for an empty group).
    pub fn curve_info(&self) -> Option<&'static CurveInfo> {
        CurveInfo::from_grp_id(self.id)
    }

    pub fn curve_type(&self) -> CurveType {
        self.kind
    }

    /// Field modulus.
    pub fn p(&self) -> &BigInt {
        &self.P
    }

    /// Equation coefficient A; `None` for short Weierstrass curves with
    /// A = -3. For Montgomery curves this is (A + 2)/4.
    pub fn a(&self) -> Option<&BigInt> {
        self.A.as_ref()
    }

    pub fn b(&self) -> &BigInt {
        &self.B
    }

    /// Conventional generator.
    pub fn g(&self) -> &Point {
        &self.G
    }

    /// Order of the generator.
    pub fn n(&self) -> &BigInt {
        &self.N
    }

    /// Size of the field modulus, in bits.
    pub fn pbits(&self) -> usize {
        self.pbits
    }

    /// Size of private keys, in bits. For Montgomery curves this is the
    /// index of the bit which is always set in private keys.
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// Size of the field modulus, in bytes.
    pub fn plen(&self) -> usize {
        (self.pbits + 7) >> 3
    }
}

// ========================================================================
