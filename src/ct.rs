//! Constant-time conditional assignment and swap of big integers.
//!
//! Big integers do not have a fixed size, so the operations below work
//! over the union of both operands' limbs: both values are expanded to
//! the same number of 32-bit limbs, every limb of both operands is read
//! and written, and the choice only flows through `subtle` masking. The
//! number of limbs (i.e. the operand sizes) is not hidden; for field
//! elements, it is bounded by the size of the modulus anyway.

use num_bigint::{BigInt, BigUint, Sign};
use subtle::{Choice, ConditionallySelectable};

fn sign_code(s: Sign) -> i8 {
    match s {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

fn from_parts(code: i8, limbs: Vec<u32>) -> BigInt {
    let sign = if code < 0 {
        Sign::Minus
    } else if code > 0 {
        Sign::Plus
    } else {
        Sign::NoSign
    };
    BigInt::from_biguint(sign, BigUint::new(limbs))
}

fn expand(x: &BigInt, len: usize) -> (i8, Vec<u32>) {
    let (s, mut d) = x.to_u32_digits();
    d.resize(len, 0);
    (sign_code(s), d)
}

fn limb_count(a: &BigInt, b: &BigInt) -> usize {
    let la = ((a.bits() + 31) >> 5) as usize;
    let lb = ((b.bits() + 31) >> 5) as usize;
    core::cmp::max(la, lb)
}

/// Conditional assignment and swap with timing independent of the choice.
pub(crate) trait CtAssign {

    /// Set `self` to `src` if `choice` is true; otherwise leave `self`
    /// unchanged (but rewritten).
    fn ct_assign(&mut self, src: &Self, choice: Choice);

    /// Exchange `a` and `b` if `choice` is true.
    fn ct_swap(a: &mut Self, b: &mut Self, choice: Choice);
}

impl CtAssign for BigInt {

    fn ct_assign(&mut self, src: &BigInt, choice: Choice) {
        let n = limb_count(self, src);
        let (mut sa, mut da) = expand(self, n);
        let (sb, db) = expand(src, n);
        for i in 0..n {
            da[i].conditional_assign(&db[i], choice);
        }
        sa.conditional_assign(&sb, choice);
        *self = from_parts(sa, da);
    }

    fn ct_swap(a: &mut BigInt, b: &mut BigInt, choice: Choice) {
        let n = limb_count(a, b);
        let (mut sa, mut da) = expand(a, n);
        let (mut sb, mut db) = expand(b, n);
        for i in 0..n {
            u32::conditional_swap(&mut da[i], &mut db[i], choice);
        }
        i8::conditional_swap(&mut sa, &mut sb, choice);
        *a = from_parts(sa, da);
        *b = from_parts(sb, db);
    }
}

/// Convert a Boolean into a `Choice`.
#[inline(always)]
pub(crate) fn choice(b: bool) -> Choice {
    Choice::from(b as u8)
}

// ========================================================================
