//! Ecp is a Rust library for elliptic curve group arithmetic over a
//! set of named curves.
//!
//! Supported curves are the NIST/SEC short Weierstrass curves
//! secp192r1, secp224r1, secp256r1, secp384r1 and secp521r1, the Koblitz
//! curves secp192k1, secp224k1 and secp256k1, the Brainpool curves
//! brainpoolP256r1, brainpoolP384r1 and brainpoolP512r1, the Chinese
//! curve sm2p256v1, and the Montgomery curves Curve25519 and Curve448
//! (as used by X25519 and X448). Each curve is enabled by the cargo
//! feature of the same name; the `omnes` feature (default) enables all
//! of them. The `curves` module lists the curves that were compiled in.
//!
//! Values are plain big integers (`num_bigint::BigInt`); a `Group`
//! holds the domain parameters of a curve, and a `Point` holds
//! projective coordinates (Jacobian for short Weierstrass curves, X/Z
//! for Montgomery curves).
//!
//! # Usage
//!
//! ```ignore
//! use ecp::{CurveId, Group, Keypair, mul};
//!
//! let mut rng = rand::rngs::OsRng;
//! let alice = Keypair::generate(CurveId::Curve25519, &mut rng)?;
//! let bob = Keypair::generate(CurveId::Curve25519, &mut rng)?;
//! let mut grp = Group::load(CurveId::Curve25519)?;
//! let shared = mul(&mut grp, alice.d(), bob.q(), &mut rng)?;
//! ```
//!
//! Scalar multiplication (`mul`) validates its operands (the scalar must
//! be a valid private key, the point a valid public key). Linear
//! combinations `m*P + n*Q` (`muladd`) are available for short
//! Weierstrass curves. Key pairs, with generation, import and export,
//! are in `keys`; TLS ECPoint and ECParameters records are in `tls`.
//!
//! # Conventions
//!
//! Operations on secret scalars use the same sequence of group
//! operations for all scalars of a given curve, and perform table
//! lookups and conditional swaps with constant-time primitives from the
//! `subtle` crate. Projective coordinates are randomized with the
//! caller-provided RNG. The underlying big integer arithmetic, however,
//! is NOT constant-time; functions with "vartime" in their name, and
//! `muladd`, must only be used on public data.
//!
//! # Restartable operations
//!
//! On slow hardware, a scalar multiplication may take longer than a
//! caller (e.g. an event loop) can afford in one go. A global budget of
//! basic operations can be set with `set_max_ops()`; the `_restartable`
//! functions then return `Error::InProgress` when the budget is
//! exhausted, and should be called again with the same arguments and the
//! same `RestartContext` to continue. A budget of 0 (the default)
//! disables this mechanism.

pub use rand_core::{CryptoRng, CryptoRngCore, RngCore, Error as RngError};
pub use num_bigint::BigInt;

mod ct;
mod montgomery;
mod opcount;
mod random;
mod reduce;
mod weierstrass;

pub mod curves;
pub mod error;
pub mod group;
pub mod keys;
pub mod mul;
pub mod restart;
pub mod tls;

pub use curves::{CurveId, CurveInfo};
pub use error::{Error, Result};
pub use group::{CurveType, Group, Point, PointFormat};
pub use keys::{check_privkey, check_pub_priv, check_pubkey, gen_keypair, gen_keypair_base, gen_privkey, Keypair};
pub use mul::{mul, mul_restartable, mul_vartime, muladd, muladd_restartable};
pub use restart::{restart_is_enabled, set_max_ops, RestartContext};
pub use weierstrass::WINDOW_SIZE;
