//! Registry of the supported named curves.
//!
//! The registry is a static, read-only table: each entry gives the
//! internal identifier of a curve, its TLS `NamedCurve` identifier, its
//! size in bits, and its conventional name. The table is ordered by
//! decreasing size; for curves of the same size, the curve with the
//! faster and older implementation comes first. Montgomery curves are
//! listed last. Only curves enabled at compile time (through the cargo
//! feature of the same name) appear in the table.
//!
//! Domain parameters (modulus, equation coefficients, generator, order)
//! are kept here as hexadecimal strings (big-endian), and parsed into
//! big integers when a `Group` is loaded.

/// Internal identifier of a named curve.
///
/// All identifiers are always defined, whether the corresponding curve
/// is compiled in or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    /// No curve (empty or freed group).
    None,
    Secp192r1,
    Secp224r1,
    Secp256r1,
    Secp384r1,
    Secp521r1,
    Bp256r1,
    Bp384r1,
    Bp512r1,
    Curve25519,
    Secp192k1,
    Secp224k1,
    Secp256k1,
    Curve448,
    Sm2p256v1,
}

/// Descriptor of a supported curve.
#[derive(Clone, Copy, Debug)]
pub struct CurveInfo {
    /// Internal identifier.
    pub id: CurveId,
    /// TLS `NamedCurve` identifier (RFC 8422, RFC 7027, RFC 8998).
    pub tls_id: u16,
    /// Curve size, in bits.
    pub bit_size: u16,
    /// Conventional name.
    pub name: &'static str,
}

static CURVES: &[CurveInfo] = &[
    #[cfg(feature = "secp521r1")]
    CurveInfo { id: CurveId::Secp521r1, tls_id: 25, bit_size: 521, name: "secp521r1" },
    #[cfg(feature = "bp512r1")]
    CurveInfo { id: CurveId::Bp512r1, tls_id: 28, bit_size: 512, name: "brainpoolP512r1" },
    #[cfg(feature = "secp384r1")]
    CurveInfo { id: CurveId::Secp384r1, tls_id: 24, bit_size: 384, name: "secp384r1" },
    #[cfg(feature = "bp384r1")]
    CurveInfo { id: CurveId::Bp384r1, tls_id: 27, bit_size: 384, name: "brainpoolP384r1" },
    #[cfg(feature = "secp256r1")]
    CurveInfo { id: CurveId::Secp256r1, tls_id: 23, bit_size: 256, name: "secp256r1" },
    #[cfg(feature = "secp256k1")]
    CurveInfo { id: CurveId::Secp256k1, tls_id: 22, bit_size: 256, name: "secp256k1" },
    #[cfg(feature = "bp256r1")]
    CurveInfo { id: CurveId::Bp256r1, tls_id: 26, bit_size: 256, name: "brainpoolP256r1" },
    #[cfg(feature = "sm2p256v1")]
    CurveInfo { id: CurveId::Sm2p256v1, tls_id: 41, bit_size: 256, name: "sm2p256v1" },
    #[cfg(feature = "secp224r1")]
    CurveInfo { id: CurveId::Secp224r1, tls_id: 21, bit_size: 224, name: "secp224r1" },
    #[cfg(feature = "secp224k1")]
    CurveInfo { id: CurveId::Secp224k1, tls_id: 20, bit_size: 224, name: "secp224k1" },
    #[cfg(feature = "secp192r1")]
    CurveInfo { id: CurveId::Secp192r1, tls_id: 19, bit_size: 192, name: "secp192r1" },
    #[cfg(feature = "secp192k1")]
    CurveInfo { id: CurveId::Secp192k1, tls_id: 18, bit_size: 192, name: "secp192k1" },
    #[cfg(feature = "curve25519")]
    CurveInfo { id: CurveId::Curve25519, tls_id: 29, bit_size: 256, name: "x25519" },
    #[cfg(feature = "curve448")]
    CurveInfo { id: CurveId::Curve448, tls_id: 30, bit_size: 448, name: "x448" },
];

/// Get the list of supported curves.
///
/// Short Weierstrass curves come first, largest first. Curve25519 and
/// Curve448 follow all of them, whatever their size.
pub fn curve_list() -> &'static [CurveInfo] {
    CURVES
}

/// Get the identifiers of the supported curves, in registry order.
///
/// The returned iterator is cheap to recreate; each call restarts from
/// the first curve.
pub fn grp_id_list() -> impl Iterator<Item = CurveId> + Clone {
    CURVES.iter().map(|c| c.id)
}

impl CurveInfo {

    /// Find a curve by internal identifier.
    pub fn from_grp_id(id: CurveId) -> Option<&'static CurveInfo> {
        CURVES.iter().find(|c| c.id == id)
    }

    /// Find a curve by TLS `NamedCurve` identifier.
    pub fn from_tls_id(tls_id: u16) -> Option<&'static CurveInfo> {
        CURVES.iter().find(|c| c.tls_id == tls_id)
    }

    /// Find a curve by conventional name (exact match).
    pub fn from_name(name: &str) -> Option<&'static CurveInfo> {
        CURVES.iter().find(|c| c.name == name)
    }
}

// ========================================================================

/// Curve shape and shape-specific constants.
pub(crate) enum Shape {
    /// y^2 = x^3 + a*x + b. Coefficient `a` is `None` when it is -3.
    ShortWeierstrass {
        a: Option<&'static str>,
        b: &'static str,
        gy: &'static str,
    },

    /// Montgomery curve, x-only. `a24` is (A + 2)/4; `nbits` is the
    /// index of the bit which is always set in private keys.
    Montgomery {
        a24: &'static str,
        nbits: usize,
    },
}

/// Domain parameters of a curve (hexadecimal, big-endian).
pub(crate) struct DomainParams {
    pub(crate) p: &'static str,
    pub(crate) n: &'static str,
    pub(crate) gx: &'static str,
    pub(crate) shape: Shape,
    /// Modulus has the form 2^k - c with a small c; reduction can then
    /// fold the high bits instead of dividing.
    pub(crate) pseudo_mersenne: bool,
}

#[cfg(feature = "secp192r1")]
static SECP192R1: DomainParams = DomainParams {
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    n: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    gx: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
    shape: Shape::ShortWeierstrass {
        a: None,
        b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
        gy: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "secp224r1")]
static SECP224R1: DomainParams = DomainParams {
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    n: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    gx: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
    shape: Shape::ShortWeierstrass {
        a: None,
        b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
        gy: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "secp256r1")]
static SECP256R1: DomainParams = DomainParams {
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
    shape: Shape::ShortWeierstrass {
        a: None,
        b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
        gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    },
    pseudo_mersenne: false,
};

#[cfg(feature = "secp384r1")]
static SECP384R1: DomainParams = DomainParams {
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
    n: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
    gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
    shape: Shape::ShortWeierstrass {
        a: None,
        b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
        gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "secp521r1")]
static SECP521R1: DomainParams = DomainParams {
    p: "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    n: "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
    gx: "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
    shape: Shape::ShortWeierstrass {
        a: None,
        b: "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
        gy: "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "secp192k1")]
static SECP192K1: DomainParams = DomainParams {
    p: "fffffffffffffffffffffffffffffffffffffffeffffee37",
    n: "fffffffffffffffffffffffe26f2fc170f69466a74defd8d",
    gx: "db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d",
    shape: Shape::ShortWeierstrass {
        a: Some("00"),
        b: "03",
        gy: "9b2f2f6d9c5628a7844163d015be86344082aa88d95e2f9d",
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "secp224k1")]
static SECP224K1: DomainParams = DomainParams {
    p: "fffffffffffffffffffffffffffffffffffffffffffffffeffffe56d",
    n: "010000000000000000000000000001dce8d2ec6184caf0a971769fb1f7",
    gx: "a1455b334df099df30fc28a169a467e9e47075a90f7e650eb6b7a45c",
    shape: Shape::ShortWeierstrass {
        a: Some("00"),
        b: "05",
        gy: "7e089fed7fba344282cafbd6f7e319f7c0b0bd59e2ca4bdb556d61a5",
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "secp256k1")]
static SECP256K1: DomainParams = DomainParams {
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    gx: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
    shape: Shape::ShortWeierstrass {
        a: Some("00"),
        b: "07",
        gy: "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "bp256r1")]
static BP256R1: DomainParams = DomainParams {
    p: "a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377",
    n: "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
    gx: "8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262",
    shape: Shape::ShortWeierstrass {
        a: Some("7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9"),
        b: "26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6",
        gy: "547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997",
    },
    pseudo_mersenne: false,
};

#[cfg(feature = "bp384r1")]
static BP384R1: DomainParams = DomainParams {
    p: "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b412b1da197fb71123acd3a729901d1a71874700133107ec53",
    n: "8cb91e82a3386d280f5d6f7e50e641df152f7109ed5456b31f166e6cac0425a7cf3ab6af6b7fc3103b883202e9046565",
    gx: "1d1c64f068cf45ffa2a63a81b7c13f6b8847a3e77ef14fe3db7fcafe0cbd10e8e826e03436d646aaef87b2e247d4af1e",
    shape: Shape::ShortWeierstrass {
        a: Some("7bc382c63d8c150c3c72080ace05afa0c2bea28e4fb22787139165efba91f90f8aa5814a503ad4eb04a8c7dd22ce2826"),
        b: "04a8c7dd22ce28268b39b55416f0447c2fb77de107dcd2a62e880ea53eeb62d57cb4390295dbc9943ab78696fa504c11",
        gy: "8abe1d7520f9c2a45cb1eb8e95cfd55262b70b29feec5864e19c054ff99129280e4646217791811142820341263c5315",
    },
    pseudo_mersenne: false,
};

#[cfg(feature = "bp512r1")]
static BP512R1: DomainParams = DomainParams {
    p: "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca703308717d4d9b009bc66842aecda12ae6a380e62881ff2f2d82c68528aa6056583a48f3",
    n: "aadd9db8dbe9c48b3fd4e6ae33c9fc07cb308db3b3c9d20ed6639cca70330870553e5c414ca92619418661197fac10471db1d381085ddaddb58796829ca90069",
    gx: "81aee4bdd82ed9645a21322e9c4c6a9385ed9f70b5d916c1b43b62eef4d0098eff3b1f78e2d0d48d50d1687b93b97d5f7c6d5047406a5e688b352209bcb9f822",
    shape: Shape::ShortWeierstrass {
        a: Some("7830a3318b603b89e2327145ac234cc594cbdd8d3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94ca"),
        b: "3df91610a83441caea9863bc2ded5d5aa8253aa10a2ef1c98b9ac8b57f1117a72bf2c7b9e7c1ac4d77fc94cadc083e67984050b75ebae5dd2809bd638016f723",
        gy: "7dde385d566332ecc0eabfa9cf7822fdf209f70024a57b1aa000c55b881f8111b2dcde494a5f485e5bca4bd88a2763aed1ca2b2fa8f0540678cd1e0f3ad80892",
    },
    pseudo_mersenne: false,
};

#[cfg(feature = "sm2p256v1")]
static SM2P256V1: DomainParams = DomainParams {
    p: "fffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff",
    n: "fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123",
    gx: "32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7",
    shape: Shape::ShortWeierstrass {
        a: None,
        b: "28e9fa9e9d9f5e344d5a9e4bcf6509a7f39789f515ab8f92ddbcbd414d940e93",
        gy: "bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0",
    },
    pseudo_mersenne: false,
};

// Order of Curve25519 base point is 2^252 + 27742317777372353535851937790883648493.
#[cfg(feature = "curve25519")]
static CURVE25519: DomainParams = DomainParams {
    p: "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed",
    n: "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed",
    gx: "09",
    shape: Shape::Montgomery {
        a24: "01db42",
        nbits: 254,
    },
    pseudo_mersenne: true,
};

#[cfg(feature = "curve448")]
static CURVE448: DomainParams = DomainParams {
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
    n: "3fffffffffffffffffffffffffffffffffffffffffffffffffffffff7cca23e9c44edb49aed63690216cc2728dc58f552378c292ab5844f3",
    gx: "05",
    shape: Shape::Montgomery {
        a24: "98aa",
        nbits: 447,
    },
    pseudo_mersenne: true,
};

/// Get the domain parameters for a curve; `None` if the curve is not
/// compiled in.
pub(crate) fn domain_params(id: CurveId) -> Option<&'static DomainParams> {
    match id {
        #[cfg(feature = "secp192r1")]
        CurveId::Secp192r1 => Some(&SECP192R1),
        #[cfg(feature = "secp224r1")]
        CurveId::Secp224r1 => Some(&SECP224R1),
        #[cfg(feature = "secp256r1")]
        CurveId::Secp256r1 => Some(&SECP256R1),
        #[cfg(feature = "secp384r1")]
        CurveId::Secp384r1 => Some(&SECP384R1),
        #[cfg(feature = "secp521r1")]
        CurveId::Secp521r1 => Some(&SECP521R1),
        #[cfg(feature = "secp192k1")]
        CurveId::Secp192k1 => Some(&SECP192K1),
        #[cfg(feature = "secp224k1")]
        CurveId::Secp224k1 => Some(&SECP224K1),
        #[cfg(feature = "secp256k1")]
        CurveId::Secp256k1 => Some(&SECP256K1),
        #[cfg(feature = "bp256r1")]
        CurveId::Bp256r1 => Some(&BP256R1),
        #[cfg(feature = "bp384r1")]
        CurveId::Bp384r1 => Some(&BP384R1),
        #[cfg(feature = "bp512r1")]
        CurveId::Bp512r1 => Some(&BP512R1),
        #[cfg(feature = "sm2p256v1")]
        CurveId::Sm2p256v1 => Some(&SM2P256V1),
        #[cfg(feature = "curve25519")]
        CurveId::Curve25519 => Some(&CURVE25519),
        #[cfg(feature = "curve448")]
        CurveId::Curve448 => Some(&CURVE448),
        _ => None,
    }
}

// ========================================================================
