//! Elliptic-curve domain parameters and public-key comparison.
//!
//! Integers and coordinates are unsigned big-endian byte strings, kept
//! exactly as they were supplied; no normalization of leading zeros happens.

use derkit_crypto::compare::bytes_equal;
use derkit_types::HashAlgId;

/// How a curve is described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveType {
    /// Parameters are inherited from elsewhere and not available here.
    #[default]
    Implicit,
    /// y^2 = x^3 + ax + b over a prime field.
    PrimeShortWeierstrass,
    /// ax^2 + y^2 = 1 + dx^2y^2 over a prime field.
    PrimeTwistedEdwards,
    /// By^2 = x^3 + Ax^2 + x over a prime field.
    PrimeMontgomery,
    /// y^2 + xy = x^3 + ax^2 + b over GF(2^m).
    Characteristic2,
    /// Identified only by OID.
    Named,
}

impl CurveType {
    pub fn is_prime(self) -> bool {
        matches!(
            self,
            CurveType::PrimeShortWeierstrass
                | CurveType::PrimeTwistedEdwards
                | CurveType::PrimeMontgomery
        )
    }

    pub fn is_characteristic2(self) -> bool {
        self == CurveType::Characteristic2
    }

    pub fn is_explicit(self) -> bool {
        self.is_prime() || self.is_characteristic2()
    }

    pub fn is_named(self) -> bool {
        self == CurveType::Named
    }
}

/// A curve point. Either coordinate may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EcPoint {
    pub x: Option<Vec<u8>>,
    pub y: Option<Vec<u8>>,
}

impl EcPoint {
    pub fn new(x: impl Into<Vec<u8>>, y: impl Into<Vec<u8>>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
        }
    }

    fn same_coordinates(&self, other: &EcPoint) -> bool {
        bytes_equal(self.x.as_deref(), other.x.as_deref())
            && bytes_equal(self.y.as_deref(), other.y.as_deref())
    }
}

/// Curve identifier: dotted OID value, friendly name, or both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurveOid {
    pub value: Option<String>,
    pub friendly_name: Option<String>,
}

impl CurveOid {
    pub fn new(value: impl Into<String>, friendly_name: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            friendly_name: Some(friendly_name.into()),
        }
    }
}

/// Curve domain parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EcCurve {
    pub curve_type: CurveType,
    pub oid: Option<CurveOid>,
    pub a: Option<Vec<u8>>,
    pub b: Option<Vec<u8>>,
    /// Field prime for the prime-field curve types.
    pub prime: Option<Vec<u8>>,
    /// Reduction polynomial for characteristic-2 curves.
    pub polynomial: Option<Vec<u8>>,
    pub order: Option<Vec<u8>>,
    pub cofactor: Option<Vec<u8>>,
    pub seed: Option<Vec<u8>>,
    pub g: EcPoint,
    pub hash: Option<HashAlgId>,
}

impl EcCurve {
    /// A curve referenced by OID only.
    pub fn named(oid: CurveOid) -> Self {
        Self {
            curve_type: CurveType::Named,
            oid: Some(oid),
            ..Self::default()
        }
    }

    fn oid_value(&self) -> Option<&str> {
        self.oid.as_ref().and_then(|o| o.value.as_deref())
    }

    fn friendly_name(&self) -> Option<&str> {
        self.oid.as_ref().and_then(|o| o.friendly_name.as_deref())
    }
}

/// A public key: curve plus public point Q.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EcParameters {
    pub curve: EcCurve,
    pub q: EcPoint,
}

/// Whether two public keys describe the same point on the same curve.
///
/// Named curves match on OID value and on friendly name, the latter ignoring
/// case. Explicit curves match on generator, order, coefficients and field;
/// cofactor, seed and hash are not compared. Implicit curves never match.
///
/// Variable time.
pub fn ec_parameters_equal(a: &EcParameters, b: &EcParameters) -> bool {
    if a.curve.curve_type != b.curve.curve_type {
        return false;
    }
    if !a.q.same_coordinates(&b.q) {
        return false;
    }

    let (ca, cb) = (&a.curve, &b.curve);
    if ca.curve_type.is_named() {
        return ca.oid_value() == cb.oid_value()
            && names_equal_ignore_case(ca.friendly_name(), cb.friendly_name());
    }
    if !ca.curve_type.is_explicit() {
        return false;
    }

    if !ca.g.same_coordinates(&cb.g)
        || !bytes_equal(ca.order.as_deref(), cb.order.as_deref())
        || !bytes_equal(ca.a.as_deref(), cb.a.as_deref())
        || !bytes_equal(ca.b.as_deref(), cb.b.as_deref())
    {
        return false;
    }

    if ca.curve_type.is_prime() {
        bytes_equal(ca.prime.as_deref(), cb.prime.as_deref())
    } else {
        bytes_equal(ca.polynomial.as_deref(), cb.polynomial.as_deref())
    }
}

fn names_equal_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a
            .chars()
            .flat_map(char::to_uppercase)
            .eq(b.chars().flat_map(char::to_uppercase)),
        _ => false,
    }
}
