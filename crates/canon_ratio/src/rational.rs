use std::fmt;
use std::sync::LazyLock;

use num_bigint::BigInt;

mod convert;
mod display;
mod equality;
mod normalize;


static ZERO: LazyLock<Rational> = LazyLock::new(|| Rational::new(0, 1));
static ONE: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 1));
static HALF: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 2));
static NAN: LazyLock<Rational> = LazyLock::new(|| Rational::new(0, 0));
static POSITIVE_INFINITY: LazyLock<Rational> = LazyLock::new(|| Rational::new(1, 0));
static NEGATIVE_INFINITY: LazyLock<Rational> = LazyLock::new(|| Rational::new(-1, 0));

/// An extended rational: a reduced `numer / denom` pair, or one of the
/// zero-denominator sentinels `0/0` (NaN), `1/0` and `-1/0`.
///
/// The fields are private and only [`Rational::new`] writes them, so every
/// instance is canonical:
/// - `denom >= 0`, the sign lives in `numer`;
/// - `denom == 0` implies `numer` is `-1`, `0` or `1`;
/// - zero is always `0/1`;
/// - otherwise `gcd(|numer|, denom) == 1`.
#[derive(Clone, Debug)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

/// Which part of the extended rationals a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Finite,
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl Rational {
    /// Builds the canonical representative of `numer / denom`.
    ///
    /// Never fails: a zero denominator yields NaN, `+Infinity` or `-Infinity`
    /// depending on the sign of `numer`.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Rational {
        let (numer, denom) = normalize::canonicalize(numer.into(), denom.into());
        Rational { numer, denom }
    }

    /// `value / 1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Rational {
        Rational::new(value, 1)
    }

    /// `0/1`, the only representation of zero.
    pub fn zero() -> Rational {
        ZERO.clone()
    }

    /// `1/1`.
    pub fn one() -> Rational {
        ONE.clone()
    }

    /// `1/2`.
    pub fn half() -> Rational {
        HALF.clone()
    }

    /// `0/0`. Equal to itself, unlike IEEE NaN.
    pub fn nan() -> Rational {
        NAN.clone()
    }

    /// `1/0`.
    pub fn positive_infinity() -> Rational {
        POSITIVE_INFINITY.clone()
    }

    /// `-1/0`.
    pub fn negative_infinity() -> Rational {
        NEGATIVE_INFINITY.clone()
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Consumes the value, returning the canonical `(numer, denom)` pair.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    // The predicates compare against the sentinels instead of looking at the
    // fields, so they follow whatever encoding `normalize` settles on.

    pub fn is_nan(&self) -> bool {
        *self == *NAN
    }

    pub fn is_positive_infinity(&self) -> bool {
        *self == *POSITIVE_INFINITY
    }

    pub fn is_negative_infinity(&self) -> bool {
        *self == *NEGATIVE_INFINITY
    }

    pub fn is_infinity(&self) -> bool {
        self.is_positive_infinity() || self.is_negative_infinity()
    }

    pub fn is_finite(&self) -> bool {
        !self.is_infinity() && !self.is_nan()
    }

    /// Classifies the value using the predicates above.
    pub fn category(&self) -> Category {
        if self.is_nan() {
            Category::NaN
        } else if self.is_positive_infinity() {
            Category::PositiveInfinity
        } else if self.is_negative_infinity() {
            Category::NegativeInfinity
        } else {
            Category::Finite
        }
    }
}

/// An uninitialized rational is undefined, not zero.
impl Default for Rational {
    fn default() -> Self {
        Rational::nan()
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(value)
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Rational::from_integer(value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Finite => "Finite",
            Category::NaN => "NaN",
            Category::PositiveInfinity => "+Infinity",
            Category::NegativeInfinity => "-Infinity",
        };
        f.write_str(name)
    }
}
