//! Interop with `num_rational::BigRational`, which has no room for NaN or the
//! infinities.

#![cfg(feature = "num-rational")]

use num_rational::BigRational;

use super::Rational;
use crate::error::ConversionError;

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        let (numer, denom) = value.into_raw();
        Rational::new(numer, denom)
    }
}

impl TryFrom<&Rational> for BigRational {
    type Error = ConversionError;

    fn try_from(value: &Rational) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ConversionError::NotFinite(value.category()));
        }
        Ok(BigRational::new_raw(value.numer.clone(), value.denom.clone()))
    }
}

impl TryFrom<Rational> for BigRational {
    type Error = ConversionError;

    fn try_from(value: Rational) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ConversionError::NotFinite(value.category()));
        }
        let (numer, denom) = value.into_parts();
        Ok(BigRational::new_raw(numer, denom))
    }
}
