//! Arbitrary-precision rationals kept in a single canonical form.
//!
//! Every [`Rational`] is reduced, carries its sign in the numerator and folds a
//! zero denominator into one of three sentinels (`NaN`, `+Infinity`,
//! `-Infinity`). Structural equality is therefore value equality.

mod error;
mod rational;

pub use error::ConversionError;
pub use rational::{Category, Rational};
