use std::fmt;

use super::Rational;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return f.write_str("NaN");
        }
        if self.is_positive_infinity() {
            return f.write_str("+Infinity");
        }
        if self.is_negative_infinity() {
            return f.write_str("-Infinity");
        }
        write!(f, "{}/{}", self.numer, self.denom)
    }
}
