use std::hash::{Hash, Hasher};

use super::Rational;

// Canonical form makes the field-wise comparison a value comparison, NaN included.

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.numer == other.numer && self.denom == other.denom
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer.hash(state);
        self.denom.hash(state);
    }
}
