#![no_main]

use canon_ratio::Rational;
use libfuzzer_sys::fuzz_target;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

fuzz_target!(|data: &[u8]| {
    // Big enough for multi-limb gcds, small enough to keep iterations fast.
    if data.len() > 1024 {
        return;
    }
    let (left, right) = data.split_at(data.len() / 2);
    let numer = BigInt::from_signed_bytes_le(left);
    let denom = BigInt::from_signed_bytes_le(right);

    let value = Rational::new(numer.clone(), denom.clone());
    let (n, d) = (value.numer(), value.denom());
    assert!(!d.is_negative());
    if d.is_zero() {
        assert!(n.abs() <= BigInt::one());
    } else if n.is_zero() {
        assert!(d.is_one());
    } else {
        assert!(n.gcd(d).is_one());
        // Same ratio: n * denom == numer * d.
        assert_eq!(n * &denom, &numer * d);
    }

    let again = Rational::new(n.clone(), d.clone());
    assert_eq!(value, again);
    assert_eq!(value.is_finite(), !d.is_zero());

    let scaled = Rational::new(&numer * 3u32, &denom * 3u32);
    assert_eq!(value, scaled);

    let negated = Rational::new(&numer * -3i32, &denom * -3i32);
    if d.is_zero() && !n.is_zero() {
        assert_eq!(negated, Rational::new(-n, BigInt::zero()));
        assert_ne!(negated, value);
    } else {
        assert_eq!(negated, value);
    }
});
