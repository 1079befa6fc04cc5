use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Maps any `(numer, denom)` pair to its canonical form.
///
/// The steps run in order and each one may return early:
/// 1. a negative denominator flips both signs;
/// 2. a zero denominator becomes `0/0`, `1/0` or `-1/0`;
/// 3. a zero numerator becomes `0/1`;
/// 4. pairs that are already reduced skip the gcd (`fast-paths` feature);
/// 5. both parts are divided by their gcd.
pub(super) fn canonicalize(mut numer: BigInt, mut denom: BigInt) -> (BigInt, BigInt) {
    if denom.is_negative() {
        numer = -numer;
        denom = -denom;
    }

    if denom.is_zero() {
        return fold_zero_denominator(numer);
    }

    if numer.is_zero() {
        return (numer, BigInt::one());
    }

    #[cfg(feature = "fast-paths")]
    let (numer, denom) = match fast_path(numer, denom) {
        Ok(reduced) => return reduced,
        Err(pair) => pair,
    };

    // `denom > 0` here, so the gcd is strictly positive and both divisions are exact.
    let gcd = numer.gcd(&denom);
    (numer / &gcd, denom / gcd)
}

fn fold_zero_denominator(numer: BigInt) -> (BigInt, BigInt) {
    let sentinel = match numer.sign() {
        Sign::NoSign => return (numer, BigInt::zero()),
        Sign::Plus => BigInt::one(),
        Sign::Minus => -BigInt::one(),
    };
    log::trace!("folding {numer}/0 into {sentinel}/0");
    (sentinel, BigInt::zero())
}

/// Shortcuts for pairs whose reduced form is known without a gcd.
/// Hands the pair back untouched when none applies.
#[cfg(feature = "fast-paths")]
fn fast_path(numer: BigInt, denom: BigInt) -> Result<(BigInt, BigInt), (BigInt, BigInt)> {
    if denom.is_one() || numer.is_one() {
        return Ok((numer, denom));
    }
    if numer == denom {
        return Ok((BigInt::one(), BigInt::one()));
    }
    if &numer * 2u32 == denom {
        return Ok((BigInt::one(), BigInt::from(2u32)));
    }
    Err((numer, denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(numer: i64, denom: i64) -> (BigInt, BigInt) {
        (BigInt::from(numer), BigInt::from(denom))
    }

    fn reduce(numer: i64, denom: i64) -> (BigInt, BigInt) {
        canonicalize(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn negative_denominator_moves_sign_to_numerator() {
        assert_eq!(reduce(3, -6), pair(-1, 2));
        assert_eq!(reduce(-3, -6), pair(1, 2));
        assert_eq!(reduce(-7, 3), pair(-7, 3));
    }

    #[test]
    fn zero_denominator_folds_to_sentinels() {
        assert_eq!(reduce(0, 0), pair(0, 0));
        assert_eq!(reduce(7, 0), pair(1, 0));
        assert_eq!(reduce(-7, 0), pair(-1, 0));
        assert_eq!(reduce(i64::MIN, 0), pair(-1, 0));
    }

    #[test]
    fn zero_numerator_uses_unit_denominator() {
        assert_eq!(reduce(0, 5), pair(0, 1));
        assert_eq!(reduce(0, -5), pair(0, 1));
    }

    #[cfg(feature = "fast-paths")]
    #[test]
    fn fast_paths_agree_with_gcd_reduction() {
        let cases = [(9, 1), (1, 9), (-1, 9), (12, 12), (6, 12), (-6, 12), (10, 4)];
        for (numer, denom) in cases {
            let (n, d) = pair(numer, denom);
            let gcd = n.gcd(&d);
            let expected = (&n / &gcd, &d / &gcd);
            assert_eq!(reduce(numer, denom), expected, "{numer}/{denom}");
        }
    }

    struct Capture(std::sync::Mutex<Vec<(String, String)>>);

    impl log::Log for Capture {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.0.lock() {
                records.push((record.target().to_string(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(std::sync::Mutex::new(Vec::new()));

    #[test]
    fn folding_is_traced_under_module_path() {
        log::set_logger(&CAPTURE).expect("only this test installs a logger");
        log::set_max_level(log::LevelFilter::Trace);
        reduce(-123457, 0);
        let records = CAPTURE.0.lock().expect("capture lock");
        assert!(records.iter().any(|(target, message)| {
            target == "canon_ratio::rational::normalize"
                && message == "folding -123457/0 into -1/0"
        }));
    }

    #[test]
    fn general_reduction_divides_by_gcd() {
        assert_eq!(reduce(4, 8), pair(1, 2));
        assert_eq!(reduce(-21, 14), pair(-3, 2));
        assert_eq!(reduce(i64::MIN, i64::MIN), pair(1, 1));
    }
}
