use num_bigint::BigUint;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CombinatoricsError {
    #[error("invalid combination parameters: choose {take} from {count}")]
    InvalidParameters { count: u64, take: u64 },
    #[error("intermediate product exceeds the u64 range; use `binomial` instead")]
    IntegerOverflow,
}

fn check_parameters(count: u64, take: u64) -> Result<(), CombinatoricsError> {
    if count < 1 || take < 1 || count < take {
        return Err(CombinatoricsError::InvalidParameters { count, take });
    }
    Ok(())
}

/// Exact C(count, take) as a big integer.
///
/// Accumulates the falling-factorial numerator `count · (count-1) · … ·
/// (count-take+1)` and the denominator `take!` in full before a single final
/// division. The ratio is always an exact integer, so the truncating big
/// integer division loses nothing.
///
/// Requires `count ≥ 1`, `take ≥ 1` and `take ≤ count`.
///
/// ```
/// use num_bigint::BigUint;
/// use tarot_rs::combinatorics::binomial;
///
/// assert_eq!(binomial(6, 3).unwrap(), BigUint::from(20u32));
/// assert_eq!(
///     binomial(78, 18).unwrap(),
///     BigUint::from(212_566_476_905_162_380u64),
/// );
/// ```
pub fn binomial(count: u64, take: u64) -> Result<BigUint, CombinatoricsError> {
    check_parameters(count, take)?;

    let mut numerator = BigUint::from(1u32);
    for i in (count - take + 1)..=count {
        numerator *= i;
    }
    let mut denominator = BigUint::from(1u32);
    for i in 1..=take {
        denominator *= i;
    }
    Ok(numerator / denominator)
}

/// C(count, take) within machine integers.
///
/// Same shape as [`binomial`] but every multiplication is checked: the
/// moment an accumulated product cannot be represented in a `u64` this
/// fails with [`CombinatoricsError::IntegerOverflow`] rather than wrap.
/// Note the numerator overflows long before the final ratio does: C(78, 18)
/// itself fits a `u64` but its 34-digit numerator does not, so this path
/// rejects it and the caller must use [`binomial`].
pub fn binomial_u64(count: u64, take: u64) -> Result<u64, CombinatoricsError> {
    check_parameters(count, take)?;

    let mut numerator: u64 = 1;
    for i in (count - take + 1)..=count {
        numerator =
            numerator.checked_mul(i).ok_or(CombinatoricsError::IntegerOverflow)?;
    }
    let mut denominator: u64 = 1;
    for i in 1..=take {
        denominator =
            denominator.checked_mul(i).ok_or(CombinatoricsError::IntegerOverflow)?;
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(binomial(6, 3).unwrap(), BigUint::from(20u32));
        assert_eq!(binomial(10, 3).unwrap(), BigUint::from(120u32));
        assert_eq!(binomial(5, 5).unwrap(), BigUint::from(1u32));
        assert_eq!(binomial(7, 1).unwrap(), BigUint::from(7u32));
        assert_eq!(binomial(20, 10).unwrap(), BigUint::from(184_756u32));
    }

    #[test]
    fn tarot_deal_count() {
        // Independently verified: C(78, 18).
        assert_eq!(
            binomial(78, 18).unwrap(),
            BigUint::from(212_566_476_905_162_380u64)
        );
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert!(matches!(
            binomial(3, 5),
            Err(CombinatoricsError::InvalidParameters { count: 3, take: 5 })
        ));
        assert!(binomial(0, 1).is_err());
        assert!(binomial(5, 0).is_err());
        assert!(binomial_u64(2, 4).is_err());
    }

    #[test]
    fn u64_path_agrees_on_small_inputs() {
        for count in 1..=20u64 {
            for take in 1..=count {
                let exact = binomial(count, take).unwrap();
                let fixed = binomial_u64(count, take).unwrap();
                assert_eq!(exact, BigUint::from(fixed), "C({count},{take})");
            }
        }
    }

    #[test]
    fn u64_path_detects_overflow() {
        // The falling-factorial numerator for C(78, 18) spans 34 digits.
        assert_eq!(binomial_u64(78, 18), Err(CombinatoricsError::IntegerOverflow));
        // 21! alone exceeds u64.
        assert_eq!(binomial_u64(40, 21), Err(CombinatoricsError::IntegerOverflow));
    }

    #[test]
    fn symmetry() {
        for (count, take) in [(10u64, 4u64), (30, 7), (78, 18)] {
            assert_eq!(
                binomial(count, take).unwrap(),
                binomial(count, count - take).unwrap()
            );
        }
    }
}
