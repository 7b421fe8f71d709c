use crate::classifier::{ClassificationResult, Verdict};
use num_bigint::BigUint;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EstimateError {
    #[error("cannot estimate a rate over zero samples")]
    EmptySample,
}

/// Verdict counters accumulated across a run.
///
/// Counters only ever grow; the struct is `Copy`, so a snapshot is a plain
/// copy at any point. `merge` lets a host shard the sampling loop and
/// reduce per-worker tallies once at the end.
///
/// ```
/// use tarot_rs::stats::Tally;
///
/// let tally = Tally::default();
/// assert_eq!(tally.hands, 0);
/// assert_eq!(tally.ordinary(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub hands: u64,
    pub petit_sec: u64,
    pub main_imparable: u64,
}

impl Tally {
    /// Count one classified hand.
    pub fn record(&mut self, result: &ClassificationResult) {
        self.hands += 1;
        match result.verdict {
            Verdict::PetitSec => self.petit_sec += 1,
            Verdict::MainImparable => self.main_imparable += 1,
            Verdict::Ordinary => {}
        }
    }

    /// Hands that were neither petit sec nor main imparable.
    pub fn ordinary(&self) -> u64 {
        self.hands - self.petit_sec - self.main_imparable
    }

    /// Hands once petit sec deals are set aside; the denominator the
    /// unstoppable-hand rate is quoted against.
    pub fn valid_hands(&self) -> u64 {
        self.hands - self.petit_sec
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &Tally) {
        self.hands += other.hands;
        self.petit_sec += other.petit_sec;
        self.main_imparable += other.main_imparable;
    }
}

/// `numerator / denominator` as a decimal string with a fixed number of
/// fractional digits, rounded half down (ties toward zero).
///
/// Exact big-integer arithmetic throughout, so rates stay drift-free over
/// billions of samples where repeated float division would not.
///
/// ```
/// use num_bigint::BigUint;
/// use tarot_rs::stats::decimal_ratio;
///
/// let r = decimal_ratio(&BigUint::from(2u32), &BigUint::from(3u32), 4).unwrap();
/// assert_eq!(r, "0.6667");
/// ```
pub fn decimal_ratio(
    numerator: &BigUint,
    denominator: &BigUint,
    digits: u32,
) -> Result<String, EstimateError> {
    if *denominator == BigUint::from(0u32) {
        return Err(EstimateError::EmptySample);
    }

    let mut scale = BigUint::from(1u32);
    for _ in 0..digits {
        scale *= 10u32;
    }

    let scaled = numerator * &scale;
    let mut quotient = &scaled / denominator;
    let remainder = scaled % denominator;
    if &remainder * 2u32 > *denominator {
        quotient += 1u32;
    }

    if digits == 0 {
        return Ok(quotient.to_string());
    }
    let integer = &quotient / &scale;
    let fraction = (&quotient % &scale).to_string();
    let padding = "0".repeat(digits as usize - fraction.len());
    Ok(format!("{integer}.{padding}{fraction}"))
}

/// Extrapolate an observed count to the full population: the nearest
/// integer to `count · population / total`, ties rounded down.
///
/// Computed as one exact big-integer expression rather than through an
/// intermediate fixed-precision rate.
pub fn scale_count(
    count: u64,
    total: u64,
    population: &BigUint,
) -> Result<BigUint, EstimateError> {
    if total == 0 {
        return Err(EstimateError::EmptySample);
    }
    let total = BigUint::from(total);
    let scaled = population * count;
    let mut quotient = &scaled / &total;
    let remainder = scaled % &total;
    if &remainder * 2u32 > total {
        quotient += 1u32;
    }
    Ok(quotient)
}
