//! Validated input types for factorization
//!
//! Negative numbers are rejected once, when a `Factorable` is built, so the
//! numeric routines downstream only ever see non-negative values.

use crate::domain::validation_constants::primes;
use nutype::nutype;

/// A number that may be factorized
///
/// Any non-negative integer qualifies. 0 and 1 are accepted and simply have
/// no prime factors.
#[nutype(
    validate(greater_or_equal = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display
    )
)]
pub struct Factorable(i64);

impl Factorable {
    /// The value as an unsigned integer
    pub fn as_unsigned(&self) -> u64 {
        u64::try_from(self.into_inner()).unwrap_or_default()
    }

    /// Whether the value is 0 or 1
    pub fn has_no_prime_factors(&self) -> bool {
        self.as_unsigned() < primes::FIRST_PRIME
    }
}
