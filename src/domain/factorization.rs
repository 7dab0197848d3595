//! Boundary-checked prime factorization
//!
//! `prime_factors` validates its input, answers the trivial cases directly and
//! hands everything else to trial division.

use tracing::debug;

use crate::{
    domain::{primes::trial_division, types::Factorable},
    error::{Error, Result},
    infrastructure::log_messages::factorization,
};

/// Prime factors of `number`, smallest first, with multiplicity
///
/// - negative input fails with [`Error::InvalidArgument`]
/// - 0 and 1 have no prime factors
/// - for any other input the product of the returned factors is `number`
///
/// ```
/// use prime_factors::prime_factors;
///
/// assert_eq!(prime_factors(12).unwrap(), vec![2, 2, 3]);
/// assert!(prime_factors(1).unwrap().is_empty());
/// assert_eq!(
///     prime_factors(-5).unwrap_err().to_string(),
///     "-5 is an invalid input."
/// );
/// ```
pub fn prime_factors(number: i64) -> Result<Vec<u64>> {
    let factorable = Factorable::try_new(number).map_err(|_| {
        debug!(number, "{}", factorization::REJECTED_NEGATIVE);
        Error::invalid_argument(number)
    })?;

    if factorable.has_no_prime_factors() {
        return Ok(Vec::new());
    }

    let factors = trial_division(factorable.as_unsigned());
    debug!(number, ?factors, "{}", factorization::FACTORED);
    Ok(factors)
}
