//! Property-based tests for factorization laws
//!
//! These tests use property-based testing to verify that the factorization
//! of every generated input satisfies the defining facts about primes.

use prime_factors::domain::validation_constants::{primes::FIRST_PRIME, test_runs};
use prime_factors::{is_prime, prime_factors, Error, Settings};
use proptest::prelude::*;

/// Case count and input bound, taken from settings when they load
fn property_settings() -> (u32, i64) {
    Settings::new()
        .map(|settings| (settings.properties.cases, settings.properties.max_input))
        .unwrap_or((
            test_runs::DEFAULT_PROPTEST_CASES,
            test_runs::DEFAULT_MAX_INPUT,
        ))
}

fn property_config() -> ProptestConfig {
    ProptestConfig::with_cases(property_settings().0)
}

/// Config for laws that filter with `prop_assume!`, whose rejection budget
/// grows with the case count
fn assumption_config(cases: u32) -> ProptestConfig {
    ProptestConfig {
        max_global_rejects: test_runs::max_global_rejects(cases),
        ..ProptestConfig::with_cases(cases)
    }
}

fn as_u64(n: i64) -> u64 {
    u64::try_from(n).unwrap()
}

// Property test generators
pub mod generators {
    use super::*;
    use prime_factors::next_prime;

    /// Generate inputs that have at least one prime factor
    pub fn at_least_first_prime() -> impl Strategy<Value = i64> {
        let first_prime = i64::try_from(FIRST_PRIME).unwrap();
        first_prime..=property_settings().1.max(first_prime)
    }

    /// Generate the inputs that have no prime factors
    pub fn without_prime_factors() -> impl Strategy<Value = i64> {
        0i64..=1
    }

    /// Generate negative inputs across the whole signed range
    pub fn negative() -> impl Strategy<Value = i64> {
        i64::MIN..=-1
    }

    /// Generate primes directly instead of filtering for them
    pub fn prime() -> impl Strategy<Value = i64> {
        (0..=property_settings().1.max(0))
            .prop_filter_map("no prime fits in i64", |n| {
                u64::try_from(n)
                    .ok()
                    .and_then(next_prime)
                    .and_then(|p| i64::try_from(p).ok())
            })
    }
}

fn product(factors: &[u64]) -> u64 {
    factors.iter().product()
}

proptest! {
    #![proptest_config(property_config())]

    #[test]
    fn prop_all_factors_are_prime(n in generators::at_least_first_prime()) {
        let factors = prime_factors(n).unwrap();
        prop_assert!(!factors.is_empty());
        for factor in factors {
            prop_assert!(is_prime(factor), "{} is not prime (from {})", factor, n);
        }
    }

    #[test]
    fn prop_factors_multiply_to_input(n in generators::at_least_first_prime()) {
        let factors = prime_factors(n).unwrap();
        prop_assert_eq!(product(&factors), as_u64(n));
    }

    #[test]
    fn prop_factors_are_ascending(n in generators::at_least_first_prime()) {
        let factors = prime_factors(n).unwrap();
        prop_assert!(factors.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_generated_prime_is_only_factor(p in generators::prime()) {
        prop_assert_eq!(prime_factors(p).unwrap(), vec![as_u64(p)]);
    }

    #[test]
    fn prop_zero_and_one_have_no_prime_factors(n in generators::without_prime_factors()) {
        prop_assert!(prime_factors(n).unwrap().is_empty());
    }

    #[test]
    fn prop_negative_input_is_invalid_argument(n in generators::negative()) {
        let error = prime_factors(n).unwrap_err();
        let names_input = matches!(error, Error::InvalidArgument { value } if value == n);
        prop_assert!(names_input, "unexpected error {:?} for {}", error, n);
        prop_assert_eq!(error.to_string(), format!("{n} is an invalid input."));
    }
}

// Primes are sparse among generated inputs, so filtering for them needs a
// larger rejection budget than the other laws.
proptest! {
    #![proptest_config(assumption_config(property_settings().0))]

    #[test]
    fn prop_prime_is_only_factor(n in generators::at_least_first_prime()) {
        prop_assume!(is_prime(as_u64(n)));

        prop_assert_eq!(prime_factors(n).unwrap(), vec![as_u64(n)]);
    }
}

#[test]
fn test_rejection_budget_covers_raised_case_counts() {
    // Roughly 1 in 21 inputs below 2^31 is prime
    for cases in [256, 2_048, 4_096, 65_536] {
        let config = assumption_config(cases);
        assert_eq!(config.cases, cases);
        assert!(config.max_global_rejects >= cases.saturating_mul(21));
    }
}
