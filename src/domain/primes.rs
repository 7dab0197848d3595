//! Primality testing and trial-division factorization
//!
//! Both routines skip multiples of 2 and 3 with a 6k±1 wheel and bound the
//! search by `candidate <= n / candidate`, which never overflows.

use crate::domain::validation_constants::primes::{
    FIRST_PRIME, WHEEL_BASIS, WHEEL_PAIR_OFFSET, WHEEL_START, WHEEL_STEP,
};

/// Deterministic primality check
pub fn is_prime(n: u64) -> bool {
    if n < FIRST_PRIME {
        return false;
    }
    if WHEEL_BASIS.contains(&n) {
        return true;
    }
    if WHEEL_BASIS.iter().any(|&p| n % p == 0) {
        return false;
    }

    let mut candidate = WHEEL_START;
    while candidate <= n / candidate {
        if n % candidate == 0 || n % (candidate + WHEEL_PAIR_OFFSET) == 0 {
            return false;
        }
        candidate += WHEEL_STEP;
    }
    true
}

/// Smallest prime greater than or equal to `n`
///
/// Returns `None` when no such prime fits in a `u64`.
pub fn next_prime(n: u64) -> Option<u64> {
    if n <= FIRST_PRIME {
        return Some(FIRST_PRIME);
    }

    // Even numbers above 2 are never prime
    let mut candidate = n | 1;
    loop {
        if is_prime(candidate) {
            return Some(candidate);
        }
        candidate = candidate.checked_add(2)?;
    }
}

/// Prime factors of `n` with multiplicity, smallest first
///
/// Inputs below 2 have no prime factors and yield an empty vector.
pub fn trial_division(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < FIRST_PRIME {
        return factors;
    }

    for p in WHEEL_BASIS {
        divide_out(&mut n, p, &mut factors);
    }

    let mut candidate = WHEEL_START;
    while candidate <= n / candidate {
        divide_out(&mut n, candidate, &mut factors);
        divide_out(&mut n, candidate + WHEEL_PAIR_OFFSET, &mut factors);
        candidate += WHEEL_STEP;
    }

    // Whatever survives has no divisor up to its square root
    if n > 1 {
        factors.push(n);
    }
    factors
}

fn divide_out(n: &mut u64, divisor: u64, factors: &mut Vec<u64>) {
    while *n % divisor == 0 {
        factors.push(divisor);
        *n /= divisor;
    }
}
