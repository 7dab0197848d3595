//! Validation constants for domain types
//!
//! This module centralizes the numeric constants used by the factorization
//! routines and the default tuning for randomized property runs.

/// Prime number constants
pub mod primes {
    /// Smallest prime; every input below it has no prime factors
    pub const FIRST_PRIME: u64 = 2;

    /// Primes handled before the 6k±1 wheel starts
    pub const WHEEL_BASIS: [u64; 2] = [2, 3];

    /// First wheel candidate (6·1 − 1)
    pub const WHEEL_START: u64 = 5;

    /// Distance between consecutive 6k − 1 candidates
    pub const WHEEL_STEP: u64 = 6;

    /// Offset from 6k − 1 to its 6k + 1 partner
    pub const WHEEL_PAIR_OFFSET: u64 = 2;
}

/// Test run size constants
pub mod test_runs {
    /// Default number of cases per property
    pub const DEFAULT_PROPTEST_CASES: u32 = 256;

    /// Default upper bound for generated inputs (the 32-bit signed range)
    pub const DEFAULT_MAX_INPUT: i64 = i32::MAX as i64;

    /// Rejections allowed per accepted case when a property filters with an
    /// assumption
    pub const REJECTS_PER_CASE: u32 = 64;

    /// Rejection budget for `cases` assumption-filtered cases
    pub const fn max_global_rejects(cases: u32) -> u32 {
        cases.saturating_mul(REJECTS_PER_CASE)
    }
}
