//! Prime Factors - integer prime factorization with property-based laws
//!
//! The crate exposes a single factorization operation guarded at its
//! boundary, the numeric routines it delegates to, and the settings and
//! tracing setup used when exercising it.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use crate::config::{init_tracing, Settings};
pub use domain::factorization::prime_factors;
pub use domain::primes::{is_prime, next_prime, trial_division};
pub use domain::types::Factorable;
pub use error::{Error, Result};
