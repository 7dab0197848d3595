//! Domain types and numeric logic for prime factorization
//!
//! This module contains the validated input type, the numeric routines for
//! primality and trial division, and the boundary-checked factorization
//! operation built on them.

pub mod factorization;
pub mod primes;
pub mod types;
pub mod validation_constants;

pub use factorization::*;
pub use primes::*;
pub use types::*;
