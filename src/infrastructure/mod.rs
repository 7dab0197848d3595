//! Infrastructure layer for Prime Factors
//!
//! This module contains the concerns that sit outside the numeric domain,
//! currently the log message text shared by the tracing calls.

pub mod log_messages;
