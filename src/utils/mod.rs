//! Utilities module
//!
//! Contains error handling used by the client layer

pub mod error;
