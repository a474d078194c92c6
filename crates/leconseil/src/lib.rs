//! leconseil - Advisory Rule Engine
//!
//! *Le Conseil* (The Advice) - Deterministic, rule-based crop and soil
//! advisory engine for LeChamp.
//!
//! The engine is a pure function over a set of optional measurements:
//! no I/O, no shared state, no failure modes. Missing or wrong-typed
//! inputs skip their rule family instead of raising.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Request and result types for the advisory engine
pub mod advice;

/// Rule families and the evaluation entry point
pub mod rules;

pub use advice::{AdviceRequest, AdviceResult, Recommendation};
pub use rules::evaluate;
