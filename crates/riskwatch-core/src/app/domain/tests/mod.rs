//! Domain tests module.
//!
//! - Property tests: proptest-based randomized testing of the reducer invariants
