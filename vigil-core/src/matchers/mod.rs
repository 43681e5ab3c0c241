// vigil-core/src/matchers/mod.rs
//! Concrete `Matcher` implementations.

pub mod entropy_matcher;
pub mod regex_matcher;
