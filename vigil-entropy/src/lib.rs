// vigil-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod engine;
pub mod entropy;
pub mod filter;
pub mod hints;
pub mod tokenize;

pub use tokenize::Candidate;

/// Bits-per-character entropy score, as returned by
/// [`entropy::calculate_shannon_entropy`] and carried on [`engine::EntropyMatch`].
pub type EntropyScore = f64;
