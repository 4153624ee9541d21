//! Reproducible pseudo-random number generation for dataset construction.

pub mod lcg;

pub use lcg::JavaLcg;
