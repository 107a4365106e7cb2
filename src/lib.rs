//! greylut - apply a sampled tone curve to greyscale images
//!
//! Builds a 256-entry lookup table from a `Scan`/`Idea` sample file and
//! applies it to every image in a directory, optionally as a mirrored
//! negative. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod runner;
pub mod services;

pub use tone_lut;
