//! Particle News
//!
//! Converts news articles and images into particle documents for small
//! 1-bit viewers. Images are encoded by the `particle-bitmap` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
