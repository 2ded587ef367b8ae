//! Public API for the particle-bitmap crate.
//!
//! This module provides the high-level API: [`BitmapEncoder`] builder and
//! [`BitmapError`] unified error type.

mod builder;
mod error;

pub use builder::BitmapEncoder;
pub use error::BitmapError;
