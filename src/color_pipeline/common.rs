//! Common utilities module
//!
//! This module contains shared utilities used across the color pipeline.

pub mod error;

pub use error::{EditorError, Result};
