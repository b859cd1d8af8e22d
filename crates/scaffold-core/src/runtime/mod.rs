//! External tool management
//!
//! This module provides:
//! - Dart formatter selection and detached invocation

pub mod formatter;

pub use formatter::{spawn_first, Formatter};
