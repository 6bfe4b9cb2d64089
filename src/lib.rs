//! Cube console - query and draft tool for Card Conjurer cubes
//!
//! Loads a cube exported from the Card Conjurer design tool and provides a
//! line-oriented console for narrowing queries, deck building, and running
//! single-player draft sessions.

pub mod core;
pub mod display;
pub mod error;
pub mod loader;
pub mod repl;
pub mod repository;

pub use error::{CubeError, Result};
