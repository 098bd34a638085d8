//! Error handling for ecdhe operations

mod types;

pub use types::{Error, Result};
