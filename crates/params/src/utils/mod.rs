//! Constants shared by the symmetric helpers

pub mod hash;
