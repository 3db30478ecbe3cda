//! Command implementations

pub mod check;
pub(crate) mod common;
pub mod migrate;
pub mod path;
pub mod status;
