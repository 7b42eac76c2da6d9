//! CLI command implementations.

pub mod common;
pub mod replay;
pub mod run;
pub mod sweep;
pub mod version;
