// hostenv - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// No dependencies on the platform layer.

pub mod constants;
pub mod error;
pub mod logging;
