// mcl_core/src/lib.rs

// This file defines the public modules of your library.
pub mod config;
pub mod context;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod rng;
pub mod types;
pub mod utils;
