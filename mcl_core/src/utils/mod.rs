// mcl_core/src/utils/mod.rs

pub mod gaussian;
