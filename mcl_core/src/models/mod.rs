// mcl_core/src/models/mod.rs

pub mod particle;
