// mcl_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::models::particle::Particle;

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::context::WorldContext;
pub use crate::errors::ParticleError;
pub use crate::types::{Landmark, Pose};

// --- Concrete Model Implementations (Export common ones for convenience) ---
pub use crate::models::particle::range::RangeParticle;

// --- Run Plumbing ---
pub use crate::config::{NoiseConfig, WorldConfig};
pub use crate::rng::SimulationRng;
