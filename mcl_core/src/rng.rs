// mcl_core/src/rng.rs

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A newtype wrapper around `ChaCha8Rng`: the central, deterministic
/// pseudo-random number generator for a simulation run.
///
/// The original simulator drew noise from an implicit global generator. Here
/// the stream is explicit and injectable: every noise-consuming operation
/// takes `&mut dyn RngCore`, so tests can seed a stream per run and a driver
/// updating particles in parallel can hand each worker its own stream instead
/// of racing on a shared one.
pub struct SimulationRng(pub ChaCha8Rng);

impl SimulationRng {
    /// A deterministic stream. Two runs with the same seed and the same call
    /// sequence produce identical noise.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A fresh stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl RngCore for SimulationRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
