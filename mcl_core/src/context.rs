// mcl_core/src/context.rs

use crate::types::Landmark;

/// The original simulator kept the map size and the landmark list as
/// process-wide globals. This struct replaces them with an explicit context
/// that the driver builds once per run and passes into every particle
/// operation. Same single-config-per-run semantics, no hidden mutation.
#[derive(Debug, Clone)]
pub struct WorldContext {
    /// Side length of the square toroidal map. Read-only during a run.
    map_size: f64,
    /// Known landmark positions, populated by the driver before the first
    /// measurement call. Index order is significant: `weight` pairs stored
    /// measurements with landmarks by index.
    landmarks: Vec<Landmark>,
}

impl WorldContext {
    /// An empty world with the given map size and no landmarks yet.
    pub fn new(map_size: f64) -> Self {
        Self {
            map_size,
            landmarks: Vec::new(),
        }
    }

    pub fn with_landmarks(map_size: f64, landmarks: Vec<Landmark>) -> Self {
        Self { map_size, landmarks }
    }

    pub fn map_size(&self) -> f64 {
        self.map_size
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Adds one landmark. Order of insertion is the order measurements are
    /// taken and weighted in.
    pub fn add_landmark(&mut self, landmark: Landmark) {
        self.landmarks.push(landmark);
    }
}

impl Default for WorldContext {
    fn default() -> Self {
        // The classic 100 x 100 teaching map.
        Self::new(100.0)
    }
}
