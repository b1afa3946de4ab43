// mcl_core/src/models/particle/mod.rs

use crate::context::WorldContext;
use crate::errors::ParticleError;
use crate::types::Pose;
use dyn_clone::DynClone;
use rand::RngCore;
use std::fmt::Debug;

pub mod range;

// --- PARTICLE MODEL TRAIT ---
// One particle is one hypothesis of the robot's pose, carrying its own
// noise-affected state. The filter driver owns a population of these.
/// The capability set of a single particle: noisy motion, simulated range
/// measurement, and likelihood weighting against real sensor readings.
///
/// There is one concrete implementation today (`RangeParticle`); the trait
/// exists so alternative motion or measurement models can slot in without
/// touching the resampling driver. Implementations should be `Send + Sync`
/// so a driver may update disjoint particles from worker threads — each
/// worker must then bring its own random stream.
pub trait Particle: DynClone + Debug + Send + Sync {
    /// Standard deviation of the additive noise on commanded translation
    /// distance. Set once, before motion begins.
    fn set_translational_noise(&mut self, std_dev: f64);

    /// Standard deviation of the additive noise on commanded heading change.
    fn set_angular_noise(&mut self, std_dev: f64);

    /// Standard deviation of the additive noise on simulated range
    /// measurements; also the sensor sigma used when weighting.
    fn set_measurement_noise(&mut self, std_dev: f64);

    /// The particle's current pose hypothesis.
    fn pose(&self) -> Pose;

    /// The measurements recorded by the last `range_measure` call, in
    /// landmark order. Empty until the first measurement.
    fn measurements(&self) -> &[f64];

    /// Advances the pose by a commanded heading change and travel distance,
    /// with noise injected into both, then wraps the result onto the map.
    ///
    /// Consumes two draws from `rng`. Fails with
    /// [`ParticleError::NegativeDistance`] (pose untouched) when `distance`
    /// is negative: these robots cannot move backward.
    fn motion_update(
        &mut self,
        rng: &mut dyn RngCore,
        heading_delta: f64,
        distance: f64,
        world: &WorldContext,
    ) -> Result<(), ParticleError>;

    /// Simulates what this particle would measure: one noisy Euclidean
    /// distance per landmark, replacing any previously stored measurements.
    ///
    /// Consumes one draw per landmark. Fails with
    /// [`ParticleError::NoLandmarks`] (stored measurements untouched) when
    /// the world has no landmarks.
    fn range_measure(
        &mut self,
        rng: &mut dyn RngCore,
        world: &WorldContext,
    ) -> Result<(), ParticleError>;

    /// Scores how well the stored measurements match the true distances from
    /// this particle's pose to the landmarks: the product of per-landmark
    /// Gaussian likelihoods, as an unnormalized importance weight. The driver
    /// normalizes across the population before resampling.
    ///
    /// Fails with [`ParticleError::NoMeasurements`] before the first
    /// `range_measure`, or [`ParticleError::MeasurementCountMismatch`] when
    /// the landmark set changed size since then.
    fn weight(&self, world: &WorldContext) -> Result<f64, ParticleError>;
}

// This macro automatically generates the implementation of `Clone` for
// `Box<dyn Particle>`, which is how the driver duplicates particles during
// resampling. Copies are deep and independent.
dyn_clone::clone_trait_object!(Particle);
