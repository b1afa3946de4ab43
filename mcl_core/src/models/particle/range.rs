// mcl_core/src/models/particle/range.rs

use crate::context::WorldContext;
use crate::errors::ParticleError;
use crate::models::particle::Particle;
use crate::types::{Landmark, Pose};
use crate::utils::gaussian;
use rand::RngCore;

/// The default particle: planar unicycle motion with additive Gaussian noise
/// on the commanded heading change and travel distance, and a range-only
/// sensor measuring noisy Euclidean distances to known landmarks.
///
/// A fresh particle sits at the origin with zero heading, zero noise and no
/// stored measurements; the driver sets the three noise parameters before
/// the first update.
#[derive(Debug, Clone, Default)]
pub struct RangeParticle {
    pose: Pose,
    translational_noise: f64,
    angular_noise: f64,
    measurement_noise: f64,
    measurements: Vec<f64>,
}

impl RangeParticle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A particle starting from a known pose, e.g. when seeding the filter
    /// around an initial estimate.
    pub fn at(pose: Pose) -> Self {
        Self {
            pose,
            ..Self::default()
        }
    }

    fn distance_to_landmark(&self, landmark: &Landmark) -> f64 {
        nalgebra::distance(&self.pose.position(), &landmark.position())
    }
}

impl Particle for RangeParticle {
    fn set_translational_noise(&mut self, std_dev: f64) {
        self.translational_noise = std_dev;
    }

    fn set_angular_noise(&mut self, std_dev: f64) {
        self.angular_noise = std_dev;
    }

    fn set_measurement_noise(&mut self, std_dev: f64) {
        self.measurement_noise = std_dev;
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn measurements(&self) -> &[f64] {
        &self.measurements
    }

    fn motion_update(
        &mut self,
        rng: &mut dyn RngCore,
        heading_delta: f64,
        distance: f64,
        world: &WorldContext,
    ) -> Result<(), ParticleError> {
        if distance < 0.0 {
            return Err(ParticleError::NegativeDistance(distance));
        }

        // Angular noise first, then translational: the draw order is part of
        // the reproducible-stream contract.
        let heading = self.pose.heading + heading_delta + gaussian::sample(rng, 0.0, self.angular_noise);
        let actual_distance = distance + gaussian::sample(rng, 0.0, self.translational_noise);

        let moved = Pose {
            x: self.pose.x + heading.cos() * actual_distance,
            y: self.pose.y + heading.sin() * actual_distance,
            heading,
        };

        self.pose = moved.normalize(world.map_size());
        Ok(())
    }

    fn range_measure(
        &mut self,
        rng: &mut dyn RngCore,
        world: &WorldContext,
    ) -> Result<(), ParticleError> {
        let landmarks = world.landmarks();
        if landmarks.is_empty() {
            return Err(ParticleError::NoLandmarks);
        }

        // Noise is injected artificially: a real range sensor would not be
        // accurate either.
        let mut measurements = Vec::with_capacity(landmarks.len());
        for mark in landmarks {
            let distance =
                self.distance_to_landmark(mark) + gaussian::sample(rng, 0.0, self.measurement_noise);
            measurements.push(distance);
        }

        self.measurements = measurements;
        Ok(())
    }

    fn weight(&self, world: &WorldContext) -> Result<f64, ParticleError> {
        let landmarks = world.landmarks();
        if self.measurements.len() != landmarks.len() {
            return Err(ParticleError::MeasurementCountMismatch {
                measurements: self.measurements.len(),
                landmarks: landmarks.len(),
            });
        }

        if self.measurements.is_empty() {
            return Err(ParticleError::NoMeasurements);
        }

        // Caution: if a landmark coordinate is wrong, the product below is
        // silently biased. Landmarks are trusted ground truth.
        let mut probability = 1.0;
        for (mark, measurement) in landmarks.iter().zip(&self.measurements) {
            let true_distance = self.distance_to_landmark(mark);
            probability *= gaussian::density(true_distance, self.measurement_noise, *measurement);
        }

        Ok(probability)
    }
}
