// mcl_core/src/config.rs

use serde::Deserialize;

use crate::context::WorldContext;
use crate::models::particle::Particle;
use crate::types::Landmark;

// =========================================================================
// == Run Configuration ==
// These map directly to the sections of a scenario file. The core does no
// file I/O itself; the driver deserializes (e.g. from TOML) and hands the
// resulting structs in.
// =========================================================================

/// Configuration for one localization run: the map, the landmark layout and
/// an optional seed for the noise stream.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)] // Fail if the scenario has fields not in our struct
pub struct WorldConfig {
    /// Side length of the square toroidal map.
    pub map_size: f64,
    /// Optional seed for the pseudo-random number generator for determinism.
    pub seed: Option<u64>,
    /// Landmark positions as `[x, y]` pairs, in measurement order.
    #[serde(default)]
    pub landmarks: Vec<[f64; 2]>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_size: 100.0,
            seed: None,
            landmarks: Vec::new(),
        }
    }
}

impl WorldConfig {
    /// Builds the runtime context this configuration describes.
    pub fn to_context(&self) -> WorldContext {
        let landmarks = self
            .landmarks
            .iter()
            .map(|&[x, y]| Landmark::new(x, y))
            .collect();
        WorldContext::with_landmarks(self.map_size, landmarks)
    }
}

/// The three standard deviations of a particle's noise model.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseConfig {
    /// Additive noise on commanded translation distance.
    pub translational_stddev: f64,
    /// Additive noise on commanded heading change.
    pub angular_stddev: f64,
    /// Additive noise on simulated range measurements.
    pub measurement_stddev: f64,
}

impl NoiseConfig {
    /// Applies all three standard deviations to a particle. Called once per
    /// particle before the simulation starts moving it.
    pub fn apply(&self, particle: &mut dyn Particle) {
        particle.set_translational_noise(self.translational_stddev);
        particle.set_angular_noise(self.angular_stddev);
        particle.set_measurement_noise(self.measurement_stddev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::particle::range::RangeParticle;
    use crate::models::particle::Particle as _;
    use crate::rng::SimulationRng;

    #[test]
    fn world_config_parses_from_toml() {
        let config: WorldConfig = toml::from_str(
            r#"
            map_size = 100.0
            seed = 7
            landmarks = [[20.0, 20.0], [80.0, 20.0], [50.0, 80.0]]
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        let world = config.to_context();
        assert_eq!(world.map_size(), 100.0);
        assert_eq!(world.landmarks().len(), 3);
        assert_eq!(world.landmarks()[2], Landmark::new(50.0, 80.0));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<WorldConfig, _> = toml::from_str("map_size = 10.0\nwidth = 3.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn noise_config_applies_to_a_particle() {
        let noise: NoiseConfig = toml::from_str(
            r#"
            translational_stddev = 0.5
            angular_stddev = 0.05
            measurement_stddev = 2.0
            "#,
        )
        .unwrap();

        let mut particle = RangeParticle::new();
        noise.apply(&mut particle);

        // Indirect check through behavior: a measurement with sigma 2.0 is
        // noisy, so two measurements of the same landmark differ.
        let mut world = WorldContext::new(100.0);
        world.add_landmark(Landmark::new(3.0, 4.0));
        let mut rng = SimulationRng::seeded(1);

        particle.range_measure(&mut rng, &world).unwrap();
        let first = particle.measurements()[0];
        particle.range_measure(&mut rng, &world).unwrap();
        assert_ne!(particle.measurements()[0], first);
    }
}
