// mcl_core/src/errors.rs

use thiserror::Error;

/// Validation failures raised by particle operations.
///
/// All of these are local, synchronous and recoverable: the driver decides
/// whether to skip the particle, abort the simulation step, or treat the
/// error as a programming mistake. The core itself never logs, retries or
/// panics on them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParticleError {
    /// The robots modeled here cannot move backward.
    #[error("robot cannot move backward (commanded distance {0})")]
    NegativeDistance(f64),

    /// A range measurement was requested against an empty landmark set.
    #[error("no landmarks provided for measurement")]
    NoLandmarks,

    /// Weighting requires one stored measurement per landmark, in the same
    /// order the landmarks were measured in.
    #[error("{measurements} stored measurements do not match {landmarks} landmarks")]
    MeasurementCountMismatch {
        measurements: usize,
        landmarks: usize,
    },

    /// Weighting was requested before any range measurement was taken.
    #[error("no measurement taken yet")]
    NoMeasurements,
}
