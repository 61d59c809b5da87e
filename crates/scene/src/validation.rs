//! Sanity checks for the body tables.
//!
//! The tables are compile-time constants, so a violation is a programming
//! error; binaries run this once at startup and treat failure as fatal.

use std::f64::consts::TAU;

use thiserror::Error;

use crate::bodies::{self, TILT_SPEED};

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("orbit radius of planet {index} ({radius}) does not exceed the previous one ({previous})")]
    OrbitRadiiNotIncreasing {
        index: usize,
        radius: f64,
        previous: f64,
    },
    #[error("angular speed of planet {index} is {speed}, outside (0, 2π)")]
    SpeedOutOfRange { index: usize, speed: f64 },
    #[error("tilt speed is {speed}, outside (0, 360)")]
    TiltSpeedOutOfRange { speed: f64 },
}

/// Check that the constant tables describe a well-formed system: strictly
/// increasing orbit radii and per-tick speeds small enough that the one-sided
/// wraparound in `advance` cannot be skipped over.
pub fn validate_tables() -> Result<(), TableError> {
    let params = bodies::planet_params();
    let mut previous: Option<f64> = None;
    for (index, p) in params.iter().enumerate() {
        if let Some(prev) = previous {
            if p.orbit_radius <= prev {
                return Err(TableError::OrbitRadiiNotIncreasing {
                    index,
                    radius: p.orbit_radius,
                    previous: prev,
                });
            }
        }
        previous = Some(p.orbit_radius);

        if p.angular_speed <= 0.0 || p.angular_speed >= TAU {
            return Err(TableError::SpeedOutOfRange {
                index,
                speed: p.angular_speed,
            });
        }
    }

    if TILT_SPEED <= 0.0 || TILT_SPEED >= 360.0 {
        return Err(TableError::TiltSpeedOutOfRange { speed: TILT_SPEED });
    }

    tracing::debug!(planets = params.len(), "body tables validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_valid() {
        assert_eq!(validate_tables(), Ok(()));
    }
}
