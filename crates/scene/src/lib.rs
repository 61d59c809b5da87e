//! Scene State & Animator: the bodies of the toy system and the fixed-step
//! tick that moves them.
//!
//! # Invariants
//! - `advance` leaves every planet angle in `[0, 2π)` and the tilt in `[0, 360)`.
//! - Scene state mutates only through `advance`; rendering reads, never writes.
//! - The body tables are compile-time constants; nothing changes them at runtime.

pub mod bodies;
pub mod state;
pub mod ticker;
pub mod validation;

pub use state::{Planet, SceneState};
pub use ticker::FixedTicker;

pub fn crate_info() -> &'static str {
    "orrery-scene v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("scene"));
    }
}
