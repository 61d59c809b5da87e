//! Renderer-agnostic frame composition.
//!
//! # Invariants
//! - Frame building never mutates scene state.
//! - A frame is an ordered command sequence: clear, Sun, then per planet an
//!   orbit ring followed by the planet itself, innermost first.
//! - Every command carries its own model matrix; no shared transform is
//!   threaded between draws.

mod frame;
mod renderer;

pub use frame::{build_frame, DrawCmd, CLEAR_COLOR};
pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "orrery-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
