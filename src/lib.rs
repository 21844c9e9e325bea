//! Aeroacoustic evaluation and design-space search for bio-inspired UAV
//! propellers.
//!
//! The library crates model the physics (noise, thrust, feature
//! modifiers); this root crate orchestrates them into the pure evaluation
//! pipeline and the feature-sweep optimizer, so multiple front-ends (CLI,
//! reports) can share the same logic.

pub mod evaluate;
pub mod optimize;
pub mod scenario;

pub use aeroprop_bio as bio;
pub use aeroprop_config as config;
pub use aeroprop_design as design;
pub use aeroprop_export as export;
pub use aeroprop_metrics as metrics;
pub use aeroprop_noise as noise;
pub use aeroprop_thrust as thrust;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
