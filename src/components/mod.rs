mod axis;
mod blocked;
mod physics;

pub use axis::{Axis, Face};
pub use blocked::Blocked;
pub use physics::{Body, BodyType, DEFAULT_MIN_VELOCITY};

/// Human-readable label for an entity, used by the CLI report.
pub struct Name(pub &'static str);
