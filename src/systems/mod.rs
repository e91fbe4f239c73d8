mod collision;
mod observer;
mod physics;
mod probe;

pub use collision::Separator;
pub use observer::{LogObserver, NoopObserver, SeparationObserver, VelocityBranch};
pub use physics::{physics_step, physics_step_with, physics_system, StepReport};
pub use probe::{intersects, measure, penetrates, CollisionInfo};
