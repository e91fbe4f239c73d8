use glam::Vec2;

use crate::components::Axis;

pub const PHYSICS_DT: f32 = 1.0 / 60.0;
/// Pixels per second squared, y down.
pub const GRAVITY: Vec2 = Vec2::new(0.0, 600.0);
/// Extra overlap tolerated beyond the distance travelled in a step.
pub const OVERLAP_BIAS: f32 = 4.0;
/// Steps a body must stay below its minimum velocity before it sleeps.
pub const SLEEP_STEPS: u32 = 60;

/// Order in which the two axes are separated each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrder {
    XThenY,
    YThenX,
}

impl AxisOrder {
    pub fn axes(self) -> [Axis; 2] {
        match self {
            AxisOrder::XThenY => [Axis::X, Axis::Y],
            AxisOrder::YThenX => [Axis::Y, Axis::X],
        }
    }
}

/// Tunables for [`physics_step`](crate::systems::physics_step).
#[derive(Debug, Clone, Copy)]
pub struct WorldConfig {
    pub dt: f32,
    pub gravity: Vec2,
    pub overlap_bias: f32,
    pub axis_order: AxisOrder,
    /// 0 disables sleeping.
    pub sleep_steps: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            dt: PHYSICS_DT,
            gravity: GRAVITY,
            overlap_bias: OVERLAP_BIAS,
            axis_order: AxisOrder::XThenY,
            sleep_steps: SLEEP_STEPS,
        }
    }
}
