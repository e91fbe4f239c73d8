use crate::components::Axis;

use super::probe::CollisionInfo;

/// Which velocity rule a separation applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityBranch {
    /// Neither body moving: both stop.
    AtRest,
    /// Mass-weighted exchange between two movable bodies.
    Exchange,
    /// Exchange with equal masses (no square root).
    ExchangeEqualMass,
    /// Moving body against an immovable one.
    WallBounce,
    /// Moving body against a rideable immovable one.
    Ride,
    /// Resting movable body against an immovable one.
    Pressed,
}

/// Hook called at fixed points of a separation. All methods default to no-ops.
pub trait SeparationObserver {
    fn probed(&mut self, _axis: Axis, _info: &CollisionInfo) {}
    fn branch(&mut self, _axis: Axis, _branch: VelocityBranch) {}
    fn resolved(&mut self, _axis: Axis, _v1: f32, _v2: f32) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SeparationObserver for NoopObserver {}

/// Forwards every hook to the `log` facade at trace level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SeparationObserver for LogObserver {
    fn probed(&mut self, axis: Axis, info: &CollisionInfo) {
        log::trace!(
            "[separate {}] overlap={:.3} face={:?} intersects={} shares=({:.3}, {:.3})",
            axis.name(),
            info.overlap,
            info.face,
            info.intersects,
            info.share1,
            info.share2
        );
    }

    fn branch(&mut self, axis: Axis, branch: VelocityBranch) {
        log::trace!("[separate {}] branch={:?}", axis.name(), branch);
    }

    fn resolved(&mut self, axis: Axis, v1: f32, v2: f32) {
        log::trace!("[separate {}] v1={:.3} v2={:.3}", axis.name(), v1, v2);
    }
}

impl<O: SeparationObserver + ?Sized> SeparationObserver for &mut O {
    fn probed(&mut self, axis: Axis, info: &CollisionInfo) {
        (**self).probed(axis, info);
    }

    fn branch(&mut self, axis: Axis, branch: VelocityBranch) {
        (**self).branch(axis, branch);
    }

    fn resolved(&mut self, axis: Axis, v1: f32, v2: f32) {
        (**self).resolved(axis, v1, v2);
    }
}

/// Records every hook call, for tests that assert on the branch taken.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub probes: Vec<CollisionInfo>,
    pub branches: Vec<VelocityBranch>,
    pub resolved: Vec<(f32, f32)>,
}

#[cfg(test)]
impl SeparationObserver for Recorder {
    fn probed(&mut self, _axis: Axis, info: &CollisionInfo) {
        self.probes.push(*info);
    }

    fn branch(&mut self, _axis: Axis, branch: VelocityBranch) {
        self.branches.push(branch);
    }

    fn resolved(&mut self, _axis: Axis, v1: f32, v2: f32) {
        self.resolved.push((v1, v2));
    }
}
