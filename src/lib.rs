//! Axis-aligned, arcade-style 2D collision separation.
//!
//! Bodies are boxes stored as [`components::Body`] components in a
//! [`hecs::World`]. Each step, [`systems::physics_step`] integrates them,
//! finds overlapping pairs, and hands each pair to a [`systems::Separator`]
//! per axis (X then Y by default), which pushes the bodies apart and
//! exchanges their velocities.

pub mod components;
pub mod config;
pub mod scene;
pub mod systems;
