//! Physics body components

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// The body rectangle's offset relative to its owner's [`super::Position`]
///
/// Reset to (0, 0) whenever the owner's visual frame changes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyOffset {
    /// Horizontal offset
    pub x: f32,

    /// Vertical offset
    pub y: f32,
}

impl Component for BodyOffset {}

/// The body rectangle's extents
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodySize {
    /// Width of the body, >= 0
    pub width: f32,

    /// Height of the body, >= 0
    pub height: f32,
}

impl Component for BodySize {}

/// Whether a body moves
///
/// Immutable after body creation; the resolution engine branches on this
/// tag instead of dispatching through a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// The body never moves and never carries a velocity
    Static,

    /// The body moves under its velocity each tick
    Dynamic,
}

impl Component for BodyKind {}

/// Velocity of a dynamic body in units per second
///
/// Present only on dynamic bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// The velocity's value
    pub value: Vec2,
}

impl Default for Velocity {
    fn default() -> Self {
        Self {
            value: Vec2::zeros(),
        }
    }
}

impl Component for Velocity {}
