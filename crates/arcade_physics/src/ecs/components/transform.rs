//! Placement and identity components shared with the scene layer

use crate::ecs::Component;

/// World-space anchor of an entity
///
/// Mutated only by the resolution engine's commit step; read by everything
/// else.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    /// The x coordinate
    pub x: f32,

    /// The y coordinate
    pub y: f32,
}

impl Component for Position {}

/// The entity's current visual clip rectangle
///
/// Describes the region of the owner's graphic currently shown. Body resets
/// copy its width/height so the collider always matches the rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClippingInfo {
    /// The x coordinate of the region
    pub x: i32,

    /// The y coordinate of the region
    pub y: i32,

    /// The width of the region
    pub width: i32,

    /// The height of the region
    pub height: i32,
}

impl Component for ClippingInfo {}

/// Stable identifier of the owning game object
///
/// Assigned by the scene layer and used as the correlation key passed to
/// collision callbacks, so callback lifetime stays independent of entity
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

impl Component for ObjectId {}
