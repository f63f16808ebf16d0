//! ECS Components module
//!
//! Contains the component types the physics core reads and writes.

pub mod body;
pub mod transform;

pub use body::{BodyKind, BodyOffset, BodySize, Velocity};
pub use transform::{ClippingInfo, ObjectId, Position};
