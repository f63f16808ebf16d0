//! Arcade physics
//!
//! AABB-only collision detection and separation using the projection
//! method. Fast and suitable for arcade-style games, but it lacks
//! stability when many bodies rest against each other: the separation
//! that stops two bodies penetrating may create a new penetration against
//! a different body. Use a full rigid-body solver if you need more.

pub mod body;
pub mod collision_set;
pub mod collision_system;
pub mod world;

pub use body::Body;
pub use collision_set::{CollideCallback, CollisionMode, CollisionSet, ProcessCallback};
pub use collision_system::CollisionSystem;
pub use world::PhysicsWorld;

use crate::config::WorldConfig;
use crate::ecs::components::ObjectId;
use crate::ecs::{Entity, World};
use thiserror::Error;

/// Physics errors
///
/// Steady-state resolution has no recoverable runtime errors; everything
/// here signals a caller bug and is surfaced immediately.
#[derive(Error, Debug)]
pub enum PhysicsError {
    /// A body was requested on an entity lacking a required component
    #[error("entity {entity:?} is missing required component {component}")]
    MissingComponent {
        /// The offending entity
        entity: Entity,
        /// Name of the absent component type
        component: &'static str,
    },

    /// A registered collision set names an object with no physics record
    #[error("collision set references unknown object {0:?}")]
    UnknownObject(ObjectId),
}

/// Facade over the physics world and the resolution engine
///
/// Owns the [`PhysicsWorld`] and a [`CollisionSystem`], and exposes the
/// registration surface the scene layer drives: body creation, collision
/// set registration, and the per-tick [`resolve`](Self::resolve) entry
/// point. Not reentrant — registering bodies or sets from inside a
/// collision callback is not supported.
pub struct ArcadePhysics {
    world: PhysicsWorld,
    collision_system: CollisionSystem,
}

impl ArcadePhysics {
    /// Create a physics system with the given world configuration
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            world: PhysicsWorld::new(config),
            collision_system: CollisionSystem::new(),
        }
    }

    /// The physics world
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    /// The physics world, mutably
    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    /// Attach a static body to the entity and add it to the world
    pub fn add_static_body(&mut self, world: &mut World, entity: Entity) -> Result<Body, PhysicsError> {
        let body = Body::new_static(world, entity)?;
        self.world.add_body(world, body)?;
        Ok(body)
    }

    /// Attach a dynamic body to the entity and add it to the world
    pub fn add_dynamic_body(&mut self, world: &mut World, entity: Entity) -> Result<Body, PhysicsError> {
        let body = Body::new_dynamic(world, entity)?;
        self.world.add_body(world, body)?;
        Ok(body)
    }

    /// Register a collision set
    pub fn add_collision_set(&mut self, set: CollisionSet) {
        self.world.add_collision_set(set);
    }

    /// Run one resolution pass
    ///
    /// Invoke synchronously once per simulation tick, after game-level
    /// update logic and before rendering.
    pub fn resolve(&mut self, world: &mut World, delta_seconds: f32) -> Result<(), PhysicsError> {
        self.collision_system.run(world, &mut self.world, delta_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{ClippingInfo, Position, Velocity};
    use crate::foundation::math::Vec2;

    #[test]
    fn test_facade_round_trip() {
        let mut world = World::new();
        let mut physics = ArcadePhysics::new(&WorldConfig::default());

        let entity = world.create_entity();
        world.add_component(entity, Position { x: 0.0, y: 0.0 });
        world.add_component(
            entity,
            ClippingInfo {
                x: 0,
                y: 0,
                width: 4,
                height: 4,
            },
        );
        world.add_component(entity, ObjectId(1));

        physics.add_dynamic_body(&mut world, entity).unwrap();
        world.get_component_mut::<Velocity>(entity).unwrap().value = Vec2::new(4.0, 0.0);

        physics.resolve(&mut world, 0.25).unwrap();

        let position = world.get_component::<Position>(entity).unwrap();
        assert_eq!(position.x, 1.0);
        assert_eq!(physics.world().bodies().len(), 1);
    }
}
