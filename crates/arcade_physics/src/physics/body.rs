//! Physics body model
//!
//! A body is a collidable rectangle tied to an entity. Creation attaches
//! the body components to the owner and fails if the owner is missing its
//! placement components — that is a caller bug, not a runtime condition.

use super::PhysicsError;
use crate::ecs::components::{BodyKind, BodyOffset, BodySize, ClippingInfo, Position, Velocity};
use crate::ecs::{Component, Entity, World};
use crate::foundation::math::Rect;

/// A collidable rectangle bound to an entity
#[derive(Debug, Clone, Copy)]
pub struct Body {
    entity: Entity,
    kind: BodyKind,
}

impl Body {
    /// Attach an immovable body to the entity
    pub fn new_static(world: &mut World, entity: Entity) -> Result<Self, PhysicsError> {
        Self::attach(world, entity, BodyKind::Static)
    }

    /// Attach a moving body to the entity
    ///
    /// Dynamic bodies additionally carry a [`Velocity`] component, created
    /// at zero.
    pub fn new_dynamic(world: &mut World, entity: Entity) -> Result<Self, PhysicsError> {
        let body = Self::attach(world, entity, BodyKind::Dynamic)?;
        world.add_component(entity, Velocity::default());
        Ok(body)
    }

    fn attach(world: &mut World, entity: Entity, kind: BodyKind) -> Result<Self, PhysicsError> {
        require::<Position>(world, entity)?;
        require::<ClippingInfo>(world, entity)?;

        world.add_component(entity, BodyOffset::default());
        world.add_component(entity, BodySize::default());
        world.add_component(entity, kind);

        let body = Self { entity, kind };
        body.reset(world)?;
        Ok(body)
    }

    /// The entity this body is attached to
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// Whether the body is static or dynamic
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Whether the body moves
    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    /// Reset the body to match the owner's current visual frame
    ///
    /// Sets the offset to (0, 0) and the size to the clip rectangle's
    /// width/height. Call whenever the owner's frame or clip changes.
    pub fn reset(&self, world: &mut World) -> Result<(), PhysicsError> {
        let clip = *world
            .get_component::<ClippingInfo>(self.entity)
            .ok_or_else(|| missing::<ClippingInfo>(self.entity))?;

        let offset = world
            .get_component_mut::<BodyOffset>(self.entity)
            .ok_or_else(|| missing::<BodyOffset>(self.entity))?;
        offset.x = 0.0;
        offset.y = 0.0;

        let size = world
            .get_component_mut::<BodySize>(self.entity)
            .ok_or_else(|| missing::<BodySize>(self.entity))?;
        size.width = clip.width as f32;
        size.height = clip.height as f32;

        Ok(())
    }

    /// Absolute AABB of the body: owner position + offset, sized by the
    /// body size
    pub fn aabb(&self, world: &World) -> Result<Rect, PhysicsError> {
        let position = world
            .get_component::<Position>(self.entity)
            .ok_or_else(|| missing::<Position>(self.entity))?;
        let offset = world
            .get_component::<BodyOffset>(self.entity)
            .ok_or_else(|| missing::<BodyOffset>(self.entity))?;
        let size = world
            .get_component::<BodySize>(self.entity)
            .ok_or_else(|| missing::<BodySize>(self.entity))?;

        Ok(Rect::new(
            position.x + offset.x,
            position.y + offset.y,
            size.width,
            size.height,
        ))
    }
}

fn require<T: Component>(world: &World, entity: Entity) -> Result<(), PhysicsError> {
    if world.has_component::<T>(entity) {
        Ok(())
    } else {
        Err(missing::<T>(entity))
    }
}

fn missing<T: Component>(entity: Entity) -> PhysicsError {
    PhysicsError::MissingComponent {
        entity,
        component: std::any::type_name::<T>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_owner(world: &mut World, x: f32, y: f32, width: i32, height: i32) -> Entity {
        let entity = world.create_entity();
        world.add_component(entity, Position { x, y });
        world.add_component(
            entity,
            ClippingInfo {
                x: 0,
                y: 0,
                width,
                height,
            },
        );
        entity
    }

    #[test]
    fn test_dynamic_body_attaches_components() {
        let mut world = World::new();
        let entity = spawn_owner(&mut world, 3.0, 4.0, 5, 6);

        let body = Body::new_dynamic(&mut world, entity).unwrap();

        assert!(body.is_dynamic());
        assert!(world.has_component::<Velocity>(entity));
        assert_eq!(
            world.get_component::<BodyKind>(entity),
            Some(&BodyKind::Dynamic)
        );
        assert_eq!(
            body.aabb(&world).unwrap(),
            Rect::new(3.0, 4.0, 5.0, 6.0)
        );
    }

    #[test]
    fn test_static_body_carries_no_velocity() {
        let mut world = World::new();
        let entity = spawn_owner(&mut world, 0.0, 0.0, 2, 2);

        let body = Body::new_static(&mut world, entity).unwrap();

        assert!(!body.is_dynamic());
        assert!(!world.has_component::<Velocity>(entity));
    }

    #[test]
    fn test_missing_position_is_a_configuration_error() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(
            entity,
            ClippingInfo {
                x: 0,
                y: 0,
                width: 2,
                height: 2,
            },
        );

        let result = Body::new_dynamic(&mut world, entity);
        assert!(matches!(
            result,
            Err(PhysicsError::MissingComponent { .. })
        ));
    }

    #[test]
    fn test_reset_follows_clip_changes() {
        let mut world = World::new();
        let entity = spawn_owner(&mut world, 0.0, 0.0, 4, 4);
        let body = Body::new_dynamic(&mut world, entity).unwrap();

        world.get_component_mut::<ClippingInfo>(entity).unwrap().width = 9;
        world.get_component_mut::<BodyOffset>(entity).unwrap().x = 2.0;
        body.reset(&mut world).unwrap();

        let size = world.get_component::<BodySize>(entity).unwrap();
        let offset = world.get_component::<BodyOffset>(entity).unwrap();
        assert_eq!(size.width, 9.0);
        assert_eq!(offset.x, 0.0);
    }
}
