//! Physics world
//!
//! Owns the world bounds, the quadtree, the body list, and the registered
//! collision sets. Bounds grow monotonically as bodies are added; they
//! never shrink.

use super::{Body, CollisionSet, PhysicsError};
use crate::config::WorldConfig;
use crate::ecs::{Entity, World};
use crate::foundation::math::Rect;
use crate::spatial::QuadTree;

/// The physics world: bounds, spatial index, bodies, and collision sets
pub struct PhysicsWorld {
    bounds: Rect,
    tree: QuadTree,
    bodies: Vec<Body>,
    collision_sets: Vec<CollisionSet>,
}

impl PhysicsWorld {
    /// Create a world seeded with the configured initial dimensions
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, config.initial_width, config.initial_height),
            tree: QuadTree::new(
                config.initial_width,
                config.initial_height,
                config.tree.clone(),
            ),
            bodies: Vec::new(),
            collision_sets: Vec::new(),
        }
    }

    /// The current world bounds
    ///
    /// The resolution engine clamps committed dynamic positions to this
    /// rectangle at the end of each tick.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// All bodies added so far
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Add a body to the world
    ///
    /// Inserts the body's absolute AABB into the quadtree (growing the
    /// region on demand) and extends the world bounds to cover the body.
    pub fn add_body(&mut self, world: &World, body: Body) -> Result<(), PhysicsError> {
        let aabb = body.aabb(world)?;

        self.tree.insert(body.entity(), aabb);

        if aabb.right() > self.bounds.right() {
            self.bounds.width = aabb.right() - self.bounds.x;
        }
        if aabb.bottom() > self.bounds.bottom() {
            self.bounds.height = aabb.bottom() - self.bounds.y;
        }

        self.bodies.push(body);
        Ok(())
    }

    /// Register a collision set
    pub fn add_collision_set(&mut self, set: CollisionSet) {
        self.collision_sets.push(set);
    }

    /// The registered collision sets
    pub fn collision_sets(&self) -> &[CollisionSet] {
        &self.collision_sets
    }

    pub(crate) fn collision_sets_mut(&mut self) -> &mut [CollisionSet] {
        &mut self.collision_sets
    }

    /// Broad-phase query: candidate bodies whose cells overlap the rect
    ///
    /// A coarse filter; callers must still run exact AABB intersection
    /// tests against the candidates.
    pub fn query(&self, bounds: &Rect) -> Vec<Entity> {
        self.tree.query(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{ClippingInfo, Position};

    fn spawn_body(world: &mut World, physics: &mut PhysicsWorld, x: f32, y: f32, size: i32) -> Body {
        let entity = world.create_entity();
        world.add_component(entity, Position { x, y });
        world.add_component(
            entity,
            ClippingInfo {
                x: 0,
                y: 0,
                width: size,
                height: size,
            },
        );
        let body = Body::new_static(world, entity).unwrap();
        physics.add_body(world, body).unwrap();
        body
    }

    fn small_world() -> PhysicsWorld {
        let config = WorldConfig {
            initial_width: 10.0,
            initial_height: 10.0,
            ..WorldConfig::default()
        };
        PhysicsWorld::new(&config)
    }

    #[test]
    fn test_bounds_grow_to_cover_inserted_body() {
        let mut world = World::new();
        let mut physics = small_world();

        let body = spawn_body(&mut world, &mut physics, 25.0, 3.0, 4);

        assert!(physics.bounds().right() >= 29.0);
        assert_eq!(physics.bounds().bottom(), 10.0);

        let aabb = body.aabb(&world).unwrap();
        assert!(physics.query(&aabb).contains(&body.entity()));
    }

    #[test]
    fn test_bounds_never_shrink() {
        let mut world = World::new();
        let mut physics = small_world();

        spawn_body(&mut world, &mut physics, 25.0, 3.0, 4);
        let grown = physics.bounds();

        spawn_body(&mut world, &mut physics, 1.0, 1.0, 2);
        assert_eq!(physics.bounds(), grown);
    }

    #[test]
    fn test_body_inside_initial_bounds_leaves_them_unchanged() {
        let mut world = World::new();
        let mut physics = small_world();

        spawn_body(&mut world, &mut physics, 1.0, 1.0, 2);

        assert_eq!(physics.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(physics.bodies().len(), 1);
    }
}
