//! Substepped collision detection and resolution
//!
//! One `run` per simulation tick. The worst-case displacement across all
//! dynamic bodies is halved until a single substep moves at most one grid
//! unit, bounding tunneling for this discrete integrator. Each substep
//! advances every non-collided dynamic body and tests the cross product of
//! every registered collision set; a separating overlap rolls the offending
//! substep back for both sides and freezes them for the rest of the tick.
//!
//! Separation is approximate: with more than two simultaneously overlapping
//! bodies, a later rollback can reintroduce an earlier penetration. That is
//! a documented limitation of the projection method, not something this
//! system tries to patch.

use super::{CollisionMode, PhysicsError, PhysicsWorld};
use crate::ecs::components::{BodyKind, BodyOffset, BodySize, ObjectId, Position, Velocity};
use crate::ecs::{Entity, World};
use crate::foundation::math::{Rect, Vec2};
use std::collections::HashMap;

/// Working record for one body during a resolution pass
///
/// Holds the absolute (offset-included) projected position; nothing here is
/// authoritative until the commit step writes it back.
struct CollisionBody {
    entity: Entity,
    position: Vec2,
    width: f32,
    height: f32,

    /// Scaled to the per-substep displacement before the substep loop
    velocity: Vec2,

    is_dynamic: bool,
    collided: bool,
}

impl CollisionBody {
    fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Stop advancing for the rest of the tick and undo the most recent
    /// substep displacement
    fn mark_collided(&mut self) {
        if !self.is_dynamic {
            return;
        }
        self.step_back();
        self.collided = true;
    }

    fn step_forward(&mut self) {
        if !self.collided {
            let velocity = self.velocity;
            self.step(velocity);
        }
    }

    fn step_back(&mut self) {
        if !self.collided {
            let velocity = -self.velocity;
            self.step(velocity);
        }
    }

    fn step(&mut self, displacement: Vec2) {
        if !self.is_dynamic {
            return;
        }
        self.position += displacement;
    }
}

/// Halve the worst-case displacement until a substep moves at most one
/// grid unit, doubling the substep count to match
fn derive_substeps(mut distance: f32) -> (f32, u32) {
    let mut count = 1;
    while distance > 1.0 {
        distance /= 2.0;
        count *= 2;
    }
    (distance, count)
}

/// Mutably borrow two distinct records at once
fn pair_mut(
    records: &mut [CollisionBody],
    a: usize,
    b: usize,
) -> (&mut CollisionBody, &mut CollisionBody) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = records.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = records.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Per-tick integration and resolution engine
///
/// Keeps its working-record buffers between ticks; not reentrant, and must
/// only be driven from the simulation thread.
pub struct CollisionSystem {
    records: Vec<CollisionBody>,
    by_object: HashMap<ObjectId, usize>,
}

impl CollisionSystem {
    /// Create a new collision system
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_object: HashMap::new(),
        }
    }

    /// Run one resolution pass over every physics-eligible entity
    ///
    /// `delta_seconds` is caller supplied and may vary per call. Errors if
    /// a registered collision set names an object with no physics record.
    pub fn run(
        &mut self,
        world: &mut World,
        physics: &mut PhysicsWorld,
        delta_seconds: f32,
    ) -> Result<(), PhysicsError> {
        self.gather(world);

        let mut max_velocity: f32 = 0.0;
        for record in &self.records {
            if record.is_dynamic {
                max_velocity = max_velocity
                    .max(record.velocity.x.abs())
                    .max(record.velocity.y.abs());
            }
        }

        // Nothing is moving, nothing to collide.
        if max_velocity == 0.0 {
            return Ok(());
        }

        let (step_distance, substeps) = derive_substeps(max_velocity * delta_seconds);
        log::trace!(
            "resolving tick in {} substeps ({} units per substep)",
            substeps,
            step_distance
        );

        for record in &mut self.records {
            if record.is_dynamic {
                record.velocity = (record.velocity / substeps as f32) * delta_seconds;
            }
        }

        for _ in 0..substeps {
            for record in &mut self.records {
                record.step_forward();
            }

            for set in physics.collision_sets_mut().iter_mut() {
                for ai in 0..set.objects_a().len() {
                    let a_id = set.objects_a()[ai];
                    let ia = *self
                        .by_object
                        .get(&a_id)
                        .ok_or(PhysicsError::UnknownObject(a_id))?;

                    for bi in 0..set.objects_b().len() {
                        let b_id = set.objects_b()[bi];
                        let ib = *self
                            .by_object
                            .get(&b_id)
                            .ok_or(PhysicsError::UnknownObject(b_id))?;

                        if a_id == b_id {
                            continue;
                        }

                        let (record_a, record_b) = pair_mut(&mut self.records, ia, ib);
                        if !record_a.is_dynamic && !record_b.is_dynamic {
                            continue;
                        }

                        if record_a.bounds().intersects(&record_b.bounds()) {
                            if set.mode() == CollisionMode::DetectAndSeparate {
                                record_a.mark_collided();
                                record_b.mark_collided();
                            }

                            set.fire(a_id, b_id);
                        }
                    }
                }
            }
        }

        let bounds = physics.bounds();
        for record in &self.records {
            if !record.is_dynamic {
                continue;
            }
            let Some(position) = world.get_component_mut::<Position>(record.entity) else {
                continue;
            };

            // Commit an axis only if the body actually moved on it.
            if record.velocity.x != 0.0 {
                position.x = record.position.x;
            }
            if record.velocity.y != 0.0 {
                position.y = record.position.y;
            }

            if position.x < 0.0 {
                position.x = 0.0;
            }
            if position.y < 0.0 {
                position.y = 0.0;
            }
            if position.x + record.width > bounds.right() {
                position.x = bounds.right() - record.width;
            }
            if position.y + record.height > bounds.bottom() {
                position.y = bounds.bottom() - record.height;
            }
        }

        Ok(())
    }

    /// Build the working records from entities carrying the full physics
    /// component set
    fn gather(&mut self, world: &World) {
        self.records.clear();
        self.by_object.clear();

        for &entity in world.entities() {
            let Some(&id) = world.get_component::<ObjectId>(entity) else {
                continue;
            };
            let Some(position) = world.get_component::<Position>(entity) else {
                continue;
            };
            let Some(offset) = world.get_component::<BodyOffset>(entity) else {
                continue;
            };
            let Some(size) = world.get_component::<BodySize>(entity) else {
                continue;
            };
            let Some(&kind) = world.get_component::<BodyKind>(entity) else {
                continue;
            };

            let is_dynamic = kind == BodyKind::Dynamic;
            let velocity = if is_dynamic {
                world
                    .get_component::<Velocity>(entity)
                    .map_or_else(Vec2::zeros, |v| v.value)
            } else {
                Vec2::zeros()
            };

            self.by_object.insert(id, self.records.len());
            self.records.push(CollisionBody {
                entity,
                position: Vec2::new(position.x + offset.x, position.y + offset.y),
                width: size.width,
                height: size.height,
                velocity,
                is_dynamic,
                collided: false,
            });
        }
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}
