//! # Arcade Physics
//!
//! A substepped 2D arcade physics core for console and grid-based games.
//!
//! ## Features
//!
//! - **AABB bodies**: static and dynamic rectangle bodies tied to entities
//! - **Adaptive substepping**: worst-case displacement bounded to one grid
//!   unit per substep to limit tunneling
//! - **Collision sets**: named group-vs-group overlap checks with optional
//!   callbacks and gating predicates
//! - **Quadtree broad-phase**: region quadtree over body bounds that grows
//!   by doubling as bodies land outside it
//! - **Minimal ECS**: entities with per-type component tables, driven
//!   synchronously by the host loop
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_physics::prelude::*;
//!
//! let mut world = World::new();
//! let mut physics = ArcadePhysics::new(&WorldConfig::default());
//!
//! let player = world.create_entity();
//! world.add_component(player, Position { x: 0.0, y: 0.0 });
//! world.add_component(player, ClippingInfo { x: 0, y: 0, width: 4, height: 4 });
//! world.add_component(player, ObjectId(1));
//! physics.add_dynamic_body(&mut world, player).unwrap();
//!
//! // Once per tick:
//! physics.resolve(&mut world, 1.0 / 60.0).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod ecs;
pub mod foundation;
pub mod physics;
pub mod spatial;

pub use config::{ConfigError, WorldConfig};
pub use physics::{ArcadePhysics, PhysicsError};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{ConfigError, WorldConfig},
        ecs::{
            components::{
                BodyKind, BodyOffset, BodySize, ClippingInfo, ObjectId, Position, Velocity,
            },
            Component, Entity, World,
        },
        foundation::{
            math::{Rect, Vec2},
            time::Timer,
        },
        physics::{
            ArcadePhysics, Body, CollisionMode, CollisionSet, CollisionSystem, PhysicsError,
            PhysicsWorld,
        },
        spatial::{QuadTree, QuadTreeConfig},
    };
}
