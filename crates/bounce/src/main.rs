//! Bouncing-blocks demo
//!
//! Scatters dynamic blocks inside a walled arena, registers collision sets
//! between the blocks and the walls, and drives the resolution engine at a
//! fixed step while logging what happens. Run with `RUST_LOG=info` (or
//! `debug` for substep detail).

use arcade_physics::foundation::logging;
use arcade_physics::prelude::*;
use rand::Rng;

const ARENA_WIDTH: f32 = 80.0;
const ARENA_HEIGHT: f32 = 25.0;
const BLOCK_COUNT: u32 = 12;
const TICK_SECONDS: f32 = 1.0 / 30.0;
const TICKS: u32 = 600;

/// Spawn helper: entity with placement components and an object id
fn spawn_object(
    world: &mut World,
    id: u32,
    x: f32,
    y: f32,
    width: i32,
    height: i32,
) -> Entity {
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
    world.add_component(entity, ObjectId(id));
    entity
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = WorldConfig {
        initial_width: ARENA_WIDTH,
        initial_height: ARENA_HEIGHT,
        ..WorldConfig::default()
    };
    let mut world = World::new();
    let mut physics = ArcadePhysics::new(&config);
    let mut rng = rand::thread_rng();

    // Arena walls: one static strip per edge.
    let mut next_id = 0;
    let mut wall_ids = Vec::new();
    let wall_rects: [(f32, f32, i32, i32); 4] = [
        (0.0, 0.0, ARENA_WIDTH as i32, 1),
        (0.0, ARENA_HEIGHT - 1.0, ARENA_WIDTH as i32, 1),
        (0.0, 0.0, 1, ARENA_HEIGHT as i32),
        (ARENA_WIDTH - 1.0, 0.0, 1, ARENA_HEIGHT as i32),
    ];
    for (x, y, width, height) in wall_rects {
        let entity = spawn_object(&mut world, next_id, x, y, width, height);
        physics.add_static_body(&mut world, entity)?;
        wall_ids.push(ObjectId(next_id));
        next_id += 1;
    }

    // Dynamic blocks scattered clear of the walls.
    let mut block_ids = Vec::new();
    let mut block_entities = Vec::new();
    for _ in 0..BLOCK_COUNT {
        let x = rng.gen_range(4.0..ARENA_WIDTH - 8.0);
        let y = rng.gen_range(3.0..ARENA_HEIGHT - 6.0);
        let entity = spawn_object(&mut world, next_id, x, y, 2, 2);
        physics.add_dynamic_body(&mut world, entity)?;

        let velocity = world
            .get_component_mut::<Velocity>(entity)
            .expect("dynamic bodies carry a velocity");
        velocity.value = Vec2::new(rng.gen_range(-12.0..12.0), rng.gen_range(-6.0..6.0));

        block_ids.push(ObjectId(next_id));
        block_entities.push(entity);
        next_id += 1;
    }

    log::info!(
        "arena {}x{}, {} blocks, {} walls",
        ARENA_WIDTH,
        ARENA_HEIGHT,
        block_ids.len(),
        wall_ids.len()
    );

    // Blocks bounce off each other and off the walls; wall hits are the
    // interesting event, so only they get a callback.
    physics.add_collision_set(CollisionSet::within(
        CollisionMode::DetectAndSeparate,
        block_ids.clone(),
    ));
    physics.add_collision_set(
        CollisionSet::new(CollisionMode::DetectAndSeparate, block_ids, wall_ids)
            .with_on_collide(|block, wall| {
                log::info!("block {} hit wall {}", block.0, wall.0);
            }),
    );

    let mut timer = Timer::new();
    for tick in 0..TICKS {
        physics.resolve(&mut world, TICK_SECONDS)?;
        timer.update();

        // Game-level response: separation stops a block at the obstacle, the
        // scene layer decides what happens next. Here, blocks bounce.
        for &entity in &block_entities {
            let at = *world
                .get_component::<Position>(entity)
                .expect("blocks keep their position component");
            let velocity = world
                .get_component_mut::<Velocity>(entity)
                .expect("dynamic bodies carry a velocity");

            if (at.x <= 1.0 && velocity.value.x < 0.0)
                || (at.x + 2.0 >= ARENA_WIDTH - 1.0 && velocity.value.x > 0.0)
            {
                velocity.value.x = -velocity.value.x;
            }
            if (at.y <= 1.0 && velocity.value.y < 0.0)
                || (at.y + 2.0 >= ARENA_HEIGHT - 1.0 && velocity.value.y > 0.0)
            {
                velocity.value.y = -velocity.value.y;
            }
        }

        if tick % 150 == 0 {
            let entity = block_entities[0];
            let id = world
                .get_component::<ObjectId>(entity)
                .expect("blocks keep their object id");
            let position = world
                .get_component::<Position>(entity)
                .expect("blocks keep their position component");
            log::info!(
                "tick {}: block {} at ({:.2}, {:.2})",
                tick,
                id.0,
                position.x,
                position.y
            );
        }
    }

    log::info!(
        "simulated {} ticks in {:.2}s of wall time",
        TICKS,
        timer.total_time()
    );
    Ok(())
}
