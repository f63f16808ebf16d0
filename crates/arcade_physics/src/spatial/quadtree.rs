//! Quadtree spatial partitioning structure
//!
//! Divides the region `[0, W) x [0, H)` into hierarchical quadrants for
//! coarse broad-phase queries over body bounds. A node subdivides into 4
//! quadrants when occupancy exceeds a threshold, and a rectangle spanning
//! several quadrants is stored in every leaf it overlaps — so queries
//! return candidates, not exact hits, and callers must still run exact
//! AABB intersection tests.
//!
//! Inserting a body whose right or bottom edge lies outside the region
//! doubles the exceeded dimension(s) until the body fits, then rebuilds
//! the tree and reinserts every previously known body. Doubling amortizes
//! the rebuild cost across insertions.

use crate::ecs::Entity;
use crate::foundation::math::Rect;
use serde::{Deserialize, Serialize};

/// Configuration for quadtree behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadTreeConfig {
    /// Maximum objects per node before subdivision
    pub max_objects_per_node: usize,

    /// Maximum subdivision depth
    pub max_depth: u32,

    /// Minimum quadrant size (prevents excessive subdivision)
    pub min_node_size: f32,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_objects_per_node: 8,
            max_depth: 8,
            min_node_size: 1.0,
        }
    }
}

/// Cell-level overlap test used for placement and queries
///
/// Inclusive on the edges so that a zero-area rectangle still lands in the
/// cells it touches; exactness is the caller's job.
fn overlaps(cell: &Rect, rect: &Rect) -> bool {
    rect.x <= cell.right()
        && rect.right() >= cell.x
        && rect.y <= cell.bottom()
        && rect.bottom() >= cell.y
}

/// Single node in the quadtree hierarchy
#[derive(Debug, Clone)]
struct Node {
    /// Region covered by this node
    bounds: Rect,

    /// Objects stored in this node (if leaf)
    objects: Vec<(Entity, Rect)>,

    /// Child quadrants, None if this is a leaf
    children: Option<Box<[Node; 4]>>,

    /// Depth in the tree (0 = root)
    depth: u32,
}

impl Node {
    fn new(bounds: Rect, depth: u32) -> Self {
        Self {
            bounds,
            objects: Vec::new(),
            children: None,
            depth,
        }
    }

    fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Split this node into 4 quadrants and push its objects down
    fn subdivide(&mut self) {
        let half_width = self.bounds.width * 0.5;
        let half_height = self.bounds.height * 0.5;
        let origin_x = self.bounds.x;
        let origin_y = self.bounds.y;
        let depth = self.depth + 1;

        // Quadrant layout: bit 0 selects the right half, bit 1 the bottom.
        let quadrant = |index: usize| {
            let x = origin_x + if index & 1 != 0 { half_width } else { 0.0 };
            let y = origin_y + if index & 2 != 0 { half_height } else { 0.0 };
            Node::new(Rect::new(x, y, half_width, half_height), depth)
        };

        self.children = Some(Box::new([
            quadrant(0),
            quadrant(1),
            quadrant(2),
            quadrant(3),
        ]));

        let objects = std::mem::take(&mut self.objects);
        if let Some(children) = self.children.as_mut() {
            for (entity, rect) in objects {
                for child in children.iter_mut() {
                    if overlaps(&child.bounds, &rect) {
                        child.objects.push((entity, rect));
                    }
                }
            }
        }
    }

    fn insert(&mut self, entity: Entity, rect: Rect, config: &QuadTreeConfig) {
        if !overlaps(&self.bounds, &rect) {
            return;
        }

        if self.is_leaf() {
            let can_split = self.objects.len() >= config.max_objects_per_node
                && self.depth < config.max_depth
                && self.bounds.width * 0.5 >= config.min_node_size
                && self.bounds.height * 0.5 >= config.min_node_size;

            if !can_split {
                self.objects.push((entity, rect));
                return;
            }

            self.subdivide();
        }

        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                child.insert(entity, rect, config);
            }
        }
    }

    /// Collect every object stored in nodes overlapping the query rect
    fn query(&self, rect: &Rect, results: &mut Vec<Entity>) {
        if !overlaps(&self.bounds, rect) {
            return;
        }

        for (entity, _) in &self.objects {
            results.push(*entity);
        }

        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query(rect, results);
            }
        }
    }
}

/// Quadtree over the region `[0, W) x [0, H)`
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: Node,
    config: QuadTreeConfig,

    /// Flat entry list backing the rebuild-on-growth pass
    entries: Vec<(Entity, Rect)>,
}

impl QuadTree {
    /// Create a new quadtree covering the given region
    pub fn new(width: f32, height: f32, config: QuadTreeConfig) -> Self {
        Self {
            root: Node::new(Rect::new(0.0, 0.0, width, height), 0),
            config,
            entries: Vec::new(),
        }
    }

    /// The region currently covered by the tree
    pub fn region(&self) -> Rect {
        self.root.bounds
    }

    /// Insert an entity with the given bounds, growing the region on demand
    ///
    /// If the bounds' right or bottom edge exceeds the current region, the
    /// exceeded dimension(s) double until the bounds fit, the tree is
    /// rebuilt at the new size, and every previously known entry is
    /// reinserted before the new one.
    pub fn insert(&mut self, entity: Entity, bounds: Rect) {
        let mut width = self.root.bounds.width;
        let mut height = self.root.bounds.height;

        while bounds.right() > width {
            width *= 2.0;
        }
        while bounds.bottom() > height {
            height *= 2.0;
        }

        if width > self.root.bounds.width || height > self.root.bounds.height {
            log::debug!(
                "quadtree region grown from {}x{} to {}x{}",
                self.root.bounds.width,
                self.root.bounds.height,
                width,
                height
            );
            self.root = Node::new(Rect::new(0.0, 0.0, width, height), 0);
            for (existing, rect) in self.entries.clone() {
                self.root.insert(existing, rect, &self.config);
            }
        }

        self.root.insert(entity, bounds, &self.config);
        self.entries.push((entity, bounds));
    }

    /// Query candidate entities whose cells overlap the given bounds
    ///
    /// A coarse filter: cells are larger than individual bodies, so the
    /// result can contain entities that do not actually intersect the
    /// query rectangle.
    pub fn query(&self, bounds: &Rect) -> Vec<Entity> {
        let mut results = Vec::new();
        self.root.query(bounds, &mut results);
        results.sort_unstable_by_key(Entity::id);
        results.dedup();
        results
    }

    /// Number of entries inserted so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
