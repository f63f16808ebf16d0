//! Collision set registry types
//!
//! A collision set names two collections of game objects whose cross
//! product is tested for overlap every substep. Registration shapes
//! (single object, object + group, group + group, arbitrary sequences)
//! all normalize into the same two collections — pass `[id]` for a single
//! object.

use crate::ecs::components::ObjectId;

/// How a detected overlap is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionMode {
    /// Report the overlap only; positions are never changed. Suits
    /// triggers and pickups.
    DetectOnly,

    /// Report the overlap and roll back the offending substep for both
    /// sides if either is dynamic.
    DetectAndSeparate,
}

/// Callback invoked with the correlation ids of two overlapping objects
pub type CollideCallback = Box<dyn FnMut(ObjectId, ObjectId)>;

/// Predicate deciding whether [`CollideCallback`] fires for a detected
/// overlap
///
/// Gates only the callback; detection and separation always run.
pub type ProcessCallback = Box<dyn FnMut(ObjectId, ObjectId) -> bool>;

/// A registered pair of object groups mutually tested each tick
pub struct CollisionSet {
    mode: CollisionMode,
    objects_a: Vec<ObjectId>,
    objects_b: Vec<ObjectId>,
    on_collide: Option<CollideCallback>,
    should_process: Option<ProcessCallback>,
}

impl CollisionSet {
    /// Create a set testing every member of `objects_a` against every
    /// member of `objects_b`
    pub fn new(
        mode: CollisionMode,
        objects_a: impl IntoIterator<Item = ObjectId>,
        objects_b: impl IntoIterator<Item = ObjectId>,
    ) -> Self {
        Self {
            mode,
            objects_a: objects_a.into_iter().collect(),
            objects_b: objects_b.into_iter().collect(),
            on_collide: None,
            should_process: None,
        }
    }

    /// Create a set testing every member of a group against every other
    ///
    /// Both sides hold the same collection, so each physical overlap is
    /// reported in both orderings.
    pub fn within(mode: CollisionMode, objects: impl IntoIterator<Item = ObjectId>) -> Self {
        let objects: Vec<ObjectId> = objects.into_iter().collect();
        Self::new(mode, objects.clone(), objects)
    }

    /// Attach a callback fired on each detected overlap
    pub fn with_on_collide(mut self, callback: impl FnMut(ObjectId, ObjectId) + 'static) -> Self {
        self.on_collide = Some(Box::new(callback));
        self
    }

    /// Attach a predicate gating the `on_collide` callback
    pub fn with_should_process(
        mut self,
        predicate: impl FnMut(ObjectId, ObjectId) -> bool + 'static,
    ) -> Self {
        self.should_process = Some(Box::new(predicate));
        self
    }

    /// The set's detection mode
    pub fn mode(&self) -> CollisionMode {
        self.mode
    }

    /// The first object collection
    pub fn objects_a(&self) -> &[ObjectId] {
        &self.objects_a
    }

    /// The second object collection
    pub fn objects_b(&self) -> &[ObjectId] {
        &self.objects_b
    }

    /// Run the callback chain for a detected overlap
    pub(crate) fn fire(&mut self, a: ObjectId, b: ObjectId) {
        let process = match self.should_process.as_mut() {
            Some(predicate) => predicate(a, b),
            None => true,
        };

        if process {
            if let Some(callback) = self.on_collide.as_mut() {
                callback(a, b);
            }
        }
    }
}
