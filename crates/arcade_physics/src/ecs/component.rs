//! Component trait

/// Marker trait for components
///
/// Implemented by every type stored in a [`super::World`] component table.
pub trait Component: 'static + Send + Sync {}
