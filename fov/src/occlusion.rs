use glam::Vec2;

use crate::LayerMask;

/// Ray queries against static obstacle geometry.
pub trait Occluder {
    /// Find the nearest obstacle on one of the `mask` layers along a ray.
    ///
    /// Returns the hit point, or `None` if nothing blocks the ray within
    /// `max_distance` of `origin`.
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> anyhow::Result<Option<Vec2>>;
}

impl<T: Occluder + ?Sized> Occluder for &T {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> anyhow::Result<Option<Vec2>> {
        (**self).cast(origin, direction, max_distance, mask)
    }
}

/// Open space, no ray ever hits anything.
#[derive(Copy, Clone, Default, Debug)]
pub struct Unobstructed;

impl Occluder for Unobstructed {
    fn cast(
        &self,
        _origin: Vec2,
        _direction: Vec2,
        _max_distance: f32,
        _mask: LayerMask,
    ) -> anyhow::Result<Option<Vec2>> {
        Ok(None)
    }
}
