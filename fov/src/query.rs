use glam::Vec2;

use crate::{angle_from_vector, Error, Result};

/// Per-frame input for a mesh build.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FovQuery {
    /// World-space apex of the fan, the rays start from here.
    pub origin: Vec2,
    /// Direction the viewer is facing, need not be normalized.
    pub facing: Vec2,
    /// World-space origin of the mesh-local frame.
    ///
    /// Mesh vertices are expressed relative to this point. It is usually
    /// the position of the object the mesh is attached to, which can differ
    /// from the eye position in `origin`.
    pub frame: Vec2,
    /// Direction to use when `facing` is degenerate.
    pub fallback: Option<Vec2>,
}

impl FovQuery {
    /// Query with the mesh frame centered at the origin.
    pub fn new(origin: impl Into<Vec2>, facing: impl Into<Vec2>) -> Self {
        let origin = origin.into();
        FovQuery {
            origin,
            facing: facing.into(),
            frame: origin,
            fallback: None,
        }
    }

    /// Express mesh vertices relative to `frame` instead of the origin.
    pub fn in_frame(self, frame: impl Into<Vec2>) -> Self {
        FovQuery {
            frame: frame.into(),
            ..self
        }
    }

    /// Face towards `fallback` if `facing` turns out to be zero.
    pub fn or_facing(self, fallback: impl Into<Vec2>) -> Self {
        FovQuery {
            fallback: Some(fallback.into()),
            ..self
        }
    }

    /// Facing angle in degrees, `[0, 360)`.
    pub fn facing_angle(&self) -> Result<f32> {
        angle_from_vector(self.facing)
            .or_else(|| self.fallback.and_then(angle_from_vector))
            .ok_or(Error::InvalidQuery(self.facing))
    }
}
