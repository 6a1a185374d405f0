use fov::LayerMask;
use glam::Vec2;

/// Overlap allowed past segment ends so rays can't slip through the seam
/// where two faces meet.
const SEAM_SLACK: f32 = 1e-5;

/// Line segment face of an obstacle.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub layer: LayerMask,
}

impl Segment {
    pub fn new(
        a: impl Into<Vec2>,
        b: impl Into<Vec2>,
        layer: LayerMask,
    ) -> Self {
        Segment {
            a: a.into(),
            b: b.into(),
            layer,
        }
    }

    /// Where along the ray `origin + t * dir` the segment is crossed.
    ///
    /// Returns `t`, which is the distance to the hit if `dir` is a unit
    /// vector. Rays running parallel to the segment never hit it.
    pub fn ray_hit(&self, origin: Vec2, dir: Vec2) -> Option<f32> {
        let span = self.b - self.a;

        let cross = dir.perp_dot(span);
        if cross.abs() < f32::EPSILON {
            return None;
        }

        let delta = self.a - origin;
        let t = delta.perp_dot(span) / cross;
        let s = delta.perp_dot(dir) / cross;

        (t >= 0.0 && (-SEAM_SLACK..=1.0 + SEAM_SLACK).contains(&s))
            .then_some(t)
    }
}
