use serde::{Deserialize, Serialize};

use crate::{Error, LayerMask, Result};

/// How far rays outside the facing cone reach.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ConePolicy {
    /// Rays within half the field of view from the facing angle reach
    /// `view_distance`, the rest stop at `surrounding_distance`.
    #[default]
    Peripheral,
    /// Every ray reaches `view_distance` and `surrounding_distance` is
    /// ignored.
    Uniform,
}

/// Largest accepted ray count.
///
/// Keeps every fan vertex index well inside `u32` and the mesh buffers at a
/// size that can actually be allocated.
pub const MAX_RAY_COUNT: u32 = 1 << 20;

/// Visibility parameters, set up once and reused for every build.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FovConfig {
    /// Width in degrees of the full-range cone around the facing direction.
    pub field_of_view: f32,
    /// Number of angular steps around the full circle.
    pub ray_count: u32,
    /// Ray length inside the cone.
    pub view_distance: f32,
    /// Ray length outside the cone.
    pub surrounding_distance: f32,
    /// Obstacle categories that stop rays.
    pub occlusion_mask: LayerMask,
    pub cone: ConePolicy,
}

impl Default for FovConfig {
    fn default() -> Self {
        FovConfig {
            field_of_view: 90.0,
            ray_count: 360,
            view_distance: 8.0,
            surrounding_distance: 2.0,
            occlusion_mask: LayerMask::WALL,
            cone: ConePolicy::Peripheral,
        }
    }
}

impl FovConfig {
    /// Angle between two consecutive rays in degrees.
    pub fn angle_step(&self) -> f32 {
        360.0 / self.ray_count as f32
    }

    /// Check that the configuration describes a buildable mesh.
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: String) -> Result<()> {
            Err(Error::InvalidConfiguration(msg))
        }

        if !(3..=MAX_RAY_COUNT).contains(&self.ray_count) {
            return invalid(format!(
                "ray count must be in 3..={MAX_RAY_COUNT}, got {}",
                self.ray_count
            ));
        }

        let fov = self.field_of_view;
        if !fov.is_finite() || fov <= 0.0 || fov > 360.0 {
            return invalid(format!(
                "field of view must be in (0, 360] degrees, got {fov}"
            ));
        }

        let view = self.view_distance;
        if !view.is_finite() || view <= 0.0 {
            return invalid(format!(
                "view distance must be positive, got {view}"
            ));
        }

        let surround = self.surrounding_distance;
        if !surround.is_finite() || surround < 0.0 {
            return invalid(format!(
                "surrounding distance must not be negative, got {surround}"
            ));
        }

        if surround > view && self.cone == ConePolicy::Peripheral {
            log::warn!(
                "surrounding distance {surround} exceeds view distance {view}, \
                 peripheral vision reaches further than the facing cone"
            );
        }

        Ok(())
    }
}
