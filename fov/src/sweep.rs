use crate::{angular_offset, ConePolicy, FovConfig};

/// Angular layout of the rays for one facing direction.
///
/// The sweep starts at the clockwise edge of the facing cone and goes
/// around the full circle counterclockwise. The last sample lands on the
/// starting angle plus 360 degrees so the fan closes on itself.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Sweep {
    /// Facing angle in degrees, `[0, 360)`.
    pub facing: f32,
    /// First sample angle. Not normalized, can be negative.
    pub start: f32,
    /// Counterclockwise edge of the facing cone.
    pub end: f32,
    /// Degrees between consecutive samples.
    pub step: f32,
    ray_count: u32,
    half_fov: f32,
    view_distance: f32,
    surrounding_distance: f32,
    cone: ConePolicy,
}

/// Slack for samples landing exactly on the cone edge.
const EDGE_TOLERANCE: f32 = 1e-3;

impl Sweep {
    pub fn new(config: &FovConfig, facing: f32) -> Self {
        let half_fov = config.field_of_view / 2.0;
        let start = facing - half_fov;
        Sweep {
            facing,
            start,
            end: start + config.field_of_view,
            step: config.angle_step(),
            ray_count: config.ray_count,
            half_fov,
            view_distance: config.view_distance,
            surrounding_distance: config.surrounding_distance,
            cone: config.cone,
        }
    }

    /// Sample angle for the given ray, `0..=ray_count`.
    pub fn angle(&self, ray: u32) -> f32 {
        // Multiply instead of accumulating steps so errors don't build up
        // over hundreds of rays.
        self.start + ray as f32 * self.step
    }

    /// Iterate all `ray_count + 1` sample angles.
    pub fn angles(&self) -> impl Iterator<Item = f32> {
        let sweep = *self;
        (0..=sweep.ray_count).map(move |i| sweep.angle(i))
    }

    /// Whether the angle falls within the facing cone.
    pub fn in_cone(&self, angle: f32) -> bool {
        angular_offset(angle, self.facing).abs()
            <= self.half_fov + EDGE_TOLERANCE
    }

    /// Maximum ray length at the given angle.
    pub fn range(&self, angle: f32) -> f32 {
        match self.cone {
            ConePolicy::Uniform => self.view_distance,
            ConePolicy::Peripheral if self.in_cone(angle) => {
                self.view_distance
            }
            ConePolicy::Peripheral => self.surrounding_distance,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn config(ray_count: u32) -> FovConfig {
        FovConfig {
            field_of_view: 90.0,
            ray_count,
            view_distance: 10.0,
            surrounding_distance: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn four_rays_facing_east() {
        let sweep = Sweep::new(&config(4), 0.0);
        assert_eq!(sweep.start, -45.0);
        assert_eq!(sweep.end, 45.0);
        assert_eq!(sweep.step, 90.0);

        let angles: Vec<f32> = sweep.angles().collect();
        assert_eq!(angles, vec![-45.0, 45.0, 135.0, 225.0, 315.0]);

        let ranges: Vec<f32> = angles.iter().map(|&a| sweep.range(a)).collect();
        assert_eq!(ranges, vec![10.0, 10.0, 1.0, 1.0, 10.0]);
    }

    #[test]
    fn angles_outlive_the_sweep() {
        fn angles_facing_north(ray_count: u32) -> impl Iterator<Item = f32> {
            Sweep::new(&config(ray_count), 90.0).angles()
        }

        let angles: Vec<f32> = angles_facing_north(4).collect();
        assert_eq!(angles, vec![45.0, 135.0, 225.0, 315.0, 405.0]);
    }

    #[test]
    fn uniform_cone_ignores_surroundings() {
        let sweep = Sweep::new(
            &FovConfig {
                cone: ConePolicy::Uniform,
                ..config(4)
            },
            0.0,
        );
        assert!(sweep.angles().all(|a| sweep.range(a) == 10.0));
    }

    #[test]
    fn cone_wraps_around_zero() {
        // Facing 350, cone spans 305..395.
        let sweep = Sweep::new(&config(36), 350.0);
        assert!(sweep.in_cone(10.0));
        assert!(sweep.in_cone(-10.0));
        assert!(sweep.in_cone(390.0));
        assert!(!sweep.in_cone(50.0));
        assert!(!sweep.in_cone(170.0));
    }

    #[test]
    fn full_circle_cone() {
        let sweep = Sweep::new(
            &FovConfig {
                field_of_view: 360.0,
                ..config(8)
            },
            123.0,
        );
        assert!(sweep.angles().all(|a| sweep.range(a) == 10.0));
    }

    #[quickcheck]
    fn rotation_shifts_every_sample(facing: u16, turn: u16) -> bool {
        let (facing, turn) = ((facing % 360) as f32, (turn % 360) as f32);
        let a = Sweep::new(&config(24), facing);
        let b = Sweep::new(&config(24), facing + turn);

        a.angles()
            .zip(b.angles())
            .all(|(a, b)| angular_offset(b - a, turn).abs() < 1e-3)
    }

    #[quickcheck]
    fn last_sample_closes_the_circle(ray_count: u16, facing: u16) -> bool {
        let ray_count = ray_count as u32 % 1000 + 3;
        let sweep = Sweep::new(&config(ray_count), (facing % 360) as f32);
        let last = sweep.angle(ray_count);
        (last - sweep.start - 360.0).abs() < 1e-2
    }
}
