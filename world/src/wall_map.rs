use anyhow::bail;
use fov::{LayerMask, Occluder};
use glam::{ivec2, vec2, IVec2, Vec2};

use crate::{AsciiMap, Block, HashMap, Segment};

/// Chars that mark open floor on an ASCII wall map.
const FLOOR: [char; 2] = ['.', '@'];

/// Static obstacle geometry made of solid grid cells and free-standing
/// segments.
///
/// Cell `(x, y)` covers the unit square from `(x, y)` to `(x + 1, y + 1)`.
/// Only the faces between a block and a cell holding something else are
/// turned into segments, interior faces of a wall mass are never hit.
#[derive(Clone, Default, Debug)]
pub struct WallMap {
    cells: HashMap<IVec2, Block>,
    segments: Vec<Segment>,
}

impl WallMap {
    /// Build a wall map from solid cells.
    pub fn from_cells(cells: impl IntoIterator<Item = (IVec2, Block)>) -> Self {
        let cells: HashMap<IVec2, Block> = cells.into_iter().collect();

        // Sort for a stable segment order.
        let mut sorted: Vec<(IVec2, Block)> =
            cells.iter().map(|(&p, &b)| (p, b)).collect();
        sorted.sort_by_key(|(p, _)| (p.y, p.x));

        let mut segments = Vec::new();
        for (p, block) in sorted {
            let o = p.as_vec2();
            let faces = [
                (ivec2(1, 0), vec2(1.0, 0.0), vec2(1.0, 1.0)),
                (ivec2(-1, 0), vec2(0.0, 0.0), vec2(0.0, 1.0)),
                (ivec2(0, 1), vec2(0.0, 1.0), vec2(1.0, 1.0)),
                (ivec2(0, -1), vec2(0.0, 0.0), vec2(1.0, 0.0)),
            ];
            for (dir, a, b) in faces {
                if cells.get(&(p + dir)) != Some(&block) {
                    segments.push(Segment::new(o + a, o + b, block.layer()));
                }
            }
        }

        log::debug!(
            "wall map: {} solid cells, {} faces",
            cells.len(),
            segments.len()
        );

        WallMap { cells, segments }
    }

    /// Build a wall map from an ASCII map.
    ///
    /// Rows are flipped so that the bottom line of the map is y = 0 and y
    /// grows upwards, matching the counterclockwise angle convention of the
    /// sight rays.
    pub fn parse(map: &AsciiMap) -> anyhow::Result<Self> {
        let mut cells = Vec::new();
        for (pos, c) in map.iter() {
            if FLOOR.contains(&c) {
                continue;
            }
            let Ok(block) = Block::try_from(c) else {
                bail!("Bad map char {c:?} at line {}", pos.y + 1);
            };
            cells.push((map.to_world(pos), block));
        }
        Ok(Self::from_cells(cells))
    }

    /// Add a free-standing obstacle face.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn block(&self, cell: IVec2) -> Option<Block> {
        self.cells.get(&cell).copied()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Grid cell containing a world position.
    pub fn cell_at(pos: Vec2) -> IVec2 {
        pos.floor().as_ivec2()
    }

    /// Center point of a grid cell.
    pub fn cell_center(cell: IVec2) -> Vec2 {
        cell.as_vec2() + Vec2::splat(0.5)
    }
}

impl Occluder for WallMap {
    fn cast(
        &self,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: LayerMask,
    ) -> anyhow::Result<Option<Vec2>> {
        let Some(dir) = direction.try_normalize() else {
            bail!("Can't cast a ray with direction {direction}");
        };
        if !origin.is_finite() || max_distance.is_nan() {
            bail!("Bad ray from {origin} with range {max_distance}");
        }

        let nearest = self
            .segments
            .iter()
            .filter(|s| mask.blocks(s.layer))
            .filter_map(|s| s.ray_hit(origin, dir))
            .filter(|&t| t <= max_distance)
            .min_by(|a, b| a.total_cmp(b));

        Ok(nearest.map(|t| origin + dir * t))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use fov::angle_from_vector;
    use quickcheck_macros::quickcheck;

    fn room() -> WallMap {
        WallMap::parse(&AsciiMap::new(
            "
            #####
            #...#
            #.@.#
            #...#
            #####",
        ))
        .unwrap()
    }

    #[test]
    fn faces() {
        let map = room();
        assert_eq!(map.block(ivec2(0, 0)), Some(Block::Stone));
        assert_eq!(map.block(ivec2(2, 2)), None);
        // Outer perimeter and the perimeter of the hollow inside.
        let outer = 5 * 4;
        let inner = 3 * 4;
        assert_eq!(map.segments().len(), outer + inner);
    }

    #[test]
    fn bad_char() {
        assert!(WallMap::parse(&AsciiMap::new("#.x")).is_err());
    }

    #[test]
    fn hits_inner_walls() {
        let map = room();
        let origin = vec2(2.5, 2.5);

        let hit = map
            .cast(origin, vec2(1.0, 0.0), 10.0, LayerMask::WALL)
            .unwrap();
        assert_eq!(hit, Some(vec2(4.0, 2.5)));

        let hit = map
            .cast(origin, vec2(0.0, -3.0), 10.0, LayerMask::WALL)
            .unwrap();
        assert_eq!(hit, Some(vec2(2.5, 1.0)));

        // Out of range.
        let hit = map
            .cast(origin, vec2(1.0, 0.0), 1.0, LayerMask::WALL)
            .unwrap();
        assert_eq!(hit, None);

        // Not on the mask.
        let hit = map
            .cast(origin, vec2(1.0, 0.0), 10.0, LayerMask::GLASS)
            .unwrap();
        assert_eq!(hit, None);
    }

    #[test]
    fn layers() {
        let map = WallMap::parse(&AsciiMap::new("@.|..+..#")).unwrap();
        let origin = vec2(0.5, 0.5);
        let east = vec2(1.0, 0.0);

        let cast = |mask| map.cast(origin, east, 20.0, mask).unwrap();
        assert_eq!(cast(LayerMask::WALL), Some(vec2(8.0, 0.5)));
        let door_mask = LayerMask::WALL | LayerMask::DOOR;
        assert_eq!(cast(door_mask), Some(vec2(5.0, 0.5)));
        assert_eq!(cast(LayerMask::all()), Some(vec2(2.0, 0.5)));
        assert_eq!(cast(LayerMask::FOLIAGE), None);
    }

    #[test]
    fn free_segment() {
        let mut map = WallMap::default();
        map.add_segment(Segment::new(
            vec2(1.0, -5.0),
            vec2(1.0, 5.0),
            LayerMask::WALL,
        ));
        let hit = map
            .cast(Vec2::ZERO, vec2(1.0, 1.0), 10.0, LayerMask::WALL)
            .unwrap()
            .unwrap();
        assert!(hit.distance(vec2(1.0, 1.0)) < 1e-5);
    }

    #[test]
    fn degenerate_ray_fails() {
        let map = room();
        assert!(map
            .cast(vec2(2.5, 2.5), Vec2::ZERO, 10.0, LayerMask::WALL)
            .is_err());
    }

    #[quickcheck]
    fn rays_stay_inside_the_room(tenths: u16) -> bool {
        let deg = (tenths % 3600) as f32 / 10.0;
        let map = room();
        let origin = vec2(2.5, 2.5);
        let dir = fov::vector_from_angle(deg);
        let Ok(Some(hit)) = map.cast(origin, dir, 100.0, LayerMask::WALL)
        else {
            return false;
        };

        // The hit is on the inner wall and in the direction of the ray.
        let on_wall = (1.0 - 1e-4..=4.0 + 1e-4).contains(&hit.x)
            && (1.0 - 1e-4..=4.0 + 1e-4).contains(&hit.y)
            && (hit.x.min(5.0 - hit.x) - 1.0 < 1e-4
                || hit.y.min(5.0 - hit.y) - 1.0 < 1e-4);
        let same_dir = angle_from_vector(hit - origin)
            .map(|a| fov::angular_offset(a, deg).abs() < 1e-2)
            .unwrap_or(false);
        on_wall && same_dir
    }
}
