use fov::FovMesh;
use glam::{ivec2, Vec2, Vec3};
use world::{AsciiMap, WallMap};

/// Draw the visible area on top of the wall map.
///
/// Wall cells keep their map char, the viewer's cell is `@` and open cells
/// whose center falls inside the fan are `.`.
pub fn render(
    map: &AsciiMap,
    walls: &WallMap,
    mesh: &FovMesh<Vec3>,
    frame: Vec2,
    origin: Vec2,
) -> String {
    let eye = WallMap::cell_at(origin);

    let mut ret = String::new();
    for y in 0..map.height() {
        let mut line = String::new();
        for x in 0..map.width() {
            let cell = map.to_world(ivec2(x, y));
            let c = if let Some(block) = walls.block(cell) {
                char::from(block)
            } else if cell == eye {
                '@'
            } else if is_visible(mesh, WallMap::cell_center(cell) - frame) {
                '.'
            } else {
                ' '
            };
            line.push(c);
        }
        ret.push_str(line.trim_end());
        ret.push('\n');
    }
    ret
}

/// Whether a point in mesh-local coordinates is covered by the fan.
///
/// Triangles referring to missing vertices cover nothing.
fn is_visible(mesh: &FovMesh<Vec3>, p: Vec2) -> bool {
    let corner = |i: u32| mesh.vertices.get(i as usize).map(|v| v.truncate());
    mesh.triangles.iter().any(|&[a, b, c]| {
        match (corner(a), corner(b), corner(c)) {
            (Some(a), Some(b), Some(c)) => in_triangle(p, a, b, c),
            _ => false,
        }
    })
}

fn in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
