use glam::Vec2;
use serde::Serialize;

/// Triangle fan covering the visible area.
///
/// Vertex 0 is the apex, vertices `1..=ray_count + 1` are the ray endpoints
/// in counterclockwise order with the last one closing the loop. Triangle
/// `k` is `(0, k + 1, k + 2)`.
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct FovMesh<V> {
    pub vertices: Vec<V>,
    /// Texture coordinates, parallel to `vertices`.
    pub uvs: Vec<Vec2>,
    pub triangles: Vec<[u32; 3]>,
}

impl<V: Copy> FovMesh<V> {
    pub fn with_ray_count(ray_count: usize) -> Self {
        FovMesh {
            vertices: Vec::with_capacity(ray_count + 2),
            uvs: Vec::with_capacity(ray_count + 2),
            triangles: Vec::with_capacity(ray_count),
        }
    }

    pub fn apex(&self) -> Option<V> {
        self.vertices.first().copied()
    }

    /// Ray endpoints around the apex.
    pub fn boundary(&self) -> &[V] {
        self.vertices.get(1..).unwrap_or(&[])
    }

    /// Triangle indices as a flat list.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.triangles.iter().flatten().copied()
    }

    /// Triangle indices for targets that only take 16-bit indices.
    ///
    /// Returns `None` if the mesh has too many vertices to index that way.
    pub fn indices_u16(&self) -> Option<Vec<u16>> {
        self.indices().map(|i| u16::try_from(i).ok()).collect()
    }
}

/// Destination of a finished mesh, typically a renderer-side buffer.
pub trait MeshSink<V> {
    /// Replace any previous contents with the given mesh data.
    fn upload(&mut self, vertices: &[V], uvs: &[Vec2], triangles: &[[u32; 3]]);
}

impl<V: Copy> MeshSink<V> for FovMesh<V> {
    fn upload(&mut self, vertices: &[V], uvs: &[Vec2], triangles: &[[u32; 3]]) {
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        self.uvs.clear();
        self.uvs.extend_from_slice(uvs);
        self.triangles.clear();
        self.triangles.extend_from_slice(triangles);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use glam::vec2;

    #[test]
    fn upload_overwrites() {
        let mut mesh = FovMesh {
            vertices: vec![vec2(9.0, 9.0); 10],
            uvs: vec![Vec2::ONE; 10],
            triangles: vec![[0, 1, 2]; 8],
        };

        mesh.upload(
            &[Vec2::ZERO, vec2(1.0, 0.0), vec2(0.0, 1.0)],
            &[Vec2::ZERO; 3],
            &[[0, 1, 2]],
        );

        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.uvs, vec![Vec2::ZERO; 3]);
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
        assert_eq!(mesh.apex(), Some(Vec2::ZERO));
        assert_eq!(mesh.boundary().len(), 2);
    }

    #[test]
    fn index_widths() {
        let mesh: FovMesh<Vec2> = FovMesh {
            triangles: vec![[0, 1, 2], [0, 2, 3]],
            ..Default::default()
        };
        assert_eq!(mesh.indices().collect::<Vec<_>>(), vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.indices_u16(), Some(vec![0, 1, 2, 0, 2, 3]));

        let huge: FovMesh<Vec2> = FovMesh {
            triangles: vec![[0, 70_000, 70_001]],
            ..Default::default()
        };
        assert_eq!(huge.indices_u16(), None);
    }
}
