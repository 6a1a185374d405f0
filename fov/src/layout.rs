use glam::{vec2, Vec2, Vec3};

/// Where a fan vertex sits, handed to a `Layout` to turn into output.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Placement {
    /// Position relative to the mesh-local frame.
    pub local: Vec2,
    /// Position relative to the fan apex.
    pub from_apex: Vec2,
    /// Configured full view distance.
    pub view_distance: f32,
}

/// Output format of the fan.
///
/// The raycasting is the same for every target, layouts only decide what
/// vertex type comes out and how texture coordinates are assigned.
pub trait Layout {
    type Vertex: Copy;

    fn vertex(&self, at: &Placement) -> Self::Vertex;

    fn uv(&self, at: &Placement) -> Vec2;
}

/// Mesh in the local space of the object carrying it, lying on the z = 0
/// plane.
#[derive(Copy, Clone, Default, Debug)]
pub struct WorldMesh {
    /// Map the fan into the unit square, apex at the center and view
    /// distance at the edges. Otherwise all UVs are zero.
    pub textured: bool,
}

impl WorldMesh {
    pub fn textured() -> Self {
        WorldMesh { textured: true }
    }
}

impl Layout for WorldMesh {
    type Vertex = Vec3;

    fn vertex(&self, at: &Placement) -> Vec3 {
        at.local.extend(0.0)
    }

    fn uv(&self, at: &Placement) -> Vec2 {
        if self.textured {
            at.from_apex / (2.0 * at.view_distance) + Vec2::splat(0.5)
        } else {
            Vec2::ZERO
        }
    }
}

/// Geometry override for a square sprite mask texture.
///
/// Vertices are in texture pixels with the apex at the texture center, and
/// view distance maps to `radius` pixels.
#[derive(Copy, Clone, Debug)]
pub struct SpriteMask {
    /// Half the texture width in pixels.
    pub radius: f32,
}

impl SpriteMask {
    /// Mask for a square texture of the given width.
    pub fn for_texture(width: u32) -> Self {
        SpriteMask {
            radius: width as f32 / 2.0,
        }
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.radius, self.radius)
    }
}

impl Layout for SpriteMask {
    type Vertex = Vec2;

    fn vertex(&self, at: &Placement) -> Vec2 {
        at.from_apex / at.view_distance * self.radius + self.center()
    }

    fn uv(&self, at: &Placement) -> Vec2 {
        self.vertex(at) / (2.0 * self.radius)
    }
}
