use crate::{
    vector_from_angle, Error, FovConfig, FovMesh, FovQuery, Layout,
    MeshSink, Occluder, Placement, Result, Sweep, WorldMesh,
};

/// Builds field-of-view fans for a fixed configuration.
#[derive(Clone, Debug)]
pub struct FovMeshBuilder<L = WorldMesh> {
    config: FovConfig,
    layout: L,
}

impl FovMeshBuilder<WorldMesh> {
    /// Builder for untextured local-space meshes.
    pub fn new(config: FovConfig) -> Result<Self> {
        Self::with_layout(config, WorldMesh::default())
    }
}

impl<L: Layout> FovMeshBuilder<L> {
    pub fn with_layout(config: FovConfig, layout: L) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "fov builder: {} rays, {}° cone, view {} / surrounding {}",
            config.ray_count,
            config.field_of_view,
            config.view_distance,
            config.surrounding_distance
        );
        Ok(FovMeshBuilder { config, layout })
    }

    pub fn config(&self) -> &FovConfig {
        &self.config
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Cast the rays for one query and assemble the fan.
    pub fn build(
        &self,
        query: &FovQuery,
        occluder: &impl Occluder,
    ) -> Result<FovMesh<L::Vertex>> {
        let sweep = Sweep::new(&self.config, query.facing_angle()?);
        log::trace!(
            "casting fov from {} facing {}°",
            query.origin,
            sweep.facing
        );

        let ray_count = self.config.ray_count as usize;
        let mut mesh = FovMesh::with_ray_count(ray_count);

        self.push(&mut mesh, query, query.origin);

        for (ray, angle) in sweep.angles().enumerate() {
            let dir = vector_from_angle(angle);
            let range = sweep.range(angle);

            let end = occluder
                .cast(query.origin, dir, range, self.config.occlusion_mask)
                .map_err(|source| Error::OracleFailure { ray, source })?
                .unwrap_or(query.origin + dir * range);

            self.push(&mut mesh, query, end);

            if ray > 0 {
                let i = ray as u32;
                mesh.triangles.push([0, i, i + 1]);
            }
        }

        debug_assert_eq!(mesh.vertices.len(), ray_count + 2);
        debug_assert_eq!(mesh.triangles.len(), ray_count);
        Ok(mesh)
    }

    /// Build a mesh and hand it to `sink`.
    ///
    /// The sink is only touched if the whole build succeeds.
    pub fn draw<S: MeshSink<L::Vertex> + ?Sized>(
        &self,
        query: &FovQuery,
        occluder: &impl Occluder,
        sink: &mut S,
    ) -> Result<()> {
        let mesh = self.build(query, occluder)?;
        sink.upload(&mesh.vertices, &mesh.uvs, &mesh.triangles);
        Ok(())
    }

    fn push(
        &self,
        mesh: &mut FovMesh<L::Vertex>,
        query: &FovQuery,
        pos: glam::Vec2,
    ) {
        let at = Placement {
            local: pos - query.frame,
            from_apex: pos - query.origin,
            view_distance: self.config.view_distance,
        };
        mesh.vertices.push(self.layout.vertex(&at));
        mesh.uvs.push(self.layout.uv(&at));
    }
}
