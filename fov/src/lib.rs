//! Raycast field-of-view meshes.
//!
//! Rays are cast in a full circle around a viewer, each one stopping at the
//! first obstacle the occlusion oracle reports. The boundary points are
//! stitched into a triangle fan around the viewer. Rays inside the facing
//! cone reach the full view distance, the rest only see the immediate
//! surroundings.

pub mod angle;
pub use angle::{angle_from_vector, angular_offset, vector_from_angle};

mod builder;
pub use builder::FovMeshBuilder;

mod config;
pub use config::{ConePolicy, FovConfig, MAX_RAY_COUNT};

mod error;
pub use error::{Error, Result};

mod layer;
pub use layer::LayerMask;

mod layout;
pub use layout::{Layout, Placement, SpriteMask, WorldMesh};

mod mesh;
pub use mesh::{FovMesh, MeshSink};

mod occlusion;
pub use occlusion::{Occluder, Unobstructed};

mod query;
pub use query::FovQuery;

mod sweep;
pub use sweep::Sweep;
