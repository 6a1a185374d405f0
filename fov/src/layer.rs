use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Categories of obstacles that can stop a sight ray.
    #[derive(
        Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
    )]
    #[serde(transparent)]
    pub struct LayerMask: u32 {
        /// Solid walls.
        const WALL = 1 << 0;
        const DOOR = 1 << 1;
        /// See-through but solid.
        const GLASS = 1 << 2;
        const FOLIAGE = 1 << 3;
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::WALL
    }
}

impl LayerMask {
    /// Whether an obstacle on `layer` stops rays cast with this mask.
    pub fn blocks(self, layer: LayerMask) -> bool {
        self.intersects(layer)
    }
}
