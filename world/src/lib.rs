//! Static wall geometry that sight rays can be cast against.

mod ascii_map;
pub use ascii_map::AsciiMap;

mod block;
pub use block::Block;

mod segment;
pub use segment::Segment;

mod wall_map;
pub use wall_map::WallMap;

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;
