use std::path::Path;

use anyhow::{bail, Context};
use fov::FovConfig;
use glam::{vec2, Vec2};
use serde::Deserialize;
use world::{AsciiMap, WallMap};

/// Scene file contents.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scene {
    #[serde(default)]
    pub sight: FovConfig,
    /// Eye position in world units. Defaults to the center of the `@` cell
    /// on the map.
    pub origin: Option<Vec2>,
    #[serde(default = "default_facing")]
    pub facing: Vec2,
    /// ASCII wall map, see `world::Block` for the chars.
    pub map: String,
}

fn default_facing() -> Vec2 {
    vec2(1.0, 0.0)
}

impl Scene {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let scene = toml::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(scene)
    }

    pub fn ascii_map(&self) -> AsciiMap {
        AsciiMap::new(&self.map)
    }

    /// Where the viewer's eye is.
    pub fn origin(&self, map: &AsciiMap) -> anyhow::Result<Vec2> {
        if let Some(origin) = self.origin {
            return Ok(origin);
        }
        let Some(pos) = map.find('@') else {
            bail!("Scene has no origin and no '@' on the map");
        };
        Ok(WallMap::cell_center(map.to_world(pos)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn minimal_scene() {
        let scene: Scene = toml::from_str(
            r##"
map = """
#####
#.@.#
#####
"""
"##,
        )
        .unwrap();

        assert_eq!(scene.sight, FovConfig::default());
        assert_eq!(scene.facing, vec2(1.0, 0.0));

        let map = scene.ascii_map();
        assert_eq!(scene.origin(&map).unwrap(), vec2(2.5, 1.5));
    }

    #[test]
    fn explicit_values() {
        let scene: Scene = toml::from_str(
            r##"
origin = [1.25, 1.0]
facing = [0.0, -1.0]
map = "#.#"

[sight]
ray-count = 12
cone = "uniform"
"##,
        )
        .unwrap();

        assert_eq!(scene.sight.ray_count, 12);
        assert_eq!(scene.sight.cone, fov::ConePolicy::Uniform);
        assert_eq!(scene.facing, vec2(0.0, -1.0));
        assert_eq!(scene.origin(&scene.ascii_map()).unwrap(), vec2(1.25, 1.0));
    }

    #[test]
    fn missing_origin() {
        let scene: Scene = toml::from_str("map = \"#.#\"").unwrap();
        assert!(scene.origin(&scene.ascii_map()).is_err());
    }
}
