use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use fov::{ConePolicy, FovMeshBuilder, FovQuery};
use glam::{vec2, Vec2};
use world::WallMap;

mod preview;
mod scene;

use scene::Scene;

pub const APP_NAME: &str = "sightline";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Cast a field of view mesh over a wall map")]
struct Args {
    /// Scene file with the map and sight settings.
    scene: PathBuf,

    #[arg(
        long,
        value_name = "X,Y",
        value_parser = parse_vec2,
        allow_hyphen_values = true,
        help = "Override the facing direction"
    )]
    facing: Option<Vec2>,

    #[arg(long, value_name = "N", help = "Override the number of rays")]
    rays: Option<u32>,

    #[arg(long, help = "Use view distance for every ray")]
    uniform: bool,

    #[arg(long, help = "Print the mesh as JSON instead of a map preview")]
    dump: bool,
}

fn parse_vec2(s: &str) -> anyhow::Result<Vec2> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("Expected X,Y, got {s:?}");
    };
    Ok(vec2(x.trim().parse()?, y.trim().parse()?))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();

    let mut scene = Scene::load(&args.scene)?;
    if let Some(facing) = args.facing {
        scene.facing = facing;
    }
    if let Some(rays) = args.rays {
        scene.sight.ray_count = rays;
    }
    if args.uniform {
        scene.sight.cone = ConePolicy::Uniform;
    }

    let map = scene.ascii_map();
    let walls = WallMap::parse(&map)?;
    let origin = scene.origin(&map)?;

    let builder = FovMeshBuilder::new(scene.sight)?;
    // A scene with a zero facing still gets a picture.
    let query = FovQuery::new(origin, scene.facing).or_facing(Vec2::X);
    let mesh = builder.build(&query, &walls)?;

    log::info!(
        "{}: {} rays from {origin}, {} vertices, {} triangles",
        args.scene.display(),
        scene.sight.ray_count,
        mesh.vertices.len(),
        mesh.triangles.len()
    );

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&mesh)?);
    } else {
        print!("{}", preview::render(&map, &walls, &mesh, query.frame, origin));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn vec2_args() {
        assert_eq!(parse_vec2("1,0").unwrap(), vec2(1.0, 0.0));
        assert_eq!(parse_vec2(" -0.5, 2 ").unwrap(), vec2(-0.5, 2.0));
        assert!(parse_vec2("1").is_err());
        assert!(parse_vec2("a,b").is_err());
    }
}
