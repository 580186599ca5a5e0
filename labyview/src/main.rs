//! Offline stand-in for an interactive maze viewer: generates a maze,
//! solves one shortest-path query and writes the wall field, path field and
//! a composite preview as PNGs.
//!
//! Usage: labyview [seed] [width] [height] [padding] [sx sy tx ty] [out-dir]

use std::path::PathBuf;
use std::time::Instant;

use laby_core::Point;
use laby_gen::Backtracker;
use laby_paths::PathField;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let width: i32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(64);
    let height: i32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(32);
    let padding: usize = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(6);

    if width < 1 || height < 1 || padding == 0 {
        eprintln!("Error: width, height and padding must be positive");
        std::process::exit(1);
    }

    let coord = |i: usize, default: i32| args.get(i).and_then(|s| s.parse().ok()).unwrap_or(default);
    // Endpoints are clamped into the grid, the way a pointer position would be.
    let source = Point::new(
        coord(5, 0).clamp(0, width - 1),
        coord(6, 0).clamp(0, height - 1),
    );
    let target = Point::new(
        coord(7, width - 1).clamp(0, width - 1),
        coord(8, height - 1).clamp(0, height - 1),
    );

    let out_dir: PathBuf = args
        .get(9)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));
    std::fs::create_dir_all(&out_dir)?;

    eprintln!("Generating {width}x{height} maze with seed={seed}, padding={padding}");

    let t = Instant::now();
    let maze = Backtracker::new(StdRng::seed_from_u64(seed)).generate(width, height)?;
    eprintln!("  generate {:8.2} ms", t.elapsed().as_secs_f64() * 1000.0);

    let t = Instant::now();
    let mut field = PathField::new(width, height);
    let path = field.astar_path(&maze, source, target);
    eprintln!("  search   {:8.2} ms", t.elapsed().as_secs_f64() * 1000.0);

    let walls = laby_raster::wall_field(&maze, padding);
    let path_pixels = match &path {
        Some(p) => {
            eprintln!("Path {source} -> {target}: {} steps", p.len() - 1);
            laby_raster::path_field(maze.size(), padding, p)
        }
        // Leave the path bitmap cleared rather than drawing anything partial.
        None => {
            eprintln!("No path from {source} to {target}");
            laby_raster::path_field(maze.size(), padding, &[])
        }
    };

    let save_gray = |name: &str, f: &laby_raster::Field| -> Result<(), image::ImageError> {
        let p = out_dir.join(name);
        image::save_buffer(
            &p,
            f.data(),
            f.width() as u32,
            f.height() as u32,
            image::ColorType::L8,
        )?;
        eprintln!("Saved {}", p.display());
        Ok(())
    };

    save_gray("walls.png", &walls)?;
    save_gray("path.png", &path_pixels)?;

    let preview = laby_raster::composite(&walls, &path_pixels);
    let p = out_dir.join("preview.png");
    image::save_buffer(
        &p,
        &preview,
        walls.width() as u32,
        walls.height() as u32,
        image::ColorType::Rgba8,
    )?;
    eprintln!("Saved {}", p.display());

    Ok(())
}
