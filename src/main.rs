// main.rs
//
// Runs one overlap query and prints the diagnostics for it.
//
//   reflectrs [scene.json]
//
// Without an argument the built-in heliostat/receiver example is used.
// With `svg-io` the three polygons are also written to `overlap.svg`.

use reflectrs::Scene;
use reflectrs::io::IoError;
use std::env;

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), IoError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let scene = match args.as_slice() {
        [] => Scene::heliostat_example(),
        [path] => load(path)?,
        _ => return Err(IoError::MalformedInput("usage: reflectrs [scene.json]".into())),
    };

    let report = scene.report()?;

    println!("Reflected direction: {:?}", report.reflected_direction.as_slice());
    println!(
        "Target polygon valid: {} area: {}",
        report.target_polygon.is_valid(),
        report.target_polygon.area()
    );
    println!(
        "Projected polygon valid: {} area: {} ({} of 4 corners)",
        report.projected_polygon.is_valid(),
        report.projected_polygon.area(),
        report.projected_polygon.len()
    );
    if report.intersection.is_empty() {
        println!("Intersection: empty, area: 0");
    } else {
        println!(
            "Intersection: {} vertices, area: {} ({:.1}% of projected)",
            report.intersection.polygon.len(),
            report.intersection.area,
            100.0 * report.overlap_fraction()
        );
    }

    #[cfg(feature = "svg-io")]
    {
        std::fs::write("overlap.svg", report.to_svg())?;
        log::info!("wrote overlap.svg");
    }

    Ok(())
}

#[cfg(feature = "json-io")]
fn load(path: &str) -> Result<Scene, IoError> {
    log::info!("loading scene from {}", path);
    reflectrs::io::json::load_scene(path)
}

#[cfg(not(feature = "json-io"))]
fn load(path: &str) -> Result<Scene, IoError> {
    Err(IoError::MalformedInput(format!(
        "cannot read {path}: built without the json-io feature"
    )))
}
