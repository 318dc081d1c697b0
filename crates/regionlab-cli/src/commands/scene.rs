//! Scene command implementation.
//!
//! Writes the three data sets a renderer needs: region points, Monte Carlo
//! points and the reference polygon, plus the run metrics.

use super::{grid_config, propagate, region_points};
use crate::cli::SceneArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use regionlab_domain::{Point, Polygon};
use regionlab_sampling::PropagationMetrics;
use serde::Serialize;
use std::fs;

/// Renderer input document.
#[derive(Debug, Serialize)]
pub struct Scene {
    /// Grid points inside the feasible region
    pub region: Vec<Point>,
    /// Monte Carlo solutions
    pub monte_carlo: Vec<Point>,
    /// Reference polygon
    pub polygon: Polygon,
    /// Propagation metrics
    pub metrics: PropagationMetrics,
}

/// Build the scene for a configuration.
pub fn build_scene(config: &Config) -> Result<Scene> {
    let region = region_points(&config.grid, config.settings.parallel)?;
    let propagation = propagate(config)?;

    Ok(Scene {
        region,
        monte_carlo: propagation.points,
        polygon: Polygon::reference(),
        metrics: propagation.metrics,
    })
}

/// Execute the scene command.
pub fn execute_scene(args: SceneArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut config = config.clone();
    config.grid = grid_config(&config, &args.grid);
    if let Some(iterations) = args.iterations {
        config.monte_carlo.iterations = iterations;
    }

    let scene = build_scene(&config)?;
    let json = serde_json::to_string(&scene)?;

    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Wrote {} region and {} Monte Carlo points to {}",
                    scene.region.len(),
                    scene.monte_carlo.len(),
                    path.display()
                ))
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_document() {
        let mut config = Config::default();
        config.grid.steps = 32;
        config.monte_carlo.iterations = 200;
        config.monte_carlo.seed = Some(1);

        let scene = build_scene(&config).unwrap();
        assert!(!scene.region.is_empty());
        assert_eq!(scene.monte_carlo.len(), 200);

        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["polygon"].as_array().unwrap().len(), 4);
        assert_eq!(json["polygon"][0]["x"], -4.0);
        assert_eq!(json["metrics"]["samples"], 200);
        assert!(json["region"][0].get("y").is_some());
    }

    #[test]
    fn test_scene_is_reproducible() {
        let mut config = Config::default();
        config.grid.steps = 16;
        config.monte_carlo.iterations = 100;
        config.monte_carlo.seed = Some(5);

        let first = build_scene(&config).unwrap();
        config.settings.parallel = false;
        let second = build_scene(&config).unwrap();

        assert_eq!(first.region, second.region);
        assert_eq!(first.monte_carlo.len(), second.monte_carlo.len());
    }
}
