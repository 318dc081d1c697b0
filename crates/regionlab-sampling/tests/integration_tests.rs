//! Integration tests for regionlab-sampling
//!
//! These tests run the full region and propagation pipelines against the
//! reference workload at reduced size.

use regionlab_domain::{IntervalMatrix, IntervalVector, Point, Polygon, RegionClassifier};
use regionlab_sampling::{
    filter_by_region, par_filter_by_region, GridConfig, GridSampler, JacobiSolver,
    MonteCarloConfig, MonteCarloPropagator, SamplingError, SolverConfig, SolverMode,
};

#[test]
fn test_region_pipeline() {
    let grid = GridSampler::from_config(&GridConfig::preview()).unwrap().sample();
    let classifier = RegionClassifier::reference();

    let region = filter_by_region(&grid, &classifier);
    assert!(!region.is_empty());
    assert!(region.len() < grid.len(), "Region should not cover the whole box");
    assert!(region.contains(&Point::new(0.0, 0.0)), "Origin belongs to the region");
    assert!(region.iter().all(|p| classifier.contains(*p)));

    assert_eq!(region, par_filter_by_region(&grid, &classifier));
}

#[test]
fn test_region_lies_inside_hull() {
    let grid = GridSampler::new(-10.0, 10.0, 128).unwrap().sample();
    let region = filter_by_region(&grid, &RegionClassifier::reference());

    // The region's extreme vertices are (5/3, 4/3) and its rotations
    assert!(region.iter().all(|p| p.x.abs() <= 5.0 / 3.0 && p.y.abs() <= 5.0 / 3.0));
    let hull = Polygon::reference();
    assert!(region.iter().all(|p| hull.contains(*p)));
}

#[test]
fn test_propagation_pipeline() {
    let config = MonteCarloConfig {
        seed: Some(2024),
        ..MonteCarloConfig::preview()
    };
    let propagator = MonteCarloPropagator::new(
        IntervalMatrix::reference(),
        IntervalVector::reference(),
        JacobiSolver::from_config(&SolverConfig::default()),
    );

    let seed = config.seed.unwrap();
    let first = propagator.run_parallel(config.iterations, seed).unwrap();
    let second = propagator.run_parallel(config.iterations, seed).unwrap();

    assert_eq!(first.points.len(), config.iterations);
    assert_eq!(first.points, second.points);
    assert_eq!(first.metrics.converged, config.iterations);
    assert_eq!(first.metrics.non_finite, 0);

    let mean = first.metrics.mean().unwrap();
    assert!(mean.x.abs() < 0.1 && mean.y.abs() < 0.1, "Symmetric inputs give a centered cloud, got {}", mean);
}

#[test]
fn test_strict_mode_surfaces_non_convergence() {
    let matrix = IntervalMatrix::from_bounds([[[0.1, 0.1], [1.0, 1.0]], [[1.0, 1.0], [0.1, 0.1]]]).unwrap();
    let vector = IntervalVector::from_bounds([[1.0, 1.0], [1.0, 1.0]]).unwrap();
    let solver = JacobiSolver::from_config(&SolverConfig {
        max_iterations: 1_000,
        mode: SolverMode::Strict,
        ..SolverConfig::default()
    });

    let result = MonteCarloPropagator::new(matrix, vector, solver).run_parallel(10, 1);
    assert!(matches!(result, Err(SamplingError::Solver(_))));
}

#[test]
fn test_reversed_interval_rejected() {
    let result = IntervalMatrix::from_bounds([[[3.0, 2.0], [0.0, 0.0]], [[0.0, 0.0], [1.0, 1.0]]]);
    assert!(result.is_err());

    let err: SamplingError = result.unwrap_err().into();
    assert!(err.to_string().contains("Domain error"));
}
