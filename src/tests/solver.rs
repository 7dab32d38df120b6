use nalgebra::Vector3;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rstest::*;

use crate::{
    prelude::{Error, Solver, SolverOpts},
    range::pseudo_ranges,
    tests::{
        gps_sv_positions, init_logger, reference_position, Constellation, REFERENCE_CLOCK_BIAS_M,
    },
};

#[fixture]
fn solver() -> Solver {
    Solver::new(SolverOpts::default()).unwrap()
}

fn assert_solution(solver: &Solver, seed: Vector3<f64>, sv_positions: &[Vector3<f64>]) {
    let truth = reference_position();
    let pr = pseudo_ranges(&truth, sv_positions, REFERENCE_CLOCK_BIAS_M);

    let solution = solver
        .resolve(&seed, sv_positions, &pr)
        .unwrap_or_else(|e| panic!("resolution failed: {}", e));

    assert!(solution.converged, "did not converge from {}", seed);
    assert!(solution.iterations <= 20);

    let err = solution.position - truth;
    for i in 0..3 {
        assert!(err[i].abs() < 1.0E-3, "axis #{} error {}m", i, err[i]);
    }

    let clock_err = (solution.clock_bias_m - REFERENCE_CLOCK_BIAS_M).abs();
    assert!(clock_err < 1.0E-6, "clock error {}m", clock_err);

    for residual in solution.residuals(sv_positions, &pr) {
        assert!(residual.abs() < 1.0E-5, "post-fit residual {}m", residual);
    }
}

#[rstest]
#[case(Vector3::new(3000.0, -2000.0, 1500.0))]
#[case(Vector3::new(-4000.0, 2500.0, -1000.0))]
#[case(Vector3::new(0.0, 0.0, 0.0))]
#[case(Vector3::new(500.0E3, 0.0, 0.0))]
#[case(Vector3::new(500.0E3, -300.0E3, 200.0E3))]
fn gps_geometry(solver: Solver, #[case] offset: Vector3<f64>) {
    init_logger();
    assert_solution(&solver, reference_position() + offset, &gps_sv_positions());
}

#[rstest]
#[case(0, 24, 1)]
#[case(0, 6, 1)]
#[case(0, 24, 6)]
fn constellation_geometry(
    solver: Solver,
    #[case] start: usize,
    #[case] end: usize,
    #[case] step: usize,
) {
    init_logger();
    let svs = Constellation::default()
        .positions(0.0)
        .into_iter()
        .skip(start)
        .take(end - start)
        .step_by(step)
        .collect::<Vec<_>>();

    assert!(svs.len() >= 4);

    let seed = reference_position() + Vector3::new(-4000.0, 2500.0, -1000.0);
    assert_solution(&solver, seed, &svs);
}

#[rstest]
fn random_seeds(solver: Solver) {
    init_logger();
    let mut rng = SmallRng::seed_from_u64(0);
    let svs = gps_sv_positions();

    for _ in 0..32 {
        let offset = Vector3::new(
            rng.random_range(-5000.0..5000.0),
            rng.random_range(-5000.0..5000.0),
            rng.random_range(-5000.0..5000.0),
        );
        assert_solution(&solver, reference_position() + offset, &svs);
    }
}

#[rstest]
fn not_enough_candidates(solver: Solver) {
    let truth = reference_position();
    let svs = gps_sv_positions();
    let pr = pseudo_ranges(&truth, &svs, REFERENCE_CLOCK_BIAS_M);

    for size in 0..4 {
        match solver.resolve(&truth, &svs[..size], &pr[..size]) {
            Err(Error::NotEnoughCandidates(n)) => assert_eq!(n, size),
            Err(e) => panic!("failed with invalid error: {}", e),
            Ok(_) => panic!("should have failed {}x4", size),
        }
    }
}

#[rstest]
fn mismatched_observations(solver: Solver) {
    let truth = reference_position();
    let svs = gps_sv_positions();
    let pr = pseudo_ranges(&truth, &svs, REFERENCE_CLOCK_BIAS_M);

    assert_eq!(
        solver.resolve(&truth, &svs, &pr[..3]),
        Err(Error::MismatchedObservations(4, 3))
    );
}

#[rstest]
fn degenerate_observation_is_skipped(solver: Solver) {
    init_logger();
    let truth = reference_position();
    let seed = truth + Vector3::new(3000.0, 0.0, 0.0);

    // fifth vehicle located on the initial guess
    let mut svs = gps_sv_positions();
    svs.push(seed);

    assert_solution(&solver, seed, &svs);
}

#[rstest]
fn unconverged_estimate_is_returned(solver: Solver) {
    init_logger();
    let truth = reference_position();
    let svs = gps_sv_positions();
    let pr = pseudo_ranges(&truth, &svs, REFERENCE_CLOCK_BIAS_M);

    // earth center: too far away given the step limitation
    let solution = solver.resolve(&Vector3::zeros(), &svs, &pr).unwrap();

    assert!(!solution.converged);
    assert_eq!(solution.iterations, 20);
    assert!(solution.position.iter().all(|x| x.is_finite()));
    assert!(solution.clock_bias_m.is_finite());
}

#[test]
fn position_step_is_limited() {
    let truth = reference_position();
    let svs = gps_sv_positions();
    let pr = pseudo_ranges(&truth, &svs, REFERENCE_CLOCK_BIAS_M);

    let solver = Solver::new(SolverOpts::default().with_max_iterations(1)).unwrap();

    let seed = truth + Vector3::new(500.0E3, 0.0, 0.0);
    let solution = solver.resolve(&seed, &svs, &pr).unwrap();

    assert_eq!(solution.iterations, 1);
    assert!(!solution.converged);

    let step = solution.position - seed;
    for i in 0..3 {
        assert!(step[i].abs() <= 1.0E5 + 1.0E-6, "axis #{} moved by {}m", i, step[i]);
    }
    assert!((step[0] + 1.0E5).abs() < 1.0E-6, "x step should be limited");
}

#[test]
fn invalid_solver_opts() {
    let mut opts = SolverOpts::default();
    opts.max_position_step_m = -1.0;
    assert!(Solver::new(opts).is_err());

    let opts = SolverOpts::default().with_max_iterations(0);
    assert!(Solver::new(opts).is_err());

    let solver = Solver::default();
    assert_eq!(solver.opts(), &SolverOpts::default());
}
