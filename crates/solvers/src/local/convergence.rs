use descend_core::{IterationType, Location, Stats, Status};

use super::Settings;

/// Decides whether the run should stop before the next evaluation.
///
/// Checks run in a fixed order and the first match wins. Tolerance checks and
/// the iteration limit only apply to major iterations; evaluation and runtime
/// limits apply to every iteration.
///
/// Evaluation limits trip once the count reaches the cap, that is, when the
/// next qualifying evaluation would exceed it.
pub(super) fn check(
    location: &Location,
    iteration: IterationType,
    stats: &Stats,
    settings: &Settings,
) -> Status {
    let major = iteration == IterationType::Major;

    if major && location.has_gradient() && stats.gradient_norm <= settings.gradient_threshold() {
        return Status::GradientAbsoluteConvergence;
    }

    // Literal comparison against the threshold, not against the best value.
    if major && location.f < settings.function_threshold() {
        return Status::FunctionAbsoluteConvergence;
    }

    let max_f = settings.max_function_evaluations();
    if max_f > 0 && stats.function_count() >= max_f {
        return Status::FunctionEvaluationLimit;
    }

    let max_g = settings.max_gradient_evaluations();
    if max_g > 0 && stats.gradient_count() >= max_g {
        return Status::GradientEvaluationLimit;
    }

    let max_runtime = settings.max_runtime();
    if !max_runtime.is_zero() && stats.runtime > max_runtime {
        return Status::RuntimeLimit;
    }

    let max_iters = settings.max_iterations();
    if major && max_iters > 0 && stats.major_iterations >= max_iters {
        return Status::IterationLimit;
    }

    Status::NotTerminated
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use descend_core::IterationType::{Major, Minor};

    fn location(f: f64, gradient: &[f64]) -> Location {
        Location {
            x: vec![0.0; gradient.len().max(1)],
            f,
            gradient: gradient.to_vec(),
        }
    }

    fn stats(gradient_norm: f64) -> Stats {
        Stats {
            gradient_norm,
            ..Stats::default()
        }
    }

    #[test]
    fn gradient_wins_over_function_when_both_hold() {
        let loc = location(-5.0, &[0.0]);
        let settings = Settings::default()
            .with_gradient_threshold(1e-6)
            .and_then(|s| s.with_function_threshold(0.0))
            .unwrap();

        let status = check(&loc, Major, &stats(0.0), &settings);

        assert_eq!(status, Status::GradientAbsoluteConvergence);
    }

    #[test]
    fn tolerances_ignore_minor_iterations() {
        let loc = location(-5.0, &[0.0]);
        let settings = Settings::default().with_function_threshold(0.0).unwrap();

        assert_eq!(
            check(&loc, Minor, &stats(0.0), &settings),
            Status::NotTerminated
        );
    }

    #[test]
    fn gradient_check_needs_a_gradient() {
        let loc = location(1.0, &[]);

        assert_eq!(
            check(&loc, Major, &stats(0.0), &Settings::default()),
            Status::NotTerminated
        );
    }

    #[test]
    fn stale_gradient_never_converges() {
        let loc = location(1.0, &[f64::NAN]);

        assert_eq!(
            check(&loc, Major, &stats(f64::NAN), &Settings::default()),
            Status::NotTerminated
        );
    }

    #[test]
    fn function_threshold_is_strict() {
        let settings = Settings::default().with_function_threshold(1.0).unwrap();

        assert_eq!(
            check(&location(1.0, &[]), Major, &stats(1.0), &settings),
            Status::NotTerminated
        );
        assert_eq!(
            check(&location(0.999, &[]), Major, &stats(1.0), &settings),
            Status::FunctionAbsoluteConvergence
        );
    }

    #[test]
    fn function_limit_counts_combined_evaluations() {
        let loc = location(1.0, &[1.0]);
        let settings = Settings::default().with_max_function_evaluations(5);
        let mut stats = stats(1.0);
        stats.function_evaluations = 2;
        stats.function_gradient_evaluations = 2;

        assert_eq!(check(&loc, Minor, &stats, &settings), Status::NotTerminated);

        stats.function_gradient_evaluations = 3;
        assert_eq!(
            check(&loc, Minor, &stats, &settings),
            Status::FunctionEvaluationLimit
        );
    }

    #[test]
    fn gradient_limit_counts_combined_evaluations() {
        let loc = location(1.0, &[1.0]);
        let settings = Settings::default().with_max_gradient_evaluations(2);
        let mut stats = stats(1.0);
        stats.gradient_evaluations = 1;
        stats.function_evaluations = 10;

        assert_eq!(check(&loc, Minor, &stats, &settings), Status::NotTerminated);

        stats.function_gradient_evaluations = 1;
        assert_eq!(
            check(&loc, Minor, &stats, &settings),
            Status::GradientEvaluationLimit
        );
    }

    #[test]
    fn runtime_limit_applies_to_any_iteration() {
        let loc = location(1.0, &[]);
        let settings = Settings::default().with_max_runtime(Duration::from_millis(10));
        let mut stats = stats(f64::NAN);
        stats.runtime = Duration::from_millis(11);

        assert_eq!(check(&loc, Minor, &stats, &settings), Status::RuntimeLimit);
    }

    #[test]
    fn iteration_limit_is_major_only() {
        let loc = location(1.0, &[]);
        let settings = Settings::default().with_max_iterations(3);
        let mut stats = stats(f64::NAN);
        stats.major_iterations = 3;

        assert_eq!(check(&loc, Minor, &stats, &settings), Status::NotTerminated);
        assert_eq!(check(&loc, Major, &stats, &settings), Status::IterationLimit);
    }

    #[test]
    fn zero_limits_are_unlimited() {
        let loc = location(1.0, &[1.0]);
        let stats = Stats {
            major_iterations: 1_000,
            function_evaluations: 1_000,
            gradient_evaluations: 1_000,
            function_gradient_evaluations: 1_000,
            gradient_norm: 1.0,
            runtime: Duration::from_secs(3_600),
        };

        assert_eq!(
            check(&loc, Major, &stats, &Settings::default()),
            Status::NotTerminated
        );
    }
}
