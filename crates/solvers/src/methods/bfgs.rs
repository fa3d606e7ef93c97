use descend_core::{
    BoxError, Capabilities, EvaluationType, Location, Method, Request, Status, Statuser, floats,
};

use super::{
    Error,
    backtracking::{LineSearch, Trial},
};

/// Broyden–Fletcher–Goldfarb–Shanno quasi-Newton method.
///
/// Maintains a dense approximation of the inverse Hessian, so memory grows
/// with the square of the dimension.
#[derive(Debug, Clone, Default)]
pub struct Bfgs {
    dimension: usize,
    phase: Phase,
    search: LineSearch,
    inv_hessian: Vec<f64>,
    s: Vec<f64>,
    y: Vec<f64>,
    hy: Vec<f64>,
    accepted: usize,
    stationary: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    /// Waiting for the gradient at the initial point.
    #[default]
    Seeding,

    /// Line searching along the current direction.
    Searching,
}

impl Bfgs {
    /// Creates a BFGS method.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, dimension: usize) {
        self.dimension = dimension;
        self.phase = Phase::Seeding;
        self.search = LineSearch::new(dimension);
        self.s = vec![0.0; dimension];
        self.y = vec![0.0; dimension];
        self.hy = vec![0.0; dimension];
        self.accepted = 0;
        self.stationary = false;
        self.reset_inverse_hessian(1.0);
    }

    fn reset_inverse_hessian(&mut self, scale: f64) {
        let n = self.dimension;
        self.inv_hessian = vec![0.0; n * n];
        for i in 0..n {
            self.inv_hessian[i * n + i] = scale;
        }
    }

    /// Starts a line search from an evaluated location.
    fn begin(&mut self, location: &Location, candidate: &mut [f64]) -> Result<(), Error> {
        self.phase = Phase::Searching;
        self.search.set_origin(location);

        if location.gradient.iter().any(|g| !g.is_finite()) {
            return Err(Error::NonFiniteGradient);
        }
        if self.stationary || location.gradient.iter().all(|&g| g == 0.0) {
            self.stationary = true;
            candidate.copy_from_slice(&location.x);
            return Ok(());
        }

        self.aim();
        if !(self.search.slope() < 0.0) {
            self.reset_inverse_hessian(1.0);
            self.aim();
        }

        let step = if self.accepted == 0 {
            1.0 / floats::norm(&location.gradient)
        } else {
            1.0
        };
        self.search.start(step, candidate)?;
        Ok(())
    }

    /// Sets the search direction to -H·g.
    fn aim(&mut self) {
        let n = self.dimension;
        let h = &self.inv_hessian;
        self.search.aim(|g, d| {
            for (di, row) in d.iter_mut().zip(h.chunks_exact(n)) {
                *di = -floats::dot(row, g);
            }
        });
    }

    /// Applies the BFGS update for the step from the search origin to `trial`.
    fn update(&mut self, trial: &Location) {
        let n = self.dimension;
        let origin = self.search.origin();
        let gradient = self.search.gradient();
        for i in 0..n {
            self.s[i] = trial.x[i] - origin[i];
            self.y[i] = trial.gradient[i] - gradient[i];
        }

        let x_scale = origin.iter().fold(1.0_f64, |m, xi| m.max(xi.abs()));
        if floats::norm(&self.s) <= f64::EPSILON * x_scale {
            self.stationary = true;
        }

        let sy = floats::dot(&self.s, &self.y);
        if !(sy > 0.0) {
            // Curvature condition failed; keep the current approximation.
            return;
        }

        if self.accepted == 0 {
            // sᵀy / yᵀy, dividing by ‖y‖ twice so yᵀy never overflows.
            let y_norm = floats::norm(&self.y);
            self.reset_inverse_hessian(sy / y_norm / y_norm);
        }

        for (hyi, row) in self.hy.iter_mut().zip(self.inv_hessian.chunks_exact(n)) {
            *hyi = floats::dot(row, &self.y);
        }
        let yhy = floats::dot(&self.y, &self.hy);
        let rho = 1.0 / sy;

        for i in 0..n {
            for j in 0..n {
                self.inv_hessian[i * n + j] += rho
                    * ((1.0 + rho * yhy) * self.s[i] * self.s[j]
                        - self.hy[i] * self.s[j]
                        - self.s[i] * self.hy[j]);
            }
        }
    }
}

impl Method for Bfgs {
    type Error = Error;

    fn init(
        &mut self,
        location: &Location,
        capabilities: &Capabilities,
        candidate: &mut [f64],
    ) -> Result<Request, Error> {
        if !capabilities.has_gradient() {
            return Err(Error::GradientRequired);
        }
        self.reset(location.dimension());

        if location.is_gradient_stale() {
            candidate.copy_from_slice(&location.x);
            return Ok(Request::minor(EvaluationType::FunctionAndGradient));
        }

        self.begin(location, candidate)?;
        Ok(Request::major(EvaluationType::FunctionAndGradient))
    }

    fn iterate(&mut self, location: &Location, candidate: &mut [f64]) -> Result<Request, Error> {
        if self.phase == Phase::Seeding {
            self.begin(location, candidate)?;
            return Ok(Request::major(EvaluationType::FunctionAndGradient));
        }

        match self.search.next(location, candidate)? {
            Trial::Retry => Ok(Request::minor(EvaluationType::FunctionAndGradient)),
            Trial::Accepted => {
                self.update(location);
                self.accepted += 1;
                self.begin(location, candidate)?;
                Ok(Request::major(EvaluationType::FunctionAndGradient))
            }
        }
    }

    fn as_statuser(&self) -> Option<&dyn Statuser> {
        Some(self)
    }
}

impl Statuser for Bfgs {
    fn status(&self) -> Result<Status, BoxError> {
        if self.stationary {
            Ok(Status::MethodConverged)
        } else {
            Ok(Status::NotTerminated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use descend_core::{Function, FunctionGradient, Gradient};

    use crate::local::{Settings, minimize_unrecorded};

    /// Rosenbrock's function, minimum 0 at (1, 1).
    struct Rosenbrock;

    impl Function for Rosenbrock {
        fn value(&self, x: &[f64]) -> f64 {
            (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
        }

        fn as_function_gradient(&self) -> Option<&dyn FunctionGradient> {
            Some(self)
        }
    }

    impl FunctionGradient for Rosenbrock {
        fn value_and_gradient(&self, x: &[f64], grad: &mut [f64]) -> f64 {
            let t = x[1] - x[0] * x[0];
            grad[0] = -2.0 * (1.0 - x[0]) - 400.0 * x[0] * t;
            grad[1] = 200.0 * t;
            self.value(x)
        }
    }

    /// Ill-conditioned quadratic with only a standalone gradient.
    struct Elliptic;

    impl Function for Elliptic {
        fn value(&self, x: &[f64]) -> f64 {
            x[0] * x[0] + 25.0 * x[1] * x[1]
        }

        fn as_gradient(&self) -> Option<&dyn Gradient> {
            Some(self)
        }
    }

    impl Gradient for Elliptic {
        fn gradient(&self, x: &[f64], grad: &mut [f64]) {
            grad[0] = 2.0 * x[0];
            grad[1] = 50.0 * x[1];
        }
    }

    #[test]
    fn minimizes_rosenbrock() {
        let settings = Settings::default().with_gradient_threshold(1e-8).unwrap();

        let solution = minimize_unrecorded(&Rosenbrock, &[-1.2, 1.0], &settings, Bfgs::new())
            .expect("should converge");

        assert!(solution.status.is_converged(), "{}", solution.status);
        assert_abs_diff_eq!(solution.x()[0], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(solution.x()[1], 1.0, epsilon = 1e-5);
    }

    #[test]
    fn seeds_gradient_when_initial_one_is_stale() {
        let mut bfgs = Bfgs::new();
        let caps = Capabilities {
            gradient: true,
            ..Capabilities::default()
        };
        let mut location = Location::new(vec![1.0, 1.0], true);
        location.f = Elliptic.value(&location.x);
        let mut candidate = vec![0.0; 2];

        let request = bfgs.init(&location, &caps, &mut candidate).unwrap();

        assert_eq!(request, Request::minor(EvaluationType::FunctionAndGradient));
        assert_eq!(candidate, location.x);
    }

    #[test]
    fn standalone_gradient_is_enough() {
        let solution =
            minimize_unrecorded(&Elliptic, &[3.0, -2.0], &Settings::default(), Bfgs::new())
                .expect("should converge");

        assert_eq!(solution.status, Status::GradientAbsoluteConvergence);
        assert_abs_diff_eq!(solution.f(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn requires_a_gradient() {
        let mut bfgs = Bfgs::new();
        let location = Location::new(vec![0.0], false);

        let err = bfgs
            .init(&location, &Capabilities::default(), &mut [0.0])
            .unwrap_err();

        assert_eq!(err, Error::GradientRequired);
    }

    #[test]
    fn zero_gradient_reports_method_converged() {
        let mut bfgs = Bfgs::new();
        let caps = Capabilities {
            function_gradient: true,
            ..Capabilities::default()
        };
        let location = Location {
            x: vec![2.0],
            f: 0.0,
            gradient: vec![0.0],
        };
        let mut candidate = vec![0.0];

        bfgs.init(&location, &caps, &mut candidate).unwrap();

        assert_eq!(candidate, vec![2.0]);
        assert_eq!(bfgs.status().unwrap(), Status::MethodConverged);
    }

    #[test]
    fn non_finite_gradient_is_an_error() {
        let mut bfgs = Bfgs::new();
        let caps = Capabilities {
            function_gradient: true,
            ..Capabilities::default()
        };
        let location = Location {
            x: vec![0.0, 0.0],
            f: 1.0,
            gradient: vec![1.0, f64::INFINITY],
        };

        let err = bfgs.init(&location, &caps, &mut [0.0, 0.0]).unwrap_err();

        assert_eq!(err, Error::NonFiniteGradient);
    }
}
