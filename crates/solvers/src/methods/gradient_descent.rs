use descend_core::{
    BoxError, Capabilities, EvaluationType, Location, Method, Request, Status, Statuser, floats,
};

use super::{
    Error,
    backtracking::{LineSearch, Trial},
};

/// Steepest descent with a backtracking line search.
///
/// The first search starts from a unit-length step. Each later search starts
/// from twice the previously accepted step, so the step can grow back after
/// a run of contractions.
#[derive(Debug, Clone, Default)]
pub struct GradientDescent {
    search: LineSearch,
    seeded: bool,
    last_step: Option<f64>,
    stationary: bool,
}

impl GradientDescent {
    /// Creates a gradient descent method.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, location: &Location, candidate: &mut [f64]) -> Result<(), Error> {
        self.seeded = true;
        self.search.set_origin(location);

        if location.gradient.iter().any(|g| !g.is_finite()) {
            return Err(Error::NonFiniteGradient);
        }
        let norm = floats::norm(&location.gradient);
        if self.stationary || norm == 0.0 {
            self.stationary = true;
            candidate.copy_from_slice(&location.x);
            return Ok(());
        }

        self.search.aim(|g, d| {
            for (di, gi) in d.iter_mut().zip(g) {
                *di = -gi;
            }
        });

        let step = self.last_step.map_or(1.0 / norm, |step| 2.0 * step);
        self.search.start(step, candidate)?;
        Ok(())
    }
}

impl Method for GradientDescent {
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
        *self = Self {
            search: LineSearch::new(location.dimension()),
            ..Self::default()
        };

        if location.is_gradient_stale() {
            candidate.copy_from_slice(&location.x);
            return Ok(Request::minor(EvaluationType::FunctionAndGradient));
        }

        self.begin(location, candidate)?;
        Ok(Request::major(EvaluationType::FunctionAndGradient))
    }

    fn iterate(&mut self, location: &Location, candidate: &mut [f64]) -> Result<Request, Error> {
        if !self.seeded {
            self.begin(location, candidate)?;
            return Ok(Request::major(EvaluationType::FunctionAndGradient));
        }

        match self.search.next(location, candidate)? {
            Trial::Retry => Ok(Request::minor(EvaluationType::FunctionAndGradient)),
            Trial::Accepted => {
                let step = self.search.step();
                let moved = step * floats::norm(self.search.gradient());
                let x_scale = location.x.iter().fold(1.0_f64, |m, xi| m.max(xi.abs()));
                if moved <= f64::EPSILON * x_scale {
                    self.stationary = true;
                }
                self.last_step = Some(step);
                self.begin(location, candidate)?;
                Ok(Request::major(EvaluationType::FunctionAndGradient))
            }
        }
    }

    fn as_statuser(&self) -> Option<&dyn Statuser> {
        Some(self)
    }
}

impl Statuser for GradientDescent {
    fn status(&self) -> Result<Status, BoxError> {
        if self.stationary {
            Ok(Status::MethodConverged)
        } else {
            Ok(Status::NotTerminated)
        }
    }
}
