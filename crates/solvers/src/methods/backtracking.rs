use descend_core::{Location, floats};
use thiserror::Error;

/// Sufficient decrease parameter of the Armijo condition.
const C1: f64 = 1e-4;

/// Factor applied to the step after a rejected trial.
const CONTRACTION: f64 = 0.5;

/// Smallest step, relative to the initial one, before the search gives up.
const MIN_STEP_RATIO: f64 = 1e-16;

/// Errors that can occur during a backtracking line search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LineSearchError {
    #[error("direction is not a descent direction (slope {slope})")]
    NotDescent { slope: f64 },

    #[error("step {step} is not positive and finite")]
    InvalidStep { step: f64 },

    #[error("step shrank to {step} without sufficient decrease")]
    StepTooSmall { step: f64 },
}

/// Outcome of a line search trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Trial {
    /// The trial point satisfies the Armijo condition.
    Accepted,

    /// The trial was rejected and a shorter step was written to the candidate.
    Retry,
}

/// Armijo backtracking along a fixed direction from an evaluated origin.
#[derive(Debug, Clone, Default)]
pub(super) struct LineSearch {
    origin: Vec<f64>,
    f: f64,
    gradient: Vec<f64>,
    direction: Vec<f64>,
    step: f64,
    min_step: f64,
}

impl LineSearch {
    pub(super) fn new(dimension: usize) -> Self {
        Self {
            origin: vec![0.0; dimension],
            f: f64::NAN,
            gradient: vec![0.0; dimension],
            direction: vec![0.0; dimension],
            step: 0.0,
            min_step: 0.0,
        }
    }

    /// Copies the origin of the next search from an evaluated location.
    pub(super) fn set_origin(&mut self, location: &Location) {
        self.origin.clone_from(&location.x);
        self.f = location.f;
        self.gradient.clone_from(&location.gradient);
    }

    pub(super) fn origin(&self) -> &[f64] {
        &self.origin
    }

    pub(super) fn gradient(&self) -> &[f64] {
        &self.gradient
    }

    pub(super) fn step(&self) -> f64 {
        self.step
    }

    /// Sets the search direction from the origin gradient.
    pub(super) fn aim<A>(&mut self, direction_from: A)
    where
        A: FnOnce(&[f64], &mut [f64]),
    {
        direction_from(&self.gradient, &mut self.direction);
    }

    /// Returns the directional derivative along the current direction.
    pub(super) fn slope(&self) -> f64 {
        floats::dot(&self.gradient, &self.direction)
    }

    /// Starts a search with the given initial step and writes the first trial.
    pub(super) fn start(&mut self, step: f64, candidate: &mut [f64]) -> Result<(), LineSearchError> {
        let slope = self.slope();
        if !(slope < 0.0) {
            return Err(LineSearchError::NotDescent { slope });
        }
        if !(step > 0.0 && step.is_finite()) {
            return Err(LineSearchError::InvalidStep { step });
        }
        self.step = step;
        self.min_step = step * MIN_STEP_RATIO;
        floats::add_scaled_to(candidate, &self.origin, step, &self.direction);
        Ok(())
    }

    /// Judges an evaluated trial, shrinking the step if it is rejected.
    ///
    /// The predicted decrease is `gradient · (trial - origin)`, which stays
    /// finite when `step * slope` would overflow.
    pub(super) fn next(
        &mut self,
        trial: &Location,
        candidate: &mut [f64],
    ) -> Result<Trial, LineSearchError> {
        let predicted: f64 = self
            .gradient
            .iter()
            .zip(trial.x.iter().zip(&self.origin))
            .map(|(g, (x, o))| g * (x - o))
            .sum();
        if trial.f <= self.f + C1 * predicted {
            return Ok(Trial::Accepted);
        }

        self.step *= CONTRACTION;
        if self.step < self.min_step {
            return Err(LineSearchError::StepTooSmall { step: self.step });
        }
        floats::add_scaled_to(candidate, &self.origin, self.step, &self.direction);
        Ok(Trial::Retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn steepest(g: &[f64], d: &mut [f64]) {
        for (di, gi) in d.iter_mut().zip(g) {
            *di = -gi;
        }
    }

    /// Origin of f(x) = x² at x = 1.
    fn parabola_search() -> LineSearch {
        let mut search = LineSearch::new(1);
        search.set_origin(&Location {
            x: vec![1.0],
            f: 1.0,
            gradient: vec![2.0],
        });
        search.aim(steepest);
        search
    }

    fn trial(x: f64) -> Location {
        Location {
            x: vec![x],
            f: x * x,
            gradient: vec![2.0 * x],
        }
    }

    #[test]
    fn start_writes_first_trial() {
        let mut search = parabola_search();
        let mut candidate = [0.0];

        search.start(0.25, &mut candidate).unwrap();

        assert_relative_eq!(candidate[0], 0.5);
        assert_relative_eq!(search.slope(), -4.0);
    }

    #[test]
    fn accepts_sufficient_decrease() {
        let mut search = parabola_search();
        let mut candidate = [0.0];
        search.start(0.25, &mut candidate).unwrap();

        let outcome = search.next(&trial(candidate[0]), &mut candidate).unwrap();

        assert_eq!(outcome, Trial::Accepted);
    }

    #[test]
    fn overshoot_is_halved() {
        let mut search = parabola_search();
        let mut candidate = [0.0];
        // Step 1 lands at x = -1, which has no decrease.
        search.start(1.0, &mut candidate).unwrap();
        assert_relative_eq!(candidate[0], -1.0);

        let outcome = search.next(&trial(candidate[0]), &mut candidate).unwrap();

        assert_eq!(outcome, Trial::Retry);
        assert_relative_eq!(search.step(), 0.5);
        assert_relative_eq!(candidate[0], 0.0);
    }

    #[test]
    fn nan_trial_is_rejected() {
        let mut search = parabola_search();
        let mut candidate = [0.0];
        search.start(0.25, &mut candidate).unwrap();

        let mut bad = trial(candidate[0]);
        bad.f = f64::NAN;

        assert_eq!(search.next(&bad, &mut candidate), Ok(Trial::Retry));
    }

    #[test]
    fn ascent_direction_is_rejected() {
        let mut search = parabola_search();
        search.aim(|g, d| d.copy_from_slice(g));

        let err = search.start(1.0, &mut [0.0]).unwrap_err();

        assert!(matches!(err, LineSearchError::NotDescent { .. }));
    }

    #[test]
    fn steep_origin_still_accepts_a_good_step() {
        // f(x) = 1e155 x², whose slope along -g is -4e310.
        let mut search = LineSearch::new(1);
        search.set_origin(&Location {
            x: vec![1.0],
            f: 1e155,
            gradient: vec![2e155],
        });
        search.aim(steepest);
        let mut candidate = [0.0];
        search.start(1.0 / 2e155, &mut candidate).unwrap();
        assert_relative_eq!(candidate[0], 0.0, epsilon = 1e-15);

        let landed = Location {
            x: candidate.to_vec(),
            f: 1e155 * candidate[0] * candidate[0],
            gradient: vec![2e155 * candidate[0]],
        };

        assert_eq!(search.next(&landed, &mut candidate), Ok(Trial::Accepted));
    }

    #[test]
    fn gives_up_when_step_vanishes() {
        let mut search = parabola_search();
        let mut candidate = [0.0];
        search.start(1.0, &mut candidate).unwrap();

        // A trial value that never improves.
        let mut flat = trial(1.0);
        flat.f = 2.0;

        let err = loop {
            match search.next(&flat, &mut candidate) {
                Ok(Trial::Retry) => {}
                Ok(Trial::Accepted) => panic!("should never accept"),
                Err(e) => break e,
            }
        };

        assert!(matches!(err, LineSearchError::StepTooSmall { .. }));
    }
}
