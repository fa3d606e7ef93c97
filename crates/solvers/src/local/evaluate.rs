use std::ops::AddAssign;

use descend_core::{EvaluationType, Function, FunctionGradient, Gradient, Location, Stats};

use super::{error::Abort, oracle::Oracle};

/// Which objective capabilities fired during an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invocations {
    /// Calls to the plain objective.
    pub function: usize,

    /// Calls to the standalone gradient.
    pub gradient: usize,

    /// Calls to the combined value-and-gradient evaluation.
    pub function_gradient: usize,
}

impl AddAssign<Invocations> for Stats {
    fn add_assign(&mut self, inv: Invocations) {
        self.function_evaluations += inv.function;
        self.gradient_evaluations += inv.gradient;
        self.function_gradient_evaluations += inv.function_gradient;
    }
}

/// The capability calls chosen for a request.
enum Plan<'a> {
    Function,
    Gradient(&'a dyn Gradient),
    FunctionGradient(&'a dyn FunctionGradient),
    FunctionThenGradient(&'a dyn Gradient),
}

/// Evaluates the objective at `x` and writes the result into `location`.
///
/// The capability is chosen before `location` is touched, so a mismatch leaves
/// it unchanged.
pub(super) fn evaluate<F>(
    oracle: &Oracle<'_, F>,
    evaluation: EvaluationType,
    x: &[f64],
    location: &mut Location,
) -> Result<Invocations, Abort>
where
    F: Function + ?Sized,
{
    let plan = match (evaluation, oracle.gradient(), oracle.function_gradient()) {
        (EvaluationType::Function, _, _) => Plan::Function,
        (EvaluationType::Gradient, Some(g), _) => Plan::Gradient(g),
        (_, _, Some(fg)) => Plan::FunctionGradient(fg),
        (EvaluationType::FunctionAndGradient, Some(g), None) => Plan::FunctionThenGradient(g),
        (_, None, None) => return Err(Abort::CapabilityMismatch(evaluation)),
    };

    location.x.copy_from_slice(x);
    let mut inv = Invocations::default();

    match plan {
        Plan::Function => {
            location.f = oracle.value(x);
            location.invalidate_gradient();
            inv.function = 1;
        }
        Plan::Gradient(g) => {
            location.f = f64::NAN;
            g.gradient(x, &mut location.gradient);
            inv.gradient = 1;
        }
        Plan::FunctionGradient(fg) => {
            location.f = fg.value_and_gradient(x, &mut location.gradient);
            inv.function_gradient = 1;
        }
        Plan::FunctionThenGradient(g) => {
            location.f = oracle.value(x);
            g.gradient(x, &mut location.gradient);
            inv.function = 1;
            inv.gradient = 1;
        }
    }

    Ok(inv)
}
