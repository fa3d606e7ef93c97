use crate::Status;

/// Boxed error type returned by status capabilities.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An objective function to be minimized.
///
/// Only [`Function::value`] is required. An objective advertises additional
/// capabilities by overriding the matching accessor to return `Some(self)`:
///
/// ```
/// use descend_core::{Function, Gradient};
///
/// struct Quadratic;
///
/// impl Function for Quadratic {
///     fn value(&self, x: &[f64]) -> f64 {
///         x.iter().map(|xi| xi * xi).sum()
///     }
///
///     fn as_gradient(&self) -> Option<&dyn Gradient> {
///         Some(self)
///     }
/// }
///
/// impl Gradient for Quadratic {
///     fn gradient(&self, x: &[f64], grad: &mut [f64]) {
///         for (g, xi) in grad.iter_mut().zip(x) {
///             *g = 2.0 * xi;
///         }
///     }
/// }
/// ```
///
/// The driver resolves these accessors once, before the first evaluation.
pub trait Function {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64]) -> f64;

    /// Returns the standalone gradient capability, if any.
    fn as_gradient(&self) -> Option<&dyn Gradient> {
        None
    }

    /// Returns the combined value-and-gradient capability, if any.
    fn as_function_gradient(&self) -> Option<&dyn FunctionGradient> {
        None
    }

    /// Returns the cooperative status capability, if any.
    fn as_statuser(&self) -> Option<&dyn Statuser> {
        None
    }
}

/// Computes the gradient of an objective.
pub trait Gradient {
    /// Writes ∇f(x) into `grad`, which has the same length as `x`.
    fn gradient(&self, x: &[f64], grad: &mut [f64]);
}

/// Computes the objective value and its gradient in a single call.
pub trait FunctionGradient {
    /// Writes ∇f(x) into `grad` and returns f(x).
    fn value_and_gradient(&self, x: &[f64], grad: &mut [f64]) -> f64;
}

/// Reports whether a run should keep going.
///
/// Objectives and methods can expose this to cancel a run cooperatively, for
/// example when an external deadline passes. It is polled once per iteration.
pub trait Statuser {
    /// Returns [`Status::NotTerminated`] to continue, any other status to stop.
    ///
    /// # Errors
    ///
    /// Returns an error to abort the run.
    fn status(&self) -> Result<Status, BoxError>;
}

/// Closures are value-only objectives.
impl<F> Function for F
where
    F: Fn(&[f64]) -> f64,
{
    fn value(&self, x: &[f64]) -> f64 {
        self(x)
    }
}
