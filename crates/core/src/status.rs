use std::fmt;

/// Why a run ended, or [`Status::NotTerminated`] while it is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The run should continue.
    NotTerminated,

    /// The objective or method reported success.
    Success,

    /// The objective or method reported failure.
    Failure,

    /// The normalized gradient norm fell to the gradient threshold.
    GradientAbsoluteConvergence,

    /// The objective value fell below the function threshold.
    FunctionAbsoluteConvergence,

    /// The function evaluation budget was used up.
    FunctionEvaluationLimit,

    /// The gradient evaluation budget was used up.
    GradientEvaluationLimit,

    /// The runtime budget was used up.
    RuntimeLimit,

    /// The major iteration budget was used up.
    IterationLimit,

    /// The recorder failed.
    RecorderError,

    /// The method detected convergence by its own criterion.
    MethodConverged,
}

impl Status {
    /// Returns true for every status except [`Status::NotTerminated`].
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        *self != Self::NotTerminated
    }

    /// Returns true if the run ended at a point judged to be a minimum.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(
            self,
            Self::Success
                | Self::GradientAbsoluteConvergence
                | Self::FunctionAbsoluteConvergence
                | Self::MethodConverged
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotTerminated => "not terminated",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::GradientAbsoluteConvergence => "gradient absolute convergence",
            Self::FunctionAbsoluteConvergence => "function absolute convergence",
            Self::FunctionEvaluationLimit => "function evaluation limit",
            Self::GradientEvaluationLimit => "gradient evaluation limit",
            Self::RuntimeLimit => "runtime limit",
            Self::IterationLimit => "iteration limit",
            Self::RecorderError => "recorder error",
            Self::MethodConverged => "method converged",
        };
        f.write_str(text)
    }
}
