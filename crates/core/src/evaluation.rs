use std::fmt;

/// The kind of evaluation a method requests at its next candidate point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationType {
    /// Evaluate the objective value only.
    Function,

    /// Evaluate the gradient only.
    Gradient,

    /// Evaluate both the objective value and the gradient.
    FunctionAndGradient,
}

impl fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Function => "function",
            Self::Gradient => "gradient",
            Self::FunctionAndGradient => "function and gradient",
        };
        f.write_str(name)
    }
}

/// Classifies an iteration for convergence and limit accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IterationType {
    /// An accepted iterate of the method.
    Major,

    /// An internal step, such as a line search trial.
    Minor,
}

/// What a method asks the driver to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    /// The evaluation to perform at the candidate point.
    pub evaluation: EvaluationType,

    /// How the method classifies the location it was just given.
    pub iteration: IterationType,
}

impl Request {
    /// Requests `evaluation` after a major iteration.
    #[must_use]
    pub fn major(evaluation: EvaluationType) -> Self {
        Self {
            evaluation,
            iteration: IterationType::Major,
        }
    }

    /// Requests `evaluation` after a minor iteration.
    #[must_use]
    pub fn minor(evaluation: EvaluationType) -> Self {
        Self {
            evaluation,
            iteration: IterationType::Minor,
        }
    }

    /// Returns true if the iteration is major.
    #[must_use]
    pub fn is_major(&self) -> bool {
        self.iteration == IterationType::Major
    }
}
