use descend_core::{BoxError, EvaluationType};
use thiserror::Error as ThisError;

use super::Solution;

/// Errors that can occur during local minimization.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("initial point has no parameters")]
    EmptyInitialPoint,

    #[error("initial objective value {0} is not usable")]
    InvalidInitialValue(f64),

    #[error("initial gradient has length {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("no default method for an objective without a gradient")]
    NoDefaultMethod,

    /// The run failed after it started.
    ///
    /// `partial` holds the best solution obtainable at the point of failure.
    #[error("run aborted with status {}: {source}", .partial.status)]
    Aborted {
        #[source]
        source: Abort,
        partial: Box<Solution>,
    },
}

impl Error {
    /// Returns the partial solution of an aborted run.
    #[must_use]
    pub fn partial(&self) -> Option<&Solution> {
        match self {
            Self::Aborted { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

/// Why a run that already started was aborted.
#[derive(Debug, ThisError)]
pub enum Abort {
    #[error("objective cannot provide a {0} evaluation")]
    CapabilityMismatch(EvaluationType),

    #[error("recorder failed")]
    Recorder(#[source] BoxError),

    #[error("method failed")]
    Method(#[source] BoxError),

    #[error("status check failed")]
    Status(#[source] BoxError),
}
