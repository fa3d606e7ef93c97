use thiserror::Error as ThisError;

use super::LineSearchError;

/// Errors that can occur in the gradient-based methods.
#[derive(Debug, ThisError, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("method requires an objective with a gradient")]
    GradientRequired,

    #[error("gradient is not finite")]
    NonFiniteGradient,

    #[error("line search failed: {0}")]
    LineSearch(#[from] LineSearchError),
}
