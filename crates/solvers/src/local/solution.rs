use descend_core::{Location, Stats, Status};

/// The result of a local minimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Why the run ended.
    pub status: Status,

    /// The location with the lowest objective value seen during the run.
    pub location: Location,

    /// Statistics at the end of the run.
    pub stats: Stats,
}

impl Solution {
    /// Returns the best parameter vector.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.location.x
    }

    /// Returns the objective value at the best parameter vector.
    #[must_use]
    pub fn f(&self) -> f64 {
        self.location.f
    }
}
