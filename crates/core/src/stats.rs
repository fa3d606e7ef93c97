use std::time::Duration;

/// Counters describing a run so far.
///
/// Owned and updated by the driver. Methods, recorders, and convergence checks
/// only ever see it by shared reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Number of major iterations completed.
    pub major_iterations: usize,

    /// Number of value-only evaluations.
    pub function_evaluations: usize,

    /// Number of gradient-only evaluations.
    pub gradient_evaluations: usize,

    /// Number of combined value-and-gradient evaluations.
    pub function_gradient_evaluations: usize,

    /// Norm of the last known gradient divided by `sqrt(dimension)`.
    ///
    /// NaN when no gradient is known.
    pub gradient_norm: f64,

    /// Wall-clock time since the run started.
    pub runtime: Duration,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            major_iterations: 0,
            function_evaluations: 0,
            gradient_evaluations: 0,
            function_gradient_evaluations: 0,
            gradient_norm: f64::NAN,
            runtime: Duration::ZERO,
        }
    }
}

impl Stats {
    /// Returns the number of evaluations that computed the objective value.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.function_evaluations + self.function_gradient_evaluations
    }

    /// Returns the number of evaluations that computed the gradient.
    #[must_use]
    pub fn gradient_count(&self) -> usize {
        self.gradient_evaluations + self.function_gradient_evaluations
    }

    /// Returns the number of capability invocations of any kind.
    #[must_use]
    pub fn total_evaluations(&self) -> usize {
        self.function_evaluations + self.gradient_evaluations + self.function_gradient_evaluations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_evaluations_count_toward_both() {
        let stats = Stats {
            function_evaluations: 3,
            gradient_evaluations: 2,
            function_gradient_evaluations: 5,
            ..Stats::default()
        };

        assert_eq!(stats.function_count(), 8);
        assert_eq!(stats.gradient_count(), 7);
        assert_eq!(stats.total_evaluations(), 10);
    }

    #[test]
    fn default_has_unknown_gradient_norm() {
        let stats = Stats::default();
        assert!(stats.gradient_norm.is_nan());
        assert_eq!(stats.total_evaluations(), 0);
    }
}
