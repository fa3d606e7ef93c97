use std::time::Duration;

use thiserror::Error;

/// Caller-supplied objective data at the initial point.
///
/// When present in [`Settings`], the driver trusts these values instead of
/// evaluating the objective at the start.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialData {
    /// The objective value at the initial point.
    pub f: f64,

    /// The gradient at the initial point.
    ///
    /// Required when the objective exposes a gradient capability.
    pub gradient: Option<Vec<f64>>,
}

/// Convergence tolerances and resource limits for one run.
///
/// Counts and durations of zero mean unlimited. The threshold setters reject
/// unusable values, so every `Settings` value is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    gradient_threshold: f64,
    function_threshold: f64,
    max_function_evaluations: usize,
    max_gradient_evaluations: usize,
    max_iterations: usize,
    max_runtime: Duration,
    initial: Option<InitialData>,
}

/// Errors that can occur when validating settings.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    #[error("gradient_threshold must be non-negative and not NaN")]
    GradientThreshold,

    #[error("function_threshold must not be NaN")]
    FunctionThreshold,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gradient_threshold: 1e-6,
            function_threshold: f64::NEG_INFINITY,
            max_function_evaluations: 0,
            max_gradient_evaluations: 0,
            max_iterations: 0,
            max_runtime: Duration::ZERO,
            initial: None,
        }
    }
}

impl Settings {
    /// Sets the threshold on the normalized gradient norm.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is NaN or negative.
    pub fn with_gradient_threshold(mut self, threshold: f64) -> Result<Self, SettingsError> {
        if threshold.is_nan() || threshold < 0.0 {
            return Err(SettingsError::GradientThreshold);
        }
        self.gradient_threshold = threshold;
        Ok(self)
    }

    /// Sets the threshold the objective value must fall below.
    ///
    /// Any number is accepted, including infinities.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is NaN.
    pub fn with_function_threshold(mut self, threshold: f64) -> Result<Self, SettingsError> {
        if threshold.is_nan() {
            return Err(SettingsError::FunctionThreshold);
        }
        self.function_threshold = threshold;
        Ok(self)
    }

    /// Limits the number of evaluations that compute the objective value.
    #[must_use]
    pub fn with_max_function_evaluations(mut self, max: usize) -> Self {
        self.max_function_evaluations = max;
        self
    }

    /// Limits the number of evaluations that compute the gradient.
    #[must_use]
    pub fn with_max_gradient_evaluations(mut self, max: usize) -> Self {
        self.max_gradient_evaluations = max;
        self
    }

    /// Limits the number of major iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Limits the wall-clock time of the run.
    #[must_use]
    pub fn with_max_runtime(mut self, max: Duration) -> Self {
        self.max_runtime = max;
        self
    }

    /// Supplies the objective value (and gradient) at the initial point.
    #[must_use]
    pub fn with_initial_data(mut self, initial: InitialData) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Returns the threshold on the normalized gradient norm.
    #[must_use]
    pub fn gradient_threshold(&self) -> f64 {
        self.gradient_threshold
    }

    /// Returns the threshold the objective value must fall below.
    #[must_use]
    pub fn function_threshold(&self) -> f64 {
        self.function_threshold
    }

    /// Returns the function evaluation limit (0 is unlimited).
    #[must_use]
    pub fn max_function_evaluations(&self) -> usize {
        self.max_function_evaluations
    }

    /// Returns the gradient evaluation limit (0 is unlimited).
    #[must_use]
    pub fn max_gradient_evaluations(&self) -> usize {
        self.max_gradient_evaluations
    }

    /// Returns the major iteration limit (0 is unlimited).
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the runtime limit (zero is unlimited).
    #[must_use]
    pub fn max_runtime(&self) -> Duration {
        self.max_runtime
    }

    /// Returns the caller-supplied initial data, if any.
    #[must_use]
    pub fn initial_data(&self) -> Option<&InitialData> {
        self.initial.as_ref()
    }
}
