use crate::Function;

/// The optional capabilities an objective exposes beyond [`Function::value`].
///
/// Computed once at the start of a run and passed to methods and recorders,
/// so nothing downstream has to query the objective again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// The objective exposes a standalone gradient.
    pub gradient: bool,

    /// The objective exposes a combined value-and-gradient evaluation.
    pub function_gradient: bool,

    /// The objective exposes a cooperative status check.
    pub status: bool,
}

impl Capabilities {
    /// Detects which optional capabilities an objective exposes.
    #[must_use]
    pub fn detect<F: Function + ?Sized>(function: &F) -> Self {
        Self {
            gradient: function.as_gradient().is_some(),
            function_gradient: function.as_function_gradient().is_some(),
            status: function.as_statuser().is_some(),
        }
    }

    /// Returns true if either gradient form is available.
    #[must_use]
    pub fn has_gradient(&self) -> bool {
        self.gradient || self.function_gradient
    }
}
