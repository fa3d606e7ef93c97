use descend_core::{Capabilities, Function, FunctionGradient, Gradient, Statuser};

/// An objective with its optional capabilities resolved once.
pub(super) struct Oracle<'a, F: ?Sized> {
    function: &'a F,
    gradient: Option<&'a dyn Gradient>,
    function_gradient: Option<&'a dyn FunctionGradient>,
    statuser: Option<&'a dyn Statuser>,
}

impl<'a, F: Function + ?Sized> Oracle<'a, F> {
    pub(super) fn detect(function: &'a F) -> Self {
        Self {
            function,
            gradient: function.as_gradient(),
            function_gradient: function.as_function_gradient(),
            statuser: function.as_statuser(),
        }
    }

    pub(super) fn capabilities(&self) -> Capabilities {
        Capabilities {
            gradient: self.gradient.is_some(),
            function_gradient: self.function_gradient.is_some(),
            status: self.statuser.is_some(),
        }
    }

    pub(super) fn value(&self, x: &[f64]) -> f64 {
        self.function.value(x)
    }

    pub(super) fn gradient(&self) -> Option<&'a dyn Gradient> {
        self.gradient
    }

    pub(super) fn function_gradient(&self) -> Option<&'a dyn FunctionGradient> {
        self.function_gradient
    }

    pub(super) fn statuser(&self) -> Option<&'a dyn Statuser> {
        self.statuser
    }
}
