/// A trial point and what is known about the objective there.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// The parameter vector.
    pub x: Vec<f64>,

    /// The objective value at `x`, or NaN if unknown.
    pub f: f64,

    /// The gradient at `x`.
    ///
    /// Empty when the objective has no gradient capability. Entries are NaN
    /// when the gradient is stale, that is, not computed at the current `x`.
    pub gradient: Vec<f64>,
}

impl Location {
    /// Creates a location at `x` with an unknown value.
    ///
    /// When `with_gradient` is true the gradient is allocated and marked stale.
    #[must_use]
    pub fn new(x: Vec<f64>, with_gradient: bool) -> Self {
        let gradient = if with_gradient {
            vec![f64::NAN; x.len()]
        } else {
            Vec::new()
        };
        Self {
            x,
            f: f64::NAN,
            gradient,
        }
    }

    /// Returns the problem dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.x.len()
    }

    /// Returns true if a gradient buffer is present (stale or not).
    #[must_use]
    pub fn has_gradient(&self) -> bool {
        !self.gradient.is_empty()
    }

    /// Returns true if the gradient is missing or was not computed at `x`.
    #[must_use]
    pub fn is_gradient_stale(&self) -> bool {
        self.gradient.is_empty() || self.gradient.iter().any(|g| g.is_nan())
    }

    /// Marks the gradient as stale.
    pub fn invalidate_gradient(&mut self) {
        self.gradient.fill(f64::NAN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_location_is_unknown() {
        let loc = Location::new(vec![1.0, 2.0], true);

        assert_eq!(loc.dimension(), 2);
        assert!(loc.f.is_nan());
        assert!(loc.has_gradient());
        assert!(loc.is_gradient_stale());
    }

    #[test]
    fn value_only_location_has_no_gradient() {
        let loc = Location::new(vec![1.0], false);

        assert!(!loc.has_gradient());
        assert!(loc.is_gradient_stale());
    }

    #[test]
    fn invalidate_marks_every_entry() {
        let mut loc = Location::new(vec![0.0, 0.0], true);
        loc.gradient.copy_from_slice(&[1.0, 2.0]);
        assert!(!loc.is_gradient_stale());

        loc.invalidate_gradient();

        assert!(loc.gradient.iter().all(|g| g.is_nan()));
    }
}
