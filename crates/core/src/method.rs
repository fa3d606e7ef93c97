use crate::{Capabilities, Location, Request, Statuser};

/// A local search strategy driven by the minimization loop.
///
/// The driver owns every [`Location`]. A method only reads the current one and
/// writes the next point it wants evaluated into `candidate`, a buffer with the
/// problem dimension. The returned [`Request`] says which evaluation to
/// perform at `candidate` and whether the location just handed over counts as
/// a major iteration.
pub trait Method {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Starts the method from the initial location.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the method cannot run on this problem, for
    /// example because it needs a gradient the objective does not provide.
    fn init(
        &mut self,
        location: &Location,
        capabilities: &Capabilities,
        candidate: &mut [f64],
    ) -> Result<Request, Self::Error>;

    /// Advances the method after the previous request has been evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the method cannot make progress.
    fn iterate(&mut self, location: &Location, candidate: &mut [f64])
    -> Result<Request, Self::Error>;

    /// Returns the cooperative status capability, if any.
    fn as_statuser(&self) -> Option<&dyn Statuser> {
        None
    }
}
