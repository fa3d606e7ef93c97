use std::convert::Infallible;

use crate::{Capabilities, Location, Request, Stats};

/// Receives the state of a run once per iteration.
///
/// Recorders let callers log or collect progress without changing the driver.
/// A failing recorder ends the run with [`Status::RecorderError`].
///
/// Closures automatically implement `Recorder`, and a built-in impl for `()`
/// provides a no-op recorder.
///
/// [`Status::RecorderError`]: crate::Status::RecorderError
pub trait Recorder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first iteration.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the recorder cannot start.
    fn init(&mut self, _capabilities: &Capabilities) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Records the current location and the pending request.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] to end the run.
    fn record(
        &mut self,
        location: &Location,
        request: Request,
        stats: &Stats,
    ) -> Result<(), Self::Error>;
}

/// Blanket implementation for recorder closures.
impl<F, E> Recorder for F
where
    F: FnMut(&Location, Request, &Stats) -> Result<(), E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn record(&mut self, location: &Location, request: Request, stats: &Stats) -> Result<(), E> {
        self(location, request, stats)
    }
}

/// A no-op recorder.
impl Recorder for () {
    type Error = Infallible;

    fn record(&mut self, _: &Location, _: Request, _: &Stats) -> Result<(), Infallible> {
        Ok(())
    }
}
