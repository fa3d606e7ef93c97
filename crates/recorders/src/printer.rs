use std::convert::Infallible;

use descend_core::{Capabilities, IterationType, Location, Recorder, Request, Stats};
use tracing::{debug, info};

/// A recorder that reports progress through `tracing`.
///
/// Major iterations are emitted at `INFO` and minor iterations at `DEBUG`, so
/// the subscriber's filter decides how much detail is shown.
#[derive(Debug, Clone, Default)]
pub struct Printer {
    major_only: bool,
    records: usize,
}

impl Printer {
    /// Creates a printer that reports every iteration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips minor iterations.
    #[must_use]
    pub fn major_only(mut self) -> Self {
        self.major_only = true;
        self
    }

    /// Returns the number of iterations reported so far.
    #[must_use]
    pub fn records(&self) -> usize {
        self.records
    }
}

impl Recorder for Printer {
    type Error = Infallible;

    fn init(&mut self, capabilities: &Capabilities) -> Result<(), Infallible> {
        self.records = 0;
        info!(
            gradient = capabilities.gradient,
            function_gradient = capabilities.function_gradient,
            status = capabilities.status,
            "minimization started"
        );
        Ok(())
    }

    fn record(
        &mut self,
        location: &Location,
        request: Request,
        stats: &Stats,
    ) -> Result<(), Infallible> {
        match request.iteration {
            IterationType::Major => info!(
                iteration = stats.major_iterations,
                f = location.f,
                gradient_norm = stats.gradient_norm,
                evaluations = stats.total_evaluations(),
                runtime = ?stats.runtime,
                next = %request.evaluation,
                "major iteration"
            ),
            IterationType::Minor if self.major_only => return Ok(()),
            IterationType::Minor => debug!(
                f = location.f,
                evaluations = stats.total_evaluations(),
                next = %request.evaluation,
                "minor iteration"
            ),
        }
        self.records += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descend_core::EvaluationType;

    fn location() -> Location {
        Location {
            x: vec![1.0],
            f: 2.0,
            gradient: vec![0.5],
        }
    }

    #[test]
    fn counts_every_iteration_by_default() {
        let mut printer = Printer::new();
        printer.init(&Capabilities::default()).unwrap();

        let stats = Stats::default();
        printer
            .record(&location(), Request::major(EvaluationType::Function), &stats)
            .unwrap();
        printer
            .record(&location(), Request::minor(EvaluationType::Function), &stats)
            .unwrap();

        assert_eq!(printer.records(), 2);
    }

    #[test]
    fn major_only_skips_minor_iterations() {
        let mut printer = Printer::new().major_only();

        let stats = Stats::default();
        for request in [
            Request::minor(EvaluationType::FunctionAndGradient),
            Request::major(EvaluationType::FunctionAndGradient),
            Request::minor(EvaluationType::FunctionAndGradient),
        ] {
            printer.record(&location(), request, &stats).unwrap();
        }

        assert_eq!(printer.records(), 1);
    }
}
