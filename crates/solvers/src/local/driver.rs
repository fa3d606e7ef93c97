use std::time::Instant;

use descend_core::{
    Function, IterationType, Location, Method, Recorder, Request, Stats, Status, Statuser, floats,
};
use tracing::{debug, trace, warn};

use super::{
    Abort, Error, Invocations, Settings, Solution, convergence, evaluate::evaluate,
    init::initial_location, oracle::Oracle,
};

/// Mutable run state owned by the driver.
struct State {
    location: Location,
    best: Location,
    stats: Stats,
    start: Instant,
}

impl State {
    fn new(location: Location, invocations: Invocations, start: Instant) -> Self {
        let mut state = Self {
            best: location.clone(),
            location,
            stats: Stats::default(),
            start,
        };
        state.stats += invocations;
        state.refresh();
        state
    }

    /// Counts an evaluation and updates the best snapshot.
    fn update(&mut self, invocations: Invocations, iteration: IterationType) {
        self.stats += invocations;
        if iteration == IterationType::Major {
            self.stats.major_iterations += 1;
        }
        self.refresh();
        if self.location.f < self.best.f {
            self.best.clone_from(&self.location);
        }
    }

    fn refresh(&mut self) {
        if self.location.has_gradient() {
            self.stats.gradient_norm = floats::scaled_norm(&self.location.gradient);
        }
        self.stats.runtime = self.start.elapsed();
    }

    fn into_solution(self, status: Status) -> Solution {
        debug!(
            %status,
            f = self.best.f,
            major_iterations = self.stats.major_iterations,
            evaluations = self.stats.total_evaluations(),
            "local minimization finished"
        );
        Solution {
            status,
            location: self.best,
            stats: self.stats,
        }
    }

    fn abort(self, status: Status, source: Abort) -> Error {
        warn!(%status, error = %source, "local minimization aborted");
        Error::Aborted {
            source,
            partial: Box::new(self.into_solution(status)),
        }
    }
}

/// Result of polling the cooperative status capabilities.
enum Poll {
    Continue,
    Stop(Status),
    Failed(Abort),
}

fn poll(statusers: [Option<&dyn Statuser>; 2]) -> Poll {
    for statuser in statusers.into_iter().flatten() {
        match statuser.status() {
            Ok(Status::NotTerminated) => {}
            Ok(status) => return Poll::Stop(status),
            Err(e) => return Poll::Failed(Abort::Status(e)),
        }
    }
    Poll::Continue
}

/// Core driver loop.
pub(super) fn run<F, M, R>(
    function: &F,
    x0: &[f64],
    settings: &Settings,
    mut method: M,
    mut recorder: R,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    M: Method,
    R: Recorder,
{
    let start = Instant::now();

    let oracle = Oracle::detect(function);
    let capabilities = oracle.capabilities();
    debug!(
        dimension = x0.len(),
        gradient = capabilities.gradient,
        function_gradient = capabilities.function_gradient,
        status = capabilities.status,
        "starting local minimization"
    );

    let (location, invocations) = initial_location(&oracle, x0, settings)?;
    let mut state = State::new(location, invocations, start);
    let mut candidate = vec![0.0; x0.len()];

    if let Err(e) = recorder.init(&capabilities) {
        return Err(state.abort(Status::RecorderError, Abort::Recorder(Box::new(e))));
    }

    let mut request: Request = match method.init(&state.location, &capabilities, &mut candidate) {
        Ok(request) => request,
        Err(e) => return Err(state.abort(Status::Failure, Abort::Method(Box::new(e)))),
    };

    loop {
        if let Err(e) = recorder.record(&state.location, request, &state.stats) {
            return Err(state.abort(Status::RecorderError, Abort::Recorder(Box::new(e))));
        }

        let status = convergence::check(&state.location, request.iteration, &state.stats, settings);
        if status.is_terminal() {
            return Ok(state.into_solution(status));
        }

        match poll([oracle.statuser(), method.as_statuser()]) {
            Poll::Continue => {}
            Poll::Stop(status) => return Ok(state.into_solution(status)),
            Poll::Failed(source) => return Err(state.abort(Status::Failure, source)),
        }

        let invocations = match evaluate(
            &oracle,
            request.evaluation,
            &candidate,
            &mut state.location,
        ) {
            Ok(invocations) => invocations,
            Err(source) => return Err(state.abort(Status::NotTerminated, source)),
        };
        trace!(
            evaluation = %request.evaluation,
            major = request.is_major(),
            f = state.location.f,
            "evaluated candidate"
        );
        state.update(invocations, request.iteration);

        request = match method.iterate(&state.location, &mut candidate) {
            Ok(request) => request,
            Err(e) => return Err(state.abort(Status::Failure, Abort::Method(Box::new(e)))),
        };
    }
}
