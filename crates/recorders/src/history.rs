use descend_core::{Capabilities, IterationType, Location, Recorder, Request, Stats};
use thiserror::Error;

/// One recorded iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// The location at the start of the iteration.
    pub x: Vec<f64>,

    /// The objective value at `x`.
    pub f: f64,

    /// The normalized gradient norm, or NaN when no gradient is known.
    pub gradient_norm: f64,

    /// What the method asked for next.
    pub request: Request,
}

/// Errors that can occur while recording a history.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history is full ({capacity} records)")]
    Full { capacity: usize },
}

/// A recorder that keeps every iteration in memory.
///
/// With [`with_limit`](History::with_limit) the history refuses to grow past a
/// fixed size, which ends the run with a recorder error.
///
/// # Example
///
/// ```ignore
/// let mut history = History::new().major_only();
/// let solution = minimize(&objective, &x0, &settings, Bfgs::new(), &mut history)?;
/// for record in history.records() {
///     println!("{:?} -> {}", record.x, record.f);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
    major_only: bool,
    limit: Option<usize>,
}

impl History {
    /// Creates an unbounded history of every iteration.
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

    /// Caps the number of stored records.
    #[must_use]
    pub fn with_limit(mut self, capacity: usize) -> Self {
        self.limit = Some(capacity);
        self
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the objective values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.f)
    }

    /// Consumes the history and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Recorder for History {
    type Error = HistoryError;

    fn init(&mut self, _capabilities: &Capabilities) -> Result<(), HistoryError> {
        self.records.clear();
        Ok(())
    }

    fn record(
        &mut self,
        location: &Location,
        request: Request,
        stats: &Stats,
    ) -> Result<(), HistoryError> {
        if self.major_only && request.iteration == IterationType::Minor {
            return Ok(());
        }
        if let Some(capacity) = self.limit.filter(|&c| self.records.len() >= c) {
            return Err(HistoryError::Full { capacity });
        }
        self.records.push(Record {
            x: location.x.clone(),
            f: location.f,
            gradient_norm: stats.gradient_norm,
            request,
        });
        Ok(())
    }
}

/// Lets a caller keep ownership of the history across a run.
impl Recorder for &mut History {
    type Error = HistoryError;

    fn init(&mut self, capabilities: &Capabilities) -> Result<(), HistoryError> {
        (**self).init(capabilities)
    }

    fn record(
        &mut self,
        location: &Location,
        request: Request,
        stats: &Stats,
    ) -> Result<(), HistoryError> {
        (**self).record(location, request, stats)
    }
}
