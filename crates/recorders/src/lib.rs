//! Reusable recorders for local minimization runs.
//!
//! Every type here implements [`Recorder`] and can be passed to
//! `descend_solvers::local::minimize`.
//!
//! # Recorders
//!
//! - [`Printer`] — emits one `tracing` event per iteration
//! - [`History`] — keeps the trajectory in memory for later inspection
//!
//! Both can skip minor iterations with `major_only()`.
//!
//! [`Recorder`]: descend_core::Recorder

mod history;
mod printer;

pub use history::{History, HistoryError, Record};
pub use printer::Printer;
