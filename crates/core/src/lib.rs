//! Core traits and types for local minimization.
//!
//! This crate defines the shared abstractions that the driver, methods, and
//! recorders build on:
//!
//! - [`Function`] — the objective, with optional [`Gradient`],
//!   [`FunctionGradient`], and [`Statuser`] capabilities
//! - [`Method`] — a pluggable local-search strategy that proposes the next
//!   point and the kind of evaluation it needs there
//! - [`Recorder`] — receives the state of the run once per iteration
//! - [`Location`], [`Stats`], [`Status`] — the data model shared by all of the
//!   above
//! - [`floats`] — small vector helpers

mod capabilities;
mod evaluation;
mod function;
mod location;
mod method;
mod recorder;
mod stats;
mod status;

pub mod floats;

pub use capabilities::Capabilities;
pub use evaluation::{EvaluationType, IterationType, Request};
pub use function::{BoxError, Function, FunctionGradient, Gradient, Statuser};
pub use location::Location;
pub use method::Method;
pub use recorder::Recorder;
pub use stats::Stats;
pub use status::Status;
