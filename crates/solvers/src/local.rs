//! Sequential local minimization.
//!
//! # Algorithm
//!
//! The driver finds a local minimum of a [`Function`] by alternating between a
//! pluggable [`Method`], which proposes the next point and the kind of
//! evaluation it needs there, and the objective, which is evaluated through
//! whichever capability satisfies that request.
//!
//! Each iteration runs, in order:
//!
//! 1. the [`Recorder`], if one is attached
//! 2. the convergence and limit checks configured in [`Settings`]
//! 3. the cooperative status checks of the objective and the method
//! 4. the evaluation the method requested
//! 5. the statistics update, including best-point tracking
//! 6. the method's next iteration
//!
//! # Best point
//!
//! The returned [`Solution`] holds the lowest objective value seen during the
//! run, which is not necessarily the last location visited.
//!
//! # Default method
//!
//! [`minimize_default`] picks [`Bfgs`] when the objective exposes a gradient.
//! There is no gradient-free default, so a value-only objective fails with
//! [`Error::NoDefaultMethod`].
//!
//! [`Bfgs`]: crate::methods::Bfgs

mod convergence;
mod driver;
mod error;
mod evaluate;
mod init;
mod oracle;
mod settings;
mod solution;


pub use error::{Abort, Error};
pub use evaluate::Invocations;
pub use settings::{InitialData, Settings, SettingsError};
pub use solution::Solution;

use descend_core::{Capabilities, Function, Method, Recorder};

use crate::methods::Bfgs;

/// Minimizes `function` starting from `x0` with the given method.
///
/// The recorder is called once per iteration before anything else happens.
/// See the [module docs](self) for the order of operations.
///
/// # Errors
///
/// Returns a setup error if the initial point, initial value, or initial data are
/// invalid. Returns [`Error::Aborted`], carrying the best solution found so
/// far, if the recorder, method, or a status check fails mid-run or the method
/// requests an evaluation the objective cannot provide.
pub fn minimize<F, M, R>(
    function: &F,
    x0: &[f64],
    settings: &Settings,
    method: M,
    recorder: R,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    M: Method,
    R: Recorder,
{
    driver::run(function, x0, settings, method, recorder)
}

/// Minimizes `function` without a recorder.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op recorder.
///
/// # Errors
///
/// See [`minimize`].
pub fn minimize_unrecorded<F, M>(
    function: &F,
    x0: &[f64],
    settings: &Settings,
    method: M,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    M: Method,
{
    minimize(function, x0, settings, method, ())
}

/// Minimizes `function` with the default method for its capabilities.
///
/// # Errors
///
/// Returns [`Error::NoDefaultMethod`] before any evaluation if the objective
/// exposes no gradient. Otherwise see [`minimize`].
pub fn minimize_default<F, R>(
    function: &F,
    x0: &[f64],
    settings: &Settings,
    recorder: R,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    R: Recorder,
{
    if !Capabilities::detect(function).has_gradient() {
        return Err(Error::NoDefaultMethod);
    }
    minimize(function, x0, settings, Bfgs::default(), recorder)
}
