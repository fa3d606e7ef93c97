//! Gradient-based local search methods.
//!
//! Every method here implements [`Method`] and plugs into
//! [`local::minimize`]. Both take steps along a descent direction with an
//! Armijo backtracking line search, requesting a combined value-and-gradient
//! evaluation at each trial point. Trials are reported as minor iterations and
//! accepted points as major iterations.
//!
//! # Methods
//!
//! - [`Bfgs`] — quasi-Newton with an inverse Hessian approximation; the
//!   default for objectives with a gradient
//! - [`GradientDescent`] — steepest descent
//!
//! Both report [`Status::MethodConverged`] through their status capability
//! when the gradient is exactly zero or the accepted step no longer moves `x`.
//!
//! [`Method`]: descend_core::Method
//! [`local::minimize`]: crate::local::minimize
//! [`Status::MethodConverged`]: descend_core::Status::MethodConverged

mod backtracking;
mod bfgs;
mod error;
mod gradient_descent;

pub use backtracking::LineSearchError;
pub use bfgs::Bfgs;
pub use error::Error;
pub use gradient_descent::GradientDescent;
