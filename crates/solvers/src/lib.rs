//! Local minimization driver and the methods that plug into it.
//!
//! - [`local`] — the driver loop: capability detection, evaluation dispatch,
//!   convergence policy, resource limits, best-point tracking
//! - [`methods`] — gradient-based [`Method`] implementations
//!
//! [`Method`]: descend_core::Method

pub mod local;
pub mod methods;
