//! Minimizes Rosenbrock's function and logs the progress.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --example rosenbrock
//! RUST_LOG=debug cargo run --example rosenbrock -- gd
//! ```
//!
//! The optional argument picks the method: `bfgs` (default) or `gd` for
//! gradient descent. At `debug` level every line search trial is shown too.

use std::error::Error;

use descend_core::{Function, FunctionGradient};
use descend_recorders::{History, Printer};
use descend_solvers::{
    local::{Settings, minimize, minimize_default},
    methods::GradientDescent,
};
use tracing_subscriber::EnvFilter;

/// Rosenbrock's banana function, minimum 0 at (1, 1).
struct Rosenbrock;

impl Function for Rosenbrock {
    fn value(&self, x: &[f64]) -> f64 {
        (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
    }

    fn as_function_gradient(&self) -> Option<&dyn FunctionGradient> {
        Some(self)
    }
}

impl FunctionGradient for Rosenbrock {
    fn value_and_gradient(&self, x: &[f64], grad: &mut [f64]) -> f64 {
        let t = x[1] - x[0] * x[0];
        grad[0] = -2.0 * (1.0 - x[0]) - 400.0 * x[0] * t;
        grad[1] = 200.0 * t;
        self.value(x)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let x0 = [-1.2, 1.0];
    let mode = std::env::args().nth(1).unwrap_or_else(|| "bfgs".into());

    let solution = match mode.as_str() {
        "bfgs" => minimize_default(&Rosenbrock, &x0, &Settings::default(), Printer::new())?,
        "gd" => {
            // Steepest descent crawls along the valley, so cap the work.
            let settings = Settings::default().with_max_iterations(20_000);
            let mut history = History::new().major_only();
            let solution = minimize(
                &Rosenbrock,
                &x0,
                &settings,
                GradientDescent::new(),
                &mut history,
            )?;
            println!("recorded {} major iterations", history.records().len());
            solution
        }
        other => {
            eprintln!("Unknown method: {other}");
            eprintln!("Usage: rosenbrock [bfgs|gd]");
            std::process::exit(1);
        }
    };

    println!("status:      {}", solution.status);
    println!("x:           {:?}", solution.x());
    println!("f:           {:e}", solution.f());
    println!("iterations:  {}", solution.stats.major_iterations);
    println!("evaluations: {}", solution.stats.total_evaluations());
    println!("runtime:     {:?}", solution.stats.runtime);
    Ok(())
}
