//! Traces a Brent solve of `cos(x) = x^3`.
//!
//! Run with `RUST_LOG=debug` to see every step:
//!
//! ```text
//! RUST_LOG=debug cargo run -p roots-observers --example trace
//! ```

use roots_core::{Observer, from_fn};
use roots_observers::{History, TraceObserver};
use roots_solvers::equation::bracketed::{Config, Event, Method, make_solver};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = Config::new(1e-12, f64::EPSILON, 100)?.with_debug_precision(12);
    let solver = make_solver(Method::Brentq, config);

    let mut trace = TraceObserver::from_config(&config);
    let mut history = History::new();
    let solution = solver.solve_observed(
        &from_fn(|x| x.cos() - x.powi(3)),
        0.0,
        1.0,
        &mut |event: &Event| {
            trace.observe(event);
            history.observe(event);
        },
    )?;

    println!("{}", solver.report(&solution));
    println!("evaluated x: {:?}", history.x_steps());
    Ok(())
}
