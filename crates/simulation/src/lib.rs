//! Monte Carlo projection engine for long-horizon savings plans.
//!
//! Given historical return statistics and deposit/horizon parameters, the
//! projector simulates many independent investment paths year by year and
//! summarizes them into percentile trajectories and time-weighted returns.

pub mod monte_carlo;
pub mod percentile;
pub mod prelude;
pub mod return_model;
pub mod state;
