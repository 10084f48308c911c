use horizon_domain::ConfigError;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

/// Source of sampled annual returns for simulated trials.
///
/// The random generator is supplied by the caller, so a fixed seed yields a
/// reproducible sequence of trials.
pub trait ReturnModel {
    /// Draws one annual return per projection year.
    fn sample_years(&self, n_years: usize, rng: &mut StdRng) -> Vec<f64>;
}

/// Annual returns drawn i.i.d. from a Normal(mean, std_dev) distribution.
#[derive(Debug)]
pub struct NormalReturnModel {
    normal: Normal<f64>,
}

impl NormalReturnModel {
    /// Creates a model from historical mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStdDev`] if `std_dev` is negative or not
    /// finite. A standard deviation of exactly zero is valid and degenerates
    /// to a constant return.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, ConfigError> {
        if std_dev < 0.0 {
            return Err(ConfigError::InvalidStdDev { std_dev });
        }
        let normal =
            Normal::new(mean, std_dev).map_err(|_| ConfigError::InvalidStdDev { std_dev })?;
        Ok(Self { normal })
    }
}

impl ReturnModel for NormalReturnModel {
    fn sample_years(&self, n_years: usize, rng: &mut StdRng) -> Vec<f64> {
        (0..n_years).map(|_| self.normal.sample(rng)).collect()
    }
}

/// A fixed sequence of annual returns, cycled if shorter than the horizon.
///
/// Useful for tests and for replaying a known scenario through the projector.
pub struct DeterministicReturns {
    pub returns: Vec<f64>,
}

impl DeterministicReturns {
    #[must_use]
    pub fn new(returns: Vec<f64>) -> Self {
        Self { returns }
    }
}

impl ReturnModel for DeterministicReturns {
    fn sample_years(&self, n_years: usize, _rng: &mut StdRng) -> Vec<f64> {
        self.returns.iter().copied().cycle().take(n_years).collect()
    }
}
