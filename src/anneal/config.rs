//! Annealing configuration.

/// Configuration for the annealing refinement phase.
///
/// Cooling runs in two regimes: a slow geometric decay while the temperature
/// is above `cold_threshold`, then an accelerated decay near convergence.
///
/// # Examples
///
/// ```
/// use tape_sched::anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(5_000.0)
///     .with_max_iterations(2_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Refinement stops once the temperature falls below this.
    pub min_temperature: f64,

    /// Geometric cooling factor while temperature > `cold_threshold`.
    pub cooling_rate: f64,

    /// Accelerated cooling factor once temperature <= `cold_threshold`.
    pub cold_cooling_rate: f64,

    /// Temperature at which cooling switches to the accelerated regime.
    pub cold_threshold: f64,

    /// Smallest reversal block, in positions.
    pub min_block_len: usize,

    /// Largest reversal block, in positions. Clamped to the sequence length
    /// at runtime.
    pub max_block_len: usize,

    /// Hard iteration budget.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            min_temperature: 1e-3,
            cooling_rate: 0.995,
            cold_cooling_rate: 0.99,
            cold_threshold: 1.0,
            min_block_len: 10,
            max_block_len: 59,
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_cold_cooling_rate(mut self, rate: f64) -> Self {
        self.cold_cooling_rate = rate;
        self
    }

    pub fn with_cold_threshold(mut self, threshold: f64) -> Self {
        self.cold_threshold = threshold;
        self
    }

    /// Sets the block-length range for the reversal operator.
    pub fn with_block_len_range(mut self, min: usize, max: usize) -> Self {
        self.min_block_len = min;
        self.max_block_len = max;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.cold_cooling_rate <= 0.0 || self.cold_cooling_rate >= 1.0 {
            return Err(format!(
                "cold_cooling_rate must be in (0, 1), got {}",
                self.cold_cooling_rate
            ));
        }
        if self.cold_threshold <= 0.0 {
            return Err("cold_threshold must be positive".into());
        }
        if self.min_block_len < 2 {
            return Err("min_block_len must be at least 2".into());
        }
        if self.max_block_len < self.min_block_len {
            return Err(format!(
                "max_block_len ({}) must not be below min_block_len ({})",
                self.max_block_len, self.min_block_len
            ));
        }
        Ok(())
    }
}
