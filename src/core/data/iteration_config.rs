use thiserror::Error;

const DEFAULT_DEGREE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("maximum iterations must be between 1 and {max}, got {requested}", max = u32::MAX)]
    InvalidMaxIterations { requested: i64 },
}

/// Parameters shared by every iteration variant.
///
/// Each variant owns its config by value. Once a run starts the config is only
/// read, which is what makes a variant safe to evaluate from many workers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationConfig {
    radius: f64,
    max_iterations: u32,
    degree: f64,
    inv_log_degree: f64,
}

impl IterationConfig {
    #[must_use]
    pub fn new(radius: f64) -> Self {
        let mut config = Self {
            radius,
            max_iterations: 1,
            degree: DEFAULT_DEGREE,
            inv_log_degree: 0.0,
        };
        config.set_degree(DEFAULT_DEGREE);
        config
    }

    /// Bailout radius. Orbits whose modulus exceeds it are considered escaped.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn degree(&self) -> f64 {
        self.degree
    }

    /// `1 / ln(degree)`, used to normalise smooth iteration counts.
    #[must_use]
    pub fn inv_log_degree(&self) -> f64 {
        self.inv_log_degree
    }

    /// Caller must ensure `radius > 0`.
    pub fn set_radius(&mut self, radius: f64) {
        debug_assert!(radius > 0.0, "bailout radius must be positive");
        self.radius = radius;
    }

    pub fn set_max_iterations(&mut self, max_iterations: i64) -> Result<(), ConfigurationError> {
        if max_iterations < 1 {
            return Err(ConfigurationError::InvalidMaxIterations {
                requested: max_iterations,
            });
        }

        self.max_iterations = u32::try_from(max_iterations).map_err(|_| {
            ConfigurationError::InvalidMaxIterations {
                requested: max_iterations,
            }
        })?;

        Ok(())
    }

    /// Caller must ensure `degree > 0` and `degree != 1`.
    pub fn set_degree(&mut self, degree: f64) {
        debug_assert!(degree > 0.0 && degree != 1.0, "degree must be positive and not 1");
        self.degree = degree;
        self.inv_log_degree = 1.0 / degree.ln();
    }

    /// Index of the last step a variant may take: `max_iterations - 1`.
    #[must_use]
    pub(crate) fn last_iteration(&self) -> u32 {
        self.max_iterations - 1
    }
}
