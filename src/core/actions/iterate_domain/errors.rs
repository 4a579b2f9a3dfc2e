use thiserror::Error;

use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::iterate_domain::ports::domain::DomainAccessError;
use crate::core::data::iteration_config::ConfigurationError;
use crate::core::data::results::ResultsError;

#[derive(Debug, Error)]
pub enum IterateDomainError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("the domain must be sampled at least once along each axis, got {cols}x{rows}")]
    DomainShape { rows: usize, cols: usize },

    #[error("domain access fault: {0}")]
    DomainAccess(#[from] DomainAccessError),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("result store error: {0}")]
    Results(#[from] ResultsError),
}
